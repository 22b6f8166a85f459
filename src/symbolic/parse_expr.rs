use crate::symbolic::symbolic_engine::{Expr, ExprError};
use std::f64::consts::PI;
/// a module that turns a String formula into a symbolic expression
///
/// # Example
/// ```rust, ignore
/// use RustedQuad::symbolic::symbolic_engine::Expr;
/// let parsed = Expr::parse_expression("4*r2*pi*(r1**2-x**2)**(1/2)").unwrap();
/// println!("parsed expression {}", parsed);
/// ```
//                  search recursion diagram
//                "r1^2 + 4*r2*pi - sin(x)"          |
//                |       left  | right              |
//                |__________________________________|
//                |     split at rightmost +/-       |
//                |__________________________________|
//                | r1^2 + 4*r2*pi |     sin(x)      |
//                |       |        |        |        |
//                |______\|/_______|________|________|
//                |  split at +    |        |        |
//                |________________|________|________|
//                |  r1^2 | 4*r2*pi|        |        |
//                |_______|_______\|/______\|/_______|
//                |  split at ^ | split at * | inner |
//                  etc...
//
// Splitting at the RIGHTMOST additive / multiplicative operator keeps the
// left-associativity of - and /; the power operator splits at the LEFTMOST
// occurrence because ^ associates to the right.

// Finds the split position among same-precedence operators at bracket depth 0.
// An operator directly preceded by another operator or an opening bracket is
// a sign, not a split point (e.g. the minus in "x^-2" or "2*-3"), and a sign
// inside an exponent-notation literal like "2e-3" belongs to the number.
fn find_rightmost_operator_outside_brackets(
    input: &str,
    operators: &[char],
) -> Option<(usize, char)> {
    let mut bracket_depth = 0;
    let mut last_op_pos = None;
    let mut last_op_char = ' ';
    let mut prev_meaningful = None;
    let mut prev_prev_meaningful: Option<char> = None;

    for (i, c) in input.char_indices() {
        match c {
            '(' => bracket_depth += 1,
            ')' => bracket_depth -= 1,
            _ if bracket_depth == 0 && operators.contains(&c) => {
                let unary_context = matches!(
                    prev_meaningful,
                    None | Some('+') | Some('-') | Some('*') | Some('/') | Some('^') | Some('(')
                );
                let exponent_context = matches!(prev_meaningful, Some('e') | Some('E'))
                    && prev_prev_meaningful.is_some_and(|p| p.is_ascii_digit() || p == '.');
                if !((unary_context || exponent_context) && (c == '+' || c == '-')) {
                    last_op_pos = Some(i);
                    last_op_char = c;
                }
            }
            _ => {}
        }
        if !c.is_whitespace() {
            prev_prev_meaningful = prev_meaningful;
            prev_meaningful = Some(c);
        }
    }

    last_op_pos.map(|pos| (pos, last_op_char))
}

fn find_leftmost_operator_outside_brackets(input: &str, operator: char) -> Option<usize> {
    let mut bracket_depth = 0;
    for (i, c) in input.char_indices() {
        match c {
            '(' => bracket_depth += 1,
            ')' => bracket_depth -= 1,
            _ if bracket_depth == 0 && c == operator => return Some(i),
            _ => {}
        }
    }
    None
}

// position of the ')' matching the '(' at `open`, if any
fn find_pair_to_this_bracket(input: &str, open: usize) -> Option<usize> {
    let mut stack = 0;
    for (i, c) in input.char_indices().skip(open) {
        if c == '(' {
            stack += 1;
        } else if c == ')' {
            stack -= 1;
            if stack == 0 {
                return Some(i);
            }
        }
    }
    None
}

fn parse_node(input: &str) -> Result<Expr, ExprError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(ExprError::Parse("empty expression".to_string()));
    }

    // addition and subtraction
    if let Some((pos, op)) = find_rightmost_operator_outside_brackets(input, &['+', '-']) {
        let left = input[..pos].trim();
        let right = &input[pos + 1..];
        let lhs = parse_node(left)?;
        let rhs = parse_node(right)?;
        return Ok(match op {
            '+' => Expr::Add(Box::new(lhs), Box::new(rhs)),
            _ => Expr::Sub(Box::new(lhs), Box::new(rhs)),
        });
    }

    // leading sign: "-x" parses as (-1) * x
    if let Some(rest) = input.strip_prefix('-') {
        let inner = parse_node(rest)?;
        return Ok(Expr::Mul(Box::new(Expr::Const(-1.0)), Box::new(inner)));
    }
    if let Some(rest) = input.strip_prefix('+') {
        return parse_node(rest);
    }

    // multiplication and division
    if let Some((pos, op)) = find_rightmost_operator_outside_brackets(input, &['*', '/']) {
        let left = input[..pos].trim();
        let right = input[pos + 1..].trim();
        if left.is_empty() || right.is_empty() {
            return Err(ExprError::Parse(format!(
                "operator `{}` is missing an operand in `{}`",
                op, input
            )));
        }
        let lhs = parse_node(left)?;
        let rhs = parse_node(right)?;
        return Ok(match op {
            '*' => Expr::Mul(Box::new(lhs), Box::new(rhs)),
            _ => Expr::Div(Box::new(lhs), Box::new(rhs)),
        });
    }

    // power
    if let Some(pos) = find_leftmost_operator_outside_brackets(input, '^') {
        let left = input[..pos].trim();
        let right = input[pos + 1..].trim();
        if left.is_empty() || right.is_empty() {
            return Err(ExprError::Parse(format!(
                "operator `^` is missing an operand in `{}`",
                input
            )));
        }
        let base = parse_node(left)?;
        let exp = parse_node(right)?;
        return Ok(Expr::Pow(Box::new(base), Box::new(exp)));
    }

    // function call or parenthesised sub-expression spanning the whole input
    if let Some(open) = input.find('(') {
        match find_pair_to_this_bracket(input, open) {
            Some(close) if close == input.len() - 1 => {
                let name = input[..open].trim();
                let inner = parse_node(&input[open + 1..close])?;
                return match name {
                    "" => Ok(inner),
                    "exp" => Ok(Expr::Exp(inner.boxed())),
                    "ln" | "log" => Ok(Expr::Ln(inner.boxed())),
                    "sin" => Ok(Expr::sin(inner.boxed())),
                    "cos" => Ok(Expr::cos(inner.boxed())),
                    "sqrt" => Ok(Expr::Pow(inner.boxed(), Box::new(Expr::Const(0.5)))),
                    other => Err(ExprError::Parse(format!("unknown function `{}`", other))),
                };
            }
            _ => {
                return Err(ExprError::Parse(format!(
                    "unbalanced or misplaced brackets in `{}`",
                    input
                )));
            }
        }
    }
    if input.contains(')') {
        return Err(ExprError::Parse(format!(
            "unbalanced brackets in `{}`",
            input
        )));
    }

    // atom: number, the pi constant or a variable name
    if let Ok(val) = input.parse::<f64>() {
        return Ok(Expr::Const(val));
    }
    if input == "pi" {
        return Ok(Expr::Const(PI));
    }
    let mut chars = input.chars();
    let starts_alpha = chars.next().is_some_and(|c| c.is_ascii_alphabetic());
    if starts_alpha && chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Ok(Expr::Var(input.to_string()));
    }

    Err(ExprError::Parse(format!("cannot parse token `{}`", input)))
}

impl Expr {
    /// Parses a string formula into a symbolic expression.
    ///
    /// Accepts `+ - * / ^` with the usual precedence, the Python-style power
    /// spelling `**`, the functions `exp`, `ln`/`log`, `sin`, `cos`, `sqrt`
    /// and the constant `pi`. Numbers may use exponent notation (`2e-3`).
    /// Everything else alphabetic is a variable.
    pub fn parse_expression(input: &str) -> Result<Expr, ExprError> {
        let normalized = input.replace("**", "^");
        parse_node(&normalized)
    }
}
