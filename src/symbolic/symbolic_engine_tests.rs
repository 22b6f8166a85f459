use crate::symbolic::symbolic_engine::{Expr, ExprError};
use std::f64;
//___________________________________TESTS____________________________________

mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::collections::HashMap;
    use std::f64::consts::PI;

    fn subs(pairs: &[(&str, f64)]) -> HashMap<String, f64> {
        pairs
            .iter()
            .map(|(name, value)| (name.to_string(), *value))
            .collect()
    }

    #[test]
    fn test_add() {
        let expr = Expr::Var("x".to_string()) + Expr::Const(2.0);
        let expected = Expr::Add(
            Box::new(Expr::Var("x".to_string())),
            Box::new(Expr::Const(2.0)),
        );
        assert_eq!(expr, expected);
    }

    #[test]
    fn test_neg() {
        let expr = Expr::Var("x".to_string());
        let neg_expr = -expr;
        let expected = Expr::Mul(
            Box::new(Expr::Const(-1.0)),
            Box::new(Expr::Var("x".to_string())),
        );
        assert_eq!(neg_expr, expected);
    }

    #[test]
    fn test_symbols() {
        let vars = Expr::Symbols("x, r1, r2");
        assert_eq!(vars.len(), 3);
        assert_eq!(vars[1], Expr::Var("r1".to_string()));
    }

    #[test]
    fn test_set_variable() {
        let expr = Expr::parse_expression("x^2 + r1").unwrap();
        let fixed = expr.set_variable("r1", 1.0);
        let value = fixed.eval(&subs(&[("x", 3.0)])).unwrap();
        assert_relative_eq!(value, 10.0);
    }

    #[test]
    fn test_extract_variables() {
        let expr = Expr::parse_expression("4*r2*pi*(r1**2-x**2)**(1/2)").unwrap();
        assert_eq!(expr.extract_variables(), vec!["r1", "r2", "x"]);
    }

    #[test]
    fn test_parse_precedence() {
        let expr = Expr::parse_expression("1+2*3").unwrap();
        assert_relative_eq!(expr.eval(&HashMap::new()).unwrap(), 7.0);
        let expr = Expr::parse_expression("2*3^2").unwrap();
        assert_relative_eq!(expr.eval(&HashMap::new()).unwrap(), 18.0);
        let expr = Expr::parse_expression("10-2-3").unwrap();
        assert_relative_eq!(expr.eval(&HashMap::new()).unwrap(), 5.0);
        let expr = Expr::parse_expression("8/2/2").unwrap();
        assert_relative_eq!(expr.eval(&HashMap::new()).unwrap(), 2.0);
    }

    #[test]
    fn test_parse_double_star_power() {
        let expr = Expr::parse_expression("x**2").unwrap();
        assert_relative_eq!(expr.eval(&subs(&[("x", 5.0)])).unwrap(), 25.0);
    }

    #[test]
    fn test_parse_unary_minus() {
        let expr = Expr::parse_expression("-x+1").unwrap();
        assert_relative_eq!(expr.eval(&subs(&[("x", 3.0)])).unwrap(), -2.0);
        let expr = Expr::parse_expression("-(x+1)").unwrap();
        assert_relative_eq!(expr.eval(&subs(&[("x", 3.0)])).unwrap(), -4.0);
        let expr = Expr::parse_expression("x^-2").unwrap();
        assert_relative_eq!(expr.eval(&subs(&[("x", 2.0)])).unwrap(), 0.25);
    }

    #[test]
    fn test_parse_functions() {
        let expr = Expr::parse_expression("sin(x)^2 + cos(x)^2").unwrap();
        assert_relative_eq!(expr.eval(&subs(&[("x", 0.7)])).unwrap(), 1.0);
        let expr = Expr::parse_expression("sqrt(x)").unwrap();
        assert_relative_eq!(expr.eval(&subs(&[("x", 9.0)])).unwrap(), 3.0);
        let expr = Expr::parse_expression("ln(exp(x))").unwrap();
        assert_relative_eq!(expr.eval(&subs(&[("x", 2.5)])).unwrap(), 2.5);
    }

    // the sign inside an exponent-notation literal is part of the number,
    // not a subtraction
    #[test]
    fn test_parse_scientific_notation() {
        let expr = Expr::parse_expression("2e-3").unwrap();
        assert_relative_eq!(expr.eval(&HashMap::new()).unwrap(), 0.002);
        let expr = Expr::parse_expression("1.5E+2").unwrap();
        assert_relative_eq!(expr.eval(&HashMap::new()).unwrap(), 150.0);
        let expr = Expr::parse_expression("x + 2e-3").unwrap();
        assert_relative_eq!(expr.eval(&subs(&[("x", 1.0)])).unwrap(), 1.002);
        // a bare variable named e still subtracts
        let expr = Expr::parse_expression("e - 3").unwrap();
        assert_relative_eq!(expr.eval(&subs(&[("e", 5.0)])).unwrap(), 2.0);
    }

    #[test]
    fn test_parse_pi() {
        let expr = Expr::parse_expression("2*pi").unwrap();
        assert_relative_eq!(expr.eval(&HashMap::new()).unwrap(), 2.0 * PI);
    }

    // the closed form of the torus volume used by the exact integrator
    #[test]
    fn test_torus_closed_form() {
        let expr = Expr::parse_expression("2*r2*r1**2*pi**2").unwrap();
        let value = expr
            .eval(&subs(&[("x", 0.0), ("r1", 1.0), ("r2", 2.0)]))
            .unwrap();
        assert_relative_eq!(value, 4.0 * PI * PI, max_relative = 1e-12);
    }

    #[test]
    fn test_torus_integrand() {
        let expr = Expr::parse_expression("4*r2*pi*(r1**2-x**2)**(1/2)").unwrap();
        let value = expr
            .eval(&subs(&[("x", 0.0), ("r1", 1.0), ("r2", 2.0)]))
            .unwrap();
        assert_relative_eq!(value, 8.0 * PI, max_relative = 1e-12);
    }

    #[test]
    fn test_parse_error_on_garbage() {
        assert!(matches!(
            Expr::parse_expression("2 +* x"),
            Err(ExprError::Parse(_))
        ));
        assert!(matches!(
            Expr::parse_expression("sin(x"),
            Err(ExprError::Parse(_))
        ));
        assert!(matches!(
            Expr::parse_expression(""),
            Err(ExprError::Parse(_))
        ));
        assert!(matches!(
            Expr::parse_expression("foo(x)"),
            Err(ExprError::Parse(_))
        ));
    }

    #[test]
    fn test_eval_unbound_variable() {
        let expr = Expr::parse_expression("x + r1").unwrap();
        let err = expr.eval(&subs(&[("x", 1.0)])).unwrap_err();
        assert!(matches!(err, ExprError::Eval(_)));
    }

    // negative base to a fractional power leaves the real domain and must
    // surface as an error, not as a NaN
    #[test]
    fn test_eval_non_real_power() {
        let expr = Expr::parse_expression("(r1**2-x**2)**(1/2)").unwrap();
        let err = expr.eval(&subs(&[("x", 2.0), ("r1", 1.0)])).unwrap_err();
        assert!(matches!(err, ExprError::Eval(_)));
    }

    // infinities must not escape either: division by zero, a pole hit by a
    // negative integer power, ln(0) and exp overflow all leave the finite
    // real domain
    #[test]
    fn test_eval_non_finite_is_reported() {
        let expr = Expr::parse_expression("r2/x").unwrap();
        let err = expr.eval(&subs(&[("x", 0.0), ("r2", 2.0)])).unwrap_err();
        assert!(matches!(err, ExprError::Eval(_)));

        let expr = Expr::parse_expression("x**-1").unwrap();
        let err = expr.eval(&subs(&[("x", 0.0)])).unwrap_err();
        assert!(matches!(err, ExprError::Eval(_)));

        let expr = Expr::parse_expression("ln(x)").unwrap();
        let err = expr.eval(&subs(&[("x", 0.0)])).unwrap_err();
        assert!(matches!(err, ExprError::Eval(_)));

        let expr = Expr::parse_expression("exp(x)").unwrap();
        let err = expr.eval(&subs(&[("x", 1000.0)])).unwrap_err();
        assert!(matches!(err, ExprError::Eval(_)));
    }

    #[test]
    fn test_eval_is_pure() {
        let expr = Expr::parse_expression("sin(x)*x**2").unwrap();
        let map = subs(&[("x", 1.234)]);
        let first = expr.eval(&map).unwrap();
        let second = expr.eval(&map).unwrap();
        assert_eq!(first.to_bits(), second.to_bits());
    }
}
