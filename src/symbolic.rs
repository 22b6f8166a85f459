/// symbolic expression engine: AST, parsing, substitution and evaluation
pub mod symbolic_engine;
/// string formula -> Expr parser
pub mod parse_expr;
#[cfg(test)]
pub mod symbolic_engine_tests;
