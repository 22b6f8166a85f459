//! Error taxonomy of the quadrature engine. Every failure aborts the single
//! calculation that raised it; no partial record is ever produced.

use crate::quadrature::model::MethodKind;
use crate::symbolic::symbolic_engine::ExprError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum QuadError {
    /// The expression string is not a valid formula.
    #[error("failed to parse expression: {0}")]
    Parse(String),
    /// A substitution was missing or the expression left the real domain.
    #[error("failed to evaluate expression: {0}")]
    Evaluation(String),
    /// `steps == 0` would make the step size `2*r/steps` divide by zero.
    #[error("{method}: step count must be positive, got 0")]
    Configuration { method: MethodKind },
    /// The exact reference value is zero, so the relative derivation
    /// `100*calculated/reference - 100` is undefined.
    #[error("{method}: reference value is zero, derivation is undefined")]
    DerivationUndefined { method: MethodKind },
}

impl From<ExprError> for QuadError {
    fn from(err: ExprError) -> QuadError {
        match err {
            ExprError::Parse(msg) => QuadError::Parse(msg),
            ExprError::Eval(msg) => QuadError::Evaluation(msg),
        }
    }
}
