//! Exact (closed-form) integration.
//!
//! The expression handed to this method is not the integrand: it is the
//! antiderivative already solved analytically by the caller, written so that
//! a single evaluation at the fixed substitution below yields the value of
//! the definite integral. Keeping the exact value separate from the
//! numerical methods lets every quadrature rule normalize its error against
//! one ground truth computed exactly once.

use crate::quadrature::errors::QuadError;
use crate::quadrature::model::{FunctionModel, MethodKind, OriginRecord};
use crate::symbolic::symbolic_engine::Expr;
use std::collections::HashMap;

/// fixed substitution encoding the reference configuration of the demo
const EXACT_SUBSTITUTION: [(&str, f64); 3] = [("x", 0.0), ("r1", 1.0), ("r2", 2.0)];

pub struct ExactIntegral;

impl ExactIntegral {
    /// Evaluates the closed form once at `x = 0.0, r1 = 1.0, r2 = 2.0`.
    /// The step count of the model is irrelevant here and ignored.
    pub fn calculate(&self, function: &FunctionModel) -> Result<OriginRecord, QuadError> {
        let expr = Expr::parse_expression(&function.expression)?;
        let substitution: HashMap<String, f64> = EXACT_SUBSTITUTION
            .iter()
            .map(|(name, value)| (name.to_string(), *value))
            .collect();
        let calculated = expr.eval(&substitution)?;

        Ok(OriginRecord {
            method: MethodKind::Integral,
            function: function.clone(),
            calculated,
        })
    }
}
