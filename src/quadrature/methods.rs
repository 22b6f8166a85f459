//! # Quadrature Methods Module
//!
//! The three numerical integration strategies. All of them share the same
//! discretization of the symmetric interval `[-r_circle, +r_circle]` into
//! `steps` intervals of width `h = 2*r_circle/steps` and differ only in how
//! the sampled ordinates are weighted:
//!
//! - **Rectangle** (left sum):  `h * sum( f(x_i) )`, `i in 0..steps`
//! - **Trapezoid**:             `h * (0.5*edge + middle)`, `i in 0..steps`
//! - **Simpson**:               `h/3 * (edge + 4*odd + 2*even)`, `i in 0..=steps`
//!
//! Each strategy parses the expression once into an AST and re-evaluates the
//! tree with `x` rebound per sample point, with `r1 = r_circle` and
//! `r2 = r_torus` fixed. The result is packaged together with the derivation
//! (percentage relative error) against the exact reference value.

use crate::quadrature::errors::QuadError;
use crate::quadrature::model::{FunctionModel, MethodKind, ResultRecord};
use crate::symbolic::symbolic_engine::Expr;
use log::debug;
use std::collections::HashMap;

/// Common contract of the numerical strategies: consume a function model and
/// the exact reference value, produce a complete result record or an error.
pub trait QuadratureMethod {
    fn kind(&self) -> MethodKind;

    fn calculate(
        &self,
        function: &FunctionModel,
        reference: f64,
    ) -> Result<ResultRecord, QuadError>;
}

/// `|round_1dp(100 * calculated / reference - 100)|`
///
/// Undefined for a zero reference value; that case is reported explicitly
/// instead of letting an infinity or NaN out.
pub(crate) fn calculate_derivation(
    method: MethodKind,
    calculated: f64,
    reference: f64,
) -> Result<f64, QuadError> {
    if reference == 0.0 {
        return Err(QuadError::DerivationUndefined { method });
    }
    let derivation = ((100.0 * calculated / reference - 100.0) * 10.0).round() / 10.0;
    Ok(derivation.abs())
}

fn parse_checked(
    method: MethodKind,
    function: &FunctionModel,
) -> Result<(Expr, HashMap<String, f64>, f64), QuadError> {
    if function.steps == 0 {
        return Err(QuadError::Configuration { method });
    }
    let expr = Expr::parse_expression(&function.expression)?;
    let mut substitution = HashMap::new();
    substitution.insert("r1".to_string(), function.r_circle);
    substitution.insert("r2".to_string(), function.r_torus);
    Ok((expr, substitution, function.step_size()))
}

fn fill_result(
    method: MethodKind,
    function: &FunctionModel,
    calculated: f64,
    reference: f64,
) -> Result<ResultRecord, QuadError> {
    let derivation = calculate_derivation(method, calculated, reference)?;
    debug!(
        "{}: calculated = {}, reference = {}, derivation = {} %",
        method, calculated, reference, derivation
    );
    Ok(ResultRecord {
        method,
        function: function.clone(),
        calculated,
        derivation,
    })
}

/// Left-endpoint rectangle rule.
pub struct Rectangle;

impl QuadratureMethod for Rectangle {
    fn kind(&self) -> MethodKind {
        MethodKind::Rectangle
    }

    fn calculate(
        &self,
        function: &FunctionModel,
        reference: f64,
    ) -> Result<ResultRecord, QuadError> {
        let (expr, mut substitution, step_size) = parse_checked(self.kind(), function)?;
        let mut sum = 0.0;

        for step in 0..function.steps {
            let x_value = -function.r_circle + step_size * step as f64;
            substitution.insert("x".to_string(), x_value);
            sum += expr.eval(&substitution)?;
        }
        let calculated = sum * step_size;

        fill_result(self.kind(), function, calculated, reference)
    }
}

/// Trapezoid rule over left-endpoint samples.
///
/// The loop runs `0..steps`, so the ordinate at `+r_circle` is never
/// evaluated and only the left endpoint receives the half weight. The
/// `step == steps` arm of the edge test is unreachable with this sampling;
/// both are kept to state the intended weighting.
pub struct Trapezoid;

impl QuadratureMethod for Trapezoid {
    fn kind(&self) -> MethodKind {
        MethodKind::Trapezoid
    }

    fn calculate(
        &self,
        function: &FunctionModel,
        reference: f64,
    ) -> Result<ResultRecord, QuadError> {
        let (expr, mut substitution, step_size) = parse_checked(self.kind(), function)?;
        let mut sum_edge = 0.0;
        let mut sum_middle = 0.0;

        for step in 0..function.steps {
            let x_value = -function.r_circle + step_size * step as f64;
            substitution.insert("x".to_string(), x_value);
            let ordinate = expr.eval(&substitution)?;

            if step == 0 || step == function.steps {
                sum_edge += ordinate;
            } else {
                sum_middle += ordinate;
            }
        }
        let calculated = step_size * (0.5 * sum_edge + sum_middle);

        fill_result(self.kind(), function, calculated, reference)
    }
}

/// Simpson's rule. Samples one more point than the other two methods
/// (`0..=steps`). The classical rule needs an even step count; that is the
/// caller's responsibility and is not enforced here.
pub struct Simpson;

impl QuadratureMethod for Simpson {
    fn kind(&self) -> MethodKind {
        MethodKind::Simpson
    }

    fn calculate(
        &self,
        function: &FunctionModel,
        reference: f64,
    ) -> Result<ResultRecord, QuadError> {
        let (expr, mut substitution, step_size) = parse_checked(self.kind(), function)?;
        let mut sum_start_end = 0.0;
        let mut sum_even = 0.0;
        let mut sum_odd = 0.0;

        for step in 0..=function.steps {
            let x_value = -function.r_circle + step_size * step as f64;
            substitution.insert("x".to_string(), x_value);
            let ordinate = expr.eval(&substitution)?;

            if step == 0 || step == function.steps {
                sum_start_end += ordinate;
            } else if step % 2 == 0 {
                sum_even += ordinate;
            } else {
                sum_odd += ordinate;
            }
        }
        let calculated = step_size / 3.0 * (sum_start_end + 4.0 * sum_odd + 2.0 * sum_even);

        fill_result(self.kind(), function, calculated, reference)
    }
}
