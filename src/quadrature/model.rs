//! Data model of the quadrature engine: the function description consumed by
//! every method and the immutable records they produce. Records are created
//! once per calculation and never mutated afterwards.

use std::fmt;
use strum_macros::{Display, EnumString};

/// Describes one integration configuration: the integrand (or closed form) as
/// a string formula over the free variables `x`, `r1`, `r2`, the two radii
/// and the number of discretization intervals.
///
/// `r_circle` sizes the integration interval `[-r_circle, +r_circle]`;
/// `r_torus` only enters through the `r2` substitution inside the expression.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionModel {
    pub expression: String,
    pub r_circle: f64,
    pub r_torus: f64,
    pub steps: usize,
}

impl FunctionModel {
    pub fn new(expression: &str, r_circle: f64, r_torus: f64, steps: usize) -> FunctionModel {
        FunctionModel {
            expression: expression.to_string(),
            r_circle,
            r_torus,
            steps,
        }
    }

    /// Step size `h = 2 * r_circle / steps`. Callers guard `steps > 0`.
    pub fn step_size(&self) -> f64 {
        2.0 * self.r_circle / self.steps as f64
    }
}

/// The calculation method a record came from. Compared by value, displayed
/// lowercase ("integral", "rectangle", "trapezoid", "simpson").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum MethodKind {
    Integral,
    Rectangle,
    Trapezoid,
    Simpson,
}

/// Result of the exact (closed-form) integration. Carries no derivation:
/// the exact value *is* the reference everything else is compared against.
#[derive(Debug, Clone, PartialEq)]
pub struct OriginRecord {
    pub method: MethodKind,
    pub function: FunctionModel,
    pub calculated: f64,
}

/// Result of one numerical quadrature run: the approximated value and its
/// derivation (percentage relative error, always non-negative) against the
/// exact reference value.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultRecord {
    pub method: MethodKind,
    pub function: FunctionModel,
    pub calculated: f64,
    pub derivation: f64,
}

/// Tagged union over the two record shapes, in the order they are reported.
#[derive(Debug, Clone, PartialEq)]
pub enum CalcRecord {
    Origin(OriginRecord),
    Result(ResultRecord),
}

impl CalcRecord {
    pub fn method(&self) -> MethodKind {
        match self {
            CalcRecord::Origin(origin) => origin.method,
            CalcRecord::Result(result) => result.method,
        }
    }

    pub fn function(&self) -> &FunctionModel {
        match self {
            CalcRecord::Origin(origin) => &origin.function,
            CalcRecord::Result(result) => &result.function,
        }
    }

    pub fn calculated(&self) -> f64 {
        match self {
            CalcRecord::Origin(origin) => origin.calculated,
            CalcRecord::Result(result) => result.calculated,
        }
    }

    /// Derivation percentage; `None` for the exact record.
    pub fn derivation(&self) -> Option<f64> {
        match self {
            CalcRecord::Origin(_) => None,
            CalcRecord::Result(result) => Some(result.derivation),
        }
    }

    /// Step size of the discretization; `None` for the exact record, which
    /// ignores the step count entirely.
    pub fn step_size(&self) -> Option<f64> {
        match self {
            CalcRecord::Origin(_) => None,
            CalcRecord::Result(result) => Some(result.function.step_size()),
        }
    }
}

impl fmt::Display for CalcRecord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CalcRecord::Origin(origin) => write!(
                f,
                "{}: f = {}, value = {}",
                origin.method, origin.function.expression, origin.calculated
            ),
            CalcRecord::Result(result) => write!(
                f,
                "{}: f = {}, steps = {}, h = {}, value = {}, derivation = {} %",
                result.method,
                result.function.expression,
                result.function.steps,
                result.function.step_size(),
                result.calculated,
                result.derivation
            ),
        }
    }
}
