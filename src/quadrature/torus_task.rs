//! Orchestration of the torus volume demo.
//!
//! Owns two fixed configurations: the closed form of the torus volume
//! (`V = 2*pi^2*r1^2*r2`) for the exact integrator, and the integrand of the
//! washer cross-section for the numerical methods. The exact integral runs
//! once, then every quadrature rule runs against that single reference
//! value. Records come out in fixed order: integral, rectangle, trapezoid,
//! simpson.
//!
//! # Example
//! ```rust, ignore
//! use RustedQuad::quadrature::torus_task::TorusTask;
//! let mut task = TorusTask::new();
//! task.set_steps(100);
//! let records = task.run().unwrap();
//! for record in records {
//!     println!("{}", record);
//! }
//! ```

use crate::quadrature::errors::QuadError;
use crate::quadrature::exact::ExactIntegral;
use crate::quadrature::methods::{QuadratureMethod, Rectangle, Simpson, Trapezoid};
use crate::quadrature::model::{CalcRecord, FunctionModel};
use log::{error, info};

/// closed form of the torus volume, evaluated at the fixed exact substitution
const EXACT_EXPRESSION: &str = "2*r2*r1**2*pi**2";
/// integrand of the washer cross-section of the same torus
const INTEGRAND_EXPRESSION: &str = "4*r2*pi*(r1**2-x**2)**(1/2)";

const R_CIRCLE: f64 = 1.0;
const R_TORUS: f64 = 2.0;
const DEFAULT_STEPS: usize = 10;

pub struct TorusTask {
    pub exact_function: FunctionModel,
    pub numerical_function: FunctionModel,
    pub records: Vec<CalcRecord>,
    /// per-method failures of the last run; a failing method is reported and
    /// skipped without aborting the remaining methods
    pub failures: Vec<QuadError>,
}

impl TorusTask {
    pub fn new() -> TorusTask {
        TorusTask {
            exact_function: FunctionModel::new(
                EXACT_EXPRESSION,
                R_CIRCLE,
                R_TORUS,
                DEFAULT_STEPS,
            ),
            numerical_function: FunctionModel::new(
                INTEGRAND_EXPRESSION,
                R_CIRCLE,
                R_TORUS,
                DEFAULT_STEPS,
            ),
            records: Vec::new(),
            failures: Vec::new(),
        }
    }

    /// Sets the number of discretization intervals for the numerical methods.
    pub fn set_steps(&mut self, steps: usize) {
        self.numerical_function.steps = steps;
    }

    /// Replaces both fixed configurations, for driving the engine with a
    /// different integral than the shipped torus demo.
    pub fn set_functions(&mut self, exact: FunctionModel, numerical: FunctionModel) {
        self.exact_function = exact;
        self.numerical_function = numerical;
    }

    /// Runs the exact integral once, then all three quadrature methods with
    /// the exact value as reference.
    ///
    /// A failure of the exact integral aborts the whole run: without the
    /// reference value no derivation can be computed. A failure of a single
    /// quadrature method is logged together with its configuration, stored
    /// in `failures` and does not stop the other methods.
    pub fn run(&mut self) -> Result<&[CalcRecord], QuadError> {
        self.records.clear();
        self.failures.clear();

        let origin = ExactIntegral.calculate(&self.exact_function)?;
        let reference = origin.calculated;
        info!(
            "exact integral of {} = {}",
            self.exact_function.expression, reference
        );
        self.records.push(CalcRecord::Origin(origin));

        let methods: Vec<Box<dyn QuadratureMethod>> =
            vec![Box::new(Rectangle), Box::new(Trapezoid), Box::new(Simpson)];

        for method in methods {
            match method.calculate(&self.numerical_function, reference) {
                Ok(result) => {
                    info!(
                        "{}: value = {}, derivation = {} %",
                        result.method, result.calculated, result.derivation
                    );
                    self.records.push(CalcRecord::Result(result));
                }
                Err(err) => {
                    error!(
                        "{} failed for f = {}, r_circle = {}, r_torus = {}, steps = {}: {}",
                        method.kind(),
                        self.numerical_function.expression,
                        self.numerical_function.r_circle,
                        self.numerical_function.r_torus,
                        self.numerical_function.steps,
                        err
                    );
                    self.failures.push(err);
                }
            }
        }

        Ok(&self.records)
    }

    pub fn get_records(&self) -> &[CalcRecord] {
        &self.records
    }
}

impl Default for TorusTask {
    fn default() -> Self {
        TorusTask::new()
    }
}
