use crate::quadrature::model::CalcRecord;
use log::info;
use tabled::{builder::Builder, settings::Style};

/// Renders all records as a console table: method kind, expression, step
/// count, step size, calculated value and derivation. The exact row shows
/// only the expression and the value; its discretization columns are blank.
pub fn render_table(records: &[CalcRecord]) -> String {
    let mut builder = Builder::default();
    builder.push_record(["method", "function", "steps", "h", "value", "derivation, %"]);

    for record in records {
        match record {
            CalcRecord::Origin(origin) => builder.push_record([
                origin.method.to_string(),
                origin.function.expression.clone(),
                "-".to_string(),
                "-".to_string(),
                format!("{:.6}", origin.calculated),
                "-".to_string(),
            ]),
            CalcRecord::Result(result) => builder.push_record([
                result.method.to_string(),
                result.function.expression.clone(),
                result.function.steps.to_string(),
                format!("{:.4}", result.function.step_size()),
                format!("{:.6}", result.calculated),
                format!("{:.1}", result.derivation),
            ]),
        }
    }

    let mut table = builder.build();
    table.with(Style::modern_rounded());
    table.to_string()
}

pub fn report_records(records: &[CalcRecord]) {
    info!(" \n \n CALCULATION RESULTS \n \n{}", render_table(records));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quadrature::torus_task::TorusTask;

    #[test]
    fn table_contains_all_methods() {
        let mut task = TorusTask::new();
        task.run().unwrap();
        let table = render_table(task.get_records());
        for kind in ["integral", "rectangle", "trapezoid", "simpson"] {
            assert!(table.contains(kind), "missing row for {}", kind);
        }
    }

    #[test]
    fn exact_row_blanks_discretization_columns() {
        let mut task = TorusTask::new();
        task.run().unwrap();
        let table = render_table(&task.get_records()[..1]);
        assert!(table.contains("integral"));
        // steps, h and derivation render as "-" for the exact method
        assert_eq!(table.matches(" - ").count(), 3);
    }
}
