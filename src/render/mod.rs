use itertools::Itertools;

use crate::fraction_format::FractionFormatter;
use crate::matrix::Matrix;
use crate::steps::{MatrixStep, StepList};

const ARROW_INDENT: &str = "    ";

// One line per row, cells right aligned to the widest cell of their column.
pub fn render_matrix(m: &Matrix, formatter: &FractionFormatter) -> Vec<String> {
    let cells = m
        .rows()
        .map(|row| row.iter().map(|v| formatter.format(*v)).collect_vec())
        .collect_vec();
    let widths = (0..m.number_of_columns)
        .map(|c| cells.iter().map(|row| row[c].len()).max().unwrap_or(0))
        .collect_vec();
    cells
        .iter()
        .map(|row| {
            let body = row
                .iter()
                .zip(&widths)
                .map(|(cell, &width)| format!("{cell:>width$}"))
                .join("  ");
            format!("[ {body} ]")
        })
        .collect()
}

pub fn render_steps(steps: &StepList, formatter: &FractionFormatter) -> String {
    let mut lines = Vec::new();
    for step in steps {
        match step {
            MatrixStep::Matrix(m) => lines.extend(render_matrix(m, formatter)),
            MatrixStep::Arrow(_) => {
                match step.label(formatter) {
                    Some(label) => lines.push(format!("{ARROW_INDENT}|  {label}")),
                    None => lines.push(format!("{ARROW_INDENT}|")),
                }
                lines.push(format!("{ARROW_INDENT}v"));
            }
        }
    }
    lines.join("\n")
}
