use std::fmt;

use strum_macros::{Display, EnumIter};

use crate::fraction_format::FractionFormatter;
use crate::matrix::Matrix;

/// An elementary row operation as recorded in a trace. Rows are 0-indexed
/// here and rendered 1-indexed in labels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RowOperation {
    Swap { first: usize, second: usize },
    Scale { row: usize, factor: f64 },
    AddMultiple { target: usize, source: usize, factor: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Display)]
pub enum RowOperationKind {
    #[strum(serialize = "swap")]
    Swap,
    #[strum(serialize = "scale")]
    Scale,
    #[strum(serialize = "add multiple")]
    AddMultiple,
}

impl RowOperation {
    pub fn kind(&self) -> RowOperationKind {
        match self {
            Self::Swap { .. } => RowOperationKind::Swap,
            Self::Scale { .. } => RowOperationKind::Scale,
            Self::AddMultiple { .. } => RowOperationKind::AddMultiple,
        }
    }

    pub fn apply_to(&self, m: &mut Matrix) {
        match *self {
            Self::Swap { first, second } => m.swap_rows(first, second),
            Self::Scale { row, factor } => m.scale_row(factor, row),
            Self::AddMultiple {
                target,
                source,
                factor,
            } => m.add_row(factor, source, target),
        }
    }

    pub fn label(&self, formatter: &FractionFormatter) -> String {
        match *self {
            Self::Swap { first, second } => format!("R{} <-> R{}", first + 1, second + 1),
            Self::Scale { row, factor } => {
                format!("R{} -> ({})R{}", row + 1, formatter.format(factor), row + 1)
            }
            Self::AddMultiple {
                target,
                source,
                factor,
            } => format!(
                "R{} -> R{} + ({})R{}",
                target + 1,
                target + 1,
                formatter.format(factor),
                source + 1
            ),
        }
    }
}

impl fmt::Display for RowOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label(&FractionFormatter::default()))
    }
}
