use crate::fraction_format::FractionFormatter;
use crate::matrix::Matrix;

use super::row_operation::RowOperation;

/// One entry of an elimination trace: either an owned snapshot of the matrix
/// or the operation that leads from the previous snapshot to the next one.
#[derive(Debug, Clone, PartialEq)]
pub enum MatrixStep {
    Matrix(Matrix),
    Arrow(Option<RowOperation>),
}

impl MatrixStep {
    pub fn is_matrix(&self) -> bool {
        matches!(self, Self::Matrix(_))
    }

    pub fn is_arrow(&self) -> bool {
        matches!(self, Self::Arrow(_))
    }

    pub fn matrix(&self) -> Option<&Matrix> {
        match self {
            Self::Matrix(m) => Some(m),
            Self::Arrow(_) => None,
        }
    }

    pub fn operation(&self) -> Option<&RowOperation> {
        match self {
            Self::Arrow(operation) => operation.as_ref(),
            Self::Matrix(_) => None,
        }
    }

    // None for matrix steps and for arrows recorded without an operation
    pub fn label(&self, formatter: &FractionFormatter) -> Option<String> {
        self.operation().map(|operation| operation.label(formatter))
    }
}
