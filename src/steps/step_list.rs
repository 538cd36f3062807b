use std::slice;

use crate::matrix::Matrix;

use super::row_operation::{RowOperation, RowOperationKind};
use super::step::MatrixStep;

/// Append-only, chronologically ordered elimination trace.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StepList {
    steps: Vec<MatrixStep>,
}

impl StepList {
    pub fn new() -> Self {
        Default::default()
    }

    /// Appends an independent copy of `m`.
    pub fn record_matrix_step(&mut self, m: &Matrix) {
        self.steps.push(MatrixStep::Matrix(m.clone()));
    }

    pub fn record_arrow_step(&mut self, operation: Option<RowOperation>) {
        self.steps.push(MatrixStep::Arrow(operation));
    }

    pub fn clear(&mut self) {
        self.steps.clear();
    }

    // a trace must end on a matrix state
    pub fn discard_trailing_arrow(&mut self) {
        if self.steps.last().is_some_and(MatrixStep::is_arrow) {
            self.steps.pop();
        }
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, MatrixStep> {
        self.steps.iter()
    }

    pub fn first_matrix(&self) -> Option<&Matrix> {
        self.steps.iter().find_map(MatrixStep::matrix)
    }

    pub fn last_matrix(&self) -> Option<&Matrix> {
        self.steps.iter().rev().find_map(MatrixStep::matrix)
    }

    pub fn operations(&self) -> impl Iterator<Item = &RowOperation> {
        self.steps.iter().filter_map(MatrixStep::operation)
    }

    pub fn count_of(&self, kind: RowOperationKind) -> usize {
        self.operations().filter(|op| op.kind() == kind).count()
    }

    /// True when the list is empty, or starts and ends with a matrix and
    /// every arrow sits between two matrices.
    pub fn is_well_formed(&self) -> bool {
        if self.steps.is_empty() {
            return true;
        }
        if !self.steps[0].is_matrix() || !self.steps[self.steps.len() - 1].is_matrix() {
            return false;
        }
        self.steps.windows(3).all(|w| !w[1].is_arrow() || (w[0].is_matrix() && w[2].is_matrix()))
            && self.steps.windows(2).all(|w| !(w[0].is_arrow() && w[1].is_arrow()))
    }
}

impl<'a> IntoIterator for &'a StepList {
    type Item = &'a MatrixStep;
    type IntoIter = slice::Iter<'a, MatrixStep>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
