use crate::matrix::{Matrix, EPS};
use crate::steps::{RowOperation, StepList};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reduction {
    RowEchelon,
    ReducedRowEchelon,
}

/// Gaussian elimination over a single working matrix that records every row
/// operation which changes the matrix, together with the resulting snapshot.
pub struct EchelonReduction {
    working: Matrix,
    // last recorded state, used to suppress numerically inert operations
    previous: Matrix,
    steps: StepList,
}

impl EchelonReduction {
    pub fn new(m: &Matrix) -> Self {
        let mut reduction = Self {
            working: m.clone(),
            previous: m.clone(),
            steps: StepList::new(),
        };
        reduction.record_initial_matrix();
        reduction
    }

    // allows one to trace matrices of the same shape many times without
    // reallocating the working buffers.
    pub fn restart(&mut self, m: &Matrix) {
        self.working.clone_from(m);
        self.previous.clone_from(m);
        self.steps.clear();
        self.record_initial_matrix();
    }

    pub fn run(&mut self, reduction: Reduction) {
        match reduction {
            Reduction::RowEchelon => self.go_to_row_echelon_form(),
            Reduction::ReducedRowEchelon => self.go_to_reduced_row_echelon_form(),
        }
    }

    pub fn go_to_row_echelon_form(&mut self) {
        self.eliminate_forward();
        self.steps.discard_trailing_arrow();
    }

    pub fn go_to_reduced_row_echelon_form(&mut self) {
        self.eliminate_forward();
        self.previous.clone_from(&self.working);
        self.substitute_backwards();
        self.steps.discard_trailing_arrow();
    }

    pub fn matrix(&self) -> &Matrix {
        &self.working
    }

    pub fn steps(&self) -> &StepList {
        &self.steps
    }

    pub fn into_steps(self) -> StepList {
        self.steps
    }

    fn record_initial_matrix(&mut self) {
        if !self.working.is_empty() {
            self.steps.record_matrix_step(&self.working);
        }
    }

    fn eliminate_forward(&mut self) {
        let rows = self.working.number_of_rows;
        let cols = self.working.number_of_columns;
        let mut pivot_row = 0;
        for column in 0..cols {
            if pivot_row >= rows {
                break;
            }
            let Some(best_row) = self.find_pivot(pivot_row, column) else {
                continue;
            };
            if best_row != pivot_row {
                self.apply(RowOperation::Swap {
                    first: pivot_row,
                    second: best_row,
                });
            }
            let pivot = self.working[(pivot_row, column)];
            for row in pivot_row + 1..rows {
                let factor = -self.working[(row, column)] / pivot;
                if factor.abs() < EPS {
                    continue;
                }
                self.apply(RowOperation::AddMultiple {
                    target: row,
                    source: pivot_row,
                    factor,
                });
            }
            pivot_row += 1;
        }
    }

    fn substitute_backwards(&mut self) {
        for row in (0..self.working.number_of_rows).rev() {
            let Some(pivot_column) = self.working.leading_entry_column(row) else {
                continue;
            };
            let pivot = self.working[(row, pivot_column)];
            if (pivot - 1.0).abs() > EPS {
                self.apply(RowOperation::Scale {
                    row,
                    factor: 1.0 / pivot,
                });
            }
            for above in 0..row {
                let factor = -self.working[(above, pivot_column)];
                if factor.abs() < EPS {
                    continue;
                }
                self.apply(RowOperation::AddMultiple {
                    target: above,
                    source: row,
                    factor,
                });
            }
        }
    }

    // partial pivoting: the row at or below `from` with the largest magnitude
    // in `column`, the earliest one on ties. None when that magnitude is below EPS.
    fn find_pivot(&self, from: usize, column: usize) -> Option<usize> {
        let mut best_row = from;
        let mut max_value = self.working[(from, column)].abs();
        for row in from + 1..self.working.number_of_rows {
            let value = self.working[(row, column)].abs();
            if value > max_value {
                max_value = value;
                best_row = row;
            }
        }
        (max_value >= EPS).then_some(best_row)
    }

    fn apply(&mut self, operation: RowOperation) {
        operation.apply_to(&mut self.working);
        self.working.clean();
        if self.working.changed(&self.previous) {
            log::debug!("recording {operation}");
            self.steps.record_arrow_step(Some(operation));
            self.steps.record_matrix_step(&self.working);
            self.previous.clone_from(&self.working);
        } else {
            log::trace!("{operation} left the matrix unchanged");
        }
    }
}

/// Forward elimination trace of `m`.
pub fn row_echelon_steps(m: &Matrix) -> StepList {
    let mut reduction = EchelonReduction::new(m);
    reduction.go_to_row_echelon_form();
    reduction.into_steps()
}

/// Full elimination trace of `m`, forward elimination followed by back
/// substitution.
pub fn reduced_row_echelon_steps(m: &Matrix) -> StepList {
    let mut reduction = EchelonReduction::new(m);
    reduction.go_to_reduced_row_echelon_form();
    reduction.into_steps()
}

#[cfg(test)]
mod test {
    use itertools::Itertools;
    use rand::Rng;

    use super::*;
    use crate::steps::{MatrixStep, RowOperationKind};

    fn matrix(rows: Vec<Vec<f64>>) -> Matrix {
        Matrix::from_rows(rows).unwrap()
    }

    fn labels(steps: &StepList) -> Vec<String> {
        steps.operations().map(|op| op.to_string()).collect_vec()
    }

    fn random_integer_matrix(rows: usize, cols: usize) -> Matrix {
        let mut rng = rand::thread_rng();
        let mut m = Matrix::zeroes(rows, cols);
        for r in 0..rows {
            for c in 0..cols {
                // plenty of zeros so that dependent rows and empty columns show up
                m[(r, c)] = if rng.gen_bool(0.3) {
                    0.0
                } else {
                    rng.gen_range(-5..=5) as f64
                };
            }
        }
        if rows > 1 && rng.gen_bool(0.3) {
            // duplicate a row to force a dependency
            let copy = m.row(0).to_vec();
            for (c, v) in copy.into_iter().enumerate() {
                m[(rows - 1, c)] = v;
            }
        }
        m
    }

    fn assert_row_echelon(m: &Matrix) {
        let leading = (0..m.number_of_rows)
            .map(|r| m.leading_entry_column(r))
            .collect_vec();
        for pair in leading.windows(2) {
            match (pair[0], pair[1]) {
                (Some(above), Some(below)) => assert!(below > above, "{m:?}"),
                (None, Some(_)) => panic!("zero row above a nonzero row in {m:?}"),
                _ => {}
            }
        }
        for (r, lead) in leading.iter().enumerate() {
            if let Some(lead) = lead {
                assert!(m.row(r)[..*lead].iter().all(|v| *v == 0.0), "{m:?}");
            }
        }
    }

    fn assert_reduced_row_echelon(m: &Matrix) {
        assert_row_echelon(m);
        for r in 0..m.number_of_rows {
            if let Some(pivot_column) = m.leading_entry_column(r) {
                assert!((m[(r, pivot_column)] - 1.0).abs() < EPS, "{m:?}");
                for other in (0..m.number_of_rows).filter(|other| *other != r) {
                    assert!(m[(other, pivot_column)].abs() < EPS, "{m:?}");
                }
            }
        }
    }

    #[test]
    fn two_by_two_walkthrough() {
        let steps = reduced_row_echelon_steps(&matrix(vec![vec![2.0, 4.0], vec![1.0, 3.0]]));
        assert_eq!(
            labels(&steps),
            vec!["R2 -> R2 + (-1/2)R1", "R1 -> R1 + (-4)R2", "R1 -> (1/2)R1"]
        );
        let snapshots = steps
            .iter()
            .filter_map(MatrixStep::matrix)
            .map(Matrix::to_rows)
            .collect_vec();
        assert_eq!(
            snapshots,
            vec![
                vec![vec![2.0, 4.0], vec![1.0, 3.0]],
                vec![vec![2.0, 4.0], vec![0.0, 1.0]],
                vec![vec![2.0, 0.0], vec![0.0, 1.0]],
                vec![vec![1.0, 0.0], vec![0.0, 1.0]],
            ]
        );
        assert_eq!(steps.len(), 7);
        assert!(steps.is_well_formed());
    }

    #[test]
    fn partial_pivoting_swaps_in_the_largest_entry() {
        let steps = row_echelon_steps(&matrix(vec![vec![1.0, 2.0], vec![3.0, 4.0]]));
        assert_eq!(labels(&steps), vec!["R1 <-> R2", "R2 -> R2 + (-1/3)R1"]);
        assert_eq!(
            steps.last_matrix().unwrap().to_rows(),
            vec![vec![3.0, 4.0], vec![0.0, 2.0 - 4.0 / 3.0]]
        );
    }

    #[test]
    fn zero_column_is_skipped() {
        let steps = reduced_row_echelon_steps(&matrix(vec![
            vec![0.0, 2.0, 4.0],
            vec![0.0, 1.0, 1.0],
        ]));
        assert_eq!(
            labels(&steps),
            vec![
                "R2 -> R2 + (-1/2)R1",
                "R2 -> (-1)R2",
                "R1 -> R1 + (-4)R2",
                "R1 -> (1/2)R1",
            ]
        );
        assert_eq!(
            steps.last_matrix().unwrap().to_rows(),
            vec![vec![0.0, 1.0, 0.0], vec![0.0, 0.0, 1.0]]
        );
    }

    #[test]
    fn operations_that_change_nothing_beyond_eps_are_not_recorded() {
        // eliminating the 1e-12 below the pivot moves the matrix by exactly EPS
        let m = matrix(vec![vec![0.5, 0.0], vec![1e-12, 0.0]]);
        let steps = reduced_row_echelon_steps(&m);
        assert_eq!(labels(&steps), vec!["R1 -> (2)R1"]);
        assert_eq!(steps.len(), 3);
        assert_eq!(steps.first_matrix(), Some(&m));
        assert_eq!(
            steps.last_matrix().unwrap().to_rows(),
            vec![vec![1.0, 0.0], vec![0.0, 0.0]]
        );
        assert!(steps.is_well_formed());
    }

    #[test]
    fn matrix_already_reduced_records_only_the_initial_snapshot() {
        let reduced = matrix(vec![
            vec![1.0, 0.0, 2.0],
            vec![0.0, 1.0, -3.0],
            vec![0.0, 0.0, 0.0],
        ]);
        let steps = reduced_row_echelon_steps(&reduced);
        assert_eq!(steps.len(), 1);
        assert_eq!(steps.first_matrix(), Some(&reduced));
    }

    #[test]
    fn zero_matrix_records_nothing_but_itself() {
        let steps = reduced_row_echelon_steps(&Matrix::zeroes(3, 2));
        assert_eq!(steps.len(), 1);
    }

    #[test]
    fn dependent_rows_end_as_zero_rows() {
        let steps = reduced_row_echelon_steps(&matrix(vec![
            vec![1.0, 2.0, 3.0],
            vec![2.0, 4.0, 6.0],
            vec![1.0, 0.0, 1.0],
        ]));
        let last = steps.last_matrix().unwrap();
        assert_reduced_row_echelon(last);
        assert_eq!(last.row(2), &[0.0, 0.0, 0.0]);
        assert_eq!(steps.count_of(RowOperationKind::Swap), 2);
    }

    #[test]
    fn degenerate_shapes_give_an_empty_trace() {
        assert!(reduced_row_echelon_steps(&Matrix::zeroes(0, 0)).is_empty());
        assert!(row_echelon_steps(&Matrix::zeroes(2, 0)).is_empty());
    }

    #[test]
    fn restart_discards_the_previous_trace() {
        let first = matrix(vec![vec![2.0, 4.0], vec![1.0, 3.0]]);
        let second = matrix(vec![vec![1.0, 0.0], vec![0.0, 1.0]]);
        let mut reduction = EchelonReduction::new(&first);
        reduction.run(Reduction::ReducedRowEchelon);
        assert_eq!(reduction.steps().len(), 7);
        reduction.restart(&second);
        reduction.run(Reduction::ReducedRowEchelon);
        assert_eq!(reduction.steps().len(), 1);
        assert_eq!(reduction.matrix(), &second);
    }

    #[test]
    fn random_matrices_reach_echelon_shapes() {
        for _ in 0..200 {
            let mut rng = rand::thread_rng();
            let (rows, cols) = (rng.gen_range(1..=4), rng.gen_range(1..=5));
            let m = random_integer_matrix(rows, cols);

            let ref_steps = row_echelon_steps(&m);
            assert!(ref_steps.is_well_formed());
            assert_row_echelon(ref_steps.last_matrix().unwrap());

            let rref_steps = reduced_row_echelon_steps(&m);
            assert!(rref_steps.is_well_formed());
            assert_eq!(rref_steps.first_matrix(), Some(&m));
            let reduced = rref_steps.last_matrix().unwrap();
            assert_reduced_row_echelon(reduced);

            assert_eq!(reduced_row_echelon_steps(reduced).len(), 1);
        }
    }

    #[test]
    fn recorded_steps_always_change_the_matrix() {
        for _ in 0..100 {
            let mut rng = rand::thread_rng();
            let m = random_integer_matrix(rng.gen_range(1..=4), rng.gen_range(1..=4));
            let steps = reduced_row_echelon_steps(&m);
            let snapshots = steps.iter().filter_map(MatrixStep::matrix).collect_vec();
            for pair in snapshots.windows(2) {
                assert!(pair[1].changed(pair[0]));
            }
            assert_eq!(snapshots.len(), steps.operations().count() + 1);
        }
    }
}
