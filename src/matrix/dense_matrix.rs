use std::ops::{Index, IndexMut};

use anyhow::{ensure, Result};

use super::EPS;

/// Dense real matrix stored as one row-major allocation. The shape is fixed
/// for the lifetime of the value.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    pub number_of_rows: usize,
    pub number_of_columns: usize,
    entries: Vec<f64>,
}

impl Matrix {
    pub fn zeroes(rows: usize, cols: usize) -> Self {
        Self {
            number_of_rows: rows,
            number_of_columns: cols,
            entries: vec![0.0; rows * cols],
        }
    }

    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let number_of_columns = rows.first().map(|row| row.len()).unwrap_or(0);
        for (idx, row) in rows.iter().enumerate() {
            ensure!(
                row.len() == number_of_columns,
                "row {} has {} entries, expected {}",
                idx + 1,
                row.len(),
                number_of_columns
            );
        }
        Ok(Self {
            number_of_rows: rows.len(),
            number_of_columns,
            entries: rows.into_iter().flatten().collect(),
        })
    }

    pub fn is_empty(&self) -> bool {
        self.number_of_rows == 0 || self.number_of_columns == 0
    }

    pub fn row(&self, r: usize) -> &[f64] {
        let start = r * self.number_of_columns;
        &self.entries[start..start + self.number_of_columns]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        (0..self.number_of_rows).map(move |r| self.row(r))
    }

    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        self.rows().map(|row| row.to_vec()).collect()
    }

    // first column whose entry in row r is larger than EPS in magnitude
    pub fn leading_entry_column(&self, r: usize) -> Option<usize> {
        self.row(r).iter().position(|v| v.abs() > EPS)
    }

    pub(super) fn offset(&self, r: usize, c: usize) -> usize {
        debug_assert!(r < self.number_of_rows && c < self.number_of_columns);
        r * self.number_of_columns + c
    }

    pub(super) fn entries(&self) -> &[f64] {
        &self.entries
    }

    pub(super) fn entries_mut(&mut self) -> &mut [f64] {
        &mut self.entries
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, (r, c): (usize, usize)) -> &f64 {
        &self.entries[self.offset(r, c)]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, (r, c): (usize, usize)) -> &mut f64 {
        let offset = self.offset(r, c);
        &mut self.entries[offset]
    }
}
