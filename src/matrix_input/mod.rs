//! Turning user supplied text into a [`Matrix`]. Rows are separated by `;` or
//! new lines; entries by commas and/or whitespace. An empty slot between two
//! commas is an entry of its own. Like a blank text field, an entry that is
//! not a finite number counts as 0.

use anyhow::{ensure, Context, Result};
use itertools::Itertools;

use crate::matrix::Matrix;

pub fn parse_matrix(text: &str) -> Result<Matrix> {
    let rows = text
        .split(|c: char| c == ';' || c == '\n')
        .map(str::trim)
        .filter(|row| !row.is_empty())
        .enumerate()
        .map(|(idx, row)| parse_row(idx, row))
        .collect_vec();
    ensure!(!rows.is_empty(), "matrix input is empty");
    Matrix::from_rows(rows).context("matrix rows must all have the same length")
}

fn parse_row(row_index: usize, row: &str) -> Vec<f64> {
    row.split(',')
        .map(str::trim)
        .flat_map(|piece| {
            if piece.is_empty() {
                vec![piece]
            } else {
                piece.split_whitespace().collect_vec()
            }
        })
        .enumerate()
        .map(|(col_index, entry)| {
            parse_entry(entry).unwrap_or_else(|| {
                log::warn!(
                    "entry {:?} at row {}, column {} is not a number, using 0",
                    entry,
                    row_index + 1,
                    col_index + 1
                );
                0.0
            })
        })
        .collect()
}

fn parse_entry(entry: &str) -> Option<f64> {
    entry.parse::<f64>().ok().filter(|v| v.is_finite())
}
