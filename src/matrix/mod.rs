pub mod dense_matrix;
pub mod row_operations;

pub use dense_matrix::Matrix;

// threshold for usable pivots, recordable changes and snapping residues to zero
pub const EPS: f64 = 1e-12;
