pub mod elimination;
pub mod fraction_format;
pub mod matrix;
pub mod matrix_input;
pub mod render;
pub mod steps;

pub use elimination::{reduced_row_echelon_steps, row_echelon_steps, EchelonReduction, Reduction};
pub use fraction_format::{format_value, FractionFormatter};
pub use matrix::{Matrix, EPS};
pub use steps::{MatrixStep, RowOperation, StepList};
