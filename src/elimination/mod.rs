pub mod echelon_reduction;

pub use echelon_reduction::{
    reduced_row_echelon_steps, row_echelon_steps, EchelonReduction, Reduction,
};
