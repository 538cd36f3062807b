pub mod row_operation;
pub mod step;
pub mod step_list;

pub use row_operation::{RowOperation, RowOperationKind};
pub use step::MatrixStep;
pub use step_list::StepList;
