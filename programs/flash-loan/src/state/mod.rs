pub mod loan_marker;
pub mod pool;

pub use loan_marker::*;
pub use pool::*;
