pub mod initialize;
pub mod deposit;
pub mod withdraw;
pub mod set_fee;
pub mod loan;
pub mod borrow;
pub mod repay;

pub use initialize::*;
pub use deposit::*;
pub use withdraw::*;
pub use set_fee::*;
pub use loan::*;
