pub mod constants;
pub mod fees;
pub mod invariants;
pub mod introspection;

pub use constants::*;
pub use fees::*;
pub use invariants::*;
pub use introspection::*;
