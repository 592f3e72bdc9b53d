pub mod bug;
pub mod crash;
pub mod signature;

pub use bug::*;
pub use crash::*;
pub use signature::*;
