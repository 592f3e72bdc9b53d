pub mod crash;
pub mod provider;
pub mod signature;

pub use crash::*;
pub use provider::*;
pub use signature::*;
