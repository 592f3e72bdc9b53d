mod context;

pub mod crash;
pub mod guidance;
pub mod index;
pub mod provider;
pub mod serve;
pub mod signature;

pub use context::HandlerContext;
