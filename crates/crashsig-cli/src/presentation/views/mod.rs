pub mod crash;
pub mod html;
pub mod provider;
pub mod signature;
pub mod system;
