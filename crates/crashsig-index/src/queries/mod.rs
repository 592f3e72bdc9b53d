pub mod bucket;
pub mod bug;
pub mod crash;
pub mod watch;
