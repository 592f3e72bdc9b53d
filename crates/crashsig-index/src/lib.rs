// SQLite crash bucket index
// Buckets own their signature text; sizes and qualities are aggregated on read

mod db;
mod error;
mod queries;
mod records;
mod schema;

// Public API
pub use db::Database;
pub use error::{Error, Result};
pub use records::{NewBucket, WatchRecord};
pub use schema::SCHEMA_VERSION;
