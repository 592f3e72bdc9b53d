use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::signature::BucketId;

/// Crash entry metadata as listed (raw output omitted).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrashEntry {
    pub id: i64,
    pub created: DateTime<Utc>,
    pub bucket: Option<BucketId>,
    pub product: String,
    pub version: Option<String>,
    pub platform: String,
    pub os: String,
    /// Lower is better; `None` when no testcase was attached
    pub testcase_quality: Option<i64>,
    pub short_signature: String,
}

/// Crash entry as submitted.
#[derive(Debug, Clone, Default)]
pub struct NewCrashEntry {
    pub bucket: Option<BucketId>,
    pub product: String,
    pub version: Option<String>,
    pub platform: String,
    pub os: String,
    pub raw_stdout: String,
    pub raw_stderr: String,
    pub raw_crash_data: String,
    pub testcase_quality: Option<i64>,
    pub short_signature: String,
}
