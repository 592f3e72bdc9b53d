use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::bug::ExternalBug;

/// Bucket identifier (primary key of the bucket a signature defines)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BucketId(i64);

impl BucketId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for BucketId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for BucketId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl FromStr for BucketId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}

/// One row of the signature listing.
///
/// Produced by the index layer with `size` and `quality` already aggregated
/// over the bucket's crash entries. Read-only for everything downstream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignatureEntry {
    pub id: BucketId,
    pub short_description: String,
    /// Number of crash entries in the bucket
    pub size: u64,
    /// Best (lowest) testcase quality among the bucket's crashes
    pub quality: Option<i64>,
    pub bug: Option<ExternalBug>,
    /// Proposed replacement signature awaiting review
    pub optimized_signature: Option<String>,
}

impl SignatureEntry {
    pub fn has_pending_optimization(&self) -> bool {
        self.optimized_signature.is_some()
    }
}

/// A bucket with its full signature text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bucket {
    pub id: BucketId,
    pub signature: String,
    pub short_description: String,
    pub bug: Option<ExternalBug>,
    pub optimized_signature: Option<String>,
    pub frequent: bool,
    pub permanent: bool,
}

/// Which buckets a signature listing covers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SignatureFilter {
    /// Buckets without a linked bug
    #[default]
    Unreported,
    All,
    Watched { user: String },
}

impl SignatureFilter {
    pub fn is_all(&self) -> bool {
        matches!(self, SignatureFilter::All)
    }
}
