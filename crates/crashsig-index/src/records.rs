/// Bucket as submitted for creation.
#[derive(Debug, Clone, Default)]
pub struct NewBucket {
    /// Signature JSON text
    pub signature: String,
    pub short_description: String,
    pub frequent: bool,
    pub permanent: bool,
}

/// A user's watch on a bucket.
///
/// `last_crash` is the highest crash id the watcher has seen in the bucket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WatchRecord {
    pub user: String,
    pub bucket: i64,
    pub last_crash: i64,
}
