use crashsig_types::BucketId;
use rusqlite::{Connection, params};

use crate::records::WatchRecord;
use crate::{Error, Result};

/// Start (or refresh) watching a bucket. The watch starts at the newest
/// crash currently in the bucket.
pub fn watch(conn: &Connection, user: &str, bucket: BucketId) -> Result<WatchRecord> {
    if !super::bucket::exists(conn, bucket)? {
        return Err(Error::NotFound {
            kind: "Bucket",
            id: bucket.get(),
        });
    }

    let last_crash: i64 = conn.query_row(
        "SELECT COALESCE(MAX(id), 0) FROM crash_entries WHERE bucket = ?1",
        [bucket.get()],
        |row| row.get(0),
    )?;

    conn.execute(
        r#"
        INSERT INTO bucket_watches (user, bucket, last_crash)
        VALUES (?1, ?2, ?3)
        ON CONFLICT(user, bucket) DO UPDATE SET
            last_crash = ?3
        "#,
        params![user, bucket.get(), last_crash],
    )?;

    Ok(WatchRecord {
        user: user.to_string(),
        bucket: bucket.get(),
        last_crash,
    })
}

/// Returns false when the user was not watching the bucket.
pub fn unwatch(conn: &Connection, user: &str, bucket: BucketId) -> Result<bool> {
    let deleted = conn.execute(
        "DELETE FROM bucket_watches WHERE user = ?1 AND bucket = ?2",
        params![user, bucket.get()],
    )?;
    Ok(deleted > 0)
}
