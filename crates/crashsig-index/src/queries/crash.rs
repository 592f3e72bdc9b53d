use chrono::{DateTime, Utc};
use crashsig_types::{BucketId, CrashEntry, NewCrashEntry};
use rusqlite::{Connection, Row, params, types::Type};

use crate::{Error, Result};

fn crash_from_row(row: &Row<'_>) -> rusqlite::Result<CrashEntry> {
    let created: String = row.get(1)?;
    let created = DateTime::parse_from_rfc3339(&created)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(1, Type::Text, Box::new(e)))?;

    Ok(CrashEntry {
        id: row.get(0)?,
        created,
        bucket: row.get::<_, Option<i64>>(2)?.map(BucketId::new),
        product: row.get(3)?,
        version: row.get(4)?,
        platform: row.get(5)?,
        os: row.get(6)?,
        testcase_quality: row.get(7)?,
        short_signature: row.get(8)?,
    })
}

pub fn insert(conn: &Connection, crash: &NewCrashEntry, created: DateTime<Utc>) -> Result<i64> {
    if let Some(bucket) = crash.bucket
        && !super::bucket::exists(conn, bucket)?
    {
        return Err(Error::NotFound {
            kind: "Bucket",
            id: bucket.get(),
        });
    }

    conn.execute(
        r#"
        INSERT INTO crash_entries (
            created, bucket, product, version, platform, os,
            raw_stdout, raw_stderr, raw_crash_data, testcase_quality, short_signature
        )
        VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)
        "#,
        params![
            created.to_rfc3339(),
            crash.bucket.map(BucketId::get),
            &crash.product,
            &crash.version,
            &crash.platform,
            &crash.os,
            &crash.raw_stdout,
            &crash.raw_stderr,
            &crash.raw_crash_data,
            crash.testcase_quality,
            &crash.short_signature
        ],
    )?;

    Ok(conn.last_insert_rowid())
}

/// Crash entries not assigned to any bucket, newest first.
pub fn list_unbucketed(conn: &Connection) -> Result<Vec<CrashEntry>> {
    let mut stmt = conn.prepare(
        r#"
        SELECT id, created, bucket, product, version, platform, os,
               testcase_quality, short_signature
        FROM crash_entries
        WHERE bucket IS NULL
        ORDER BY id DESC
        "#,
    )?;

    let crashes = stmt
        .query_map([], crash_from_row)?
        .collect::<std::result::Result<Vec<_>, rusqlite::Error>>()?;

    Ok(crashes)
}

pub fn assign(conn: &Connection, crash_id: i64, bucket: Option<BucketId>) -> Result<()> {
    if let Some(bucket) = bucket
        && !super::bucket::exists(conn, bucket)?
    {
        return Err(Error::NotFound {
            kind: "Bucket",
            id: bucket.get(),
        });
    }

    let updated = conn.execute(
        "UPDATE crash_entries SET bucket = ?2 WHERE id = ?1",
        params![crash_id, bucket.map(BucketId::get)],
    )?;
    if updated == 0 {
        return Err(Error::NotFound {
            kind: "Crash",
            id: crash_id,
        });
    }
    Ok(())
}
