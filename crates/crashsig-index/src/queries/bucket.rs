use crashsig_types::{Bucket, BucketId, SignatureEntry, SignatureFilter, validate_signature};
use rusqlite::{Connection, OptionalExtension, params, params_from_iter};

use super::bug::{BUG_COLUMNS, bug_from_row};
use crate::records::NewBucket;
use crate::{Error, Result};

/// Signature listing: one row per bucket matching `filter`, with crash count
/// and best testcase quality, largest buckets first.
pub fn list_signatures(conn: &Connection, filter: &SignatureFilter) -> Result<Vec<SignatureEntry>> {
    let (clause, args): (&str, Vec<&str>) = match filter {
        SignatureFilter::Unreported => ("b.bug IS NULL", vec![]),
        SignatureFilter::All => ("1 = 1", vec![]),
        SignatureFilter::Watched { user } => (
            "b.id IN (SELECT bucket FROM bucket_watches WHERE user = ?1)",
            vec![user.as_str()],
        ),
    };

    let sql = format!(
        r#"
        SELECT b.id, b.short_description, COUNT(c.id) AS size, MIN(c.testcase_quality),
               b.optimized_signature, {}
        FROM buckets b
        LEFT JOIN crash_entries c ON c.bucket = b.id
        LEFT JOIN bugs g ON g.id = b.bug
        LEFT JOIN bug_providers p ON p.id = g.external_type
        WHERE {}
        GROUP BY b.id
        ORDER BY size DESC, b.id ASC
        "#,
        BUG_COLUMNS, clause
    );

    let mut stmt = conn.prepare(&sql)?;
    let entries = stmt
        .query_map(params_from_iter(args), |row| {
            let size: i64 = row.get(2)?;
            Ok(SignatureEntry {
                id: BucketId::new(row.get(0)?),
                short_description: row.get(1)?,
                size: size.max(0) as u64,
                quality: row.get(3)?,
                optimized_signature: row.get(4)?,
                bug: bug_from_row(row, 5)?,
            })
        })?
        .collect::<std::result::Result<Vec<_>, rusqlite::Error>>()?;

    Ok(entries)
}

pub fn get(conn: &Connection, id: BucketId) -> Result<Option<Bucket>> {
    let sql = format!(
        r#"
        SELECT b.id, b.signature, b.short_description, b.optimized_signature,
               b.frequent, b.permanent, {}
        FROM buckets b
        LEFT JOIN bugs g ON g.id = b.bug
        LEFT JOIN bug_providers p ON p.id = g.external_type
        WHERE b.id = ?1
        "#,
        BUG_COLUMNS
    );

    let bucket = conn
        .query_row(&sql, [id.get()], |row| {
            Ok(Bucket {
                id: BucketId::new(row.get(0)?),
                signature: row.get(1)?,
                short_description: row.get(2)?,
                optimized_signature: row.get(3)?,
                frequent: row.get(4)?,
                permanent: row.get(5)?,
                bug: bug_from_row(row, 6)?,
            })
        })
        .optional()?;

    Ok(bucket)
}

pub fn insert(conn: &Connection, bucket: &NewBucket) -> Result<BucketId> {
    validate_signature(&bucket.signature)?;

    conn.execute(
        r#"
        INSERT INTO buckets (signature, short_description, frequent, permanent)
        VALUES (?1, ?2, ?3, ?4)
        "#,
        params![
            &bucket.signature,
            &bucket.short_description,
            bucket.frequent,
            bucket.permanent
        ],
    )?;

    Ok(BucketId::new(conn.last_insert_rowid()))
}

pub fn update(
    conn: &Connection,
    id: BucketId,
    signature: Option<&str>,
    short_description: Option<&str>,
) -> Result<()> {
    if let Some(signature) = signature {
        validate_signature(signature)?;
    }

    let updated = conn.execute(
        r#"
        UPDATE buckets SET
            signature = COALESCE(?2, signature),
            short_description = COALESCE(?3, short_description)
        WHERE id = ?1
        "#,
        params![id.get(), signature, short_description],
    )?;

    ensure_updated(updated, id)
}

pub fn set_optimized_signature(
    conn: &Connection,
    id: BucketId,
    optimized: Option<&str>,
) -> Result<()> {
    if let Some(signature) = optimized {
        validate_signature(signature)?;
    }

    let updated = conn.execute(
        "UPDATE buckets SET optimized_signature = ?2 WHERE id = ?1",
        params![id.get(), optimized],
    )?;

    ensure_updated(updated, id)
}

/// Delete a bucket. Its crash entries are kept and become unbucketed.
/// Returns how many crashes were released.
pub fn delete(conn: &Connection, id: BucketId) -> Result<usize> {
    let tx = conn.unchecked_transaction()?;

    let released = tx.execute(
        "UPDATE crash_entries SET bucket = NULL WHERE bucket = ?1",
        [id.get()],
    )?;
    tx.execute("DELETE FROM bucket_watches WHERE bucket = ?1", [id.get()])?;
    let deleted = tx.execute("DELETE FROM buckets WHERE id = ?1", [id.get()])?;
    if deleted == 0 {
        return Err(Error::NotFound {
            kind: "Bucket",
            id: id.get(),
        });
    }

    tx.commit()?;
    Ok(released)
}

pub fn count_crashes(conn: &Connection, id: BucketId) -> Result<usize> {
    let count: i64 = conn.query_row(
        "SELECT COUNT(*) FROM crash_entries WHERE bucket = ?1",
        [id.get()],
        |row| row.get(0),
    )?;

    Ok(count as usize)
}

pub fn exists(conn: &Connection, id: BucketId) -> Result<bool> {
    let found = conn
        .query_row(
            "SELECT 1 FROM buckets WHERE id = ?1",
            [id.get()],
            |_| Ok(()),
        )
        .optional()?;
    Ok(found.is_some())
}

fn ensure_updated(updated: usize, id: BucketId) -> Result<()> {
    if updated == 0 {
        return Err(Error::NotFound {
            kind: "Bucket",
            id: id.get(),
        });
    }
    Ok(())
}
