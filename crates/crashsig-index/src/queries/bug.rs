use crashsig_types::{BucketId, BugProvider, ExternalBug};
use rusqlite::{Connection, OptionalExtension, Row, params};

use crate::{Error, Result};

// Columns expected by `bug_from_row`, starting at the given offset:
// bugs.id, bugs.external_id, bugs.closed,
// bug_providers.id, classname, hostname, url_template
pub const BUG_COLUMNS: &str =
    "g.id, g.external_id, g.closed, p.id, p.classname, p.hostname, p.url_template";

pub fn bug_from_row(row: &Row<'_>, offset: usize) -> rusqlite::Result<Option<ExternalBug>> {
    let Some(id) = row.get::<_, Option<i64>>(offset)? else {
        return Ok(None);
    };

    Ok(Some(ExternalBug {
        id,
        external_id: row.get(offset + 1)?,
        closed: row.get(offset + 2)?,
        external_type: BugProvider {
            id: row.get(offset + 3)?,
            classname: row.get(offset + 4)?,
            hostname: row.get(offset + 5)?,
            url_template: row.get(offset + 6)?,
        },
    }))
}

fn provider_from_row(row: &Row<'_>) -> rusqlite::Result<BugProvider> {
    Ok(BugProvider {
        id: row.get(0)?,
        classname: row.get(1)?,
        hostname: row.get(2)?,
        url_template: row.get(3)?,
    })
}

pub fn insert_provider(
    conn: &Connection,
    classname: &str,
    hostname: &str,
    url_template: &str,
) -> Result<i64> {
    conn.execute(
        r#"
        INSERT INTO bug_providers (classname, hostname, url_template)
        VALUES (?1, ?2, ?3)
        ON CONFLICT(hostname) DO UPDATE SET
            classname = ?1,
            url_template = ?3
        "#,
        params![classname, hostname, url_template],
    )?;

    let id = conn.query_row(
        "SELECT id FROM bug_providers WHERE hostname = ?1",
        [hostname],
        |row| row.get(0),
    )?;

    Ok(id)
}

pub fn list_providers(conn: &Connection) -> Result<Vec<BugProvider>> {
    let mut stmt = conn.prepare(
        r#"
        SELECT id, classname, hostname, url_template
        FROM bug_providers
        ORDER BY hostname
        "#,
    )?;

    let providers = stmt
        .query_map([], provider_from_row)?
        .collect::<std::result::Result<Vec<_>, rusqlite::Error>>()?;

    Ok(providers)
}

pub fn get_provider_by_hostname(conn: &Connection, hostname: &str) -> Result<Option<BugProvider>> {
    let provider = conn
        .query_row(
            r#"
            SELECT id, classname, hostname, url_template
            FROM bug_providers
            WHERE hostname = ?1
            "#,
            [hostname],
            provider_from_row,
        )
        .optional()?;

    Ok(provider)
}

/// Upsert the bug `(external_id, provider)` and assign it to the bucket.
pub fn link(
    conn: &Connection,
    bucket: BucketId,
    provider_id: i64,
    external_id: &str,
    closed: bool,
) -> Result<i64> {
    let external_id = external_id.trim();
    if external_id.is_empty() {
        return Err(Error::Query("external bug id must not be empty".to_string()));
    }

    let tx = conn.unchecked_transaction()?;

    tx.execute(
        r#"
        INSERT INTO bugs (external_id, external_type, closed)
        VALUES (?1, ?2, ?3)
        ON CONFLICT(external_id, external_type) DO UPDATE SET
            closed = ?3
        "#,
        params![external_id, provider_id, closed],
    )?;

    let bug_id: i64 = tx.query_row(
        "SELECT id FROM bugs WHERE external_id = ?1 AND external_type = ?2",
        params![external_id, provider_id],
        |row| row.get(0),
    )?;

    let updated = tx.execute(
        "UPDATE buckets SET bug = ?1 WHERE id = ?2",
        params![bug_id, bucket.get()],
    )?;
    if updated == 0 {
        return Err(Error::NotFound {
            kind: "Bucket",
            id: bucket.get(),
        });
    }

    tx.commit()?;
    Ok(bug_id)
}

pub fn unlink(conn: &Connection, bucket: BucketId) -> Result<()> {
    let updated = conn.execute(
        "UPDATE buckets SET bug = NULL WHERE id = ?1",
        [bucket.get()],
    )?;
    if updated == 0 {
        return Err(Error::NotFound {
            kind: "Bucket",
            id: bucket.get(),
        });
    }
    Ok(())
}

pub fn set_closed(conn: &Connection, bug_id: i64, closed: bool) -> Result<()> {
    let updated = conn.execute(
        "UPDATE bugs SET closed = ?1 WHERE id = ?2",
        params![closed, bug_id],
    )?;
    if updated == 0 {
        return Err(Error::NotFound {
            kind: "Bug",
            id: bug_id,
        });
    }
    Ok(())
}
