use rusqlite::Connection;

use crate::Result;

// Schema version (increment when changing table definitions)
pub const SCHEMA_VERSION: i32 = 3;

// NOTE: Sizes and best test quality are never stored on buckets.
// They are aggregated from crash_entries on every listing so that
// reassigning or deleting crashes needs no bookkeeping.
//
// Deleting a bucket must not delete its crashes: crash_entries.bucket is
// nulled first (see queries::bucket::delete), the crashes become unbucketed.

pub fn init_schema(conn: &Connection) -> Result<()> {
    let current_version: i32 = conn.query_row("PRAGMA user_version", [], |row| row.get(0))?;

    if current_version != SCHEMA_VERSION {
        drop_all_tables(conn)?;
    }

    conn.execute_batch(
        r#"
        PRAGMA foreign_keys = ON;

        CREATE TABLE IF NOT EXISTS bug_providers (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            classname TEXT NOT NULL,
            hostname TEXT NOT NULL UNIQUE,
            url_template TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS bugs (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            external_id TEXT NOT NULL,
            external_type INTEGER NOT NULL,
            closed BOOLEAN NOT NULL DEFAULT 0,
            UNIQUE (external_id, external_type),
            FOREIGN KEY (external_type) REFERENCES bug_providers(id)
        );

        CREATE TABLE IF NOT EXISTS buckets (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            signature TEXT NOT NULL,
            short_description TEXT NOT NULL DEFAULT '',
            bug INTEGER,
            optimized_signature TEXT,
            frequent BOOLEAN NOT NULL DEFAULT 0,
            permanent BOOLEAN NOT NULL DEFAULT 0,
            FOREIGN KEY (bug) REFERENCES bugs(id)
        );

        CREATE TABLE IF NOT EXISTS crash_entries (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            created TEXT NOT NULL,
            bucket INTEGER,
            product TEXT NOT NULL,
            version TEXT,
            platform TEXT NOT NULL,
            os TEXT NOT NULL,
            raw_stdout TEXT NOT NULL DEFAULT '',
            raw_stderr TEXT NOT NULL DEFAULT '',
            raw_crash_data TEXT NOT NULL DEFAULT '',
            testcase_quality INTEGER,
            short_signature TEXT NOT NULL DEFAULT '',
            FOREIGN KEY (bucket) REFERENCES buckets(id)
        );

        CREATE TABLE IF NOT EXISTS bucket_watches (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            user TEXT NOT NULL,
            bucket INTEGER NOT NULL,
            last_crash INTEGER NOT NULL DEFAULT 0,
            UNIQUE (user, bucket),
            FOREIGN KEY (bucket) REFERENCES buckets(id)
        );

        CREATE INDEX IF NOT EXISTS idx_buckets_bug ON buckets(bug);
        CREATE INDEX IF NOT EXISTS idx_crashes_bucket ON crash_entries(bucket);
        CREATE INDEX IF NOT EXISTS idx_watches_user ON bucket_watches(user);
        "#,
    )?;

    conn.execute(&format!("PRAGMA user_version = {}", SCHEMA_VERSION), [])?;

    Ok(())
}

fn drop_all_tables(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        PRAGMA foreign_keys = OFF;
        DROP TABLE IF EXISTS bucket_watches;
        DROP TABLE IF EXISTS crash_entries;
        DROP TABLE IF EXISTS buckets;
        DROP TABLE IF EXISTS bugs;
        DROP TABLE IF EXISTS bug_providers;
        "#,
    )?;
    Ok(())
}
