//! Integration tests for schema migration
//!
//! Database::open must drop and recreate tables when the stored schema
//! version does not match, and must keep data across reopen otherwise.

use crashsig_index::{Database, NewBucket, SCHEMA_VERSION};
use crashsig_types::SignatureFilter;
use rusqlite::Connection;
use std::path::Path;
use tempfile::TempDir;

const SIG: &str = r#"{"symptoms": [{"type": "stackFrame", "functionName": "js::gc::Mark"}]}"#;

/// Create a database with an old schema (version 2) whose buckets table
/// lacks optimized_signature
fn create_old_schema_db(path: &Path) {
    let conn = Connection::open(path).unwrap();

    conn.execute_batch(
        r#"
        CREATE TABLE buckets (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            signature TEXT NOT NULL,
            short_description TEXT NOT NULL DEFAULT '',
            bug INTEGER
        );

        CREATE TABLE crash_entries (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            bucket INTEGER,
            product TEXT NOT NULL
        );

        PRAGMA user_version = 2;
        "#,
    )
    .unwrap();

    conn.execute(
        "INSERT INTO buckets (signature, short_description) VALUES ('{}', 'old bucket')",
        [],
    )
    .unwrap();
}

#[test]
fn test_auto_migration_from_old_schema() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("crashsig.db");

    create_old_schema_db(&db_path);

    let db = Database::open(&db_path).unwrap();

    // Old rows are gone, new columns are usable
    let entries = db.list_signatures(&SignatureFilter::All).unwrap();
    assert!(entries.is_empty());

    let id = db
        .insert_bucket(&NewBucket {
            signature: SIG.to_string(),
            short_description: "fresh".to_string(),
            ..Default::default()
        })
        .unwrap();
    db.set_optimized_signature(id, Some(SIG)).unwrap();
    drop(db);

    let conn = Connection::open(&db_path).unwrap();
    let version: i32 = conn
        .query_row("PRAGMA user_version", [], |row| row.get(0))
        .unwrap();
    assert_eq!(version, SCHEMA_VERSION);
}

#[test]
fn test_reopen_keeps_data() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let db_path = temp_dir.path().join("nested").join("crashsig.db");

    {
        let db = Database::open(&db_path)?;
        db.insert_bucket(&NewBucket {
            signature: SIG.to_string(),
            short_description: "persisted".to_string(),
            ..Default::default()
        })?;
    }

    let db = Database::open(&db_path)?;
    let entries = db.list_signatures(&SignatureFilter::Unreported)?;
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].short_description, "persisted");
    Ok(())
}
