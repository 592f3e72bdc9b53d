use chrono::Utc;
use crashsig_types::{
    Bucket, BucketId, BugProvider, CrashEntry, NewCrashEntry, SignatureEntry, SignatureFilter,
};
use rusqlite::Connection;
use std::path::Path;

use crate::queries::{bucket, bug, crash, watch};
use crate::records::{NewBucket, WatchRecord};
use crate::{Result, schema};

pub struct Database {
    conn: Connection,
}

impl Database {
    pub fn open(db_path: &Path) -> Result<Self> {
        if let Some(parent) = db_path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }

        let conn = Connection::open(db_path)?;
        schema::init_schema(&conn)?;
        Ok(Self { conn })
    }

    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        schema::init_schema(&conn)?;
        Ok(Self { conn })
    }

    // Signatures (buckets)

    pub fn list_signatures(&self, filter: &SignatureFilter) -> Result<Vec<SignatureEntry>> {
        bucket::list_signatures(&self.conn, filter)
    }

    pub fn get_bucket(&self, id: BucketId) -> Result<Option<Bucket>> {
        bucket::get(&self.conn, id)
    }

    pub fn count_bucket_crashes(&self, id: BucketId) -> Result<usize> {
        bucket::count_crashes(&self.conn, id)
    }

    pub fn insert_bucket(&self, new: &NewBucket) -> Result<BucketId> {
        bucket::insert(&self.conn, new)
    }

    pub fn update_bucket(
        &self,
        id: BucketId,
        signature: Option<&str>,
        short_description: Option<&str>,
    ) -> Result<()> {
        bucket::update(&self.conn, id, signature, short_description)
    }

    pub fn set_optimized_signature(&self, id: BucketId, optimized: Option<&str>) -> Result<()> {
        bucket::set_optimized_signature(&self.conn, id, optimized)
    }

    pub fn delete_bucket(&self, id: BucketId) -> Result<usize> {
        bucket::delete(&self.conn, id)
    }

    // Bugs

    pub fn insert_bug_provider(
        &self,
        classname: &str,
        hostname: &str,
        url_template: &str,
    ) -> Result<i64> {
        bug::insert_provider(&self.conn, classname, hostname, url_template)
    }

    pub fn list_bug_providers(&self) -> Result<Vec<BugProvider>> {
        bug::list_providers(&self.conn)
    }

    pub fn get_bug_provider_by_hostname(&self, hostname: &str) -> Result<Option<BugProvider>> {
        bug::get_provider_by_hostname(&self.conn, hostname)
    }

    pub fn link_bug(
        &self,
        bucket: BucketId,
        provider_id: i64,
        external_id: &str,
        closed: bool,
    ) -> Result<i64> {
        bug::link(&self.conn, bucket, provider_id, external_id, closed)
    }

    pub fn unlink_bug(&self, bucket: BucketId) -> Result<()> {
        bug::unlink(&self.conn, bucket)
    }

    pub fn set_bug_closed(&self, bug_id: i64, closed: bool) -> Result<()> {
        bug::set_closed(&self.conn, bug_id, closed)
    }

    // Crash entries

    pub fn insert_crash(&self, new: &NewCrashEntry) -> Result<i64> {
        crash::insert(&self.conn, new, Utc::now())
    }

    pub fn list_unbucketed_crashes(&self) -> Result<Vec<CrashEntry>> {
        crash::list_unbucketed(&self.conn)
    }

    pub fn assign_crash(&self, crash_id: i64, bucket: Option<BucketId>) -> Result<()> {
        crash::assign(&self.conn, crash_id, bucket)
    }

    // Watches

    pub fn watch_bucket(&self, user: &str, bucket: BucketId) -> Result<WatchRecord> {
        watch::watch(&self.conn, user, bucket)
    }

    pub fn unwatch_bucket(&self, user: &str, bucket: BucketId) -> Result<bool> {
        watch::unwatch(&self.conn, user, bucket)
    }

    pub fn vacuum(&self) -> Result<()> {
        self.conn.execute("VACUUM", [])?;
        Ok(())
    }
}
