use anyhow::{Context, Result};
use crashsig_index::Database;
use crashsig_types::{BucketId, NewCrashEntry};
use std::path::{Path, PathBuf};
use tracing::info;

use crate::args::{OutputFormat, ViewModeArgs};
use crate::handlers::HandlerContext;
use crate::presentation::presenters;
use crate::presentation::view_models::{CommandResultViewModel, CrashActionViewModel, StatusBadge};

/// Fields of `crash add`, grouped to keep the handler signature short.
pub struct CrashSubmission {
    pub product: String,
    pub version: Option<String>,
    pub platform: String,
    pub os: String,
    pub quality: Option<i64>,
    pub bucket: Option<BucketId>,
    pub short_signature: Option<String>,
    pub stdout_file: Option<PathBuf>,
    pub stderr_file: Option<PathBuf>,
    pub crashdata_file: Option<PathBuf>,
}

fn read_optional(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => Ok(String::new()),
    }
}

pub fn list(db: &Database, format: OutputFormat, view_mode: &ViewModeArgs) -> Result<()> {
    let ctx = HandlerContext::new(format, view_mode);
    let crashes = db.list_unbucketed_crashes()?;
    let view_model = presenters::present_crash_list(&crashes);
    ctx.render(CommandResultViewModel::new(view_model))
}

pub fn add(db: &Database, submission: CrashSubmission, format: OutputFormat) -> Result<()> {
    let raw_crash_data = read_optional(submission.crashdata_file.as_deref())?;
    let short_signature = submission.short_signature.unwrap_or_else(|| {
        raw_crash_data
            .lines()
            .map(str::trim)
            .find(|line| !line.is_empty())
            .unwrap_or("No crash signature available")
            .to_string()
    });

    let new = NewCrashEntry {
        bucket: submission.bucket,
        product: submission.product,
        version: submission.version,
        platform: submission.platform,
        os: submission.os,
        raw_stdout: read_optional(submission.stdout_file.as_deref())?,
        raw_stderr: read_optional(submission.stderr_file.as_deref())?,
        raw_crash_data,
        testcase_quality: submission.quality,
        short_signature,
    };

    let id = db.insert_crash(&new)?;
    info!(id, bucket = ?new.bucket.map(BucketId::get), "added crash entry");

    let view_model = CrashActionViewModel {
        id,
        bucket: new.bucket.map(BucketId::get),
        created: true,
    };
    HandlerContext::standard(format).render(
        CommandResultViewModel::new(view_model).with_badge(StatusBadge::success("Crash added")),
    )
}

pub fn assign(
    db: &Database,
    crash_id: i64,
    bucket: Option<BucketId>,
    format: OutputFormat,
) -> Result<()> {
    db.assign_crash(crash_id, bucket)?;
    info!(crash_id, bucket = ?bucket.map(BucketId::get), "assigned crash entry");

    let view_model = CrashActionViewModel {
        id: crash_id,
        bucket: bucket.map(BucketId::get),
        created: false,
    };
    HandlerContext::standard(format).render(
        CommandResultViewModel::new(view_model).with_badge(StatusBadge::success("Crash updated")),
    )
}
