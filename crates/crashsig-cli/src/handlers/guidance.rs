use anyhow::Result;
use crashsig_index::Database;
use crashsig_types::SignatureFilter;
use std::path::Path;

use crate::args::OutputFormat;
use crate::config::DB_FILE;
use crate::handlers::HandlerContext;
use crate::presentation::view_models::{CommandResultViewModel, GuidanceViewModel};

/// Shown when no subcommand is given. Never creates the database.
pub fn handle(data_dir: &Path, format: OutputFormat) -> Result<()> {
    let db_path = data_dir.join(DB_FILE);
    let db_exists = db_path.exists();

    let (signature_count, unbucketed_crash_count) = if db_exists {
        let db = Database::open(&db_path)?;
        (
            db.list_signatures(&SignatureFilter::All)?.len(),
            db.list_unbucketed_crashes()?.len(),
        )
    } else {
        (0, 0)
    };

    let view_model = GuidanceViewModel {
        data_dir: data_dir.display().to_string(),
        db_exists,
        signature_count,
        unbucketed_crash_count,
    };
    HandlerContext::standard(format).render(CommandResultViewModel::new(view_model))
}
