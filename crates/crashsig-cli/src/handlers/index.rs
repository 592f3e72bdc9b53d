use anyhow::Result;
use crashsig_index::Database;
use tracing::info;

use crate::args::OutputFormat;
use crate::handlers::HandlerContext;
use crate::presentation::view_models::{CommandResultViewModel, MessageViewModel};

pub fn vacuum(db: &Database, format: OutputFormat) -> Result<()> {
    db.vacuum()?;
    info!("vacuumed index database");

    let view_model = MessageViewModel {
        message: "Database compacted".to_string(),
    };
    HandlerContext::standard(format).render(CommandResultViewModel::new(view_model))
}
