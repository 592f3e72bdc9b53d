use anyhow::{Context, Result};
use std::path::Path;

use crate::config::{Config, DB_FILE};
use crate::presentation::RouteTable;
use crate::server::{self, AppState};

pub fn handle(
    data_dir: &Path,
    config: &Config,
    bind_address: Option<String>,
    port: Option<u16>,
) -> Result<()> {
    let bind_address = bind_address.unwrap_or_else(|| config.server.bind_address.clone());
    let port = port.unwrap_or(config.server.port);

    let state = AppState {
        db_path: data_dir.join(DB_FILE),
        routes: RouteTable::new(&config.url_prefix),
        user: config.user.clone(),
    };

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;

    runtime.block_on(server::serve(state, &bind_address, port))
}
