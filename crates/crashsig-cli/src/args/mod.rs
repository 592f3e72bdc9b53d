// NOTE: Command Organization
//
// Namespaced subcommands (signature, crash, provider, index) group related
// operations; `serve` stands alone because it runs until interrupted.

mod commands;
mod common;
mod enums;

pub use commands::*;
pub use common::*;
pub use enums::*;

use clap::Parser;

#[derive(Parser)]
#[command(name = "crashsig")]
#[command(about = "Manage crash bucket signatures", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Data directory holding crashsig.db and config.toml
    #[arg(long, global = true)]
    pub data_dir: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, default_value = "info", global = true)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
