// NOTE: crashsig Architecture
//
// - crashsig-index owns all persistence; sizes and qualities are aggregated
//   on read, never stored.
// - Handlers query the index once, hand the result to a presenter, and the
//   presenter produces a view model carrying raw data and resolved links.
// - Views turn view models into text (fmt::Display) or HTML (askama).
//   HTML views never compute anything beyond row striping.
// - The HTTP server reuses the same presenters and HTML views; each request
//   opens its own Database.

mod args;
mod commands;
pub mod config;
mod handlers;
pub mod logging;
pub mod presentation;
pub mod server;

pub use args::{
    Cli, Commands, CrashCommand, IndexCommand, LogLevel, OutputFormat, ProviderCommand,
    SignatureCommand,
};
pub use commands::run;
