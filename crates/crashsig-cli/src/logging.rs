use tracing_subscriber::{EnvFilter, fmt};

use crate::args::LogLevel;

/// Install the global tracing subscriber. `RUST_LOG` overrides `--log-level`.
/// Output goes to stderr so it never mixes with rendered stdout.
pub fn init(level: LogLevel) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_str()));

    // A subscriber may already be installed (tests running in one process)
    let _ = fmt()
        .with_env_filter(filter)
        .without_time()
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
