// src/logging.rs
// =============================================================================
// Sets up `tracing` output on stderr.
//
// stdout is reserved for the dashboard itself (so `--json` can be piped),
// which is why logs always go to stderr.
//
// Level: RUST_LOG if set, otherwise "warn", or "debug" with --verbose.
// =============================================================================

use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

pub fn init_logging(verbose: bool) -> Result<()> {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(verbose)
        .try_init()
        .map_err(|e| anyhow!("Failed to initialize logging: {}", e))
}
