//! Command-line front end
//!
//! Logs go to stderr through `tracing`; results go to stdout.

pub mod commands;

pub use commands::{Cli, Commands, HistoryCommand, run};

use tracing_subscriber::EnvFilter;

/// Install the stderr log subscriber
///
/// `--verbose` turns on debug output for this crate; otherwise `RUST_LOG`
/// decides, defaulting to warnings only.
pub fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("isochrone_viewer=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    // A subscriber may already be installed when embedded or under test
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
