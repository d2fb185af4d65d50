//! stderr logger setup.
//!
//! stdout is reserved for the single "Created file" line, so all log
//! records go to stderr.

use env_logger::{Builder, Target};
use log::LevelFilter;

/// Install the global logger.
///
/// `--verbose` and `--quiet` pin the level; otherwise `RUST_LOG` is honoured
/// on top of a `warn` default.
pub(crate) fn init(verbose: bool, quiet: bool) {
    let mut builder = Builder::new();
    builder.target(Target::Stderr);

    if verbose {
        builder.filter_level(LevelFilter::Debug);
        builder.format_timestamp_secs();
    } else if quiet {
        builder.filter_level(LevelFilter::Error);
        builder.format_timestamp(None);
    } else {
        builder.filter_level(LevelFilter::Warn);
        builder.format_timestamp(None);
        builder.parse_default_env();
    }

    if builder.try_init().is_err() {
        log::debug!("Logger already initialized");
    }
}
