//! Tracing subscriber setup for the command-line tool

use tracing::Level;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Log level for a count of `-v` flags, quiet runs only report errors
pub const fn level_for(verbosity: u8, quiet: bool) -> Level {
    if quiet {
        return Level::ERROR;
    }
    match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Install a stderr subscriber filtered by `RUST_LOG` and the given level
///
/// Returns false when a global subscriber was already installed, in which
/// case the existing one keeps receiving events
pub fn init_logging(level: Level) -> bool {
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(filter)
        .try_init()
        .is_ok()
}
