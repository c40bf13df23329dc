//! Logging utilities and structured logging support

pub use log::{debug, info, warn, error, trace};

use log::LevelFilter;

const FILTER_ENV: &str = "RUST_LOG";

/// Initialize the logging system at `info`
///
/// The logger itself accepts every level so that [`set_level`] can raise or
/// lower verbosity later, once configuration has been read. `RUST_LOG` takes
/// precedence when it is set. Calling this more than once is harmless; later
/// calls are ignored.
pub fn init() {
    let env = env_logger::Env::default()
        .filter(FILTER_ENV)
        .default_filter_or("trace");
    if env_logger::Builder::from_env(env).try_init().is_err() {
        log::debug!("Logger already initialized, keeping existing configuration");
        return;
    }
    if std::env::var_os(FILTER_ENV).is_none() {
        log::set_max_level(LevelFilter::Info);
    }
}

/// Apply a configured level such as `"debug"` or `"warn"`
///
/// Ignored when `RUST_LOG` is set. Unknown names are reported and leave the
/// current level in place.
pub fn set_level(level: &str) {
    if std::env::var_os(FILTER_ENV).is_some() {
        return;
    }
    match parse_level(level) {
        Some(filter) => {
            log::set_max_level(filter);
            log::debug!("Log level set to {}", filter);
        }
        None => log::warn!("Unknown log level '{}', keeping {}", level, log::max_level()),
    }
}

/// Parse a level name, case-insensitive
pub fn parse_level(level: &str) -> Option<LevelFilter> {
    level.trim().parse().ok()
}
