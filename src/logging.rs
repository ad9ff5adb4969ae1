//! File logging.
//!
//! The dashboard owns the alternate screen, so log lines go to
//! `{cache dir}/ghtrack/ghtrack.log` instead of stderr. Nothing is installed
//! unless `GHTRACK_LOG` is set; its value is an `EnvFilter` directive.

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

/// Environment variable that enables logging and holds the filter directive.
pub const ENV_LOG: &str = "GHTRACK_LOG";

/// Directive used when `GHTRACK_LOG` is set but does not parse.
const FALLBACK_DIRECTIVE: &str = "ghtrack=debug";

/// Location of the log file.
pub fn log_path() -> Option<PathBuf> {
    dirs::cache_dir().map(|dir| dir.join("ghtrack").join("ghtrack.log"))
}

/// Parse a directive, falling back to debug output for this crate.
pub fn build_filter(directive: &str) -> EnvFilter {
    EnvFilter::try_new(directive.trim()).unwrap_or_else(|_| EnvFilter::new(FALLBACK_DIRECTIVE))
}

/// Install the global subscriber when `GHTRACK_LOG` is set.
///
/// Returns the log file path when logging was enabled. Failures to create the
/// file leave logging off rather than aborting startup.
pub fn init() -> Option<PathBuf> {
    let directive = std::env::var(ENV_LOG).ok().filter(|v| !v.trim().is_empty())?;
    let path = log_path()?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).ok()?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .ok()?;

    tracing_subscriber::fmt()
        .with_env_filter(build_filter(&directive))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .ok()?;

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "Logging started");
    Some(path)
}
