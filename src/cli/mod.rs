//! Command-line interface: argument parsing and configuration layering.
//!
//! ```ignore
//! use ghtrack::cli::{parse_args, CliCommand};
//!
//! match parse_args(std::env::args()) {
//!     CliCommand::RunTui(options) => { /* start the dashboard */ }
//!     other => { /* version, help, export, usage error */ }
//! }
//! ```

pub mod args;
pub mod version;

pub use args::{parse_args, CliCommand, RunOptions, USAGE};
pub use version::{version_line, VERSION};

use crate::config::TrackerConfig;

/// Apply CLI overrides on top of `config` (CLI beats env beats defaults).
pub fn apply_options(config: TrackerConfig, options: &RunOptions) -> TrackerConfig {
    let config = match &options.api_url {
        Some(url) => config.with_api_url(url.clone()),
        None => config,
    };
    match &options.user {
        Some(user) => config.with_default_user(user.clone()),
        None => config,
    }
}
