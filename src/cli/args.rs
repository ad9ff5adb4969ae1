//! Command-line argument parsing.
//!
//! Flags are parsed by hand: `--flag value` and `--flag=value` are both
//! accepted for the flags that take a value.

use std::path::PathBuf;

/// Overrides applied on top of the environment configuration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunOptions {
    pub user: Option<String>,
    pub api_url: Option<String>,
}

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage
    Help,
    /// Run the dashboard (default)
    RunTui(RunOptions),
    /// Fetch once and write a static HTML page
    ExportHtml { path: PathBuf, options: RunOptions },
    /// Bad arguments; the message names the problem
    Invalid(String),
}

pub const USAGE: &str = "\
Usage: ghtrack [OPTIONS]

Options:
  -u, --user <LOGIN>   GitHub user to load at startup
      --api-url <URL>  API base URL (default https://api.github.com)
      --html <PATH>    Fetch once, write an HTML dashboard to PATH and exit
  -h, --help           Print help
  -V, --version        Print version

Environment:
  GHTRACK_USER, GHTRACK_API_URL  defaults for --user and --api-url
  GHTRACK_LOG                    log filter, e.g. ghtrack=debug";

/// Parse command-line arguments (program name first).
///
/// ```
/// use ghtrack::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["ghtrack".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()), CliCommand::Version);
/// ```
pub fn parse_args<I>(args: I) -> CliCommand
where
    I: Iterator<Item = String>,
{
    let mut options = RunOptions::default();
    let mut html: Option<PathBuf> = None;
    let mut args = args.skip(1);

    while let Some(arg) = args.next() {
        let (flag, inline) = match arg.split_once('=') {
            Some((flag, value)) if flag.starts_with("--") => (flag.to_string(), Some(value.to_string())),
            _ => (arg.clone(), None),
        };

        match flag.as_str() {
            "--version" | "-V" => return CliCommand::Version,
            "--help" | "-h" => return CliCommand::Help,
            "--user" | "-u" | "--api-url" | "--html" => {
                let Some(value) = inline.or_else(|| args.next()) else {
                    return CliCommand::Invalid(format!("{} requires a value", flag));
                };
                if value.trim().is_empty() {
                    return CliCommand::Invalid(format!("{} requires a value", flag));
                }
                match flag.as_str() {
                    "--user" | "-u" => options.user = Some(value.trim().to_string()),
                    "--api-url" => options.api_url = Some(value),
                    _ => html = Some(PathBuf::from(value)),
                }
            }
            _ => return CliCommand::Invalid(format!("unexpected argument '{}'", arg)),
        }
    }

    match html {
        Some(path) => CliCommand::ExportHtml { path, options },
        None => CliCommand::RunTui(options),
    }
}
