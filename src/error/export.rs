//! Errors raised while writing an HTML snapshot.

use std::path::PathBuf;
use thiserror::Error;

use super::FetchError;

/// Errors from the one-shot `--html` export.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Blank username, nothing to export")]
    BlankUsername,

    #[error("{0}")]
    Fetch(#[from] FetchError),

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_error_message_passes_through() {
        let err: ExportError = FetchError::UserNotFound.into();
        assert_eq!(err.to_string(), "User not found");
    }

    #[test]
    fn test_write_error_names_path() {
        let err = ExportError::Write {
            path: PathBuf::from("/nope/out.html"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing dir"),
        };
        assert!(err.to_string().contains("/nope/out.html"));
        assert!(err.to_string().contains("missing dir"));
    }
}
