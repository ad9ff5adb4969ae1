//! Error types for ghtrack.
//!
//! - [`FetchError`]: every way a dashboard load can fail. All variants share one
//!   recovery path, so the only thing callers need is the inline message.
//! - [`ExportError`]: failures writing the static HTML snapshot.

mod export;
mod fetch;

pub use export::ExportError;
pub use fetch::{FetchError, FetchResource};

/// Result alias for dashboard loads.
pub type FetchResult<T> = Result<T, FetchError>;
