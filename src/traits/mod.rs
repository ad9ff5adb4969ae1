//! Trait abstractions for dependency injection and testability.
//!
//! - [`HttpClient`] - HTTP GET operations used by the fetch coordinator

pub mod http;

pub use http::{Headers, HttpClient, HttpError, Response};
