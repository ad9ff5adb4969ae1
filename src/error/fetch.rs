//! Fetch failure taxonomy.
//!
//! The `Display` text of each variant is exactly what the profile region shows
//! inline, so it is kept short and free of debugging detail.

use std::fmt;

use crate::traits::HttpError;

/// Which endpoint a status failure came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchResource {
    /// `/users/{login}`
    User,
    /// `/users/{login}/repos`
    Repos,
}

impl FetchResource {
    pub fn as_str(&self) -> &'static str {
        match self {
            FetchResource::User => "User",
            FetchResource::Repos => "Repos",
        }
    }
}

/// Errors from loading a user's dashboard data.
#[derive(Debug, Clone)]
pub enum FetchError {
    /// The profile endpoint answered 404.
    UserNotFound,

    /// Any other non-2xx status from either endpoint.
    FetchFailed { resource: FetchResource, status: u16 },

    /// The transport failed before a status was received.
    Network(HttpError),

    /// A 2xx body could not be decoded.
    Parse(String),
}

impl FetchError {
    /// Classify a non-success status.
    ///
    /// A 404 only means "user not found" on the profile endpoint; the same
    /// status on the repository listing is an ordinary failure.
    pub fn from_status(resource: FetchResource, status: u16) -> Self {
        match (resource, status) {
            (FetchResource::User, 404) => FetchError::UserNotFound,
            _ => FetchError::FetchFailed { resource, status },
        }
    }

    /// HTTP status carried by this error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::UserNotFound => Some(404),
            FetchError::FetchFailed { status, .. } => Some(*status),
            FetchError::Network(_) | FetchError::Parse(_) => None,
        }
    }

    /// Short code for log lines.
    pub fn error_code(&self) -> &'static str {
        match self {
            FetchError::UserNotFound => "E_USER_NOT_FOUND",
            FetchError::FetchFailed { .. } => "E_FETCH_STATUS",
            FetchError::Network(_) => "E_FETCH_NETWORK",
            FetchError::Parse(_) => "E_FETCH_PARSE",
        }
    }
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::UserNotFound => write!(f, "User not found"),
            FetchError::FetchFailed { resource, status } => {
                write!(f, "{} fetch failed: {}", resource.as_str(), status)
            }
            FetchError::Network(err) => write!(f, "{}", err),
            FetchError::Parse(message) => write!(f, "Invalid response: {}", message),
        }
    }
}

impl std::error::Error for FetchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FetchError::Network(err) => Some(err),
            _ => None,
        }
    }
}

impl From<HttpError> for FetchError {
    fn from(err: HttpError) -> Self {
        FetchError::Network(err)
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::Parse(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_404_is_user_not_found() {
        let err = FetchError::from_status(FetchResource::User, 404);
        assert!(matches!(err, FetchError::UserNotFound));
        assert_eq!(err.to_string(), "User not found");
    }

    #[test]
    fn test_repos_404_is_plain_failure() {
        let err = FetchError::from_status(FetchResource::Repos, 404);
        assert_eq!(err.to_string(), "Repos fetch failed: 404");
    }

    #[test]
    fn test_server_error_includes_status() {
        let err = FetchError::from_status(FetchResource::User, 500);
        assert_eq!(err.to_string(), "User fetch failed: 500");
        assert_eq!(err.status(), Some(500));
        assert_eq!(err.error_code(), "E_FETCH_STATUS");
    }

    #[test]
    fn test_network_error_message_is_surfaced() {
        let err: FetchError = HttpError::ConnectionFailed("dns error".to_string()).into();
        assert_eq!(err.to_string(), "Connection failed: dns error");
        assert!(err.status().is_none());
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_parse_error_from_serde() {
        let serde_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: FetchError = serde_err.into();
        assert!(err.to_string().starts_with("Invalid response: "));
    }
}
