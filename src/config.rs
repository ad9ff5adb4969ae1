//! Runtime configuration.
//!
//! Values are layered: built-in defaults, then environment variables, then
//! command-line flags (applied by the caller through the builder methods).

/// Public GitHub REST API root.
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Identity loaded on startup when nothing else is configured.
pub const DEFAULT_USER: &str = "octocat";

/// Environment variable overriding the API root.
pub const ENV_API_URL: &str = "GHTRACK_API_URL";

/// Environment variable overriding the startup identity.
pub const ENV_USER: &str = "GHTRACK_USER";

/// Configuration for the dashboard.
///
/// # Example
///
/// ```
/// use ghtrack::config::TrackerConfig;
///
/// let config = TrackerConfig::default()
///     .with_default_user("torvalds")
///     .with_api_url("http://localhost:8080/");
/// assert_eq!(config.api_url, "http://localhost:8080");
/// assert_eq!(config.default_user, "torvalds");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TrackerConfig {
    /// API root without a trailing slash
    pub api_url: String,
    /// Username pre-filled and fetched at boot
    pub default_user: String,
    /// Value of the `User-Agent` header (GitHub rejects requests without one)
    pub user_agent: String,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            default_user: DEFAULT_USER.to_string(),
            user_agent: format!("ghtrack/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl TrackerConfig {
    /// Create a config with built-in defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults overlaid with `GHTRACK_API_URL` / `GHTRACK_USER`.
    ///
    /// Empty or whitespace-only values are ignored.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an injectable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(url) = lookup(ENV_API_URL).filter(|v| !v.trim().is_empty()) {
            config = config.with_api_url(url);
        }
        if let Some(user) = lookup(ENV_USER).filter(|v| !v.trim().is_empty()) {
            config = config.with_default_user(user);
        }
        config
    }

    /// Set the API root. A trailing slash is dropped.
    pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
        let url = url.into();
        self.api_url = url.trim().trim_end_matches('/').to_string();
        self
    }

    /// Set the startup identity.
    pub fn with_default_user(mut self, user: impl Into<String>) -> Self {
        self.default_user = user.into().trim().to_string();
        self
    }

    /// Set the `User-Agent` header value.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}
