//! Version command.

/// The current version of ghtrack, read from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// `ghtrack <version>`, as printed by `--version`.
pub fn version_line() -> String {
    format!("ghtrack {}", VERSION)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_format() {
        let parts: Vec<&str> = VERSION.split('.').collect();
        assert!(parts.len() >= 2, "Version should have at least major.minor");
        assert!(version_line().starts_with("ghtrack "));
    }
}
