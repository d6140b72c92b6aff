//! Error types for the PMDE site

use thiserror::Error;

/// Main error type for site configuration and content loading
#[derive(Error, Debug)]
pub enum SiteError {
    /// General I/O error (reading config or content files)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed JSON in a config or content file
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Configuration parsed but holds an unusable value
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// A tab label was referenced that the tab set does not list
    #[error("Unknown tab: {0}")]
    UnknownTab(String),
}

/// Result type alias using SiteError
pub type SiteResult<T> = Result<T, SiteError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SiteError::InvalidConfig("rotation.hero_interval_ms must be > 0".to_string());
        assert_eq!(
            format!("{}", err),
            "Invalid config: rotation.hero_interval_ms must be > 0"
        );
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let site_err: SiteError = io_err.into();
        assert!(matches!(site_err, SiteError::Io(_)));
    }

    #[test]
    fn test_error_from_json() {
        let json_err = serde_json::from_str::<u32>("not json").unwrap_err();
        let site_err: SiteError = json_err.into();
        assert!(matches!(site_err, SiteError::Parse(_)));
    }
}
