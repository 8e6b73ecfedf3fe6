//! Site error types
//!
//! Defines the errors that can surface from configuration, export and
//! rendering setup. Presentation code degrades instead of failing, so most
//! of these only ever reach the CLI.

use thiserror::Error;

use crate::config::ConfigError;

/// Errors that can occur while building or exporting the site
#[derive(Error, Debug)]
pub enum SiteError {
    /// I/O operation failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization failed (JSON or CSV)
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Configuration could not be loaded
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A drawing surface could not be created or used
    #[error("Render error: {0}")]
    Render(String),

    /// Chart name not recognised
    #[error("Unknown chart: {0}")]
    UnknownChart(String),

    /// Feature tab name not recognised
    #[error("Unknown feature tab: {0}")]
    UnknownTab(String),

    /// Theme name not recognised
    #[error("Unknown theme: {0}")]
    UnknownTheme(String),

    /// Trigger start expression could not be parsed
    #[error("Invalid trigger start {input:?}: {reason}")]
    InvalidTrigger { input: String, reason: String },
}

impl From<serde_json::Error> for SiteError {
    fn from(err: serde_json::Error) -> Self {
        SiteError::Serialization(err.to_string())
    }
}

impl From<csv::Error> for SiteError {
    fn from(err: csv::Error) -> Self {
        SiteError::Serialization(err.to_string())
    }
}

/// Result type alias for site operations
pub type SiteResult<T> = Result<T, SiteError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SiteError::UnknownChart("radar".to_string());
        assert_eq!(err.to_string(), "Unknown chart: radar");

        let err = SiteError::InvalidTrigger {
            input: "middle".to_string(),
            reason: "expected two parts".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid trigger start \"middle\": expected two parts"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let site_err: SiteError = io_err.into();
        assert!(matches!(site_err, SiteError::Io(_)));
    }
}
