//! Error types for pagewise
//!
//! All public APIs return `Result<T, Error>` where Error is defined here.
//! Missing or malformed request input is never an error: page and page size
//! fall back to their defaults instead.

use thiserror::Error;

/// Boxed error reported by a source collaborator
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// The main error type for pagewise
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Pagination Errors
    // ============================================================================
    #[error("Unsupported source kind: {kind}")]
    UnsupportedSourceKind { kind: String },

    #[error("Invalid configuration for '{field}': {message}")]
    InvalidConfiguration { field: String, message: String },

    // ============================================================================
    // Collaborator Errors
    // ============================================================================
    #[error("Source error: {0}")]
    Source(#[source] BoxError),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ============================================================================
    // Configuration Loading Errors
    // ============================================================================
    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    // ============================================================================
    // Generic Errors
    // ============================================================================
    #[error("{0}")]
    Other(String),

    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

impl Error {
    /// Create an unsupported source error
    pub fn unsupported_source(kind: impl Into<String>) -> Self {
        Self::UnsupportedSourceKind { kind: kind.into() }
    }

    /// Create an invalid configuration error
    pub fn invalid_config(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Wrap a collaborator error
    pub fn from_source(err: impl Into<BoxError>) -> Self {
        Self::Source(err.into())
    }

    /// Whether this error came from the source collaborator rather than the paginator
    pub fn is_source_error(&self) -> bool {
        matches!(self, Error::Source(_) | Error::Anyhow(_))
    }
}

/// Result type alias for pagewise
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, message: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, message: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", message.into(), inner))
        })
    }

    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", f(), inner))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::unsupported_source("string");
        assert_eq!(err.to_string(), "Unsupported source kind: string");

        let err = Error::invalid_config("page_size", "must be positive");
        assert_eq!(
            err.to_string(),
            "Invalid configuration for 'page_size': must be positive"
        );

        let err = Error::from_source(std::io::Error::other("connection reset"));
        assert_eq!(err.to_string(), "Source error: connection reset");
    }

    #[test]
    fn test_is_source_error() {
        assert!(Error::from_source("boom").is_source_error());
        assert!(Error::from(anyhow::anyhow!("db down")).is_source_error());

        assert!(!Error::unsupported_source("number").is_source_error());
        assert!(!Error::invalid_config("page_size", "zero").is_source_error());
    }

    #[test]
    fn test_result_context() {
        let result: Result<()> = Err(Error::invalid_config("page_size", "zero"));
        let with_context = result.context("resolving page size");
        assert!(with_context
            .unwrap_err()
            .to_string()
            .contains("resolving page size: Invalid configuration for 'page_size': zero"));
    }
}
