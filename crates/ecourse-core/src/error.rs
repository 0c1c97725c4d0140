//! Application error types with rich context

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Application error types organized by layer/domain
#[derive(Debug, Error)]
pub enum Error {
    // ─────────────────────────────────────────────────────────────
    // Common/Infrastructure Errors
    // ─────────────────────────────────────────────────────────────
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    // ─────────────────────────────────────────────────────────────
    // Terminal/TUI Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Terminal error: {message}")]
    Terminal { message: String },

    #[error("Failed to initialize terminal: {0}")]
    TerminalInit(String),

    // ─────────────────────────────────────────────────────────────
    // Content Errors
    // ─────────────────────────────────────────────────────────────
    #[error("No content available for module '{key}'")]
    ContentNotFound { key: String },

    #[error("Failed to parse content for module '{key}': {message}")]
    ContentParse { key: String, message: String },

    #[error("Invalid content for module '{key}': {message}")]
    ContentInvalid { key: String, message: String },

    #[error("Menu and content catalogue disagree: {message}")]
    CatalogMismatch { message: String },

    #[error("Content directory not found: {path}")]
    ContentDirNotFound { path: PathBuf },

    // ─────────────────────────────────────────────────────────────
    // Configuration Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid configuration: {message}")]
    ConfigInvalid { message: String },
}

// ─────────────────────────────────────────────────────────────────
// Convenience Constructors
// ─────────────────────────────────────────────────────────────────

impl Error {
    pub fn terminal(message: impl Into<String>) -> Self {
        Self::Terminal {
            message: message.into(),
        }
    }

    pub fn content_not_found(key: impl Into<String>) -> Self {
        Self::ContentNotFound { key: key.into() }
    }

    pub fn content_parse(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ContentParse {
            key: key.into(),
            message: message.into(),
        }
    }

    pub fn content_invalid(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ContentInvalid {
            key: key.into(),
            message: message.into(),
        }
    }

    pub fn catalog_mismatch(message: impl Into<String>) -> Self {
        Self::CatalogMismatch {
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    pub fn config_invalid(message: impl Into<String>) -> Self {
        Self::ConfigInvalid {
            message: message.into(),
        }
    }

    /// Check if this is a recoverable error
    ///
    /// A missing page is recoverable: the host substitutes a placeholder
    /// page and keeps running.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Error::ContentNotFound { .. } | Error::Config { .. })
    }

    /// Check if this error should abort startup
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Error::ContentParse { .. }
                | Error::ContentInvalid { .. }
                | Error::CatalogMismatch { .. }
                | Error::ContentDirNotFound { .. }
                | Error::TerminalInit(_)
        )
    }
}

// ─────────────────────────────────────────────────────────────────
// Error Context Extensions (for use with color-eyre)
// ─────────────────────────────────────────────────────────────────

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let err = e.into();
            tracing::error!("{}: {:?}", context.into(), err);
            err
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| {
            let err = e.into();
            tracing::error!("{}: {:?}", f(), err);
            err
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_messages() {
        let err = Error::content_not_found("astrology");
        assert_eq!(
            err.to_string(),
            "No content available for module 'astrology'"
        );

        let err = Error::content_parse("garch", "expected `=`");
        assert!(err.to_string().contains("garch"));
        assert!(err.to_string().contains("expected `=`"));
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_content_not_found_is_recoverable() {
        let err = Error::content_not_found("stale-key");
        assert!(err.is_recoverable());
        assert!(!err.is_fatal());
    }

    #[test]
    fn test_catalog_errors_are_fatal() {
        assert!(Error::catalog_mismatch("orphan page").is_fatal());
        assert!(Error::content_invalid("home", "empty page").is_fatal());
        assert!(Error::ContentDirNotFound {
            path: PathBuf::from("/missing")
        }
        .is_fatal());
        assert!(!Error::catalog_mismatch("orphan page").is_recoverable());
    }

    #[test]
    fn test_error_constructors() {
        let _ = Error::terminal("test");
        let _ = Error::config("test");
        let _ = Error::config_invalid("test");
    }

    #[test]
    fn test_result_ext_preserves_error() {
        let res: std::result::Result<(), std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "denied",
        ));
        let err = res.context("reading page").unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
