//! Error types for rendering, export and configuration.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by the widget library.
///
/// Export failures are normally swallowed by
/// [`ExportService::export`](crate::export::ExportService::export) and only
/// logged; they reach callers as values only through the blocking variant.
#[derive(Error, Debug)]
pub enum Error {
    /// PNG encoding failed.
    #[error("Failed to encode PNG: {0}")]
    Encode(#[from] image::ImageError),

    /// Export could not be completed.
    #[error("Export failed: {0}")]
    Export(String),

    /// An icon image could not be read or decoded.
    #[error("Failed to load icon asset {}: {source}", .path.display())]
    AssetLoad {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Configuration file not found.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound { path: String },

    /// Dial level outside 1..=5.
    #[error("Invalid level {0}: expected 1 to 5")]
    InvalidLevel(i64),

    /// Color string that is not `#rrggbb` or `#rgb`.
    #[error("Invalid color {0:?}: expected #rrggbb")]
    InvalidColor(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self { Self::Config(msg.into()) }

    /// Create an export error.
    pub fn export(msg: impl Into<String>) -> Self { Self::Export(msg.into()) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(Error::InvalidLevel(9).to_string(), "Invalid level 9: expected 1 to 5");
        assert_eq!(
            Error::ConfigNotFound { path: "x.json5".into() }.to_string(),
            "Configuration file not found: x.json5"
        );
        assert_eq!(Error::config("bad").to_string(), "Configuration error: bad");
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: Error = io.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
