//! Error types for the mdpane library.

use std::io;
use thiserror::Error;

/// Result type alias for mdpane operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while loading and rendering a document.
#[derive(Error, Debug)]
pub enum Error {
    /// The resource reference is empty or all whitespace.
    #[error("Empty document source")]
    EmptySource,

    /// I/O error when reading a local document or writing a surface file.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The resource reference looks like a URL but does not parse as one.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Network-level retrieval failure.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success response status, reported only under
    /// [`StatusPolicy::Strict`](crate::source::StatusPolicy::Strict).
    #[error("Unexpected status {code} from {url}")]
    Status {
        /// HTTP status code of the response.
        code: u16,
        /// URL that produced the response.
        url: String,
    },

    /// Error raised by the markup conversion capability.
    #[error("Conversion error: {0}")]
    Convert(String),

    /// No surface registered under the given identifier.
    #[error("Output surface not found: {0}")]
    SurfaceNotFound(String),

    /// Error writing rendered content into a surface.
    #[error("Surface write error: {0}")]
    Surface(String),
}

impl Error {
    /// Whether this error occurred while retrieving the document,
    /// before any conversion took place.
    pub fn is_retrieval(&self) -> bool {
        matches!(
            self,
            Error::Io(_)
                | Error::Http(_)
                | Error::Status { .. }
                | Error::EmptySource
                | Error::InvalidUrl(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::EmptySource;
        assert_eq!(err.to_string(), "Empty document source");

        let err = Error::Status {
            code: 404,
            url: "https://example.com/doc.md".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Unexpected status 404 from https://example.com/doc.md"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
        assert!(err.is_retrieval());
    }

    #[test]
    fn test_convert_error_is_not_retrieval() {
        let err = Error::Convert("bad markup".to_string());
        assert!(!err.is_retrieval());
    }
}
