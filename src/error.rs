//! Error types for the mdcv library.

use std::io;
use thiserror::Error;

/// Result type alias for mdcv operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while converting a resume document.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading the source document or writing output.
    ///
    /// This is the only fatal path out of parsing: an unreadable input has
    /// no meaningful partial result.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The input text does not look like a resume document.
    ///
    /// Only produced in strict mode; the default lenient parse accepts any
    /// text and returns whatever sections it finds.
    #[error("Not a resume document: {0}")]
    UnrecognizedDocument(String),

    /// Error during rendering (text, JSON, layout).
    #[error("Rendering error: {0}")]
    Render(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::UnrecognizedDocument("no sections found".to_string());
        assert_eq!(err.to_string(), "Not a resume document: no sections found");

        let err = Error::Render("bad".to_string());
        assert_eq!(err.to_string(), "Rendering error: bad");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
