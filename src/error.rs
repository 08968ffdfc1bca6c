//! Error types for the synsim library.
//!
//! All fallible operations return [`Result`], whose error type is the
//! [`SynsimError`] enum. Expected negative outcomes such as an unknown word,
//! a pair of synsets with no connecting path, or a missing common ancestor
//! are never
//! errors; they are represented as empty sequences, `Option::None`, or the
//! measure's documented no-relation value. Errors are reserved for actual
//! faults such as malformed taxonomy documents or unknown measure names.
//!
//! # Examples
//!
//! ```
//! use synsim::error::{Result, SynsimError};
//!
//! fn parse_measure(name: &str) -> Result<()> {
//!     if name != "wup" {
//!         return Err(SynsimError::measure(format!("unknown measure: {name}")));
//!     }
//!     Ok(())
//! }
//!
//! assert!(parse_measure("wup").is_ok());
//! assert!(parse_measure("cosine").is_err());
//! ```

use std::io;

use thiserror::Error;

/// The main error type for synsim operations.
#[derive(Error, Debug)]
pub enum SynsimError {
    /// I/O errors (reading taxonomy documents, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Taxonomy-related errors (malformed documents, duplicate synsets, etc.)
    #[error("Taxonomy error: {0}")]
    Taxonomy(String),

    /// Analysis-related errors (tokenization, invalid patterns, etc.)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Measure-related errors (unknown measure names, etc.)
    #[error("Measure error: {0}")]
    Measure(String),

    /// Invalid argument supplied by the caller
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with [`SynsimError`].
pub type Result<T> = std::result::Result<T, SynsimError>;

impl SynsimError {
    /// Create a new taxonomy error.
    pub fn taxonomy<S: Into<String>>(msg: S) -> Self {
        SynsimError::Taxonomy(msg.into())
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        SynsimError::Analysis(msg.into())
    }

    /// Create a new measure error.
    pub fn measure<S: Into<String>>(msg: S) -> Self {
        SynsimError::Measure(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        SynsimError::InvalidArgument(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        SynsimError::Other(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SynsimError::taxonomy("duplicate synset id");
        assert_eq!(err.to_string(), "Taxonomy error: duplicate synset id");

        let err = SynsimError::measure("unknown measure: cosine");
        assert_eq!(err.to_string(), "Measure error: unknown measure: cosine");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "missing file");
        let err: SynsimError = io_err.into();
        assert!(matches!(err, SynsimError::Io(_)));
    }

    #[test]
    fn test_invalid_argument_helper() {
        let err = SynsimError::invalid_argument("sense index must be >= 1");
        assert!(err.to_string().contains("sense index"));
    }
}
