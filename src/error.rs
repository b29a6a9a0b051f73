//! Error types for the Colloquy library.
//!
//! All errors are represented by the [`ColloquyError`] enum. Only two kinds
//! are expected in practice: [`ColloquyError::Configuration`] while a
//! [`Chatbot`](crate::chat::Chatbot) is being initialized, and
//! [`ColloquyError::Lookup`] when the registry and the training corpus
//! disagree. Ordinary user input never produces an error.
//!
//! # Examples
//!
//! ```
//! use colloquy::error::{ColloquyError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(ColloquyError::configuration("no patterns to fit"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Colloquy operations.
#[derive(Error, Debug)]
pub enum ColloquyError {
    /// I/O errors (reading registries, lemma tables, config files)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Fatal startup errors: malformed registry, empty corpus, bad config
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A classified intent identifier is absent from the registry
    #[error("Lookup error: {0}")]
    Lookup(String),

    /// Analysis-related errors (tokenization, filtering, etc.)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for operations that may fail with ColloquyError.
pub type Result<T> = std::result::Result<T, ColloquyError>;

impl ColloquyError {
    /// Create a new configuration error.
    pub fn configuration<S: Into<String>>(msg: S) -> Self {
        ColloquyError::Configuration(msg.into())
    }

    /// Create a new lookup error.
    pub fn lookup<S: Into<String>>(msg: S) -> Self {
        ColloquyError::Lookup(msg.into())
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        ColloquyError::Analysis(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = ColloquyError::configuration("empty corpus");
        assert_eq!(error.to_string(), "Configuration error: empty corpus");

        let error = ColloquyError::lookup("unknown intent 'x'");
        assert_eq!(error.to_string(), "Lookup error: unknown intent 'x'");

        let error = ColloquyError::analysis("bad pattern");
        assert_eq!(error.to_string(), "Analysis error: bad pattern");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let colloquy_error = ColloquyError::from(io_error);

        match colloquy_error {
            ColloquyError::Io(_) => {} // Expected
            _ => panic!("Expected IO error variant"),
        }
    }

    #[test]
    fn test_json_error_conversion() {
        let json_error = serde_json::from_str::<Vec<String>>("[1").unwrap_err();
        assert!(matches!(ColloquyError::from(json_error), ColloquyError::Json(_)));
    }
}
