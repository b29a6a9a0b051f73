//! Core analyzer trait definition.
//!
//! An [`Analyzer`] is a complete text processing pipeline:
//!
//! ```text
//! Raw Text → Char Filters → Tokenizer → Filter 1 … Filter N → Token Stream
//! ```
//!
//! The [`TextNormalizer`](crate::analysis::normalizer::TextNormalizer) and the
//! [`TfIdfVectorizer`](crate::ml::intent_classifier::TfIdfVectorizer) each own one.
//!
//! # Examples
//!
//! Implementing a custom analyzer:
//!
//! ```
//! use colloquy::analysis::analyzer::Analyzer;
//! use colloquy::analysis::token::TokenStream;
//! use colloquy::error::Result;
//!
//! struct MyAnalyzer;
//!
//! impl Analyzer for MyAnalyzer {
//!     fn analyze(&self, text: &str) -> Result<TokenStream> {
//!         Ok(Box::new(std::iter::empty()))
//!     }
//!
//!     fn name(&self) -> &'static str {
//!         "my_analyzer"
//!     }
//! }
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for analyzers that convert text into processed tokens.
///
/// The trait requires `Send + Sync` so a fitted classifier can be shared
/// across threads serving concurrent requests.
pub trait Analyzer: Send + Sync {
    /// Analyze the given text and return a stream of tokens.
    fn analyze(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this analyzer (for debugging and logging).
    fn name(&self) -> &'static str;
}
