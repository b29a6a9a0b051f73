//! Text analysis for Colloquy.
//!
//! Tokenizers, char filters and token filters are combined into analyzer
//! pipelines. The [`normalizer`] builds the pipeline that canonicalizes user
//! text; the vectorizer builds a second one that extracts terms.

pub mod analyzer;
pub mod char_filter;
pub mod normalizer;
pub mod token;
pub mod token_filter;
pub mod tokenizer;

// Re-export commonly used types
pub use analyzer::*;
pub use normalizer::TextNormalizer;
pub use token::*;
