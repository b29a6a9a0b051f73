//! Char filter implementations for text normalization.
//!
//! Char filters pre-process the raw string before it reaches the tokenizer.
//! The normalizer lowercases the raw text with one and then drops every
//! character outside the ASCII alphanumeric and whitespace set with another.
//!
//! # Examples
//!
//! ```
//! use colloquy::analysis::char_filter::CharFilter;
//! use colloquy::analysis::char_filter::pattern_replace::PatternReplaceCharFilter;
//!
//! let filter = PatternReplaceCharFilter::strip_punctuation().unwrap();
//! assert_eq!(filter.filter("What's up?!"), "Whats up");
//! ```

/// Trait for character filters that transform text before tokenization.
pub trait CharFilter: Send + Sync {
    /// Apply this filter to the input text and return the filtered text.
    fn filter(&self, input: &str) -> String;

    /// Get the name of this char filter.
    fn name(&self) -> &'static str;
}

pub mod lowercase;
pub mod pattern_replace;

pub use lowercase::LowercaseCharFilter;
pub use pattern_replace::PatternReplaceCharFilter;
