//! Lemmatizing token filter and lemma providers.
//!
//! A [`Lemmatizer`] is the linguistic resource behind normalization: it maps
//! a lowercase word to its dictionary base form. Providers may need to load
//! data before use, so the trait carries an explicit [`load`](Lemmatizer::load)
//! step and reports whether that has happened. The core only ever talks to
//! the trait.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//!
//! use colloquy::analysis::token::Token;
//! use colloquy::analysis::token_filter::Filter;
//! use colloquy::analysis::token_filter::lemma::{EnglishLemmatizer, LemmaFilter};
//!
//! let filter = LemmaFilter::new(Arc::new(EnglishLemmatizer::new()));
//! let tokens = vec![Token::new("jokes", 0), Token::new("children", 1)];
//! let lemmas: Vec<_> = filter
//!     .filter(Box::new(tokens.into_iter()))
//!     .unwrap()
//!     .map(|t| t.text)
//!     .collect();
//!
//! assert_eq!(lemmas, vec!["joke", "child"]);
//! ```

use std::sync::Arc;

use super::Filter;
use crate::analysis::token::TokenStream;
use crate::error::Result;

/// A source of lemmas for lowercase words.
pub trait Lemmatizer: Send + Sync {
    /// Load whatever resources this provider needs. Calling it again after a
    /// successful load is a no-op.
    fn load(&self) -> Result<()> {
        Ok(())
    }

    /// Whether the provider's resources are available.
    fn is_loaded(&self) -> bool {
        true
    }

    /// Return the base form of `word`, or `None` when the provider does not
    /// know the word (the caller keeps it unchanged).
    fn lemmatize(&self, word: &str) -> Option<String>;

    /// Get the name of this lemmatizer.
    fn name(&self) -> &'static str;
}

pub mod dictionary;
pub mod english;
pub mod identity;

pub use dictionary::DictionaryLemmatizer;
pub use english::EnglishLemmatizer;
pub use identity::IdentityLemmatizer;

/// Filter that replaces each token with its lemma.
#[derive(Clone)]
pub struct LemmaFilter {
    lemmatizer: Arc<dyn Lemmatizer>,
}

impl std::fmt::Debug for LemmaFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LemmaFilter")
            .field("lemmatizer", &self.lemmatizer.name())
            .finish()
    }
}

impl LemmaFilter {
    /// Create a lemma filter backed by the given provider.
    pub fn new(lemmatizer: Arc<dyn Lemmatizer>) -> Self {
        LemmaFilter { lemmatizer }
    }

    /// Get the provider used by this filter.
    pub fn lemmatizer(&self) -> &Arc<dyn Lemmatizer> {
        &self.lemmatizer
    }
}

impl Default for LemmaFilter {
    fn default() -> Self {
        Self::new(Arc::new(EnglishLemmatizer::new()))
    }
}

impl Filter for LemmaFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let filtered_tokens = tokens
            .map(|token| match self.lemmatizer.lemmatize(&token.text) {
                Some(lemma) => token.with_text(lemma),
                None => token,
            })
            .collect::<Vec<_>>();

        Ok(Box::new(filtered_tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "lemma"
    }
}
