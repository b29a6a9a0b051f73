//! Identity lemmatizer implementation.

use super::Lemmatizer;

/// Lemmatizer that knows no words, so every token passes through unchanged.
#[derive(Debug, Clone, Default)]
pub struct IdentityLemmatizer;

impl IdentityLemmatizer {
    pub fn new() -> Self {
        IdentityLemmatizer
    }
}

impl Lemmatizer for IdentityLemmatizer {
    fn lemmatize(&self, _word: &str) -> Option<String> {
        None
    }

    fn name(&self) -> &'static str {
        "identity"
    }
}
