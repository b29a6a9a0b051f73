//! Lowercasing char filter.

use super::CharFilter;

/// A char filter that lowercases the whole input before tokenization.
///
/// Running it ahead of punctuation stripping keeps letters whose lowercase
/// form is ASCII (the Kelvin sign becomes `k`) instead of deleting them.
#[derive(Clone, Debug, Default)]
pub struct LowercaseCharFilter;

impl LowercaseCharFilter {
    /// Create a new lowercase char filter.
    pub fn new() -> Self {
        LowercaseCharFilter
    }
}

impl CharFilter for LowercaseCharFilter {
    fn filter(&self, input: &str) -> String {
        if input.is_ascii() {
            input.to_ascii_lowercase()
        } else {
            input.to_lowercase()
        }
    }

    fn name(&self) -> &'static str {
        "lowercase"
    }
}
