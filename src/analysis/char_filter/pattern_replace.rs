//! Regex replacement char filter.

use regex::Regex;

use super::CharFilter;
use crate::error::{ColloquyError, Result};

/// Characters removed by [`PatternReplaceCharFilter::strip_punctuation`].
const NON_ALPHANUMERIC_PATTERN: &str = r"[^a-zA-Z0-9\s]";

/// A char filter that replaces every match of a regex pattern.
#[derive(Clone, Debug)]
pub struct PatternReplaceCharFilter {
    pattern: Regex,
    replacement: String,
}

impl PatternReplaceCharFilter {
    /// Create a new pattern replace char filter.
    pub fn new(pattern: &str, replacement: &str) -> Result<Self> {
        let pattern = Regex::new(pattern)
            .map_err(|e| ColloquyError::analysis(format!("Invalid regex pattern: {e}")))?;

        Ok(Self {
            pattern,
            replacement: replacement.to_string(),
        })
    }

    /// Create a filter that deletes everything except ASCII letters, digits
    /// and whitespace.
    pub fn strip_punctuation() -> Result<Self> {
        Self::new(NON_ALPHANUMERIC_PATTERN, "")
    }

    /// Get the regex pattern used by this filter.
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }
}

impl CharFilter for PatternReplaceCharFilter {
    fn filter(&self, input: &str) -> String {
        self.pattern
            .replace_all(input, self.replacement.as_str())
            .into_owned()
    }

    fn name(&self) -> &'static str {
        "pattern_replace"
    }
}
