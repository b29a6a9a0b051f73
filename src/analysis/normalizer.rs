//! Text normalization for intent matching.
//!
//! [`TextNormalizer`] turns raw user text into the canonical form that both
//! training patterns and queries are compared in:
//!
//! 1. lowercase the raw text,
//! 2. drop every character that is not an ASCII letter, digit or whitespace,
//! 3. split on whitespace (which also trims and collapses runs),
//! 4. replace each token with its lemma,
//! 5. split fused forms such as "cannot" into two tokens,
//! 6. join the tokens with single spaces.
//!
//! # Examples
//!
//! ```
//! use colloquy::analysis::normalizer::TextNormalizer;
//!
//! let normalizer = TextNormalizer::english().unwrap();
//! assert_eq!(normalizer.normalize("  Tell me some JOKES!! ").unwrap(), "tell me some joke");
//! assert_eq!(normalizer.normalize("?!?").unwrap(), "");
//! ```

use std::sync::Arc;

use crate::analysis::analyzer::{Analyzer, PipelineAnalyzer};
use crate::analysis::char_filter::{LowercaseCharFilter, PatternReplaceCharFilter};
use crate::analysis::token_filter::{EnglishLemmatizer, LemmaFilter, Lemmatizer, SplitFormsFilter};
use crate::analysis::tokenizer::WhitespaceTokenizer;
use crate::error::Result;

/// Converts raw text into a canonical, lemmatized token string.
#[derive(Clone)]
pub struct TextNormalizer {
    analyzer: PipelineAnalyzer,
    lemmatizer: Arc<dyn Lemmatizer>,
}

impl TextNormalizer {
    /// Create a normalizer backed by the given lemma provider.
    pub fn new(lemmatizer: Arc<dyn Lemmatizer>) -> Result<Self> {
        let analyzer = PipelineAnalyzer::new(Arc::new(WhitespaceTokenizer::new()))
            .add_char_filter(Arc::new(LowercaseCharFilter::new()))
            .add_char_filter(Arc::new(PatternReplaceCharFilter::strip_punctuation()?))
            .add_filter(Arc::new(LemmaFilter::new(Arc::clone(&lemmatizer))))
            .add_filter(Arc::new(SplitFormsFilter::new()))
            .with_name(format!("normalizer_{}", lemmatizer.name()));

        Ok(TextNormalizer {
            analyzer,
            lemmatizer,
        })
    }

    /// Create a normalizer using the built-in English lemmatizer.
    pub fn english() -> Result<Self> {
        Self::new(Arc::new(EnglishLemmatizer::new()))
    }

    /// Load the lemma provider's resources. Must succeed before serving
    /// requests; later calls are no-ops.
    pub fn load_resources(&self) -> Result<()> {
        self.lemmatizer.load()
    }

    /// The lemma provider in use.
    pub fn lemmatizer(&self) -> &Arc<dyn Lemmatizer> {
        &self.lemmatizer
    }

    /// Normalize `text`. Empty or all-punctuation input yields an empty string.
    pub fn normalize(&self, text: &str) -> Result<String> {
        let tokens: Vec<String> = self.analyzer.analyze(text)?.map(|t| t.text).collect();
        Ok(tokens.join(" "))
    }
}

impl std::fmt::Debug for TextNormalizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextNormalizer")
            .field("analyzer", &self.analyzer)
            .field("lemmatizer", &self.lemmatizer.name())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token_filter::IdentityLemmatizer;

    fn normalize(text: &str) -> String {
        TextNormalizer::english().unwrap().normalize(text).unwrap()
    }

    #[test]
    fn test_case_and_punctuation() {
        assert_eq!(normalize("Hello!"), "hello");
        assert_eq!(normalize("!!!hello???"), "hello");
        assert_eq!(normalize("What's the weather like?"), "whats the weather like");
        assert_eq!(normalize("How's it going"), "hows it going");
    }

    #[test]
    fn test_lowercase_before_strip() {
        assert_eq!(normalize("\u{212A}ELVIN"), "kelvin");
        assert_eq!(normalize("\u{0130}T"), "it");
        assert_eq!(normalize("CAF\u{00C9}"), "caf");
    }

    #[test]
    fn test_fused_forms_split() {
        assert_eq!(normalize("I cannot sleep"), "i can not sleep");
        assert_eq!(normalize("Gonna go, gotta run"), "gon na go got ta run");
        assert_eq!(normalize("lemme see, gimme that"), "lem me see gim me that");
        assert_eq!(normalize("can't"), "cant");
    }

    #[test]
    fn test_whitespace_collapsing() {
        assert_eq!(normalize("  good \t\n morning  "), "good morning");
        assert_eq!(normalize("hello ".repeat(3).as_str()), "hello hello hello");
    }

    #[test]
    fn test_lemmatization() {
        assert_eq!(normalize("How are THINGS"), "how are thing");
        assert_eq!(normalize("tell me jokes"), "tell me joke");
        assert_eq!(normalize("thanks a lot"), "thanks a lot");
    }

    #[test]
    fn test_empty_results() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("    "), "");
        assert_eq!(normalize("?!... ,,"), "");
    }

    #[test]
    fn test_numbers_kept() {
        assert_eq!(normalize("12345"), "12345");
        assert_eq!(normalize("call 911!"), "call 911");
    }

    #[test]
    fn test_renormalizing_adds_no_tokens() {
        let inputs = [
            "Tell me some JOKES!!",
            "what's up, children?",
            "glasses & boxes & flies",
            "  a  b  c ",
            "¿Qué tal?",
            "I cannot, we cannots, gonna",
            "\u{212A}ELVINS",
        ];
        for input in inputs {
            let once = normalize(input);
            let twice = normalize(&once);
            assert!(
                twice.split_whitespace().count() <= once.split_whitespace().count(),
                "{input:?}: {once:?} -> {twice:?}"
            );
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn test_custom_lemmatizer() {
        let normalizer = TextNormalizer::new(Arc::new(IdentityLemmatizer::new())).unwrap();
        assert_eq!(normalizer.normalize("Tell me JOKES").unwrap(), "tell me jokes");
        assert!(normalizer.load_resources().is_ok());
    }
}
