//! Built-in English lemmatizer.
//!
//! A compact noun lemmatizer in the spirit of WordNet's morphological
//! processor: a table of irregular plurals, a list of words that only look
//! plural, and a small ordered set of suffix detachment rules. It needs no
//! external data, so [`load`](Lemmatizer::load) always succeeds.

use std::sync::LazyLock;

use ahash::{AHashMap, AHashSet};

use super::Lemmatizer;

/// Irregular plural forms and their base forms.
const IRREGULAR_FORMS: &[(&str, &str)] = &[
    ("children", "child"),
    ("men", "man"),
    ("women", "woman"),
    ("people", "person"),
    ("mice", "mouse"),
    ("geese", "goose"),
    ("feet", "foot"),
    ("teeth", "tooth"),
    ("oxen", "ox"),
    ("data", "datum"),
    ("criteria", "criterion"),
    ("phenomena", "phenomenon"),
    ("knives", "knife"),
    ("wives", "wife"),
    ("lives", "life"),
    ("leaves", "leaf"),
    ("wolves", "wolf"),
    ("halves", "half"),
    ("selves", "self"),
    ("shelves", "shelf"),
    ("thieves", "thief"),
    ("calves", "calf"),
];

/// Words ending in "s" that are already base forms, including the
/// remnants of contractions once apostrophes are stripped.
const INVARIANT_WORDS: &[&str] = &[
    "thanks", "news", "always", "perhaps", "series", "species", "this", "does", "hers", "ours",
    "yours", "theirs", "whereas", "sometimes", "afterwards", "towards", "nowadays", "besides",
    "mathematics", "physics", "politics", "economics", "athletics", "whats", "hows", "thats",
    "lets", "heres", "theres", "wheres", "whos", "its", "itis",
];

/// Endings that mark a word as singular already ("glass", "bonus", "basis", "famous").
const PROTECTED_ENDINGS: &[&str] = &["ss", "us", "is", "ous"];

/// Ordered suffix rules: (suffix, replacement, minimum remaining stem length).
const SUFFIX_RULES: &[(&str, &str, usize)] = &[
    ("sses", "ss", 1),
    ("ches", "ch", 1),
    ("shes", "sh", 1),
    ("xes", "x", 1),
    ("ies", "y", 2),
    ("s", "", 3),
];

static IRREGULAR: LazyLock<AHashMap<&'static str, &'static str>> =
    LazyLock::new(|| IRREGULAR_FORMS.iter().copied().collect());

static INVARIANT: LazyLock<AHashSet<&'static str>> =
    LazyLock::new(|| INVARIANT_WORDS.iter().copied().collect());

/// Rule-based English lemmatizer.
#[derive(Debug, Clone, Default)]
pub struct EnglishLemmatizer;

impl EnglishLemmatizer {
    /// Create a new English lemmatizer.
    pub fn new() -> Self {
        EnglishLemmatizer
    }
}

impl Lemmatizer for EnglishLemmatizer {
    fn lemmatize(&self, word: &str) -> Option<String> {
        if word.is_empty() || !word.bytes().all(|b| b.is_ascii_lowercase()) {
            return None;
        }

        if let Some(base) = IRREGULAR.get(word) {
            return Some((*base).to_string());
        }

        if word.len() <= 3
            || INVARIANT.contains(word)
            || PROTECTED_ENDINGS.iter().any(|ending| word.ends_with(ending))
        {
            return None;
        }

        SUFFIX_RULES
            .iter()
            .find_map(|(suffix, replacement, min_stem)| {
                word.strip_suffix(suffix)
                    .filter(|stem| stem.len() >= *min_stem)
                    .map(|stem| format!("{stem}{replacement}"))
            })
    }

    fn name(&self) -> &'static str {
        "english"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lemma(word: &str) -> String {
        EnglishLemmatizer::new()
            .lemmatize(word)
            .unwrap_or_else(|| word.to_string())
    }

    #[test]
    fn test_regular_plurals() {
        assert_eq!(lemma("jokes"), "joke");
        assert_eq!(lemma("things"), "thing");
        assert_eq!(lemma("greetings"), "greeting");
        assert_eq!(lemma("glasses"), "glass");
        assert_eq!(lemma("matches"), "match");
        assert_eq!(lemma("dishes"), "dish");
        assert_eq!(lemma("boxes"), "box");
        assert_eq!(lemma("flies"), "fly");
        assert_eq!(lemma("ties"), "tie");
    }

    #[test]
    fn test_irregular_plurals() {
        assert_eq!(lemma("children"), "child");
        assert_eq!(lemma("people"), "person");
        assert_eq!(lemma("wolves"), "wolf");
    }

    #[test]
    fn test_words_left_alone() {
        for word in [
            "thanks", "news", "glass", "bonus", "basis", "famous", "yes", "was", "is", "hows",
            "whats", "hello", "funny", "12345", "r2d2", "Jokes",
        ] {
            assert_eq!(
                EnglishLemmatizer::new().lemmatize(word),
                None,
                "{word} should pass through"
            );
        }
    }

    #[test]
    fn test_lemmas_are_stable() {
        for word in ["jokes", "glasses", "flies", "children", "boxes", "things"] {
            let once = lemma(word);
            assert_eq!(lemma(&once), once);
        }
    }
}
