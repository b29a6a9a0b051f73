//! Dictionary-backed lemmatizer loaded from an external JSON resource.
//!
//! The resource is a flat JSON object mapping word forms to lemmas:
//!
//! ```json
//! { "ran": "run", "better": "good", "geese": "goose" }
//! ```
//!
//! Nothing is read until [`load`](Lemmatizer::load) is called; the table is
//! then cached for the lifetime of the provider. Words missing from the
//! table are handed to an optional fallback provider.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock};

use ahash::AHashMap;
use log::{debug, warn};

use super::Lemmatizer;
use crate::error::{ColloquyError, Result};

/// Lemmatizer backed by a word → lemma table.
pub struct DictionaryLemmatizer {
    source: Option<PathBuf>,
    table: OnceLock<AHashMap<String, String>>,
    fallback: Option<Arc<dyn Lemmatizer>>,
}

impl std::fmt::Debug for DictionaryLemmatizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DictionaryLemmatizer")
            .field("source", &self.source)
            .field("entries", &self.table.get().map(|t| t.len()))
            .field("fallback", &self.fallback.as_ref().map(|l| l.name()))
            .finish()
    }
}

impl DictionaryLemmatizer {
    /// Create a lemmatizer that reads its table from `path` on load.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Self {
        DictionaryLemmatizer {
            source: Some(path.as_ref().to_path_buf()),
            table: OnceLock::new(),
            fallback: None,
        }
    }

    /// Create an already loaded lemmatizer from an in-memory table.
    pub fn from_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let table = OnceLock::new();
        let _ = table.set(Self::normalize_entries(
            entries.into_iter().map(|(k, v)| (k.into(), v.into())),
        ));

        DictionaryLemmatizer {
            source: None,
            table,
            fallback: None,
        }
    }

    /// Consult `fallback` for words the table does not contain.
    pub fn with_fallback(mut self, fallback: Arc<dyn Lemmatizer>) -> Self {
        self.fallback = Some(fallback);
        self
    }

    /// Number of entries in the loaded table (0 before loading).
    pub fn len(&self) -> usize {
        self.table.get().map_or(0, |t| t.len())
    }

    /// Whether the loaded table is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn normalize_entries<I>(entries: I) -> AHashMap<String, String>
    where
        I: Iterator<Item = (String, String)>,
    {
        entries
            .map(|(word, lemma)| (word.to_lowercase(), lemma.to_lowercase()))
            .collect()
    }

    fn read_table(path: &Path) -> Result<AHashMap<String, String>> {
        let content = fs::read_to_string(path)?;
        let raw: HashMap<String, String> = serde_json::from_str(&content)?;
        Ok(Self::normalize_entries(raw.into_iter()))
    }
}

impl Lemmatizer for DictionaryLemmatizer {
    fn load(&self) -> Result<()> {
        if let Some(fallback) = &self.fallback {
            fallback.load()?;
        }
        if self.table.get().is_some() {
            return Ok(());
        }

        let path = self.source.as_deref().ok_or_else(|| {
            ColloquyError::configuration("dictionary lemmatizer has no source to load")
        })?;
        let table = Self::read_table(path)?;
        debug!(
            "loaded {} lemma entries from {}",
            table.len(),
            path.display()
        );
        // A concurrent load may have won the race; its table is identical.
        let _ = self.table.set(table);
        Ok(())
    }

    fn is_loaded(&self) -> bool {
        self.table.get().is_some() && self.fallback.as_ref().is_none_or(|f| f.is_loaded())
    }

    fn lemmatize(&self, word: &str) -> Option<String> {
        match self.table.get() {
            Some(table) => {
                if let Some(lemma) = table.get(word) {
                    return (lemma != word).then(|| lemma.clone());
                }
            }
            None => warn!("lemma dictionary used before load; '{word}' passes through"),
        }
        self.fallback.as_ref().and_then(|f| f.lemmatize(word))
    }

    fn name(&self) -> &'static str {
        "dictionary"
    }
}
