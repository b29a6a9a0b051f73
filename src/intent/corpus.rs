//! Training corpus derived from a registry's example patterns.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::analysis::normalizer::TextNormalizer;
use crate::error::Result;
use crate::intent::registry::IntentRegistry;

/// One normalized training pattern and the intent that owns it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorpusEntry {
    /// Normalized pattern text.
    pub text: String,
    /// Owning intent identifier.
    pub intent: String,
    /// The pattern as written in the registry.
    pub pattern: String,
}

/// Ordered training corpus: one entry per pattern, in registry order and
/// then pattern order. The order is stable so corpus indices are
/// reproducible across runs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingCorpus {
    entries: Vec<CorpusEntry>,
}

impl TrainingCorpus {
    /// Normalize every pattern of every non-default intent.
    pub fn build(registry: &IntentRegistry, normalizer: &TextNormalizer) -> Result<Self> {
        let mut entries = Vec::with_capacity(registry.pattern_count());

        for intent in registry.intents() {
            if intent.id == registry.default_intent() {
                continue;
            }
            for pattern in &intent.patterns {
                entries.push(CorpusEntry {
                    text: normalizer.normalize(pattern)?,
                    intent: intent.id.clone(),
                    pattern: pattern.clone(),
                });
            }
        }

        debug!(
            "built training corpus with {} entries from {} intents",
            entries.len(),
            registry.len()
        );
        Ok(TrainingCorpus { entries })
    }

    /// All entries in corpus order.
    pub fn entries(&self) -> &[CorpusEntry] {
        &self.entries
    }

    /// Entry at `index`.
    pub fn get(&self, index: usize) -> Option<&CorpusEntry> {
        self.entries.get(index)
    }

    /// Normalized texts in corpus order.
    pub fn texts(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.text.clone()).collect()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the corpus has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
