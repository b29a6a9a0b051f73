//! Read-only table of intent definitions.
//!
//! # Examples
//!
//! ```
//! use colloquy::intent::IntentRegistry;
//!
//! let registry = IntentRegistry::builtin().unwrap();
//! assert!(!registry.responses_for("greeting").unwrap().is_empty());
//! assert!(registry.responses_for("no-such-intent").is_err());
//! ```

use std::fs;
use std::path::Path;

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::error::{ColloquyError, Result};
use crate::intent::builtin::builtin_intents;

/// A discrete category of user request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Intent {
    /// Unique identifier.
    pub id: String,
    /// Example phrases, in training order. Empty only for the default intent.
    #[serde(default)]
    pub patterns: Vec<String>,
    /// Candidate responses. Never empty.
    pub responses: Vec<String>,
}

impl Intent {
    /// Create an intent from string slices.
    pub fn new(id: &str, patterns: &[&str], responses: &[&str]) -> Self {
        Intent {
            id: id.to_string(),
            patterns: patterns.iter().map(|p| p.to_string()).collect(),
            responses: responses.iter().map(|r| r.to_string()).collect(),
        }
    }
}

/// Immutable, validated collection of intents.
///
/// Invariants checked on construction:
/// - identifiers are non-empty and unique,
/// - every intent has at least one response,
/// - the default intent exists and has no patterns,
/// - every other intent has at least one pattern.
#[derive(Debug, Clone)]
pub struct IntentRegistry {
    intents: Vec<Intent>,
    index: AHashMap<String, usize>,
    default_intent: String,
}

impl IntentRegistry {
    /// Identifier of the fallback intent unless configured otherwise.
    pub const DEFAULT_INTENT: &'static str = "default";

    /// Create a registry whose fallback intent is [`Self::DEFAULT_INTENT`].
    pub fn new(intents: Vec<Intent>) -> Result<Self> {
        Self::with_default_intent(intents, Self::DEFAULT_INTENT)
    }

    /// Create a registry with a custom fallback intent identifier.
    pub fn with_default_intent(intents: Vec<Intent>, default_intent: &str) -> Result<Self> {
        let mut index = AHashMap::with_capacity(intents.len());

        for (position, intent) in intents.iter().enumerate() {
            if intent.id.trim().is_empty() {
                return Err(ColloquyError::configuration(format!(
                    "intent #{position} has an empty identifier"
                )));
            }
            if index.insert(intent.id.clone(), position).is_some() {
                return Err(ColloquyError::configuration(format!(
                    "duplicate intent identifier '{}'",
                    intent.id
                )));
            }
            if intent.responses.is_empty() {
                return Err(ColloquyError::configuration(format!(
                    "intent '{}' has no responses",
                    intent.id
                )));
            }
            let is_default = intent.id == default_intent;
            if is_default && !intent.patterns.is_empty() {
                return Err(ColloquyError::configuration(format!(
                    "default intent '{}' must not have patterns",
                    intent.id
                )));
            }
            if !is_default && intent.patterns.is_empty() {
                return Err(ColloquyError::configuration(format!(
                    "intent '{}' has no patterns",
                    intent.id
                )));
            }
        }

        if !index.contains_key(default_intent) {
            return Err(ColloquyError::configuration(format!(
                "default intent '{default_intent}' is missing"
            )));
        }

        Ok(IntentRegistry {
            intents,
            index,
            default_intent: default_intent.to_string(),
        })
    }

    /// The built-in intent table.
    pub fn builtin() -> Result<Self> {
        Self::new(builtin_intents())
    }

    /// Parse a JSON array of intents.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let intents: Vec<Intent> = serde_json::from_str(json)?;
        Self::new(intents)
    }

    /// Load a JSON array of intents from a file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// Responses for `intent_id`.
    ///
    /// Fails with [`ColloquyError::Lookup`] if the identifier is unknown,
    /// which only happens when a caller invents identifiers.
    pub fn responses_for(&self, intent_id: &str) -> Result<&[String]> {
        self.get(intent_id)
            .map(|intent| intent.responses.as_slice())
            .ok_or_else(|| ColloquyError::lookup(format!("unknown intent '{intent_id}'")))
    }

    /// Look up an intent by identifier.
    pub fn get(&self, intent_id: &str) -> Option<&Intent> {
        self.index.get(intent_id).map(|&i| &self.intents[i])
    }

    /// Whether `intent_id` is registered.
    pub fn contains(&self, intent_id: &str) -> bool {
        self.index.contains_key(intent_id)
    }

    /// All intents in registration order.
    pub fn intents(&self) -> &[Intent] {
        &self.intents
    }

    /// Identifier of the fallback intent.
    pub fn default_intent(&self) -> &str {
        &self.default_intent
    }

    /// Number of registered intents, the default included.
    pub fn len(&self) -> usize {
        self.intents.len()
    }

    /// Whether the registry is empty (never true for a validated registry).
    pub fn is_empty(&self) -> bool {
        self.intents.is_empty()
    }

    /// Total number of example patterns across all intents.
    pub fn pattern_count(&self) -> usize {
        self.intents.iter().map(|i| i.patterns.len()).sum()
    }
}

impl Default for IntentRegistry {
    fn default() -> Self {
        Self::builtin().expect("built-in intents should always validate")
    }
}
