//! # Colloquy
//!
//! A small intent-classifying conversational agent core.
//!
//! ## Features
//!
//! - Text normalization pipeline (punctuation stripping, lowercasing, lemmatization)
//! - TF-IDF vectorization fit once from the intent patterns
//! - Cosine similarity matching with a fixed confidence threshold
//! - Pluggable lemma resources and response selection
//!
//! ```
//! use colloquy::prelude::*;
//!
//! let bot = Chatbot::new().unwrap();
//! assert_eq!(bot.classify_intent("tell me a joke").unwrap(), "joke");
//! assert_eq!(bot.get_response("").unwrap(), "Please say something!");
//! ```

pub mod analysis;
pub mod chat;
pub mod cli;
pub mod config;
pub mod error;
pub mod intent;
pub mod ml;

pub mod prelude {
    pub use crate::analysis::TextNormalizer;
    pub use crate::analysis::token_filter::{DictionaryLemmatizer, EnglishLemmatizer, Lemmatizer};
    pub use crate::chat::{
        Chatbot, ChatbotBuilder, FirstSelector, RandomSelector, ResponseSelector,
        RoundRobinSelector, Session, Turn,
    };
    pub use crate::config::ChatbotConfig;
    pub use crate::error::{ColloquyError, Result};
    pub use crate::intent::{Intent, IntentRegistry, builtin_intents};
    pub use crate::ml::intent_classifier::{
        Classification, IntentClassifier, SimilarityMatcher, TfIdfVectorizer,
    };
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
