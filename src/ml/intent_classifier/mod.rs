//! Intent classification with TF-IDF vectors and cosine similarity.
//!
//! # Architecture
//!
//! - [`TfIdfVectorizer`]: term extraction and weighting, fit once
//! - [`SimilarityMatcher`]: nearest training pattern plus a fixed threshold
//! - [`IntentClassifier`]: ties a registry, a normalizer and the two above
//!
//! # Example
//!
//! ```
//! use colloquy::analysis::normalizer::TextNormalizer;
//! use colloquy::intent::IntentRegistry;
//! use colloquy::ml::intent_classifier::{IntentClassifier, SimilarityMatcher};
//!
//! # fn main() -> colloquy::error::Result<()> {
//! let classifier = IntentClassifier::train(
//!     &IntentRegistry::builtin()?,
//!     TextNormalizer::english()?,
//!     SimilarityMatcher::default(),
//! )?;
//!
//! assert_eq!(classifier.predict("good morning!")?, "greeting");
//! # Ok(())
//! # }
//! ```

mod classifier;
mod similarity;
mod tfidf;
mod types;

// Public exports
pub use classifier::IntentClassifier;
pub use similarity::{
    DEFAULT_SIMILARITY_THRESHOLD, Decision, SimilarityMatcher, cosine_similarity,
};
pub use tfidf::TfIdfVectorizer;
pub use types::{Classification, SparseVector};
