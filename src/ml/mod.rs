//! Machine learning components for Colloquy.
//!
//! Intent classification lives in [`intent_classifier`]: TF-IDF vectors over
//! normalized patterns, compared with cosine similarity.

pub mod intent_classifier;
