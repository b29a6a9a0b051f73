//! Intent classifier over a registry's training corpus.

use log::{debug, info};
use rayon::prelude::*;

use super::similarity::SimilarityMatcher;
use super::tfidf::TfIdfVectorizer;
use super::types::{Classification, SparseVector};
use crate::analysis::normalizer::TextNormalizer;
use crate::error::Result;
use crate::intent::corpus::TrainingCorpus;
use crate::intent::registry::IntentRegistry;

/// Nearest-pattern intent classifier.
///
/// Training normalizes every registry pattern, fits a TF-IDF model on the
/// result and projects each pattern once. After that the classifier is
/// immutable and can serve any number of threads without locking.
#[derive(Debug)]
pub struct IntentClassifier {
    normalizer: TextNormalizer,
    corpus: TrainingCorpus,
    vectorizer: TfIdfVectorizer,
    training_vectors: Vec<SparseVector>,
    matcher: SimilarityMatcher,
    default_intent: String,
}

impl IntentClassifier {
    /// Build the corpus from `registry`, fit the vocabulary and project the
    /// training patterns.
    ///
    /// Fails with a configuration error if the registry has no patterns to
    /// fit against.
    pub fn train(
        registry: &IntentRegistry,
        normalizer: TextNormalizer,
        matcher: SimilarityMatcher,
    ) -> Result<Self> {
        let corpus = TrainingCorpus::build(registry, &normalizer)?;

        let mut vectorizer = TfIdfVectorizer::with_default_terms()?;
        vectorizer.fit(&corpus.texts())?;

        let training_vectors = corpus
            .entries()
            .par_iter()
            .map(|entry| vectorizer.transform(&entry.text))
            .collect::<Result<Vec<_>>>()?;

        info!(
            "trained intent classifier: {} patterns, {} terms, threshold {}",
            corpus.len(),
            vectorizer.vocabulary_size(),
            matcher.threshold()
        );

        Ok(IntentClassifier {
            normalizer,
            corpus,
            vectorizer,
            training_vectors,
            matcher,
            default_intent: registry.default_intent().to_string(),
        })
    }

    /// Classify raw text, reporting the score and matched pattern.
    pub fn classify(&self, text: &str) -> Result<Classification> {
        let normalized = self.normalizer.normalize(text)?;
        let query = self.vectorizer.transform(&normalized)?;
        let decision = self.matcher.decide(&query, &self.training_vectors);

        let matched = decision.best_index.and_then(|idx| self.corpus.get(idx));
        let intent = match (decision.accepted, matched) {
            (true, Some(entry)) => entry.intent.clone(),
            _ => self.default_intent.clone(),
        };

        debug!(
            "classified {normalized:?} as '{intent}' (score {:.3}, pattern {:?})",
            decision.best_score,
            matched.map(|e| e.pattern.as_str())
        );

        Ok(Classification {
            intent,
            score: decision.best_score,
            normalized,
            matched_index: decision.best_index,
            matched_pattern: matched.map(|e| e.pattern.clone()),
            accepted: decision.accepted,
        })
    }

    /// Classify raw text and return only the intent identifier.
    pub fn predict(&self, text: &str) -> Result<String> {
        let normalized = self.normalizer.normalize(text)?;
        let query = self.vectorizer.transform(&normalized)?;
        let decision = self.matcher.decide(&query, &self.training_vectors);

        Ok(decision
            .accepted_index()
            .and_then(|idx| self.corpus.get(idx))
            .map_or_else(|| self.default_intent.clone(), |entry| entry.intent.clone()))
    }

    /// The normalizer used for both training and queries.
    pub fn normalizer(&self) -> &TextNormalizer {
        &self.normalizer
    }

    /// The training corpus.
    pub fn corpus(&self) -> &TrainingCorpus {
        &self.corpus
    }

    /// The fitted vectorizer.
    pub fn vectorizer(&self) -> &TfIdfVectorizer {
        &self.vectorizer
    }

    /// Training vectors aligned with the corpus.
    pub fn training_vectors(&self) -> &[SparseVector] {
        &self.training_vectors
    }

    /// The similarity matcher.
    pub fn matcher(&self) -> &SimilarityMatcher {
        &self.matcher
    }

    /// Identifier returned when nothing matches well enough.
    pub fn default_intent(&self) -> &str {
        &self.default_intent
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ColloquyError;
    use crate::intent::registry::Intent;

    fn builtin_classifier() -> IntentClassifier {
        IntentClassifier::train(
            &IntentRegistry::builtin().unwrap(),
            TextNormalizer::english().unwrap(),
            SimilarityMatcher::default(),
        )
        .unwrap()
    }

    #[test]
    fn test_training_shapes() {
        let classifier = builtin_classifier();

        assert_eq!(classifier.corpus().len(), 60);
        assert_eq!(classifier.training_vectors().len(), 60);
        assert!(classifier.vectorizer().is_fitted());
        assert_eq!(classifier.default_intent(), "default");
    }

    #[test]
    fn test_known_phrases() {
        let classifier = builtin_classifier();

        assert_eq!(classifier.predict("hello").unwrap(), "greeting");
        assert_eq!(classifier.predict("Hello!").unwrap(), "greeting");
        assert_eq!(classifier.predict("thank you very much").unwrap(), "thanks");
        assert_eq!(classifier.predict("tell me a joke").unwrap(), "joke");
        assert_eq!(classifier.predict("What is your name?").unwrap(), "name");
    }

    #[test]
    fn test_fallback() {
        let classifier = builtin_classifier();

        assert_eq!(classifier.predict("asdkjasdkj random gibberish").unwrap(), "default");
        assert_eq!(classifier.predict("12345").unwrap(), "default");
        assert_eq!(classifier.predict("").unwrap(), "default");
    }

    #[test]
    fn test_classification_details() {
        let classifier = builtin_classifier();

        let result = classifier.classify("Tell me a JOKE!").unwrap();
        assert_eq!(result.intent, "joke");
        assert_eq!(result.normalized, "tell me a joke");
        assert!(result.accepted);
        assert!((result.score - 1.0).abs() < 1e-9);
        assert_eq!(result.matched_pattern.as_deref(), Some("tell me a joke"));

        let result = classifier.classify("zzz qqq").unwrap();
        assert_eq!(result.intent, "default");
        assert_eq!(result.score, 0.0);
        assert!(!result.accepted);
        assert_eq!(result.matched_index, None);
    }

    #[test]
    fn test_predict_agrees_with_classify() {
        let classifier = builtin_classifier();

        for text in ["hi there", "how are you doing", "is it going to rain", "what", "laugh", "what's up", "asdf qwer", ""] {
            assert_eq!(
                classifier.predict(text).unwrap(),
                classifier.classify(text).unwrap().intent
            );
        }
    }

    #[test]
    fn test_empty_corpus_is_configuration_error() {
        let registry = IntentRegistry::new(vec![Intent::new("default", &[], &["Hm?"])]).unwrap();
        let result = IntentClassifier::train(
            &registry,
            TextNormalizer::english().unwrap(),
            SimilarityMatcher::default(),
        );
        assert!(matches!(result, Err(ColloquyError::Configuration(_))));
    }
}
