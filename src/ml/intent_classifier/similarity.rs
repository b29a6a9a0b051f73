//! Cosine similarity and the thresholded nearest-pattern decision.

use super::types::SparseVector;

/// Similarity threshold a match must exceed to be accepted.
pub const DEFAULT_SIMILARITY_THRESHOLD: f64 = 0.3;

/// Cosine similarity between two non-negative vectors, in [0, 1].
///
/// A zero vector is similar to nothing: the result is 0.
pub fn cosine_similarity(a: &SparseVector, b: &SparseVector) -> f64 {
    let magnitude_a = a.norm();
    let magnitude_b = b.norm();

    if magnitude_a == 0.0 || magnitude_b == 0.0 {
        0.0
    } else {
        (a.dot(b) / (magnitude_a * magnitude_b)).clamp(0.0, 1.0)
    }
}

/// Best match found for a query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Decision {
    /// Index of the highest-scoring training vector (earliest on ties);
    /// `None` when there are no training vectors or every score is zero.
    pub best_index: Option<usize>,
    /// Highest score seen.
    pub best_score: f64,
    /// Whether `best_score` exceeds the threshold.
    pub accepted: bool,
}

impl Decision {
    /// The winning index, if the match was accepted.
    pub fn accepted_index(&self) -> Option<usize> {
        self.best_index.filter(|_| self.accepted)
    }
}

/// Scores a query against every training vector and applies the threshold.
///
/// Pure: inputs are never modified and the same inputs always give the same
/// decision.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimilarityMatcher {
    threshold: f64,
}

impl SimilarityMatcher {
    /// Create a matcher that accepts scores strictly greater than `threshold`.
    pub fn new(threshold: f64) -> Self {
        SimilarityMatcher { threshold }
    }

    /// The acceptance threshold.
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Find the best-scoring training vector.
    pub fn decide(&self, query: &SparseVector, training: &[SparseVector]) -> Decision {
        let mut best_index = None;
        let mut best_score = 0.0;

        for (idx, candidate) in training.iter().enumerate() {
            let score = cosine_similarity(query, candidate);
            // Strictly greater keeps the earliest index on ties.
            if score > best_score {
                best_score = score;
                best_index = Some(idx);
            }
        }

        Decision {
            best_index,
            best_score,
            accepted: best_index.is_some() && best_score > self.threshold,
        }
    }

    /// Label of the winning training vector, or `default_intent` when no
    /// score exceeds the threshold. `labels` is aligned with `training`.
    pub fn classify<'a, L: AsRef<str>>(
        &self,
        query: &SparseVector,
        training: &[SparseVector],
        labels: &'a [L],
        default_intent: &'a str,
    ) -> &'a str {
        self.decide(query, training)
            .accepted_index()
            .and_then(|idx| labels.get(idx))
            .map_or(default_intent, |label| label.as_ref())
    }
}

impl Default for SimilarityMatcher {
    fn default() -> Self {
        Self::new(DEFAULT_SIMILARITY_THRESHOLD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vector(entries: &[(usize, f64)]) -> SparseVector {
        SparseVector::from_entries(entries.iter().copied())
    }

    #[test]
    fn test_cosine_similarity() {
        let a = vector(&[(0, 1.0), (1, 1.0)]);
        let b = vector(&[(0, 2.0), (1, 2.0)]);
        let c = vector(&[(2, 1.0)]);

        assert!((cosine_similarity(&a, &b) - 1.0).abs() < 1e-12);
        assert_eq!(cosine_similarity(&a, &c), 0.0);
        assert!((cosine_similarity(&a, &vector(&[(0, 1.0)])) - 0.5f64.sqrt()).abs() < 1e-12);
        assert_eq!(cosine_similarity(&SparseVector::default(), &a), 0.0);
        assert_eq!(cosine_similarity(&a, &SparseVector::default()), 0.0);
    }

    #[test]
    fn test_picks_maximum() {
        let matcher = SimilarityMatcher::default();
        let training = vec![vector(&[(0, 1.0)]), vector(&[(1, 1.0)]), vector(&[(1, 1.0), (2, 1.0)])];
        let labels = ["a", "b", "c"];

        let query = vector(&[(1, 1.0)]);
        let decision = matcher.decide(&query, &training);
        assert_eq!(decision.best_index, Some(1));
        assert!(decision.accepted);
        assert_eq!(matcher.classify(&query, &training, &labels, "default"), "b");
    }

    #[test]
    fn test_ties_go_to_earliest() {
        let matcher = SimilarityMatcher::default();
        let training = vec![vector(&[(0, 1.0)]), vector(&[(1, 1.0)]), vector(&[(1, 5.0)])];
        let labels = ["first", "second", "third"];

        let query = vector(&[(1, 1.0)]);
        assert_eq!(matcher.decide(&query, &training).best_index, Some(1));
        assert_eq!(matcher.classify(&query, &training, &labels, "default"), "second");
    }

    #[test]
    fn test_threshold_is_strict() {
        let training = vec![vector(&[(0, 1.0), (1, 1.0)])];
        let labels = ["pair"];
        let query = vector(&[(0, 1.0)]);
        let score = 0.5f64.sqrt();

        assert_eq!(
            SimilarityMatcher::new(score - 1e-9).classify(&query, &training, &labels, "default"),
            "pair"
        );

        let at_threshold = SimilarityMatcher::new(1.0);
        let decision = at_threshold.decide(&vector(&[(0, 1.0), (1, 1.0)]), &training);
        assert!(!decision.accepted);
        assert_eq!(decision.accepted_index(), None);
    }

    #[test]
    fn test_zero_query_and_empty_corpus() {
        let matcher = SimilarityMatcher::default();
        let labels: [&str; 0] = [];

        assert_eq!(
            matcher.classify(&vector(&[(0, 1.0)]), &[], &labels, "default"),
            "default"
        );

        let training = vec![vector(&[(0, 1.0)])];
        let decision = matcher.decide(&SparseVector::default(), &training);
        assert_eq!(decision.best_index, None);
        assert_eq!(decision.best_score, 0.0);
        assert_eq!(
            matcher.classify(&SparseVector::default(), &training, &["only"], "default"),
            "default"
        );
    }
}
