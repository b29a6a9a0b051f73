//! Common types for intent classification.

use serde::{Deserialize, Serialize};

/// Sparse term-weight vector, sorted by vocabulary index.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SparseVector {
    entries: Vec<(usize, f64)>,
}

impl SparseVector {
    /// Build a vector from (index, weight) pairs. Duplicate indices are
    /// summed and zero weights dropped.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (usize, f64)>,
    {
        let mut entries: Vec<(usize, f64)> = entries.into_iter().collect();
        entries.sort_by_key(|&(idx, _)| idx);

        let mut merged: Vec<(usize, f64)> = Vec::with_capacity(entries.len());
        for (idx, weight) in entries {
            match merged.last_mut() {
                Some((last, total)) if *last == idx => *total += weight,
                _ => merged.push((idx, weight)),
            }
        }
        merged.retain(|&(_, weight)| weight != 0.0);

        SparseVector { entries: merged }
    }

    /// Non-zero entries in index order.
    pub fn entries(&self) -> &[(usize, f64)] {
        &self.entries
    }

    /// Weight at `index` (0 when absent).
    pub fn get(&self, index: usize) -> f64 {
        self.entries
            .binary_search_by_key(&index, |&(idx, _)| idx)
            .map_or(0.0, |pos| self.entries[pos].1)
    }

    /// Number of non-zero entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the vector has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether every weight is zero.
    pub fn is_zero(&self) -> bool {
        self.entries.is_empty()
    }

    /// Euclidean length.
    pub fn norm(&self) -> f64 {
        self.entries.iter().map(|(_, w)| w * w).sum::<f64>().sqrt()
    }

    /// Dot product over the shared indices.
    pub fn dot(&self, other: &SparseVector) -> f64 {
        let (mut i, mut j) = (0, 0);
        let mut sum = 0.0;
        while i < self.entries.len() && j < other.entries.len() {
            let (a_idx, a_w) = self.entries[i];
            let (b_idx, b_w) = other.entries[j];
            match a_idx.cmp(&b_idx) {
                std::cmp::Ordering::Less => i += 1,
                std::cmp::Ordering::Greater => j += 1,
                std::cmp::Ordering::Equal => {
                    sum += a_w * b_w;
                    i += 1;
                    j += 1;
                }
            }
        }
        sum
    }

    /// Scale to unit length. The zero vector stays zero.
    pub fn normalized(mut self) -> Self {
        let norm = self.norm();
        if norm > 0.0 {
            for (_, weight) in &mut self.entries {
                *weight /= norm;
            }
        }
        self
    }
}

/// Outcome of classifying one utterance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    /// Winning intent, or the default intent below the threshold.
    pub intent: String,
    /// Best similarity score found, in [0, 1].
    pub score: f64,
    /// Normalized form of the input.
    pub normalized: String,
    /// Corpus index of the best-scoring pattern, if any scored above zero.
    pub matched_index: Option<usize>,
    /// The best-scoring pattern as written in the registry.
    pub matched_pattern: Option<String>,
    /// Whether the score cleared the threshold.
    pub accepted: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_entries_sorts_and_merges() {
        let vector = SparseVector::from_entries(vec![(3, 1.0), (1, 2.0), (3, 0.5), (2, 0.0)]);

        assert_eq!(vector.entries(), &[(1, 2.0), (3, 1.5)]);
        assert_eq!(vector.get(3), 1.5);
        assert_eq!(vector.get(2), 0.0);
    }

    #[test]
    fn test_dot_and_norm() {
        let a = SparseVector::from_entries(vec![(0, 3.0), (2, 4.0)]);
        let b = SparseVector::from_entries(vec![(2, 1.0), (5, 7.0)]);

        assert_eq!(a.norm(), 5.0);
        assert_eq!(a.dot(&b), 4.0);
        assert_eq!(b.dot(&a), 4.0);
        assert_eq!(a.dot(&SparseVector::default()), 0.0);
    }

    #[test]
    fn test_normalized() {
        let a = SparseVector::from_entries(vec![(0, 3.0), (2, 4.0)]).normalized();
        assert!((a.norm() - 1.0).abs() < 1e-12);
        assert!((a.get(0) - 0.6).abs() < 1e-12);

        let zero = SparseVector::default().normalized();
        assert!(zero.is_zero());
    }
}
