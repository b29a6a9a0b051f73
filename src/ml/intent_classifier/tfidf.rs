//! TF-IDF vectorizer for text feature extraction.

use std::sync::Arc;

use ahash::{AHashMap, AHashSet};
use log::debug;

use super::types::SparseVector;
use crate::analysis::analyzer::{Analyzer, PipelineAnalyzer};
use crate::analysis::token_filter::LowercaseFilter;
use crate::analysis::tokenizer::RegexTokenizer;
use crate::error::{ColloquyError, Result};

/// TF-IDF vectorizer for text feature extraction.
///
/// Weights are raw term counts multiplied by a smoothed inverse document
/// frequency, `ln((1 + n) / (1 + df)) + 1`, and each vector is scaled to unit
/// length. Terms outside the fitted vocabulary are dropped.
pub struct TfIdfVectorizer {
    /// Vocabulary: term -> index mapping.
    vocabulary: AHashMap<String, usize>,
    /// Terms by index.
    terms: Vec<String>,
    /// Inverse document frequency for each term.
    idf: Vec<f64>,
    /// Total number of documents seen during fitting.
    n_documents: usize,
    /// Analyzer for term extraction.
    analyzer: Arc<dyn Analyzer>,
    fitted: bool,
}

impl std::fmt::Debug for TfIdfVectorizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TfIdfVectorizer")
            .field("vocabulary_size", &self.vocabulary.len())
            .field("n_documents", &self.n_documents)
            .field("analyzer", &self.analyzer.name())
            .field("fitted", &self.fitted)
            .finish()
    }
}

impl TfIdfVectorizer {
    /// Create a new TF-IDF vectorizer with the specified analyzer.
    pub fn new(analyzer: Arc<dyn Analyzer>) -> Self {
        Self {
            vocabulary: AHashMap::new(),
            terms: Vec::new(),
            idf: Vec::new(),
            n_documents: 0,
            analyzer,
            fitted: false,
        }
    }

    /// Create a vectorizer whose terms are lowercased runs of two or more
    /// word characters, the conventional TF-IDF token pattern.
    pub fn with_default_terms() -> Result<Self> {
        let analyzer = PipelineAnalyzer::new(Arc::new(RegexTokenizer::terms()?))
            .add_filter(Arc::new(LowercaseFilter::new()))
            .with_name("terms");
        Ok(Self::new(Arc::new(analyzer)))
    }

    /// Fit the vectorizer on normalized training documents.
    ///
    /// May only be called once. Fails with a configuration error when the
    /// corpus is empty or yields no terms at all.
    pub fn fit(&mut self, documents: &[String]) -> Result<()> {
        if self.fitted {
            return Err(ColloquyError::configuration("vectorizer is already fitted"));
        }
        if documents.is_empty() {
            return Err(ColloquyError::configuration(
                "cannot fit a vocabulary on an empty training corpus",
            ));
        }

        let mut vocabulary = AHashMap::new();
        let mut terms = Vec::new();
        let mut document_frequency: Vec<usize> = Vec::new();

        for doc in documents {
            let mut seen = AHashSet::new();
            for token in self.tokenize(doc)? {
                if !seen.insert(token.clone()) {
                    continue;
                }
                let idx = *vocabulary.entry(token.clone()).or_insert_with(|| {
                    terms.push(token);
                    document_frequency.push(0);
                    terms.len() - 1
                });
                document_frequency[idx] += 1;
            }
        }

        if vocabulary.is_empty() {
            return Err(ColloquyError::configuration(
                "training corpus contains no usable terms",
            ));
        }

        let n = documents.len() as f64;
        self.idf = document_frequency
            .iter()
            .map(|&df| ((n + 1.0) / (df as f64 + 1.0)).ln() + 1.0)
            .collect();
        self.vocabulary = vocabulary;
        self.terms = terms;
        self.n_documents = documents.len();
        self.fitted = true;

        debug!(
            "fitted vocabulary of {} terms over {} documents",
            self.terms.len(),
            self.n_documents
        );
        Ok(())
    }

    /// Transform a normalized document into a unit-length TF-IDF vector.
    pub fn transform(&self, document: &str) -> Result<SparseVector> {
        if !self.fitted {
            return Err(ColloquyError::configuration(
                "vectorizer must be fitted before transform",
            ));
        }

        let mut counts: AHashMap<usize, f64> = AHashMap::new();
        for token in self.tokenize(document)? {
            if let Some(&idx) = self.vocabulary.get(&token) {
                *counts.entry(idx).or_insert(0.0) += 1.0;
            }
        }

        let weighted = counts
            .into_iter()
            .map(|(idx, count)| (idx, count * self.idf[idx]));
        Ok(SparseVector::from_entries(weighted).normalized())
    }

    /// Tokenize a document using the configured analyzer.
    fn tokenize(&self, text: &str) -> Result<Vec<String>> {
        Ok(self.analyzer.analyze(text)?.map(|token| token.text).collect())
    }

    /// Whether [`fit`](Self::fit) has completed.
    pub fn is_fitted(&self) -> bool {
        self.fitted
    }

    /// Get the size of the vocabulary.
    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    /// Number of documents the model was fitted on.
    pub fn n_documents(&self) -> usize {
        self.n_documents
    }

    /// Index of `term` in the vocabulary.
    pub fn term_index(&self, term: &str) -> Option<usize> {
        self.vocabulary.get(term).copied()
    }

    /// Term at vocabulary `index`.
    pub fn term(&self, index: usize) -> Option<&str> {
        self.terms.get(index).map(String::as_str)
    }

    /// Inverse document frequency of `term`.
    pub fn idf(&self, term: &str) -> Option<f64> {
        self.term_index(term).map(|idx| self.idf[idx])
    }
}
