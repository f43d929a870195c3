//! Bag-of-words vectorization.
//!
//! [`CountVectorizer`] learns a fixed vocabulary from every item's feature
//! text in one pass and turns each document into a sparse [`TermCounts`]
//! vector over that vocabulary.
//!
//! # Quick Start
//!
//! ```
//! use cinematch::text::vectorize::CountVectorizer;
//!
//! let docs = vec!["scifi espace nolan", "scifi reve nolan", "crime mafia drame"];
//!
//! let mut vectorizer = CountVectorizer::new();
//! let counts = vectorizer.fit_transform(&docs).expect("fit_transform should succeed");
//!
//! assert_eq!(counts.n_rows(), 3);
//! assert_eq!(counts.n_cols(), 7);
//! assert_eq!(counts.row(0).dot(counts.row(1)), 2);
//! ```

use crate::error::{CineMatchError, Result};
use crate::text::tokenize::AlphanumericTokenizer;
use crate::text::Tokenizer;
use std::collections::{BTreeMap, BTreeSet, HashMap};

/// Sparse term-count vector: `(term index, count)` pairs sorted by term index.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TermCounts {
    entries: Vec<(usize, u32)>,
}

impl TermCounts {
    fn from_map(counts: BTreeMap<usize, u32>) -> Self {
        Self {
            entries: counts.into_iter().collect(),
        }
    }

    /// Count of term `term_idx` (0 when absent).
    #[must_use]
    pub fn get(&self, term_idx: usize) -> u32 {
        self.entries
            .binary_search_by_key(&term_idx, |&(idx, _)| idx)
            .map_or(0, |pos| self.entries[pos].1)
    }

    /// Number of distinct terms present.
    #[must_use]
    pub fn nnz(&self) -> usize {
        self.entries.len()
    }

    /// True when no vocabulary term occurs in the document.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate `(term index, count)` pairs in ascending term order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, u32)> + '_ {
        self.entries.iter().copied()
    }

    /// Exact integer dot product, merging the two sorted entry lists.
    #[must_use]
    pub fn dot(&self, other: &Self) -> u64 {
        let (mut i, mut j) = (0, 0);
        let mut sum = 0u64;
        while i < self.entries.len() && j < other.entries.len() {
            let (a_idx, a_count) = self.entries[i];
            let (b_idx, b_count) = other.entries[j];
            match a_idx.cmp(&b_idx) {
                std::cmp::Ordering::Less => i += 1,
                std::cmp::Ordering::Greater => j += 1,
                std::cmp::Ordering::Equal => {
                    sum += u64::from(a_count) * u64::from(b_count);
                    i += 1;
                    j += 1;
                }
            }
        }
        sum
    }

    /// Euclidean norm.
    #[must_use]
    pub fn norm(&self) -> f64 {
        (self.dot(self) as f64).sqrt()
    }
}

/// Document-term count matrix with sparse rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountMatrix {
    rows: Vec<TermCounts>,
    n_terms: usize,
}

impl CountMatrix {
    /// Number of documents.
    #[must_use]
    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    /// Vocabulary size.
    #[must_use]
    pub fn n_cols(&self) -> usize {
        self.n_terms
    }

    /// Count vector of document `idx`.
    ///
    /// # Panics
    ///
    /// Panics if `idx` is out of bounds.
    #[must_use]
    pub fn row(&self, idx: usize) -> &TermCounts {
        &self.rows[idx]
    }

    /// All rows in document order.
    #[must_use]
    pub fn rows(&self) -> &[TermCounts] {
        &self.rows
    }
}

/// Converts text documents to a matrix of term counts.
///
/// Vocabulary indices are assigned in lexicographic term order, so the same
/// documents always yield the same vocabulary and the same vectors.
///
/// # Examples
///
/// ```
/// use cinematch::text::vectorize::CountVectorizer;
///
/// let mut vectorizer = CountVectorizer::new();
/// vectorizer.fit(&["disney magie", "disney glace"]).expect("fit should succeed");
///
/// assert_eq!(vectorizer.vocabulary_size(), 3);
/// assert_eq!(vectorizer.vocabulary().get("disney"), Some(&0));
/// ```
#[derive(Debug)]
pub struct CountVectorizer {
    tokenizer: Box<dyn Tokenizer>,
    vocabulary: HashMap<String, usize>,
}

impl CountVectorizer {
    /// Create a vectorizer using [`AlphanumericTokenizer`] with its defaults.
    #[must_use]
    pub fn new() -> Self {
        Self {
            tokenizer: Box::new(AlphanumericTokenizer::new()),
            vocabulary: HashMap::new(),
        }
    }

    /// Set the tokenizer to use.
    ///
    /// # Examples
    ///
    /// ```
    /// use cinematch::text::vectorize::CountVectorizer;
    /// use cinematch::text::tokenize::AlphanumericTokenizer;
    ///
    /// let vectorizer = CountVectorizer::new()
    ///     .with_tokenizer(Box::new(AlphanumericTokenizer::new().with_min_len(1)));
    /// ```
    #[must_use]
    pub fn with_tokenizer(mut self, tokenizer: Box<dyn Tokenizer>) -> Self {
        self.tokenizer = tokenizer;
        self
    }

    /// Learn vocabulary from documents and transform them to a count matrix.
    ///
    /// # Errors
    ///
    /// Returns [`CineMatchError::EmptyCatalog`] if `documents` is empty, or
    /// any error raised by the tokenizer.
    pub fn fit_transform<S: AsRef<str>>(&mut self, documents: &[S]) -> Result<CountMatrix> {
        if documents.is_empty() {
            return Err(CineMatchError::EmptyCatalog);
        }

        let tokenized = documents
            .iter()
            .map(|doc| self.tokenizer.tokenize(doc.as_ref()))
            .collect::<Result<Vec<_>>>()?;

        self.vocabulary = Self::build_vocabulary(&tokenized);
        Ok(self.count_rows(&tokenized))
    }

    /// Learn vocabulary from documents.
    ///
    /// # Errors
    ///
    /// Returns [`CineMatchError::EmptyCatalog`] if `documents` is empty, or
    /// any error raised by the tokenizer.
    pub fn fit<S: AsRef<str>>(&mut self, documents: &[S]) -> Result<()> {
        self.fit_transform(documents).map(|_| ())
    }

    /// Transform documents using the learned vocabulary.
    ///
    /// Terms outside the vocabulary are ignored, so a document made only of
    /// unknown terms becomes the zero vector.
    ///
    /// # Errors
    ///
    /// Returns any error raised by the tokenizer.
    pub fn transform<S: AsRef<str>>(&self, documents: &[S]) -> Result<CountMatrix> {
        let tokenized = documents
            .iter()
            .map(|doc| self.tokenizer.tokenize(doc.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        Ok(self.count_rows(&tokenized))
    }

    /// Get the learned vocabulary (term to column index).
    #[must_use]
    pub fn vocabulary(&self) -> &HashMap<String, usize> {
        &self.vocabulary
    }

    /// Get the vocabulary size.
    #[must_use]
    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    fn build_vocabulary(tokenized: &[Vec<String>]) -> HashMap<String, usize> {
        let terms: BTreeSet<&str> = tokenized.iter().flatten().map(String::as_str).collect();
        terms
            .into_iter()
            .enumerate()
            .map(|(idx, term)| (term.to_string(), idx))
            .collect()
    }

    fn count_rows(&self, tokenized: &[Vec<String>]) -> CountMatrix {
        let rows = tokenized
            .iter()
            .map(|tokens| {
                let mut counts = BTreeMap::new();
                for token in tokens {
                    if let Some(&idx) = self.vocabulary.get(token) {
                        *counts.entry(idx).or_insert(0u32) += 1;
                    }
                }
                TermCounts::from_map(counts)
            })
            .collect();

        CountMatrix {
            rows,
            n_terms: self.vocabulary.len(),
        }
    }
}

impl Default for CountVectorizer {
    fn default() -> Self {
        Self::new()
    }
}


#[cfg(test)]
#[path = "vectorize_contract.rs"]
mod vectorize_contract;
