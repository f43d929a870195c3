//! Vectorization contract tests.
//!
//! Properties checked:
//!   - Output shape is (n_docs, vocab_size)
//!   - Every stored count is strictly positive
//!   - fit_transform is equivalent to fit followed by transform
//!   - Vectorization is deterministic across fresh vectorizers

pub(crate) use super::*;
use crate::catalog::sample;

fn sample_features() -> Vec<String> {
    sample::films().into_iter().map(|entry| entry.features).collect()
}

// ============================================================================
// VEC-001: output shape
// ============================================================================

#[test]
fn vec_001_output_shape() {
    let docs = sample_features();
    let mut vectorizer = CountVectorizer::new();
    let matrix = vectorizer.fit_transform(&docs).expect("fit_transform");

    assert_eq!(matrix.n_rows(), docs.len());
    assert_eq!(matrix.n_cols(), vectorizer.vocabulary_size());
    for row in matrix.rows() {
        assert!(row.iter().all(|(idx, _)| idx < matrix.n_cols()));
    }
}

// ============================================================================
// VEC-002: counts are positive, entries sorted
// ============================================================================

#[test]
fn vec_002_counts_positive_and_sorted() {
    let docs = sample_features();
    let mut vectorizer = CountVectorizer::new();
    let matrix = vectorizer.fit_transform(&docs).expect("fit_transform");

    for (doc, row) in matrix.rows().iter().enumerate() {
        let indices: Vec<usize> = row.iter().map(|(idx, _)| idx).collect();
        assert!(
            indices.windows(2).all(|w| w[0] < w[1]),
            "row {doc} entries not strictly ascending: {indices:?}"
        );
        assert!(row.iter().all(|(_, count)| count > 0), "row {doc} stores a zero count");
    }
}

// ============================================================================
// VEC-003: fit_transform == fit + transform
// ============================================================================

#[test]
fn vec_003_fit_transform_composition() {
    let docs = sample_features();

    let mut combined = CountVectorizer::new();
    let a = combined.fit_transform(&docs).expect("fit_transform");

    let mut split = CountVectorizer::new();
    split.fit(&docs).expect("fit");
    let b = split.transform(&docs).expect("transform");

    assert_eq!(a, b);
}

// ============================================================================
// VEC-004: determinism
// ============================================================================

#[test]
fn vec_004_deterministic() {
    let docs = sample_features();
    let first = CountVectorizer::new().fit_transform_owned(&docs);
    for _ in 0..5 {
        assert_eq!(CountVectorizer::new().fit_transform_owned(&docs), first);
    }
}

impl CountVectorizer {
    fn fit_transform_owned(mut self, docs: &[String]) -> (Vec<(String, usize)>, CountMatrix) {
        let matrix = self.fit_transform(docs).expect("fit_transform");
        let mut vocab: Vec<(String, usize)> = self.vocabulary.into_iter().collect();
        vocab.sort();
        (vocab, matrix)
    }
}
