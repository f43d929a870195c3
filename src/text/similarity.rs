//! Similarity measures.
//!
//! - Cosine similarity between sparse count vectors, and the precomputed
//!   pairwise [`SimilarityMatrix`] built from them
//! - String ratios used to judge near-spellings of titles
//!
//! # Quick Start
//!
//! ```
//! use cinematch::text::similarity::SimilarityMatrix;
//! use cinematch::text::vectorize::CountVectorizer;
//!
//! let docs = vec!["scifi espace nolan", "scifi reve nolan", "crime mafia drame"];
//! let counts = CountVectorizer::new().fit_transform(&docs).expect("fit_transform should succeed");
//!
//! let sim = SimilarityMatrix::build(&counts);
//! assert!(sim.get(0, 1) > sim.get(0, 2));
//! assert_eq!(sim.get(1, 0), sim.get(0, 1));
//! ```

use crate::error::{CineMatchError, Result};
use crate::primitives::Matrix;
use crate::text::vectorize::{CountMatrix, TermCounts};
use serde::{Deserialize, Serialize};

/// Compute cosine similarity between two count vectors.
///
/// # Formula
/// ```text
/// cosine_sim(A, B) = (A · B) / (||A|| * ||B||)
/// ```
///
/// Counts are non-negative, so the result lies in `[0, 1]`. If either vector
/// is all zeros the similarity is `0.0`, including for a vector with itself.
///
/// # Examples
///
/// ```
/// use cinematch::text::similarity::cosine_similarity;
/// use cinematch::text::vectorize::CountVectorizer;
///
/// let counts = CountVectorizer::new()
///     .fit_transform(&["disney magie", "disney glace"])
///     .expect("fit_transform should succeed");
///
/// let sim = cosine_similarity(counts.row(0), counts.row(1));
/// assert!((sim - 0.5).abs() < 1e-12);
/// ```
#[must_use]
pub fn cosine_similarity(a: &TermCounts, b: &TermCounts) -> f64 {
    let norm_a = a.norm();
    let norm_b = b.norm();

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0; // Zero vector is similar to nothing
    }

    (a.dot(b) as f64 / (norm_a * norm_b)).clamp(0.0, 1.0)
}

/// Dense N×N cosine similarity between every pair of catalog items.
///
/// Built once from a [`CountMatrix`]; immutable afterwards. The matrix is
/// exactly symmetric (each pair is computed once and mirrored). The diagonal
/// is `1.0` for items with at least one term and `0.0` for items whose
/// vector is all zeros.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimilarityMatrix {
    scores: Matrix<f64>,
}

impl SimilarityMatrix {
    /// Compute pairwise cosine similarities for all rows of `counts`.
    #[must_use]
    pub fn build(counts: &CountMatrix) -> Self {
        let rows = counts.rows();
        let n = rows.len();
        let norms: Vec<f64> = rows.iter().map(TermCounts::norm).collect();
        let mut scores = Matrix::<f64>::zeros(n, n);

        for i in 0..n {
            if norms[i] == 0.0 {
                continue;
            }
            scores.set(i, i, 1.0);

            // Upper triangle only, mirrored below
            for j in (i + 1)..n {
                if norms[j] == 0.0 {
                    continue;
                }
                let sim = (rows[i].dot(&rows[j]) as f64 / (norms[i] * norms[j])).clamp(0.0, 1.0);
                scores.set(i, j, sim);
                scores.set(j, i, sim);
            }
        }

        Self { scores }
    }

    /// Number of items (rows and columns).
    #[must_use]
    pub fn len(&self) -> usize {
        self.scores.n_rows()
    }

    /// True when built from zero documents.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Similarity between items `i` and `j`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    #[must_use]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.scores.get(i, j)
    }

    /// Similarity between items `i` and `j`, checking bounds.
    ///
    /// # Errors
    ///
    /// Returns [`CineMatchError::IndexOutOfRange`] naming the first bad index.
    pub fn try_get(&self, i: usize, j: usize) -> Result<f64> {
        let len = self.len();
        self.scores.try_get(i, j).ok_or_else(|| CineMatchError::IndexOutOfRange {
            index: if i >= len { i } else { j },
            len,
        })
    }

    /// Row `i`: the similarity of item `i` to every item, in catalog order.
    ///
    /// # Panics
    ///
    /// Panics if `i` is out of bounds.
    #[must_use]
    pub fn row(&self, i: usize) -> &[f64] {
        self.scores.row(i)
    }

    /// Borrow the underlying dense matrix.
    #[must_use]
    pub fn as_matrix(&self) -> &Matrix<f64> {
        &self.scores
    }
}

/// Metric used to judge how close a title is to a mistyped query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpellingMetric {
    /// Gestalt pattern-matching ratio, see [`sequence_ratio`]
    #[default]
    SequenceRatio,
    /// `1 - levenshtein / max_len`, see [`edit_distance_similarity`]
    NormalizedLevenshtein,
}

impl SpellingMetric {
    /// Score `candidate` against `query` in `[0, 1]`.
    #[must_use]
    pub fn score(self, candidate: &str, query: &str) -> f64 {
        match self {
            SpellingMetric::SequenceRatio => sequence_ratio(candidate, query),
            SpellingMetric::NormalizedLevenshtein => edit_distance_similarity(candidate, query),
        }
    }
}

/// Compute the gestalt pattern-matching ratio of two strings.
///
/// Finds the longest common contiguous block, then recurses on the pieces
/// left and right of it; `M` is the total length of all blocks found.
///
/// # Formula
/// ```text
/// ratio(a, b) = 2 * M / (|a| + |b|)
/// ```
///
/// Lengths are counted in Unicode scalar values and comparison is case
/// sensitive. Two empty strings have ratio `1.0`.
///
/// # Examples
///
/// ```
/// use cinematch::text::similarity::sequence_ratio;
///
/// // "Alad" + "in" match: 2 * 6 / 13
/// let r = sequence_ratio("Aladdin", "Aladin");
/// assert!((r - 12.0 / 13.0).abs() < 1e-12);
/// ```
#[must_use]
pub fn sequence_ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }

    2.0 * matching_chars(&a, &b) as f64 / total as f64
}

/// Total size of the matching blocks between `a` and `b`.
fn matching_chars(a: &[char], b: &[char]) -> usize {
    let mut matched = 0;
    let mut pending = vec![(0, a.len(), 0, b.len())];

    while let Some((alo, ahi, blo, bhi)) = pending.pop() {
        let (i, j, k) = longest_match(a, b, alo, ahi, blo, bhi);
        if k == 0 {
            continue;
        }
        matched += k;
        if alo < i && blo < j {
            pending.push((alo, i, blo, j));
        }
        if i + k < ahi && j + k < bhi {
            pending.push((i + k, ahi, j + k, bhi));
        }
    }

    matched
}

/// Longest common block of `a[alo..ahi]` and `b[blo..bhi]` as `(i, j, len)`.
///
/// Among equally long blocks the one starting earliest in `a` wins, then the
/// one starting earliest in `b`.
fn longest_match(
    a: &[char],
    b: &[char],
    alo: usize,
    ahi: usize,
    blo: usize,
    bhi: usize,
) -> (usize, usize, usize) {
    let width = bhi - blo + 1;
    let mut best = (alo, blo, 0);
    // prev[j - blo + 1]: length of the common suffix ending at a[i-1], b[j]
    let mut prev = vec![0usize; width];
    let mut cur = vec![0usize; width];

    for i in alo..ahi {
        for j in blo..bhi {
            let slot = j - blo + 1;
            if a[i] == b[j] {
                let k = prev[slot - 1] + 1;
                cur[slot] = k;
                if k > best.2 {
                    best = (i + 1 - k, j + 1 - k, k);
                }
            } else {
                cur[slot] = 0;
            }
        }
        std::mem::swap(&mut prev, &mut cur);
    }

    best
}

/// Compute Levenshtein edit distance between two strings, in characters.
///
/// # Examples
///
/// ```
/// use cinematch::text::similarity::edit_distance;
///
/// assert_eq!(edit_distance("kitten", "sitting"), 3);
/// ```
#[must_use]
pub fn edit_distance(a: &str, b: &str) -> usize {
    strsim::levenshtein(a, b)
}

/// Compute normalized edit distance similarity in `[0, 1]`.
///
/// Two empty strings are identical (`1.0`).
///
/// # Examples
///
/// ```
/// use cinematch::text::similarity::edit_distance_similarity;
///
/// let sim = edit_distance_similarity("Aladdin", "Aladin");
/// assert!((sim - (1.0 - 1.0 / 7.0)).abs() < 1e-12);
/// ```
#[must_use]
pub fn edit_distance_similarity(a: &str, b: &str) -> f64 {
    strsim::normalized_levenshtein(a, b)
}

#[cfg(test)]
#[path = "similarity_tests.rs"]
mod tests;

#[cfg(test)]
#[path = "similarity_contract.rs"]
mod similarity_contract;
