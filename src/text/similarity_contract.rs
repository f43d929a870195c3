//! Similarity contract tests on the sample film catalog.
//!
//! Properties checked:
//!   - Pairwise matrix is square and exactly symmetric
//!   - Every score lies in [0, 1]
//!   - Diagonal is 1 for items with terms
//!   - Matrix cells agree with pairwise cosine_similarity
//!   - sequence_ratio stays in [0, 1] and is 1 on identical strings

pub(crate) use super::*;
use crate::catalog::sample;
use crate::text::vectorize::CountVectorizer;

fn sample_counts() -> CountMatrix {
    let docs: Vec<String> = sample::films().into_iter().map(|e| e.features).collect();
    CountVectorizer::new()
        .fit_transform(&docs)
        .expect("fit_transform")
}

// ============================================================================
// SIM-001: symmetry
// ============================================================================

#[test]
fn sim_001_matrix_symmetric() {
    let sim = SimilarityMatrix::build(&sample_counts());
    assert!(sim.as_matrix().is_square());
    for i in 0..sim.len() {
        for j in 0..sim.len() {
            assert_eq!(
                sim.get(i, j),
                sim.get(j, i),
                "sim[{i}][{j}] != sim[{j}][{i}]"
            );
        }
    }
}

// ============================================================================
// SIM-002: range
// ============================================================================

#[test]
fn sim_002_matrix_range() {
    let sim = SimilarityMatrix::build(&sample_counts());
    for &score in sim.as_matrix().as_slice() {
        assert!((0.0..=1.0).contains(&score), "score {score} out of [0, 1]");
    }
}

// ============================================================================
// SIM-003: diagonal
// ============================================================================

#[test]
fn sim_003_diagonal_is_one() {
    let sim = SimilarityMatrix::build(&sample_counts());
    for i in 0..sim.len() {
        assert_eq!(sim.get(i, i), 1.0, "sim[{i}][{i}]");
    }
}

// ============================================================================
// SIM-004: cells agree with cosine_similarity
// ============================================================================

#[test]
fn sim_004_cells_match_pairwise_cosine() {
    let counts = sample_counts();
    let sim = SimilarityMatrix::build(&counts);
    for i in 0..counts.n_rows() {
        for j in 0..counts.n_rows() {
            if i == j {
                continue;
            }
            let expected = cosine_similarity(counts.row(i), counts.row(j));
            assert!((sim.get(i, j) - expected).abs() < 1e-12);
        }
    }
}

// ============================================================================
// SIM-005: sequence_ratio range and identity
// ============================================================================

#[test]
fn sim_005_sequence_ratio_bounds() {
    let titles: Vec<String> = sample::films().into_iter().map(|e| e.title).collect();
    for a in &titles {
        assert_eq!(sequence_ratio(a, a), 1.0);
        for b in &titles {
            let r = sequence_ratio(a, b);
            assert!((0.0..=1.0).contains(&r), "ratio({a:?}, {b:?}) = {r}");
        }
    }
}
