//! Recommendation contract tests on the sample film catalog.
//!
//! Properties checked:
//!   - Every catalog title resolves and is never recommended to itself
//!   - A matched result is a permutation of all other titles
//!   - Scores are non-increasing; equal scores keep catalog order
//!   - Suggestions are ordered shortest first and capped
//!   - Repeating a query yields an identical result

pub(crate) use super::*;
use crate::catalog::sample;

fn sample_engine() -> EngineHandle {
    initialize(sample::films()).expect("sample is not empty")
}

// ============================================================================
// REC-001: self exclusion
// ============================================================================

#[test]
fn rec_001_never_recommends_itself() {
    let engine = sample_engine();
    for item in engine.catalog().items() {
        let result = engine.recommend(&item.title, 5).expect("title is not blank");
        assert!(result.matched, "{:?} did not resolve", item.title);
        assert!(
            !result.items.contains(&item.title),
            "{:?} recommended to itself",
            item.title
        );
    }
}

// ============================================================================
// REC-002: permutation of the other titles
// ============================================================================

#[test]
fn rec_002_matched_items_are_permutation_of_others() {
    let engine = sample_engine();
    for item in engine.catalog().items() {
        let mut got = engine.recommend(&item.title, 5).expect("title").items;
        let mut expected: Vec<String> = engine
            .catalog()
            .items()
            .iter()
            .filter(|other| other.id != item.id)
            .map(|other| other.title.clone())
            .collect();
        got.sort();
        expected.sort();
        assert_eq!(got, expected, "for {:?}", item.title);
    }
}

// ============================================================================
// REC-003: ordering and stable ties
// ============================================================================

#[test]
fn rec_003_scores_non_increasing_with_catalog_order_ties() {
    let engine = sample_engine();
    for id in 0..engine.catalog().len() {
        let ranked = engine.similar_items(id).expect("in range");
        for pair in ranked.windows(2) {
            assert!(pair[0].score >= pair[1].score);
            if pair[0].score == pair[1].score {
                assert!(
                    pair[0].id < pair[1].id,
                    "tie between {} and {} out of catalog order",
                    pair[0].id,
                    pair[1].id
                );
            }
        }
        for scored in &ranked {
            assert_eq!(scored.score, engine.similarity(id, scored.id).expect("in range"));
        }
    }
}

// ============================================================================
// REC-004: suggestion ordering and cap
// ============================================================================

#[test]
fn rec_004_suggestions_shortest_first_and_capped() {
    let engine = sample_engine();
    for query in ["e", "le", "a", "star", "Avatr", "Potter Harry", "in"] {
        let result = engine.recommend(query, 5).expect("query is not blank");
        assert!(!result.matched, "{query:?} should not resolve");
        assert!(result.items.len() <= config::MAX_SUGGESTIONS);
        let lengths: Vec<usize> = result.items.iter().map(|t| t.chars().count()).collect();
        assert!(
            lengths.windows(2).all(|w| w[0] <= w[1]),
            "{query:?} suggestions not ordered by length: {:?}",
            result.items
        );
        let mut deduped = result.items.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(deduped.len(), result.items.len(), "{query:?} has repeats");
    }
}

// ============================================================================
// REC-005: idempotence
// ============================================================================

#[test]
fn rec_005_repeated_queries_identical() {
    let engine = sample_engine();
    for query in ["Titanic", "titanik", "roi", "zzzz", "  AVATAR  "] {
        let first = engine.recommend(query, 3).expect("query is not blank");
        let second = engine.recommend(query, 3).expect("query is not blank");
        assert_eq!(first, second);
    }
}
