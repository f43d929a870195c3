pub(crate) use super::*;
use crate::catalog::sample;

fn sample_catalog() -> Catalog {
    Catalog::new(sample::films()).expect("sample is not empty")
}

#[test]
fn test_substring_matches_case_insensitive() {
    let catalog = sample_catalog();
    let found = substring_matches("roi", catalog.all_titles());
    assert_eq!(found, vec!["Le Roi Lion"]);
}

#[test]
fn test_substring_matches_keeps_catalog_order() {
    let catalog = sample_catalog();
    let found = substring_matches("le ", catalog.all_titles());
    assert_eq!(
        found,
        vec![
            "Le Roi Lion",
            "Le Parrain",
            "Le Fabuleux Destin d'Am\u{e9}lie Poulain",
            "Le Seigneur des Anneaux",
        ]
    );
}

#[test]
fn test_close_matches_finds_typo() {
    let catalog = sample_catalog();
    let found = close_matches(
        "Aladin",
        catalog.all_titles(),
        5,
        0.4,
        SpellingMetric::SequenceRatio,
    );
    assert_eq!(found.first(), Some(&"Aladdin"));
}

#[test]
fn test_close_matches_respects_limit() {
    let titles = ["aaaa", "aaab", "aabb", "abbb", "aaac", "aacc"];
    let found = close_matches("aaaa", titles, 2, 0.0, SpellingMetric::SequenceRatio);
    assert_eq!(found.len(), 2);
    assert_eq!(found[0], "aaaa");
}

#[test]
fn test_close_matches_respects_cutoff() {
    let titles = ["Titanic", "Avatar"];
    let found = close_matches("Titanik", titles, 5, 0.99, SpellingMetric::SequenceRatio);
    assert!(found.is_empty());

    let found = close_matches("Titanic", titles, 5, 1.0, SpellingMetric::SequenceRatio);
    assert_eq!(found, vec!["Titanic"]);
}

#[test]
fn test_close_matches_tie_break_prefers_greater_title() {
    // "abc" vs "abX" and "abY" both score 2 * 2 / 6
    let titles = ["abX", "abY"];
    let found = close_matches("abc", titles, 5, 0.4, SpellingMetric::SequenceRatio);
    assert_eq!(found, vec!["abY", "abX"]);
}

#[test]
fn test_close_matches_uses_raw_query() {
    // Surrounding whitespace lowers the score but is not stripped.
    let titles = ["Up"];
    let raw = close_matches("  Up  ", titles, 5, 0.6, SpellingMetric::SequenceRatio);
    assert!(raw.is_empty());
    let trimmed = close_matches("Up", titles, 5, 0.6, SpellingMetric::SequenceRatio);
    assert_eq!(trimmed, vec!["Up"]);
}

#[test]
fn test_close_matches_levenshtein_metric() {
    let titles = ["Avatar", "Avengers"];
    let found = close_matches("Avatr", titles, 5, 0.8, SpellingMetric::NormalizedLevenshtein);
    assert_eq!(found, vec!["Avatar"]);
}

#[test]
fn test_merge_dedups_across_sets() {
    let merged = merge_suggestions(&["Aladdin"], &["Aladdin", "Avatar"], 10);
    assert_eq!(merged, vec!["Avatar", "Aladdin"]);
}

#[test]
fn test_merge_dedups_duplicate_titles_within_set() {
    let merged = merge_suggestions(&["Up", "Up"], &[], 10);
    assert_eq!(merged, vec!["Up"]);
}

#[test]
fn test_merge_equal_length_keeps_first_appearance() {
    let merged = merge_suggestions(&["Bbb", "Aaa"], &["Ccc"], 10);
    assert_eq!(merged, vec!["Bbb", "Aaa", "Ccc"]);
}

#[test]
fn test_merge_caps_after_ordering() {
    let long: Vec<String> = (0..12).map(|i| format!("Title number {i:02}")).collect();
    let long_refs: Vec<&str> = long.iter().map(String::as_str).collect();
    let merged = merge_suggestions(&long_refs, &["Up"], 10);
    assert_eq!(merged.len(), 10);
    assert_eq!(merged[0], "Up");
}

#[test]
fn test_by_title_length_counts_chars() {
    assert_eq!(by_title_length("\u{e9}\u{e9}", "abc"), Ordering::Less);
    assert_eq!(by_title_length("abc", "xyz"), Ordering::Equal);
}

#[test]
fn test_suggest_substring_query() {
    let catalog = sample_catalog();
    let suggestions = suggest(&catalog, "roi", &EngineConfig::default());
    assert!(suggestions.iter().any(|t| t == "Le Roi Lion"));
    let lengths: Vec<usize> = suggestions.iter().map(|t| t.chars().count()).collect();
    assert!(lengths.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn test_suggest_nothing_close() {
    let catalog = sample_catalog();
    let suggestions = suggest(&catalog, "zzzzzzzz", &EngineConfig::default());
    assert!(suggestions.is_empty());
}

#[test]
fn test_suggest_honors_max_suggestions() {
    let catalog = sample_catalog();
    let config = EngineConfig::default().with_max_suggestions(2);
    // "e" is contained in most titles
    let suggestions = suggest(&catalog, "e", &config);
    assert_eq!(suggestions.len(), 2);
}
