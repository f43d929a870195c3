//! Fuzzy title suggestions for queries that match no catalog title.
//!
//! Two candidate sets are computed over all raw titles:
//!
//! 1. **Substring matches**: titles whose lowercase form contains the
//!    normalized query.
//! 2. **Near-spelling matches**: the best few titles by spelling score
//!    against the raw query, above a cutoff.
//!
//! They are merged without duplicates, ordered shortest title first and capped.

use super::config::EngineConfig;
use crate::catalog::{normalize_title, Catalog};
use crate::text::similarity::SpellingMetric;
use std::cmp::Ordering;
use std::collections::HashSet;

/// Titles whose lowercase form contains `normalized_query`, in catalog order.
///
/// # Examples
///
/// ```
/// use cinematch::recommend::suggest::substring_matches;
///
/// let titles = ["Le Roi Lion", "Titanic", "Le Parrain"];
/// assert_eq!(substring_matches("le ", titles), vec!["Le Roi Lion", "Le Parrain"]);
/// ```
pub fn substring_matches<'a, I>(normalized_query: &str, titles: I) -> Vec<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    titles
        .into_iter()
        .filter(|title| title.to_lowercase().contains(normalized_query))
        .collect()
}

/// Up to `limit` titles scoring at least `cutoff` against `query`.
///
/// Ordered by descending score; equal scores put the lexicographically
/// greater title first.
///
/// # Examples
///
/// ```
/// use cinematch::recommend::suggest::close_matches;
/// use cinematch::text::similarity::SpellingMetric;
///
/// let titles = ["Aladdin", "Avatar", "Titanic"];
/// let found = close_matches("Aladin", titles, 5, 0.4, SpellingMetric::SequenceRatio);
/// assert_eq!(found[0], "Aladdin");
/// ```
pub fn close_matches<'a, I>(
    query: &str,
    titles: I,
    limit: usize,
    cutoff: f64,
    metric: SpellingMetric,
) -> Vec<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut scored: Vec<(f64, &str)> = titles
        .into_iter()
        .map(|title| (metric.score(title, query), title))
        .filter(|&(score, _)| score >= cutoff)
        .collect();

    scored.sort_by(|a, b| b.0.total_cmp(&a.0).then_with(|| b.1.cmp(a.1)));
    scored.truncate(limit);

    scored.into_iter().map(|(_, title)| title).collect()
}

/// Ordering of merged suggestions: shorter titles first (by character count).
#[must_use]
pub fn by_title_length(a: &str, b: &str) -> Ordering {
    a.chars().count().cmp(&b.chars().count())
}

/// Merge candidate lists, dropping repeats, then order by [`by_title_length`] and cap at `max`.
///
/// Titles of equal length keep their order of first appearance (`substring`
/// before `near`).
///
/// # Examples
///
/// ```
/// use cinematch::recommend::suggest::merge_suggestions;
///
/// let merged = merge_suggestions(&["Le Roi Lion", "Up"], &["Up", "Cars"], 10);
/// assert_eq!(merged, vec!["Up", "Cars", "Le Roi Lion"]);
/// ```
#[must_use]
pub fn merge_suggestions(substring: &[&str], near: &[&str], max: usize) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut merged: Vec<&str> = substring
        .iter()
        .chain(near)
        .copied()
        .filter(|title| seen.insert(*title))
        .collect();

    merged.sort_by(|a, b| by_title_length(a, b));
    merged.truncate(max);

    merged.into_iter().map(str::to_string).collect()
}

/// Suggestions for `query` over every title in `catalog`.
#[must_use]
pub fn suggest(catalog: &Catalog, query: &str, config: &EngineConfig) -> Vec<String> {
    let normalized = normalize_title(query);

    let substring = substring_matches(&normalized, catalog.all_titles());
    let near = close_matches(
        query,
        catalog.all_titles(),
        config.near_match_limit,
        config.near_match_cutoff,
        config.spelling_metric,
    );
    tracing::trace!(?substring, ?near, "suggestion candidates");

    merge_suggestions(&substring, &near, config.max_suggestions)
}

#[cfg(test)]
#[path = "suggest_tests.rs"]
mod tests;
