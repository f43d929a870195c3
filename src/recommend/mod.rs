//! Content-based recommendation engine.
//!
//! [`initialize`] builds an immutable [`EngineHandle`] once: catalog store,
//! term-count vectors of every item's features, and the pairwise cosine
//! [`SimilarityMatrix`]. Each [`EngineHandle::recommend`] call is then a pure
//! lookup:
//!
//! - the query's normalized form equals a catalog title: every *other* item,
//!   most similar first (`matched = true`)
//! - otherwise: substring and near-spelling title suggestions
//!   (`matched = false`, possibly empty)
//!
//! # Quick Start
//!
//! ```
//! use cinematch::recommend;
//!
//! let engine = recommend::initialize(vec![
//!     ("Interstellar", "scifi espace temps nolan"),
//!     ("Inception", "scifi reve nolan"),
//!     ("Le Parrain", "crime mafia drame"),
//! ])
//! .expect("catalog is not empty");
//!
//! let result = engine.recommend("interstellar", 5).expect("query is not blank");
//! assert!(result.matched);
//! assert_eq!(result.items, vec!["Inception", "Le Parrain"]);
//!
//! let result = engine.recommend("Inceptoin", 5).expect("query is not blank");
//! assert!(!result.matched);
//! assert_eq!(result.items, vec!["Inception"]);
//! ```

pub mod config;
pub mod suggest;

pub use config::EngineConfig;

use crate::catalog::{Catalog, CatalogEntry};
use crate::error::{CineMatchError, Result};
use crate::text::similarity::SimilarityMatrix;
use crate::text::tokenize::AlphanumericTokenizer;
use crate::text::vectorize::CountVectorizer;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Outcome of a query.
///
/// `matched = true`: `items` ranks every other catalog title by similarity.
/// `matched = false`: `items` holds suggestions, possibly none.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryResult {
    /// Whether the query resolved to a catalog item
    pub matched: bool,
    /// Ranked titles
    pub items: Vec<String>,
}

impl QueryResult {
    /// The items a caller should display for a result-count hint.
    ///
    /// Matched results are truncated to `hint`; suggestions are already
    /// capped by the engine and returned whole.
    ///
    /// # Examples
    ///
    /// ```
    /// use cinematch::recommend::QueryResult;
    ///
    /// let result = QueryResult {
    ///     matched: true,
    ///     items: vec!["a".into(), "b".into(), "c".into()],
    /// };
    /// assert_eq!(result.top(2), ["a", "b"]);
    /// assert_eq!(result.top(10).len(), 3);
    /// ```
    #[must_use]
    pub fn top(&self, hint: usize) -> &[String] {
        if self.matched {
            &self.items[..hint.min(self.items.len())]
        } else {
            &self.items
        }
    }
}

/// One ranked neighbour of a resolved item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredItem {
    /// Catalog id of the neighbour
    pub id: usize,
    /// Its title
    pub title: String,
    /// Cosine similarity to the resolved item
    pub score: f64,
}

/// Ordering of recommendations: highest similarity first.
///
/// Used with a stable sort, items of equal score keep catalog order.
#[must_use]
pub fn by_descending_similarity(a: &ScoredItem, b: &ScoredItem) -> Ordering {
    b.score.total_cmp(&a.score)
}

/// Immutable, precomputed matching state. Cheap to share across threads.
#[derive(Debug, Clone)]
pub struct EngineHandle {
    catalog: Catalog,
    similarity: SimilarityMatrix,
    config: EngineConfig,
}

/// Build an engine with the default [`EngineConfig`].
///
/// # Errors
///
/// Returns [`CineMatchError::EmptyCatalog`] if `entries` is empty.
pub fn initialize<I, E>(entries: I) -> Result<EngineHandle>
where
    I: IntoIterator<Item = E>,
    E: Into<CatalogEntry>,
{
    EngineHandle::initialize_with(EngineConfig::default(), entries)
}

impl EngineHandle {
    /// Build an engine with an explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns [`CineMatchError::InvalidConfig`] if `config` fails validation,
    /// or [`CineMatchError::EmptyCatalog`] if `entries` is empty.
    pub fn initialize_with<I, E>(config: EngineConfig, entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = E>,
        E: Into<CatalogEntry>,
    {
        config.validate()?;
        let catalog = Catalog::new(entries)?;

        let features: Vec<&str> = catalog
            .items()
            .iter()
            .map(|item| item.features.as_str())
            .collect();
        let mut vectorizer = CountVectorizer::new().with_tokenizer(Box::new(
            AlphanumericTokenizer::new().with_min_len(config.min_token_len),
        ));
        let counts = vectorizer.fit_transform(&features)?;

        for (item, row) in catalog.items().iter().zip(counts.rows()) {
            if row.is_zero() {
                tracing::warn!(
                    id = item.id,
                    title = %item.title,
                    "item features produce no terms; it will match nothing"
                );
            }
        }

        let similarity = SimilarityMatrix::build(&counts);

        tracing::debug!(
            items = catalog.len(),
            vocabulary = vectorizer.vocabulary_size(),
            shadowed_titles = catalog.shadowed_titles(),
            "engine initialized"
        );

        Ok(Self {
            catalog,
            similarity,
            config,
        })
    }

    /// Answer a query.
    ///
    /// `result_count_hint` is advisory: matched results always carry the full
    /// ranking and callers truncate with [`QueryResult::top`].
    ///
    /// # Errors
    ///
    /// Returns [`CineMatchError::InvalidQuery`] if `query` is empty or
    /// whitespace-only. Every other query yields a result.
    pub fn recommend(&self, query: &str, result_count_hint: usize) -> Result<QueryResult> {
        if query.trim().is_empty() {
            return Err(CineMatchError::InvalidQuery {
                query: query.to_string(),
            });
        }

        let result = match self.catalog.lookup_normalized(query) {
            Some(id) => QueryResult {
                matched: true,
                items: self
                    .ranked_neighbours(id)
                    .into_iter()
                    .map(|item| item.title)
                    .collect(),
            },
            None => QueryResult {
                matched: false,
                items: suggest::suggest(&self.catalog, query, &self.config),
            },
        };

        tracing::debug!(
            query,
            result_count_hint,
            matched = result.matched,
            items = result.items.len(),
            "query answered"
        );

        Ok(result)
    }

    /// Every item other than `id` with its similarity score, best first.
    ///
    /// # Errors
    ///
    /// Returns [`CineMatchError::IndexOutOfRange`] if `id` is not a catalog id.
    pub fn similar_items(&self, id: usize) -> Result<Vec<ScoredItem>> {
        self.catalog.item(id)?;
        Ok(self.ranked_neighbours(id))
    }

    /// Similarity between items `i` and `j`.
    ///
    /// # Errors
    ///
    /// Returns [`CineMatchError::IndexOutOfRange`] if either id is not a catalog id.
    pub fn similarity(&self, i: usize, j: usize) -> Result<f64> {
        self.similarity.try_get(i, j)
    }

    /// Id the query resolves to, if any.
    #[must_use]
    pub fn resolve(&self, query: &str) -> Option<usize> {
        self.catalog.lookup_normalized(query)
    }

    /// The catalog store.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The precomputed similarity matrix.
    #[must_use]
    pub fn similarity_matrix(&self) -> &SimilarityMatrix {
        &self.similarity
    }

    /// The active configuration.
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// `id` must be in range.
    fn ranked_neighbours(&self, id: usize) -> Vec<ScoredItem> {
        let mut ranked: Vec<ScoredItem> = self
            .similarity
            .row(id)
            .iter()
            .zip(self.catalog.items())
            .filter(|(_, item)| item.id != id)
            .map(|(&score, item)| ScoredItem {
                id: item.id,
                title: item.title.clone(),
                score,
            })
            .collect();

        // Stable: ties stay in catalog order
        ranked.sort_by(by_descending_similarity);
        ranked
    }
}


#[cfg(test)]
#[path = "recommend_contract.rs"]
mod recommend_contract;
