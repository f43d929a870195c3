//! Catalog store.
//!
//! Holds the immutable, ordered set of items the engine matches against and
//! the normalized-title lookup table built once from it.
//!
//! # Quick Start
//!
//! ```
//! use cinematch::catalog::{Catalog, CatalogEntry};
//!
//! let catalog = Catalog::new(vec![
//!     CatalogEntry::new("Toy Story", "animation pixar toys"),
//!     CatalogEntry::new("Aladdin", "animation disney magic"),
//! ])
//! .expect("catalog is not empty");
//!
//! assert_eq!(catalog.len(), 2);
//! assert_eq!(catalog.lookup_normalized("  ALADDIN "), Some(1));
//! ```

pub mod sample;

use crate::error::{CineMatchError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Normalizes a title or query into a lookup key: trimmed and lowercased.
///
/// # Examples
///
/// ```
/// use cinematch::catalog::normalize_title;
///
/// assert_eq!(normalize_title("  Le Roi Lion\n"), "le roi lion");
/// ```
#[must_use]
pub fn normalize_title(text: &str) -> String {
    text.trim().to_lowercase()
}

/// An unindexed catalog record as delivered by the ingestion collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Display title
    pub title: String,
    /// Descriptive keywords used only for similarity
    pub features: String,
}

impl CatalogEntry {
    /// Creates an entry from a title and its feature text.
    pub fn new(title: impl Into<String>, features: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            features: features.into(),
        }
    }
}

impl<T: Into<String>, F: Into<String>> From<(T, F)> for CatalogEntry {
    fn from((title, features): (T, F)) -> Self {
        Self::new(title, features)
    }
}

/// A catalog item. `id` is its insertion position and its row in the similarity matrix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Stable position index
    pub id: usize,
    /// Display title
    pub title: String,
    /// Feature text, never shown to users
    pub features: String,
}

/// Ordered, immutable collection of items with an O(1) normalized-title index.
///
/// Titles may repeat. The lookup index keeps the **first** item for each
/// normalized title; later duplicates stay in the catalog (and in
/// [`all_titles`](Self::all_titles)) but cannot be reached by title.
#[derive(Debug, Clone)]
pub struct Catalog {
    items: Vec<Item>,
    index: HashMap<String, usize>,
    shadowed: usize,
}

impl Catalog {
    /// Builds a catalog from entries in order.
    ///
    /// # Errors
    ///
    /// Returns [`CineMatchError::EmptyCatalog`] if `entries` is empty.
    pub fn new<I, E>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = E>,
        E: Into<CatalogEntry>,
    {
        let items: Vec<Item> = entries
            .into_iter()
            .map(Into::into)
            .enumerate()
            .map(|(id, entry)| Item {
                id,
                title: entry.title,
                features: entry.features,
            })
            .collect();

        if items.is_empty() {
            return Err(CineMatchError::EmptyCatalog);
        }

        let mut index = HashMap::with_capacity(items.len());
        let mut shadowed = 0;
        for item in &items {
            // First occurrence wins.
            match index.entry(normalize_title(&item.title)) {
                std::collections::hash_map::Entry::Vacant(slot) => {
                    slot.insert(item.id);
                }
                std::collections::hash_map::Entry::Occupied(_) => shadowed += 1,
            }
        }

        Ok(Self {
            items,
            index,
            shadowed,
        })
    }

    /// Number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always false: a catalog holds at least one item.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Item at position `id`.
    ///
    /// # Errors
    ///
    /// Returns [`CineMatchError::IndexOutOfRange`] if `id >= len()`.
    pub fn item(&self, id: usize) -> Result<&Item> {
        self.items.get(id).ok_or(CineMatchError::IndexOutOfRange {
            index: id,
            len: self.items.len(),
        })
    }

    /// Title of the item at position `id`.
    ///
    /// # Errors
    ///
    /// Returns [`CineMatchError::IndexOutOfRange`] if `id >= len()`.
    pub fn title_at(&self, id: usize) -> Result<&str> {
        self.item(id).map(|item| item.title.as_str())
    }

    /// Id of the first item whose normalized title equals the normalized `text`.
    #[must_use]
    pub fn lookup_normalized(&self, text: &str) -> Option<usize> {
        self.index.get(&normalize_title(text)).copied()
    }

    /// All raw titles in catalog order, duplicates included.
    pub fn all_titles(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.items.iter().map(|item| item.title.as_str())
    }

    /// All items in catalog order.
    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Number of items whose normalized title is shadowed by an earlier item.
    #[must_use]
    pub fn shadowed_titles(&self) -> usize {
        self.shadowed
    }
}
