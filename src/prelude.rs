//! Convenience re-exports for common usage.
//!
//! # Usage
//!
//! ```
//! use cinematch::prelude::*;
//! ```

pub use crate::catalog::{sample, Catalog, CatalogEntry, Item};
pub use crate::error::CineMatchError;
pub use crate::primitives::Matrix;
pub use crate::recommend::{initialize, EngineConfig, EngineHandle, QueryResult, ScoredItem};
pub use crate::text::similarity::{SimilarityMatrix, SpellingMetric};
pub use crate::text::vectorize::CountVectorizer;
pub use crate::text::Tokenizer;
