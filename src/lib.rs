//! Cinematch: content-based item matching in pure Rust.
//!
//! Given a catalog of titled items with descriptive feature text, cinematch
//! answers a free-text query in one of two ways:
//!
//! - the query names a catalog item (after trimming and lowercasing): every
//!   other item, ranked by cosine similarity of their feature term counts
//! - it does not: a short list of substring and near-spelling title
//!   suggestions, shortest title first
//!
//! All heavy work (vectorization, the N×N similarity matrix) happens once in
//! [`recommend::initialize`]; queries are pure reads of the resulting
//! [`EngineHandle`].
//!
//! # Quick Start
//!
//! ```
//! use cinematch::prelude::*;
//!
//! let engine = initialize(sample::films()).expect("sample catalog is not empty");
//!
//! let result = engine.recommend("Inception", 3).expect("query is not blank");
//! assert!(result.matched);
//! assert_eq!(result.top(3)[0], "Interstellar");
//!
//! let result = engine.recommend("Aladin", 3).expect("query is not blank");
//! assert!(!result.matched);
//! assert!(result.items.contains(&"Aladdin".to_string()));
//! ```
//!
//! # Modules
//!
//! - [`catalog`]: Catalog store and the sample film catalog
//! - [`primitives`]: Dense matrix storage
//! - [`text`]: Tokenization, count vectorization, similarity measures
//! - [`recommend`]: The engine, its configuration and fuzzy suggestions
//! - [`error`]: Error taxonomy

pub mod catalog;
pub mod error;
pub mod prelude;
pub mod primitives;
pub mod recommend;
pub mod text;

pub use error::{CineMatchError, Result};
pub use recommend::{initialize, EngineConfig, EngineHandle, QueryResult};
