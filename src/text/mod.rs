//! Text processing for feature strings and titles.
//!
//! - [`tokenize`]: split feature text into terms
//! - [`vectorize`]: fixed-vocabulary term-count vectors
//! - [`similarity`]: cosine similarity matrix and string-matching ratios

pub mod similarity;
pub mod tokenize;
pub mod vectorize;

use crate::error::Result;

/// Splits text into tokens.
///
/// Implementations must be deterministic: the same input always yields the
/// same tokens in the same order.
pub trait Tokenizer: std::fmt::Debug + Send + Sync {
    /// Tokenize `text`.
    ///
    /// # Errors
    ///
    /// Implementation specific; the built-in tokenizers never fail.
    fn tokenize(&self, text: &str) -> Result<Vec<String>>;
}
