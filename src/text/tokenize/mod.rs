//! Tokenization of feature text.
//!
//! Feature strings are short keyword bags ("animation disney magie"), so
//! tokenization is deliberately minimal: split on anything that is not
//! alphanumeric, lowercase, drop very short fragments. No stop words, no
//! stemming.

use crate::error::Result;
use crate::text::Tokenizer;

/// Shortest token kept by default; single letters are noise in keyword bags.
pub const MIN_TOKEN_LEN: usize = 2;

/// Tokenizer that splits on non-alphanumeric boundaries.
///
/// Alphanumeric is judged per Unicode scalar value, so accented words such as
/// "amélie" stay whole while "spider-man" becomes two tokens. Tokens shorter
/// than `min_len` characters are discarded.
///
/// # Examples
///
/// ```
/// use cinematch::text::{Tokenizer, tokenize::AlphanumericTokenizer};
///
/// let tokenizer = AlphanumericTokenizer::new();
/// let tokens = tokenizer.tokenize("Spider-Man, a hero").expect("tokenize should succeed");
/// assert_eq!(tokens, vec!["spider", "man", "hero"]);
/// ```
#[derive(Debug, Clone)]
pub struct AlphanumericTokenizer {
    min_len: usize,
    lowercase: bool,
}

impl AlphanumericTokenizer {
    /// Create a tokenizer with the default minimum token length that lowercases its output.
    #[must_use]
    pub fn new() -> Self {
        Self {
            min_len: MIN_TOKEN_LEN,
            lowercase: true,
        }
    }

    /// Set the minimum token length in characters (values below 1 are raised to 1).
    ///
    /// # Examples
    ///
    /// ```
    /// use cinematch::text::{Tokenizer, tokenize::AlphanumericTokenizer};
    ///
    /// let tokenizer = AlphanumericTokenizer::new().with_min_len(1);
    /// let tokens = tokenizer.tokenize("a b").expect("tokenize should succeed");
    /// assert_eq!(tokens, vec!["a", "b"]);
    /// ```
    #[must_use]
    pub fn with_min_len(mut self, min_len: usize) -> Self {
        self.min_len = min_len.max(1);
        self
    }

    /// Set whether tokens are lowercased.
    #[must_use]
    pub fn with_lowercase(mut self, lowercase: bool) -> Self {
        self.lowercase = lowercase;
        self
    }

    /// The minimum token length in characters.
    #[must_use]
    pub fn min_len(&self) -> usize {
        self.min_len
    }
}

impl Default for AlphanumericTokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Tokenizer for AlphanumericTokenizer {
    fn tokenize(&self, text: &str) -> Result<Vec<String>> {
        let tokens = text
            .split(|c: char| !c.is_alphanumeric())
            .filter(|fragment| fragment.chars().count() >= self.min_len)
            .map(|fragment| {
                if self.lowercase {
                    fragment.to_lowercase()
                } else {
                    fragment.to_string()
                }
            })
            .collect();

        Ok(tokens)
    }
}

#[cfg(test)]
#[path = "tests.rs"]
mod tests;
