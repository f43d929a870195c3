//! Engine configuration.

use crate::error::{CineMatchError, Result};
use crate::text::similarity::SpellingMetric;
use crate::text::tokenize;
use serde::{Deserialize, Serialize};

/// Minimum near-spelling score (0 to 1) a title needs to be suggested.
pub const NEAR_MATCH_CUTOFF: f64 = 0.4;

/// Maximum number of near-spelling candidates kept before merging.
pub const NEAR_MATCH_LIMIT: usize = 5;

/// Maximum number of suggestions returned for an unmatched query.
pub const MAX_SUGGESTIONS: usize = 10;

/// Shortest feature token counted by the vectorizer.
pub const MIN_TOKEN_LEN: usize = tokenize::MIN_TOKEN_LEN;

/// Tunables of the recommendation engine.
///
/// # Examples
///
/// ```
/// use cinematch::recommend::EngineConfig;
///
/// let config = EngineConfig::default().with_max_suggestions(3);
/// assert!(config.validate().is_ok());
/// assert_eq!(config.near_match_cutoff, 0.4);
///
/// let bad = EngineConfig::default().with_near_match_cutoff(1.5);
/// assert!(bad.validate().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Minimum near-spelling score, in `[0, 1]`
    pub near_match_cutoff: f64,
    /// Near-spelling candidates kept, at least 1
    pub near_match_limit: usize,
    /// Suggestions returned, at least 1
    pub max_suggestions: usize,
    /// Shortest feature token in characters, at least 1
    pub min_token_len: usize,
    /// Near-spelling metric
    pub spelling_metric: SpellingMetric,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            near_match_cutoff: NEAR_MATCH_CUTOFF,
            near_match_limit: NEAR_MATCH_LIMIT,
            max_suggestions: MAX_SUGGESTIONS,
            min_token_len: MIN_TOKEN_LEN,
            spelling_metric: SpellingMetric::default(),
        }
    }
}

impl EngineConfig {
    /// Set the near-spelling cutoff.
    #[must_use]
    pub fn with_near_match_cutoff(mut self, cutoff: f64) -> Self {
        self.near_match_cutoff = cutoff;
        self
    }

    /// Set how many near-spelling candidates are kept.
    #[must_use]
    pub fn with_near_match_limit(mut self, limit: usize) -> Self {
        self.near_match_limit = limit;
        self
    }

    /// Set the suggestion cap.
    #[must_use]
    pub fn with_max_suggestions(mut self, max: usize) -> Self {
        self.max_suggestions = max;
        self
    }

    /// Set the minimum feature token length.
    #[must_use]
    pub fn with_min_token_len(mut self, len: usize) -> Self {
        self.min_token_len = len;
        self
    }

    /// Set the near-spelling metric.
    #[must_use]
    pub fn with_spelling_metric(mut self, metric: SpellingMetric) -> Self {
        self.spelling_metric = metric;
        self
    }

    /// Check every field against its constraint.
    ///
    /// # Errors
    ///
    /// Returns [`CineMatchError::InvalidConfig`] for the first offending field.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.near_match_cutoff) {
            return Err(CineMatchError::invalid_config(
                "near_match_cutoff",
                self.near_match_cutoff,
                "a value in [0, 1]",
            ));
        }
        if self.near_match_limit == 0 {
            return Err(CineMatchError::invalid_config(
                "near_match_limit",
                self.near_match_limit,
                "at least 1",
            ));
        }
        if self.max_suggestions == 0 {
            return Err(CineMatchError::invalid_config(
                "max_suggestions",
                self.max_suggestions,
                "at least 1",
            ));
        }
        if self.min_token_len == 0 {
            return Err(CineMatchError::invalid_config(
                "min_token_len",
                self.min_token_len,
                "at least 1",
            ));
        }
        Ok(())
    }
}
