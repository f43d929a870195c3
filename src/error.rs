//! Error types for cinematch operations.
//!
//! Only caller mistakes and programming faults are errors. An unknown title,
//! a typo or a query with no close match is a normal unmatched
//! [`QueryResult`](crate::recommend::QueryResult), never an error.

use thiserror::Error;

/// Result type alias used throughout the crate.
pub type Result<T> = std::result::Result<T, CineMatchError>;

/// Main error type for cinematch operations.
///
/// # Examples
///
/// ```
/// use cinematch::error::CineMatchError;
///
/// let err = CineMatchError::IndexOutOfRange { index: 7, len: 3 };
/// assert!(err.to_string().contains("out of range"));
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CineMatchError {
    /// The query was empty or contained only whitespace.
    ///
    /// Callers are expected to filter blank input themselves; treat this as a no-op.
    #[error("Invalid query: {query:?} is empty or whitespace-only")]
    InvalidQuery {
        /// The rejected query, verbatim
        query: String,
    },

    /// The engine was initialized with zero items.
    #[error("Empty catalog: at least one item is required")]
    EmptyCatalog,

    /// An item id outside `0..len` was used.
    #[error("Item index {index} out of range for catalog of {len} items")]
    IndexOutOfRange {
        /// Offending index
        index: usize,
        /// Number of items in the catalog
        len: usize,
    },

    /// Matrix data did not match the requested shape.
    #[error("Matrix dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// Expected dimensions description
        expected: String,
        /// Actual dimensions found
        actual: String,
    },

    /// An engine configuration value violated its constraint.
    #[error("Invalid configuration: {param} = {value}, expected {constraint}")]
    InvalidConfig {
        /// Parameter name
        param: String,
        /// Provided value
        value: String,
        /// Constraint description
        constraint: String,
    },
}

impl CineMatchError {
    /// Returns true for errors caused by a caller contract violation that the
    /// caller can recover from by doing nothing (currently a blank query).
    ///
    /// # Examples
    ///
    /// ```
    /// use cinematch::error::CineMatchError;
    ///
    /// let err = CineMatchError::InvalidQuery { query: "  ".to_string() };
    /// assert!(err.is_caller_error());
    /// assert!(!CineMatchError::EmptyCatalog.is_caller_error());
    /// ```
    #[must_use]
    pub fn is_caller_error(&self) -> bool {
        matches!(self, Self::InvalidQuery { .. })
    }

    pub(crate) fn invalid_config(
        param: &str,
        value: impl ToString,
        constraint: &str,
    ) -> Self {
        Self::InvalidConfig {
            param: param.to_string(),
            value: value.to_string(),
            constraint: constraint.to_string(),
        }
    }
}
