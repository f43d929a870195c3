//! Core storage primitives.
//!
//! [`Matrix`] holds the dense pairwise similarity scores built once at load time.

mod matrix;

pub use matrix::Matrix;
