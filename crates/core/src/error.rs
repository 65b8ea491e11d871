//! Error model shared by the preference and similarity crates.

use thiserror::Error;

/// Result type used across the similarity library.
pub type SimilarityResult<T> = Result<T, SimilarityError>;

/// Library-level error.
///
/// A missing basis for comparison (unknown entity, no shared items) is not an
/// error: the similarity functions report it as a score of `0.0`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SimilarityError {
    /// A required argument was the absent sentinel (e.g. a nil entity id).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The same (entity, item) pair was rated more than once.
    #[error("duplicate preference: {0}")]
    DuplicatePreference(String),
}

impl SimilarityError {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn duplicate(msg: impl Into<String>) -> Self {
        Self::DuplicatePreference(msg.into())
    }
}
