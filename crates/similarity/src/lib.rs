//! `prefsim-similarity`
//!
//! Pairwise similarity between entities that rated overlapping sets of items.
//!
//! - Only items rated by **both** entities (the overlap) contribute to a score.
//! - No overlap, or an entity missing from the table, scores `0.0`; this is a
//!   valid "no similarity" result, not an error.
//! - An absent-sentinel key (e.g. a nil [`prefsim_core::EntityId`]) is a caller
//!   bug and fails with `SimilarityError::InvalidArgument`.
//!
//! Everything here is synchronous, allocation-light and stateless.

pub mod euclidean;
pub mod metric;
pub mod overlap;
pub mod pearson;
pub mod store;

pub use euclidean::{euclidean_from_ratings, euclidean_similarity};
pub use metric::{Euclidean, Pearson, SimilarityMetric};
pub use overlap::shared_items;
pub use pearson::{pearson_correlation, pearson_from_ratings};
