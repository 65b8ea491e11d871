//! Similarity over the entity-oriented [`PreferenceStore`].
//!
//! Thin adapters: each entity's preferences are folded into an item → score
//! map (first stored preference per item wins) and scored with the same
//! reduction as the table-based functions.

use core::hash::Hash;

use prefsim_core::{EntityId, SimilarityResult};
use prefsim_preferences::PreferenceStore;

use crate::metric::{Euclidean, Pearson, SimilarityMetric};

/// Euclidean similarity of two entities in `store`.
///
/// `0.0` when they share no items (including when either has none).
/// Fails with `InvalidArgument` if either id is nil.
pub fn euclidean_similarity<I>(
    store: &PreferenceStore<I>,
    a: EntityId,
    b: EntityId,
) -> SimilarityResult<f64>
where
    I: Eq + Hash,
{
    Euclidean.score_store(store, a, b)
}

/// Pearson correlation of two entities in `store`.
pub fn pearson_correlation<I>(
    store: &PreferenceStore<I>,
    a: EntityId,
    b: EntityId,
) -> SimilarityResult<f64>
where
    I: Eq + Hash,
{
    Pearson.score_store(store, a, b)
}
