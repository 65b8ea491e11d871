//! Similarity metric abstraction.

use core::hash::Hash;

use prefsim_core::{EntityId, PreferenceKey, SimilarityResult};
use prefsim_preferences::{PreferenceStore, PreferenceTable, Ratings};

use crate::euclidean::euclidean_from_ratings;
use crate::overlap::rating_pair;
use crate::pearson::pearson_from_ratings;

/// A pairwise similarity measure over two entities' ratings.
///
/// Implementors only provide the reduction over two rating maps; argument
/// validation and entity lookup are shared by the provided methods.
pub trait SimilarityMetric {
    /// Stable metric name (for logs and caller-side dispatch).
    fn name(&self) -> &'static str;

    /// Reduce the overlap of `a` and `b` to a single score.
    ///
    /// Must return `0.0` when the two maps share no items.
    fn score_ratings<I>(&self, a: &Ratings<I>, b: &Ratings<I>) -> f64
    where
        I: Eq + Hash;

    /// Score two entities of a mapping-oriented table.
    fn score<E, I>(&self, table: &PreferenceTable<E, I>, a: &E, b: &E) -> SimilarityResult<f64>
    where
        E: PreferenceKey,
        I: Eq + Hash,
    {
        let score = match rating_pair(table, a, b)? {
            Some((ra, rb)) => self.score_ratings(ra, rb),
            None => 0.0,
        };
        tracing::trace!(metric = self.name(), entity_a = ?a, entity_b = ?b, score, "similarity");
        Ok(score)
    }

    /// Score two entities of an entity-oriented store.
    ///
    /// Duplicate (entity, item) preferences resolve to the first one stored.
    fn score_store<I>(
        &self,
        store: &PreferenceStore<I>,
        a: EntityId,
        b: EntityId,
    ) -> SimilarityResult<f64>
    where
        I: Eq + Hash,
    {
        let ra = store.ratings_for(a)?;
        let rb = store.ratings_for(b)?;
        let score = self.score_ratings(&ra, &rb);
        tracing::trace!(metric = self.name(), entity_a = %a, entity_b = %b, score, "similarity");
        Ok(score)
    }
}

/// `1 / (1 + euclidean distance)` over shared items; in `(0, 1]`, or `0.0`.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct Euclidean;

/// Pearson product-moment correlation over shared items; in `[-1, 1]`.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct Pearson;

impl SimilarityMetric for Euclidean {
    fn name(&self) -> &'static str {
        "euclidean"
    }

    fn score_ratings<I>(&self, a: &Ratings<I>, b: &Ratings<I>) -> f64
    where
        I: Eq + Hash,
    {
        euclidean_from_ratings(a, b)
    }
}

impl SimilarityMetric for Pearson {
    fn name(&self) -> &'static str {
        "pearson"
    }

    fn score_ratings<I>(&self, a: &Ratings<I>, b: &Ratings<I>) -> f64
    where
        I: Eq + Hash,
    {
        pearson_from_ratings(a, b)
    }
}
