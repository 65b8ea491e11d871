//! Mapping-oriented preference table.

use std::collections::HashMap;

/// Scores of one entity, keyed by item. Items are unique per entity.
pub type Ratings<I> = HashMap<I, f64>;

/// Entity → (item → score).
///
/// A plain map so callers can build it with any map API (or deserialize it
/// from a nested JSON object) and hand it straight to the similarity
/// functions.
pub type PreferenceTable<E, I> = HashMap<E, Ratings<I>>;

/// Record `entity`'s score for `item`, replacing any previous score.
///
/// Returns the replaced score, if any.
pub fn insert_rating<E, I>(
    table: &mut PreferenceTable<E, I>,
    entity: E,
    item: I,
    score: f64,
) -> Option<f64>
where
    E: Eq + core::hash::Hash,
    I: Eq + core::hash::Hash,
{
    table.entry(entity).or_default().insert(item, score)
}
