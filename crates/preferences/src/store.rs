//! Entity-oriented preference store.

use std::collections::{HashMap, HashSet};

use prefsim_core::{EntityId, SimilarityError, SimilarityResult};

use crate::preference::Preference;
use crate::table::{PreferenceTable, Ratings};

/// Ordered collection of [`Preference`] values.
///
/// Duplicate (entity, item) pairs are allowed by [`PreferenceStore::new`];
/// every lookup that reduces them to a single score keeps the first one in
/// insertion order. Use [`PreferenceStore::try_new_unique`] to reject them up
/// front instead.
#[derive(Debug, Clone, PartialEq)]
pub struct PreferenceStore<I> {
    preferences: Vec<Preference<I>>,
}

impl<I> PreferenceStore<I> {
    pub fn new(preferences: Vec<Preference<I>>) -> Self {
        Self { preferences }
    }

    pub fn len(&self) -> usize {
        self.preferences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.preferences.is_empty()
    }

    /// All preferences in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Preference<I>> {
        self.preferences.iter()
    }

    /// Preferences recorded for `id`, lazily and in insertion order.
    ///
    /// Unknown ids yield an empty iterator. The nil id is rejected.
    pub fn preferences_by_entity_id(
        &self,
        id: EntityId,
    ) -> SimilarityResult<impl Iterator<Item = &Preference<I>>> {
        if id.is_nil() {
            return Err(SimilarityError::invalid_argument(
                "entity id must not be nil",
            ));
        }
        Ok(self.preferences.iter().filter(move |p| p.entity_id() == id))
    }
}

impl<I> PreferenceStore<I>
where
    I: Eq + core::hash::Hash,
{
    /// Like [`PreferenceStore::new`], but fails on the first (entity, item)
    /// pair that appears twice.
    pub fn try_new_unique(preferences: Vec<Preference<I>>) -> SimilarityResult<Self>
    where
        I: core::fmt::Debug,
    {
        {
            let mut seen: HashSet<(EntityId, &I)> = HashSet::with_capacity(preferences.len());
            for p in &preferences {
                if !seen.insert((p.entity_id(), p.item())) {
                    return Err(SimilarityError::duplicate(format!(
                        "entity {} rated {:?} more than once",
                        p.entity_id(),
                        p.item()
                    )));
                }
            }
        }
        Ok(Self::new(preferences))
    }

    /// Item → score map for one entity; the first preference per item wins.
    pub fn ratings_for(&self, id: EntityId) -> SimilarityResult<Ratings<&I>> {
        let mut ratings: Ratings<&I> = HashMap::new();
        for p in self.preferences_by_entity_id(id)? {
            ratings.entry(p.item()).or_insert(p.score());
        }
        tracing::trace!(entity_id = %id, items = ratings.len(), "collected ratings");
        Ok(ratings)
    }

    /// Convert into the mapping-oriented representation (first match wins).
    ///
    /// Preferences with a nil entity id cannot be looked up and are skipped.
    pub fn to_table(&self) -> PreferenceTable<EntityId, I>
    where
        I: Clone,
    {
        let mut table: PreferenceTable<EntityId, I> = HashMap::new();
        for p in &self.preferences {
            if p.entity_id().is_nil() {
                continue;
            }
            table
                .entry(p.entity_id())
                .or_default()
                .entry(p.item().clone())
                .or_insert(p.score());
        }
        table
    }
}

impl<I> FromIterator<Preference<I>> for PreferenceStore<I> {
    fn from_iter<T: IntoIterator<Item = Preference<I>>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
