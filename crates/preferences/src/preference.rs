use serde::{Deserialize, Serialize};

use prefsim_core::{Entity, EntityId, ValueObject};

/// A single rating: `entity` scored `item` with `score`.
///
/// Scores are unconstrained reals; zero and negative values are valid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preference<I> {
    entity_id: EntityId,
    item: I,
    score: f64,
}

impl<I> Preference<I> {
    pub fn new(entity_id: EntityId, item: I, score: f64) -> Self {
        Self {
            entity_id,
            item,
            score,
        }
    }

    pub fn for_entity<E>(entity: &E, item: I, score: f64) -> Self
    where
        E: Entity<Id = EntityId>,
    {
        Self::new(*entity.id(), item, score)
    }

    pub fn entity_id(&self) -> EntityId {
        self.entity_id
    }

    pub fn item(&self) -> &I {
        &self.item
    }

    pub fn score(&self) -> f64 {
        self.score
    }
}

impl<I: Clone + PartialEq + core::fmt::Debug> ValueObject for Preference<I> {}
