//! Entity trait: identity that outlives any change of display data.

use serde::{Deserialize, Serialize};

use crate::id::EntityId;

/// Entity marker + minimal interface.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}

/// A named participant whose ratings are compared.
///
/// The identifier is assigned once at construction and is the only key used
/// for lookups; the name is display metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    id: EntityId,
    name: String,
}

impl Person {
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_id(EntityId::new(), name)
    }

    pub fn with_id(id: EntityId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Entity for Person {
    type Id = EntityId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
