//! `prefsim-core` — building blocks shared by the preference store and the
//! similarity engine.
//!
//! This crate contains **pure** primitives (no IO, no global state).

pub mod entity;
pub mod error;
pub mod id;
pub mod key;
pub mod value_object;

pub use entity::{Entity, Person};
pub use error::{SimilarityError, SimilarityResult};
pub use id::EntityId;
pub use key::PreferenceKey;
pub use value_object::ValueObject;
