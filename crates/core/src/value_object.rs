//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**: two preferences
/// naming the same entity, item and score are interchangeable. Contrast with
/// [`crate::Entity`], where two instances are the same only if their ids match.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
