//! Keys accepted by the mapping-oriented similarity functions.

use uuid::Uuid;

use crate::id::EntityId;

/// An entity key in a preference table.
///
/// `is_absent` marks the key's null value, if the type has one. Similarity
/// functions reject absent keys with `SimilarityError::InvalidArgument`.
pub trait PreferenceKey: Eq + core::hash::Hash + core::fmt::Debug {
    fn is_absent(&self) -> bool {
        false
    }
}

impl PreferenceKey for EntityId {
    fn is_absent(&self) -> bool {
        self.is_nil()
    }
}

impl PreferenceKey for Uuid {
    fn is_absent(&self) -> bool {
        self.is_nil()
    }
}

impl<T: PreferenceKey + ?Sized> PreferenceKey for &T {
    fn is_absent(&self) -> bool {
        (**self).is_absent()
    }
}

macro_rules! impl_never_absent {
    ($($t:ty),* $(,)?) => {
        $(impl PreferenceKey for $t {})*
    };
}

impl_never_absent!(
    String, str, char, u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize,
);
