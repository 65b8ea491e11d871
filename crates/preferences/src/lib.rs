//! Preference data (entity-oriented store and mapping-oriented table).
//!
//! Two independent representations of the same ratings: a flat, ordered
//! collection of [`Preference`] values and a nested entity → item → score
//! mapping. [`PreferenceStore::to_table`] bridges the first into the second.

pub mod preference;
pub mod store;
pub mod table;

pub use preference::Preference;
pub use store::PreferenceStore;
pub use table::{PreferenceTable, Ratings, insert_rating};
