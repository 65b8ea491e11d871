//! Shared-item lookup.

use core::hash::Hash;

use prefsim_core::{PreferenceKey, SimilarityError, SimilarityResult};
use prefsim_preferences::{PreferenceTable, Ratings};

/// Items rated by both `a` and `b`, in `a`'s iteration order.
pub fn shared_items<'a, I>(a: &'a Ratings<I>, b: &Ratings<I>) -> Vec<&'a I>
where
    I: Eq + Hash,
{
    a.keys().filter(|item| b.contains_key(*item)).collect()
}

/// `(score_a, score_b)` for every shared item.
pub(crate) fn paired_scores<I>(a: &Ratings<I>, b: &Ratings<I>) -> Vec<(f64, f64)>
where
    I: Eq + Hash,
{
    a.iter()
        .filter_map(|(item, &sa)| b.get(item).map(|&sb| (sa, sb)))
        .collect()
}

/// Look up both entities' ratings.
///
/// `Ok(None)` when either entity is missing from `table`.
pub(crate) fn rating_pair<'t, E, I>(
    table: &'t PreferenceTable<E, I>,
    a: &E,
    b: &E,
) -> SimilarityResult<Option<(&'t Ratings<I>, &'t Ratings<I>)>>
where
    E: PreferenceKey,
    I: Eq + Hash,
{
    ensure_present(a, "first entity key")?;
    ensure_present(b, "second entity key")?;

    match (table.get(a), table.get(b)) {
        (Some(ra), Some(rb)) => Ok(Some((ra, rb))),
        (ra, rb) => {
            tracing::debug!(
                entity_a = ?a,
                entity_b = ?b,
                known_a = ra.is_some(),
                known_b = rb.is_some(),
                "entity not in preference table; similarity is 0"
            );
            Ok(None)
        }
    }
}

fn ensure_present<E: PreferenceKey>(key: &E, what: &str) -> SimilarityResult<()> {
    if key.is_absent() {
        return Err(SimilarityError::invalid_argument(format!(
            "{what} must not be the absent sentinel ({key:?})"
        )));
    }
    Ok(())
}
