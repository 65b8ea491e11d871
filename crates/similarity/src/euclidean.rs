//! Euclidean-distance similarity.

use core::hash::Hash;

use prefsim_core::{PreferenceKey, SimilarityResult};
use prefsim_preferences::{PreferenceTable, Ratings};

use crate::metric::{Euclidean, SimilarityMetric};
use crate::overlap::paired_scores;

/// Euclidean similarity of `a` and `b` in a preference table.
///
/// Returns `1 / (1 + sqrt(sum of squared score differences))` over the items
/// both entities rated, `0.0` if they share none or either is not in the
/// table. Fails with `InvalidArgument` if either key is the absent sentinel.
pub fn euclidean_similarity<E, I>(
    table: &PreferenceTable<E, I>,
    a: &E,
    b: &E,
) -> SimilarityResult<f64>
where
    E: PreferenceKey,
    I: Eq + Hash,
{
    Euclidean.score(table, a, b)
}

/// Euclidean similarity of two rating maps.
pub fn euclidean_from_ratings<I>(a: &Ratings<I>, b: &Ratings<I>) -> f64
where
    I: Eq + Hash,
{
    let pairs = paired_scores(a, b);
    if pairs.is_empty() {
        tracing::debug!("no shared items; euclidean similarity is 0");
        return 0.0;
    }

    let sum_of_squares: f64 = pairs
        .iter()
        .map(|(x, y)| {
            let d = x - y;
            d * d
        })
        .sum();

    1.0 / (1.0 + sum_of_squares.sqrt())
}
