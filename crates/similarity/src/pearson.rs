//! Pearson correlation similarity.

use core::hash::Hash;

use prefsim_core::{PreferenceKey, SimilarityResult};
use prefsim_preferences::{PreferenceTable, Ratings};

use crate::metric::{Pearson, SimilarityMetric};
use crate::overlap::paired_scores;

/// Pearson correlation of `a` and `b` in a preference table.
///
/// Restricted to the items both entities rated, so it corrects for entities
/// that rate on different absolute scales. Returns `0.0` if they share no
/// items, either is not in the table, or either side's shared scores have
/// zero variance. Fails with `InvalidArgument` if either key is the absent
/// sentinel.
pub fn pearson_correlation<E, I>(
    table: &PreferenceTable<E, I>,
    a: &E,
    b: &E,
) -> SimilarityResult<f64>
where
    E: PreferenceKey,
    I: Eq + Hash,
{
    Pearson.score(table, a, b)
}

/// Pearson correlation of two rating maps.
pub fn pearson_from_ratings<I>(a: &Ratings<I>, b: &Ratings<I>) -> f64
where
    I: Eq + Hash,
{
    let pairs = paired_scores(a, b);
    if pairs.is_empty() {
        tracing::debug!("no shared items; pearson correlation is 0");
        return 0.0;
    }

    let n = pairs.len() as f64;
    let (sum1, sum2, sum_sq1, sum_sq2, sum_products) = pairs.iter().fold(
        (0.0, 0.0, 0.0, 0.0, 0.0),
        |(s1, s2, q1, q2, p), &(x, y)| (s1 + x, s2 + y, q1 + x * x, q2 + y * y, p + x * y),
    );

    let var1 = sum_sq1 - sum1 * sum1 / n;
    let var2 = sum_sq2 - sum2 * sum2 / n;
    if is_degenerate(var1, sum_sq1, n) || is_degenerate(var2, sum_sq2, n) {
        tracing::debug!(
            shared = pairs.len(),
            var1,
            var2,
            "zero variance in shared scores; pearson correlation is 0"
        );
        return 0.0;
    }

    let numerator = sum_products - (sum1 * sum2) / n;
    let denominator = (var1 * var2).sqrt();
    if !(denominator > 0.0 && denominator.is_finite()) {
        return 0.0;
    }

    // Cancellation can push a perfect correlation a few ulps past 1.
    (numerator / denominator).clamp(-1.0, 1.0)
}

/// Whether `var` (sum of squares minus `sum^2 / n`) is zero up to the
/// cancellation error of computing it.
///
/// That error grows with `n * EPSILON * sum_sq`; anything within
/// `sqrt(n * EPSILON)` of `sum_sq` is treated as constant scores.
fn is_degenerate(var: f64, sum_sq: f64, n: f64) -> bool {
    let tolerance = sum_sq.abs() * (n * f64::EPSILON).sqrt();
    !(var.is_finite() && var > tolerance)
}
