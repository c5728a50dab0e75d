// Vargha-Delaney A12 effect size
//
// A12 is the probability that a random draw from X exceeds a random draw
// from Y, adjusted for ties: 0.5 means no stochastic dominance, values
// above 0.5 mean X tends to exceed Y.

use crate::stats::ranking::average_ranks;

/// Compute the Vargha-Delaney A12 effect size between two sample vectors.
///
/// Rank the concatenation of `x` and `y` (average ranks for ties), sum the
/// ranks belonging to `x` (R1), then A12 = (R1 - m(m+1)/2) / (m * n).
///
/// Callers must guarantee both vectors are non-empty; the pipelines filter
/// out empty class groups before reaching this function.
///
/// # Example
/// ```
/// use cotejar::stats::vargha_delaney_a12;
///
/// // Every x beats every y: full dominance
/// assert_eq!(vargha_delaney_a12(&[3.0, 4.0], &[1.0, 2.0]), 1.0);
/// // Identical samples: no effect
/// assert_eq!(vargha_delaney_a12(&[1.0, 2.0], &[1.0, 2.0]), 0.5);
/// ```
pub fn vargha_delaney_a12(x: &[f64], y: &[f64]) -> f64 {
    debug_assert!(!x.is_empty() && !y.is_empty(), "empty sample vector");

    let m = x.len();
    let n = y.len();

    let mut combined = Vec::with_capacity(m + n);
    combined.extend_from_slice(x);
    combined.extend_from_slice(y);

    let ranks = average_ranks(&combined);
    let r1: f64 = ranks[..m].iter().sum();

    (r1 - (m * (m + 1)) as f64 / 2.0) / (m * n) as f64
}
