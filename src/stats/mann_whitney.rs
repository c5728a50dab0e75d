// Two-sided Mann-Whitney U test
//
// Non-parametric test for whether two independent samples come from the
// same distribution. Method selection follows the usual exact/asymptotic
// hybrid: the exact permutation distribution when both samples are small
// (<= 8) and tie-free, otherwise a normal approximation with continuity
// correction and tie-corrected variance.

use crate::stats::ranking::{average_ranks, has_ties, tie_correction_term};
use statrs::distribution::{ContinuousCDF, Normal};

/// Largest per-sample size for which the exact null distribution is used.
const EXACT_LIMIT: usize = 8;

/// Result of a two-sided Mann-Whitney U test
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UTest {
    /// U statistic for the first sample (U1)
    pub statistic: f64,

    /// Two-sided p-value in [0, 1]
    pub pvalue: f64,
}

/// Run a two-sided Mann-Whitney U test on two independent sample vectors.
///
/// Callers must guarantee both vectors are non-empty (same precondition as
/// [`vargha_delaney_a12`](crate::stats::vargha_delaney_a12)).
///
/// # Example
/// ```
/// use cotejar::stats::mann_whitney_u;
///
/// let baseline = [10.0, 12.0, 11.0, 13.0, 10.0];
/// let shifted = [25.0, 27.0, 26.0, 28.0, 25.0];
/// let test = mann_whitney_u(&baseline, &shifted);
/// assert!(test.pvalue < 0.05);
/// ```
pub fn mann_whitney_u(x: &[f64], y: &[f64]) -> UTest {
    debug_assert!(!x.is_empty() && !y.is_empty(), "empty sample vector");

    let m = x.len();
    let n = y.len();

    let mut combined = Vec::with_capacity(m + n);
    combined.extend_from_slice(x);
    combined.extend_from_slice(y);

    let ranks = average_ranks(&combined);
    let r1: f64 = ranks[..m].iter().sum();

    let u1 = r1 - (m * (m + 1)) as f64 / 2.0;
    let u2 = (m * n) as f64 - u1;
    let u_max = u1.max(u2);

    let tied = has_ties(&combined);
    let pvalue = if m <= EXACT_LIMIT && n <= EXACT_LIMIT && !tied {
        // Tie-free ranks are integers, so u_max is an exact count
        exact_two_sided(u_max as u64, m, n)
    } else {
        asymptotic_two_sided(u_max, m, n, tie_correction_term(&combined))
    };

    UTest {
        statistic: u1,
        pvalue,
    }
}

/// Exact two-sided p-value: 2 * P(U >= u) under the null, clipped to 1.
///
/// Under the null every m-subset of the combined ranks 1..=m+n is equally
/// likely, and U = ranksum - m(m+1)/2, so the distribution is a subset-sum
/// count built by 0/1 knapsack over the ranks. With m, n <= 8 the table is
/// at most 9 x 137 entries.
fn exact_two_sided(u: u64, m: usize, n: usize) -> f64 {
    let total_ranks = m + n;
    let max_sum = total_ranks * (total_ranks + 1) / 2;

    // counts[k][s] = number of k-subsets of the ranks with rank sum s
    let mut counts = vec![vec![0.0f64; max_sum + 1]; m + 1];
    counts[0][0] = 1.0;

    for rank in 1..=total_ranks {
        for k in (1..=m).rev() {
            for s in (rank..=max_sum).rev() {
                let ways = counts[k - 1][s - rank];
                counts[k][s] += ways;
            }
        }
    }

    let threshold = u as usize + m * (m + 1) / 2;
    let total: f64 = counts[m].iter().sum();
    let upper: f64 = counts[m][threshold..].iter().sum();

    (2.0 * upper / total).min(1.0)
}

/// Asymptotic two-sided p-value with continuity correction and
/// tie-corrected variance.
fn asymptotic_two_sided(u: f64, m: usize, n: usize, tie_term: f64) -> f64 {
    let mf = m as f64;
    let nf = n as f64;
    let total = mf + nf;

    let mean = mf * nf / 2.0;
    let variance = mf * nf / 12.0 * ((total + 1.0) - tie_term / (total * (total - 1.0)));

    if variance <= 0.0 {
        // Every observation identical; no evidence against the null
        return 1.0;
    }

    let z = (u - mean - 0.5) / variance.sqrt();
    let normal = Normal::standard();

    (2.0 * (1.0 - normal.cdf(z))).clamp(0.0, 1.0)
}
