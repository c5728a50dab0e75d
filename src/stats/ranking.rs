// Tie-aware fractional ranking (the "average rank" method)
//
// Both the Vargha-Delaney A12 effect size and the Mann-Whitney U test are
// rank-sum statistics over the concatenation of two sample vectors, so they
// share this one ranking pass. O(n log n) via argsort.

/// Assign 1-based fractional ranks to `values`.
///
/// Tied values all receive the average of the ranks they would occupy,
/// matching the standard "average" method used by statistical packages:
///
/// ```
/// use cotejar::stats::average_ranks;
///
/// let ranks = average_ranks(&[1.0, 3.0, 2.0, 3.0]);
/// assert_eq!(ranks, vec![1.0, 3.5, 2.0, 3.5]);
/// ```
pub fn average_ranks(values: &[f64]) -> Vec<f64> {
    let n = values.len();

    // Argsort; NaN never occurs in loaded tables, total_cmp keeps the sort total
    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by(|&a, &b| values[a].total_cmp(&values[b]));

    let mut ranks = vec![0.0; n];
    let mut i = 0;
    while i < n {
        // Find the run of ties starting at sorted position i
        let mut j = i + 1;
        while j < n && values[order[j]] == values[order[i]] {
            j += 1;
        }

        // Positions i..j hold ranks i+1..=j; every tie gets their average
        let avg = (i + 1 + j) as f64 / 2.0;
        for &idx in &order[i..j] {
            ranks[idx] = avg;
        }
        i = j;
    }

    ranks
}

/// Sum of (t^3 - t) over all tie groups, used by the Mann-Whitney
/// variance correction.
pub fn tie_correction_term(values: &[f64]) -> f64 {
    let mut sorted: Vec<f64> = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));

    let mut term = 0.0;
    let mut i = 0;
    while i < sorted.len() {
        let mut j = i + 1;
        while j < sorted.len() && sorted[j] == sorted[i] {
            j += 1;
        }
        let t = (j - i) as f64;
        term += t * t * t - t;
        i = j;
    }

    term
}

/// True if any value occurs more than once.
pub fn has_ties(values: &[f64]) -> bool {
    tie_correction_term(values) > 0.0
}
