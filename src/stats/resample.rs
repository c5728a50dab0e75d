// Fixed-seed bootstrap downsampling
//
// The coverage pipeline equalizes sample sizes before computing effect
// size and significance: each vector is independently resampled with
// replacement down to the smaller of the two sizes. The seed is fixed so
// repeated runs over the same tables produce the same report.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Seed used for every resampling pass.
pub const RESAMPLE_SEED: u64 = 42;

/// Draw `n_samples` values from `values` with replacement, using a fresh
/// RNG seeded with `seed`.
///
/// Each call starts from the seed, so resampling two vectors with the same
/// seed uses identical draw sequences over their own indices (matching the
/// per-call seeding of the original experiment scripts).
///
/// Callers must guarantee `values` is non-empty.
pub fn downsample_with_replacement(values: &[f64], n_samples: usize, seed: u64) -> Vec<f64> {
    debug_assert!(!values.is_empty(), "empty sample vector");

    let mut rng = StdRng::seed_from_u64(seed);
    (0..n_samples)
        .map(|_| values[rng.gen_range(0..values.len())])
        .collect()
}
