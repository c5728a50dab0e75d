// Non-parametric statistics over experiment sample vectors
//
// The analysis pipelines compare two tool configurations per target class
// with an effect size (Vargha-Delaney A12) and a significance value
// (two-sided Mann-Whitney U). Both are rank-sum statistics and share one
// tie-aware ranking pass.

mod descriptive;
mod effect_size;
mod mann_whitney;
mod ranking;
mod resample;

pub use descriptive::{mean, population_std};
pub use effect_size::vargha_delaney_a12;
pub use mann_whitney::{mann_whitney_u, UTest};
pub use ranking::{average_ranks, has_ties, tie_correction_term};
pub use resample::{downsample_with_replacement, RESAMPLE_SEED};
