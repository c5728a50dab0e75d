//! Coverage comparison pipeline
//!
//! Compares per-class branch coverage between two tool configurations.
//! Sample sizes are equalized by fixed-seed bootstrap resampling before the
//! effect size and significance are computed; descriptive statistics are
//! taken over the original, non-resampled vectors and scaled to percent.

use crate::report::{cell, format_float, format_p_value, round3, CsvTable};
use crate::samples::{class_union, SampleTable};
use crate::stats::{
    downsample_with_replacement, mann_whitney_u, mean, population_std, vargha_delaney_a12,
    RESAMPLE_SEED,
};
use anyhow::Result;
use std::path::Path;

/// Column name of the measurement in the input tables.
pub const VALUE_COLUMN: &str = "Coverage";

/// Report header for `Data.csv`.
pub const REPORT_HEADER: [&str; 7] = [
    "Class",
    "Â12",
    "p-value",
    "Dynamosa",
    "RL-Dynamosa",
    "Dynamosa Std",
    "RL-Dynamosa Std",
];

/// Per-class coverage comparison; all statistics are `None` when either
/// configuration has no runs for the class.
#[derive(Debug, Clone)]
pub struct CoverageRow {
    pub class: String,
    pub a12: Option<f64>,
    pub p_value: Option<f64>,
    pub baseline_mean_pct: Option<f64>,
    pub treatment_mean_pct: Option<f64>,
    pub baseline_std_pct: Option<f64>,
    pub treatment_std_pct: Option<f64>,
}

impl CoverageRow {
    fn missing(class: &str) -> Self {
        Self {
            class: class.to_string(),
            a12: None,
            p_value: None,
            baseline_mean_pct: None,
            treatment_mean_pct: None,
            baseline_std_pct: None,
            treatment_std_pct: None,
        }
    }
}

/// Compare coverage per class across the union of both tables.
///
/// Row order follows set-union iteration and is implementation-defined.
pub fn analyze(baseline: &SampleTable, treatment: &SampleTable) -> Vec<CoverageRow> {
    let mut rows = Vec::new();

    for class in class_union(baseline, treatment) {
        let x = baseline.get(class);
        let y = treatment.get(class);

        if x.is_empty() || y.is_empty() {
            tracing::debug!(class, "skipping class with a missing sample group");
            rows.push(CoverageRow::missing(class));
            continue;
        }

        // Equalize sizes with a fixed-seed bootstrap before the rank tests
        let n_samples = x.len().min(y.len());
        let x_resampled = downsample_with_replacement(x, n_samples, RESAMPLE_SEED);
        let y_resampled = downsample_with_replacement(y, n_samples, RESAMPLE_SEED);

        let a12 = vargha_delaney_a12(&x_resampled, &y_resampled);
        let test = mann_whitney_u(&x_resampled, &y_resampled);

        // Descriptive columns use the original vectors, as percentages
        rows.push(CoverageRow {
            class: class.to_string(),
            a12: Some(a12),
            p_value: Some(test.pvalue),
            baseline_mean_pct: Some(mean(x) * 100.0),
            treatment_mean_pct: Some(mean(y) * 100.0),
            baseline_std_pct: Some(population_std(x) * 100.0),
            treatment_std_pct: Some(population_std(y) * 100.0),
        });
    }

    rows
}

/// Format comparison rows into the `Data.csv` table.
pub fn build_report(rows: &[CoverageRow]) -> CsvTable {
    let mut table = CsvTable::new(REPORT_HEADER);

    for row in rows {
        table.add_row(vec![
            row.class.clone(),
            cell(row.a12.map(|a| format_float(round3(a)))),
            cell(row.p_value.map(format_p_value)),
            cell(row.baseline_mean_pct.map(|m| format!("{m:.3}%"))),
            cell(row.treatment_mean_pct.map(|m| format!("{m:.3}%"))),
            cell(row.baseline_std_pct.map(|s| format!("{s:.3}"))),
            cell(row.treatment_std_pct.map(|s| format!("{s:.3}"))),
        ]);
    }

    table
}

/// Run the whole pipeline: load both tables, analyze, write the report.
pub fn run<P: AsRef<Path>>(baseline_path: P, treatment_path: P, output_path: P) -> Result<()> {
    let baseline = SampleTable::from_csv(&baseline_path, VALUE_COLUMN)?;
    let treatment = SampleTable::from_csv(&treatment_path, VALUE_COLUMN)?;

    let rows = analyze(&baseline, &treatment);
    tracing::info!(classes = rows.len(), "coverage comparison complete");

    build_report(&rows).write_to(&output_path)?;
    Ok(())
}
