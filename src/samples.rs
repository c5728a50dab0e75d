//! Experiment result tables keyed by target class
//!
//! Each tool configuration produces one CSV file with one row per
//! test-generation run. Rows are grouped by `TARGET_CLASS` into per-class
//! sample vectors for the analysis pipelines. Tables are loaded whole-file,
//! in memory.

use anyhow::{bail, Context, Result};
use std::collections::{HashMap, HashSet};
use std::path::Path;

/// Column holding the grouping key in every result table.
pub const CLASS_COLUMN: &str = "TARGET_CLASS";

/// Per-class sample vectors for one tool configuration
#[derive(Debug, Clone, Default)]
pub struct SampleTable {
    groups: HashMap<String, Vec<f64>>,
}

impl SampleTable {
    /// Load a result table from a CSV file, grouping the numeric
    /// `value_column` by `TARGET_CLASS`.
    pub fn from_csv<P: AsRef<Path>>(path: P, value_column: &str) -> Result<Self> {
        let path_ref = path.as_ref();

        let mut reader = csv::Reader::from_path(path_ref)
            .with_context(|| format!("Failed to open result table {}", path_ref.display()))?;

        let headers = reader
            .headers()
            .with_context(|| format!("Failed to read CSV headers in {}", path_ref.display()))?
            .clone();

        let class_idx = column_index(&headers, CLASS_COLUMN, path_ref)?;
        let value_idx = column_index(&headers, value_column, path_ref)?;

        let mut groups: HashMap<String, Vec<f64>> = HashMap::new();
        for (line, record) in reader.records().enumerate() {
            let record = record
                .with_context(|| format!("Malformed CSV record in {}", path_ref.display()))?;

            let class = record.get(class_idx).unwrap_or("").to_string();
            let raw = record.get(value_idx).unwrap_or("");
            let value: f64 = raw.parse().with_context(|| {
                format!(
                    "Invalid {} value {:?} at data row {} of {}",
                    value_column,
                    raw,
                    line + 1,
                    path_ref.display()
                )
            })?;

            groups.entry(class).or_default().push(value);
        }

        Ok(Self { groups })
    }

    /// Sample vector for a class; empty slice when the class is absent.
    pub fn get(&self, class: &str) -> &[f64] {
        self.groups.get(class).map_or(&[], Vec::as_slice)
    }

    /// Apply `f` to every stored measurement (unit conversion).
    pub fn map_values(&mut self, f: impl Fn(f64) -> f64) {
        for values in self.groups.values_mut() {
            for v in values.iter_mut() {
                *v = f(*v);
            }
        }
    }

    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.groups.keys().map(String::as_str)
    }
}

fn column_index(headers: &csv::StringRecord, name: &str, path: &Path) -> Result<usize> {
    match headers.iter().position(|h| h == name) {
        Some(idx) => Ok(idx),
        None => bail!("Missing column {:?} in {}", name, path.display()),
    }
}

/// Union of the class identifiers present in either table.
///
/// Backed by a set, so iteration order is implementation-defined; report
/// row order carries no guarantee.
pub fn class_union<'a>(a: &'a SampleTable, b: &'a SampleTable) -> HashSet<&'a str> {
    a.classes().chain(b.classes()).collect()
}
