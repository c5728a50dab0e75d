//! Batch job specification (`subjects.json`)
//!
//! Maps each project name to its compiled-artifact directory and the list
//! of fully-qualified target class names to run. Loaded once by the entry
//! point and passed by value; there is no process-wide state.

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// One project entry: artifact directory plus requested target classes
#[derive(Debug, Clone, Deserialize)]
pub struct Subject {
    /// Project classpath root, scanned recursively for `.class` files
    pub path: PathBuf,

    /// Fully-qualified class names to generate tests for
    pub classes: Vec<String>,
}

/// The full job specification: project name -> subject
#[derive(Debug, Clone, Deserialize)]
#[serde(transparent)]
pub struct Subjects {
    pub projects: BTreeMap<String, Subject>,
}

impl Subjects {
    /// Load and parse a job specification from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path_ref = path.as_ref();

        if !path_ref.exists() {
            bail!("Job specification not found: {}", path_ref.display());
        }

        let contents = fs::read_to_string(path_ref)
            .with_context(|| format!("Failed to read {}", path_ref.display()))?;

        let subjects: Subjects = serde_json::from_str(&contents)
            .with_context(|| format!("Invalid job specification JSON in {}", path_ref.display()))?;

        Ok(subjects)
    }
}
