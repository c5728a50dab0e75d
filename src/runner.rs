//! Batch test-generation driver
//!
//! Scans each subject project for compiled class artifacts, filters them
//! against the requested class list, and invokes the external
//! test-generation tool a fixed number of times per matching artifact.
//! The driver is a pure batch launcher: blocking, sequential, no retries,
//! and no inspection of the launched process's outcome.

use crate::subjects::Subjects;
use anyhow::{Context, Result};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Repetitions per matching artifact.
pub const DEFAULT_REPETITIONS: usize = 20;

/// Output variables recorded by every invocation.
pub const OUTPUT_VARIABLES: &str = "configuration_id,TARGET_CLASS,criterion,Coverage,Total_Goals,\
     Covered_Goals,Size,Length,Total_Time,CoverageTimeline,FitnessTimeline,\
     Implicit_MethodExceptions";

/// A compiled class file matched against the requested class list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassArtifact {
    /// Fully-qualified class name derived from the path relative to the
    /// project root (`pkg/Foo.class` -> `pkg.Foo`)
    pub class_name: String,

    /// Absolute path of the `.class` file
    pub path: PathBuf,
}

/// Capability seam for launching the external tool once for one class.
///
/// The batch loop and artifact discovery are testable against a recording
/// implementation; the real one shells out to EvoSuite.
pub trait ArtifactRunner {
    fn run(&self, class_name: &str, project_cp: &Path) -> Result<()>;
}

/// Launches the EvoSuite jar as a blocking child process
#[derive(Debug, Clone)]
pub struct EvosuiteRunner {
    pub jar: PathBuf,
    pub configuration_id: String,
    pub timeline_interval: u64,
}

impl ArtifactRunner for EvosuiteRunner {
    fn run(&self, class_name: &str, project_cp: &Path) -> Result<()> {
        tracing::info!(class = class_name, "launching test generation");

        // Exit status is deliberately not inspected: a failed generation
        // run leaves a gap in the result table and the batch moves on.
        // Only a spawn failure (e.g. missing java) aborts the batch.
        let _status = Command::new("java")
            .arg("-jar")
            .arg(&self.jar)
            .arg("-class")
            .arg(class_name)
            .arg("-projectCP")
            .arg(project_cp)
            .arg(format!("-Dconfiguration_id={}", self.configuration_id))
            .arg(format!("-Dtimeline_interval={}", self.timeline_interval))
            .arg("-Doutput_variables")
            .arg(OUTPUT_VARIABLES)
            .status()
            .with_context(|| format!("Failed to launch test generation for {class_name}"))?;

        Ok(())
    }
}

/// Recursively collect the `.class` files under `root` whose derived
/// fully-qualified name is in `classes`, sorted by class name.
pub fn find_class_artifacts(root: &Path, classes: &HashSet<String>) -> Result<Vec<ClassArtifact>> {
    let mut artifacts = Vec::new();
    walk(root, root, classes, &mut artifacts)?;
    artifacts.sort_by(|a, b| a.class_name.cmp(&b.class_name));
    Ok(artifacts)
}

fn walk(
    root: &Path,
    dir: &Path,
    classes: &HashSet<String>,
    artifacts: &mut Vec<ClassArtifact>,
) -> Result<()> {
    let entries =
        fs::read_dir(dir).with_context(|| format!("Failed to scan {}", dir.display()))?;

    for entry in entries {
        let entry = entry.with_context(|| format!("Failed to scan {}", dir.display()))?;
        let path = entry.path();

        if path.is_dir() {
            walk(root, &path, classes, artifacts)?;
        } else if path.extension().is_some_and(|ext| ext == "class") {
            if let Some(class_name) = qualified_class_name(root, &path) {
                if classes.contains(&class_name) {
                    artifacts.push(ClassArtifact { class_name, path });
                }
            }
        }
    }

    Ok(())
}

/// Derive `pkg.sub.Name` from `<root>/pkg/sub/Name.class`.
fn qualified_class_name(root: &Path, class_file: &Path) -> Option<String> {
    let relative = class_file.strip_prefix(root).ok()?.with_extension("");
    let parts: Vec<&str> = relative
        .components()
        .map(|c| c.as_os_str().to_str())
        .collect::<Option<_>>()?;
    Some(parts.join("."))
}

/// Run the external tool `repetitions` times for every requested class
/// found in every subject project.
pub fn run_batch(
    subjects: &Subjects,
    runner: &dyn ArtifactRunner,
    repetitions: usize,
) -> Result<()> {
    for (project, subject) in &subjects.projects {
        let requested: HashSet<String> = subject.classes.iter().cloned().collect();
        let artifacts = find_class_artifacts(&subject.path, &requested)?;

        tracing::info!(
            project = %project,
            matched = artifacts.len(),
            requested = requested.len(),
            "starting batch"
        );

        for artifact in &artifacts {
            for repetition in 0..repetitions {
                tracing::debug!(
                    class = artifact.class_name.as_str(),
                    repetition,
                    "batch invocation"
                );
                runner.run(&artifact.class_name, &subject.path)?;
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::subjects::Subject;
    use std::cell::RefCell;
    use std::collections::BTreeMap;
    use tempfile::TempDir;

    /// Records invocations instead of launching processes
    #[derive(Default)]
    struct RecordingRunner {
        invocations: RefCell<Vec<String>>,
    }

    impl ArtifactRunner for RecordingRunner {
        fn run(&self, class_name: &str, _project_cp: &Path) -> Result<()> {
            self.invocations.borrow_mut().push(class_name.to_string());
            Ok(())
        }
    }

    fn project_with_classes(files: &[&str]) -> TempDir {
        let dir = TempDir::new().unwrap();
        for file in files {
            let path = dir.path().join(file);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(&path, b"\xca\xfe\xba\xbe").unwrap();
        }
        dir
    }

    fn requested(names: &[&str]) -> HashSet<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_discover_matching_artifact() {
        let dir = project_with_classes(&["pkg/Foo.class", "pkg/Bar.class"]);
        let found = find_class_artifacts(dir.path(), &requested(&["pkg.Foo"])).unwrap();

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].class_name, "pkg.Foo");
        assert_eq!(found[0].path, dir.path().join("pkg/Foo.class"));
    }

    #[test]
    fn test_discover_nested_packages() {
        let dir = project_with_classes(&["org/example/deep/Baz.class"]);
        let found =
            find_class_artifacts(dir.path(), &requested(&["org.example.deep.Baz"])).unwrap();
        assert_eq!(found[0].class_name, "org.example.deep.Baz");
    }

    #[test]
    fn test_discover_ignores_non_class_files() {
        let dir = project_with_classes(&["pkg/Foo.class", "pkg/Foo.java", "pkg/notes.txt"]);
        let found = find_class_artifacts(dir.path(), &requested(&["pkg.Foo"])).unwrap();
        assert_eq!(found.len(), 1);
    }

    #[test]
    fn test_discover_unrequested_class_excluded() {
        let dir = project_with_classes(&["pkg/Foo.class"]);
        let found = find_class_artifacts(dir.path(), &requested(&["pkg.Other"])).unwrap();
        assert!(found.is_empty());
    }

    #[test]
    fn test_discover_missing_root_is_error() {
        let result = find_class_artifacts(Path::new("/nonexistent/classes"), &requested(&[]));
        assert!(result.is_err());
    }

    #[test]
    fn test_batch_runs_fixed_repetitions_per_match() {
        let dir = project_with_classes(&["pkg/Foo.class", "pkg/Bar.class"]);

        let mut projects = BTreeMap::new();
        projects.insert(
            "demo".to_string(),
            Subject {
                path: dir.path().to_path_buf(),
                classes: vec!["pkg.Foo".to_string()],
            },
        );
        let subjects = Subjects { projects };

        let runner = RecordingRunner::default();
        run_batch(&subjects, &runner, DEFAULT_REPETITIONS).unwrap();

        let invocations = runner.invocations.borrow();
        assert_eq!(invocations.len(), 20);
        assert!(invocations.iter().all(|c| c == "pkg.Foo"));
    }

    #[test]
    fn test_batch_covers_all_projects() {
        let first = project_with_classes(&["a/A.class"]);
        let second = project_with_classes(&["b/B.class"]);

        let mut projects = BTreeMap::new();
        projects.insert(
            "first".to_string(),
            Subject {
                path: first.path().to_path_buf(),
                classes: vec!["a.A".to_string()],
            },
        );
        projects.insert(
            "second".to_string(),
            Subject {
                path: second.path().to_path_buf(),
                classes: vec!["b.B".to_string()],
            },
        );
        let subjects = Subjects { projects };

        let runner = RecordingRunner::default();
        run_batch(&subjects, &runner, 2).unwrap();

        let invocations = runner.invocations.borrow();
        assert_eq!(*invocations, ["a.A", "a.A", "b.B", "b.B"]);
    }

    #[test]
    fn test_runner_error_aborts_batch() {
        struct FailingRunner;
        impl ArtifactRunner for FailingRunner {
            fn run(&self, _class_name: &str, _project_cp: &Path) -> Result<()> {
                anyhow::bail!("spawn failed")
            }
        }

        let dir = project_with_classes(&["pkg/Foo.class"]);
        let mut projects = BTreeMap::new();
        projects.insert(
            "demo".to_string(),
            Subject {
                path: dir.path().to_path_buf(),
                classes: vec!["pkg.Foo".to_string()],
            },
        );
        let subjects = Subjects { projects };

        assert!(run_batch(&subjects, &FailingRunner, 20).is_err());
    }
}
