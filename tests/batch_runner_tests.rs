// Integration tests for the batch test-generation driver
//
// The external tool is replaced with a recording runner behind the
// ArtifactRunner seam; discovery and the batch loop run for real over a
// temp classpath tree.

use anyhow::Result;
use cotejar::runner::{find_class_artifacts, run_batch, ArtifactRunner, DEFAULT_REPETITIONS};
use cotejar::subjects::Subjects;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tempfile::TempDir;

#[derive(Default)]
struct RecordingRunner {
    invocations: Mutex<Vec<(String, PathBuf)>>,
}

impl ArtifactRunner for RecordingRunner {
    fn run(&self, class_name: &str, project_cp: &Path) -> Result<()> {
        self.invocations
            .lock()
            .unwrap()
            .push((class_name.to_string(), project_cp.to_path_buf()));
        Ok(())
    }
}

fn classpath_with(files: &[&str]) -> TempDir {
    let dir = TempDir::new().unwrap();
    for file in files {
        let path = dir.path().join(file);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, b"\xca\xfe\xba\xbe").unwrap();
    }
    dir
}

fn subjects_json(dir: &TempDir, classpath: &Path, classes: &[&str]) -> PathBuf {
    let class_list: Vec<String> = classes.iter().map(|c| format!("\"{c}\"")).collect();
    let json = format!(
        r#"{{"demo": {{"path": "{}", "classes": [{}]}}}}"#,
        classpath.display(),
        class_list.join(",")
    );
    let path = dir.path().join("subjects.json");
    fs::write(&path, json).unwrap();
    path
}

#[test]
fn test_matching_class_invoked_twenty_times_only() {
    let classpath = classpath_with(&["pkg/Foo.class", "pkg/Bar.class"]);
    let spec_dir = TempDir::new().unwrap();
    let spec = subjects_json(&spec_dir, classpath.path(), &["pkg.Foo"]);

    let subjects = Subjects::from_file(&spec).unwrap();
    let runner = RecordingRunner::default();
    run_batch(&subjects, &runner, DEFAULT_REPETITIONS).unwrap();

    let invocations = runner.invocations.lock().unwrap();
    assert_eq!(invocations.len(), 20);
    assert!(invocations.iter().all(|(class, _)| class == "pkg.Foo"));
    assert!(invocations.iter().all(|(_, cp)| cp == classpath.path()));
}

#[test]
fn test_no_matching_classes_runs_nothing() {
    let classpath = classpath_with(&["pkg/Bar.class"]);
    let spec_dir = TempDir::new().unwrap();
    let spec = subjects_json(&spec_dir, classpath.path(), &["pkg.Foo"]);

    let subjects = Subjects::from_file(&spec).unwrap();
    let runner = RecordingRunner::default();
    run_batch(&subjects, &runner, DEFAULT_REPETITIONS).unwrap();

    assert!(runner.invocations.lock().unwrap().is_empty());
}

#[test]
fn test_discovery_derives_names_from_nested_paths() {
    let classpath = classpath_with(&[
        "org/apache/commons/lang3/ArrayUtils.class",
        "org/apache/commons/lang3/StringUtils.class",
        "org/apache/commons/lang3/math/NumberUtils.class",
    ]);

    let requested: HashSet<String> = [
        "org.apache.commons.lang3.ArrayUtils",
        "org.apache.commons.lang3.math.NumberUtils",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect();

    let found = find_class_artifacts(classpath.path(), &requested).unwrap();
    let names: Vec<&str> = found.iter().map(|a| a.class_name.as_str()).collect();
    assert_eq!(
        names,
        [
            "org.apache.commons.lang3.ArrayUtils",
            "org.apache.commons.lang3.math.NumberUtils"
        ]
    );
}

#[test]
fn test_missing_classpath_aborts() {
    let spec_dir = TempDir::new().unwrap();
    let spec = subjects_json(&spec_dir, Path::new("/nonexistent/classes"), &["pkg.Foo"]);

    let subjects = Subjects::from_file(&spec).unwrap();
    let runner = RecordingRunner::default();
    assert!(run_batch(&subjects, &runner, DEFAULT_REPETITIONS).is_err());
}
