#![cfg(unix)]

use std::fs;
use std::path::{Path, PathBuf};

use preflight_core::{bootstrap_entry, BootstrapOutcome, Bootstrapper, Example};
use tempfile::TempDir;

fn make_executable(path: &Path) {
    use std::os::unix::fs::PermissionsExt;
    let mut perms = fs::metadata(path)
        .expect("Should stat file")
        .permissions();
    perms.set_mode(0o755);
    fs::set_permissions(path, perms).expect("Should set permissions");
}

fn create_example(root: &Path, name: &str, script: Option<&str>) -> Example {
    let path = root.join(name);
    fs::create_dir_all(&path).expect("Should create example dir");
    if let Some(body) = script {
        let entry = path.join("bootstrap.sh");
        fs::write(&entry, body).expect("Should write script");
        make_executable(&entry);
    }
    Example {
        name: name.to_string(),
        bootstrap: bootstrap_entry(&path),
        path,
    }
}

#[test]
fn test_not_needed_without_entry_point() {
    let temp = TempDir::new().expect("Should create temp directory");
    let example = create_example(temp.path(), "plain", None);
    let outcome = Bootstrapper::new().maybe_bootstrap(&example);
    assert_eq!(outcome, BootstrapOutcome::NotNeeded);
}

#[test]
fn test_successful_bootstrap() {
    let temp = TempDir::new().expect("Should create temp directory");
    let example = create_example(temp.path(), "db", Some("#!/bin/sh\nexit 0\n"));
    let outcome = Bootstrapper::new().maybe_bootstrap(&example);
    assert_eq!(outcome, BootstrapOutcome::Succeeded);
}

#[test]
fn test_failing_bootstrap_is_an_outcome_not_an_error() {
    let temp = TempDir::new().expect("Should create temp directory");
    let example = create_example(temp.path(), "db", Some("#!/bin/sh\nexit 7\n"));
    let outcome = Bootstrapper::new().maybe_bootstrap(&example);
    assert_eq!(outcome, BootstrapOutcome::Failed);
}

#[test]
fn test_script_runs_inside_example_dir() {
    let temp = TempDir::new().expect("Should create temp directory");
    let example = create_example(
        temp.path(),
        "db",
        Some("#!/bin/sh\ntouch prepared\nexit 0\n"),
    );
    let outcome = Bootstrapper::new().maybe_bootstrap(&example);
    assert_eq!(outcome, BootstrapOutcome::Succeeded);
    assert!(
        example.path.join("prepared").exists(),
        "Script should run with the example as its working directory"
    );
}

#[test]
fn test_unspawnable_entry_is_failed() {
    let temp = TempDir::new().expect("Should create temp directory");
    let path = temp.path().join("ghost");
    fs::create_dir_all(&path).expect("Should create example dir");
    let example = Example {
        name: "ghost".to_string(),
        bootstrap: Some(PathBuf::from("/no/such/bootstrap.sh")),
        path,
    };
    let outcome = Bootstrapper::new().maybe_bootstrap(&example);
    assert_eq!(outcome, BootstrapOutcome::Failed);
}
