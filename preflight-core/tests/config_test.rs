use std::fs;
use std::path::Path;

use preflight_core::{Config, Error};
use tempfile::TempDir;

const CONFIG: &str = r#"
[workspace]
library  = "lib"
codegen  = "codegen"
contrib  = "contrib"
examples = "examples"
"#;

fn write_config(dir: &Path, content: &str) -> std::path::PathBuf {
    let path = dir.join("preflight.toml");
    fs::write(&path, content).expect("Should write config");
    path
}

fn create_workspace_dirs(root: &Path) {
    for name in ["lib", "codegen", "contrib", "examples"] {
        fs::create_dir_all(root.join(name)).expect("Should create workspace dir");
    }
}

#[test]
fn test_load_and_resolve() {
    let temp = TempDir::new().expect("Should create temp directory");
    create_workspace_dirs(temp.path());
    let config_path = write_config(temp.path(), CONFIG);

    let config = Config::load(&config_path).expect("Should parse config");
    let layout = config.resolve(temp.path()).expect("Should resolve layout");

    assert_eq!(layout.library, temp.path().join("lib"));
    assert_eq!(layout.examples_root, temp.path().join("examples"));
    let required = layout.required();
    assert_eq!(required[0], temp.path().join("lib"));
    assert_eq!(required[1], temp.path().join("codegen"));
    assert_eq!(required[2], temp.path().join("contrib"));
}

#[test]
fn test_policy_defaults_to_fatal_example_builds() {
    let temp = TempDir::new().expect("Should create temp directory");
    create_workspace_dirs(temp.path());
    let config_path = write_config(temp.path(), CONFIG);

    let config = Config::load(&config_path).expect("Should parse config");
    assert!(config.policy.fatal_example_builds);

    let layout = config.resolve(temp.path()).expect("Should resolve layout");
    assert!(layout.fatal_example_builds);
}

#[test]
fn test_policy_override() {
    let temp = TempDir::new().expect("Should create temp directory");
    create_workspace_dirs(temp.path());
    let content = format!("{}\n[policy]\nfatal_example_builds = false\n", CONFIG);
    let config_path = write_config(temp.path(), &content);

    let config = Config::load(&config_path).expect("Should parse config");
    assert!(!config.policy.fatal_example_builds);
}

#[test]
fn test_missing_config_file() {
    let temp = TempDir::new().expect("Should create temp directory");
    let result = Config::load(temp.path().join("preflight.toml"));
    assert!(matches!(result, Err(Error::ConfigNotFound(_))));
}

#[test]
fn test_malformed_config() {
    let temp = TempDir::new().expect("Should create temp directory");
    let config_path = write_config(temp.path(), "[workspace\nlibrary = ");
    let result = Config::load(&config_path);
    assert!(matches!(result, Err(Error::Config { .. })));
}

#[test]
fn test_resolve_rejects_missing_required_dir() {
    let temp = TempDir::new().expect("Should create temp directory");
    create_workspace_dirs(temp.path());
    fs::remove_dir(temp.path().join("codegen")).expect("Should remove dir");
    let config_path = write_config(temp.path(), CONFIG);

    let config = Config::load(&config_path).expect("Should parse config");
    let result = config.resolve(temp.path());
    match result {
        Err(Error::InvalidPath(path)) => assert_eq!(path, temp.path().join("codegen")),
        other => panic!("Expected InvalidPath, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn test_resolve_rejects_missing_examples_root() {
    let temp = TempDir::new().expect("Should create temp directory");
    create_workspace_dirs(temp.path());
    fs::remove_dir(temp.path().join("examples")).expect("Should remove dir");
    let config_path = write_config(temp.path(), CONFIG);

    let config = Config::load(&config_path).expect("Should parse config");
    assert!(matches!(
        config.resolve(temp.path()),
        Err(Error::InvalidPath(_))
    ));
}
