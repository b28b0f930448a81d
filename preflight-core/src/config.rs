//! TOML configuration for workspace layout and run policy.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Error, Result};

/// Run configuration as defined in `preflight.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub workspace: WorkspacePaths,
    #[serde(default)]
    pub policy: Policy,
}

/// Required-component and examples-root paths, relative to the config file.
#[derive(Debug, Clone, Deserialize)]
pub struct WorkspacePaths {
    pub library: PathBuf,
    pub codegen: PathBuf,
    pub contrib: PathBuf,
    pub examples: PathBuf,
}

/// Failure-tolerance policy knobs.
#[derive(Debug, Clone, Deserialize)]
pub struct Policy {
    /// Whether an example's build/test failure aborts the whole run.
    /// Bootstrap failures always skip-and-continue regardless.
    #[serde(default = "default_fatal_example_builds")]
    pub fatal_example_builds: bool,
}

fn default_fatal_example_builds() -> bool {
    true
}

impl Default for Policy {
    fn default() -> Self {
        Self {
            fatal_example_builds: default_fatal_example_builds(),
        }
    }
}

impl Config {
    /// Loads and parses a `preflight.toml` file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(Error::ConfigNotFound(path.to_path_buf()));
        }
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|error| Error::Config {
            error,
            context: path.display().to_string(),
        })
    }

    /// Resolves configured paths against `base_dir` and validates that
    /// every required directory exists.
    pub fn resolve(&self, base_dir: impl AsRef<Path>) -> Result<WorkspaceLayout> {
        let base_dir = base_dir.as_ref();
        let layout = WorkspaceLayout {
            root: base_dir.to_path_buf(),
            library: join(base_dir, &self.workspace.library),
            codegen: join(base_dir, &self.workspace.codegen),
            contrib: join(base_dir, &self.workspace.contrib),
            examples_root: join(base_dir, &self.workspace.examples),
            fatal_example_builds: self.policy.fatal_example_builds,
        };

        for dir in layout.required() {
            if !dir.is_dir() {
                return Err(Error::InvalidPath(dir.to_path_buf()));
            }
        }
        if !layout.examples_root.is_dir() {
            return Err(Error::InvalidPath(layout.examples_root.clone()));
        }

        Ok(layout)
    }
}

fn join(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}

/// Validated, absolute workspace layout for one run.
#[derive(Debug, Clone)]
pub struct WorkspaceLayout {
    /// Workspace root; dependency refresh runs here.
    pub root: PathBuf,
    pub library: PathBuf,
    pub codegen: PathBuf,
    pub contrib: PathBuf,
    pub examples_root: PathBuf,
    pub fatal_example_builds: bool,
}

impl WorkspaceLayout {
    /// Required components in their fixed build order.
    pub fn required(&self) -> [&Path; 3] {
        [&self.library, &self.codegen, &self.contrib]
    }
}
