//! Per-project build and test invocation.

use std::fmt;
use std::path::Path;
use std::process::Command;

use tracing::info;

use crate::error::{Error, Result};

const DEFAULT_BUILD_COMMAND: &str = "cargo build --all-features";
const DEFAULT_TEST_COMMAND: &str = "cargo test --all-features";

/// Which half of a build-and-test run failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildStep {
    Build,
    Test,
}

impl fmt::Display for BuildStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildStep::Build => write!(f, "build"),
            BuildStep::Test => write!(f, "test"),
        }
    }
}

/// Runs the package manager's build and test commands inside a project
/// directory.
///
/// Commands run via `sh -c` with the child's working directory set to the
/// project; the orchestrator's own working directory is never touched, so
/// there is no restore step to get wrong. `RUST_BACKTRACE=1` is set for
/// both commands so external failures come back with diagnostics.
#[derive(Debug, Clone)]
pub struct ProjectBuilder {
    build_command: String,
    test_command: String,
}

impl Default for ProjectBuilder {
    fn default() -> Self {
        Self {
            build_command: DEFAULT_BUILD_COMMAND.to_string(),
            test_command: DEFAULT_TEST_COMMAND.to_string(),
        }
    }
}

impl ProjectBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the build and test commands. Tests substitute shell
    /// one-liners here so no real package manager runs.
    pub fn with_commands(
        mut self,
        build_command: impl Into<String>,
        test_command: impl Into<String>,
    ) -> Self {
        self.build_command = build_command.into();
        self.test_command = test_command.into();
        self
    }

    /// Builds then tests the project at `path`. Test never runs if the
    /// build fails; either failure aborts with the step and path.
    pub fn build_and_test(&self, path: &Path) -> Result<()> {
        if !path.is_dir() {
            return Err(Error::InvalidPath(path.to_path_buf()));
        }

        self.run_step(BuildStep::Build, &self.build_command, path)?;
        self.run_step(BuildStep::Test, &self.test_command, path)?;
        Ok(())
    }

    fn run_step(&self, step: BuildStep, command: &str, path: &Path) -> Result<()> {
        info!(%step, path = %path.display(), "running");
        let status = Command::new("sh")
            .arg("-c")
            .arg(command)
            .current_dir(path)
            .env("RUST_BACKTRACE", "1")
            .status()
            .map_err(|_| Error::Build {
                step,
                path: path.to_path_buf(),
            })?;

        if status.success() {
            Ok(())
        } else {
            Err(Error::Build {
                step,
                path: path.to_path_buf(),
            })
        }
    }
}
