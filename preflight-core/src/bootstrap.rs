//! One-time bootstrap step for example projects.

use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::{info, warn};

use crate::discover::Example;

const BOOTSTRAP_FILE: &str = "bootstrap.sh";

/// What a bootstrap attempt produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootstrapOutcome {
    /// No bootstrap entry point; proceed straight to build.
    NotNeeded,
    Succeeded,
    /// Script exited nonzero (or could not be spawned). Non-fatal: the
    /// caller skips this example and continues with the rest.
    Failed,
}

/// Returns the example's executable bootstrap script, if it has one.
pub fn bootstrap_entry(dir: &Path) -> Option<PathBuf> {
    let entry = dir.join(BOOTSTRAP_FILE);
    if entry.is_file() && is_executable(&entry) {
        Some(entry)
    } else {
        None
    }
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    std::fs::metadata(path)
        .map(|m| m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(_path: &Path) -> bool {
    true
}

/// Runs bootstrap scripts for examples that carry one.
#[derive(Debug, Clone, Default)]
pub struct Bootstrapper;

impl Bootstrapper {
    pub fn new() -> Self {
        Self
    }

    /// Bootstraps `example` if it needs it. Failure is reported as an
    /// outcome, never an error — it must not abort the overall run.
    pub fn maybe_bootstrap(&self, example: &Example) -> BootstrapOutcome {
        let Some(ref entry) = example.bootstrap else {
            return BootstrapOutcome::NotNeeded;
        };

        info!(example = %example.name, "bootstrapping");
        let status = Command::new(entry).current_dir(&example.path).status();

        match status {
            Ok(status) if status.success() => BootstrapOutcome::Succeeded,
            Ok(status) => {
                warn!(example = %example.name, %status, "bootstrap failed");
                BootstrapOutcome::Failed
            }
            Err(e) => {
                warn!(example = %example.name, error = %e, "could not run bootstrap");
                BootstrapOutcome::Failed
            }
        }
    }
}
