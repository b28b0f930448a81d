//! Workspace-wide dependency refresh.

use std::path::PathBuf;
use std::process::Command;

use tracing::info;

use crate::error::{Error, Result};

const DEFAULT_REFRESH_COMMAND: &str = "cargo update";

/// Updates the workspace's shared dependency state once, before any build.
///
/// A workspace with unresolved dependencies cannot safely proceed to any
/// build, so failure here is fatal to the whole run.
#[derive(Debug, Clone)]
pub struct DependencyRefresher {
    workspace_root: PathBuf,
    command: String,
}

impl DependencyRefresher {
    pub fn new(workspace_root: impl Into<PathBuf>) -> Self {
        Self {
            workspace_root: workspace_root.into(),
            command: DEFAULT_REFRESH_COMMAND.to_string(),
        }
    }

    pub fn with_command(mut self, command: impl Into<String>) -> Self {
        self.command = command.into();
        self
    }

    pub fn refresh(&self) -> Result<()> {
        info!(root = %self.workspace_root.display(), "refreshing dependencies");
        let status = Command::new("sh")
            .arg("-c")
            .arg(&self.command)
            .current_dir(&self.workspace_root)
            .status()
            .map_err(|e| Error::Refresh {
                message: format!("failed to invoke '{}': {}", self.command, e),
            })?;

        if status.success() {
            Ok(())
        } else {
            Err(Error::Refresh {
                message: format!("'{}' exited with {}", self.command, status),
            })
        }
    }
}
