//! Example project discovery.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::bootstrap::bootstrap_entry;
use crate::error::{Error, Result};

/// A discovered example project.
#[derive(Debug, Clone)]
pub struct Example {
    pub name: String,
    pub path: PathBuf,
    /// Executable bootstrap script, when the example carries one.
    pub bootstrap: Option<PathBuf>,
}

/// Enumerates the immediate subdirectories of `root` as example projects.
///
/// Non-directory entries are filtered out. Results are sorted by name so
/// processing order does not depend on filesystem enumeration order.
pub fn discover_examples(root: &Path) -> Result<Vec<Example>> {
    if !root.is_dir() {
        return Err(Error::InvalidPath(root.to_path_buf()));
    }

    let mut examples: Vec<Example> = WalkDir::new(root)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_dir())
        .map(|e| {
            let path = e.path().to_path_buf();
            Example {
                name: e.file_name().to_string_lossy().into_owned(),
                bootstrap: bootstrap_entry(&path),
                path,
            }
        })
        .collect();

    examples.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(examples)
}
