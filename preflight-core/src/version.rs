//! Declared-version extraction and consistency checking.

use std::fs;
use std::path::Path;

use toml::Value;

use crate::error::{Error, Result};

const MANIFEST_FILE: &str = "Cargo.toml";

/// Reads the version a project declares in its manifest.
pub fn manifest_version(path: &Path) -> Result<String> {
    let manifest_path = path.join(MANIFEST_FILE);
    if !manifest_path.is_file() {
        return Err(Error::MissingManifest(manifest_path));
    }

    let content = fs::read_to_string(&manifest_path)?;
    let toml: Value = content.parse().map_err(|e| Error::Manifest {
        path: manifest_path.clone(),
        message: format!("failed to parse: {}", e),
    })?;

    toml.get("package")
        .and_then(|p| p.get("version"))
        .and_then(|v| v.as_str())
        .map(|s| s.to_string())
        .ok_or_else(|| Error::Manifest {
            path: manifest_path,
            message: "no 'package.version' field".to_string(),
        })
}

/// Verifies every project in `paths` declares the same version.
///
/// The first path's version is the reference; checking is fail-fast, so
/// only the first mismatch in input order is reported. Returns the shared
/// version on success.
pub fn check_versions_match(paths: &[&Path]) -> Result<String> {
    let (first, rest) = paths.split_first().ok_or_else(|| Error::Manifest {
        path: Path::new(".").to_path_buf(),
        message: "no projects to check".to_string(),
    })?;

    let expected = manifest_version(first)?;
    for path in rest {
        let actual = manifest_version(path)?;
        if actual != expected {
            return Err(Error::VersionMismatch {
                path: path.to_path_buf(),
                expected,
                actual,
            });
        }
    }

    Ok(expected)
}
