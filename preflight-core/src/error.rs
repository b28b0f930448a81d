//! Error types and result aliases.

use std::path::PathBuf;

use thiserror::Error;

use crate::builder::BuildStep;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("not a project directory: {0}")]
    InvalidPath(PathBuf),

    #[error("config file not found: {0}")]
    ConfigNotFound(PathBuf),

    #[error("config parse error in {context}: {error}")]
    Config {
        error: toml::de::Error,
        context: String,
    },

    #[error("dependency refresh failed: {message}")]
    Refresh { message: String },

    #[error("{step} failed for {path}")]
    Build { step: BuildStep, path: PathBuf },

    #[error("no manifest found at {0}")]
    MissingManifest(PathBuf),

    #[error("manifest error in {path}: {message}")]
    Manifest { path: PathBuf, message: String },

    #[error("version mismatch in {path}: expected {expected}, found {actual}")]
    VersionMismatch {
        path: PathBuf,
        expected: String,
        actual: String,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
