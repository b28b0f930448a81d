//! Core library for workspace release preflight orchestration.

pub mod bootstrap;
pub mod builder;
pub mod config;
pub mod discover;
pub mod error;
pub mod orchestrator;
pub mod refresh;
pub mod version;

pub use bootstrap::{bootstrap_entry, BootstrapOutcome, Bootstrapper};
pub use builder::{BuildStep, ProjectBuilder};
pub use config::{Config, WorkspaceLayout};
pub use discover::{discover_examples, Example};
pub use error::{Error, Result};
pub use orchestrator::{Orchestrator, RunSummary};
pub use refresh::DependencyRefresher;
pub use version::{check_versions_match, manifest_version};
