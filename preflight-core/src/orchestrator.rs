//! Top-level run driver.

use tracing::{error, info, warn};

use crate::bootstrap::{BootstrapOutcome, Bootstrapper};
use crate::builder::ProjectBuilder;
use crate::config::WorkspaceLayout;
use crate::discover::discover_examples;
use crate::error::Result;
use crate::refresh::DependencyRefresher;
use crate::version::check_versions_match;

/// What a completed run did.
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    /// Shared version of the required components.
    pub version: String,
    pub required_built: usize,
    pub examples_built: Vec<String>,
    /// Examples skipped because their bootstrap failed.
    pub examples_skipped: Vec<String>,
    /// Examples whose build/test failed while `fatal_example_builds` is
    /// off. Always empty under the default policy.
    pub examples_failed: Vec<String>,
}

/// Drives one preflight run: refresh dependencies, build and test the
/// required components in fixed order, check version consistency, then
/// bootstrap and build every discovered example.
pub struct Orchestrator {
    layout: WorkspaceLayout,
    refresher: DependencyRefresher,
    builder: ProjectBuilder,
    bootstrapper: Bootstrapper,
}

impl Orchestrator {
    pub fn new(layout: WorkspaceLayout) -> Self {
        let refresher = DependencyRefresher::new(&layout.root);
        Self {
            layout,
            refresher,
            builder: ProjectBuilder::new(),
            bootstrapper: Bootstrapper::new(),
        }
    }

    pub fn with_refresher(mut self, refresher: DependencyRefresher) -> Self {
        self.refresher = refresher;
        self
    }

    pub fn with_builder(mut self, builder: ProjectBuilder) -> Self {
        self.builder = builder;
        self
    }

    pub fn layout(&self) -> &WorkspaceLayout {
        &self.layout
    }

    /// Runs the full pipeline. Any fatal step failure propagates
    /// immediately; only bootstrap failures (and, under a relaxed
    /// policy, example build failures) are tolerated.
    pub fn run(&self) -> Result<RunSummary> {
        let mut summary = RunSummary::default();

        self.refresher.refresh()?;

        for dir in self.layout.required() {
            self.builder.build_and_test(dir)?;
            summary.required_built += 1;
        }

        summary.version = check_versions_match(&self.layout.required())?;
        info!(version = %summary.version, "required component versions agree");

        for example in discover_examples(&self.layout.examples_root)? {
            match self.bootstrapper.maybe_bootstrap(&example) {
                BootstrapOutcome::Failed => {
                    warn!(example = %example.name, "skipping: bootstrap failed");
                    summary.examples_skipped.push(example.name);
                    continue;
                }
                BootstrapOutcome::NotNeeded | BootstrapOutcome::Succeeded => {}
            }

            match self.builder.build_and_test(&example.path) {
                Ok(()) => summary.examples_built.push(example.name),
                Err(e) if self.layout.fatal_example_builds => return Err(e),
                Err(e) => {
                    error!(example = %example.name, error = %e, "example build failed");
                    summary.examples_failed.push(example.name);
                }
            }
        }

        Ok(summary)
    }
}
