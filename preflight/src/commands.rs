//! Command implementations for the CLI.

use std::path::Path;

use anyhow::{Context, Result};

use preflight_core::{discover_examples, manifest_version, Config, Orchestrator, WorkspaceLayout};

use crate::formatting::{
    print_error, print_info, print_section_header, print_success, print_warning,
};

fn load_layout(config_path: &Path) -> Result<WorkspaceLayout> {
    let config = Config::load(config_path)
        .with_context(|| format!("loading {}", config_path.display()))?;
    let base_dir = config_path.parent().unwrap_or_else(|| Path::new("."));
    config
        .resolve(base_dir)
        .context("resolving workspace layout")
}

pub fn cmd_run(config_path: &Path) -> Result<()> {
    let layout = load_layout(config_path)?;

    print_section_header("Preflight");
    let summary = Orchestrator::new(layout).run()?;

    print_success(&format!(
        "{} required components built and tested at version {}",
        summary.required_built, summary.version
    ));
    if summary.examples_built.is_empty() {
        print_info("no examples built");
    } else {
        print_success(&format!(
            "{} examples built: {}",
            summary.examples_built.len(),
            summary.examples_built.join(", ")
        ));
    }
    for name in &summary.examples_skipped {
        print_warning(&format!("{} skipped (bootstrap failed)", name));
    }
    for name in &summary.examples_failed {
        print_error(&format!("{} failed to build", name));
    }
    println!();

    Ok(())
}

pub fn cmd_versions(config_path: &Path) -> Result<()> {
    let layout = load_layout(config_path)?;

    print_section_header("Declared Versions");
    let mut versions = Vec::new();
    for dir in layout.required() {
        let version = manifest_version(dir)?;
        print_info(&format!("{}: {}", dir.display(), version));
        versions.push(version);
    }
    println!();

    if versions.windows(2).all(|w| w[0] == w[1]) {
        print_success("versions agree");
        println!();
        Ok(())
    } else {
        print_error("versions disagree");
        println!();
        anyhow::bail!("required components declare different versions")
    }
}

pub fn cmd_examples(config_path: &Path) -> Result<()> {
    let layout = load_layout(config_path)?;

    print_section_header("Examples");
    let examples = discover_examples(&layout.examples_root)?;
    if examples.is_empty() {
        print_info("no examples discovered");
    }
    for example in &examples {
        if example.bootstrap.is_some() {
            print_info(&format!("{} (needs bootstrap)", example.name));
        } else {
            print_info(&example.name);
        }
    }
    println!();

    Ok(())
}
