mod commands;
mod formatting;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::Level;

#[derive(Parser)]
#[command(name = "preflight")]
#[command(about = "Workspace release preflight orchestrator")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to the preflight.toml describing the workspace.
    #[arg(long, default_value = "preflight.toml")]
    config: PathBuf,

    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[arg(short, long, action)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Refresh dependencies, build and test everything, check versions.
    Run,
    /// Show each required component's declared version.
    Versions,
    /// List discovered examples and whether they need bootstrapping.
    Examples,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.quiet {
        Level::ERROR
    } else {
        match cli.verbose {
            0 => Level::INFO,
            1 => Level::DEBUG,
            _ => Level::TRACE,
        }
    };

    tracing_subscriber::fmt().with_max_level(log_level).init();

    match cli.command {
        Commands::Run => commands::cmd_run(&cli.config)?,
        Commands::Versions => commands::cmd_versions(&cli.config)?,
        Commands::Examples => commands::cmd_examples(&cli.config)?,
    }

    Ok(())
}
