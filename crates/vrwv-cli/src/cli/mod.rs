//! CLI for the VRWV web-view tools.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;
use vrwv_core::config;

use commands::{run_check, run_completions, run_demo, run_normalize, run_rules, run_sync};

/// Top-level CLI for VRWV.
#[derive(Debug, Parser)]
#[command(name = "vrwv")]
#[command(about = "VRWV: URL admission and headless control for an embedded VR web surface", long_about = None)]
pub struct Cli {
    /// Read configuration from this file instead of ~/.config/vrwv/config.toml.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Normalize a URL and check it against the admission rules.
    Check {
        /// URL as typed by the user (scheme optional).
        url: String,
    },

    /// Print the normalized form of a URL without checking admission.
    Normalize {
        /// URL as typed by the user (scheme optional).
        url: String,
    },

    /// List admission rules and normalization steps in evaluation order.
    Rules,

    /// Walk the configured demo URLs through a headless web view.
    Demo,

    /// Submit URLs on a host view and show what a synced client view loads.
    Sync {
        /// URLs submitted on the host, in order.
        #[arg(required = true)]
        urls: Vec<String>,
    },

    /// Print shell completions to stdout.
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = match &cli.config {
            Some(path) => config::load_from(path)?,
            None => config::load_or_init()?,
        };
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Check { url } => run_check(&url)?,
            CliCommand::Normalize { url } => run_normalize(&url)?,
            CliCommand::Rules => run_rules(),
            CliCommand::Demo => run_demo(&cfg)?,
            CliCommand::Sync { urls } => run_sync(&cfg, &urls).await?,
            CliCommand::Completions { shell } => run_completions(shell),
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
