//! CLI for inspecting Progressive Web App manifests.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use pwadir_core::config::PwadirConfig;
use std::path::PathBuf;

use commands::{run_clean_url, run_encode_start_url, run_inspect};

/// Top-level CLI for pwadir.
#[derive(Debug, Parser)]
#[command(name = "pwadir")]
#[command(about = "pwadir: inspect Progressive Web App manifests", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Show the fields derived from a manifest.
    Inspect {
        /// Absolute URL the manifest was served from (any fragment is ignored).
        manifest_url: String,
        /// Local copy of the manifest JSON. Without it only URL-derived fields are shown.
        #[arg(long, value_name = "PATH")]
        manifest_file: Option<PathBuf>,
        /// Page meta description used when the manifest has none.
        #[arg(long, value_name = "TEXT")]
        meta_description: Option<String>,
    },

    /// Remove tracking query parameters (utm_* by default) from a URL.
    CleanUrl {
        /// Absolute URL to clean.
        url: String,
    },

    /// Print the percent-encoded host and path of the manifest's start URL.
    EncodeStartUrl {
        /// Absolute URL the manifest was served from.
        manifest_url: String,
        /// Local copy of the manifest JSON.
        #[arg(long, value_name = "PATH")]
        manifest_file: Option<PathBuf>,
    },
}

impl CliCommand {
    pub fn run_from_args(cfg: &PwadirConfig) -> Result<()> {
        let cli = Cli::parse();
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Inspect {
                manifest_url,
                manifest_file,
                meta_description,
            } => run_inspect(
                cfg,
                &manifest_url,
                manifest_file.as_deref(),
                meta_description,
            )?,
            CliCommand::CleanUrl { url } => run_clean_url(cfg, &url)?,
            CliCommand::EncodeStartUrl {
                manifest_url,
                manifest_file,
            } => run_encode_start_url(&manifest_url, manifest_file.as_deref())?,
        }

        Ok(())
    }
}
