//! Command-line interface definitions.
//!
//! Defines all CLI arguments and subcommands using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Sitemill markdown blog builder CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Project root directory
    #[arg(short, long)]
    pub root: Option<PathBuf>,

    /// Output directory path (relative to project root)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Posts directory path (relative to project root)
    #[arg(short, long)]
    pub posts: Option<PathBuf>,

    /// Assets directory path (relative to project root)
    #[arg(short, long)]
    pub assets: Option<PathBuf>,

    /// Templates directory path (relative to project root)
    #[arg(short, long)]
    pub templates: Option<PathBuf>,

    /// Config file name (default: sitemill.toml)
    #[arg(short = 'C', long, default_value = "sitemill.toml")]
    pub config: PathBuf,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Build arguments for the Build command
#[derive(clap::Args, Debug, Clone)]
pub struct BuildArgs {
    /// enable rss feed generation
    #[arg(long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
    pub rss: Option<bool>,

    /// Override base URL for the site.
    ///
    /// Useful for CI/CD deployments where the production URL differs from
    /// local development. This avoids modifying sitemill.toml, keeping the
    /// source file clean.
    #[arg(long = "base-url")]
    pub base_url: Option<String>,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Deletes the output directory if there is one and rebuilds the site
    Build {
        #[command(flatten)]
        build_args: BuildArgs,
    },
}
