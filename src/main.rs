//! Sitemill - a Markdown blog builder.

mod build;
mod cli;
mod compiler;
mod config;
mod generator;
mod logger;
mod utils;

use anyhow::Result;
use build::build_site;
use clap::Parser;
use cli::{Cli, Commands};
use compiler::convert::CommandConverter;
use config::SiteConfig;
use std::path::Path;
use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(err) = run() {
        log!("error"; "{err:#}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn run() -> Result<()> {
    let cli: &'static Cli = Box::leak(Box::new(Cli::parse()));
    let config: &'static SiteConfig = Box::leak(Box::new(load_config(cli)?));

    match &cli.command {
        Commands::Build { .. } => {
            let converter = CommandConverter::new(&config.build.converter.command);
            build_site(config, &converter)
        }
    }
}

/// Load and validate configuration from CLI arguments.
///
/// A missing config file is not an error; the builder runs with defaults so
/// a bare project needs no sitemill.toml. Overrides apply in a fixed order:
/// config file, `BUILD_DIR` environment variable, CLI flags.
fn load_config(cli: &'static Cli) -> Result<SiteConfig> {
    let root = cli.root.as_deref().unwrap_or(Path::new("./"));
    let config_path = root.join(&cli.config);

    let mut config = if config_path.exists() {
        SiteConfig::from_path(&config_path)?
    } else {
        SiteConfig::default()
    };

    config.update_with_env(std::env::var("BUILD_DIR").ok().as_deref());
    config.update_with_cli(cli);
    config.validate()?;

    Ok(config)
}
