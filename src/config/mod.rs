//! Site configuration management for `sitemill.toml`.
//!
//! # Sections
//!
//! | Section     | Purpose                                      |
//! |-------------|----------------------------------------------|
//! | `[base]`    | Site metadata for the feed (title, url)      |
//! | `[build]`   | Paths, converter command, feed settings      |
//!
//! The config file is optional: a missing `sitemill.toml` yields defaults, so
//! the tool runs in a bare project. Overrides are layered in a fixed order:
//! config file, then the `BUILD_DIR` environment variable, then CLI flags.
//!
//! # Example
//!
//! ```toml
//! [base]
//! title = "My Blog"
//! description = "A personal blog"
//! url = "https://example.com"
//!
//! [build]
//! posts = "src/lib/blog/posts"
//! output = "dist"
//!
//! [build.converter]
//! command = ["pandoc", "--from=markdown", "--to=html"]
//!
//! [build.rss]
//! enable = true
//! ```

mod base;
mod build;
pub mod defaults;
mod error;

// Internal imports used in this module
use base::BaseConfig;
use build::BuildConfig;
use error::ConfigError;

use crate::cli::{Cli, Commands};
use anyhow::{Context, Result, bail};
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// Root Configuration
// ============================================================================

/// Root configuration structure representing sitemill.toml
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct SiteConfig {
    /// CLI arguments reference
    #[serde(skip)]
    pub cli: Option<&'static Cli>,

    /// Basic site information
    #[serde(default)]
    pub base: BaseConfig,

    /// Build settings
    #[serde(default)]
    pub build: BuildConfig,
}

impl SiteConfig {
    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: SiteConfig = toml::from_str(content).map_err(ConfigError::Toml)?;
        Ok(config)
    }

    /// Load configuration from file path
    pub fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        Self::from_str(&content)
    }

    /// Get the root directory path
    pub fn get_root(&self) -> &Path {
        self.build.root.as_deref().unwrap_or(Path::new("./"))
    }

    /// Set the root directory path
    pub fn set_root(&mut self, path: &Path) {
        self.build.root = Some(path.to_path_buf())
    }

    /// Get CLI arguments reference
    pub fn get_cli(&self) -> &'static Cli {
        self.cli.unwrap()
    }

    /// Apply the `BUILD_DIR` environment override to the output directory.
    ///
    /// Resolved once at startup; CLI `--output` still wins over it.
    pub fn update_with_env(&mut self, build_dir: Option<&str>) {
        if let Some(dir) = build_dir
            && !dir.is_empty()
        {
            self.build.output = PathBuf::from(dir);
        }
    }

    /// Update configuration with CLI arguments
    pub fn update_with_cli(&mut self, cli: &'static Cli) {
        self.cli = Some(cli);

        let root = cli
            .root
            .as_ref()
            .cloned()
            .unwrap_or_else(|| self.get_root().to_owned());

        self.set_root(&root);
        self.update_path_with_root(&root);

        match &cli.command {
            Commands::Build { build_args } => {
                Self::update_option(&mut self.build.rss.enable, build_args.rss.as_ref());
                if let Some(url) = &build_args.base_url {
                    self.base.url = Some(url.clone());
                }
            }
        }
    }

    /// Update config option if CLI value is provided
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    /// Update all paths relative to root directory and normalize to absolute paths
    fn update_path_with_root(&mut self, root: &Path) {
        let cli = self.get_cli();

        // Apply CLI overrides first
        Self::update_option(&mut self.build.posts, cli.posts.as_ref());
        Self::update_option(&mut self.build.assets, cli.assets.as_ref());
        Self::update_option(&mut self.build.templates, cli.templates.as_ref());
        Self::update_option(&mut self.build.output, cli.output.as_ref());

        // Normalize root to absolute path
        let root = Self::normalize_path(root);
        self.set_root(&root);

        // Normalize all directory paths
        self.build.posts = Self::normalize_path(&root.join(&self.build.posts));
        self.build.assets = Self::normalize_path(&root.join(&self.build.assets));
        self.build.templates = Self::normalize_path(&root.join(&self.build.templates));
        self.build.output = Self::normalize_path(&root.join(&self.build.output));
    }

    /// Normalize a path to absolute, using canonicalize if the path exists
    fn normalize_path(path: &Path) -> PathBuf {
        path.canonicalize().unwrap_or_else(|_| {
            // For non-existent paths, manually make them absolute
            if path.is_absolute() {
                path.to_path_buf()
            } else {
                std::env::current_dir()
                    .map(|cwd| cwd.join(path))
                    .unwrap_or_else(|_| path.to_path_buf())
            }
        })
    }

    /// Validate configuration before building
    pub fn validate(&self) -> Result<()> {
        Self::check_command_installed(
            "[build.converter.command]",
            &self.build.converter.command,
        )?;

        if self.build.rss.enable && self.base.url.is_none() {
            bail!("[base.url] is required for feed generation");
        }

        if let Some(base_url) = &self.base.url
            && !base_url.starts_with("http")
        {
            bail!(ConfigError::Validation(
                "[base.url] must start with http:// or https://".into()
            ));
        }

        Ok(())
    }

    /// Check if a command is installed and available
    fn check_command_installed(field: &str, command: &[String]) -> Result<()> {
        if command.is_empty() {
            bail!(ConfigError::Validation(format!(
                "{field} must have at least one element"
            )));
        }

        let cmd = &command[0];
        which::which(cmd)
            .with_context(|| format!("`{cmd}` not found. Please install it first."))?;

        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
