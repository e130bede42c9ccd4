//! `[build]` section configuration.
//!
//! Source and output paths, the converter command and feed settings.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// `[build]` section in sitemill.toml - build pipeline configuration.
///
/// # Example
/// ```toml
/// [build]
/// posts = "src/lib/blog/posts"   # Markdown sources
/// output = "dist"                # Output directory
///
/// [build.converter]
/// command = ["pandoc", "--from=markdown", "--to=html"]
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(default, deny_unknown_fields)]
pub struct BuildConfig {
    /// Project root directory (usually set via CLI `--root`).
    #[serde(default = "defaults::build::root")]
    #[educe(Default = defaults::build::root())]
    pub root: Option<PathBuf>,

    /// Markdown post sources (scanned non-recursively for `*.md`).
    #[serde(default = "defaults::build::posts")]
    #[educe(Default = defaults::build::posts())]
    pub posts: PathBuf,

    /// Static assets directory, copied verbatim into the output root.
    #[serde(default = "defaults::build::assets")]
    #[educe(Default = defaults::build::assets())]
    pub assets: PathBuf,

    /// Directory holding `post-template.html` and `index-template.html`.
    #[serde(default = "defaults::build::templates")]
    #[educe(Default = defaults::build::templates())]
    pub templates: PathBuf,

    /// Build output directory. Deleted and recreated on every build.
    #[serde(default = "defaults::build::output")]
    #[educe(Default = defaults::build::output())]
    pub output: PathBuf,

    /// Markdown converter invocation.
    #[serde(default)]
    pub converter: ConverterConfig,

    /// Feed generation settings.
    #[serde(default)]
    pub rss: RssConfig,
}

// ============================================================================
// Sub-configurations
// ============================================================================

/// `[build.converter]` section - the external Markdown renderer.
///
/// The command receives Markdown on stdin and must print HTML on stdout.
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct ConverterConfig {
    /// Converter command and arguments.
    #[serde(default = "defaults::build::converter::command")]
    #[educe(Default = defaults::build::converter::command())]
    pub command: Vec<String>,
}

/// `[build.rss]` section - feed generation configuration.
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct RssConfig {
    /// Enable feed generation.
    #[serde(default = "defaults::r#false")]
    #[educe(Default = defaults::r#false())]
    pub enable: bool,

    /// Feed file path, relative to the output directory.
    #[serde(default = "defaults::build::rss::path")]
    #[educe(Default = defaults::build::rss::path())]
    pub path: PathBuf,
}
