//! `[base]` section configuration.
//!
//! Contains basic site information used by the feed: title, author, url, etc.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};

/// `[base]` section in sitemill.toml - basic site metadata.
///
/// Only consulted when feed generation is enabled; the build itself works
/// from templates and posts alone.
///
/// # Example
/// ```toml
/// [base]
/// title = "My Blog"
/// description = "Notes on software"
/// author = "Alice"
/// url = "https://myblog.com"
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct BaseConfig {
    /// Site title for the feed channel.
    pub title: String,

    /// Site description for the feed channel.
    pub description: String,

    /// Author name for feed items.
    #[serde(default)]
    pub author: String,

    /// Author email for feed items.
    #[serde(default)]
    pub email: String,

    /// Base URL for absolute links in the feed.
    /// Required when `[build.rss].enable = true`.
    #[serde(default = "defaults::base::url")]
    #[educe(Default = defaults::base::url())]
    pub url: Option<String>,

    /// BCP 47 language code (e.g., "en", "en-US").
    #[serde(default = "defaults::base::language")]
    #[educe(Default = defaults::base::language())]
    pub language: String,
}
