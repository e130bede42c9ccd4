//! rss feed generation.
//!
//! Builds an rss channel from the published posts, in the same order as the
//! blog index. Opt-in via `[build.rss] enable = true` or `build --rss`.

use crate::compiler::index::published_in_index_order;
use crate::compiler::posts::Post;
use crate::config::SiteConfig;
use crate::log;
use anyhow::{Context, Result, anyhow};
use rss::{ChannelBuilder, GuidBuilder, ItemBuilder, validation::Validate};
use std::fs;

// ============================================================================
// Public API
// ============================================================================

/// Build the rss feed if enabled in config.
pub fn build_rss(config: &SiteConfig, posts: &[Post]) -> Result<()> {
    if !config.build.rss.enable {
        return Ok(());
    }

    let xml = feed_xml(config, posts)?;
    let rss_path = config.build.output.join(&config.build.rss.path);

    if let Some(parent) = rss_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&rss_path, &xml)
        .with_context(|| format!("Failed to write feed {}", rss_path.display()))?;

    log!("rss"; "{}", rss_path.file_name().unwrap_or_default().to_string_lossy());
    Ok(())
}

// ============================================================================
// Internal
// ============================================================================

/// Generate the validated rss xml string.
fn feed_xml(config: &SiteConfig, posts: &[Post]) -> Result<String> {
    let base_url = config
        .base
        .url
        .as_deref()
        .context("[base.url] is required for feed generation")?;
    let author = feed_author(config);

    let items: Vec<_> = published_in_index_order(posts)
        .into_iter()
        .map(|post| post_to_rss_item(post, base_url, author.as_deref()))
        .collect();

    let channel = ChannelBuilder::default()
        .title(&config.base.title)
        .link(base_url)
        .description(&config.base.description)
        .language(config.base.language.clone())
        .generator("sitemill".to_string())
        .items(items)
        .build();

    channel
        .validate()
        .map_err(|e| anyhow!("rss validation failed: {e}"))?;
    Ok(channel.to_string())
}

/// Convert a post to an rss item with a permalink guid.
fn post_to_rss_item(post: &Post, base_url: &str, author: Option<&str>) -> rss::Item {
    let link = format!("{}{}", base_url.trim_end_matches('/'), post.url_path());

    ItemBuilder::default()
        .title(post.title.clone())
        .link(Some(link.clone()))
        .guid(GuidBuilder::default().permalink(true).value(link).build())
        .pub_date(post.date.to_rfc2822())
        .author(author.map(String::from))
        .build()
}

/// Feed author in rss format: "email@example.com (Name)".
///
/// Only produced when both email and author name are configured.
fn feed_author(config: &SiteConfig) -> Option<String> {
    let email = config.base.email.trim();
    let name = config.base.author.trim();

    if email.is_empty() || name.is_empty() {
        return None;
    }
    Some(format!("{email} ({name})"))
}
