//! Blog index assembly.
//!
//! Published posts become linked snippets on `<output>/blog/index.html`,
//! newest first. The sort is stable on the date alone, so equal-date posts
//! keep their collection (filename) order.

use crate::compiler::posts::Post;
use crate::compiler::template;
use crate::log;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Published posts in index order: date descending, stable on ties.
pub fn published_in_index_order(posts: &[Post]) -> Vec<&Post> {
    let mut published: Vec<&Post> = posts.iter().filter(|p| p.published).collect();
    published.sort_by(|a, b| b.date.cmp(&a.date));
    published
}

/// Fill the index template with the listing of published posts.
pub fn build_index(posts: &[Post], index_template: &str) -> String {
    let snippets: Vec<String> = published_in_index_order(posts)
        .into_iter()
        .map(render_snippet)
        .collect();

    template::fill(index_template, &[("posts", &snippets.join("\n"))])
}

/// Write the index page to `<output>/blog/index.html`.
pub fn write_index(posts: &[Post], index_template: &str, output: &Path) -> Result<()> {
    let html = build_index(posts, index_template);
    let path = output.join("blog").join("index.html");

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&path, html)
        .with_context(|| format!("Failed to write index {}", path.display()))?;

    log!("index"; "{} posts listed", posts.iter().filter(|p| p.published).count());
    Ok(())
}

/// One post's entry on the index listing.
fn render_snippet(post: &Post) -> String {
    format!(
        "<div class=\"post\">\n    <a href=\"{url}\"><h3>{title}</h3></a>\n    <div class=\"subtext\">{date}</div>\n</div>",
        url = post.url_path(),
        title = post.title,
        date = post.date.format_long(),
    )
}
