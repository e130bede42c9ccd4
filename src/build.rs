//! Site building orchestration.
//!
//! One sequential pipeline, all-or-nothing: any failure aborts the build
//! and the partially written output is superseded by the next full rebuild.
//!
//! ```text
//! build_site()
//!     │
//!     ├── ensure_output_dir() ──► delete + recreate <output>/
//!     ├── copy_assets()       ──► mirror the static tree
//!     ├── per post:           ──► load, convert, template, write page
//!     ├── write_index()       ──► published posts, newest first
//!     └── build_rss()         ──► optional feed
//! ```

use crate::compiler::convert::MarkdownConverter;
use crate::compiler::posts::Post;
use crate::compiler::template::Templates;
use crate::compiler::{assets, collect_post_sources, index};
use crate::config::SiteConfig;
use crate::generator::rss::build_rss;
use crate::log;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use std::time::Instant;

/// Build the entire site into the configured output directory.
pub fn build_site(config: &SiteConfig, converter: &dyn MarkdownConverter) -> Result<()> {
    let started = Instant::now();
    let output = &config.build.output;

    ensure_output_dir(output)?;
    assets::copy_assets(&config.build.assets, output)?;

    let templates = Templates::load(&config.build.templates)?;
    let sources = collect_post_sources(&config.build.posts)?;
    log!("build"; "rendering {} posts", sources.len());

    let mut posts = Vec::with_capacity(sources.len());
    for path in &sources {
        let post = Post::load(path)?;
        let page = post.render(converter, &templates.post)?;
        post.write_page(&page, output)?;
        posts.push(post);
    }

    index::write_index(&posts, &templates.index, output)?;
    build_rss(config, &posts)?;

    log!("build"; "done in {:.2}s", started.elapsed().as_secs_f32());
    Ok(())
}

/// Destructively reset the output directory.
///
/// Prior output never survives a rebuild; callers must not rely on it.
fn ensure_output_dir(output: &Path) -> Result<()> {
    if output.exists() {
        fs::remove_dir_all(output).with_context(|| {
            format!("Failed to clear output directory: {}", output.display())
        })?;
    }
    fs::create_dir_all(output)
        .with_context(|| format!("Failed to create output directory: {}", output.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    /// Deterministic converter stub; the build never spawns a real binary.
    struct StubConverter;

    impl MarkdownConverter for StubConverter {
        fn convert(&self, markdown: &str) -> Result<String> {
            Ok(format!("<article>{markdown}</article>"))
        }
    }

    /// A site fixture with assets, templates and a posts directory.
    struct Site {
        root: TempDir,
        config: SiteConfig,
    }

    impl Site {
        fn new() -> Self {
            let root = TempDir::new().unwrap();

            let assets = root.path().join("src/static");
            fs::create_dir_all(&assets).unwrap();
            fs::write(assets.join("style.css"), "body { margin: 0 }").unwrap();

            let templates = root.path().join("src/lib/blog");
            fs::create_dir_all(templates.join("posts")).unwrap();
            fs::write(
                templates.join("post-template.html"),
                "<h1>{title}</h1><time>{date}</time>{content}",
            )
            .unwrap();
            fs::write(
                templates.join("index-template.html"),
                "<main>{posts}</main>",
            )
            .unwrap();

            let mut config = SiteConfig::default();
            config.build.assets = assets;
            config.build.templates = templates.clone();
            config.build.posts = templates.join("posts");
            config.build.output = root.path().join("dist");

            Self { root, config }
        }

        fn add_post(&self, name: &str, title: &str, date: &str, published: bool) {
            let source = format!(
                "---\ntitle: \"{title}\"\ndate: {date}\npublished: {published}\n---\n\nBody of {title}.\n"
            );
            fs::write(self.config.build.posts.join(name), source).unwrap();
        }

        fn build(&self) -> Result<()> {
            build_site(&self.config, &StubConverter)
        }

        fn output(&self) -> PathBuf {
            self.config.build.output.clone()
        }
    }

    #[test]
    fn test_build_renders_post_pages() {
        let site = Site::new();
        site.add_post("hello.md", "Hello", "2024-03-05", true);

        site.build().unwrap();

        let page = fs::read_to_string(site.output().join("blog/hello/index.html")).unwrap();
        assert!(page.contains("<h1>Hello</h1>"));
        assert!(page.contains("March 5, 2024"));
        assert!(page.contains("<article>Body of Hello."));
    }

    #[test]
    fn test_build_copies_assets() {
        let site = Site::new();
        site.build().unwrap();

        let css = fs::read_to_string(site.output().join("style.css")).unwrap();
        assert_eq!(css, "body { margin: 0 }");
    }

    #[test]
    fn test_build_resets_output_dir() {
        let site = Site::new();
        let stale = site.output().join("stale.html");
        fs::create_dir_all(site.output()).unwrap();
        fs::write(&stale, "old").unwrap();

        site.build().unwrap();
        assert!(!stale.exists());
    }

    #[test]
    fn test_index_lists_published_only() {
        let site = Site::new();
        site.add_post("visible.md", "Visible", "2024-01-01", true);
        site.add_post("hidden.md", "Hidden", "2024-02-01", false);

        site.build().unwrap();

        let html = fs::read_to_string(site.output().join("blog/index.html")).unwrap();
        assert!(html.contains("/blog/visible/"));
        assert!(!html.contains("/blog/hidden/"));
    }

    #[test]
    fn test_unpublished_post_still_gets_page() {
        let site = Site::new();
        site.add_post("hidden.md", "Hidden", "2024-02-01", false);

        site.build().unwrap();

        assert!(site.output().join("blog/hidden/index.html").exists());
    }

    #[test]
    fn test_index_descending_date_order() {
        let site = Site::new();
        site.add_post("a-old.md", "Old", "2023-05-01", true);
        site.add_post("b-new.md", "New", "2024-03-05", true);

        site.build().unwrap();

        let html = fs::read_to_string(site.output().join("blog/index.html")).unwrap();
        assert!(html.find("/blog/b-new/").unwrap() < html.find("/blog/a-old/").unwrap());
    }

    #[test]
    fn test_empty_posts_dir_yields_empty_index() {
        let site = Site::new();
        site.build().unwrap();

        let html = fs::read_to_string(site.output().join("blog/index.html")).unwrap();
        assert_eq!(html, "<main></main>");
    }

    #[test]
    fn test_rebuild_is_idempotent() {
        let site = Site::new();
        site.add_post("hello.md", "Hello", "2024-03-05", true);

        site.build().unwrap();
        let first = fs::read_to_string(site.output().join("blog/index.html")).unwrap();
        let first_page = fs::read_to_string(site.output().join("blog/hello/index.html")).unwrap();

        site.build().unwrap();
        let second = fs::read_to_string(site.output().join("blog/index.html")).unwrap();
        let second_page = fs::read_to_string(site.output().join("blog/hello/index.html")).unwrap();

        assert_eq!(first, second);
        assert_eq!(first_page, second_page);
    }

    #[test]
    fn test_output_override_relocates_everything() {
        let mut site = Site::new();
        site.add_post("hello.md", "Hello", "2024-03-05", true);

        let default_output = site.output();
        site.config.build.output = site.root.path().join("elsewhere");

        site.build().unwrap();

        assert!(site.config.build.output.join("blog/hello/index.html").exists());
        assert!(!default_output.exists());
    }

    #[test]
    fn test_missing_assets_dir_fails() {
        let mut site = Site::new();
        site.config.build.assets = site.root.path().join("no-such-assets");

        assert!(site.build().is_err());
    }

    #[test]
    fn test_malformed_post_aborts_build() {
        let site = Site::new();
        site.add_post("good.md", "Good", "2024-01-01", true);
        fs::write(site.config.build.posts.join("bad.md"), "no front-matter").unwrap();

        assert!(site.build().is_err());
    }

    #[test]
    fn test_build_with_feed_enabled() {
        let mut site = Site::new();
        site.config.build.rss.enable = true;
        site.config.base.title = "Feed".to_string();
        site.config.base.description = "desc".to_string();
        site.config.base.url = Some("https://example.com".to_string());
        site.add_post("hello.md", "Hello", "2024-03-05", true);

        site.build().unwrap();

        let xml = fs::read_to_string(site.output().join("rss.xml")).unwrap();
        assert!(xml.contains("https://example.com/blog/hello/"));
    }
}
