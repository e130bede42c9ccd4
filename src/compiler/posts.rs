//! Post loading and rendering.
//!
//! A post is one Markdown file with required front-matter (title, date,
//! published flag). The page is rendered through the converter and the post
//! template, then written to `<output>/blog/<slug>/index.html`.
//!
//! Unpublished posts still get a standalone page; they are only excluded
//! from the index listing and the feed. This asymmetry is deliberate.

use crate::compiler::convert::MarkdownConverter;
use crate::compiler::{frontmatter, template};
use crate::log;
use crate::utils::date::Date;
use anyhow::{Context, Result, anyhow};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Required front-matter fields for every post.
///
/// Extra front-matter keys are tolerated and ignored.
#[derive(Debug, Deserialize)]
struct PostAttributes {
    title: String,
    date: String,
    published: bool,
}

/// One blog post: metadata plus the raw Markdown body.
#[derive(Debug)]
pub struct Post {
    pub slug: String,
    pub title: String,
    pub date: Date,
    pub published: bool,
    pub body: String,
}

impl Post {
    /// Load a post from a Markdown source file.
    ///
    /// The slug is the filename stem; title, date and published flag come
    /// from the front-matter block. Any missing or malformed field fails
    /// the load.
    pub fn load(path: &Path) -> Result<Self> {
        let slug = path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .ok_or_else(|| anyhow!("Invalid post filename: {}", path.display()))?
            .to_string();

        let source = fs::read_to_string(path)
            .with_context(|| format!("Failed to read post {}", path.display()))?;

        let (attrs, body) = frontmatter::extract::<PostAttributes>(&source)
            .with_context(|| format!("Invalid front-matter in {}", path.display()))?;

        let date = Date::parse(&attrs.date).ok_or_else(|| {
            anyhow!(
                "Invalid date `{}` in {} (expected YYYY-MM-DD)",
                attrs.date,
                path.display()
            )
        })?;

        Ok(Self {
            slug,
            title: attrs.title,
            date,
            published: attrs.published,
            body: body.to_string(),
        })
    }

    /// Render the full page HTML: convert the body and fill the template.
    pub fn render(&self, converter: &dyn MarkdownConverter, post_template: &str) -> Result<String> {
        let content = converter
            .convert(&self.body)
            .with_context(|| format!("Failed to convert post `{}`", self.slug))?;

        Ok(template::fill(
            post_template,
            &[
                ("title", &self.title),
                ("date", &self.date.format_long()),
                ("content", &content),
            ],
        ))
    }

    /// Site-relative URL of this post's page.
    pub fn url_path(&self) -> String {
        format!("/blog/{}/", self.slug)
    }

    /// Output path of this post's page.
    pub fn page_path(&self, output: &Path) -> PathBuf {
        output.join("blog").join(&self.slug).join("index.html")
    }

    /// Write the rendered page, creating directories as needed.
    ///
    /// Written unconditionally, published or not.
    pub fn write_page(&self, html: &str, output: &Path) -> Result<()> {
        let path = self.page_path(output);

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, html)
            .with_context(|| format!("Failed to write page {}", path.display()))?;

        log!("post"; "{}", self.url_path());
        Ok(())
    }
}
