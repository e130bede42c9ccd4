//! `{placeholder}` template substitution.
//!
//! Templates are plain HTML files with `{name}` placeholders. Substitution
//! is replace-based: unknown placeholders and literal braces (inline CSS,
//! JavaScript) pass through untouched.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// The two page templates every site provides.
#[derive(Debug)]
pub struct Templates {
    /// Post page template with `{title}`, `{date}`, `{content}` placeholders.
    pub post: String,
    /// Index page template with a `{posts}` placeholder.
    pub index: String,
}

impl Templates {
    /// Load `post-template.html` and `index-template.html` from a directory.
    pub fn load(dir: &Path) -> Result<Self> {
        Ok(Self {
            post: read_template(&dir.join("post-template.html"))?,
            index: read_template(&dir.join("index-template.html"))?,
        })
    }
}

fn read_template(path: &Path) -> Result<String> {
    fs::read_to_string(path)
        .with_context(|| format!("Failed to read template {}", path.display()))
}

/// Replace each `{key}` placeholder with its value.
pub fn fill(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = template.to_string();
    for (key, value) in values {
        out = out.replace(&format!("{{{key}}}"), value);
    }
    out
}
