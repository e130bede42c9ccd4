//! The build pipeline: source collection, conversion, templating, output.
//!
//! - **frontmatter**: `---` fenced YAML metadata extraction
//! - **convert**: the external Markdown-to-HTML converter seam
//! - **template**: `{placeholder}` substitution
//! - **assets**: verbatim static-asset copy
//! - **posts**: per-post load, render, write
//! - **index**: blog index assembly
//!
//! # Build Flow
//!
//! ```text
//! collect_post_sources() ──► Post::load() ──► render() ──► write_page()
//!                                  │
//!                                  ▼
//!                            build_index()
//! ```

pub mod assets;
pub mod convert;
pub mod frontmatter;
pub mod index;
pub mod posts;
pub mod template;

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Files to ignore during directory traversal
const IGNORED_FILES: &[&str] = &[".DS_Store"];

/// Collect all files from the assets directory recursively.
///
/// Traversal errors propagate: a missing or unreadable assets root fails
/// the build rather than producing an empty site.
pub fn collect_asset_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in WalkDir::new(dir) {
        let entry =
            entry.with_context(|| format!("Failed to read assets from {}", dir.display()))?;
        if !entry.file_type().is_file() {
            continue;
        }

        let name = entry.file_name().to_str().unwrap_or_default();
        if IGNORED_FILES.contains(&name) {
            continue;
        }

        files.push(entry.into_path());
    }

    Ok(files)
}

/// Collect Markdown post sources: non-recursive, `*.md` only.
///
/// Sorted by filename so the collection order (and therefore the tie-break
/// order for equal-date posts in the index) is deterministic.
pub fn collect_post_sources(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir)
        .with_context(|| format!("Failed to read posts directory {}", dir.display()))?;

    let mut files = Vec::new();
    for entry in entries {
        let path = entry?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "md") {
            files.push(path);
        }
    }

    files.sort();
    Ok(files)
}
