//! Static asset processing.
//!
//! Assets are copied verbatim into the output root, preserving the source
//! tree layout. No transformation or optimization is applied.

use crate::compiler::collect_asset_files;
use crate::log;
use anyhow::{Context, Result, anyhow};
use std::fs;
use std::path::Path;

/// Copy the whole assets tree into the output directory.
///
/// Returns the number of files copied. Fails if the assets root is missing
/// or any file cannot be read.
pub fn copy_assets(assets: &Path, output: &Path) -> Result<usize> {
    let files = collect_asset_files(assets)?;

    for path in &files {
        copy_asset(path, assets, output)?;
    }

    log!("assets"; "copied {} files", files.len());
    Ok(files.len())
}

/// Copy a single asset to its mirrored output path.
fn copy_asset(path: &Path, assets: &Path, output: &Path) -> Result<()> {
    let rel_path = path
        .strip_prefix(assets)?
        .to_str()
        .ok_or_else(|| anyhow!("Invalid path"))?;

    let output_path = output.join(rel_path);
    if let Some(parent) = output_path.parent() {
        fs::create_dir_all(parent)?;
    }

    fs::copy(path, &output_path).with_context(|| format!("Failed to copy asset {rel_path}"))?;
    Ok(())
}
