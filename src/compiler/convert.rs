//! The Markdown-to-HTML converter seam.
//!
//! Conversion is delegated to an external command (pandoc by default) that
//! reads Markdown on stdin and writes HTML on stdout. The trait keeps the
//! converter injectable so pipeline tests never spawn a real binary.

use crate::utils::exec;
use anyhow::{Context, Result};
use std::io::Write;

/// A Markdown-to-HTML converter: Markdown text in, HTML text out.
pub trait MarkdownConverter {
    fn convert(&self, markdown: &str) -> Result<String>;
}

/// Converter backed by an external command with piped stdio.
pub struct CommandConverter {
    command: Vec<String>,
}

impl CommandConverter {
    pub fn new(command: &[String]) -> Self {
        Self {
            command: command.to_vec(),
        }
    }
}

impl MarkdownConverter for CommandConverter {
    fn convert(&self, markdown: &str) -> Result<String> {
        let mut proc = exec::spawn_with_stdin(&self.command)?;

        proc.stdin()
            .context("Converter stdin unavailable")?
            .write_all(markdown.as_bytes())
            .context("Failed to write to converter stdin")?;

        let output = proc.wait()?;
        String::from_utf8(output.stdout).context("Converter produced invalid UTF-8")
    }
}
