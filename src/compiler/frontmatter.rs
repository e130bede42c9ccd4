//! Front-matter extraction and parsing.
//!
//! Posts start with a `---` fenced YAML block holding the metadata; the rest
//! of the file is the Markdown body. Unlike loose front-matter conventions,
//! the block is required here: a post without one is a build error.

use serde::de::DeserializeOwned;
use thiserror::Error;

/// Errors that can occur when extracting front-matter.
#[derive(Debug, Error)]
pub enum FrontmatterError {
    #[error("Missing front-matter block - posts must start with ---")]
    Missing,

    #[error("Unclosed front-matter block - missing closing ---")]
    Unclosed,

    #[error("Invalid YAML in front-matter: {0}")]
    InvalidYaml(#[from] serde_yaml::Error),
}

/// Split a post source into its parsed front-matter and Markdown body.
///
/// The body is returned with leading whitespace stripped.
pub fn extract<T: DeserializeOwned>(source: &str) -> Result<(T, &str), FrontmatterError> {
    let trimmed = source.trim_start();

    if !trimmed.starts_with("---") {
        return Err(FrontmatterError::Missing);
    }

    let after_open = &trimmed[3..];
    let Some(close_pos) = after_open.find("\n---") else {
        return Err(FrontmatterError::Unclosed);
    };

    let yaml = after_open[..close_pos].trim();
    let body = &after_open[close_pos + 4..];

    let attributes: T = serde_yaml::from_str(yaml)?;
    Ok((attributes, body.trim_start()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Attributes {
        title: String,
        date: String,
        published: bool,
    }

    #[test]
    fn test_extract_valid() {
        let source = r#"---
title: "Hello"
date: 2024-03-05
published: true
---

# First heading
"#;

        let (attrs, body) = extract::<Attributes>(source).unwrap();
        assert_eq!(attrs.title, "Hello");
        assert_eq!(attrs.date, "2024-03-05");
        assert!(attrs.published);
        assert!(body.starts_with("# First heading"));
    }

    #[test]
    fn test_extract_unquoted_title() {
        let source = "---\ntitle: Plain title\ndate: 2024-01-01\npublished: false\n---\nbody";

        let (attrs, body) = extract::<Attributes>(source).unwrap();
        assert_eq!(attrs.title, "Plain title");
        assert!(!attrs.published);
        assert_eq!(body, "body");
    }

    #[test]
    fn test_extract_missing_block() {
        let source = "# Just Markdown\n\nNo front-matter here.";
        let err = extract::<Attributes>(source).unwrap_err();
        assert!(matches!(err, FrontmatterError::Missing));
    }

    #[test]
    fn test_extract_unclosed_block() {
        let source = "---\ntitle: Oops\ndate: 2024-01-01\npublished: true\n";
        let err = extract::<Attributes>(source).unwrap_err();
        assert!(matches!(err, FrontmatterError::Unclosed));
    }

    #[test]
    fn test_extract_missing_required_field() {
        let source = "---\ntitle: No date\npublished: true\n---\nbody";
        let err = extract::<Attributes>(source).unwrap_err();
        assert!(matches!(err, FrontmatterError::InvalidYaml(_)));
    }

    #[test]
    fn test_extract_malformed_yaml() {
        let source = "---\ntitle: [unclosed\n---\nbody";
        assert!(extract::<Attributes>(source).is_err());
    }

    #[test]
    fn test_extract_body_preserves_internal_fences() {
        // A later --- inside the body is a thematic break, not a fence
        let source = "---\ntitle: T\ndate: 2024-01-01\npublished: true\n---\nabove\n\n---\n\nbelow";
        let (_, body) = extract::<Attributes>(source).unwrap();
        assert!(body.contains("above"));
        assert!(body.contains("below"));
        assert!(body.contains("---"));
    }
}
