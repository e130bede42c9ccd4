//! Default values for configuration fields.
//!
//! These functions are used by serde for default deserialization.

// ============================================================================
// Common Defaults
// ============================================================================

pub fn r#false() -> bool {
    false
}

// ============================================================================
// [base] Section Defaults
// ============================================================================

pub mod base {
    pub fn url() -> Option<String> {
        None
    }

    pub fn language() -> String {
        "en".into()
    }
}

// ============================================================================
// [build] Section Defaults
// ============================================================================

pub mod build {
    use std::path::PathBuf;

    pub fn root() -> Option<PathBuf> {
        None
    }

    pub fn posts() -> PathBuf {
        "src/lib/blog/posts".into()
    }

    pub fn assets() -> PathBuf {
        "src/static".into()
    }

    pub fn templates() -> PathBuf {
        "src/lib/blog".into()
    }

    pub fn output() -> PathBuf {
        "dist".into()
    }

    pub mod converter {
        pub fn command() -> Vec<String> {
            vec![
                "pandoc".into(),
                "--from=markdown".into(),
                "--to=html".into(),
            ]
        }
    }

    pub mod rss {
        use std::path::PathBuf;

        pub fn path() -> PathBuf {
            "rss.xml".into()
        }
    }
}
