//! Utility modules for the blog builder.

pub mod date;
pub mod exec;
