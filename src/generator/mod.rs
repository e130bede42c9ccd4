//! Optional output generators that run after the core build.

pub mod rss;
