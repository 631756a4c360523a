//! Confluence integration for docsync.
//!
//! This crate provides:
//! - [`ConfluenceClient`]: sync REST API client with HTTP Basic authentication
//! - [`health`]: read-only credential and space reachability probes
//!
//! # API Client
//!
//! ```ignore
//! use docsync_config::Config;
//! use docsync_confluence::ConfluenceClient;
//!
//! let config = Config::from_env()?;
//! let client = ConfluenceClient::from_config(&config);
//!
//! let pages = client.list_pages("DOCS")?;
//! println!("{} pages in DOCS", pages.len());
//! ```

mod client;
pub use client::ConfluenceClient;

mod error;
pub use error::ConfluenceError;

pub mod health;
pub use health::{AuthProbe, SpaceProbe};

pub mod types;
pub use types::{Space, Version};

/// Page titles excluded from sync, compared case-insensitively.
pub const IGNORED_TITLES: [&str; 2] = ["overview", "getting started in confluence"];

/// Whether a page title belongs to the fixed ignore list.
#[must_use]
pub fn is_ignored_title(title: &str) -> bool {
    let normalized = title.trim().to_lowercase();
    IGNORED_TITLES.iter().any(|ignored| *ignored == normalized)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ignored_titles_case_insensitive() {
        assert!(is_ignored_title("Overview"));
        assert!(is_ignored_title("  overview  "));
        assert!(is_ignored_title("Getting Started in Confluence"));
    }

    #[test]
    fn test_regular_titles_not_ignored() {
        assert!(!is_ignored_title("Excel Tips"));
        assert!(!is_ignored_title("Overview of Hiring"));
    }
}
