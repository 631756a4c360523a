//! Trait seam over the remote wiki service.
//!
//! [`SyncEngine`](crate::SyncEngine) and
//! [`SpaceResolver`](crate::SpaceResolver) talk to the remote through
//! this trait so tests can substitute an in-memory fake for the HTTP
//! client.

use docsync_confluence::types::Space;
use docsync_confluence::{ConfluenceClient, ConfluenceError};

use crate::page_map::PageMap;

/// Remote wiki operations used by the sync pipeline.
pub trait WikiClient {
    /// All spaces visible to the credential.
    fn list_spaces(&self) -> Result<Vec<Space>, ConfluenceError>;

    /// Whether a space exists (404 is `false`, not an error).
    fn space_exists(&self, key: &str) -> Result<bool, ConfluenceError>;

    /// Attempt space creation; `false` on permission denial or conflict.
    fn create_space(&self, key: &str, name: &str) -> Result<bool, ConfluenceError>;

    /// All non-ignored pages of a space as `{title: id}`.
    fn list_pages(&self, space_key: &str) -> Result<PageMap, ConfluenceError>;

    /// Current version number of a page.
    fn page_version(&self, page_id: &str) -> Result<u32, ConfluenceError>;

    /// Create a page; returns the assigned id.
    fn create_page(
        &self,
        space_key: &str,
        title: &str,
        html_body: &str,
        parent_id: Option<&str>,
    ) -> Result<String, ConfluenceError>;

    /// Update a page's title and body; returns the new version number.
    fn update_page(
        &self,
        page_id: &str,
        title: &str,
        html_body: &str,
    ) -> Result<u32, ConfluenceError>;
}

impl WikiClient for ConfluenceClient {
    fn list_spaces(&self) -> Result<Vec<Space>, ConfluenceError> {
        ConfluenceClient::list_spaces(self)
    }

    fn space_exists(&self, key: &str) -> Result<bool, ConfluenceError> {
        ConfluenceClient::space_exists(self, key)
    }

    fn create_space(&self, key: &str, name: &str) -> Result<bool, ConfluenceError> {
        ConfluenceClient::create_space(self, key, name)
    }

    fn list_pages(&self, space_key: &str) -> Result<PageMap, ConfluenceError> {
        ConfluenceClient::list_pages(self, space_key)
    }

    fn page_version(&self, page_id: &str) -> Result<u32, ConfluenceError> {
        ConfluenceClient::page_version(self, page_id)
    }

    fn create_page(
        &self,
        space_key: &str,
        title: &str,
        html_body: &str,
        parent_id: Option<&str>,
    ) -> Result<String, ConfluenceError> {
        ConfluenceClient::create_page(self, space_key, title, html_body, parent_id)
    }

    fn update_page(
        &self,
        page_id: &str,
        title: &str,
        html_body: &str,
    ) -> Result<u32, ConfluenceError> {
        ConfluenceClient::update_page(self, page_id, title, html_body)
    }
}
