//! Page operations for the Confluence API.

use std::collections::BTreeMap;

use serde_json::json;
use tracing::info;

use super::ConfluenceClient;
use crate::error::ConfluenceError;
use crate::is_ignored_title;
use crate::types::{CreatedPage, Page, PageList};

/// Fixed page size for content pagination.
const PAGE_LIMIT: usize = 50;

impl ConfluenceClient {
    /// List every page of type "page" in a space as `{title: id}`.
    ///
    /// Paginates with offset/limit until a result page shorter than the
    /// limit is returned. Titles on the ignore list are filtered out.
    pub fn list_pages(&self, space_key: &str) -> Result<BTreeMap<String, String>, ConfluenceError> {
        let mut pages = BTreeMap::new();
        let mut start = 0;

        loop {
            let url = format!(
                "{}/content?spaceKey={space_key}&type=page&expand=title&limit={PAGE_LIMIT}&start={start}",
                self.base_url
            );

            info!("Listing pages in '{space_key}' (start={start})");

            let (status, mut body) = self.get_raw(&url)?;
            if status >= 400 {
                return Err(Self::fail(status, body));
            }

            let list: PageList = body.read_json()?;
            let count = list.results.len();

            for page in list.results {
                let title = page.title.trim().to_owned();
                if is_ignored_title(&title) {
                    continue;
                }
                pages.insert(title, page.id);
            }

            // A short page means the listing is exhausted. A full final
            // page costs one extra round trip before terminating.
            if count < PAGE_LIMIT {
                break;
            }
            start += PAGE_LIMIT;
        }

        Ok(pages)
    }

    /// Fetch the current version number of a page.
    pub fn page_version(&self, page_id: &str) -> Result<u32, ConfluenceError> {
        let url = format!("{}/content/{page_id}?expand=version", self.base_url);

        let (status, mut body) = self.get_raw(&url)?;
        if status >= 400 {
            return Err(Self::fail(status, body));
        }

        let page: Page = body.read_json()?;
        Ok(page.version.number)
    }

    /// Create a new page, optionally nested under a parent page.
    ///
    /// Returns the ID assigned by Confluence.
    pub fn create_page(
        &self,
        space_key: &str,
        title: &str,
        html_body: &str,
        parent_id: Option<&str>,
    ) -> Result<String, ConfluenceError> {
        let url = format!("{}/content", self.base_url);

        let mut payload = json!({
            "type": "page",
            "title": title,
            "space": {"key": space_key},
            "body": {
                "storage": {
                    "value": html_body,
                    "representation": "storage"
                }
            },
        });
        if let Some(parent) = parent_id {
            payload["ancestors"] = json!([{"id": parent}]);
        }

        let (status, mut body) = self.post_raw(&url, &payload)?;
        if status >= 400 {
            return Err(Self::fail(status, body));
        }

        let created: CreatedPage = body.read_json()?;
        info!("Created page '{title}' (id={})", created.id);
        Ok(created.id)
    }

    /// Update a page's title and content.
    ///
    /// Fetches the current version and submits `version + 1`, as the
    /// API's optimistic-concurrency contract requires. Returns the new
    /// version number.
    pub fn update_page(
        &self,
        page_id: &str,
        title: &str,
        html_body: &str,
    ) -> Result<u32, ConfluenceError> {
        let version = self.page_version(page_id)?;
        let url = format!("{}/content/{page_id}", self.base_url);

        let payload = json!({
            "type": "page",
            "title": title,
            "body": {
                "storage": {
                    "value": html_body,
                    "representation": "storage"
                }
            },
            "version": {"number": version + 1},
        });

        info!("Updating page {page_id} from version {version} to {}", version + 1);

        let (status, body) = self.put_raw(&url, &payload)?;
        if status >= 400 {
            return Err(Self::fail(status, body));
        }

        Ok(version + 1)
    }
}
