//! Confluence page types.

use serde::Deserialize;

/// Page as returned by content listings (`expand=title`).
#[derive(Debug, Clone, Deserialize)]
pub struct PageSummary {
    /// Page ID.
    pub id: String,
    /// Page title.
    pub title: String,
}

/// Paged content listing.
#[derive(Debug, Deserialize)]
pub struct PageList {
    /// Pages in this result page.
    #[serde(default)]
    pub results: Vec<PageSummary>,
}

/// Page with version information (`expand=version`).
#[derive(Debug, Clone, Deserialize)]
pub struct Page {
    /// Page ID.
    pub id: String,
    /// Page title.
    pub title: String,
    /// Version information.
    pub version: Version,
}

/// Page version.
#[derive(Debug, Clone, Deserialize)]
pub struct Version {
    /// Monotonic version number, starts at 1.
    pub number: u32,
}

/// Response to a page creation request.
#[derive(Debug, Deserialize)]
pub struct CreatedPage {
    /// ID assigned by Confluence.
    pub id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_page_with_version() {
        let json = r#"{"id": "98317", "title": "Excel Tips", "version": {"number": 4}}"#;
        let page: Page = serde_json::from_str(json).unwrap();

        assert_eq!(page.id, "98317");
        assert_eq!(page.title, "Excel Tips");
        assert_eq!(page.version.number, 4);
    }

    #[test]
    fn test_deserialize_page_list_ignores_unknown_fields() {
        let json = r#"{
            "results": [{"id": "1", "title": "A", "status": "current"}],
            "size": 1,
            "limit": 50
        }"#;
        let list: PageList = serde_json::from_str(json).unwrap();

        assert_eq!(list.results.len(), 1);
        assert_eq!(list.results[0].id, "1");
    }
}
