//! Confluence space types.

use serde::Deserialize;

/// Confluence space.
#[derive(Debug, Clone, Deserialize)]
pub struct Space {
    /// Space key.
    pub key: String,
    /// Space type: `personal` or `global`.
    #[serde(rename = "type")]
    pub space_type: String,
    /// Display name.
    #[serde(default)]
    pub name: Option<String>,
}

impl Space {
    /// Whether this is the authenticated user's personal space.
    #[must_use]
    pub fn is_personal(&self) -> bool {
        self.space_type == "personal"
    }
}

/// Paged space listing.
#[derive(Debug, Deserialize)]
pub struct SpaceList {
    /// Spaces in this result page.
    #[serde(default)]
    pub results: Vec<Space>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_space_list() {
        let json = r#"{
            "results": [
                {"key": "~123abc", "type": "personal"},
                {"key": "DOCS", "type": "global", "name": "Team Docs"}
            ]
        }"#;
        let list: SpaceList = serde_json::from_str(json).unwrap();

        assert_eq!(list.results.len(), 2);
        assert!(list.results[0].is_personal());
        assert!(!list.results[1].is_personal());
        assert_eq!(list.results[1].name.as_deref(), Some("Team Docs"));
    }

    #[test]
    fn test_missing_results_defaults_empty() {
        let list: SpaceList = serde_json::from_str("{}").unwrap();
        assert!(list.results.is_empty());
    }
}
