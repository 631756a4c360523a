//! Space operations for the Confluence API.

use serde_json::json;
use tracing::{info, warn};

use super::ConfluenceClient;
use crate::error::ConfluenceError;
use crate::types::{Space, SpaceList};

impl ConfluenceClient {
    /// List all spaces visible to the credential.
    pub fn list_spaces(&self) -> Result<Vec<Space>, ConfluenceError> {
        let url = format!("{}/space", self.base_url);

        info!("Listing spaces");

        let (status, mut body) = self.get_raw(&url)?;
        if status >= 400 {
            return Err(Self::fail(status, body));
        }

        let list: SpaceList = body.read_json()?;
        Ok(list.results)
    }

    /// Check whether a space exists.
    ///
    /// 404 means "no"; auth failures and other error statuses raise.
    pub fn space_exists(&self, key: &str) -> Result<bool, ConfluenceError> {
        let url = format!("{}/space/{key}", self.base_url);

        let (status, body) = self.get_raw(&url)?;
        if status == 404 {
            return Ok(false);
        }
        if status >= 400 {
            return Err(Self::fail(status, body));
        }
        Ok(true)
    }

    /// Attempt to create a global space.
    ///
    /// Returns `false` without raising when Confluence denies the
    /// request (401/403) or rejects it as a conflict or invalid key
    /// (400), so callers can fall back to another space.
    pub fn create_space(&self, key: &str, name: &str) -> Result<bool, ConfluenceError> {
        let url = format!("{}/space", self.base_url);
        let payload = json!({
            "key": key,
            "name": name,
            "type": "global",
        });

        let (status, body) = self.post_raw(&url, &payload)?;
        match status {
            200 | 201 => {
                info!("Created space '{key}'");
                Ok(true)
            }
            401 | 403 => {
                warn!("Could not create space '{key}' (permission denied)");
                Ok(false)
            }
            // Already exists or invalid key format
            400 => Ok(false),
            _ => Err(Self::fail(status, body)),
        }
    }
}
