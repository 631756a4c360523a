//! Local page map: the JSON cache binding page titles to remote ids.
//!
//! The map is the sole local record of which pages already exist
//! remotely. It can drift from the remote (a page deleted there stays
//! listed here); the sync engine treats that as a handled case, not an
//! invariant violation.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::SyncError;

/// Mapping from page title to remote page id.
pub type PageMap = BTreeMap<String, String>;

/// Persistent store for the page map.
pub struct PageMapStore {
    path: PathBuf,
}

impl PageMapStore {
    /// Create a store backed by the given file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the map from disk.
    ///
    /// An absent, empty, or unparsable file yields an empty map: a
    /// corrupt cache degrades to "start fresh" instead of blocking the
    /// sync. The parse failure is deliberately mapped to the default.
    #[must_use]
    pub fn load(&self) -> PageMap {
        match std::fs::read_to_string(&self.path) {
            Ok(text) => parse_page_map(&text),
            Err(_) => PageMap::new(),
        }
    }

    /// Write the map as pretty-printed JSON, creating parent
    /// directories as needed. Non-ASCII titles are stored literally.
    pub fn save(&self, map: &PageMap) -> Result<(), SyncError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(map)?;
        std::fs::write(&self.path, json)?;
        info!("Saved page map with {} pages -> {}", map.len(), self.path.display());
        Ok(())
    }
}

fn parse_page_map(text: &str) -> PageMap {
    serde_json::from_str(text).unwrap_or_default()
}

/// Resolve a title against the map: exact match first, then a
/// case-insensitive scan. Returns the canonical stored title and id,
/// so callers can adopt the remote's casing.
#[must_use]
pub fn resolve_title<'a>(map: &'a PageMap, title: &str) -> Option<(&'a str, &'a str)> {
    if let Some((canonical, id)) = map.get_key_value(title) {
        return Some((canonical.as_str(), id.as_str()));
    }

    let wanted = title.trim().to_lowercase();
    map.iter()
        .find(|(existing, _)| existing.trim().to_lowercase() == wanted)
        .map(|(existing, id)| (existing.as_str(), id.as_str()))
}
