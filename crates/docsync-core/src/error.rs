//! Error types for the sync pipeline.

use std::path::PathBuf;

use docsync_confluence::ConfluenceError;

/// Error from sync operations.
#[derive(Debug, thiserror::Error)]
pub enum SyncError {
    /// Remote API failure.
    #[error(transparent)]
    Confluence(#[from] ConfluenceError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error (page map writes).
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid glob pattern built from a directory path.
    #[error("Invalid glob pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    /// The markdown file passed to a push does not exist.
    #[error("Markdown file not found: {0}")]
    MarkdownNotFound(PathBuf),

    /// No personal space visible to the credential.
    #[error("Personal space key not found. Set CONFLUENCE_SPACE_KEY explicitly.")]
    PersonalSpaceNotFound,

    /// The README targeted by the PDF-link generator does not exist.
    #[error("README not found: {0}")]
    ReadmeNotFound(PathBuf),
}
