//! Error types for the Confluence client.

/// Error from Confluence API operations.
#[derive(Debug, thiserror::Error)]
pub enum ConfluenceError {
    /// Authentication or authorization failure (HTTP 401/403).
    #[error(
        "Confluence API auth failed ({status}). \
         Your token may be expired/revoked or lacks permissions."
    )]
    Auth { status: u16 },

    /// Any other HTTP failure. Transport errors carry status 0.
    #[error("HTTP error: {status} - {body}")]
    Http { status: u16, body: String },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(String),
}

impl From<serde_json::Error> for ConfluenceError {
    fn from(e: serde_json::Error) -> Self {
        ConfluenceError::Json(e.to_string())
    }
}

impl From<ureq::Error> for ConfluenceError {
    fn from(e: ureq::Error) -> Self {
        ConfluenceError::Http {
            status: 0,
            body: e.to_string(),
        }
    }
}
