//! Confluence REST API client.
//!
//! Sync HTTP client for the Confluence Cloud REST API with HTTP Basic
//! authentication. Every call blocks until a response or the global
//! timeout; there are no retries.

mod pages;
mod spaces;

use std::time::Duration;

use base64::prelude::*;
use ureq::Agent;

use docsync_config::Config;

use crate::error::ConfluenceError;

/// HTTP timeout in seconds for every request.
const DEFAULT_TIMEOUT: u64 = 60;

/// Maximum number of bytes of an error response body kept for diagnostics.
const ERROR_BODY_LIMIT: usize = 300;

/// Confluence REST API client.
pub struct ConfluenceClient {
    agent: Agent,
    base_url: String,
    auth_header: String,
}

impl ConfluenceClient {
    /// Create a client from config values.
    ///
    /// `config.api_url` is the REST base URL (already normalized by
    /// [`Config`]); credentials are sent as HTTP Basic on every call.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        let agent: Agent = Agent::config_builder()
            .timeout_global(Some(Duration::from_secs(DEFAULT_TIMEOUT)))
            .http_status_as_error(false)
            .build()
            .into();

        let credentials = BASE64_STANDARD.encode(format!("{}:{}", config.user, config.token));

        Self {
            agent,
            base_url: config.api_url.trim_end_matches('/').to_owned(),
            auth_header: format!("Basic {credentials}"),
        }
    }

    /// The REST base URL this client talks to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Perform a GET and return the raw status plus body.
    ///
    /// Only transport-level failures are errors here; status
    /// classification is up to the caller.
    pub(crate) fn get_raw(&self, url: &str) -> Result<(u16, ureq::Body), ConfluenceError> {
        let response = self
            .agent
            .get(url)
            .header("Authorization", &self.auth_header)
            .header("Accept", "application/json")
            .call()?;

        let status = response.status().as_u16();
        Ok((status, response.into_body()))
    }

    /// POST a JSON payload and return the raw status plus body.
    pub(crate) fn post_raw(
        &self,
        url: &str,
        payload: &serde_json::Value,
    ) -> Result<(u16, ureq::Body), ConfluenceError> {
        let payload_bytes = serde_json::to_vec(payload)?;

        let response = self
            .agent
            .post(url)
            .header("Authorization", &self.auth_header)
            .header("Content-Type", "application/json")
            .header("Accept", "application/json")
            .send(&payload_bytes[..])?;

        let status = response.status().as_u16();
        Ok((status, response.into_body()))
    }

    /// PUT a JSON payload and return the raw status plus body.
    pub(crate) fn put_raw(
        &self,
        url: &str,
        payload: &serde_json::Value,
    ) -> Result<(u16, ureq::Body), ConfluenceError> {
        let payload_bytes = serde_json::to_vec(payload)?;

        let response = self
            .agent
            .put(url)
            .header("Authorization", &self.auth_header)
            .header("Content-Type", "application/json")
            .header("Accept", "application/json")
            .send(&payload_bytes[..])?;

        let status = response.status().as_u16();
        Ok((status, response.into_body()))
    }

    /// Classify a failed response status into an error.
    ///
    /// 401/403 become [`ConfluenceError::Auth`]; everything else keeps
    /// the status and a truncated body for diagnosis.
    pub(crate) fn fail(status: u16, body: ureq::Body) -> ConfluenceError {
        if status == 401 || status == 403 {
            return ConfluenceError::Auth { status };
        }
        ConfluenceError::Http {
            status,
            body: read_truncated(body),
        }
    }
}

/// Read a response body for an error message, truncated to a sane size.
pub(crate) fn read_truncated(mut body: ureq::Body) -> String {
    let text = body
        .read_to_string()
        .unwrap_or_else(|_| "(unable to read error body)".to_owned());
    truncate(&text, ERROR_BODY_LIMIT)
}

fn truncate(text: &str, limit: usize) -> String {
    if text.len() <= limit {
        return text.to_owned();
    }
    let mut end = limit;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &text[..end])
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_truncate_short_text_unchanged() {
        assert_eq!(truncate("short", 300), "short");
    }

    #[test]
    fn test_truncate_respects_char_boundaries() {
        // 'é' is two bytes; cutting at byte 1 would split it.
        let text = "éé";
        assert_eq!(truncate(text, 1), "...");
        assert_eq!(truncate(text, 2), "é...");
    }

    #[test]
    fn test_truncate_long_text() {
        let text = "x".repeat(500);
        let truncated = truncate(&text, 300);
        assert_eq!(truncated.len(), 303);
        assert!(truncated.ends_with("..."));
    }
}
