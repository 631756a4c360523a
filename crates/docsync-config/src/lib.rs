//! Configuration for docsync.
//!
//! All settings come from `CONFLUENCE_*` environment variables. The
//! [`Config`] struct is built once at process start and passed by
//! parameter to every component; nothing reads the environment after
//! that point.

use std::env;

/// Environment variable holding the REST API base URL.
pub const ENV_API_URL: &str = "CONFLUENCE_API_URL";
/// Environment variable holding the basic-auth username.
pub const ENV_USER: &str = "CONFLUENCE_USER";
/// Environment variable holding the basic-auth token.
pub const ENV_TOKEN: &str = "CONFLUENCE_TOKEN";
/// Environment variable holding the optional explicit space key.
pub const ENV_SPACE_KEY: &str = "CONFLUENCE_SPACE_KEY";
/// Environment variable holding the optional space display name.
pub const ENV_SPACE_NAME: &str = "CONFLUENCE_SPACE_NAME";

/// Resolved process configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// REST API base URL, trailing slash stripped.
    pub api_url: String,
    /// Basic-auth username (Atlassian account email).
    pub user: String,
    /// Basic-auth password (API token / PAT).
    pub token: String,
    /// Explicit target space key, if configured.
    pub space_key: Option<String>,
    /// Display name used only if the space must be created.
    pub space_name: Option<String>,
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A required environment variable is missing or blank.
    #[error("Missing env var: {var} ({hint})")]
    Missing {
        var: &'static str,
        hint: &'static str,
    },
}

impl Config {
    /// Load configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Missing`] for the first required variable
    /// that is absent or blank.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| env::var(var).ok())
    }

    /// Load configuration from an arbitrary variable source.
    ///
    /// Used by tests to avoid mutating process-global environment state.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_url = required(
            &lookup,
            ENV_API_URL,
            "the REST base URL, e.g. https://<site>.atlassian.net/wiki/rest/api",
        )?;
        let user = required(&lookup, ENV_USER, "your Confluence/Atlassian email")?;
        let token = required(&lookup, ENV_TOKEN, "API token / PAT")?;

        Ok(Self {
            api_url: api_url.trim_end_matches('/').to_owned(),
            user,
            token,
            space_key: optional(&lookup, ENV_SPACE_KEY),
            space_name: optional(&lookup, ENV_SPACE_NAME),
        })
    }
}

fn required<F>(lookup: &F, var: &'static str, hint: &'static str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(var) {
        Some(value) if !value.trim().is_empty() => Ok(value.trim().to_owned()),
        _ => Err(ConfigError::Missing { var, hint }),
    }
}

fn optional<F>(lookup: &F, var: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(var)
        .map(|value| value.trim().to_owned())
        .filter(|value| !value.is_empty())
}
