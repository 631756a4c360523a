//! CLI error types.

use docsync_config::ConfigError;
use docsync_confluence::ConfluenceError;
use docsync_core::SyncError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Confluence(#[from] ConfluenceError),

    #[error("{0}")]
    Sync(#[from] SyncError),

    /// Health-check failure; the message is the full diagnostic.
    #[error("{0}")]
    Health(String),
}

impl CliError {
    /// Health failures exit with 2 so CI can distinguish configuration
    /// and connectivity problems from sync failures (exit 1).
    pub(crate) fn exit_code(&self) -> i32 {
        match self {
            Self::Health(_) => 2,
            _ => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_failures_exit_2() {
        assert_eq!(CliError::Health("bad".to_owned()).exit_code(), 2);
    }

    #[test]
    fn test_other_failures_exit_1() {
        let err = CliError::Sync(SyncError::PersonalSpaceNotFound);
        assert_eq!(err.exit_code(), 1);
    }
}
