//! Target-space resolution.
//!
//! Supports both CI environments (explicit shared space, not always
//! privileged to create it) and ad-hoc personal use (auto-discovered
//! personal space), degrading to the personal space when permissions
//! are insufficient instead of failing the run.

use docsync_config::Config;
use tracing::{info, warn};

use crate::error::SyncError;
use crate::remote::WikiClient;

/// Outcome of a single resolution strategy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Strategy produced a usable space key.
    Resolved(String),
    /// Strategy does not apply to the current configuration.
    NotApplicable,
    /// Strategy applies but could not produce a space.
    Unavailable,
}

/// Resolves which space sync should target.
pub struct SpaceResolver<'a, C> {
    client: &'a C,
    explicit_key: Option<String>,
    display_name: Option<String>,
}

impl<'a, C: WikiClient> SpaceResolver<'a, C> {
    /// Build a resolver from the process configuration.
    pub fn new(client: &'a C, config: &Config) -> Self {
        Self {
            client,
            explicit_key: config.space_key.clone(),
            display_name: config.space_name.clone(),
        }
    }

    /// Walk the strategies in order and return the first resolved key.
    ///
    /// Order: existing explicit space, created explicit space, the
    /// authenticated user's personal space.
    ///
    /// # Errors
    ///
    /// Propagates remote failures, and returns
    /// [`SyncError::PersonalSpaceNotFound`] when every strategy is
    /// exhausted.
    pub fn resolve(&self) -> Result<String, SyncError> {
        let strategies: [fn(&Self) -> Result<Resolution, SyncError>; 3] = [
            Self::existing_explicit_space,
            Self::created_explicit_space,
            Self::personal_space,
        ];

        for strategy in strategies {
            if let Resolution::Resolved(key) = strategy(self)? {
                return Ok(key);
            }
        }

        Err(SyncError::PersonalSpaceNotFound)
    }

    /// Use the configured space key if the space already exists.
    fn existing_explicit_space(&self) -> Result<Resolution, SyncError> {
        let Some(key) = self.explicit_key.as_deref() else {
            return Ok(Resolution::NotApplicable);
        };

        if self.client.space_exists(key)? {
            Ok(Resolution::Resolved(key.to_owned()))
        } else {
            Ok(Resolution::Unavailable)
        }
    }

    /// Try to create the configured space, then confirm it exists.
    /// Creation needs admin permission; denial is not fatal.
    fn created_explicit_space(&self) -> Result<Resolution, SyncError> {
        let Some(key) = self.explicit_key.as_deref() else {
            return Ok(Resolution::NotApplicable);
        };

        let name = self.display_name.as_deref().unwrap_or(key);
        if self.client.create_space(key, name)? && self.client.space_exists(key)? {
            info!("Created space '{key}'");
            return Ok(Resolution::Resolved(key.to_owned()));
        }

        warn!("Space '{key}' unavailable; falling back to personal space");
        Ok(Resolution::Unavailable)
    }

    /// Scan visible spaces for the credential's personal space.
    fn personal_space(&self) -> Result<Resolution, SyncError> {
        let spaces = self.client.list_spaces()?;
        for space in spaces {
            if space.is_personal() {
                return Ok(Resolution::Resolved(space.key));
            }
        }
        Ok(Resolution::Unavailable)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::remote::fake::FakeWiki;

    use super::*;

    fn resolver<'a>(
        client: &'a FakeWiki,
        key: Option<&str>,
        name: Option<&str>,
    ) -> SpaceResolver<'a, FakeWiki> {
        SpaceResolver {
            client,
            explicit_key: key.map(str::to_owned),
            display_name: name.map(str::to_owned),
        }
    }

    #[test]
    fn test_explicit_space_used_when_it_exists() {
        let wiki = FakeWiki::with_space("DOCS", "global");
        wiki.add_space("~me", "personal");

        let key = resolver(&wiki, Some("DOCS"), None).resolve().unwrap();
        assert_eq!(key, "DOCS");
    }

    #[test]
    fn test_missing_explicit_space_created_when_permitted() {
        let mut wiki = FakeWiki::with_space("~me", "personal");
        wiki.allow_space_creation = true;

        let key = resolver(&wiki, Some("DOCS"), Some("Team Docs"))
            .resolve()
            .unwrap();
        assert_eq!(key, "DOCS");
        assert!(wiki.space_exists("DOCS").unwrap());
    }

    #[test]
    fn test_creation_denied_falls_back_to_personal() {
        let wiki = FakeWiki::with_space("~me", "personal");

        let key = resolver(&wiki, Some("DOCS"), None).resolve().unwrap();
        assert_eq!(key, "~me");
    }

    #[test]
    fn test_no_explicit_key_resolves_personal_directly() {
        let wiki = FakeWiki::with_space("GLOBAL", "global");
        wiki.add_space("~me", "personal");

        let key = resolver(&wiki, None, None).resolve().unwrap();
        assert_eq!(key, "~me");
    }

    #[test]
    fn test_no_personal_space_is_an_error() {
        let wiki = FakeWiki::with_space("GLOBAL", "global");

        let err = resolver(&wiki, None, None).resolve().unwrap_err();
        assert!(matches!(err, SyncError::PersonalSpaceNotFound));
    }
}
