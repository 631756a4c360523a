//! Read-only health probes for credentials and space reachability.
//!
//! Nothing here mutates remote state; the probes exist so CI can fail
//! fast with a precise message before a sync run starts.

use crate::client::{ConfluenceClient, read_truncated};
use crate::error::ConfluenceError;

/// Endpoints tried, in order, to verify authentication. Confluence
/// Cloud typically supports `/user/current`; older deployments answer
/// the minimal space listing instead.
pub const AUTH_PROBE_PATHS: [&str; 2] = ["/user/current", "/space?limit=1"];

/// Outcome of the authentication probe.
#[derive(Debug)]
pub enum AuthProbe {
    /// A probe endpoint answered 2xx.
    Ok { url: String },
    /// 401/403 from a probe endpoint.
    Denied { status: u16 },
    /// Every probe endpoint returned 404.
    NoEndpoint { tried: Vec<String> },
    /// A probe endpoint returned something other than 2xx/401/403/404.
    Unexpected {
        url: String,
        status: u16,
        body: String,
    },
}

/// Outcome of the target-space probe.
#[derive(Debug)]
pub enum SpaceProbe {
    /// Space answered 2xx.
    Ok,
    /// Space returned 404; sync will create it or fall back.
    Missing,
    /// Auth succeeded earlier but this space returned 401/403.
    Denied { status: u16 },
    /// Any other status.
    Unexpected { status: u16, body: String },
}

/// Classification of a probe response status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ProbeStatus {
    Success,
    Denied,
    NotFound,
    Unexpected,
}

fn interpret_status(status: u16) -> ProbeStatus {
    match status {
        200..=299 => ProbeStatus::Success,
        401 | 403 => ProbeStatus::Denied,
        404 => ProbeStatus::NotFound,
        _ => ProbeStatus::Unexpected,
    }
}

impl ConfluenceClient {
    /// Probe authentication against the known endpoints.
    ///
    /// # Errors
    ///
    /// Only transport-level failures are returned as `Err`; every HTTP
    /// status maps onto an [`AuthProbe`] variant.
    pub fn probe_auth(&self) -> Result<AuthProbe, ConfluenceError> {
        let mut tried = Vec::new();

        for path in AUTH_PROBE_PATHS {
            let url = format!("{}{path}", self.base_url());
            tried.push(url.clone());

            let (status, body) = self.get_raw(&url)?;
            match interpret_status(status) {
                ProbeStatus::Success => return Ok(AuthProbe::Ok { url }),
                ProbeStatus::Denied => return Ok(AuthProbe::Denied { status }),
                ProbeStatus::NotFound => {}
                ProbeStatus::Unexpected => {
                    return Ok(AuthProbe::Unexpected {
                        url,
                        status,
                        body: read_truncated(body),
                    });
                }
            }
        }

        Ok(AuthProbe::NoEndpoint { tried })
    }

    /// Probe reachability of a specific space.
    pub fn probe_space(&self, key: &str) -> Result<SpaceProbe, ConfluenceError> {
        let url = format!("{}/space/{key}", self.base_url());

        let (status, body) = self.get_raw(&url)?;
        let probe = match interpret_status(status) {
            ProbeStatus::Success => SpaceProbe::Ok,
            ProbeStatus::NotFound => SpaceProbe::Missing,
            ProbeStatus::Denied => SpaceProbe::Denied { status },
            ProbeStatus::Unexpected => SpaceProbe::Unexpected {
                status,
                body: read_truncated(body),
            },
        };
        Ok(probe)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_range() {
        assert_eq!(interpret_status(200), ProbeStatus::Success);
        assert_eq!(interpret_status(204), ProbeStatus::Success);
        assert_eq!(interpret_status(299), ProbeStatus::Success);
    }

    #[test]
    fn test_auth_statuses_denied() {
        assert_eq!(interpret_status(401), ProbeStatus::Denied);
        assert_eq!(interpret_status(403), ProbeStatus::Denied);
    }

    #[test]
    fn test_not_found_tries_next() {
        assert_eq!(interpret_status(404), ProbeStatus::NotFound);
    }

    #[test]
    fn test_everything_else_unexpected() {
        assert_eq!(interpret_status(301), ProbeStatus::Unexpected);
        assert_eq!(interpret_status(429), ProbeStatus::Unexpected);
        assert_eq!(interpret_status(500), ProbeStatus::Unexpected);
    }
}
