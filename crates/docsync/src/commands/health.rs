//! `docsync health` command implementation.
//!
//! Read-only diagnostic: verifies configuration, probes
//! authentication, then (if configured) target-space reachability.
//! Every failure maps to [`CliError::Health`] and exit code 2.

use docsync_config::Config;
use docsync_confluence::{AuthProbe, ConfluenceClient, SpaceProbe};

use crate::error::CliError;
use crate::output::Output;

/// Execute the health command.
///
/// # Errors
///
/// Returns [`CliError::Health`] for any configuration or connectivity
/// failure.
pub(crate) fn execute(output: &Output) -> Result<(), CliError> {
    let config = Config::from_env().map_err(|err| CliError::Health(err.to_string()))?;
    let client = ConfluenceClient::from_config(&config);

    check_auth(&client, output)?;

    match &config.space_key {
        Some(key) => check_space(&client, key, output)?,
        None => output.info("No CONFLUENCE_SPACE_KEY provided; using personal space behavior."),
    }

    Ok(())
}

fn check_auth(client: &ConfluenceClient, output: &Output) -> Result<(), CliError> {
    let probe = client
        .probe_auth()
        .map_err(|err| CliError::Health(format!("Confluence health check failed: {err}")))?;

    match probe {
        AuthProbe::Ok { url } => {
            output.success(&format!("Confluence auth looks good ({url})"));
            Ok(())
        }
        AuthProbe::Denied { status } => Err(CliError::Health(format!(
            "Confluence authentication failed (HTTP {status}).\n\
             Likely causes:\n\
             - CONFLUENCE_TOKEN expired/revoked\n\
             - Token/user mismatch\n\
             - Token lacks permissions\n\n\
             Fix: generate a new token and update CONFLUENCE_TOKEN."
        ))),
        AuthProbe::NoEndpoint { tried } => Err(CliError::Health(format!(
            "Could not verify Confluence API endpoints.\nTried:\n- {}\n\n\
             Your CONFLUENCE_API_URL may be incorrect. It should usually end with /wiki/rest/api.",
            tried.join("\n- ")
        ))),
        AuthProbe::Unexpected { url, status, body } => Err(CliError::Health(format!(
            "Confluence health check got unexpected status {status} for {url}: {body}"
        ))),
    }
}

fn check_space(client: &ConfluenceClient, key: &str, output: &Output) -> Result<(), CliError> {
    let probe = client
        .probe_space(key)
        .map_err(|err| CliError::Health(format!("Confluence health check failed: {err}")))?;

    match probe {
        SpaceProbe::Ok => {
            output.success(&format!("Space '{key}' is accessible."));
            Ok(())
        }
        SpaceProbe::Missing => {
            // Non-fatal: build-map will create the space or fall back
            // to the personal space.
            output.warning(&format!(
                "Space '{key}' not found. The sync will attempt to create it (requires \
                 permissions) or fall back to your personal space."
            ));
            Ok(())
        }
        SpaceProbe::Denied { status } => Err(CliError::Health(format!(
            "Auth ok, but cannot access space '{key}' (HTTP {status}).\n\
             Your token/user may not have access to this space."
        ))),
        SpaceProbe::Unexpected { status, body } => Err(CliError::Health(format!(
            "Unexpected status {status} while checking space '{key}': {body}"
        ))),
    }
}
