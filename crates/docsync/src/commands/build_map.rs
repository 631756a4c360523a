//! `docsync build-map` command implementation.

use std::path::PathBuf;

use clap::Args;
use docsync_config::Config;
use docsync_confluence::ConfluenceClient;
use docsync_core::{PageMapStore, SyncEngine};

use crate::error::CliError;
use crate::output::Output;

use super::DEFAULT_PAGE_MAP;

/// Arguments for the build-map command.
#[derive(Args)]
pub(crate) struct BuildMapArgs {
    /// Directory containing markdown sources.
    #[arg(long, default_value = "docs")]
    docs_dir: PathBuf,

    /// Path of the page map file.
    #[arg(long, default_value = DEFAULT_PAGE_MAP)]
    page_map: PathBuf,
}

impl BuildMapArgs {
    /// Execute the build-map command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration is incomplete or any remote
    /// call fails; the run aborts on the first failure.
    pub(crate) fn execute(self, output: &Output) -> Result<(), CliError> {
        let config = Config::from_env()?;
        let client = ConfluenceClient::from_config(&config);
        let store = PageMapStore::new(&self.page_map);
        let engine = SyncEngine::new(&client, &config, store);

        let outcome = engine.build_map(&self.docs_dir)?;

        if outcome.bootstrapped {
            output.highlight(&format!(
                "Bootstrapped pages in '{}' from {} (page map or space was empty)",
                outcome.space_key,
                self.docs_dir.display()
            ));
        }
        output.success(&format!(
            "Saved page map with {} pages -> {}",
            outcome.pages.len(),
            self.page_map.display()
        ));
        Ok(())
    }
}
