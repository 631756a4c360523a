//! `docsync push` command implementation.

use std::path::PathBuf;

use clap::Args;
use docsync_config::Config;
use docsync_confluence::ConfluenceClient;
use docsync_core::{PageMapStore, SyncEngine};

use crate::error::CliError;
use crate::output::Output;

use super::DEFAULT_PAGE_MAP;

/// Arguments for the push command.
#[derive(Args)]
pub(crate) struct PushArgs {
    /// Path to the markdown file.
    markdown_file: PathBuf,

    /// Path of the page map file.
    #[arg(long, default_value = DEFAULT_PAGE_MAP)]
    page_map: PathBuf,
}

impl PushArgs {
    /// Execute the push command.
    ///
    /// # Errors
    ///
    /// Returns an error if the file does not exist or any remote call
    /// fails.
    pub(crate) fn execute(self, output: &Output) -> Result<(), CliError> {
        let config = Config::from_env()?;
        let client = ConfluenceClient::from_config(&config);
        let store = PageMapStore::new(&self.page_map);
        let engine = SyncEngine::new(&client, &config, store);

        let outcome = engine.push(&self.markdown_file)?;

        if outcome.created {
            output.info(&format!(
                "Created missing page '{}' and updated the page map",
                outcome.title
            ));
        }
        output.success(&format!(
            "Synced '{}' successfully (version {})",
            outcome.title, outcome.new_version
        ));
        Ok(())
    }
}
