//! `docsync pdf-links` command implementation.

use std::path::PathBuf;

use clap::Args;
use docsync_core::pdf_links::{PdfLinkOptions, ReadmeUpdate, update_readme};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the pdf-links command.
#[derive(Args)]
pub(crate) struct PdfLinksArgs {
    /// Directory scanned for PDF files.
    #[arg(long, default_value = "resources")]
    dir: PathBuf,

    /// README file whose PDF section is rewritten.
    #[arg(long, default_value = "README.md")]
    readme: PathBuf,

    /// Base URL prefixed to each link (defaults to the directory path).
    #[arg(long)]
    base_url: Option<String>,
}

impl PdfLinksArgs {
    /// Execute the pdf-links command.
    ///
    /// # Errors
    ///
    /// Returns an error if the README is missing or the directory
    /// cannot be read.
    pub(crate) fn execute(self, output: &Output) -> Result<(), CliError> {
        let options = PdfLinkOptions {
            pdf_dir: self.dir,
            readme: self.readme,
            base_url: self.base_url,
        };

        match update_readme(&options)? {
            ReadmeUpdate::Updated => {
                output.success(&format!(
                    "{} updated with PDF links from {}",
                    options.readme.display(),
                    options.pdf_dir.display()
                ));
            }
            ReadmeUpdate::NoPdfs => {
                output.warning("No PDF files found. Skipping update.");
            }
        }
        Ok(())
    }
}
