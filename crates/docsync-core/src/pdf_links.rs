//! Downloadable-PDF section generator for the README.
//!
//! Purely local: scans a directory for PDF files and rewrites one
//! named README section with a link per file. Idempotent for unchanged
//! directory contents.

use std::path::{Path, PathBuf};

use regex::{NoExpand, Regex};

use crate::error::SyncError;
use crate::markdown::title_case;

/// Header of the README section this module owns.
pub const SECTION_HEADER: &str = "## 📥 Downloadable PDFs";

const SECTION_INTRO: &str = "The following PDF resources are available for download:";

/// Options for a README update run.
#[derive(Debug, Clone)]
pub struct PdfLinkOptions {
    /// Directory scanned for `.pdf` files.
    pub pdf_dir: PathBuf,
    /// README file whose section is rewritten.
    pub readme: PathBuf,
    /// Base URL prefixed to each link; defaults to the directory path.
    pub base_url: Option<String>,
}

/// What a README update run did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadmeUpdate {
    /// Section written (replaced or appended).
    Updated,
    /// No PDF files found; README left untouched.
    NoPdfs,
}

/// Rewrite the README's PDF section from the directory contents.
///
/// # Errors
///
/// Returns [`SyncError::ReadmeNotFound`] when the README is missing,
/// or an IO error from reading the directory or writing the file.
pub fn update_readme(options: &PdfLinkOptions) -> Result<ReadmeUpdate, SyncError> {
    if !options.readme.exists() {
        return Err(SyncError::ReadmeNotFound(options.readme.clone()));
    }

    let base_url = options
        .base_url
        .clone()
        .unwrap_or_else(|| options.pdf_dir.to_string_lossy().into_owned());

    let Some(section) = generate_section(&options.pdf_dir, &base_url)? else {
        return Ok(ReadmeUpdate::NoPdfs);
    };

    let content = std::fs::read_to_string(&options.readme)?;
    std::fs::write(&options.readme, splice_section(&content, &section))?;
    Ok(ReadmeUpdate::Updated)
}

/// Render the full section, or `None` when the directory holds no PDFs.
pub fn generate_section(pdf_dir: &Path, base_url: &str) -> Result<Option<String>, SyncError> {
    let files = pdf_files(pdf_dir)?;
    if files.is_empty() {
        return Ok(None);
    }

    let mut lines = vec![format!("{SECTION_HEADER}\n"), format!("{SECTION_INTRO}\n")];
    for file in files {
        let stem = Path::new(&file)
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or(&file);
        let title = title_case(&stem.replace('_', " "));
        let url = format!(
            "{}/{}",
            base_url.trim_end_matches('/'),
            file.replace(' ', "%20")
        );
        lines.push(format!(r#"- <a href="{url}">{title} (PDF)</a>"#));
    }

    Ok(Some(lines.join("\n")))
}

/// Replace an existing section in place, or append one.
fn splice_section(content: &str, section: &str) -> String {
    // The section runs until the next H2 heading or end of file.
    let pattern = Regex::new(&format!(
        r"(?s){}.*?(?=\n## |\z)",
        regex::escape(SECTION_HEADER)
    ))
    .unwrap();

    if pattern.is_match(content) {
        pattern.replace(content, NoExpand(section)).into_owned()
    } else {
        format!("{}\n\n{section}", content.trim_end())
    }
}

/// PDF filenames in the directory, sorted. Extension match is
/// case-insensitive; stored names keep their original case.
fn pdf_files(dir: &Path) -> Result<Vec<String>, SyncError> {
    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        let is_pdf = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"));
        if !is_pdf {
            continue;
        }
        if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
            files.push(name.to_owned());
        }
    }
    files.sort();
    Ok(files)
}
