//! Markdown loading: derive a page title and HTML body from a file.

use std::path::Path;

use pulldown_cmark::{Parser, html};

use crate::error::SyncError;

/// A markdown file reduced to its page title and rendered body.
#[derive(Debug, Clone)]
pub struct Document {
    /// Derived page title.
    pub title: String,
    /// Full markdown content rendered to HTML.
    pub html: String,
}

impl Document {
    /// Load a markdown file from disk.
    ///
    /// # Errors
    ///
    /// Returns [`SyncError::MarkdownNotFound`] if the path does not
    /// exist.
    pub fn load(path: &Path) -> Result<Self, SyncError> {
        if !path.exists() {
            return Err(SyncError::MarkdownNotFound(path.to_path_buf()));
        }
        let text = std::fs::read_to_string(path)?;
        Ok(Self::from_markdown(path, &text))
    }

    /// Build a document from already-read markdown text.
    ///
    /// Title precedence: the first line if it is a level-1 heading,
    /// else the filename stem with `_`/`-` replaced by spaces and
    /// title-cased. An empty file falls through to the filename rule.
    #[must_use]
    pub fn from_markdown(path: &Path, text: &str) -> Self {
        Self {
            title: derive_title(path, text),
            html: render_html(text),
        }
    }
}

fn derive_title(path: &Path, text: &str) -> String {
    let first_line = text.lines().next().unwrap_or("").trim();
    if let Some(heading) = first_line.strip_prefix("# ") {
        return heading.trim().to_owned();
    }

    let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or("");
    title_case(&stem.replace(['_', '-'], " "))
}

fn render_html(text: &str) -> String {
    let parser = Parser::new(text);
    let mut out = String::with_capacity(text.len() * 2);
    html::push_html(&mut out, parser);
    out
}

/// Uppercase the first letter of every word, lowercase the rest.
///
/// A word starts after any non-alphabetic character, so `excel_tips`
/// (after separator replacement) becomes `Excel Tips` and `sql-101`
/// becomes `Sql 101`.
#[must_use]
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_word_start = true;
    for c in text.chars() {
        if c.is_alphabetic() {
            if at_word_start {
                out.extend(c.to_uppercase());
                at_word_start = false;
            } else {
                out.extend(c.to_lowercase());
            }
        } else {
            out.push(c);
            at_word_start = true;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_title_from_h1() {
        let doc = Document::from_markdown(Path::new("excel.md"), "# Excel Tips\n\nBody text.");
        assert_eq!(doc.title, "Excel Tips");
    }

    #[test]
    fn test_title_from_h1_trims_whitespace() {
        let doc = Document::from_markdown(Path::new("x.md"), "#   Title X  \ncontent");
        assert_eq!(doc.title, "Title X");
    }

    #[test]
    fn test_title_from_filename_when_no_h1() {
        let doc = Document::from_markdown(Path::new("docs/excel_tips.md"), "Just some text.");
        assert_eq!(doc.title, "Excel Tips");
    }

    #[test]
    fn test_title_from_filename_with_dashes() {
        let doc = Document::from_markdown(Path::new("mock-interview.md"), "intro");
        assert_eq!(doc.title, "Mock Interview");
    }

    #[test]
    fn test_empty_file_falls_through_to_filename() {
        let doc = Document::from_markdown(Path::new("sql_basics.md"), "");
        assert_eq!(doc.title, "Sql Basics");
        assert_eq!(doc.html, "");
    }

    #[test]
    fn test_h2_is_not_a_title() {
        let doc = Document::from_markdown(Path::new("notes.md"), "## Section\ntext");
        assert_eq!(doc.title, "Notes");
    }

    #[test]
    fn test_body_renders_basic_markdown() {
        let doc = Document::from_markdown(
            Path::new("x.md"),
            "# Heading\n\nSome *emphasis* and a [link](https://example.com).",
        );
        assert!(doc.html.contains("<h1>Heading</h1>"));
        assert!(doc.html.contains("<em>emphasis</em>"));
        assert!(doc.html.contains(r#"<a href="https://example.com">link</a>"#));
    }

    #[test]
    fn test_title_case_mixed_input() {
        assert_eq!(title_case("excel tips"), "Excel Tips");
        assert_eq!(title_case("myFILE name"), "Myfile Name");
        assert_eq!(title_case("sql 101"), "Sql 101");
    }

    #[test]
    fn test_load_missing_file() {
        let err = Document::load(Path::new("/nonexistent/file.md")).unwrap_err();
        assert!(matches!(err, SyncError::MarkdownNotFound(_)));
    }
}
