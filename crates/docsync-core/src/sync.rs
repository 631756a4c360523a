//! Sync engine: bootstrap a space from local docs, push single files.

use std::path::{Path, PathBuf};

use docsync_config::Config;
use docsync_confluence::is_ignored_title;
use tracing::{info, warn};

use crate::error::SyncError;
use crate::markdown::Document;
use crate::page_map::{PageMap, PageMapStore, resolve_title};
use crate::remote::WikiClient;
use crate::space::SpaceResolver;

/// Result of a build-map run.
#[derive(Debug)]
pub struct BuildMapOutcome {
    /// Space the run targeted.
    pub space_key: String,
    /// The saved title → id map.
    pub pages: PageMap,
    /// Whether the bootstrap path ran (empty local map or empty space).
    pub bootstrapped: bool,
}

/// Result of a single-file push.
#[derive(Debug)]
pub struct PushOutcome {
    /// Canonical page title the content went to.
    pub title: String,
    /// Remote page id.
    pub page_id: String,
    /// Whether the page had to be created first.
    pub created: bool,
    /// Version number after the content update.
    pub new_version: u32,
}

/// One-way markdown → wiki sync.
pub struct SyncEngine<'a, C> {
    client: &'a C,
    config: &'a Config,
    store: PageMapStore,
}

impl<'a, C: WikiClient> SyncEngine<'a, C> {
    /// Create an engine over a client, config, and page map store.
    pub fn new(client: &'a C, config: &'a Config, store: PageMapStore) -> Self {
        Self {
            client,
            config,
            store,
        }
    }

    /// Reconcile the local page map with the remote space.
    ///
    /// Lists the remote pages, and when either the local map or the
    /// remote listing is empty, bootstraps missing pages from
    /// `docs_dir`. The resulting map is always saved.
    pub fn build_map(&self, docs_dir: &Path) -> Result<BuildMapOutcome, SyncError> {
        let space_key = SpaceResolver::new(self.client, self.config).resolve()?;
        let mut pages = self.client.list_pages(&space_key)?;

        let existing_map = self.store.load();
        let bootstrapped = existing_map.is_empty() || pages.is_empty();
        if bootstrapped {
            info!("Bootstrapping pages from {} (page map or space is empty)", docs_dir.display());
            pages = self.bootstrap(docs_dir, &space_key, pages)?;
        }

        self.store.save(&pages)?;
        Ok(BuildMapOutcome {
            space_key,
            pages,
            bootstrapped,
        })
    }

    /// Ensure a page exists for every markdown file in `docs_dir`.
    ///
    /// Files are processed in filename order. A file whose derived
    /// title matches an ignored title is skipped, as is any title
    /// already known (any casing) — bootstrap creates missing pages,
    /// it never overwrites existing content. Returns the combined map.
    ///
    /// Two files deriving the same title are last-write-wins within a
    /// single pass.
    pub fn bootstrap(
        &self,
        docs_dir: &Path,
        space_key: &str,
        known: PageMap,
    ) -> Result<PageMap, SyncError> {
        if !docs_dir.exists() {
            warn!("Docs dir not found: {}", docs_dir.display());
            return Ok(known);
        }

        let md_files = markdown_files(docs_dir)?;
        if md_files.is_empty() {
            warn!("No markdown files found in {}. Nothing to bootstrap.", docs_dir.display());
            return Ok(known);
        }

        let mut pages = known;
        for md_file in md_files {
            let doc = Document::load(&md_file)?;

            if is_ignored_title(&doc.title) {
                info!("Skipping ignored markdown: {}", md_file.display());
                continue;
            }

            if resolve_title(&pages, &doc.title).is_some() {
                continue;
            }

            let id = self.client.create_page(space_key, &doc.title, &doc.html, None)?;
            pages.insert(doc.title, id);
        }

        Ok(pages)
    }

    /// Push one markdown file to its page, creating the page first if
    /// the map does not know the title.
    ///
    /// A newly created mapping entry is persisted before the content
    /// update, so it survives even if the update step fails. The
    /// update always runs — re-pushing unchanged content still bumps
    /// the version, but never creates a duplicate page.
    pub fn push(&self, md_path: &Path) -> Result<PushOutcome, SyncError> {
        let doc = Document::load(md_path)?;
        let mut map = self.store.load();

        let (title, page_id, created) = match resolve_title(&map, &doc.title) {
            // Adopt the canonical casing already stored remotely.
            Some((canonical, id)) => (canonical.to_owned(), id.to_owned(), false),
            None => {
                let space_key = SpaceResolver::new(self.client, self.config).resolve()?;
                let id = self
                    .client
                    .create_page(&space_key, &doc.title, &doc.html, None)?;
                map.insert(doc.title.clone(), id.clone());
                self.store.save(&map)?;
                info!("Created missing page '{}' and updated the page map", doc.title);
                (doc.title.clone(), id, true)
            }
        };

        let new_version = self.client.update_page(&page_id, &title, &doc.html)?;
        Ok(PushOutcome {
            title,
            page_id,
            created,
            new_version,
        })
    }
}

fn markdown_files(dir: &Path) -> Result<Vec<PathBuf>, SyncError> {
    let pattern = dir.join("*.md");
    let mut files: Vec<PathBuf> = glob::glob(&pattern.to_string_lossy())?
        .filter_map(Result::ok)
        .collect();
    files.sort();
    Ok(files)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    use docsync_config::Config;

    use crate::remote::fake::FakeWiki;

    use super::*;

    fn test_config(space_key: Option<&str>) -> Config {
        Config {
            api_url: "https://example.atlassian.net/wiki/rest/api".to_owned(),
            user: "me@example.com".to_owned(),
            token: "secret".to_owned(),
            space_key: space_key.map(str::to_owned),
            space_name: None,
        }
    }

    fn write_doc(dir: &Path, name: &str, content: &str) {
        std::fs::write(dir.join(name), content).unwrap();
    }

    struct Fixture {
        wiki: FakeWiki,
        config: Config,
        dir: TempDir,
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                wiki: FakeWiki::with_space("DOCS", "global"),
                config: test_config(Some("DOCS")),
                dir: TempDir::new().unwrap(),
            }
        }

        fn engine(&self) -> SyncEngine<'_, FakeWiki> {
            let store = PageMapStore::new(self.dir.path().join("page_map.json"));
            SyncEngine::new(&self.wiki, &self.config, store)
        }

        fn docs_dir(&self) -> PathBuf {
            let docs = self.dir.path().join("docs");
            std::fs::create_dir_all(&docs).unwrap();
            docs
        }
    }

    #[test]
    fn test_bootstrap_creates_all_non_ignored_pages() {
        let fx = Fixture::new();
        let docs = fx.docs_dir();
        write_doc(&docs, "excel_tips.md", "# Excel Tips\n\ncontent");
        write_doc(&docs, "sql.md", "select stuff");
        write_doc(&docs, "overview.md", "# Overview\n\nignored");

        let outcome = fx.engine().build_map(&docs).unwrap();

        assert!(outcome.bootstrapped);
        assert_eq!(outcome.pages.len(), 2);
        assert!(outcome.pages.contains_key("Excel Tips"));
        assert!(outcome.pages.contains_key("Sql"));
        assert_eq!(fx.wiki.page_count(), 2);
    }

    #[test]
    fn test_bootstrap_skips_existing_titles_any_casing() {
        let fx = Fixture::new();
        let existing_id = fx.wiki.add_page("DOCS", "EXCEL TIPS", "old body");
        let docs = fx.docs_dir();
        write_doc(&docs, "excel_tips.md", "# Excel Tips\n\nnew body");

        let outcome = fx.engine().build_map(&docs).unwrap();

        // No second page, and the existing content is untouched.
        assert_eq!(fx.wiki.page_count(), 1);
        assert_eq!(fx.wiki.page(&existing_id).unwrap().body, "old body");
        assert_eq!(
            outcome.pages.get("EXCEL TIPS"),
            Some(&existing_id)
        );
    }

    #[test]
    fn test_build_map_without_bootstrap_when_both_sides_populated() {
        let fx = Fixture::new();
        fx.wiki.add_page("DOCS", "Known", "body");
        let docs = fx.docs_dir();
        write_doc(&docs, "unknown.md", "# Unknown\n\nbody");

        let engine = fx.engine();
        // Pre-populate the local map so neither side is empty.
        let store = PageMapStore::new(fx.dir.path().join("page_map.json"));
        let mut map = PageMap::new();
        map.insert("Known".to_owned(), "1".to_owned());
        store.save(&map).unwrap();

        let outcome = engine.build_map(&docs).unwrap();

        assert!(!outcome.bootstrapped);
        assert_eq!(fx.wiki.page_count(), 1, "no pages created");
    }

    #[test]
    fn test_bootstrap_missing_docs_dir_returns_map_unchanged() {
        let fx = Fixture::new();
        let id = fx.wiki.add_page("DOCS", "Known", "body");

        let outcome = fx
            .engine()
            .build_map(&fx.dir.path().join("no-such-docs"))
            .unwrap();

        assert_eq!(outcome.pages.get("Known"), Some(&id));
    }

    #[test]
    fn test_push_creates_then_updates() {
        let fx = Fixture::new();
        let docs = fx.docs_dir();
        let md = docs.join("excel.md");
        std::fs::write(&md, "# Excel\n\nbody").unwrap();

        let outcome = fx.engine().push(&md).unwrap();

        assert!(outcome.created);
        // Created at version 1, then the mandatory update bumps to 2.
        assert_eq!(outcome.new_version, 2);
        assert_eq!(fx.wiki.page_count(), 1);

        // The new id must be persisted in the map.
        let store = PageMapStore::new(fx.dir.path().join("page_map.json"));
        assert_eq!(store.load().get("Excel"), Some(&outcome.page_id));
    }

    #[test]
    fn test_push_twice_is_idempotent_on_creation() {
        let fx = Fixture::new();
        let docs = fx.docs_dir();
        let md = docs.join("excel.md");
        std::fs::write(&md, "# Excel\n\nbody").unwrap();

        let engine = fx.engine();
        let first = engine.push(&md).unwrap();
        let second = engine.push(&md).unwrap();

        assert!(first.created);
        assert!(!second.created);
        assert_eq!(fx.wiki.page_count(), 1, "exactly one page created");
        // Every push updates content: one version bump per invocation.
        assert_eq!(first.new_version, 2);
        assert_eq!(second.new_version, 3);
    }

    #[test]
    fn test_push_case_variant_reuses_existing_page() {
        let fx = Fixture::new();
        let id = fx.wiki.add_page("DOCS", "Excel", "old");
        let store = PageMapStore::new(fx.dir.path().join("page_map.json"));
        let mut map = PageMap::new();
        map.insert("Excel".to_owned(), id.clone());
        store.save(&map).unwrap();

        let docs = fx.docs_dir();
        let md = docs.join("excel.md");
        std::fs::write(&md, "# excel\n\nfresh content").unwrap();

        let outcome = fx.engine().push(&md).unwrap();

        assert!(!outcome.created);
        assert_eq!(outcome.page_id, id);
        // Canonical casing from the map is preserved on the page.
        assert_eq!(outcome.title, "Excel");
        assert_eq!(fx.wiki.page(&id).unwrap().title, "Excel");
        assert_eq!(fx.wiki.page_count(), 1);
    }

    #[test]
    fn test_push_missing_file_fails() {
        let fx = Fixture::new();
        let err = fx
            .engine()
            .push(&fx.dir.path().join("missing.md"))
            .unwrap_err();
        assert!(matches!(err, SyncError::MarkdownNotFound(_)));
    }

    #[test]
    fn test_push_without_explicit_space_uses_personal() {
        let wiki = FakeWiki::with_space("~me", "personal");
        let config = test_config(None);
        let dir = TempDir::new().unwrap();
        let store = PageMapStore::new(dir.path().join("page_map.json"));
        let engine = SyncEngine::new(&wiki, &config, store);

        let md = dir.path().join("notes.md");
        std::fs::write(&md, "# Notes\n\nbody").unwrap();

        let outcome = engine.push(&md).unwrap();

        assert!(outcome.created);
        let page = wiki.page(&outcome.page_id).unwrap();
        assert_eq!(page.space, "~me");
    }
}
