//! Core sync pipeline for docsync.
//!
//! One-way, idempotent push of local markdown files to Confluence
//! pages, tracked through a local title → page-id map:
//!
//! - [`PageMapStore`]: the JSON cache of known title → id bindings
//! - [`Document`]: a markdown file reduced to `(title, html)`
//! - [`SpaceResolver`]: ordered strategies picking the target space
//! - [`SyncEngine`]: bootstrap and single-file push operations
//! - [`pdf_links`]: the README downloadable-PDF section generator
//!
//! Remote calls go through the [`WikiClient`] trait so the engine can
//! be exercised against an in-memory fake in tests.

mod error;
pub use error::SyncError;

mod markdown;
pub use markdown::{Document, title_case};

mod page_map;
pub use page_map::{PageMap, PageMapStore, resolve_title};

pub mod pdf_links;

mod remote;
pub use remote::WikiClient;

mod space;
pub use space::{Resolution, SpaceResolver};

mod sync;
pub use sync::{BuildMapOutcome, PushOutcome, SyncEngine};
