//! Site build orchestration.
//!
//! # Architecture
//!
//! ```text
//! build_site()
//!     │
//!     ├── build_index()
//!     │       │
//!     │       ├── load_documents() ──► parse every .md, drop drafts/future
//!     │       │
//!     │       └── CollectionIndex::build() ──► unique paths, tag index, feed
//!     │
//!     └── write_to_disk() ──► public/_data/{pages,tags,site}.json
//! ```
//!
//! The first error aborts the build; nothing is written for a partial site.

use crate::{
    config::SiteConfig,
    content::load_documents,
    data::write_to_disk,
    index::CollectionIndex,
    log,
};
use anyhow::Result;
use chrono::{DateTime, FixedOffset, Local};

/// Load and index all content, publication filters relative to now.
pub fn build_index(config: &SiteConfig) -> Result<CollectionIndex> {
    build_index_at(config, &Local::now().fixed_offset())
}

/// Load and index all content, treating `now` as the current time.
pub fn build_index_at(config: &SiteConfig, now: &DateTime<FixedOffset>) -> Result<CollectionIndex> {
    log!("content"; "loading {}", config.content_dir.display());
    let loaded = load_documents(&config.content_dir, config, now)?;

    if loaded.drafts > 0 {
        log!("content"; "skipped {} drafts", loaded.drafts);
    }
    if loaded.future > 0 {
        log!("content"; "skipped {} future-dated documents", loaded.future);
    }

    let index = CollectionIndex::build(loaded.documents)?;

    if index.is_empty() {
        log!("warn"; "no documents found, check if content has .md files");
    } else {
        log!(
            "index";
            "{} posts, {} pages, {} tags",
            index.all_posts().len(),
            index.all_pages().len(),
            index.tags().count()
        );
    }

    Ok(index)
}

/// Build the index and write the renderer's data files.
pub fn build_site(config: &SiteConfig) -> Result<CollectionIndex> {
    let index = build_index(config)?;

    let data_dir = config.data_dir();
    write_to_disk(&data_dir, &index, config)?;
    log!("export"; "wrote {}", data_dir.display());

    Ok(index)
}
