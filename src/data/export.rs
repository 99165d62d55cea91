//! Data files written for the renderer.
//!
//! | File              | Contents                                 |
//! |-------------------|------------------------------------------|
//! | `pages.json`      | Posts newest first, then pages by path   |
//! | `tags.json`       | Documents grouped by tag                 |
//! | `site.json`       | Validated site configuration             |

use super::types::{PageData, SiteData, TagData, TaggedPage, TagsIndex};
use crate::{config::SiteConfig, index::CollectionIndex};
use anyhow::{Context, Result};
use serde::Serialize;
use std::{fs, path::Path};

/// Names of the files produced by [`write_to_disk`].
pub const DATA_FILES: [&str; 3] = ["pages.json", "tags.json", "site.json"];

/// Every document: the post feed followed by pages.
pub fn pages(index: &CollectionIndex, config: &SiteConfig) -> Vec<PageData> {
    index
        .all_posts()
        .into_iter()
        .chain(index.all_pages())
        .map(|doc| PageData::new(doc, config))
        .collect()
}

/// Tag name to tag page URL and tagged documents.
pub fn tags(index: &CollectionIndex, config: &SiteConfig) -> TagsIndex {
    index
        .tags()
        .map(|(tag, _)| {
            let pages = index
                .by_tag(tag)
                .into_iter()
                .map(|doc| TaggedPage::new(doc, config))
                .collect();
            let data = TagData {
                url: config.tag_url(tag),
                pages,
            };
            (tag.to_owned(), data)
        })
        .collect()
}

/// Write all data files into `data_dir`, creating it if needed.
pub fn write_to_disk(data_dir: &Path, index: &CollectionIndex, config: &SiteConfig) -> Result<()> {
    fs::create_dir_all(data_dir)
        .with_context(|| format!("Failed to create {}", data_dir.display()))?;

    let [pages_file, tags_file, site_file] = DATA_FILES;
    write_json(&data_dir.join(pages_file), &pages(index, config))?;
    write_json(&data_dir.join(tags_file), &tags(index, config))?;
    write_json(&data_dir.join(site_file), &SiteData::new(config))?;

    Ok(())
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)
        .with_context(|| format!("Failed to serialize {}", path.display()))?;
    fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))
}
