//! Content directory loading.
//!
//! Walks the content directory, parses every markdown file and applies the
//! publication filters (`buildDrafts`, `buildFuture`).

use super::ContentDocument;
use crate::{
    config::SiteConfig,
    utils::slug::{is_content_file, logical_path},
};
use anyhow::{Context, Result, bail};
use chrono::{DateTime, FixedOffset};
use std::{
    fs,
    path::{Path, PathBuf},
};
use walkdir::{DirEntry, WalkDir};

/// Documents accepted for the build, plus what the filters held back.
#[derive(Debug, Default)]
pub struct Loaded {
    pub documents: Vec<ContentDocument>,
    /// Drafts skipped because `buildDrafts` is off
    pub drafts: usize,
    /// Future-dated documents skipped because `buildFuture` is off
    pub future: usize,
}

/// Hidden files and directories (`.git`, `.DS_Store`, ...) are not content.
fn is_hidden(entry: &DirEntry) -> bool {
    entry.depth() > 0
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| name.starts_with('.'))
}

/// Collect markdown files under `dir`, in file-name order.
pub fn collect_content_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    let walker = WalkDir::new(dir)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| !is_hidden(e));

    for entry in walker {
        let entry = entry.with_context(|| format!("Failed to walk {}", dir.display()))?;
        if entry.file_type().is_file() && is_content_file(entry.path()) {
            files.push(entry.into_path());
        }
    }

    Ok(files)
}

/// Load every document under `content_dir`.
///
/// Fails on the first unreadable or invalid file, naming it. `now` decides
/// which documents count as future-dated.
pub fn load_documents(
    content_dir: &Path,
    config: &SiteConfig,
    now: &DateTime<FixedOffset>,
) -> Result<Loaded> {
    if !content_dir.is_dir() {
        bail!("Content directory not found: {}", content_dir.display());
    }

    let mut loaded = Loaded::default();

    for source in collect_content_files(content_dir)? {
        let path = logical_path(&source, content_dir)?;
        let raw = fs::read_to_string(&source)
            .with_context(|| format!("Failed to read {}", source.display()))?;
        let doc = ContentDocument::parse(path, &raw)
            .with_context(|| format!("Invalid document {}", source.display()))?;

        if doc.draft && !config.build_drafts {
            loaded.drafts += 1;
        } else if doc.is_future(now) && !config.build_future {
            loaded.future += 1;
        } else {
            loaded.documents.push(doc);
        }
    }

    Ok(loaded)
}
