//! Content document model.
//!
//! A [`ContentDocument`] is one markdown source (post or page) with its
//! front matter decoded into typed fields and its body kept verbatim.
//!
//! # Example
//!
//! ```ignore
//! let doc = ContentDocument::parse("posts/hello", "---\ntitle: Hello\ndate: 2024-08-10\n---\nHi")?;
//! assert_eq!(doc.doc_type, DocType::Post);
//! ```

mod error;
pub mod frontmatter;
pub mod loader;

pub use error::ParseError;
pub use loader::{Loaded, load_documents};

use crate::utils::{date::parse_timestamp, slug::with_slug};
use chrono::{DateTime, FixedOffset};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// Marker separating a hand-written summary from the rest of the body.
pub const SUMMARY_DIVIDER: &str = "<!--more-->";

/// Reading speed used for `reading_time`.
const WORDS_PER_MINUTE: usize = 213;

/// Top-level sections whose documents are posts unless `type` says otherwise.
const POST_SECTIONS: &[&str] = &["posts", "post", "blog"];

/// Kind of content document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DocType {
    /// Dated entry listed in the chronological feed
    Post,
    /// Standalone page such as an about or résumé page
    Page,
}

impl DocType {
    /// Resolve the front matter `type` value (case-insensitive).
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "post" | "posts" => Some(Self::Post),
            "page" | "pages" => Some(Self::Page),
            _ => None,
        }
    }

    /// Type implied by the top-level section of a logical path.
    pub fn for_path(path: &str) -> Self {
        let section = path.split('/').next().unwrap_or_default();
        if POST_SECTIONS.contains(&section) {
            Self::Post
        } else {
            Self::Page
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Post => "post",
            Self::Page => "page",
        }
    }
}

/// One parsed source document. Immutable once loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentDocument {
    /// Unique logical path, e.g. `posts/solana-intro`
    pub path: String,
    pub title: String,
    /// Publication time; always present for posts
    pub date: Option<DateTime<FixedOffset>>,
    pub lastmod: Option<DateTime<FixedOffset>>,
    pub description: Option<String>,
    pub tags: BTreeSet<String>,
    pub doc_type: DocType,
    /// Manual sort key, lower first
    pub weight: i64,
    pub show_table_of_contents: bool,
    pub draft: bool,
    /// Front matter keys not interpreted here
    pub extra: BTreeMap<String, serde_json::Value>,
    /// Raw markup, opaque to the index
    pub body: String,
}

impl ContentDocument {
    /// Parse a document located at logical `path` from its raw text.
    ///
    /// A `slug` key in the front matter replaces the last path segment.
    /// The document type comes from `type`, falling back to the section
    /// of `path`.
    pub fn parse(path: impl Into<String>, raw: &str) -> Result<Self, ParseError> {
        let path = path.into();
        let split = frontmatter::split(raw)?;
        let fm = frontmatter::decode(split.format, split.metadata)?;

        let title = fm
            .title
            .map(|t| t.trim().to_owned())
            .filter(|t| !t.is_empty())
            .ok_or(ParseError::MissingRequiredField("title"))?;

        let doc_type = match fm.doc_type {
            Some(name) => DocType::from_name(&name).ok_or(ParseError::InvalidValue {
                field: "type",
                value: name,
            })?,
            None => DocType::for_path(&path),
        };

        let date = parse_date_field("date", fm.date)?;
        if doc_type == DocType::Post && date.is_none() {
            return Err(ParseError::MissingRequiredField("date"));
        }
        let lastmod = parse_date_field("lastmod", fm.lastmod)?;

        let tags = fm
            .tags
            .into_vec()
            .into_iter()
            .map(|tag| tag.trim().to_owned())
            .filter(|tag| !tag.is_empty())
            .collect();

        let path = match fm.slug.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
            Some(slug) => with_slug(&path, slug),
            None => path,
        };

        Ok(Self {
            path,
            title,
            date,
            lastmod,
            description: fm.description.filter(|d| !d.trim().is_empty()),
            tags,
            doc_type,
            weight: fm.weight.unwrap_or_default(),
            show_table_of_contents: fm.show_table_of_contents,
            draft: fm.draft,
            extra: fm.extra,
            body: split.body.to_owned(),
        })
    }

    pub fn is_post(&self) -> bool {
        self.doc_type == DocType::Post
    }

    /// Whether the document is dated after `now`.
    pub fn is_future(&self, now: &DateTime<FixedOffset>) -> bool {
        self.date.is_some_and(|date| date > *now)
    }

    /// Text before the `<!--more-->` divider, or else the description.
    pub fn summary(&self) -> Option<&str> {
        if let Some((before, _)) = self.body.split_once(SUMMARY_DIVIDER) {
            let before = before.trim();
            if !before.is_empty() {
                return Some(before);
            }
        }
        self.description.as_deref()
    }

    pub fn word_count(&self) -> usize {
        self.body.split_whitespace().count()
    }

    /// Estimated reading time in whole minutes, at least one.
    pub fn reading_time(&self) -> usize {
        self.word_count().div_ceil(WORDS_PER_MINUTE).max(1)
    }
}

fn parse_date_field(
    field: &'static str,
    value: Option<String>,
) -> Result<Option<DateTime<FixedOffset>>, ParseError> {
    match value {
        None => Ok(None),
        Some(text) => parse_timestamp(&text)
            .map(Some)
            .ok_or(ParseError::InvalidValue { field, value: text }),
    }
}
