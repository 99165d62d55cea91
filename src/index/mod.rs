//! Collection index over all loaded documents.
//!
//! Built once per build, read-only afterwards.
//!
//! # Ordering
//!
//! Every ordered listing (the post feed, each tag bucket) uses the same total
//! order so rendering is deterministic:
//!
//! | Key    | Direction                           |
//! |--------|-------------------------------------|
//! | date   | newest first, undated documents last |
//! | weight | ascending                           |
//! | path   | ascending                           |

mod error;

pub use error::{IndexError, NotFoundError};

use crate::content::ContentDocument;
use chrono::{DateTime, Datelike, FixedOffset};
use rustc_hash::FxHashMap;
use std::{cmp::Ordering, collections::BTreeMap};

/// Compare two optional dates for sorting (newest first).
///
/// Items with dates come before items without dates.
fn compare_dates(
    a: &Option<DateTime<FixedOffset>>,
    b: &Option<DateTime<FixedOffset>>,
) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => b.cmp(a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Listing order: date descending, weight ascending, path ascending.
pub fn compare_documents(a: &ContentDocument, b: &ContentDocument) -> Ordering {
    compare_dates(&a.date, &b.date)
        .then_with(|| a.weight.cmp(&b.weight))
        .then_with(|| a.path.cmp(&b.path))
}

/// Posts adjacent to a document in the feed.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Neighbors<'a> {
    pub newer: Option<&'a ContentDocument>,
    pub older: Option<&'a ContentDocument>,
}

/// Validated collection with its derived indexes.
///
/// Documents are stored once; the indexes hold positions into that storage.
#[derive(Debug)]
pub struct CollectionIndex {
    documents: Vec<ContentDocument>,
    by_path: FxHashMap<String, usize>,
    /// Master feed order
    posts: Vec<usize>,
    /// Path order
    pages: Vec<usize>,
    /// Alphabetical by tag, each bucket in feed order
    tags: BTreeMap<String, Vec<usize>>,
}

impl CollectionIndex {
    /// Validate and index `documents`.
    ///
    /// Fails with [`IndexError::DuplicatePath`] on the first path seen twice.
    pub fn build(documents: Vec<ContentDocument>) -> Result<Self, IndexError> {
        let mut by_path = FxHashMap::default();
        by_path.reserve(documents.len());
        for (i, doc) in documents.iter().enumerate() {
            if by_path.insert(doc.path.clone(), i).is_some() {
                return Err(IndexError::DuplicatePath(doc.path.clone()));
            }
        }

        let by_order = |a: &usize, b: &usize| compare_documents(&documents[*a], &documents[*b]);

        let (mut posts, mut pages): (Vec<usize>, Vec<usize>) =
            (0..documents.len()).partition(|&i| documents[i].is_post());
        posts.sort_by(by_order);
        pages.sort_by(|a, b| documents[*a].path.cmp(&documents[*b].path));

        let mut tags: BTreeMap<String, Vec<usize>> = BTreeMap::new();
        for (i, doc) in documents.iter().enumerate() {
            for tag in &doc.tags {
                tags.entry(tag.clone()).or_default().push(i);
            }
        }
        for bucket in tags.values_mut() {
            bucket.sort_by(by_order);
        }

        Ok(Self {
            documents,
            by_path,
            posts,
            pages,
            tags,
        })
    }

    fn resolve(&self, positions: &[usize]) -> Vec<&ContentDocument> {
        positions.iter().map(|&i| &self.documents[i]).collect()
    }

    /// Documents carrying `tag`, in listing order. Unknown tags yield an
    /// empty list.
    pub fn by_tag(&self, tag: &str) -> Vec<&ContentDocument> {
        self.tags
            .get(tag)
            .map(|bucket| self.resolve(bucket))
            .unwrap_or_default()
    }

    /// All posts, newest first.
    pub fn all_posts(&self) -> Vec<&ContentDocument> {
        self.resolve(&self.posts)
    }

    /// All pages, by path.
    pub fn all_pages(&self) -> Vec<&ContentDocument> {
        self.resolve(&self.pages)
    }

    pub fn by_path(&self, path: &str) -> Result<&ContentDocument, NotFoundError> {
        self.by_path
            .get(path)
            .map(|&i| &self.documents[i])
            .ok_or_else(|| NotFoundError(path.to_owned()))
    }

    /// Tag names with their document counts, alphabetical.
    pub fn tags(&self) -> impl Iterator<Item = (&str, usize)> {
        self.tags
            .iter()
            .map(|(tag, bucket)| (tag.as_str(), bucket.len()))
    }

    /// Posts dated strictly before `instant`, newest first.
    pub fn posts_before(&self, instant: &DateTime<FixedOffset>) -> Vec<&ContentDocument> {
        self.all_posts()
            .into_iter()
            .filter(|doc| doc.date.is_some_and(|date| date < *instant))
            .collect()
    }

    /// Posts dated strictly after `instant`, newest first.
    pub fn posts_after(&self, instant: &DateTime<FixedOffset>) -> Vec<&ContentDocument> {
        self.all_posts()
            .into_iter()
            .filter(|doc| doc.date.is_some_and(|date| date > *instant))
            .collect()
    }

    /// Posts grouped by publication year, newest year first.
    ///
    /// Years are read in UTC, the same clock the feed is ordered by, so
    /// each year forms exactly one group.
    pub fn posts_by_year(&self) -> Vec<(i32, Vec<&ContentDocument>)> {
        let mut groups: Vec<(i32, Vec<&ContentDocument>)> = Vec::new();
        for doc in self.all_posts() {
            let Some(year) = doc.date.map(|date| date.naive_utc().year()) else {
                continue;
            };
            match groups.last_mut() {
                Some((last, docs)) if *last == year => docs.push(doc),
                _ => groups.push((year, vec![doc])),
            }
        }
        groups
    }

    /// The newer and older posts next to `path` in the feed.
    ///
    /// Pages have no neighbors.
    pub fn neighbors(&self, path: &str) -> Result<Neighbors<'_>, NotFoundError> {
        let index = *self
            .by_path
            .get(path)
            .ok_or_else(|| NotFoundError(path.to_owned()))?;

        let Some(pos) = self.posts.iter().position(|&i| i == index) else {
            return Ok(Neighbors::default());
        };

        Ok(Neighbors {
            newer: pos
                .checked_sub(1)
                .map(|p| &self.documents[self.posts[p]]),
            older: self.posts.get(pos + 1).map(|&i| &self.documents[i]),
        })
    }

    /// Every document, in load order.
    pub fn iter(&self) -> impl Iterator<Item = &ContentDocument> {
        self.documents.iter()
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}
