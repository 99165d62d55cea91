//! Data types for the exported site data.
//!
//! These types are serialized to JSON and consumed by the renderer.

use crate::{
    config::{MenuEntry, RenderOptions, SiteConfig, SocialIcon, TocLevels},
    content::{ContentDocument, DocType},
    utils::date::stringify_toml_datetimes,
};
use serde::Serialize;
use std::collections::BTreeMap;

/// Metadata for a single document, exposed in `_data/pages.json`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageData {
    /// Logical path (e.g., "posts/hello-world")
    pub path: String,

    /// Absolute URL (e.g., "https://example.com/posts/hello-world/")
    pub url: String,

    pub title: String,

    #[serde(rename = "type")]
    pub doc_type: DocType,

    /// Publication date as RFC 3339 string
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,

    /// Last update date as RFC 3339 string
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lastmod: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,

    pub weight: i64,

    pub show_table_of_contents: bool,

    /// Minutes
    pub reading_time: usize,

    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub extra: BTreeMap<String, serde_json::Value>,

    /// Raw markup body
    pub body: String,
}

impl PageData {
    pub fn new(doc: &ContentDocument, config: &SiteConfig) -> Self {
        Self {
            path: doc.path.clone(),
            url: config.permalink(&doc.path),
            title: doc.title.clone(),
            doc_type: doc.doc_type,
            date: doc.date.map(|d| d.to_rfc3339()),
            lastmod: doc.lastmod.map(|d| d.to_rfc3339()),
            description: doc.description.clone(),
            summary: doc.summary().map(str::to_owned),
            tags: doc.tags.iter().cloned().collect(),
            weight: doc.weight,
            show_table_of_contents: doc.show_table_of_contents,
            reading_time: doc.reading_time(),
            extra: doc.extra.clone(),
            body: doc.body.clone(),
        }
    }
}

/// Tags index, exposed in `_data/tags.json`.
///
/// Sorted alphabetically by tag name.
pub type TagsIndex = BTreeMap<String, TagData>;

/// One tag listing page.
#[derive(Debug, Clone, Serialize)]
pub struct TagData {
    /// URL of the tag listing page
    pub url: String,

    /// Tagged documents in listing order
    pub pages: Vec<TaggedPage>,
}

/// A page reference within a tag index.
///
/// Contains minimal information for listing pages by tag.
#[derive(Debug, Clone, Serialize)]
pub struct TaggedPage {
    pub path: String,

    pub url: String,

    pub title: String,

    /// Publication date as RFC 3339 string
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

impl TaggedPage {
    pub fn new(doc: &ContentDocument, config: &SiteConfig) -> Self {
        Self {
            path: doc.path.clone(),
            url: config.permalink(&doc.path),
            title: doc.title.clone(),
            date: doc.date.map(|d| d.to_rfc3339()),
        }
    }
}

/// Site-wide settings, exposed in `_data/site.json`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteData {
    #[serde(rename = "baseURL")]
    pub base_url: String,

    pub title: String,

    pub language_code: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,

    pub enable_emoji: bool,

    #[serde(rename = "enableRobotsTXT")]
    pub enable_robots_txt: bool,

    pub menu: Vec<MenuEntry>,

    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub menus: BTreeMap<String, Vec<MenuEntry>>,

    pub social_icons: Vec<SocialIcon>,

    pub render_options: RenderOptions,

    pub table_of_contents: TocLevels,

    /// The `[params]` table, datetimes as RFC 3339 text
    pub params: toml::Table,
}

impl SiteData {
    pub fn new(config: &SiteConfig) -> Self {
        let mut params = config.params.clone();
        params
            .iter_mut()
            .for_each(|(_, value)| stringify_toml_datetimes(value));

        Self {
            base_url: config.base_url.clone(),
            title: config.title.clone(),
            language_code: config.language_code.clone(),
            theme: config.theme.clone(),
            enable_emoji: config.enable_emoji,
            enable_robots_txt: config.enable_robots_txt,
            menu: config.menu().to_vec(),
            menus: config.menus.clone(),
            social_icons: config.social_icons.clone(),
            render_options: config.render_options.clone(),
            table_of_contents: config.markup.table_of_contents,
            params,
        }
    }
}
