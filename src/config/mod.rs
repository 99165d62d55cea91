//! Site configuration management for `hugo.toml`.
//!
//! # Sections
//!
//! | Key / Section              | Purpose                                     |
//! |----------------------------|---------------------------------------------|
//! | `baseURL`, `title`         | Required site identity                      |
//! | `languageCode`, `theme`    | Site metadata for the renderer              |
//! | `buildDrafts`, `buildFuture` | Publication filters for content loading   |
//! | `contentDir`, `publishDir` | Source and output directories               |
//! | `[params]`                 | Theme toggles, social icons, snippets       |
//! | `[[menu.<name>]]`          | Navigation menus                            |
//! | `[markup]`                 | Table-of-contents level bounds              |
//!
//! # Example
//!
//! ```toml
//! baseURL = "https://example.com/"
//! title = "My Blog"
//! languageCode = "en-us"
//!
//! [params]
//! showBackToTop = true
//!
//! [[menu.main]]
//! name = "Posts"
//! url = "/posts/"
//! weight = 10
//! ```
//!
//! The loaded [`SiteConfig`] is immutable for the rest of the build and is
//! passed explicitly to whatever consumes it.

pub mod defaults;
mod error;
mod markup;
mod menu;
mod params;

pub use error::ConfigError;
pub use markup::{MarkupConfig, TocLevels};
pub use menu::{MAIN_MENU, MenuEntry, SocialIcon};
pub use params::{RenderOptions, RenderValue};

use crate::{
    cli::Cli,
    utils::slug::{ROOT_PATH, slugify},
};
use educe::Educe;
use serde::Deserialize;
use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

/// Config file names tried in the site root, in order.
pub const CONFIG_FILE_CANDIDATES: [&str; 2] = ["hugo.toml", "config.toml"];

/// Top-level keys that must be non-blank strings.
const REQUIRED_FIELDS: [&str; 2] = ["baseURL", "title"];

/// Find the config file in `root`.
pub fn find_config(root: &Path) -> Option<PathBuf> {
    CONFIG_FILE_CANDIDATES
        .iter()
        .map(|name| root.join(name))
        .find(|path| path.is_file())
}

// ============================================================================
// Root Configuration
// ============================================================================

/// Root configuration structure representing `hugo.toml`.
#[derive(Debug, Clone, Educe, Deserialize)]
#[educe(Default)]
pub struct SiteConfig {
    /// Path of the config file (set after loading from disk)
    #[serde(skip)]
    pub config_path: PathBuf,

    #[serde(rename = "baseURL")]
    pub base_url: String,

    pub title: String,

    #[serde(rename = "languageCode", default = "defaults::language_code")]
    #[educe(Default = defaults::language_code())]
    pub language_code: String,

    #[serde(default)]
    pub theme: Option<String>,

    #[serde(rename = "enableEmoji", default)]
    pub enable_emoji: bool,

    #[serde(rename = "enableRobotsTXT", default)]
    pub enable_robots_txt: bool,

    /// Include documents marked `draft`
    #[serde(rename = "buildDrafts", default)]
    pub build_drafts: bool,

    /// Include documents dated in the future
    #[serde(rename = "buildFuture", default)]
    pub build_future: bool,

    #[serde(rename = "contentDir", default = "defaults::content_dir")]
    #[educe(Default = defaults::content_dir())]
    pub content_dir: PathBuf,

    #[serde(rename = "publishDir", default = "defaults::publish_dir")]
    #[educe(Default = defaults::publish_dir())]
    pub publish_dir: PathBuf,

    /// Named menus, each sorted by weight at load time
    #[serde(rename = "menu", alias = "menus", default)]
    pub menus: BTreeMap<String, Vec<MenuEntry>>,

    #[serde(default)]
    pub markup: MarkupConfig,

    /// The raw `[params]` table, carried through verbatim
    #[serde(default)]
    pub params: toml::Table,

    /// From `params.socialIcons`
    #[serde(skip)]
    pub social_icons: Vec<SocialIcon>,

    /// Flattened scalars of `params`
    #[serde(skip)]
    pub render_options: RenderOptions,

    /// Top-level keys not interpreted here
    #[serde(flatten)]
    pub extra: BTreeMap<String, toml::Value>,
}

impl SiteConfig {
    /// Parse and validate configuration from TOML text.
    ///
    /// `baseURL` and `title` are checked before anything else so a missing
    /// one is reported by name rather than as a generic decode error.
    pub fn load(content: &str) -> Result<Self, ConfigError> {
        let table: toml::Table = content.parse()?;

        for field in REQUIRED_FIELDS {
            match table.get(field) {
                Some(toml::Value::String(value)) if !value.trim().is_empty() => {}
                _ => return Err(ConfigError::InvalidField(field.into())),
            }
        }

        let mut config = Self::deserialize(toml::Value::Table(table))?;
        config.check_base_url()?;
        config.markup.table_of_contents.validate()?;

        for entries in config.menus.values_mut() {
            menu::sort_menu(entries);
        }
        config.social_icons = menu::social_icons(&config.params)?;
        config.render_options = params::render_options(&config.params);

        Ok(config)
    }

    /// Load configuration from file path
    pub fn from_path(path: &Path) -> anyhow::Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        let mut config = Self::load(&content)?;
        config.config_path = path.to_path_buf();
        Ok(config)
    }

    fn check_base_url(&self) -> Result<(), ConfigError> {
        let url = self.base_url.trim();
        if url.starts_with("http://") || url.starts_with("https://") {
            Ok(())
        } else {
            Err(ConfigError::InvalidField("baseURL".into()))
        }
    }

    /// The main navigation menu (empty when not configured).
    pub fn menu(&self) -> &[MenuEntry] {
        self.menus.get(MAIN_MENU).map(Vec::as_slice).unwrap_or_default()
    }

    /// Absolute URL of the document at logical `path`.
    ///
    /// ```ignore
    /// config.permalink("posts/hello") // "https://example.com/posts/hello/"
    /// config.permalink("index")       // "https://example.com/"
    /// ```
    pub fn permalink(&self, path: &str) -> String {
        let base = self.base_url.trim().trim_end_matches('/');
        if path == ROOT_PATH {
            format!("{base}/")
        } else {
            format!("{base}/{}/", path.trim_matches('/'))
        }
    }

    /// Absolute URL of the listing page for `tag`.
    pub fn tag_url(&self, tag: &str) -> String {
        self.permalink(&format!("tags/{}", slugify(tag)))
    }

    /// Directory receiving the exported data files.
    pub fn data_dir(&self) -> PathBuf {
        self.publish_dir.join(defaults::data_dir())
    }

    /// Apply CLI overrides and resolve directories against `root`.
    pub fn update_with_cli(&mut self, cli: &Cli, root: &Path) -> Result<(), ConfigError> {
        let filters = cli.filters();

        Self::update_option(&mut self.build_drafts, filters.drafts.as_ref());
        Self::update_option(&mut self.build_future, filters.future.as_ref());
        Self::update_option(&mut self.base_url, filters.base_url.as_ref());
        self.check_base_url()?;

        Self::update_option(&mut self.content_dir, cli.content.as_ref());
        Self::update_option(&mut self.publish_dir, cli.output.as_ref());

        self.content_dir = Self::normalize_path(&root.join(&self.content_dir));
        self.publish_dir = Self::normalize_path(&root.join(&self.publish_dir));

        Ok(())
    }

    /// Update config option if CLI value is provided
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    /// Normalize a path to absolute, using canonicalize if the path exists
    fn normalize_path(path: &Path) -> PathBuf {
        path.canonicalize().unwrap_or_else(|_| {
            if path.is_absolute() {
                path.to_path_buf()
            } else {
                std::env::current_dir()
                    .map(|cwd| cwd.join(path))
                    .unwrap_or_else(|_| path.to_path_buf())
            }
        })
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use tempfile::TempDir;

    const MINIMAL: &str = r#"
        baseURL = "https://example.com/"
        title = "Example"
    "#;

    const FULL: &str = r#"
        baseURL = "https://alice.dev/"
        title = "Alice's Notes"
        theme = "blowfish"
        languageCode = "en-gb"
        enableEmoji = true
        enableRobotsTXT = true
        paginate = 10

        [params]
        showBackToTop = true
        mathjax = '<script>MathJax = { tex: { inlineMath: [["$", "$"]] } };</script>'
        socialIcons = [
            { name = "github", url = "https://github.com/alice" },
            { name = "linkedin", url = "https://linkedin.com/in/alice" },
        ]

        [[menu.main]]
        identifier = "tags"
        name = "Tags"
        url = "/tags/"
        weight = 30

        [[menu.main]]
        identifier = "posts"
        name = "Posts"
        url = "/posts/"
        weight = 10
        pre = "book"

        [[menu.main]]
        identifier = "about"
        name = "About"
        url = "/about/"
        weight = 10

        [markup.tableOfContents]
        startLevel = 2
        endLevel = 4

        [markup.goldmark.renderer]
        unsafe = true
    "#;

    #[test]
    fn test_load_minimal() {
        let config = SiteConfig::load(MINIMAL).unwrap();

        assert_eq!(config.base_url, "https://example.com/");
        assert_eq!(config.title, "Example");
        assert_eq!(config.language_code, "en-us");
        assert!(config.theme.is_none());
        assert!(!config.build_drafts);
        assert!(config.menu().is_empty());
        assert!(config.social_icons.is_empty());
        assert_eq!(config.markup.table_of_contents, TocLevels::default());
        assert_eq!(config.content_dir, PathBuf::from("content"));
    }

    #[test]
    fn test_load_full() {
        let config = SiteConfig::load(FULL).unwrap();

        assert_eq!(config.theme.as_deref(), Some("blowfish"));
        assert_eq!(config.language_code, "en-gb");
        assert!(config.enable_emoji);
        assert!(config.enable_robots_txt);
        assert_eq!(config.markup.table_of_contents.end_level, 4);
        assert_eq!(config.render_options["showBackToTop"].as_bool(), Some(true));
        assert_eq!(
            config.extra.get("paginate").and_then(|v| v.as_integer()),
            Some(10)
        );

        let platforms: Vec<_> = config.social_icons.iter().map(|s| s.platform.as_str()).collect();
        assert_eq!(platforms, vec!["github", "linkedin"]);
    }

    #[test]
    fn test_menu_sorted_by_weight_stable() {
        let config = SiteConfig::load(FULL).unwrap();
        let names: Vec<_> = config.menu().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Posts", "About", "Tags"]);
        assert_eq!(config.menu()[0].icon.as_deref(), Some("book"));
    }

    #[test]
    fn test_snippet_kept_verbatim() {
        let config = SiteConfig::load(FULL).unwrap();
        let snippet = r#"<script>MathJax = { tex: { inlineMath: [["$", "$"]] } };</script>"#;
        assert_eq!(config.params.get("mathjax").and_then(|v| v.as_str()), Some(snippet));
        assert_eq!(config.render_options["mathjax"].as_str(), Some(snippet));
    }

    #[test]
    fn test_missing_base_url() {
        let err = SiteConfig::load(r#"title = "Example""#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidField(name) if name == "baseURL"));
    }

    #[test]
    fn test_missing_title() {
        let err = SiteConfig::load(r#"baseURL = "https://example.com/""#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidField(name) if name == "title"));
    }

    #[test]
    fn test_wrong_shape_required_fields() {
        let err = SiteConfig::load("baseURL = 42\ntitle = \"x\"").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidField(name) if name == "baseURL"));

        let err = SiteConfig::load("baseURL = \"https://a.b\"\ntitle = \"  \"").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidField(name) if name == "title"));

        let err = SiteConfig::load("baseURL = \"example.com\"\ntitle = \"x\"").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidField(name) if name == "baseURL"));
    }

    #[test]
    fn test_invalid_toc_levels() {
        let content = format!("{MINIMAL}\n[markup.tableOfContents]\nstartLevel = 4\nendLevel = 2\n");
        let err = SiteConfig::load(&content).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidField(name) if name == "markup.tableOfContents"));
    }

    #[test]
    fn test_invalid_toml() {
        let err = SiteConfig::load("baseURL = \n").unwrap_err();
        assert!(matches!(err, ConfigError::Toml(_)));
    }

    #[test]
    fn test_menu_entry_missing_name() {
        let content = format!("{MINIMAL}\n[[menu.main]]\nurl = \"/x/\"\n");
        let err = SiteConfig::load(&content).unwrap_err();
        assert!(matches!(err, ConfigError::Toml(_)));
    }

    #[test]
    fn test_other_menus_sorted() {
        let content = format!(
            "{MINIMAL}\n[[menu.footer]]\nname = \"B\"\nweight = 2\n[[menu.footer]]\nname = \"A\"\nweight = 1\n"
        );
        let config = SiteConfig::load(&content).unwrap();
        let footer: Vec<_> = config.menus["footer"].iter().map(|e| e.name.as_str()).collect();
        assert_eq!(footer, vec!["A", "B"]);
    }

    #[test]
    fn test_permalink() {
        let config = SiteConfig::load(MINIMAL).unwrap();
        assert_eq!(config.permalink("posts/hello"), "https://example.com/posts/hello/");
        assert_eq!(config.permalink("index"), "https://example.com/");
        assert_eq!(config.tag_url("Smart Contracts"), "https://example.com/tags/smart-contracts/");
    }

    #[test]
    fn test_from_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("hugo.toml");
        fs::write(&path, MINIMAL).unwrap();

        let config = SiteConfig::from_path(&path).unwrap();
        assert_eq!(config.config_path, path);
        assert_eq!(find_config(dir.path()), Some(path));
    }

    #[test]
    fn test_from_path_missing() {
        let dir = TempDir::new().unwrap();
        let err = SiteConfig::from_path(&dir.path().join("hugo.toml")).unwrap_err();
        assert!(format!("{err}").contains("IO error"));
        assert_eq!(find_config(dir.path()), None);
    }

    #[test]
    fn test_find_config_fallback() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("config.toml"), MINIMAL).unwrap();
        assert_eq!(find_config(dir.path()), Some(dir.path().join("config.toml")));
    }

    #[test]
    fn test_update_with_cli() {
        let dir = TempDir::new().unwrap();
        let cli = Cli::parse_from([
            "folio",
            "--content",
            "posts-src",
            "build",
            "--drafts",
            "--base-url",
            "https://staging.example.com",
        ]);

        let mut config = SiteConfig::load(MINIMAL).unwrap();
        config.update_with_cli(&cli, dir.path()).unwrap();

        assert!(config.build_drafts);
        assert!(!config.build_future);
        assert_eq!(config.base_url, "https://staging.example.com");
        assert!(config.content_dir.ends_with("posts-src"));
        assert!(config.content_dir.is_absolute());
        assert!(config.publish_dir.ends_with("public"));
        assert!(config.data_dir().ends_with("public/_data"));
    }

    #[test]
    fn test_update_with_cli_rejects_bad_base_url() {
        let cli = Cli::parse_from(["folio", "check", "--base-url", "not-a-url"]);
        let mut config = SiteConfig::load(MINIMAL).unwrap();
        let err = config.update_with_cli(&cli, Path::new(".")).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidField(name) if name == "baseURL"));
    }
}
