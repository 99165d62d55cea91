//! `[menu]` section and social links.
//!
//! # Example
//! ```toml
//! [[menu.main]]
//! identifier = "posts"
//! name = "Posts"
//! url = "/posts/"
//! weight = 10
//!
//! [params]
//! socialIcons = [
//!     { name = "github", url = "https://github.com/alice" },
//! ]
//! ```

use super::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Name of the primary navigation menu.
pub const MAIN_MENU: &str = "main";

/// One navigation entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,

    pub name: String,

    /// Target URL; `pageRef` is accepted as well.
    #[serde(default, alias = "pageRef")]
    pub url: String,

    /// Icon name; `pre` is accepted as well.
    #[serde(default, alias = "pre", skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,

    #[serde(default)]
    pub weight: i64,
}

/// Sort entries by weight, keeping source order for equal weights.
pub fn sort_menu(entries: &mut [MenuEntry]) {
    entries.sort_by_key(|entry| entry.weight);
}

/// A social profile link from `params.socialIcons`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialIcon {
    #[serde(alias = "name")]
    pub platform: String,
    pub url: String,
}

/// Read `params.socialIcons`, keeping its order. Absent means empty.
pub fn social_icons(params: &toml::Table) -> Result<Vec<SocialIcon>, ConfigError> {
    let Some(value) = params.get("socialIcons") else {
        return Ok(Vec::new());
    };

    Vec::<SocialIcon>::deserialize(value.clone())
        .map_err(|_| ConfigError::InvalidField("params.socialIcons".into()))
}
