//! `[markup]` section configuration.
//!
//! Only the table-of-contents bounds are read; the rest of the section
//! belongs to the renderer and is ignored here.
//!
//! # Example
//! ```toml
//! [markup.tableOfContents]
//! startLevel = 2
//! endLevel = 4
//! ordered = false
//! ```

use super::{defaults, error::ConfigError};
use educe::Educe;
use serde::{Deserialize, Serialize};

/// Highest heading level markdown can express.
const MAX_HEADING_LEVEL: u8 = 6;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkupConfig {
    #[serde(default)]
    pub table_of_contents: TocLevels,
}

/// Heading levels included in a generated table of contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(rename_all = "camelCase")]
pub struct TocLevels {
    #[serde(default = "defaults::markup::toc::start_level")]
    #[educe(Default = defaults::markup::toc::start_level())]
    pub start_level: u8,

    #[serde(default = "defaults::markup::toc::end_level")]
    #[educe(Default = defaults::markup::toc::end_level())]
    pub end_level: u8,

    #[serde(default)]
    pub ordered: bool,
}

impl TocLevels {
    /// Require `1 <= start_level <= end_level <= 6`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.start_level == 0
            || self.start_level > self.end_level
            || self.end_level > MAX_HEADING_LEVEL
        {
            return Err(ConfigError::InvalidField(
                "markup.tableOfContents".into(),
            ));
        }
        Ok(())
    }
}
