//! Default values for configuration fields.
//!
//! These functions are used by serde for default deserialization.

use std::path::PathBuf;

pub fn language_code() -> String {
    "en-us".into()
}

pub fn content_dir() -> PathBuf {
    "content".into()
}

pub fn publish_dir() -> PathBuf {
    "public".into()
}

/// Directory under `publishDir` receiving the exported data files.
pub fn data_dir() -> PathBuf {
    "_data".into()
}

// ============================================================================
// [markup] Section Defaults
// ============================================================================

pub mod markup {
    pub mod toc {
        pub fn start_level() -> u8 {
            2
        }

        pub fn end_level() -> u8 {
            3
        }
    }
}
