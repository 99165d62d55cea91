//! Folio - content model and index builder for a markdown static site.
//!
//! A build loads the site configuration and every content document once,
//! validates them, and builds a read-only [`index::CollectionIndex`]. The
//! index and configuration are then handed to an external renderer as JSON
//! data files.

pub mod build;
pub mod cli;
pub mod config;
pub mod content;
pub mod data;
pub mod index;
pub mod utils;
