//! Site data hand-off to the renderer.
//!
//! After the index is built and the configuration validated, both are
//! serialized into JSON data files that the (external) theme renderer reads.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐   ┌──────────────────┐   ┌───────────────────────────┐
//! │ SiteConfig   │──►│                  │   │ public/_data/pages.json   │
//! │ (validated)  │   │ export::write_   │──►│ public/_data/tags.json    │
//! │ Collection-  │──►│   to_disk()      │   │ public/_data/site.json    │
//! │ Index        │   │                  │   └───────────────────────────┘
//! └──────────────┘   └──────────────────┘
//! ```
//!
//! Nothing is written unless the whole build validated.

pub mod export;
pub mod types;

pub use export::write_to_disk;
