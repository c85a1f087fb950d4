//! Shared content model for the boothkit site services
//!
//! Everything the site renders has a compiled-in default. A remote content
//! document may override any subset of sections; this crate owns the section
//! registry, the wire payload shapes, the merge rules, and the defaults
//! table. No I/O happens here.

pub mod defaults;
pub mod document;
pub mod error;
pub mod merge;
pub mod model;
pub mod payload;
pub mod section;

pub use defaults::{defaults, DefaultContent};
pub use document::ContentDocument;
pub use error::{Error, Result};
pub use model::{ContentView, SiteContent};
pub use payload::{HeadedPayload, SectionPayload};
pub use section::Section;
