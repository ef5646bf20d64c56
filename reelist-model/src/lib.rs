//! Core data model definitions shared across Reelist crates.
#![allow(missing_docs)]

pub mod catalog_type;
pub mod item;
pub mod meta;
pub mod prelude;

// Intentionally curated re-exports for downstream consumers.
pub use catalog_type::CatalogType;
pub use item::{ItemRecord, LocalId, ScoreValue, YearValue};
pub use meta::MetaPreview;
