//! Consumer-facing snapshot of the model surface.
//! Prefer importing from this module instead of individual tree nodes when
//! working in the engine or server crates.

pub use super::catalog_type::CatalogType;
pub use super::item::{ItemRecord, LocalId, ScoreValue, YearValue};
pub use super::meta::MetaPreview;
