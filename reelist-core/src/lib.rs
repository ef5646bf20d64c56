//! Catalog query engine for the Reelist addon.
//!
//! The engine is a pure pipeline over an in-memory item collection:
//! year filtering, field sorting with direction control, offset/count
//! pagination, and projection into the wire metadata shape. It holds no
//! state of its own; the immutable [`CatalogStore`] is built once at
//! startup and passed in by reference.
//!
//! Nothing in here can fail: every malformed field degrades to a safe
//! default (0 for numbers, empty string for text, absent for optionals)
//! independently of the other records in the collection.

pub mod catalog;
pub mod query;

pub use catalog::CatalogStore;
pub use query::{
    CatalogQuery, MAX_CATALOG_PAGE, SortField, SortOrder, YEAR_SHOW_ALL,
    derived_years, query_catalog, resolve_meta_id,
};
