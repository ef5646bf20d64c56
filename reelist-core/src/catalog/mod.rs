//! The immutable catalog snapshot shared by every query.

use crate::query::derived_years;
use reelist_model::{CatalogType, ItemRecord};

/// Both item collections plus their derived year sets.
///
/// Built once at process start and read-only thereafter; queries borrow
/// from it and clone what they need, so concurrent requests can share one
/// instance behind an `Arc` without locking. A future hot-reload must
/// install a whole new store rather than mutate this one in place.
#[derive(Debug, Clone, Default)]
pub struct CatalogStore {
    movies: Vec<ItemRecord>,
    series: Vec<ItemRecord>,
    movie_years: Vec<String>,
    series_years: Vec<String>,
}

impl CatalogStore {
    /// Build a store from the two loaded collections, computing each
    /// collection's year filter options up front.
    pub fn new(movies: Vec<ItemRecord>, series: Vec<ItemRecord>) -> Self {
        let movie_years = derived_years(&movies);
        let series_years = derived_years(&series);
        Self {
            movies,
            series,
            movie_years,
            series_years,
        }
    }

    /// The item collection for one catalog kind, in insertion order.
    pub fn items(&self, kind: CatalogType) -> &[ItemRecord] {
        match kind {
            CatalogType::Movie => &self.movies,
            CatalogType::Series => &self.series,
        }
    }

    /// Distinct years present in one collection, descending.
    pub fn years(&self, kind: CatalogType) -> &[String] {
        match kind {
            CatalogType::Movie => &self.movie_years,
            CatalogType::Series => &self.series_years,
        }
    }
}
