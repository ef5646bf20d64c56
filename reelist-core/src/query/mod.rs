//! The filter → sort → paginate → project pipeline.

pub mod sorting;
pub mod types;


pub use types::{
    CatalogQuery, MAX_CATALOG_PAGE, SortField, SortOrder, YEAR_SHOW_ALL,
};

use reelist_model::{CatalogType, ItemRecord, LocalId, MetaPreview};
use tracing::trace;

/// Run one catalog query against an item collection.
///
/// Pure function of its inputs: the source collection is never mutated
/// (filtering and sorting operate on a cloned working vector), and no
/// malformed field in any single record can fail the query — each one
/// degrades to its default independently.
pub fn query_catalog(
    items: &[ItemRecord],
    media_type: CatalogType,
    query: &CatalogQuery,
) -> Vec<MetaPreview> {
    let mut working: Vec<ItemRecord> = match query.year_filter() {
        Some(year) => items
            .iter()
            .filter(|item| {
                item.year_string().is_some_and(|stored| stored == year)
            })
            .cloned()
            .collect(),
        None => items.to_vec(),
    };

    sorting::sort_items(&mut working, query.sort_field, query.sort_order);

    trace!(
        total = items.len(),
        matched = working.len(),
        skip = query.skip,
        "catalog query pipeline"
    );

    working
        .iter()
        .skip(query.skip)
        .take(query.limit)
        .enumerate()
        .map(|(index, item)| project(item, media_type, query.skip + index))
        .collect()
}

/// Distinct parseable years in a collection, descending, stringified.
/// Used to populate the year filter options.
pub fn derived_years(items: &[ItemRecord]) -> Vec<String> {
    let mut years: Vec<i32> =
        items.iter().filter_map(ItemRecord::year_number).collect();
    years.sort_unstable_by(|a, b| b.cmp(a));
    years.dedup();
    years.iter().map(ToString::to_string).collect()
}

/// Resolve the identifier for one projected record.
///
/// Precedence: a `tt`-prefixed external id, then the stringified local id,
/// then a title slug joined with the year string, then a positional
/// fallback that is unique within the page (`position` is `skip + index`).
pub fn resolve_meta_id(item: &ItemRecord, position: usize) -> String {
    if let Some(imdb) = item.imdb.as_deref()
        && imdb.starts_with("tt")
    {
        return imdb.to_string();
    }
    if let Some(local) = item
        .id
        .as_ref()
        .map(LocalId::as_string)
        .filter(|id| !id.is_empty())
    {
        return local;
    }
    if let Some(title) = item.title.as_deref() {
        let year = item.year_string().unwrap_or_default();
        return format!("{}-{}", slugify(title), year);
    }
    format!("noid-{position}")
}

fn project(
    item: &ItemRecord,
    media_type: CatalogType,
    position: usize,
) -> MetaPreview {
    MetaPreview {
        id: resolve_meta_id(item, position),
        media_type,
        name: item.title.clone(),
        poster: item.poster.clone().unwrap_or_default(),
        description: item.description.clone().unwrap_or_default(),
        release_info: item.year_string().filter(|y| !y.is_empty()),
        year: item.year_number(),
    }
}

/// Lower-case the title and collapse every run of non-alphanumeric
/// characters (including anything outside ASCII) into a single separator.
fn slugify(title: &str) -> String {
    let lower = title.to_lowercase();
    let mut slug = String::with_capacity(lower.len());
    let mut in_separator = false;
    for c in lower.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c);
            in_separator = false;
        } else if !in_separator {
            slug.push('-');
            in_separator = true;
        }
    }
    slug
}
