//! Catalog source file loader.
//!
//! A missing or malformed file degrades to empty collections instead of
//! failing startup; the addon then serves empty catalogs.

use reelist_core::CatalogStore;
use reelist_model::{CatalogType, ItemRecord};
use serde::Deserialize;
use std::{fs, path::Path};
use tracing::{info, warn};

/// On-disk layout: one JSON object with two named lists.
#[derive(Debug, Default, Deserialize)]
pub struct CatalogFile {
    #[serde(default)]
    pub movies: Vec<ItemRecord>,
    #[serde(default)]
    pub series: Vec<ItemRecord>,
}

/// Read and parse the catalog file into an immutable store.
pub fn load_catalog(path: &Path) -> CatalogStore {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(err) => {
            warn!(path = %path.display(), %err, "catalog file unreadable, serving empty catalogs");
            return CatalogStore::default();
        }
    };

    let parsed: CatalogFile = match serde_json::from_str(&raw) {
        Ok(parsed) => parsed,
        Err(err) => {
            warn!(path = %path.display(), %err, "catalog file malformed, serving empty catalogs");
            return CatalogStore::default();
        }
    };

    let store = CatalogStore::new(parsed.movies, parsed.series);
    info!(
        movies = store.items(CatalogType::Movie).len(),
        series = store.items(CatalogType::Series).len(),
        path = %path.display(),
        "catalog loaded"
    );
    store
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_catalog(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn loads_both_lists_with_mixed_year_shapes() {
        let file = write_catalog(
            r#"{
                "movies": [
                    {"title": "A", "year": 2020, "imdbRating": "8.1"},
                    {"title": "B", "year": "2019"}
                ],
                "series": [
                    {"title": "S", "year": "2021", "rt": 92}
                ]
            }"#,
        );

        let store = load_catalog(file.path());

        assert_eq!(store.items(CatalogType::Movie).len(), 2);
        assert_eq!(store.items(CatalogType::Series).len(), 1);
        assert_eq!(store.years(CatalogType::Movie), ["2020", "2019"]);
    }

    #[test]
    fn missing_list_defaults_to_empty() {
        let file = write_catalog(r#"{"movies": [{"title": "A"}]}"#);

        let store = load_catalog(file.path());

        assert_eq!(store.items(CatalogType::Movie).len(), 1);
        assert!(store.items(CatalogType::Series).is_empty());
    }

    #[test]
    fn missing_file_degrades_to_empty_store() {
        let store = load_catalog(Path::new("/nonexistent/catalog.json"));

        assert!(store.items(CatalogType::Movie).is_empty());
        assert!(store.items(CatalogType::Series).is_empty());
    }

    #[test]
    fn malformed_json_degrades_to_empty_store() {
        let file = write_catalog("{not json");

        let store = load_catalog(file.path());

        assert!(store.items(CatalogType::Movie).is_empty());
    }
}
