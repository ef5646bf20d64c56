//! Addon manifest declaration.
//!
//! Built once at startup from the loaded store, since the year filter
//! options depend on the years actually present in each collection.

use reelist_core::{CatalogStore, SortField, SortOrder, YEAR_SHOW_ALL};
use reelist_model::CatalogType;
use serde::{Deserialize, Serialize};

/// The stable catalog id advertised for one catalog kind.
pub fn catalog_id(kind: CatalogType) -> &'static str {
    match kind {
        CatalogType::Movie => "reelist_movies",
        CatalogType::Series => "reelist_series",
    }
}

fn catalog_name(kind: CatalogType) -> &'static str {
    match kind {
        CatalogType::Movie => "Reelist Movies",
        CatalogType::Series => "Reelist Series",
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Manifest {
    pub id: String,
    pub version: String,
    pub name: String,
    pub description: String,
    pub resources: Vec<String>,
    pub types: Vec<String>,
    pub catalogs: Vec<CatalogDef>,
    pub id_prefixes: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogDef {
    #[serde(rename = "type")]
    pub media_type: CatalogType,
    pub id: String,
    pub name: String,
    pub extra: Vec<ExtraProp>,
    pub extra_supported: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtraProp {
    pub name: String,
    pub is_required: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options_limit: Option<u32>,
}

fn catalog_def(kind: CatalogType, years: &[String]) -> CatalogDef {
    let mut year_options = vec![YEAR_SHOW_ALL.to_string()];
    year_options.extend(years.iter().cloned());

    CatalogDef {
        media_type: kind,
        id: catalog_id(kind).to_string(),
        name: catalog_name(kind).to_string(),
        extra: vec![
            ExtraProp {
                name: "year".to_string(),
                is_required: false,
                options: year_options,
                options_limit: Some(200),
            },
            ExtraProp {
                name: "sortField".to_string(),
                is_required: false,
                options: SortField::all()
                    .iter()
                    .map(|f| f.label().to_string())
                    .collect(),
                options_limit: None,
            },
            ExtraProp {
                name: "sortOrder".to_string(),
                is_required: false,
                options: SortOrder::all()
                    .iter()
                    .map(|o| o.label().to_string())
                    .collect(),
                options_limit: None,
            },
        ],
        extra_supported: ["skip", "limit", "year", "sortField", "sortOrder"]
            .iter()
            .map(ToString::to_string)
            .collect(),
    }
}

/// Assemble the manifest for the current store contents.
pub fn build_manifest(store: &CatalogStore) -> Manifest {
    Manifest {
        id: "community.reelist".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        name: "Reelist".to_string(),
        description: "Hand-picked movies and series worth watching."
            .to_string(),
        resources: vec!["catalog".to_string()],
        types: CatalogType::all()
            .iter()
            .map(|t| t.as_str().to_string())
            .collect(),
        catalogs: CatalogType::all()
            .iter()
            .map(|kind| catalog_def(*kind, store.years(*kind)))
            .collect(),
        id_prefixes: vec!["tt".to_string(), "tmdb".to_string()],
    }
}
