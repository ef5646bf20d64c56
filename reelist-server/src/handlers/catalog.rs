//! Catalog request handling: adapt the addon URL contract onto the query
//! engine and wrap the result in the `{ "metas": [...] }` envelope.

use crate::{
    AppState,
    errors::{AppError, AppResult},
    manifest::catalog_id,
};
use axum::{
    extract::{Path, State},
    response::Json,
};
use reelist_core::{
    CatalogQuery, MAX_CATALOG_PAGE, SortField, SortOrder, query_catalog,
};
use reelist_model::{CatalogType, MetaPreview};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Listing response envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogResponse {
    pub metas: Vec<MetaPreview>,
}

/// Parameters decoded from the catalog URL's extra segment.
///
/// Every field recovers from malformed input with its default: a bad
/// `skip` becomes 0, an unknown sort label becomes `Default`, anything
/// but an exact `"Ascending"` stays descending.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ExtraParams {
    pub skip: usize,
    pub year: Option<String>,
    pub sort_field: SortField,
    pub sort_order: SortOrder,
}

impl ExtraParams {
    /// Parse an `&`-separated `key=value` list. The router has already
    /// percent-decoded the segment, so labels like `Title A-Z` arrive
    /// with their spaces restored.
    pub fn parse(extra: &str) -> Self {
        let mut params = Self::default();
        for pair in extra.split('&').filter(|p| !p.is_empty()) {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            match key {
                "skip" => params.skip = value.parse().unwrap_or(0),
                "year" if !value.is_empty() => {
                    params.year = Some(value.to_string());
                }
                "sortField" => {
                    params.sort_field = SortField::from_label(value);
                }
                "sortOrder" => {
                    params.sort_order = SortOrder::from_label(value);
                }
                _ => {}
            }
        }
        params
    }
}

pub async fn catalog_handler(
    State(state): State<AppState>,
    Path((kind, id)): Path<(String, String)>,
) -> AppResult<Json<CatalogResponse>> {
    serve_catalog(&state, &kind, id.trim_end_matches(".json"), "")
}

pub async fn catalog_extra_handler(
    State(state): State<AppState>,
    Path((kind, id, extra)): Path<(String, String, String)>,
) -> AppResult<Json<CatalogResponse>> {
    serve_catalog(&state, &kind, &id, extra.trim_end_matches(".json"))
}

fn serve_catalog(
    state: &AppState,
    kind: &str,
    id: &str,
    extra: &str,
) -> AppResult<Json<CatalogResponse>> {
    let Some(media_type) = CatalogType::from_path_segment(kind) else {
        return Err(AppError::not_found(format!(
            "unknown catalog type: {kind}"
        )));
    };

    // The addon contract routes unknown catalog ids to an empty listing.
    if id != catalog_id(media_type) {
        return Ok(Json(CatalogResponse { metas: Vec::new() }));
    }

    let params = ExtraParams::parse(extra);
    info!(
        %media_type,
        year = ?params.year,
        sort_field = %params.sort_field,
        sort_order = %params.sort_order,
        skip = params.skip,
        "catalog query"
    );

    let query = CatalogQuery {
        skip: params.skip,
        // Force single-page responses regardless of client paging.
        limit: MAX_CATALOG_PAGE,
        year: params.year,
        sort_field: params.sort_field,
        sort_order: params.sort_order,
    };

    let metas = query_catalog(state.store.items(media_type), media_type, &query);
    info!(%media_type, returning = metas.len(), "catalog response");
    Ok(Json(CatalogResponse { metas }))
}
