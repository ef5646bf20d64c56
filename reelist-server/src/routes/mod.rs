use crate::{AppState, handlers};
use axum::{Router, routing::get};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Assemble the addon router.
///
/// CORS is fully open: addon clients fetch the manifest and catalogs
/// cross-origin from arbitrary hosts.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/manifest.json", get(handlers::manifest::manifest_handler))
        .route(
            "/catalog/{kind}/{id}",
            get(handlers::catalog::catalog_handler),
        )
        .route(
            "/catalog/{kind}/{id}/{extra}",
            get(handlers::catalog::catalog_extra_handler),
        )
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
