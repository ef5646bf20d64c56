use crate::manifest::Manifest;
use reelist_core::CatalogStore;
use std::sync::Arc;

/// Shared application state: the immutable catalog snapshot plus the
/// manifest assembled from it at startup.
#[derive(Debug, Clone)]
pub struct AppState {
    pub store: Arc<CatalogStore>,
    pub manifest: Arc<Manifest>,
}

impl AppState {
    pub fn new(store: CatalogStore, manifest: Manifest) -> Self {
        Self {
            store: Arc::new(store),
            manifest: Arc::new(manifest),
        }
    }
}
