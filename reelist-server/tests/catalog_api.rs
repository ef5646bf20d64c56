//! End-to-end tests for the addon HTTP surface.

use axum_test::TestServer;
use reelist_core::CatalogStore;
use reelist_server::{
    AppState,
    handlers::catalog::CatalogResponse,
    manifest::{Manifest, build_manifest},
    routes::create_router,
};
use serde_json::json;

fn sample_store() -> CatalogStore {
    let movies = json!([
        {"title": "Alpha", "year": 2020, "imdb": "tt0000001", "imdbRating": "7.0"},
        {"title": "Beta", "year": "2019", "imdbRating": 9.1, "rt": "95"},
        {"title": "Gamma", "year": 2021, "imdbRating": "8.2"}
    ]);
    let series = json!([
        {"title": "Delta Show", "year": "2018", "id": 42}
    ]);

    CatalogStore::new(
        serde_json::from_value(movies).unwrap(),
        serde_json::from_value(series).unwrap(),
    )
}

fn test_server() -> TestServer {
    let store = sample_store();
    let manifest = build_manifest(&store);
    TestServer::new(create_router(AppState::new(store, manifest))).unwrap()
}

#[tokio::test]
async fn manifest_declares_catalogs_and_filter_options() {
    let server = test_server();

    let response = server.get("/manifest.json").await;
    response.assert_status_ok();

    let manifest: Manifest = response.json();
    assert_eq!(manifest.id, "community.reelist");
    assert_eq!(manifest.catalogs.len(), 2);

    let movie_catalog = &manifest.catalogs[0];
    assert_eq!(movie_catalog.id, "reelist_movies");
    // Sentinel first, then derived years descending.
    assert_eq!(
        movie_catalog.extra[0].options,
        ["Top", "2021", "2020", "2019"]
    );
}

#[tokio::test]
async fn plain_catalog_preserves_insertion_order() {
    let server = test_server();

    let response = server.get("/catalog/movie/reelist_movies.json").await;
    response.assert_status_ok();

    let body: CatalogResponse = response.json();
    let names: Vec<_> =
        body.metas.iter().filter_map(|m| m.name.as_deref()).collect();
    assert_eq!(names, ["Alpha", "Beta", "Gamma"]);
}

#[tokio::test]
async fn imdb_sort_descending_then_ascending() {
    let server = test_server();

    let response = server
        .get("/catalog/movie/reelist_movies/sortField=IMDb.json")
        .await;
    let body: CatalogResponse = response.json();
    let names: Vec<_> =
        body.metas.iter().filter_map(|m| m.name.as_deref()).collect();
    assert_eq!(names, ["Beta", "Gamma", "Alpha"]);

    let response = server
        .get("/catalog/movie/reelist_movies/sortField=IMDb&sortOrder=Ascending.json")
        .await;
    let body: CatalogResponse = response.json();
    let names: Vec<_> =
        body.metas.iter().filter_map(|m| m.name.as_deref()).collect();
    assert_eq!(names, ["Alpha", "Gamma", "Beta"]);
}

#[tokio::test]
async fn title_sort_label_with_encoded_space() {
    let server = test_server();

    // Without an explicit sortOrder the descending default applies, and
    // Title A-Z under descending order is the reversed alphabetical list.
    let response = server
        .get("/catalog/movie/reelist_movies/sortField=Title%20A-Z.json")
        .await;
    let body: CatalogResponse = response.json();
    let names: Vec<_> =
        body.metas.iter().filter_map(|m| m.name.as_deref()).collect();
    assert_eq!(names, ["Gamma", "Beta", "Alpha"]);

    let response = server
        .get("/catalog/movie/reelist_movies/sortField=Title%20A-Z&sortOrder=Ascending.json")
        .await;
    let body: CatalogResponse = response.json();
    let names: Vec<_> =
        body.metas.iter().filter_map(|m| m.name.as_deref()).collect();
    assert_eq!(names, ["Alpha", "Beta", "Gamma"]);
}

#[tokio::test]
async fn year_filter_matches_text_and_numeric_storage() {
    let server = test_server();

    // "Beta" stores its year as the string "2019".
    let response = server
        .get("/catalog/movie/reelist_movies/year=2019.json")
        .await;
    let body: CatalogResponse = response.json();
    assert_eq!(body.metas.len(), 1);
    assert_eq!(body.metas[0].name.as_deref(), Some("Beta"));

    // "Gamma" stores its year as the number 2021.
    let response = server
        .get("/catalog/movie/reelist_movies/year=2021.json")
        .await;
    let body: CatalogResponse = response.json();
    assert_eq!(body.metas.len(), 1);
    assert_eq!(body.metas[0].name.as_deref(), Some("Gamma"));
}

#[tokio::test]
async fn sentinel_year_returns_everything() {
    let server = test_server();

    let response = server
        .get("/catalog/movie/reelist_movies/year=Top.json")
        .await;
    let body: CatalogResponse = response.json();
    assert_eq!(body.metas.len(), 3);
}

#[tokio::test]
async fn skip_offsets_into_the_listing() {
    let server = test_server();

    let response = server
        .get("/catalog/movie/reelist_movies/skip=2.json")
        .await;
    let body: CatalogResponse = response.json();
    let names: Vec<_> =
        body.metas.iter().filter_map(|m| m.name.as_deref()).collect();
    assert_eq!(names, ["Gamma"]);
}

#[tokio::test]
async fn identifier_resolution_follows_precedence() {
    let server = test_server();

    let response = server.get("/catalog/movie/reelist_movies.json").await;
    let body: CatalogResponse = response.json();

    // External id for Alpha, slug+year for the id-less Beta and Gamma.
    assert_eq!(body.metas[0].id, "tt0000001");
    assert_eq!(body.metas[1].id, "beta-2019");
    assert_eq!(body.metas[2].id, "gamma-2021");

    let response = server.get("/catalog/series/reelist_series.json").await;
    let body: CatalogResponse = response.json();
    // Local id fallback for the series entry.
    assert_eq!(body.metas[0].id, "42");
    assert_eq!(body.metas[0].release_info.as_deref(), Some("2018"));
}

#[tokio::test]
async fn unknown_catalog_id_returns_empty_metas() {
    let server = test_server();

    let response = server.get("/catalog/movie/other_catalog.json").await;
    response.assert_status_ok();

    let body: CatalogResponse = response.json();
    assert!(body.metas.is_empty());
}

#[tokio::test]
async fn unknown_catalog_type_is_not_found() {
    let server = test_server();

    let response = server.get("/catalog/channel/reelist_movies.json").await;
    assert_eq!(response.status_code(), 404);
}

#[tokio::test]
async fn empty_store_serves_empty_catalogs() {
    let store = CatalogStore::default();
    let manifest = build_manifest(&store);
    let server =
        TestServer::new(create_router(AppState::new(store, manifest)))
            .unwrap();

    let response = server.get("/catalog/movie/reelist_movies.json").await;
    response.assert_status_ok();
    let body: CatalogResponse = response.json();
    assert!(body.metas.is_empty());

    let manifest_response = server.get("/manifest.json").await;
    let manifest: Manifest = manifest_response.json();
    // No derived years, just the sentinel.
    assert_eq!(manifest.catalogs[0].extra[0].options, ["Top"]);
}
