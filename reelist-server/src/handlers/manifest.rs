use crate::{AppState, manifest::Manifest};
use axum::{extract::State, response::Json};

pub async fn manifest_handler(State(state): State<AppState>) -> Json<Manifest> {
    Json(state.manifest.as_ref().clone())
}
