use axum::{http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use serde_json::json;

use super::movie;
use crate::types::Context;
use std::sync::Arc;

async fn health_check() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(json!({ "message": "Welcome to the Theater API" })),
    )
}

/// Movie routes are mounted under `base_path`, which must already be
/// normalized (leading slash, no trailing slash, or empty).
pub fn get_router(base_path: &str) -> Router<Arc<Context>> {
    let router = Router::new().route("/", get(health_check));

    match base_path.is_empty() {
        true => router.merge(movie::get_router()),
        false => router.nest(base_path, movie::get_router()),
    }
}
