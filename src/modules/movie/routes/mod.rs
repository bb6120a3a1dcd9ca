mod get;
mod list;

use crate::types::Context;
use axum::{
    extract::OriginalUri,
    response::Redirect,
    routing::{get, Router},
};
use std::sync::Arc;

/// Sends `/movies` and `/movies/:id` on to their canonical slash-terminated
/// paths, query string included.
async fn append_trailing_slash(OriginalUri(uri): OriginalUri) -> Redirect {
    let location = match uri.query() {
        Some(query) => format!("{}/?{}", uri.path(), query),
        None => format!("{}/", uri.path()),
    };

    Redirect::temporary(&location)
}

pub fn get_router() -> Router<Arc<Context>> {
    Router::new()
        .merge(list::get_router())
        .merge(get::get_router())
        .route("/movies", get(append_trailing_slash))
        .route("/movies/:id", get(append_trailing_slash))
}

#[cfg(test)]
mod tests;
