use super::{
    service::service,
    types::{request, response},
};
use crate::types::Context;
use axum::extract::{rejection::PathRejection, Path, State};
use std::sync::Arc;

pub async fn handler(
    id: Result<Path<i64>, PathRejection>,
    State(ctx): State<Arc<Context>>,
) -> response::Response {
    let Path(id) = id.map_err(|rejection| {
        tracing::warn!("Rejected movie id: {}", rejection.body_text());
        response::Error::InvalidMovieId
    })?;

    service(ctx, request::Payload { id }).await
}
