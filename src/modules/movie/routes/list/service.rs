use super::types::{request, response};
use crate::{modules::movie::repository, types::Context, utils::pagination::Paginated};
use std::sync::Arc;
use validator::Validate;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let pagination = payload.pagination;

    pagination.validate().map_err(|errors| {
        tracing::warn!("Failed to validate pagination: {errors}");
        response::Error::FailedToValidate(errors)
    })?;

    let total_items = repository::count(&ctx.db_conn.pool)
        .await
        .map_err(|_| response::Error::FailedToFetchMovies)?;

    let movies = repository::find_many(&ctx.db_conn.pool, pagination.limit(), pagination.offset())
        .await
        .map_err(|_| response::Error::FailedToFetchMovies)?;

    if movies.is_empty() {
        return Err(response::Error::NoMoviesFound);
    }

    let link_base = format!("{}/movies/", ctx.app.base_path);

    Ok(response::Success::Movies(Paginated::new(
        movies,
        total_items,
        &pagination,
        &link_base,
    )))
}
