use super::{
    service::service,
    types::{request, response},
};
use crate::{types::Context, utils::pagination::Pagination};
use axum::extract::State;
use std::sync::Arc;

pub async fn handler(pagination: Pagination, State(ctx): State<Arc<Context>>) -> response::Response {
    service(ctx, request::Payload { pagination }).await
}
