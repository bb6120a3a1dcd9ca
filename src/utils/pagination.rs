use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::{request::Parts, StatusCode},
    response::{IntoResponse, Response},
    Json, RequestPartsExt,
};
use serde::Deserialize;
use serde_json::json;
use validator::Validate;

#[derive(Debug)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub total_items: i64,
    pub total_pages: i64,
    pub prev_page: Option<String>,
    pub next_page: Option<String>,
}

impl<T> Paginated<T> {
    /// Builds the page view; `link_base` is the path the page links point at,
    /// e.g. `/theater/movies/`.
    pub fn new(items: Vec<T>, total_items: i64, pagination: &Pagination, link_base: &str) -> Self {
        let total_pages = pagination.total_pages(total_items);

        let prev_page = match pagination.page > 1 {
            true => Some(pagination.link(link_base, pagination.page - 1)),
            false => None,
        };

        let next_page = match pagination.page < total_pages {
            true => Some(pagination.link(link_base, pagination.page + 1)),
            false => None,
        };

        Self {
            items,
            total_items,
            total_pages,
            prev_page,
            next_page,
        }
    }
}

#[derive(Deserialize, Validate, Clone, Debug)]
pub struct Pagination {
    #[serde(default = "default_page")]
    #[validate(range(min = 1, code = "INVALID_PAGE", message = "Page must be at least 1"))]
    pub page: i64,
    #[serde(default = "default_per_page")]
    #[validate(range(
        min = 1,
        max = 100,
        code = "INVALID_PER_PAGE",
        message = "Items per page must be between 1 and 100"
    ))]
    pub per_page: i64,
}

fn default_page() -> i64 {
    1
}

fn default_per_page() -> i64 {
    10
}

impl Pagination {
    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(self.per_page)
    }

    pub fn limit(&self) -> i64 {
        self.per_page
    }

    /// Zero when there is nothing to page through.
    pub fn total_pages(&self, total_items: i64) -> i64 {
        match total_items > 0 {
            true => (total_items + self.per_page - 1) / self.per_page,
            false => 0,
        }
    }

    pub fn link(&self, link_base: &str, page: i64) -> String {
        format!("{}?page={}&per_page={}", link_base, page, self.per_page)
    }
}

#[async_trait]
impl<S: Send + Sync> FromRequestParts<S> for Pagination {
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        match parts.extract::<Query<Pagination>>().await {
            Ok(Query(pagination)) => Ok(pagination),
            Err(rejection) => {
                tracing::warn!("Rejected pagination options: {}", rejection.body_text());
                Err((
                    StatusCode::UNPROCESSABLE_ENTITY,
                    Json(json!({ "error": "Invalid pagination options" })),
                )
                    .into_response())
            }
        }
    }
}
