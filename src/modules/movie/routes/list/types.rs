pub mod request {
    use crate::utils::pagination::Pagination;

    pub struct Payload {
        pub pagination: Pagination,
    }
}

pub mod response {
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;
    use validator::ValidationErrors;

    use crate::{
        modules::movie::repository::Movie,
        utils::{pagination::Paginated, validation},
    };

    pub enum Success {
        Movies(Paginated<Movie>),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::Movies(page) => (
                    StatusCode::OK,
                    Json(json!({
                        "movies": page.items,
                        "total_items": page.total_items,
                        "total_pages": page.total_pages,
                        "prev_page": page.prev_page,
                        "next_page": page.next_page,
                    })),
                )
                    .into_response(),
            }
        }
    }

    pub enum Error {
        FailedToValidate(ValidationErrors),
        NoMoviesFound,
        FailedToFetchMovies,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToValidate(errors) => validation::into_response(errors).into_response(),
                Self::NoMoviesFound => (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "error": "No movies found." })),
                )
                    .into_response(),
                Self::FailedToFetchMovies => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to fetch movies" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
