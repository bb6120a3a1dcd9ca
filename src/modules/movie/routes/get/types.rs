pub mod request {
    pub struct Payload {
        pub id: i64,
    }
}

pub mod response {
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    use crate::modules::movie::repository::Movie;

    pub enum Success {
        Movie(Movie),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::Movie(movie) => (StatusCode::OK, Json(json!(movie))).into_response(),
            }
        }
    }

    pub enum Error {
        InvalidMovieId,
        MovieNotFound,
        FailedToFetchMovie,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::InvalidMovieId => (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    Json(json!({ "error": "Movie ID must be an integer" })),
                )
                    .into_response(),
                Self::MovieNotFound => (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "error": "Movie with the given ID was not found." })),
                )
                    .into_response(),
                Self::FailedToFetchMovie => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to fetch movie" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
