use chrono::NaiveDate;
use serde::Serialize;
use sqlx::SqliteExecutor;

#[derive(Serialize, Clone, Debug, PartialEq, sqlx::FromRow)]
pub struct Movie {
    pub id: i64,
    pub name: String,
    pub date: NaiveDate,
    pub score: f64,
    pub genre: String,
    pub overview: String,
    pub crew: String,
    pub orig_title: String,
    pub status: String,
    pub orig_lang: String,
    pub budget: f64,
    pub revenue: f64,
    pub country: String,
}

#[derive(Clone, Debug)]
pub struct CreateMoviePayload {
    pub name: String,
    pub date: NaiveDate,
    pub score: f64,
    pub genre: String,
    pub overview: String,
    pub crew: String,
    pub orig_title: String,
    pub status: String,
    pub orig_lang: String,
    pub budget: f64,
    pub revenue: f64,
    pub country: String,
}

#[derive(Debug)]
pub enum Error {
    UnexpectedError,
}

pub async fn create<'e, E: SqliteExecutor<'e>>(
    e: E,
    payload: CreateMoviePayload,
) -> Result<Movie, Error> {
    sqlx::query_as::<_, Movie>(
        "
        INSERT INTO movies
        (name, date, score, genre, overview, crew, orig_title, status, orig_lang, budget, revenue, country)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        RETURNING *
        ",
    )
    .bind(payload.name)
    .bind(payload.date)
    .bind(payload.score)
    .bind(payload.genre)
    .bind(payload.overview)
    .bind(payload.crew)
    .bind(payload.orig_title)
    .bind(payload.status)
    .bind(payload.orig_lang)
    .bind(payload.budget)
    .bind(payload.revenue)
    .bind(payload.country)
    .fetch_one(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while trying to create a movie: {}", err);
        Error::UnexpectedError
    })
}

pub async fn count<'e, E: SqliteExecutor<'e>>(e: E) -> Result<i64, Error> {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(id) FROM movies")
        .fetch_one(e)
        .await
        .map_err(|err| {
            tracing::error!("Error occurred while trying to count movies: {}", err);
            Error::UnexpectedError
        })
}

pub async fn find_by_id<'e, E: SqliteExecutor<'e>>(e: E, id: i64) -> Result<Option<Movie>, Error> {
    sqlx::query_as::<_, Movie>("SELECT * FROM movies WHERE id = ?")
        .bind(id)
        .fetch_optional(e)
        .await
        .map_err(|err| {
            tracing::error!("Error occurred while fetching movie with id {}: {}", id, err);
            Error::UnexpectedError
        })
}

pub async fn find_many<'e, E: SqliteExecutor<'e>>(
    e: E,
    limit: i64,
    offset: i64,
) -> Result<Vec<Movie>, Error> {
    sqlx::query_as::<_, Movie>("SELECT * FROM movies ORDER BY id LIMIT ? OFFSET ?")
        .bind(limit)
        .bind(offset)
        .fetch_all(e)
        .await
        .map_err(|err| {
            tracing::error!(
                "Error occurred while trying to fetch movies (limit {}, offset {}): {}",
                limit,
                offset,
                err
            );
            Error::UnexpectedError
        })
}
