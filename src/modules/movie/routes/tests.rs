use crate::{
    app,
    modules::movie::repository::{self, fixtures},
    types::{AppContext, AppEnvironment, Context},
    utils::database::{self, DatabaseConnection},
};
use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

async fn setup(movies: u32, base_path: &str) -> (Router, DatabaseConnection) {
    let db_conn = database::connect_in_memory().await;

    for n in 1..=movies {
        repository::create(&db_conn.pool, fixtures::movie(n))
            .await
            .unwrap();
    }

    let ctx = Context {
        app: AppContext {
            host: "127.0.0.1".to_string(),
            environment: AppEnvironment::Development,
            port: 8000,
            url: "http://127.0.0.1:8000".to_string(),
            base_path: base_path.to_string(),
        },
        db_conn: db_conn.clone(),
    };

    (app::router(Arc::new(ctx)), db_conn)
}

async fn get(router: &Router, uri: &str) -> (StatusCode, Value) {
    let response = router
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();

    (status, serde_json::from_slice(&body).unwrap())
}

async fn redirect_target(router: &Router, uri: &str) -> (StatusCode, String) {
    let response = router
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let location = response
        .headers()
        .get(header::LOCATION)
        .map(|value| value.to_str().unwrap().to_string())
        .unwrap_or_default();

    (response.status(), location)
}

#[tokio::test]
async fn first_page_links_forward_only() {
    let (router, _) = setup(25, "/theater").await;

    let (status, body) = get(&router, "/theater/movies/?page=1&per_page=10").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["movies"].as_array().unwrap().len(), 10);
    assert_eq!(body["movies"][0]["name"], "Movie 1");
    assert_eq!(body["total_items"], 25);
    assert_eq!(body["total_pages"], 3);
    assert_eq!(body["prev_page"], Value::Null);
    assert_eq!(body["next_page"], "/theater/movies/?page=2&per_page=10");
}

#[tokio::test]
async fn middle_page_links_both_ways() {
    let (router, _) = setup(25, "/theater").await;

    let (status, body) = get(&router, "/theater/movies/?page=2&per_page=10").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["movies"][0]["name"], "Movie 11");
    assert_eq!(body["prev_page"], "/theater/movies/?page=1&per_page=10");
    assert_eq!(body["next_page"], "/theater/movies/?page=3&per_page=10");
}

#[tokio::test]
async fn last_page_is_partial_and_has_no_next_link() {
    let (router, _) = setup(25, "/theater").await;

    let (status, body) = get(&router, "/theater/movies/?page=3&per_page=10").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["movies"].as_array().unwrap().len(), 5);
    assert_eq!(body["prev_page"], "/theater/movies/?page=2&per_page=10");
    assert_eq!(body["next_page"], Value::Null);
}

#[tokio::test]
async fn page_past_the_end_is_not_found() {
    let (router, _) = setup(25, "/theater").await;

    let (status, body) = get(&router, "/theater/movies/?page=4&per_page=10").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "No movies found.");
}

#[tokio::test]
async fn empty_catalog_is_not_found() {
    let (router, _) = setup(0, "/theater").await;

    let (status, _) = get(&router, "/theater/movies/").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn defaults_apply_when_query_is_missing() {
    let (router, _) = setup(12, "/theater").await;

    let (status, body) = get(&router, "/theater/movies/").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["movies"].as_array().unwrap().len(), 10);
    assert_eq!(body["total_pages"], 2);
    assert_eq!(body["next_page"], "/theater/movies/?page=2&per_page=10");
}

#[tokio::test]
async fn invalid_pagination_is_unprocessable() {
    let (router, _) = setup(3, "/theater").await;

    for uri in [
        "/theater/movies/?page=0",
        "/theater/movies/?per_page=0",
        "/theater/movies/?per_page=101",
        "/theater/movies/?page=-1&per_page=5",
        "/theater/movies/?page=abc",
    ] {
        let (status, _) = get(&router, uri).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY, "{uri}");
    }

    let (_, body) = get(&router, "/theater/movies/?per_page=101").await;
    assert!(body["errors"]["per_page"].is_array());
}

#[tokio::test]
async fn detail_returns_the_stored_movie() {
    let (router, db_conn) = setup(3, "/theater").await;
    let stored = repository::find_by_id(&db_conn.pool, 2)
        .await
        .unwrap()
        .unwrap();

    let (status, body) = get(&router, "/theater/movies/2/").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, serde_json::to_value(&stored).unwrap());
    assert_eq!(body["date"], stored.date.format("%Y-%m-%d").to_string());
}

#[tokio::test]
async fn detail_for_unknown_id_is_not_found() {
    let (router, _) = setup(3, "/theater").await;

    let (status, body) = get(&router, "/theater/movies/999/").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Movie with the given ID was not found.");
}

#[tokio::test]
async fn detail_with_non_numeric_id_is_unprocessable() {
    let (router, _) = setup(1, "/theater").await;

    let (status, _) = get(&router, "/theater/movies/abc/").await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn routes_mount_at_root_without_base_path() {
    let (router, _) = setup(2, "").await;

    let (status, body) = get(&router, "/movies/?per_page=1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["next_page"], "/movies/?page=2&per_page=1");

    let (status, body) = get(&router, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["message"].is_string());
}

#[tokio::test]
async fn paths_without_trailing_slash_redirect() {
    let (router, _) = setup(3, "/theater").await;

    let (status, location) = redirect_target(&router, "/theater/movies").await;
    assert_eq!(status, StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(location, "/theater/movies/");

    let (status, location) = redirect_target(&router, "/theater/movies?page=2&per_page=1").await;
    assert_eq!(status, StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(location, "/theater/movies/?page=2&per_page=1");

    let (status, location) = redirect_target(&router, "/theater/movies/2").await;
    assert_eq!(status, StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(location, "/theater/movies/2/");

    let (status, body) = get(&router, &location).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], 2);
}

#[tokio::test]
async fn redirect_keeps_root_mount() {
    let (router, _) = setup(1, "").await;

    let (status, location) = redirect_target(&router, "/movies?per_page=1").await;

    assert_eq!(status, StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(location, "/movies/?per_page=1");
}
