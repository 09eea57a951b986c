use axum::{
    body::Body,
    http::{header::ACCEPT_LANGUAGE, header::CONTENT_TYPE, Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::Value;
use test_utils::{builder::TestBuilder, context::TestContext};
use tower::ServiceExt;

use crate::server::{router::api_router, state::AppState};


/// Builds the API router over a fresh in-memory directory database.
///
/// The returned context keeps the database alive for the duration of the test.
async fn setup() -> (TestContext, Router) {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.clone().unwrap();

    (test, api_router(AppState::new(db)))
}

/// Sends one request and returns the status with the JSON body (`Value::Null` when empty).
async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    language: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut request = Request::builder().method(method).uri(uri);
    if let Some(language) = language {
        request = request.header(ACCEPT_LANGUAGE, language);
    }
    let request = match body {
        Some(body) => request
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => request.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, json)
}
