#![allow(dead_code)]

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, Response, StatusCode, header},
};
use serde_json::Value;
use tower::ServiceExt;

use payroll::config::Config;
use payroll::db::SqliteStorage;
use payroll::router::{PayrollState, payroll_router};

/// Router over a fresh in-memory database. Nothing is preloaded.
pub async fn app_with(cfg: Config) -> (Router, SqliteStorage) {
    let storage = SqliteStorage::connect(&cfg.basic.database_url)
        .await
        .expect("failed to open in-memory database");
    storage.init_schema().await.expect("failed to init schema");
    let state = PayrollState::new(storage.clone(), &cfg);
    (payroll_router(state), storage)
}

pub async fn app() -> Router {
    let mut cfg = Config::default();
    cfg.basic.preload = false;
    app_with(cfg).await.0
}

pub async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> Response<Body> {
    let builder = Request::builder().method(method).uri(uri);
    let req = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string())),
        None => builder.body(Body::empty()),
    }
    .expect("failed to build request");
    app.clone().oneshot(req).await.expect("request failed")
}

pub async fn send_raw(
    app: &Router,
    method: &str,
    uri: &str,
    content_type: Option<&str>,
    body: &str,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(ct) = content_type {
        builder = builder.header(header::CONTENT_TYPE, ct);
    }
    let req = builder
        .body(Body::from(body.to_string()))
        .expect("failed to build request");
    app.clone().oneshot(req).await.expect("request failed")
}

pub async fn body_text(resp: Response<Body>) -> String {
    let body = to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");
    String::from_utf8(body.to_vec()).expect("response body was not utf-8")
}

pub async fn body_json(resp: Response<Body>) -> Value {
    let text = body_text(resp).await;
    serde_json::from_str(&text).expect("response body was not json")
}

pub fn location(resp: &Response<Body>) -> Option<String> {
    resp.headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}

pub async fn create(app: &Router, uri: &str, body: Value) -> Value {
    let resp = send(app, "POST", uri, Some(body)).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    body_json(resp).await
}
