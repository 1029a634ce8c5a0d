mod common;

use axum::http::StatusCode;
use serde_json::json;

use common::{app, body_json, body_text, send};

#[tokio::test]
async fn hello_and_bye_default_to_world() {
    let app = app().await;
    assert_eq!(body_text(send(&app, "GET", "/hello", None).await).await, "Hello World!");
    assert_eq!(
        body_text(send(&app, "GET", "/bye?name=Frodo", None).await).await,
        "Goodbye Frodo!"
    );
}

#[tokio::test]
async fn greeting_counter_increments_per_call() {
    let app = app().await;

    let resp = send(&app, "GET", "/greeting", None).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        body_json(resp).await,
        json!({"id": 1, "content": "Hello, World!"})
    );

    let second = body_json(send(&app, "GET", "/greeting?name=Bilbo", None).await).await;
    assert_eq!(second, json!({"id": 2, "content": "Hello, Bilbo!"}));
}
