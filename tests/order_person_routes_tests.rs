mod common;

use axum::http::StatusCode;
use serde_json::json;

use common::{app, body_json, body_text, create, send, send_raw};

#[tokio::test]
async fn orders_follow_the_same_shape() {
    let app = app().await;
    let created = create(
        &app,
        "/orders",
        json!({"description": "MacBook Pro", "status": "COMPLETED"}),
    )
    .await;
    assert_eq!(
        created,
        json!({
            "id": 1,
            "description": "MacBook Pro",
            "status": "COMPLETED",
            "_links": {
                "self": {"href": "http://localhost:8080/orders/1"},
                "orders": {"href": "http://localhost:8080/orders"}
            }
        })
    );

    let list = body_json(send(&app, "GET", "/orders", None).await).await;
    assert_eq!(list["_embedded"]["orderList"][0]["status"], json!("COMPLETED"));

    let resp = send(&app, "GET", "/orders/2", None).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_text(resp).await, "Could not find order 2");
}

#[tokio::test]
async fn unknown_order_status_is_400() {
    let app = app().await;
    let resp = send_raw(
        &app,
        "POST",
        "/orders",
        Some("application/json"),
        r#"{"description":"iPhone","status":"SHIPPED"}"#,
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn order_status_can_be_replaced() {
    let app = app().await;
    create(
        &app,
        "/orders",
        json!({"description": "iPhone", "status": "IN_PROGRESS"}),
    )
    .await;
    let resp = send(
        &app,
        "PUT",
        "/orders/1",
        Some(json!({"description": "iPhone", "status": "CANCELLED"})),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let fetched = body_json(send(&app, "GET", "/orders/1", None).await).await;
    assert_eq!(fetched["status"], json!("CANCELLED"));
}

#[tokio::test]
async fn persons_crud_cycle() {
    let app = app().await;
    let created = create(
        &app,
        "/persons",
        json!({"name": "Garfield", "message": "Meoooow."}),
    )
    .await;
    let id = created["id"].as_i64().unwrap();
    assert_eq!(
        created["_links"]["persons"]["href"],
        json!("http://localhost:8080/persons")
    );

    let fetched = body_json(send(&app, "GET", &format!("/persons/{id}"), None).await).await;
    assert_eq!(fetched["message"], json!("Meoooow."));

    let resp = send(&app, "DELETE", &format!("/persons/{id}"), None).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    let resp = send(&app, "GET", &format!("/persons/{id}"), None).await;
    assert_eq!(body_text(resp).await, format!("Could not find person {id}"));
}

#[tokio::test]
async fn missing_fields_are_stored_as_null() {
    let app = app().await;
    let created = create(&app, "/persons", json!({})).await;
    assert_eq!(created["name"], json!(null));
    assert_eq!(created["message"], json!(null));
}

#[tokio::test]
async fn kinds_have_independent_id_sequences() {
    let app = app().await;
    let employee = create(&app, "/employees", json!({"firstName": "Bilbo"})).await;
    let person = create(&app, "/persons", json!({"name": "Andrew"})).await;
    assert_eq!(employee["id"], json!(1));
    assert_eq!(person["id"], json!(1));
}
