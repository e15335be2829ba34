mod common;

use axum::http::{Method, StatusCode};
use serde_json::json;

#[tokio::test]
async fn create_echoes_fields_and_assigns_an_id() {
    let app = common::app().await;

    let (status, body) = app
        .post(
            "/dishes",
            json!({ "data": { "name": "Taco", "description": "d", "price": 5, "image_url": "u" } }),
        )
        .await;

    assert_eq!(status, StatusCode::CREATED);
    let dish = &body["data"];
    assert_eq!(dish["name"], "Taco");
    assert_eq!(dish["description"], "d");
    assert_eq!(dish["price"], 5);
    assert_eq!(dish["image_url"], "u");
    assert!(dish["id"].as_str().is_some_and(|id| !id.is_empty()));
}

#[tokio::test]
async fn created_ids_are_unique_and_listed_in_insertion_order() {
    let app = common::app().await;

    for name in ["Taco", "Burrito", "Quesadilla"] {
        let (status, _) = app
            .post(
                "/dishes",
                json!({ "data": { "name": name, "description": "d", "price": 3, "image_url": "u" } }),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, body) = app.get("/dishes").await;
    assert_eq!(status, StatusCode::OK);

    let dishes = body["data"].as_array().unwrap();
    let names: Vec<_> = dishes.iter().map(|d| d["name"].as_str().unwrap()).collect();
    assert_eq!(names, ["Taco", "Burrito", "Quesadilla"]);

    let mut ids: Vec<_> = dishes.iter().map(|d| d["id"].as_str().unwrap()).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 3);
}

#[tokio::test]
async fn create_rejects_incomplete_payloads() {
    let app = common::app().await;

    for body in [
        json!({}),
        json!({ "data": {} }),
        json!({ "data": { "name": "Taco", "description": "d", "image_url": "u" } }),
        json!({ "data": { "name": "", "description": "d", "price": 5, "image_url": "u" } }),
    ] {
        let (status, response) = app.post("/dishes", body.clone()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{body}");
        assert!(response["error"]
            .as_str()
            .unwrap()
            .starts_with("All body properties are required"));
    }

    let (_, body) = app.get("/dishes").await;
    assert_eq!(body["data"], json!([]));
}

#[tokio::test]
async fn create_rejects_bad_prices() {
    let app = common::app().await;

    for price in [json!(-5), json!("5"), json!(2.5)] {
        let (status, body) = app
            .post(
                "/dishes",
                json!({ "data": { "name": "Taco", "description": "d", "price": price, "image_url": "u" } }),
            )
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{price}");
        assert!(body["error"].is_string());
    }
}

#[tokio::test]
async fn read_returns_the_same_dish_on_repeated_calls() {
    let app = common::app().await;
    app.insert_dish("d1", "Taco").await;

    let (status, first) = app.get("/dishes/d1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(first["data"]["name"], "Taco");

    let (_, second) = app.get("/dishes/d1").await;
    assert_eq!(first, second);
}

#[tokio::test]
async fn read_missing_dish_is_not_found() {
    let app = common::app().await;

    let (status, body) = app.get("/dishes/nope").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "Dish does not exist: nope." }));
}

#[tokio::test]
async fn update_replaces_every_field_but_the_id() {
    let app = common::app().await;
    app.insert_dish("d1", "Taco").await;
    app.insert_dish("d2", "Burrito").await;

    let (status, body) = app
        .put(
            "/dishes/d1",
            json!({ "data": { "id": "d1", "name": "Nachos", "description": "cheesy", "price": 7, "image_url": "n" } }),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["data"],
        json!({ "id": "d1", "name": "Nachos", "description": "cheesy", "price": 7, "image_url": "n" })
    );

    let (_, list) = app.get("/dishes").await;
    assert_eq!(list["data"][0]["name"], "Nachos");
    assert_eq!(list["data"][1]["name"], "Burrito");
}

#[tokio::test]
async fn update_without_body_id_keeps_route_id() {
    let app = common::app().await;
    app.insert_dish("d1", "Taco").await;

    let (status, body) = app
        .put(
            "/dishes/d1",
            json!({ "data": { "name": "Nachos", "description": "cheesy", "price": 7, "image_url": "n" } }),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["id"], "d1");
}

#[tokio::test]
async fn update_with_mismatched_id_leaves_dish_untouched() {
    let app = common::app().await;
    let original = app.insert_dish("5", "Taco").await;

    let (status, body) = app
        .put(
            "/dishes/5",
            json!({ "data": { "id": "99", "name": "Nachos", "description": "cheesy", "price": 7, "image_url": "n" } }),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let message = body["error"].as_str().unwrap();
    assert!(message.contains("99") && message.contains('5'), "{message}");

    let (_, body) = app.get("/dishes/5").await;
    assert_eq!(body["data"], serde_json::to_value(&original).unwrap());
}

#[tokio::test]
async fn update_missing_dish_is_not_found() {
    let app = common::app().await;

    let (status, _) = app
        .put(
            "/dishes/nope",
            json!({ "data": { "name": "Nachos", "description": "cheesy", "price": 7, "image_url": "n" } }),
        )
        .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn dishes_cannot_be_deleted() {
    let app = common::app().await;
    app.insert_dish("d1", "Taco").await;

    let (status, body) = app.delete("/dishes/d1").await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(body, json!({ "error": "DELETE not allowed for /dishes/d1" }));

    let (status, _) = app.get("/dishes/d1").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn unknown_paths_and_methods() {
    let app = common::app().await;

    let (status, body) = app.get("/drinks").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "Path not found: /drinks" }));

    let (status, _) = app.send(Method::PATCH, "/dishes", None).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn malformed_json_is_a_bad_request() {
    use axum::{body::Body, http::Request};
    use tower::ServiceExt;

    let app = common::app().await;

    let request = Request::builder()
        .method(Method::POST)
        .uri("/dishes")
        .header("content-type", "application/json")
        .body(Body::from("{ not json"))
        .unwrap();

    let response = app.router.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn closed_store_is_an_internal_error() {
    let app = common::app().await;
    app.ctx.db_conn.close().await;

    let (status, body) = app.get("/dishes").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "Something went wrong!" }));
}

#[tokio::test]
async fn undecodable_route_id_is_a_bad_request() {
    let app = common::app().await;

    let (status, body) = app.get("/dishes/%FF").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string(), "{body}");

    let (status, body) = app.put("/dishes/%FF", json!({ "data": {} })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string(), "{body}");
}
