#![allow(dead_code)]

use axum::{
    body::{to_bytes, Body},
    http::{Method, Request, StatusCode},
    Router,
};
use grubdash_backend_rs::{
    app::App,
    modules::{
        dish::repository::Dish,
        order::repository::{Order, OrderDish, OrderStatus},
    },
    types::{Config, Context, ToContext},
};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

pub struct TestApp {
    pub ctx: Arc<Context>,
    pub router: Router,
}

pub async fn app() -> TestApp {
    let ctx = Arc::new(Config::default().to_context().await.unwrap());
    let router = App::new(ctx.clone()).router();

    TestApp { ctx, router }
}

impl TestApp {
    pub async fn send(&self, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let request = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => request
                .header("content-type", "application/json")
                .body(Body::from(body.to_string())),
            None => request.body(Body::empty()),
        }
        .unwrap();

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();

        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };

        (status, body)
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.send(Method::GET, uri, None).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.send(Method::POST, uri, Some(body)).await
    }

    pub async fn put(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.send(Method::PUT, uri, Some(body)).await
    }

    pub async fn delete(&self, uri: &str) -> (StatusCode, Value) {
        self.send(Method::DELETE, uri, None).await
    }

    pub async fn insert_dish(&self, id: &str, name: &str) -> Dish {
        self.ctx
            .db_conn
            .dishes
            .append(Dish {
                id: id.to_string(),
                name: name.to_string(),
                description: format!("{name} description"),
                price: 10,
                image_url: format!("https://img.example/{id}.png"),
            })
            .await
            .unwrap()
    }

    pub async fn insert_order(&self, id: &str, status: OrderStatus) -> Order {
        self.ctx
            .db_conn
            .orders
            .append(Order {
                id: id.to_string(),
                deliver_to: String::from("1 Main St"),
                mobile_number: String::from("555-0100"),
                status,
                dishes: vec![OrderDish {
                    quantity: 1,
                    dish: serde_json::from_str(r#"{ "id": "d1" }"#).unwrap(),
                }],
            })
            .await
            .unwrap()
    }
}
