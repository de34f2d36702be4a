use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use string_analysis::server::build_router;
use string_analysis::AnalysisEngine;
use tower::util::ServiceExt;

fn app() -> Router {
    build_router(Arc::new(AnalysisEngine::new()))
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

fn post_json(body: Value) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri("/strings")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn delete(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn create_returns_created_record() {
    let app = app();
    let (status, body) = send(&app, post_json(json!({ "value": "Racecar" }))).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["value"], "Racecar");
    assert_eq!(body["id"], body["properties"]["sha256_hash"]);
    assert_eq!(body["properties"]["is_palindrome"], true);
    assert_eq!(body["properties"]["length"], 7);
    assert_eq!(body["properties"]["character_frequency_map"]["r"], 2);
    assert!(body["created_at"].is_string());
}

#[tokio::test]
async fn create_rejects_bad_values() {
    let app = app();

    let (status, body) = send(&app, post_json(json!({}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["statusCode"], 400);
    assert_eq!(body["error"], "Bad Request");

    let (status, _) = send(&app, post_json(json!({ "value": "   " }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = send(&app, post_json(json!({ "value": 42 }))).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["message"], "Value must be a string");

    let (status, body) = send(&app, post_json(json!({ "value": "ok", "extra": 1 }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "property extra should not exist");

    let (status, _) = send(&app, post_json(json!(["value"]))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn duplicate_create_conflicts() {
    let app = app();
    let (status, _) = send(&app, post_json(json!({ "value": "hello world" }))).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = send(&app, post_json(json!({ "value": " hello   world " }))).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["message"], "String already exists in the system");
}

#[tokio::test]
async fn get_and_delete_by_value() {
    let app = app();
    send(&app, post_json(json!({ "value": "hello world" }))).await;

    let (status, body) = send(&app, get("/strings/hello%20world")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["value"], "hello world");

    let (status, body) = send(&app, delete("/strings/hello%20world")).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);

    let (status, body) = send(&app, delete("/strings/hello%20world")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "String does not exist in the system");

    let (status, _) = send(&app, get("/strings/hello%20world")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn list_with_filters() {
    let app = app();
    for value in ["level", "hello", "noon"] {
        send(&app, post_json(json!({ "value": value }))).await;
    }

    let (status, body) = send(&app, get("/strings")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 3);
    assert!(body.get("filters_applied").is_none());

    let (status, body) = send(&app, get("/strings?is_palindrome=true&min_length=5")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 1);
    assert_eq!(body["data"][0]["value"], "level");
    assert_eq!(
        body["filters_applied"],
        json!({ "is_palindrome": true, "min_length": 5 })
    );

    let (status, body) = send(&app, get("/strings?min_length=abc")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "min_length must be a valid integer");

    let (status, _) = send(&app, get("/strings?contains_character=ab")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(&app, get("/strings?colour=red")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn natural_language_filtering() {
    let app = app();
    for value in ["level", "hello", "noon", "racecar"] {
        send(&app, post_json(json!({ "value": value }))).await;
    }

    let (status, body) = send(
        &app,
        get("/strings/filter-by-natural-language?query=find%20palindromic%20strings%20with%20more%20than%203%20characters"),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 3);
    assert_eq!(
        body["interpreted_query"],
        json!({
            "original": "find palindromic strings with more than 3 characters",
            "parsed_filters": { "is_palindrome": true, "min_length": 4 }
        })
    );

    let (status, _) = send(&app, get("/strings/filter-by-natural-language")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(&app, get("/strings/filter-by-natural-language?query=")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // Whitespace is a non-empty phrase that matches no rule.
    let (status, body) = send(&app, get("/strings/filter-by-natural-language?query=%20%20")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 4);
    assert_eq!(body["interpreted_query"]["original"], "  ");
    assert_eq!(body["interpreted_query"]["parsed_filters"], json!({}));

    let (status, body) = send(
        &app,
        get("/strings/filter-by-natural-language?query=longer%20than%2099999999999999999999%20characters"),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Unable to parse natural language query");
}

#[tokio::test]
async fn undecodable_path_segment_is_json_bad_request() {
    let app = app();

    for request in [get("/strings/%FF"), delete("/strings/%FF")] {
        let (status, body) = send(&app, request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["statusCode"], 400);
        assert_eq!(body["error"], "Bad Request");
        assert!(body["message"].is_string());
    }
}
