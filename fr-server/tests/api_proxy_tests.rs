//! Integration tests for the proxy routes, with wiremock standing in for
//! the external backend.
mod common;

use crate::common::test_state_with_upstream;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::json;
use tower::ServiceExt;
use wiremock::matchers::{body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use fr_server::build_router;

async fn send(app: Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    (status, json)
}

fn json_request(method: &str, uri: &str, body: &serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("Content-Type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_visitor_update_passes_status_and_body_through() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/api/visitor/v-42"))
        .and(body_string_contains("Jane"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "visitor": { "id": "v-42", "name": "Jane" }
        })))
        .mount(&mock_server)
        .await;

    let app = build_router(test_state_with_upstream(&mock_server.uri(), None));
    let (status, json) = send(
        app,
        json_request("PUT", "/api/v1/visitors/v-42", &json!({ "name": "Jane" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["visitor"]["name"], "Jane");
}

#[tokio::test]
async fn test_upstream_failure_status_is_not_rewritten() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/api/visitor/v-42"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "success": false,
            "message": "boom"
        })))
        .mount(&mock_server)
        .await;

    let app = build_router(test_state_with_upstream(&mock_server.uri(), None));
    let request = Request::builder()
        .method("DELETE")
        .uri("/api/v1/visitors/v-42")
        .body(Body::empty())
        .unwrap();
    let (status, json) = send(app, request).await;

    // A reply from the backend, even a 500, passes through verbatim.
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["message"], "boom");
}

#[tokio::test]
async fn test_unreachable_upstream_maps_to_502() {
    // Nothing listens on the discard port.
    let app = build_router(test_state_with_upstream("http://127.0.0.1:9", None));

    let (status, json) = send(
        app,
        json_request("PUT", "/api/v1/visitors/v-42", &json!({ "name": "Jane" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(json["error"]["code"], "UPSTREAM_ERROR");
    assert_eq!(json["error"]["message"], "Failed to update visitor");
}

#[tokio::test]
async fn test_configured_token_is_forwarded_as_bearer() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/api/visitor/v-1"))
        .and(header("Authorization", "Bearer proxy-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": true })))
        .mount(&mock_server)
        .await;

    let app = build_router(test_state_with_upstream(
        &mock_server.uri(),
        Some("proxy-token"),
    ));
    let (status, _) = send(app, json_request("PUT", "/api/v1/visitors/v-1", &json!({}))).await;

    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_auth_register_proxies_to_the_backend() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/register"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "success": true,
            "userId": "u-1"
        })))
        .mount(&mock_server)
        .await;

    let app = build_router(test_state_with_upstream(&mock_server.uri(), None));
    let (status, json) = send(
        app,
        json_request(
            "POST",
            "/api/v1/auth/register",
            &json!({ "email": "jane@example.com", "username": "janedoe_x1" }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(json["userId"], "u-1");
}

#[tokio::test]
async fn test_checkout_session_reply_carries_the_redirect_url() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/checkout/session"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "url": "https://pay.example.com/session/cs_123"
        })))
        .mount(&mock_server)
        .await;

    let app = build_router(test_state_with_upstream(&mock_server.uri(), None));
    let (status, json) = send(
        app,
        json_request(
            "POST",
            "/api/v1/checkout/session",
            &json!({ "amount": 2500, "currency": "usd" }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["url"], "https://pay.example.com/session/cs_123");
}

#[tokio::test]
async fn test_project_submission_proxies_to_the_backend() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/projects"))
        .and(body_string_contains("Storefront rebuild"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "projectId": "p-7"
        })))
        .mount(&mock_server)
        .await;

    let app = build_router(test_state_with_upstream(&mock_server.uri(), None));
    let (status, json) = send(
        app,
        json_request(
            "POST",
            "/api/v1/projects",
            &json!({ "title": "Storefront rebuild" }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["projectId"], "p-7");
}
