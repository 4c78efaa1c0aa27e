use axum::body::{Body, to_bytes};
use axum::http::{Method, Request, StatusCode, header};
use serde_json::{Value, json};
use tower::ServiceExt;

use emotion_motion_core::server;

async fn send(request: Request<Body>) -> (StatusCode, axum::http::HeaderMap, Vec<u8>) {
    let response = server::router().oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, headers, body.to_vec())
}

fn post(path: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(path)
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::ORIGIN, "http://localhost:8080")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn analyze_returns_three_fields() {
    let (status, headers, body) =
        send(post("/analyze", r#"{"text":"I feel heavy but hopeful."}"#)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");

    let value: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(
        value,
        json!({"emotion": "melancholic-hope", "intensity": 1.0, "energy": "low-rising"})
    );
    assert_eq!(value.as_object().unwrap().len(), 3);
}

#[tokio::test]
async fn intensity_is_rounded() {
    let (_, _, body) = send(post("/analyze", r#"{"text":"joy sad"}"#)).await;
    let value: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(value["intensity"], json!(0.98));
}

#[tokio::test]
async fn malformed_body_analyzes_empty_text() {
    for body in ["{not json", "", "[\"calm\"]", r#"{"words":"calm"}"#] {
        let (status, _, bytes) = send(post("/analyze", body)).await;
        assert_eq!(status, StatusCode::OK, "body {:?}", body);
        let value: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(
            value,
            json!({"emotion": "neutral", "intensity": 0.0, "energy": "steady"})
        );
    }
}

#[tokio::test]
async fn list_text_is_split_into_words() {
    let (status, _, body) = send(post("/analyze", r#"{"text":["sad","hope"]}"#)).await;
    assert_eq!(status, StatusCode::OK);
    let value: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(
        value,
        json!({"emotion": "melancholic-hope", "intensity": 0.98, "energy": "low-rising"})
    );
}

#[tokio::test]
async fn null_text_is_not_empty() {
    let (_, _, body) = send(post("/analyze", r#"{"text":null}"#)).await;
    let value: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(
        value,
        json!({"emotion": "neutral", "intensity": 0.15, "energy": "steady"})
    );
}

#[tokio::test]
async fn body_without_content_type_is_accepted() {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/analyze")
        .body(Body::from(r#"{"text":"calm"}"#))
        .unwrap();
    let (status, _, bytes) = send(request).await;
    assert_eq!(status, StatusCode::OK);
    let value: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(value["emotion"], "calm");
    assert_eq!(value["energy"], "low-steady");
}

#[tokio::test]
async fn preflight_is_permissive() {
    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/analyze")
        .header(header::ORIGIN, "http://example.com")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
        .body(Body::empty())
        .unwrap();
    let (status, headers, body) = send(request).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.is_empty());
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");

    let methods = headers[header::ACCESS_CONTROL_ALLOW_METHODS]
        .to_str()
        .unwrap()
        .to_ascii_uppercase();
    assert!(methods.contains("POST"));
    assert!(methods.contains("OPTIONS"));

    let allowed_headers = headers[header::ACCESS_CONTROL_ALLOW_HEADERS]
        .to_str()
        .unwrap()
        .to_ascii_lowercase();
    assert!(allowed_headers.contains("content-type"));
}

#[tokio::test]
async fn unknown_path_is_not_found() {
    let (status, _, _) = send(post("/analyse", r#"{"text":"joy"}"#)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let request = Request::builder()
        .method(Method::GET)
        .uri("/")
        .body(Body::empty())
        .unwrap();
    let (status, _, _) = send(request).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[test]
fn analyze_body_matches_classifier() {
    let payload = server::analyze_body(br#"{"text":"rage fury"}"#);
    assert_eq!(payload.emotion, "anger");
    assert_eq!(payload.energy, "high");
    assert_eq!(payload.intensity, 1.0);
}
