use super::common::*;
use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use serde_json::{json, Value};
use tower::ServiceExt;

async fn post_prediction(uri: &str, body: Value) -> (StatusCode, Value) {
    let response = router()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .expect("request"),
        )
        .await
        .expect("router dispatch");

    let status = response.status();
    let bytes = to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("body");
    let payload = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, payload)
}

#[tokio::test]
async fn predict_returns_report_for_form() {
    let body = serde_json::to_value(strong_form()).expect("form serializes");

    let (status, payload) = post_prediction("/api/v1/predictions", body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(payload["score"]["result"]["outcome"], json!("graduate"));
    assert_eq!(payload["score"]["result"]["percentage"], json!(91));
    assert_eq!(payload["score"]["result"]["scheme"], json!("academic"));
    assert_eq!(payload["view"]["percentage_label"], json!("91%"));
    assert_eq!(payload["view"]["theme_color"], json!("#52a845"));
    assert_eq!(payload["record"]["tuition"], json!("fully-paid"));
    assert!(payload.get("generated_at").is_some());
    assert_eq!(payload["prediction"], json!(2));
    assert_eq!(payload["outcome_label"], json!("Graduate"));
    assert_eq!(payload["recommendations"][0]["priority"], json!("medium"));
    assert_eq!(payload["view"]["additional"][0]["priority"], json!("medium"));
}

#[tokio::test]
async fn predict_accepts_null_or_single_activity() {
    let (status, payload) = post_prediction(
        "/api/v1/predictions",
        json!({ "motivation": "high", "extracurricular": null }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(payload["record"]["extracurricular"], json!([]));

    let (status, payload) = post_prediction(
        "/api/v1/predictions?scheme=baseline",
        json!({ "motivation": "high", "extracurricular": "debate" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(payload["record"]["extracurricular"], json!(["debate"]));
    assert_eq!(payload["score"]["result"]["percentage"], json!(78));
}

#[tokio::test]
async fn predict_accepts_empty_form() {
    let (status, payload) = post_prediction("/api/v1/predictions", json!({})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(payload["score"]["result"]["outcome"], json!("drop-out"));
    assert_eq!(payload["view"]["label"], json!("At Risk"));
    assert_eq!(payload["prediction"], json!(0));
    assert_eq!(payload["outcome_label"], json!("Drop Out"));
}

#[tokio::test]
async fn predict_honours_scheme_override() {
    let (status, payload) =
        post_prediction("/api/v1/predictions?scheme=baseline", json!({})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(payload["score"]["result"]["scheme"], json!("baseline"));
    assert_eq!(payload["score"]["result"]["percentage"], json!(50));
    assert_eq!(payload["score"]["result"]["outcome"], json!("remain-enrolled"));
}

#[tokio::test]
async fn predict_rejects_unknown_scheme() {
    let (status, payload) =
        post_prediction("/api/v1/predictions?scheme=neural", json!({})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(payload["error"]
        .as_str()
        .is_some_and(|message| message.contains("neural")));
}

#[tokio::test]
async fn predict_rejects_malformed_json() {
    let response = router()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/predictions")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from("{\"motivation\":"))
                .expect("request"),
        )
        .await
        .expect("router dispatch");

    assert!(response.status().is_client_error());
}
