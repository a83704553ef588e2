use crate::TenantResponse;

use axum::response::IntoResponse;
use http::StatusCode;
use http_body_util::BodyExt;
use serde_json::json;

#[tokio::test]
async fn test_tenant_returns_200_with_tid() {
    let response = TenantResponse::Tenant {
        tid: json!("abc123"),
    }
    .into_response();

    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(json, json!({ "tid": "abc123" }));
}

#[tokio::test]
async fn test_error_returns_200_with_message() {
    let error = echo_claims::extract_tenant_id(None).unwrap_err();
    let response = TenantResponse::from(error).into_response();

    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert!(json.get("tid").is_none());
    assert!(!json["error"].as_str().unwrap().is_empty());
}

#[test]
fn test_error_message_omits_source_location() {
    let error = echo_claims::extract_tenant_id(Some("onlyonepart")).unwrap_err();

    let TenantResponse::Error { error: message } = TenantResponse::from(error) else {
        panic!("Expected Error response");
    };

    assert!(!message.contains(".rs"));
}
