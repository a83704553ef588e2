use echo_claims::ClaimsError;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::Value;

/// Body of `GET /`: either the tenant claim or a description of why it
/// could not be read. Both are sent with 200.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TenantResponse {
    Tenant { tid: Value },
    Error { error: String },
}

impl From<ClaimsError> for TenantResponse {
    fn from(e: ClaimsError) -> Self {
        TenantResponse::Error { error: e.message() }
    }
}

impl IntoResponse for TenantResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}
