use crate::HeadersResponse;

use axum::{Json, http::HeaderMap};

/// GET /headers
///
/// Echo every request header back to the caller
pub async fn reflect_headers(headers: HeaderMap) -> Json<HeadersResponse> {
    Json(HeadersResponse::from(&headers))
}
