use crate::api::header_text::decode_header_value;

use axum::http::HeaderMap;
use serde::Serialize;
use serde_json::{Map, Value};

/// Body of `GET /headers`
///
/// Names keep the order they arrived in. A name sent more than once reports
/// its first value only.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeadersResponse {
    pub headers: Map<String, Value>,
}

impl From<&HeaderMap> for HeadersResponse {
    fn from(header_map: &HeaderMap) -> Self {
        let headers = header_map
            .keys()
            .filter_map(|name| {
                header_map.get(name).map(|value| {
                    (
                        name.as_str().to_string(),
                        Value::String(decode_header_value(value)),
                    )
                })
            })
            .collect();

        Self { headers }
    }
}
