use axum::http::HeaderValue;

/// Header value as text, one char per byte (ISO-8859-1).
///
/// Every byte maps to a char, so values outside UTF-8 survive unchanged.
pub fn decode_header_value(value: &HeaderValue) -> String {
    value.as_bytes().iter().map(|&b| b as char).collect()
}
