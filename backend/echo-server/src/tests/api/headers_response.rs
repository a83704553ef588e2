use crate::HeadersResponse;

use axum::http::{HeaderMap, HeaderName, HeaderValue};

#[test]
fn test_single_headers_are_copied() {
    let mut map = HeaderMap::new();
    map.insert("accept", HeaderValue::from_static("application/json"));
    map.insert("x-request-id", HeaderValue::from_static("req-1"));

    let response = HeadersResponse::from(&map);

    assert_eq!(response.headers.len(), 2);
    assert_eq!(response.headers["accept"], "application/json");
    assert_eq!(response.headers["x-request-id"], "req-1");
}

#[test]
fn test_repeated_header_reports_first_value() {
    let mut map = HeaderMap::new();
    let name = HeaderName::from_static("x-forwarded-for");
    map.append(name.clone(), HeaderValue::from_static("10.0.0.1"));
    map.append(name, HeaderValue::from_static("10.0.0.2"));

    let response = HeadersResponse::from(&map);

    assert_eq!(response.headers.len(), 1);
    assert_eq!(response.headers["x-forwarded-for"], "10.0.0.1");
}

#[test]
fn test_header_names_keep_arrival_order() {
    let mut map = HeaderMap::new();
    map.append("zeta", HeaderValue::from_static("1"));
    map.append("alpha", HeaderValue::from_static("2"));
    map.append("x-dup", HeaderValue::from_static("first"));
    map.append("x-dup", HeaderValue::from_static("second"));

    let response = HeadersResponse::from(&map);

    let names: Vec<&String> = response.headers.keys().collect();
    assert_eq!(names, vec!["zeta", "alpha", "x-dup"]);
    assert_eq!(
        serde_json::to_string(&response).unwrap(),
        r#"{"headers":{"zeta":"1","alpha":"2","x-dup":"first"}}"#
    );
}

#[test]
fn test_non_utf8_value_is_decoded_as_latin1() {
    let mut map = HeaderMap::new();
    map.insert(
        "x-legacy",
        HeaderValue::from_bytes(b"caf\xe9 \xff").unwrap(),
    );

    let response = HeadersResponse::from(&map);

    assert_eq!(response.headers["x-legacy"], "caf\u{e9} \u{ff}");
}

#[test]
fn test_empty_header_map_gives_empty_object() {
    let response = HeadersResponse::from(&HeaderMap::new());

    assert_eq!(
        serde_json::to_value(&response).unwrap(),
        serde_json::json!({ "headers": {} })
    );
}
