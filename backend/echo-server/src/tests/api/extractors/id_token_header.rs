use crate::IdTokenHeader;

use axum::{
    body::Body,
    extract::FromRequestParts,
    http::{HeaderValue, Request},
};

#[tokio::test]
async fn test_extractor_reads_header() {
    let request = Request::builder()
        .header("x-ms-token-aad-id-token", "aaa.bbb.ccc")
        .body(Body::empty())
        .unwrap();

    let (mut parts, _body) = request.into_parts();
    let result = IdTokenHeader::from_request_parts(&mut parts, &()).await;

    assert_eq!(result.unwrap().as_deref(), Some("aaa.bbb.ccc"));
}

#[tokio::test]
async fn test_extractor_lookup_is_case_insensitive() {
    let request = Request::builder()
        .header("X-MS-TOKEN-AAD-ID-TOKEN", "aaa.bbb.ccc")
        .body(Body::empty())
        .unwrap();

    let (mut parts, _body) = request.into_parts();
    let result = IdTokenHeader::from_request_parts(&mut parts, &()).await;

    assert_eq!(result.unwrap().as_deref(), Some("aaa.bbb.ccc"));
}

#[tokio::test]
async fn test_extractor_yields_none_when_missing() {
    let request = Request::builder().body(Body::empty()).unwrap();

    let (mut parts, _body) = request.into_parts();
    let result = IdTokenHeader::from_request_parts(&mut parts, &()).await;

    assert_eq!(result.unwrap(), IdTokenHeader(None));
}

#[tokio::test]
async fn test_extractor_keeps_non_utf8_bytes_as_latin1() {
    let request = Request::builder()
        .header(
            "x-ms-token-aad-id-token",
            HeaderValue::from_bytes(b"a.\xffb.c").unwrap(),
        )
        .body(Body::empty())
        .unwrap();

    let (mut parts, _body) = request.into_parts();
    let result = IdTokenHeader::from_request_parts(&mut parts, &()).await;

    assert_eq!(result.unwrap().as_deref(), Some("a.\u{ff}b.c"));
}
