use crate::api::header_text::decode_header_value;

use axum::http::HeaderValue;

#[test]
fn test_ascii_value_is_unchanged() {
    let value = HeaderValue::from_static("Bearer abc.def");

    assert_eq!(decode_header_value(&value), "Bearer abc.def");
}

#[test]
fn test_every_high_byte_maps_to_one_char() {
    let bytes: Vec<u8> = (0x80u8..=0xff).collect();
    let value = HeaderValue::from_bytes(&bytes).unwrap();

    let decoded = decode_header_value(&value);

    assert_eq!(decoded.chars().count(), bytes.len());
    assert!(decoded.chars().zip(&bytes).all(|(c, &b)| c as u32 == b as u32));
}
