
use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

/// Build a `header.payload.signature` token around the given claims JSON
pub(crate) fn token_with_payload(payload_json: &str) -> String {
    format!(
        "eyJhbGciOiJIUzI1NiJ9.{}.signature",
        URL_SAFE_NO_PAD.encode(payload_json)
    )
}
