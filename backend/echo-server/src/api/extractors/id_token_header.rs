//! Axum extractor for the proxy-injected ID token

use crate::api::header_text::decode_header_value;

use echo_claims::ID_TOKEN_HEADER;

use std::convert::Infallible;
use std::future::Future;

use axum::{extract::FromRequestParts, http::request::Parts};

/// Raw value of the `x-ms-token-aad-id-token` header, if the proxy sent one.
///
/// Never rejects: a missing header is reported by the claim extractor as
/// part of the response body rather than as an HTTP error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdTokenHeader(pub Option<String>);

impl IdTokenHeader {
    pub fn as_deref(&self) -> Option<&str> {
        self.0.as_deref()
    }
}

impl<S> FromRequestParts<S> for IdTokenHeader
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let token = parts.headers.get(ID_TOKEN_HEADER).map(decode_header_value);

            Ok(IdTokenHeader(token))
        }
    }
}
