//! Payload access for three-part ID tokens.
//!
//! Tokens arrive already validated by the upstream proxy, so nothing here
//! checks the signature segment or the time-based claims.

use crate::{ClaimsError, ID_TOKEN_HEADER, Result as ClaimsErrorResult, TokenClaims};

use std::panic::Location;

use base64::Engine;
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use error_location::ErrorLocation;

/// Index of the claims segment in `header.payload.signature`
const PAYLOAD_SEGMENT_INDEX: usize = 1;

/// Padding appended to the payload segment before decoding
const PAYLOAD_PADDING: &str = "==";

/// URL-safe decoder that accepts the payload with or without `=` padding
const PAYLOAD_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new()
        .with_decode_padding_mode(DecodePaddingMode::Indifferent)
        .with_decode_allow_trailing_bits(true),
);

/// Borrowed view over a raw ID token header value
#[derive(Debug, Clone, Copy)]
pub struct IdToken<'a> {
    raw: &'a str,
}

impl<'a> IdToken<'a> {
    /// Wrap the header value, failing when the header was absent
    #[track_caller]
    pub fn from_header(header_value: Option<&'a str>) -> ClaimsErrorResult<Self> {
        header_value
            .map(|raw| Self { raw })
            .ok_or_else(|| ClaimsError::MissingHeader {
                header: ID_TOKEN_HEADER,
                location: ErrorLocation::from(Location::caller()),
            })
    }

    pub fn as_str(&self) -> &'a str {
        self.raw
    }

    /// The second `.`-separated segment, still base64url encoded
    #[track_caller]
    pub fn payload_segment(&self) -> ClaimsErrorResult<&'a str> {
        self.raw
            .split('.')
            .nth(PAYLOAD_SEGMENT_INDEX)
            .ok_or_else(|| ClaimsError::MalformedToken {
                segments: self.raw.split('.').count(),
                location: ErrorLocation::from(Location::caller()),
            })
    }

    /// Decode the payload segment to raw bytes.
    ///
    /// `==` is always appended first. Any surplus `=` is dropped before the
    /// padding-indifferent engine sees the input, so segments whose length is
    /// already a multiple of four decode the same as unpadded ones.
    #[track_caller]
    pub fn decode_payload(&self) -> ClaimsErrorResult<Vec<u8>> {
        let padded = format!("{}{}", self.payload_segment()?, PAYLOAD_PADDING);

        PAYLOAD_ENGINE
            .decode(padded.trim_end_matches('='))
            .map_err(|source| ClaimsError::Base64Decode {
                source,
                location: ErrorLocation::from(Location::caller()),
            })
    }

    /// Decode and parse the payload into claims
    #[track_caller]
    pub fn claims(&self) -> ClaimsErrorResult<TokenClaims> {
        let payload = self.decode_payload()?;
        TokenClaims::from_slice(&payload)
    }
}
