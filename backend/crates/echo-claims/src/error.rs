use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClaimsError {
    #[error("Missing ID token header '{header}' {location}")]
    MissingHeader {
        header: &'static str,
        location: ErrorLocation,
    },

    #[error("Malformed token: expected at least 2 segments, found {segments} {location}")]
    MalformedToken {
        segments: usize,
        location: ErrorLocation,
    },

    #[error("Base64 decode failed: {source} {location}")]
    Base64Decode {
        #[source]
        source: base64::DecodeError,
        location: ErrorLocation,
    },

    #[error("Claims JSON parse failed: {source} {location}")]
    JsonParse {
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },

    #[error("Invalid claim '{claim}': {message} {location}")]
    InvalidClaim {
        claim: String,
        message: String,
        location: ErrorLocation,
    },
}

impl ClaimsError {
    /// Machine-readable code, stable across message wording changes
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::MissingHeader { .. } => "MISSING_HEADER",
            Self::MalformedToken { .. } => "MALFORMED_TOKEN",
            Self::Base64Decode { .. } => "BASE64_DECODE_FAILED",
            Self::JsonParse { .. } => "JSON_PARSE_FAILED",
            Self::InvalidClaim { .. } => "INVALID_CLAIM",
        }
    }

    /// Human-readable message for the response body (no source location)
    pub fn message(&self) -> String {
        match self {
            Self::MissingHeader { header, .. } => format!("missing header '{header}'"),
            Self::MalformedToken { segments, .. } => format!(
                "malformed token: expected at least 2 '.'-separated segments, found {segments}"
            ),
            Self::Base64Decode { source, .. } => format!("invalid base64 in token payload: {source}"),
            Self::JsonParse { source, .. } => format!("invalid JSON in token payload: {source}"),
            Self::InvalidClaim { claim, message, .. } => format!("claim '{claim}': {message}"),
        }
    }
}

pub type Result<T> = std::result::Result<T, ClaimsError>;
