use crate::{ClaimsError, Result as ClaimsErrorResult, TENANT_ID_CLAIM};

use std::panic::Location;

use error_location::ErrorLocation;
use serde_json::{Map, Value};

/// Decoded token payload. Lives for a single request.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TokenClaims {
    claims: Map<String, Value>,
}

impl TokenClaims {
    /// Parse claims from decoded payload bytes. The payload must be a JSON object.
    #[track_caller]
    pub fn from_slice(payload: &[u8]) -> ClaimsErrorResult<Self> {
        let value: Value =
            serde_json::from_slice(payload).map_err(|source| ClaimsError::JsonParse {
                source,
                location: ErrorLocation::from(Location::caller()),
            })?;

        match value {
            Value::Object(claims) => Ok(Self { claims }),
            other => Err(ClaimsError::InvalidClaim {
                claim: TENANT_ID_CLAIM.to_string(),
                message: format!("claims payload is {}, not an object", json_kind(&other)),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.claims.get(name)
    }

    /// Look up a claim that must be present
    #[track_caller]
    pub fn require(&self, name: &str) -> ClaimsErrorResult<&Value> {
        self.claims
            .get(name)
            .ok_or_else(|| ClaimsError::InvalidClaim {
                claim: name.to_string(),
                message: "claim is missing".to_string(),
                location: ErrorLocation::from(Location::caller()),
            })
    }

    /// The `tid` claim, returned as-is whatever its JSON type
    #[track_caller]
    pub fn tenant_id(&self) -> ClaimsErrorResult<&Value> {
        self.require(TENANT_ID_CLAIM)
    }
}

impl From<Map<String, Value>> for TokenClaims {
    fn from(claims: Map<String, Value>) -> Self {
        Self { claims }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
