pub mod claims;
pub mod error;
pub mod id_token;

pub use claims::TokenClaims;
pub use error::{ClaimsError, Result};
pub use id_token::IdToken;

/// Header the upstream authenticating proxy populates with the caller's ID token
pub const ID_TOKEN_HEADER: &str = "x-ms-token-aad-id-token";

/// Claim carrying the tenant (directory) identifier
pub const TENANT_ID_CLAIM: &str = "tid";

/// Resolve the tenant identifier from the raw ID token header value.
///
/// `None` means the header was not present on the request.
#[track_caller]
pub fn extract_tenant_id(header_value: Option<&str>) -> Result<serde_json::Value> {
    let token = IdToken::from_header(header_value)?;
    let claims = token.claims()?;
    claims.tenant_id().cloned()
}

#[cfg(test)]
mod tests;
