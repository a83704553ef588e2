//! Tenant claim handler

use crate::{IdTokenHeader, TenantResponse};

/// GET /
///
/// Decode the ID token payload and return its `tid` claim
pub async fn get_tenant_id(token: IdTokenHeader) -> TenantResponse {
    match echo_claims::extract_tenant_id(token.as_deref()) {
        Ok(tid) => TenantResponse::Tenant { tid },
        Err(e) => {
            log::debug!("Tenant claim unavailable [{}]: {}", e.error_code(), e);
            TenantResponse::from(e)
        }
    }
}
