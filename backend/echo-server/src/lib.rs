pub mod api;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;

#[cfg(test)]
mod tests;

pub use api::{
    extractors::id_token_header::IdTokenHeader,
    headers::{headers::reflect_headers, headers_response::HeadersResponse},
    tenant::{tenant::get_tenant_id, tenant_response::TenantResponse},
};

pub use crate::routes::build_router;

pub use echo_claims::ID_TOKEN_HEADER;
