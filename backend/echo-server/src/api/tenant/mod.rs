#[allow(clippy::module_inception)]
pub mod tenant;
pub mod tenant_response;
