#[allow(clippy::module_inception)]
pub mod headers;
pub mod headers_response;
