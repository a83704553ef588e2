mod extractors;
mod header_text;
mod headers_response;
mod tenant_response;
