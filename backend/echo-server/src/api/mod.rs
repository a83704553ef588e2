pub mod extractors;
pub mod header_text;
pub mod headers;
pub mod tenant;
