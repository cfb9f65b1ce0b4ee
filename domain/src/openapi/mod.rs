//! OpenAPI domain module
//!
//! Borrowed, read-only views over a parsed OpenAPI document. Only the parts the
//! tool generator reads are modeled: `paths`, operations with a supported
//! [`HttpMethod`], their parameters, request bodies and the `200` response
//! description.

pub mod document;
pub mod method;

pub use document::{OpenApiDocument, Operation, Parameter, PathItem};
pub use method::HttpMethod;
