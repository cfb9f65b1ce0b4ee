//! Schema domain module
//!
//! Two independent rewriting passes over JSON-Schema-like fragments:
//!
//! | Pass | Input | Used by |
//! |------|-------|---------|
//! | [`normalize`] | request body schemas from a trusted OpenAPI document | tool generator |
//! | [`repair`] | `input_schema` of any tool, possibly hand-written | tool validator |
//!
//! Both rebuild mappings key by key through the shared [`traverse`] helper
//! but apply different policies. `normalize` flattens every composition to its
//! first branch and fills in `type`/`description`; `repair` only rewrites
//! nullable unions and component references.

pub mod fragment;
pub mod normalize;
pub mod repair;
mod traverse;

pub use fragment::{SchemaFragment, SchemaKind};
pub use normalize::normalize;
pub use repair::repair;
