//! Domain layer for openapi-agent-tools
//!
//! This crate contains the schema transformation engine. It performs no I/O:
//! documents come in as parsed JSON values and tools go out as values.
//!
//! # Core Concepts
//!
//! ## Generation
//!
//! [`tool::generate`] walks an [`OpenApiDocument`] and emits one
//! [`ToolDefinition`] per operation whose method is GET, POST, PATCH or DELETE.
//! Request bodies are simplified by [`schema::normalize`].
//!
//! ## Repair
//!
//! [`tool::fix_tool`] and [`tool::fix_all`] make existing tool definitions
//! acceptable to the target agent: required fields, a 64-character name limit,
//! and no `#/components/` references or nullable `anyOf` unions
//! ([`schema::repair`]).

pub mod core;
pub mod openapi;
pub mod schema;
pub mod tool;

// Re-export commonly used types
pub use crate::core::error::DomainError;
pub use openapi::{HttpMethod, OpenApiDocument};
pub use schema::{SchemaFragment, SchemaKind};
pub use tool::{FailedTool, MAX_TOOL_NAME_LEN, ToolDefinition, fix_all, fix_tool, generate};
