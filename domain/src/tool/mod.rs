//! Tool domain module
//!
//! Tool definitions for LLM tool-calling agents, and the two operations that
//! produce them:
//!
//! ```text
//! ┌──────────────────┐  generate   ┌──────────────────┐  fix_all   ┌──────────────────┐
//! │ OpenApiDocument  │────────────▶│ ToolDefinition[] │───────────▶│ ToolDefinition[] │
//! │ (read-only)      │             │ (raw names)      │            │ + FailedTool[]   │
//! └──────────────────┘             └──────────────────┘            └──────────────────┘
//! ```
//!
//! # Naming
//!
//! Generated names follow `api_call_<method>_<slug(path)>`. Two paths that
//! slugify identically (`/pets/{id}` and `/pets/id`) produce the same name;
//! both tools are emitted and a warning is logged.
//!
//! # Validation
//!
//! [`validator::fix_tool`] accepts any JSON value, so it also serves tool files
//! written by hand. [`validator::fix_all`] is the only operation with
//! partial-failure semantics: a tool that cannot be fixed is reported in the
//! failed list and the rest of the batch continues.

pub mod entities;
pub mod generator;
pub mod naming;
pub mod validator;

pub use entities::{FailedTool, MAX_TOOL_NAME_LEN, ToolDefinition};
pub use generator::generate;
pub use naming::{shorten_name, slug, tool_name};
pub use validator::{fix_all, fix_tool};
