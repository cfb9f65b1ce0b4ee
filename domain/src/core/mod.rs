//! Core domain concepts shared across all subdomains.
//!
//! - [`error::DomainError`] - domain-level errors
//! - [`string`] - character-based string helpers used for tool names

pub mod error;
pub mod string;
