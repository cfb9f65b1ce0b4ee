//! Infrastructure layer for openapi-agent-tools
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod loader;
pub mod store;

// Re-export commonly used types
pub use config::{
    ConfigIssue, ConfigLoader, FileConfig, FileGenerateConfig, FileHttpConfig, FileOutputConfig,
    Severity,
};
pub use loader::{HttpSettings, SpecLoader, is_yaml_content, parse_spec};
pub use store::{JsonFileToolStore, write_indented};
