//! Application layer for openapi-agent-tools
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::GenerationConfig;
pub use ports::{
    spec_loader::{LoadError, SpecLoaderPort, SpecSource},
    tool_store::{StoreError, ToolStorePort, fixed_output_path},
};
pub use use_cases::generate_tools::{
    GenerateProgressNotifier, GenerateToolsError, GenerateToolsInput, GenerateToolsOutput,
    GenerateToolsUseCase, NoGenerateProgress,
};
pub use use_cases::validate_tools::{
    ValidateToolsError, ValidateToolsInput, ValidateToolsOutput, ValidateToolsUseCase,
};
