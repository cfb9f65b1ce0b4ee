//! Configuration file loading for openapi-agent-tools
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `OPENAPI_AGENT_TOOLS_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./openapi-agent-tools.toml` or `./.openapi-agent-tools.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/openapi-agent-tools/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigIssue, FileConfig, FileGenerateConfig, FileHttpConfig, FileOutputConfig, Severity,
};
pub use loader::ConfigLoader;
