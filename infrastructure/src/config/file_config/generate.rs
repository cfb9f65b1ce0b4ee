//! Generation configuration from TOML (`[generate]` section)

use agent_tools_application::config::{DEFAULT_FILE_BASE_URL, GenerationConfig};
use serde::{Deserialize, Serialize};

/// Raw generation configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGenerateConfig {
    /// Base URL for specs loaded from a local file
    pub default_base_url: String,
    /// Run the validator after every `generate`
    pub validate: bool,
}

impl Default for FileGenerateConfig {
    fn default() -> Self {
        Self {
            default_base_url: DEFAULT_FILE_BASE_URL.to_string(),
            validate: false,
        }
    }
}

impl FileGenerateConfig {
    /// Convert to the application-layer [`GenerationConfig`]
    pub fn to_generation_config(&self) -> GenerationConfig {
        GenerationConfig::default()
            .with_default_base_url(&self.default_base_url)
            .with_validate(self.validate)
    }
}
