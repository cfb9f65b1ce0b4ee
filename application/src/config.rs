//! Application-level configuration.
//!
//! Settings that control how the use cases behave independently of where
//! they were loaded from.

/// Base URL used for tools generated from a local file when none is given
pub const DEFAULT_FILE_BASE_URL: &str = "http://localhost:9999";

/// Generation behavior configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationConfig {
    /// Base URL for specs loaded from a file when the caller gives none.
    pub default_base_url: String,
    /// Run the validator after generation unless the caller says otherwise.
    pub validate: bool,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            default_base_url: DEFAULT_FILE_BASE_URL.to_string(),
            validate: false,
        }
    }
}

impl GenerationConfig {
    /// Creates a GenerationConfig with a custom file base URL.
    pub fn with_default_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.default_base_url = base_url.into();
        self
    }

    /// Enables or disables validation after generation.
    pub fn with_validate(mut self, validate: bool) -> Self {
        self.validate = validate;
        self
    }
}
