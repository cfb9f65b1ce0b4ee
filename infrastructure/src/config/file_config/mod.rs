//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and converted to application types where
//! the application needs them.

mod generate;
mod http;
mod output;

pub use generate::FileGenerateConfig;
pub use http::{DEFAULT_USER_AGENT, FileHttpConfig};
pub use output::FileOutputConfig;

use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity of a configuration issue
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// The configuration cannot work at all.
    Error,
    /// The configuration works but may not behave as expected.
    Warning,
}

/// A detected issue in the loaded configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigIssue {
    pub severity: Severity,
    /// Dotted key of the offending field, e.g. `http.timeout_secs`
    pub field: &'static str,
    pub message: String,
}

impl ConfigIssue {
    fn warning(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            field,
            message: message.into(),
        }
    }

    fn error(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for ConfigIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Generation settings
    pub generate: FileGenerateConfig,
    /// Spec download settings
    pub http: FileHttpConfig,
    /// Output settings
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        if self.generate.default_base_url.trim().is_empty() {
            issues.push(ConfigIssue::warning(
                "generate.default_base_url",
                "empty base URL; generated tools from files will carry bare paths",
            ));
        }

        if self.http.user_agent.trim().is_empty() {
            issues.push(ConfigIssue::warning(
                "http.user_agent",
                "empty User-Agent; some hosts reject such requests",
            ));
        }

        if self.http.timeout_secs == 0 {
            issues.push(ConfigIssue::error(
                "http.timeout_secs",
                "timeout cannot be 0",
            ));
        }

        if self.output.indent > 8 {
            issues.push(ConfigIssue::warning(
                "output.indent",
                format!("indent of {} spaces is unusually wide", self.output.indent),
            ));
        }

        issues
    }
}
