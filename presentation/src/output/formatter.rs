//! Output formatter trait

use agent_tools_application::{GenerateToolsOutput, ValidateToolsOutput};
use agent_tools_domain::FailedTool;
use std::path::Path;

/// Trait for formatting command results for the user
pub trait OutputFormatter {
    /// Summary after `generate` wrote its tools to `path`
    fn format_generated(&self, output: &GenerateToolsOutput, path: &Path) -> String;

    /// Warning listing tools the validator could not fix
    fn format_failures(&self, failed: &[FailedTool]) -> String;

    /// Result of `validate`
    fn format_validation(&self, output: &ValidateToolsOutput) -> String;

    /// A fatal error, prefixed with what was being attempted
    fn format_error(&self, context: &str, error: &str) -> String;
}
