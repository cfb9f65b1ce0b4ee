//! Console output formatter for command results

use crate::output::formatter::OutputFormatter;
use agent_tools_application::{GenerateToolsOutput, ValidateToolsOutput};
use agent_tools_domain::FailedTool;
use colored::Colorize;
use std::path::Path;

/// Formats command results for console display
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Enable or disable ANSI colors for everything this process prints
    pub fn set_color(enabled: bool) {
        if enabled {
            colored::control::unset_override();
        } else {
            colored::control::set_override(false);
        }
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_generated(&self, output: &GenerateToolsOutput, path: &Path) -> String {
        format!(
            "{} {} tools and saved to {}",
            "Generated".green().bold(),
            output.tools.len(),
            path.display()
        )
    }

    fn format_failures(&self, failed: &[FailedTool]) -> String {
        let mut output = format!(
            "{} {} tools couldn't be fixed",
            "Warning:".yellow().bold(),
            failed.len()
        );
        for tool in failed {
            output.push_str(&format!(
                "\n  {} {}: {}",
                "*".yellow(),
                tool.name().unwrap_or("unknown"),
                tool.error
            ));
        }
        output
    }

    fn format_validation(&self, output: &ValidateToolsOutput) -> String {
        let message = if output.has_failures() {
            output.message().yellow().to_string()
        } else {
            output.message().green().to_string()
        };
        format!(
            "{message}\n{} {}",
            "Output written to:".cyan().bold(),
            output.output_path.display()
        )
    }

    fn format_error(&self, context: &str, error: &str) -> String {
        format!("{} {}", format!("Error {context}:").red().bold(), error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::path::PathBuf;

    fn plain() -> ConsoleFormatter {
        colored::control::set_override(false);
        ConsoleFormatter::new()
    }

    #[test]
    fn test_format_failures_lists_names() {
        let failed = vec![
            FailedTool::new(json!({"name": "broken"}), "Tool is missing required field: input_schema"),
            FailedTool::new(json!({"description": "x"}), "Tool is missing required field: name"),
        ];
        let text = plain().format_failures(&failed);
        assert_eq!(
            text,
            "Warning: 2 tools couldn't be fixed\n\
             \x20 * broken: Tool is missing required field: input_schema\n\
             \x20 * unknown: Tool is missing required field: name"
        );
    }

    #[test]
    fn test_format_validation() {
        let output = ValidateToolsOutput {
            fixed_count: 3,
            failed: Vec::new(),
            output_path: PathBuf::from("tools_fixed.json"),
        };
        assert_eq!(
            plain().format_validation(&output),
            "Fixed 3 tools\nOutput written to: tools_fixed.json"
        );
    }

    #[test]
    fn test_format_error() {
        assert_eq!(
            plain().format_error("generating tools", "Failed to fetch URL: HTTP 404"),
            "Error generating tools: Failed to fetch URL: HTTP 404"
        );
    }
}
