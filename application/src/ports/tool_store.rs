//! Tool store port
//!
//! Defines the interface for reading and writing tool definition files.

use agent_tools_domain::ToolDefinition;
use async_trait::async_trait;
use serde_json::Value;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while reading or writing tool files
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Input file does not contain a list of tools")]
    NotAList,
}

/// Port for tool definition files
///
/// Tools are read as raw JSON values because a file may hold definitions
/// that do not yet satisfy [`ToolDefinition`]'s shape.
#[async_trait]
pub trait ToolStorePort: Send + Sync {
    /// Read a JSON array of tool definitions
    async fn read_tools(&self, path: &Path) -> Result<Vec<Value>, StoreError>;

    /// Write tool definitions as a JSON array
    async fn write_tools(&self, path: &Path, tools: &[ToolDefinition]) -> Result<(), StoreError>;
}

/// Output path for fixed tools: `tools.json` → `tools_fixed.json`
///
/// Splits on the last `.` of the whole path; a path without one gets a
/// `_fixed` suffix.
pub fn fixed_output_path(input: &Path) -> PathBuf {
    let input = input.to_string_lossy();
    match input.rsplit_once('.') {
        Some((stem, ext)) => PathBuf::from(format!("{stem}_fixed.{ext}")),
        None => PathBuf::from(format!("{input}_fixed")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_output_path_with_extension() {
        assert_eq!(
            fixed_output_path(Path::new("out/tools.json")),
            PathBuf::from("out/tools_fixed.json")
        );
    }

    #[test]
    fn test_fixed_output_path_without_extension() {
        assert_eq!(
            fixed_output_path(Path::new("tools")),
            PathBuf::from("tools_fixed")
        );
    }

    #[test]
    fn test_fixed_output_path_splits_on_last_dot() {
        assert_eq!(
            fixed_output_path(Path::new("tools.v2.json")),
            PathBuf::from("tools.v2_fixed.json")
        );
    }
}
