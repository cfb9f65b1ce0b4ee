//! Validate tools use case
//!
//! Reads a tool definition file, fixes every tool it can and writes the fixed
//! tools next to the input (or to an explicit path). Tools that cannot be
//! fixed are left out of the output and reported back to the caller.

use crate::ports::tool_store::{StoreError, ToolStorePort, fixed_output_path};
use agent_tools_domain::FailedTool;
use agent_tools_domain::tool::fix_all;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

/// Errors that can occur while validating a tool file
#[derive(Error, Debug)]
pub enum ValidateToolsError {
    #[error("Failed to read tools from {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: StoreError,
    },

    #[error("Failed to write tools to {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: StoreError,
    },
}

/// Input for the ValidateTools use case.
#[derive(Debug, Clone)]
pub struct ValidateToolsInput {
    /// File holding a JSON array of tool definitions.
    pub input: PathBuf,

    /// Where to write fixed tools. Defaults to `<stem>_fixed.<ext>` of `input`.
    pub output: Option<PathBuf>,
}

impl ValidateToolsInput {
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: None,
        }
    }

    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = Some(output.into());
        self
    }

    fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| fixed_output_path(&self.input))
    }
}

/// Output from the ValidateTools use case.
#[derive(Debug, Clone)]
pub struct ValidateToolsOutput {
    /// Number of tools written to `output_path`.
    pub fixed_count: usize,

    /// Tools left out of the output, with the reason each failed.
    pub failed: Vec<FailedTool>,

    /// File the fixed tools were written to.
    pub output_path: PathBuf,
}

impl ValidateToolsOutput {
    /// One-line summary: `Fixed N tools` plus the failure count, if any
    pub fn message(&self) -> String {
        let mut message = format!("Fixed {} tools", self.fixed_count);
        if !self.failed.is_empty() {
            message.push_str(&format!(
                ", but {} tools could not be fixed",
                self.failed.len()
            ));
        }
        message
    }

    pub fn has_failures(&self) -> bool {
        !self.failed.is_empty()
    }
}

/// Use case for fixing a file of tool definitions.
pub struct ValidateToolsUseCase {
    store: Arc<dyn ToolStorePort>,
}

impl ValidateToolsUseCase {
    pub fn new(store: Arc<dyn ToolStorePort>) -> Self {
        Self { store }
    }

    /// Reads, fixes and writes the tools.
    ///
    /// # Errors
    ///
    /// Returns [`ValidateToolsError::Read`] when the input is unreadable, is
    /// not JSON, or is not a JSON array, and [`ValidateToolsError::Write`]
    /// when the output cannot be written. Individual tools that fail
    /// validation are not errors.
    pub async fn execute(
        &self,
        input: ValidateToolsInput,
    ) -> Result<ValidateToolsOutput, ValidateToolsError> {
        let raw = self
            .store
            .read_tools(&input.input)
            .await
            .map_err(|source| ValidateToolsError::Read {
                path: input.input.clone(),
                source,
            })?;

        let (fixed, failed) = fix_all(&raw);

        let output_path = input.output_path();
        self.store
            .write_tools(&output_path, &fixed)
            .await
            .map_err(|source| ValidateToolsError::Write {
                path: output_path.clone(),
                source,
            })?;

        let output = ValidateToolsOutput {
            fixed_count: fixed.len(),
            failed,
            output_path,
        };
        info!("{}", output.message());
        Ok(output)
    }
}
