//! Generate tools use case
//!
//! Loads an OpenAPI document, generates one tool per supported operation and,
//! optionally, runs the validator over the result.
//!
//! # Overview
//!
//! 1. **Load** - fetch and parse the spec through [`SpecLoaderPort`]
//! 2. **Resolve base URL** - explicit, else derived from the source
//! 3. **Generate** - [`agent_tools_domain::tool::generate`]
//! 4. **Validate** (optional) - [`agent_tools_domain::tool::fix_all`]
//!
//! # Usage
//!
//! ```ignore
//! use agent_tools_application::{GenerateToolsInput, GenerateToolsUseCase, SpecSource};
//!
//! let input = GenerateToolsInput::new(SpecSource::Url(url)).with_validate(true);
//! let output = use_case.execute(input).await?;
//! println!("{} tools", output.tools.len());
//! ```

use crate::config::GenerationConfig;
use crate::ports::spec_loader::{LoadError, SpecLoaderPort, SpecSource};
use agent_tools_domain::tool::{fix_all, generate};
use agent_tools_domain::{DomainError, FailedTool, ToolDefinition};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur while generating tools
#[derive(Error, Debug)]
pub enum GenerateToolsError {
    /// The spec could not be fetched or parsed.
    #[error(transparent)]
    Load(#[from] LoadError),

    /// The spec was parsed but has the wrong shape.
    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// Input for the GenerateTools use case.
#[derive(Debug, Clone)]
pub struct GenerateToolsInput {
    /// Where to load the spec from.
    pub source: SpecSource,

    /// Base URL for the generated `url` defaults.
    ///
    /// When `None`, derived from the source (see [`SpecSource::default_base_url`]).
    pub base_url: Option<String>,

    /// Run the validator over the generated tools.
    ///
    /// When `None`, the use case's [`GenerationConfig::validate`] applies.
    pub validate: Option<bool>,
}

impl GenerateToolsInput {
    pub fn new(source: SpecSource) -> Self {
        Self {
            source,
            base_url: None,
            validate: None,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn with_validate(mut self, validate: bool) -> Self {
        self.validate = Some(validate);
        self
    }
}

/// Output from the GenerateTools use case.
#[derive(Debug, Clone)]
pub struct GenerateToolsOutput {
    /// Generated (and, if requested, fixed) tools, in document order.
    pub tools: Vec<ToolDefinition>,

    /// Tools the validator could not fix. Always empty without validation.
    pub failed: Vec<FailedTool>,

    /// Base URL the tools were generated with.
    pub base_url: String,

    /// Whether the validator ran.
    pub validated: bool,
}

/// Progress notifier for tool generation.
///
/// All methods have empty default implementations, so you only need
/// to implement the callbacks you're interested in.
pub trait GenerateProgressNotifier: Send + Sync {
    /// Called before the spec is loaded.
    fn on_loading(&self, _source: &SpecSource) {}

    /// Called once the base URL is known.
    fn on_base_url(&self, _base_url: &str) {}

    /// Called before the validator runs.
    fn on_validating(&self, _tool_count: usize) {}

    /// Called when generation (and validation) finished.
    fn on_complete(&self, _output: &GenerateToolsOutput) {}
}

/// No-op implementation of progress notifier.
pub struct NoGenerateProgress;
impl GenerateProgressNotifier for NoGenerateProgress {}

/// Use case for turning an OpenAPI spec into tool definitions.
pub struct GenerateToolsUseCase {
    loader: Arc<dyn SpecLoaderPort>,
    config: GenerationConfig,
}

impl GenerateToolsUseCase {
    pub fn new(loader: Arc<dyn SpecLoaderPort>) -> Self {
        Self {
            loader,
            config: GenerationConfig::default(),
        }
    }

    pub fn with_config(mut self, config: GenerationConfig) -> Self {
        self.config = config;
        self
    }

    /// Executes generation without progress reporting.
    pub async fn execute(
        &self,
        input: GenerateToolsInput,
    ) -> Result<GenerateToolsOutput, GenerateToolsError> {
        self.execute_with_progress(input, &NoGenerateProgress).await
    }

    /// Executes generation with progress notifications.
    ///
    /// # Errors
    ///
    /// - [`GenerateToolsError::Load`] - the spec could not be fetched or parsed
    /// - [`GenerateToolsError::Domain`] - the spec has a malformed structure
    ///
    /// Tools that fail validation are not errors; they are reported in
    /// [`GenerateToolsOutput::failed`].
    pub async fn execute_with_progress(
        &self,
        input: GenerateToolsInput,
        progress: &dyn GenerateProgressNotifier,
    ) -> Result<GenerateToolsOutput, GenerateToolsError> {
        progress.on_loading(&input.source);
        info!("Loading OpenAPI spec from {}", input.source);
        let spec = self.loader.load(&input.source).await?;
        debug!(title = spec.title().unwrap_or("untitled"), "loaded OpenAPI spec");

        let base_url = input
            .base_url
            .unwrap_or_else(|| input.source.default_base_url(&self.config.default_base_url));
        progress.on_base_url(&base_url);
        info!("Using base URL: {}", base_url);

        let tools = generate(&spec, &base_url)?;

        let validate = input.validate.unwrap_or(self.config.validate);
        let (tools, failed) = if validate {
            progress.on_validating(tools.len());
            let raw: Vec<_> = tools.iter().map(ToolDefinition::to_value).collect();
            let (fixed, failed) = fix_all(&raw);
            if !failed.is_empty() {
                warn!("{} tools couldn't be fixed", failed.len());
            }
            (fixed, failed)
        } else {
            (tools, Vec::new())
        };

        let output = GenerateToolsOutput {
            tools,
            failed,
            base_url,
            validated: validate,
        };
        progress.on_complete(&output);
        Ok(output)
    }
}
