//! Spec loader port
//!
//! Defines the interface for obtaining a parsed OpenAPI document from a file
//! or a URL.

use agent_tools_domain::OpenApiDocument;
use async_trait::async_trait;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a spec
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Failed to read spec: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to fetch URL: {0}")]
    Http(String),

    #[error("Failed to fetch URL: HTTP {0}")]
    HttpStatus(u16),

    #[error("Failed to parse spec: {0}")]
    Parse(String),
}

/// Where an OpenAPI document comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpecSource {
    File(PathBuf),
    Url(String),
}

impl SpecSource {
    /// Base URL to use when the caller gives none
    ///
    /// For a URL this is everything before its last `/`, so the spec's own
    /// directory. Files have no address of their own and use `file_default`.
    pub fn default_base_url(&self, file_default: &str) -> String {
        match self {
            SpecSource::Url(url) => match url.rsplit_once('/') {
                Some((dir, _)) => dir.to_string(),
                None => url.clone(),
            },
            SpecSource::File(_) => file_default.to_string(),
        }
    }
}

impl fmt::Display for SpecSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpecSource::File(path) => write!(f, "file: {}", path.display()),
            SpecSource::Url(url) => write!(f, "URL: {url}"),
        }
    }
}

/// Port for loading OpenAPI documents
///
/// Implementations (adapters) live in the infrastructure layer and own
/// transport, text decoding and JSON/YAML detection.
#[async_trait]
pub trait SpecLoaderPort: Send + Sync {
    /// Load and parse the document at `source`
    async fn load(&self, source: &SpecSource) -> Result<OpenApiDocument, LoadError>;
}
