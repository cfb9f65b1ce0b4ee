//! Read-only views over a parsed OpenAPI document
//!
//! The document stays an untyped JSON value; these views borrow from it and
//! check shape only where the generator needs to look. Anything malformed on
//! that path is reported as [`DomainError::Structural`].

use super::method::HttpMethod;
use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

type Mapping = Map<String, Value>;

/// A parsed OpenAPI document (JSON or YAML, already decoded)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OpenApiDocument(Value);

impl OpenApiDocument {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    /// `info.title`, when present
    pub fn title(&self) -> Option<&str> {
        self.0
            .get("info")
            .and_then(|info| info.get("title"))
            .and_then(Value::as_str)
    }

    /// Entries of `paths`, in document order. A document without `paths`
    /// has none.
    pub fn paths(&self) -> Result<Vec<PathItem<'_>>, DomainError> {
        let root = self
            .0
            .as_object()
            .ok_or_else(|| DomainError::structural("document root must be a mapping"))?;

        let Some(paths) = root.get("paths") else {
            return Ok(Vec::new());
        };
        let paths = paths
            .as_object()
            .ok_or_else(|| DomainError::structural("'paths' must be a mapping"))?;

        paths
            .iter()
            .map(|(path, item)| {
                let entries = item.as_object().ok_or_else(|| {
                    DomainError::structural(format!("path item '{path}' must be a mapping"))
                })?;
                Ok(PathItem { path, entries })
            })
            .collect()
    }
}

impl From<Value> for OpenApiDocument {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

/// One entry of `paths`
#[derive(Debug, Clone, Copy)]
pub struct PathItem<'a> {
    pub path: &'a str,
    entries: &'a Mapping,
}

impl<'a> PathItem<'a> {
    /// Operations with a supported method, in document order
    ///
    /// Other keys (`put`, `parameters`, `servers`, ...) are skipped before
    /// their shape is checked.
    pub fn operations(&self) -> Result<Vec<Operation<'a>>, DomainError> {
        let mut operations = Vec::new();
        for (key, value) in self.entries {
            let Some(method) = HttpMethod::parse(key) else {
                debug!(path = self.path, key = key.as_str(), "skipping unsupported method");
                continue;
            };
            let raw = value.as_object().ok_or_else(|| {
                DomainError::structural(format!(
                    "operation '{key} {}' must be a mapping",
                    self.path
                ))
            })?;
            operations.push(Operation {
                path: self.path,
                method,
                raw,
            });
        }
        Ok(operations)
    }
}

/// A supported (path, method) pair
#[derive(Debug, Clone, Copy)]
pub struct Operation<'a> {
    pub path: &'a str,
    pub method: HttpMethod,
    raw: &'a Mapping,
}

impl<'a> Operation<'a> {
    /// Human-readable description of the operation
    ///
    /// A present `description` key wins over `summary`, even when empty. An
    /// empty result falls back to the `200` response description.
    pub fn description(&self) -> String {
        let primary = match self.raw.get("description") {
            Some(value) => value.as_str(),
            None => self.raw.get("summary").and_then(Value::as_str),
        };
        match primary {
            Some(text) if !text.is_empty() => text.to_string(),
            _ => self
                .raw
                .get("responses")
                .and_then(|responses| responses.get("200"))
                .and_then(|ok| ok.get("description"))
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string(),
        }
    }

    /// Declared parameters, in order. Missing `parameters` means none.
    pub fn parameters(&self) -> Result<Vec<Parameter<'a>>, DomainError> {
        let Some(params) = self.raw.get("parameters") else {
            return Ok(Vec::new());
        };
        let params = params.as_array().ok_or_else(|| {
            DomainError::structural(format!("parameters of {} must be a sequence", self.label()))
        })?;
        params.iter().map(|p| self.parameter(p)).collect()
    }

    fn parameter(&self, value: &'a Value) -> Result<Parameter<'a>, DomainError> {
        let raw = value.as_object().ok_or_else(|| {
            DomainError::structural(format!("parameter of {} must be a mapping", self.label()))
        })?;
        let name = raw.get("name").and_then(Value::as_str).ok_or_else(|| {
            DomainError::structural(format!(
                "parameter of {} must have a string 'name'",
                self.label()
            ))
        })?;
        let schema = match raw.get("schema") {
            None => None,
            Some(schema) => Some(schema.as_object().ok_or_else(|| {
                DomainError::structural(format!(
                    "schema of parameter '{name}' in {} must be a mapping",
                    self.label()
                ))
            })?),
        };
        Ok(Parameter {
            name,
            required: raw.get("required").and_then(Value::as_bool).unwrap_or(false),
            schema,
            description: raw.get("description").and_then(Value::as_str),
        })
    }

    /// Schema of the request body for one media type, if declared
    pub fn request_body_schema(&self, media_type: &str) -> Result<Option<&'a Mapping>, DomainError> {
        let Some(body) = self.raw.get("requestBody") else {
            return Ok(None);
        };
        let body = body.as_object().ok_or_else(|| {
            DomainError::structural(format!("requestBody of {} must be a mapping", self.label()))
        })?;
        let Some(content) = body.get("content") else {
            return Ok(None);
        };
        let content = content.as_object().ok_or_else(|| {
            DomainError::structural(format!(
                "requestBody.content of {} must be a mapping",
                self.label()
            ))
        })?;
        let Some(media) = content.get(media_type) else {
            return Ok(None);
        };
        let media = media.as_object().ok_or_else(|| {
            DomainError::structural(format!(
                "'{media_type}' content of {} must be a mapping",
                self.label()
            ))
        })?;
        match media.get("schema") {
            None => Ok(None),
            Some(schema) => schema.as_object().map(Some).ok_or_else(|| {
                DomainError::structural(format!(
                    "'{media_type}' schema of {} must be a mapping",
                    self.label()
                ))
            }),
        }
    }

    fn label(&self) -> String {
        format!("{} {}", self.method, self.path)
    }
}

/// One entry of an operation's `parameters`
#[derive(Debug, Clone, Copy)]
pub struct Parameter<'a> {
    pub name: &'a str,
    pub required: bool,
    pub schema: Option<&'a Mapping>,
    pub description: Option<&'a str>,
}
