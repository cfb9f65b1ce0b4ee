//! Tool validation and repair
//!
//! Makes a tool definition acceptable to the target agent: required fields
//! present, name within [`MAX_TOOL_NAME_LEN`](super::entities::MAX_TOOL_NAME_LEN),
//! and an `input_schema` without component references or nullable `anyOf`
//! unions. The input value is never modified; a fixed copy is returned.

use super::entities::{FailedTool, ToolDefinition};
use super::naming::shorten_name;
use crate::core::error::DomainError;
use crate::schema::{SchemaFragment, repair};
use serde_json::{Map, Value};
use tracing::{debug, warn};

const STANDARD_FIELDS: [&str; 3] = ["name", "description", "input_schema"];

/// Validate one tool and return a fixed copy
///
/// Fails when the tool has no `name` or no `input_schema`, or when
/// `input_schema` is not a mapping. A missing `description` is derived from
/// the name, as is a `null` one.
pub fn fix_tool(tool: &Value) -> Result<ToolDefinition, DomainError> {
    let fields = tool.as_object().ok_or(DomainError::NotAnObject)?;

    let name = string_field(fields, "name")?
        .ok_or_else(|| DomainError::MissingField("name".to_string()))?;

    let description = match fields.get("description") {
        None | Some(Value::Null) => default_description(name),
        Some(Value::String(description)) => description.clone(),
        Some(_) => {
            return Err(DomainError::FieldType {
                field: "description".to_string(),
                expected: "string",
            });
        }
    };

    let input_schema = fields
        .get("input_schema")
        .ok_or_else(|| DomainError::MissingField("input_schema".to_string()))?;
    let mut input_schema = SchemaFragment::from_value(input_schema).ok_or(DomainError::SchemaType)?;
    if !input_schema.has_type() {
        input_schema.insert("type", "object");
    }
    let input_schema = SchemaFragment::from_value(&repair(&input_schema.into_value()))
        .ok_or(DomainError::SchemaType)?;

    let fixed_name = shorten_name(name);
    if fixed_name != name {
        debug!(original = name, shortened = %fixed_name, "shortened tool name");
    }

    let extra = fields
        .iter()
        .filter(|(key, _)| !STANDARD_FIELDS.contains(&key.as_str()))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect();

    Ok(ToolDefinition {
        name: fixed_name,
        description,
        input_schema,
        extra,
    })
}

/// Validate every tool, in order, without stopping at failures
///
/// Returns the fixed tools and, separately, each tool that could not be
/// fixed together with the reason.
pub fn fix_all(tools: &[Value]) -> (Vec<ToolDefinition>, Vec<FailedTool>) {
    let mut fixed = Vec::with_capacity(tools.len());
    let mut failed = Vec::new();

    for (index, tool) in tools.iter().enumerate() {
        match fix_tool(tool) {
            Ok(tool) => fixed.push(tool),
            Err(e) => {
                let name = tool.get("name").and_then(Value::as_str).unwrap_or("unknown");
                warn!("Error fixing tool {} ({}): {}", index, name, e);
                failed.push(FailedTool::new(tool.clone(), e.to_string()));
            }
        }
    }

    (fixed, failed)
}

/// `"Tool to " + name with underscores as spaces`
pub fn default_description(name: &str) -> String {
    format!("Tool to {}", name.replace('_', " "))
}

fn string_field<'a>(fields: &'a Map<String, Value>, field: &str) -> Result<Option<&'a str>, DomainError> {
    match fields.get(field) {
        None => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(_) => Err(DomainError::FieldType {
            field: field.to_string(),
            expected: "string",
        }),
    }
}
