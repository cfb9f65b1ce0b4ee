//! OpenAPI → tool definition generator
//!
//! Emits one [`ToolDefinition`] per (path, supported method) pair, in document
//! order. Every tool's input schema carries the request `url` (defaulting to
//! `base_url + path`, placeholders left unexpanded) and the fixed HTTP
//! `method`, plus `requestBody` and `params` when the operation declares them.
//!
//! Names are not length-limited here; run the validator afterwards for that.

use super::entities::ToolDefinition;
use super::naming::tool_name;
use crate::core::error::DomainError;
use crate::openapi::{OpenApiDocument, Operation};
use crate::schema::{SchemaFragment, normalize};
use serde_json::json;
use std::collections::HashSet;
use tracing::{info, warn};

pub const JSON_MEDIA_TYPE: &str = "application/json";
pub const MULTIPART_MEDIA_TYPE: &str = "multipart/form-data";

pub const FORM_DATA_DESCRIPTION: &str = "Form data for file upload";
pub const FILE_UPLOAD_NOTES: &str = "Contains file upload. Use base64 encoded content.";

/// Generate tools for every supported operation in `spec`
pub fn generate(spec: &OpenApiDocument, base_url: &str) -> Result<Vec<ToolDefinition>, DomainError> {
    let mut tools = Vec::new();
    let mut seen = HashSet::new();

    for item in spec.paths()? {
        for operation in item.operations()? {
            let tool = operation_tool(&operation, base_url)?;
            if !seen.insert(tool.name.clone()) {
                warn!(name = %tool.name, path = operation.path, "duplicate tool name generated");
            }
            tools.push(tool);
        }
    }

    info!("Generated {} tools from OpenAPI spec", tools.len());
    Ok(tools)
}

fn operation_tool(operation: &Operation<'_>, base_url: &str) -> Result<ToolDefinition, DomainError> {
    let mut input_schema = base_input_schema(operation, base_url);

    if let Some(body) = request_body(operation)? {
        input_schema.insert_property("requestBody", body);
    }

    if let Some(params) = params_schema(operation)? {
        input_schema.insert_property("params", params);
    }

    Ok(ToolDefinition::new(
        tool_name(operation.method, operation.path),
        operation.description(),
        input_schema,
    ))
}

fn base_input_schema(operation: &Operation<'_>, base_url: &str) -> SchemaFragment {
    let mut schema = SchemaFragment::object();
    schema.insert_property(
        "url",
        json!({
            "type": "string",
            "description": "URL to send the request to",
            "default": format!("{base_url}{}", operation.path),
        }),
    );
    schema.insert_property(
        "method",
        json!({
            "type": "string",
            "description": "HTTP method to use",
            "enum": [operation.method.as_upper()],
        }),
    );
    schema.push_required("url");
    schema.push_required("method");
    schema
}

/// Normalized request body schema; JSON content wins over multipart
fn request_body(operation: &Operation<'_>) -> Result<Option<SchemaFragment>, DomainError> {
    if let Some(raw) = operation.request_body_schema(JSON_MEDIA_TYPE)? {
        return Ok(Some(normalize(&SchemaFragment::from(raw.clone()))));
    }

    let Some(raw) = operation.request_body_schema(MULTIPART_MEDIA_TYPE)? else {
        return Ok(None);
    };
    let raw = SchemaFragment::from(raw.clone());
    let mut body = normalize(&raw);
    body.insert("description", FORM_DATA_DESCRIPTION);
    if raw.has_property("file") {
        body.insert("notes", FILE_UPLOAD_NOTES);
    }
    Ok(Some(body))
}

/// Nested `params` object, or `None` when no parameter contributed a property
fn params_schema(operation: &Operation<'_>) -> Result<Option<SchemaFragment>, DomainError> {
    let mut params = SchemaFragment::object();
    let mut added = 0usize;

    for param in operation.parameters()? {
        if let Some(raw) = param.schema {
            let mut schema = SchemaFragment::from(raw.clone());
            if let Some(description) = param.description.filter(|_| !schema.has_description()) {
                schema.insert("description", description);
            }
            params.insert_property(param.name, schema);
            added += 1;
        }
        // Required names are listed even when the parameter has no schema
        if param.required {
            params.push_required(param.name);
        }
    }

    Ok((added > 0).then_some(params))
}
