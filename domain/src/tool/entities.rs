//! Tool domain entities

use crate::schema::SchemaFragment;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Longest tool name the target agent accepts
pub const MAX_TOOL_NAME_LEN: usize = 64;

/// Definition of a tool that an LLM agent can call
///
/// Serialized as `{"name", "description", "input_schema"}` followed by any
/// extra top-level keys a hand-written tool carried (e.g. `cache_control`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolDefinition {
    /// Tool name (e.g., "api_call_get_pets_petId")
    pub name: String,
    /// Human-readable description; may be empty for generated tools
    pub description: String,
    /// Input schema, rooted at `type: object`
    pub input_schema: SchemaFragment,
    /// Unrecognized top-level keys, kept as-is
    #[serde(flatten, skip_serializing_if = "Map::is_empty", default)]
    pub extra: Map<String, Value>,
}

impl ToolDefinition {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        input_schema: SchemaFragment,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            input_schema,
            extra: Map::new(),
        }
    }

    pub fn to_value(&self) -> Value {
        let mut map = Map::new();
        map.insert("name".to_string(), Value::String(self.name.clone()));
        map.insert(
            "description".to_string(),
            Value::String(self.description.clone()),
        );
        map.insert("input_schema".to_string(), self.input_schema.clone().into_value());
        for (key, value) in &self.extra {
            map.insert(key.clone(), value.clone());
        }
        Value::Object(map)
    }
}

/// A tool the validator could not fix, with the reason
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FailedTool {
    /// The tool exactly as it was supplied
    pub tool: Value,
    /// Display form of the error
    pub error: String,
}

impl FailedTool {
    pub fn new(tool: Value, error: impl Into<String>) -> Self {
        Self {
            tool,
            error: error.into(),
        }
    }

    /// Name of the failed tool, if it had a string one
    pub fn name(&self) -> Option<&str> {
        self.tool.get("name").and_then(Value::as_str)
    }
}
