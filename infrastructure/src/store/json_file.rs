//! JSON file adapter for [`ToolStorePort`]

use agent_tools_application::{StoreError, ToolStorePort};
use agent_tools_domain::ToolDefinition;
use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::path::Path;
use tracing::debug;

/// Reads and writes tool definitions as a JSON array on disk
#[derive(Debug, Clone)]
pub struct JsonFileToolStore {
    indent: usize,
}

impl JsonFileToolStore {
    /// `indent` is the number of spaces per nesting level in written files
    pub fn new(indent: usize) -> Self {
        Self { indent }
    }
}

impl Default for JsonFileToolStore {
    fn default() -> Self {
        Self::new(2)
    }
}

/// Serialize `value` as pretty JSON with `indent` spaces per level
pub fn write_indented<T: Serialize + ?Sized>(
    value: &T,
    indent: usize,
) -> Result<String, serde_json::Error> {
    let indent = " ".repeat(indent);
    let mut buf = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(indent.as_bytes()));
    value.serialize(&mut serializer)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

#[async_trait]
impl ToolStorePort for JsonFileToolStore {
    async fn read_tools(&self, path: &Path) -> Result<Vec<Value>, StoreError> {
        let content = tokio::fs::read_to_string(path).await?;
        match serde_json::from_str::<Value>(&content)? {
            Value::Array(tools) => {
                debug!(count = tools.len(), path = %path.display(), "read tool definitions");
                Ok(tools)
            }
            _ => Err(StoreError::NotAList),
        }
    }

    async fn write_tools(&self, path: &Path, tools: &[ToolDefinition]) -> Result<(), StoreError> {
        let json = write_indented(tools, self.indent)?;
        tokio::fs::write(path, json).await?;
        debug!(count = tools.len(), path = %path.display(), "wrote tool definitions");
        Ok(())
    }
}
