//! Schema fragment value object

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Keywords that express alternative or combined schema branches
pub const COMPOSITION_KEYWORDS: [&str; 3] = ["anyOf", "oneOf", "allOf"];

/// Coarse classification of a [`SchemaFragment`]
///
/// Computed from the fragment's keys; the fragment itself keeps every keyword,
/// including ones this crate does not model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaKind {
    /// Has `properties` or `type: "object"`
    Object,
    /// Has `items` or `type: "array"`
    Array,
    /// Has `anyOf`, `oneOf` or `allOf`
    Composition,
    /// Has `$ref`
    Reference,
    /// Anything else (scalar types, enums, empty fragments)
    Leaf,
}

/// A JSON-Schema-like mapping
///
/// Key order is preserved. Keys that have no dedicated accessor (`enum`,
/// `default`, `format`, vendor extensions) stay in the map untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SchemaFragment(Map<String, Value>);

impl SchemaFragment {
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Build a fragment from a JSON value, if it is an object
    pub fn from_value(value: &Value) -> Option<Self> {
        value.as_object().cloned().map(Self)
    }

    /// Start an object schema: `{"type": "object", "properties": {}, "required": []}`
    pub fn object() -> Self {
        Self::new()
            .with("type", "object")
            .with("properties", Value::Object(Map::new()))
            .with("required", Value::Array(Vec::new()))
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    pub fn kind(&self) -> SchemaKind {
        if self.0.contains_key("$ref") {
            SchemaKind::Reference
        } else if COMPOSITION_KEYWORDS.iter().any(|k| self.0.contains_key(*k)) {
            SchemaKind::Composition
        } else if self.0.contains_key("properties") || self.schema_type() == Some("object") {
            SchemaKind::Object
        } else if self.0.contains_key("items") || self.schema_type() == Some("array") {
            SchemaKind::Array
        } else {
            SchemaKind::Leaf
        }
    }

    /// The `type` keyword when it is a single string
    pub fn schema_type(&self) -> Option<&str> {
        self.0.get("type").and_then(Value::as_str)
    }

    pub fn has_type(&self) -> bool {
        self.0.contains_key("type")
    }

    pub fn description(&self) -> Option<&str> {
        self.0.get("description").and_then(Value::as_str)
    }

    pub fn has_description(&self) -> bool {
        self.0.contains_key("description")
    }

    pub fn properties(&self) -> Option<&Map<String, Value>> {
        self.0.get("properties").and_then(Value::as_object)
    }

    /// Whether the top-level `properties` mapping declares `name`
    pub fn has_property(&self, name: &str) -> bool {
        self.properties().is_some_and(|props| props.contains_key(name))
    }

    /// Insert a named property schema, creating `properties` if needed
    pub fn insert_property(&mut self, name: impl Into<String>, schema: impl Into<Value>) {
        let entry = self
            .0
            .entry("properties")
            .or_insert_with(|| Value::Object(Map::new()));
        if !entry.is_object() {
            *entry = Value::Object(Map::new());
        }
        if let Value::Object(props) = entry {
            props.insert(name.into(), schema.into());
        }
    }

    /// Append a name to the `required` list, creating it if needed
    pub fn push_required(&mut self, name: impl Into<String>) {
        let entry = self
            .0
            .entry("required")
            .or_insert_with(|| Value::Array(Vec::new()));
        if !entry.is_array() {
            *entry = Value::Array(Vec::new());
        }
        if let Value::Array(required) = entry {
            required.push(Value::String(name.into()));
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(key.into(), value.into())
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }
}

impl From<Map<String, Value>> for SchemaFragment {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl From<SchemaFragment> for Value {
    fn from(fragment: SchemaFragment) -> Self {
        fragment.into_value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fragment(value: Value) -> SchemaFragment {
        SchemaFragment::from_value(&value).unwrap()
    }

    #[test]
    fn test_kind_classification() {
        assert_eq!(
            fragment(json!({"$ref": "#/components/schemas/Pet"})).kind(),
            SchemaKind::Reference
        );
        assert_eq!(
            fragment(json!({"anyOf": [{"type": "string"}]})).kind(),
            SchemaKind::Composition
        );
        assert_eq!(
            fragment(json!({"properties": {"a": {}}})).kind(),
            SchemaKind::Object
        );
        assert_eq!(fragment(json!({"type": "array"})).kind(), SchemaKind::Array);
        assert_eq!(fragment(json!({"type": "string"})).kind(), SchemaKind::Leaf);
        assert_eq!(SchemaFragment::new().kind(), SchemaKind::Leaf);
    }

    #[test]
    fn test_from_value_rejects_non_objects() {
        assert!(SchemaFragment::from_value(&json!("string")).is_none());
        assert!(SchemaFragment::from_value(&json!([1, 2])).is_none());
    }

    #[test]
    fn test_object_builder_and_required() {
        let mut schema = SchemaFragment::object();
        schema.insert_property("url", json!({"type": "string"}));
        schema.push_required("url");

        assert_eq!(schema.schema_type(), Some("object"));
        assert!(schema.has_property("url"));
        assert!(!schema.has_property("method"));
        assert_eq!(schema.get("required"), Some(&json!(["url"])));
    }

    #[test]
    fn test_serializes_transparently_in_order() {
        let schema = SchemaFragment::new()
            .with("type", "string")
            .with("description", "A name");
        let json = serde_json::to_string(&schema).unwrap();
        assert_eq!(json, r#"{"type":"string","description":"A name"}"#);
    }
}
