//! JSON/YAML detection and parsing for OpenAPI documents
//!
//! Specs arrive as JSON or YAML with no reliable marker. The rules, in order:
//!
//! 1. A filename ending in `.yml`/`.yaml` means YAML.
//! 2. Content that looks like YAML ([`is_yaml_content`]) is parsed as YAML.
//! 3. Otherwise JSON, falling back to YAML.
//!
//! YAML is converted into the same `serde_json::Value` tree JSON produces, so
//! the domain layer never sees the difference.

use agent_tools_application::LoadError;
use agent_tools_domain::OpenApiDocument;
use regex::Regex;
use serde_json::{Map, Number, Value};
use serde_yaml::Value as Yaml;
use std::sync::LazyLock;
use tracing::debug;

/// A top-level `key: value` line
static YAML_KEY_LINE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?m)^[a-zA-Z0-9_-]+:\s.*$").ok());

/// Characters inspected for a `---` document marker
const MARKER_WINDOW: usize = 20;

/// Characters inspected for an `openapi:` key
const OPENAPI_KEY_WINDOW: usize = 1000;

/// Whether `content` looks like YAML rather than JSON
pub fn is_yaml_content(content: &str) -> bool {
    if content.is_empty() {
        return false;
    }
    YAML_KEY_LINE.as_ref().is_some_and(|re| re.is_match(content))
        || head(content, MARKER_WINDOW).contains("---")
        || head(content, OPENAPI_KEY_WINDOW).contains("openapi:")
}

/// Whether a downloaded body should be tried as YAML before anything else
pub(crate) fn has_yaml_preamble(content: &str) -> bool {
    content.trim_start().starts_with("---") || head(content, OPENAPI_KEY_WINDOW).contains("openapi:")
}

/// Parse `content` as an OpenAPI document
///
/// `filename` is only used for its extension.
pub fn parse_spec(content: &str, filename: Option<&str>) -> Result<OpenApiDocument, LoadError> {
    let has_yaml_extension = filename.is_some_and(|name| {
        let name = name.to_lowercase();
        name.ends_with(".yml") || name.ends_with(".yaml")
    });

    if has_yaml_extension || is_yaml_content(content) {
        debug!(by_extension = has_yaml_extension, "parsing spec as YAML");
        return parse_yaml(content)
            .map(OpenApiDocument::new)
            .map_err(|e| LoadError::Parse(format!("Invalid YAML content: {e}")));
    }

    match serde_json::from_str::<Value>(content) {
        Ok(value) => Ok(OpenApiDocument::new(value)),
        Err(json_err) => {
            debug!(error = %json_err, "JSON parse failed, trying YAML");
            parse_yaml(content).map(OpenApiDocument::new).map_err(|_| {
                LoadError::Parse(format!(
                    "Failed to parse as either JSON or YAML: {json_err}"
                ))
            })
        }
    }
}

/// Parse YAML into a JSON value tree, resolving `<<` merge keys first
pub(crate) fn parse_yaml(content: &str) -> Result<Value, serde_yaml::Error> {
    let mut value = serde_yaml::from_str::<Yaml>(content)?;
    value.apply_merge()?;
    Ok(yaml_to_json(value))
}

/// Convert a YAML value into JSON
///
/// Mapping keys that are not strings (`200:`, `true:`) take their scalar text
/// form. Tags are dropped. Non-finite floats become `null`.
fn yaml_to_json(value: Yaml) -> Value {
    match value {
        Yaml::Null => Value::Null,
        Yaml::Bool(b) => Value::Bool(b),
        Yaml::Number(n) => yaml_number(&n),
        Yaml::String(s) => Value::String(s),
        Yaml::Sequence(items) => Value::Array(items.into_iter().map(yaml_to_json).collect()),
        Yaml::Mapping(mapping) => {
            let mut map = Map::with_capacity(mapping.len());
            for (key, value) in mapping {
                map.insert(yaml_key(key), yaml_to_json(value));
            }
            Value::Object(map)
        }
        Yaml::Tagged(tagged) => yaml_to_json(tagged.value),
    }
}

fn yaml_number(n: &serde_yaml::Number) -> Value {
    if let Some(i) = n.as_i64() {
        Value::Number(i.into())
    } else if let Some(u) = n.as_u64() {
        Value::Number(u.into())
    } else {
        n.as_f64()
            .and_then(Number::from_f64)
            .map_or(Value::Null, Value::Number)
    }
}

fn yaml_key(key: Yaml) -> String {
    match key {
        Yaml::String(s) => s,
        Yaml::Null => "null".to_string(),
        Yaml::Bool(b) => b.to_string(),
        Yaml::Number(n) => n.to_string(),
        Yaml::Tagged(tagged) => yaml_key(tagged.value),
        other => yaml_to_json(other).to_string(),
    }
}

fn head(content: &str, max_chars: usize) -> &str {
    match content.char_indices().nth(max_chars) {
        Some((idx, _)) => &content[..idx],
        None => content,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const PETSTORE_YAML: &str = "openapi: 3.0.0
info:
  title: Petstore
paths:
  /pets:
    get:
      summary: List pets
      responses:
        200:
          description: A list of pets
";

    #[test]
    fn test_is_yaml_content() {
        assert!(is_yaml_content(PETSTORE_YAML));
        assert!(is_yaml_content("---\n"));
        assert!(!is_yaml_content(r#"{"openapi": "3.0.0"}"#));
        assert!(!is_yaml_content(""));
    }

    #[test]
    fn test_pretty_json_is_not_yaml() {
        let pretty = serde_json::to_string_pretty(&json!({"openapi": "3.0.0", "paths": {}})).unwrap();
        assert!(!is_yaml_content(&pretty));
    }

    #[test]
    fn test_parse_yaml_with_integer_keys() {
        let spec = parse_spec(PETSTORE_YAML, None).unwrap();
        let value = spec.as_value();
        assert_eq!(value["openapi"], "3.0.0");
        assert_eq!(
            value["paths"]["/pets"]["get"]["responses"]["200"]["description"],
            "A list of pets"
        );
    }

    #[test]
    fn test_parse_json() {
        let spec = parse_spec(r#"{"openapi": "3.1.0", "paths": {}}"#, Some("spec.json")).unwrap();
        assert_eq!(spec.as_value(), &json!({"openapi": "3.1.0", "paths": {}}));
    }

    #[test]
    fn test_yaml_merge_keys_are_resolved() {
        let content = "components:
  schemas:
    Base: &base
      type: object
      description: base
    Pet:
      <<: *base
      title: Pet
";
        let spec = parse_spec(content, Some("spec.yaml")).unwrap();
        let pet = &spec.as_value()["components"]["schemas"]["Pet"];
        assert!(pet.get("<<").is_none());
        assert_eq!(pet["type"], "object");
        assert_eq!(pet["description"], "base");
        assert_eq!(pet["title"], "Pet");
    }

    #[test]
    fn test_json_keeps_key_order() {
        let spec = parse_spec(r#"{"paths": {"/b": {}, "/a": {}}}"#, None).unwrap();
        let keys: Vec<&String> = spec.as_value()["paths"].as_object().unwrap().keys().collect();
        assert_eq!(keys, vec!["/b", "/a"]);
    }

    #[test]
    fn test_extension_forces_yaml() {
        // Valid JSON is valid YAML too, so a .yaml name still parses
        let spec = parse_spec(r#"{"openapi": "3.0.0"}"#, Some("API.YAML")).unwrap();
        assert_eq!(spec.as_value()["openapi"], "3.0.0");

        let err = parse_spec("paths: [unclosed", Some("spec.yml")).unwrap_err();
        assert!(err.to_string().contains("Invalid YAML content"));
    }

    #[test]
    fn test_json_failure_falls_back_to_yaml() {
        // No `key: value` line at column 0, so detection says JSON
        let spec = parse_spec("  - a\n  - b\n", None).unwrap();
        assert_eq!(spec.as_value(), &json!(["a", "b"]));
    }

    #[test]
    fn test_unparseable_content() {
        let err = parse_spec("{\"openapi\": ", None).unwrap_err();
        assert!(matches!(err, LoadError::Parse(ref msg) if msg.starts_with("Failed to parse as either JSON or YAML")));
    }

    #[test]
    fn test_yaml_preamble() {
        assert!(has_yaml_preamble("\n\n---\nopenapi: 3.0.0"));
        assert!(has_yaml_preamble("{\"x\": 1}\nopenapi: 3"));
        assert!(!has_yaml_preamble("{\"openapi\": \"3.0.0\"}"));
    }

    #[test]
    fn test_head_counts_characters() {
        assert_eq!(head("ééé", 2), "éé");
        assert_eq!(head("ab", 5), "ab");
    }
}
