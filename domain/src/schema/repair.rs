//! Post-hoc schema repair for already-built tools
//!
//! Tool files may be written by hand, so this pass accepts any JSON value.
//! It removes `#/components/...` references and folds the common OpenAPI
//! nullable pattern `anyOf: [T, {"type": "null"}]` into `type: [T, "null"]`.
//! Every other mapping and sequence is repaired element-wise.

use super::traverse::{Rewrite, rebuild};
use serde_json::{Map, Value, json};

/// Pointer prefix of references that target agents cannot follow
pub const COMPONENTS_PREFIX: &str = "#/components/";

/// Repair a schema value. Never mutates its argument.
pub fn repair(value: &Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(repair_map(map)),
        other => other.clone(),
    }
}

fn repair_map(source: &Map<String, Value>) -> Map<String, Value> {
    rebuild(source, |key, value| match (key, value) {
        ("$ref", Value::String(pointer)) if pointer.starts_with(COMPONENTS_PREFIX) => {
            Rewrite::Drop
        }
        ("anyOf", Value::Array(options)) => match nullable_branch(options) {
            Some(concrete) => Rewrite::Merge(collapse_nullable(concrete)),
            None => Rewrite::Set(repair_array(options)),
        },
        (_, Value::Object(nested)) => Rewrite::Set(Value::Object(repair_map(nested))),
        (_, Value::Array(items)) => Rewrite::Set(repair_array(items)),
        (_, other) => Rewrite::Set(other.clone()),
    })
}

fn repair_array(items: &[Value]) -> Value {
    Value::Array(items.iter().map(repair).collect())
}

fn is_null_schema(value: &Value) -> bool {
    value.get("type").and_then(Value::as_str) == Some("null")
}

/// The concrete branch of a two-element nullable `anyOf`, if that is what
/// `options` is
fn nullable_branch(options: &[Value]) -> Option<&Map<String, Value>> {
    let [first, second] = options else {
        return None;
    };
    match (is_null_schema(first), is_null_schema(second)) {
        (true, false) => second.as_object(),
        (false, true) => first.as_object(),
        _ => None,
    }
}

fn collapse_nullable(concrete: &Map<String, Value>) -> Map<String, Value> {
    let mut result = Map::new();
    if concrete.contains_key("$ref") {
        result.insert("type".to_string(), json!(["string", "null"]));
        return result;
    }
    for (key, value) in concrete {
        let repaired = if key == "type" {
            json!([value, "null"])
        } else {
            repair(value)
        };
        result.insert(key.clone(), repaired);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nullable_string_collapses() {
        let result = repair(&json!({"anyOf": [{"type": "string"}, {"type": "null"}]}));
        assert_eq!(result, json!({"type": ["string", "null"]}));
        assert!(result.get("anyOf").is_none());
    }

    #[test]
    fn test_null_first_also_collapses() {
        let result = repair(&json!({
            "anyOf": [{"type": "null"}, {"type": "integer", "minimum": 0}],
            "title": "Count"
        }));
        assert_eq!(
            result,
            json!({"type": ["integer", "null"], "minimum": 0, "title": "Count"})
        );
    }

    #[test]
    fn test_nullable_reference_falls_back_to_string() {
        let result = repair(&json!({
            "anyOf": [{"$ref": "#/components/schemas/Pet"}, {"type": "null"}]
        }));
        assert_eq!(result, json!({"type": ["string", "null"]}));
    }

    #[test]
    fn test_nullable_branch_children_are_repaired() {
        let result = repair(&json!({
            "anyOf": [
                {
                    "type": "object",
                    "properties": {"owner": {"$ref": "#/components/schemas/User"}}
                },
                {"type": "null"}
            ]
        }));
        assert_eq!(
            result,
            json!({"type": ["object", "null"], "properties": {"owner": {}}})
        );
    }

    #[test]
    fn test_components_ref_dropped_other_ref_kept() {
        let result = repair(&json!({
            "a": {"$ref": "#/components/schemas/A", "description": "kept"},
            "b": {"$ref": "#/definitions/B"}
        }));
        assert_eq!(
            result,
            json!({"a": {"description": "kept"}, "b": {"$ref": "#/definitions/B"}})
        );
    }

    #[test]
    fn test_non_nullable_any_of_is_repaired_in_place() {
        let result = repair(&json!({
            "anyOf": [{"type": "string"}, {"$ref": "#/components/schemas/X"}]
        }));
        assert_eq!(result, json!({"anyOf": [{"type": "string"}, {}]}));
    }

    #[test]
    fn test_three_way_any_of_untouched() {
        let source = json!({
            "anyOf": [{"type": "string"}, {"type": "integer"}, {"type": "null"}]
        });
        assert_eq!(repair(&source), source);
    }

    #[test]
    fn test_arrays_repaired_element_wise() {
        let result = repair(&json!({
            "items": [{"anyOf": [{"type": "number"}, {"type": "null"}]}, "plain"]
        }));
        assert_eq!(result, json!({"items": [{"type": ["number", "null"]}, "plain"]}));
    }

    #[test]
    fn test_scalars_pass_through() {
        assert_eq!(repair(&json!("text")), json!("text"));
        assert_eq!(repair(&json!(42)), json!(42));
    }
}
