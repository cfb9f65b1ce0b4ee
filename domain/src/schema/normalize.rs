//! Generation-time schema simplification
//!
//! Request body schemas taken from an OpenAPI document are rewritten into a
//! self-contained form: references are dropped, compositions collapse to their
//! first branch, and every mapping ends up with a `type` and a `description`.
//!
//! The composition handling is lossy on purpose. For `anyOf: [A, B]` the result
//! is `normalize(A)` with an annotated description; nothing from `B` survives.

use super::fragment::{COMPOSITION_KEYWORDS, SchemaFragment};
use super::traverse::{Rewrite, rebuild};
use serde_json::{Map, Value};
use tracing::trace;

/// Type assigned to fragments that declare none
pub const DEFAULT_TYPE: &str = "object";

/// Description assigned to fragments that declare none
pub const DEFAULT_DESCRIPTION: &str = "No description available";

/// Suffix appended to the description of a collapsed composition
pub const SIMPLIFIED_SUFFIX: &str = " (Simplified from multiple options)";

/// Normalize a schema fragment. Never mutates its argument.
pub fn normalize(fragment: &SchemaFragment) -> SchemaFragment {
    trace!(kind = ?fragment.kind(), "normalizing schema fragment");
    SchemaFragment::from(normalize_map(fragment.as_map()))
}

fn normalize_map(source: &Map<String, Value>) -> Map<String, Value> {
    let mut result = rebuild(source, |key, value| match (key, value) {
        ("$ref", _) => Rewrite::Drop,
        ("properties", Value::Object(props)) => {
            let normalized = props
                .iter()
                .map(|(name, schema)| (name.clone(), normalize_value(schema)))
                .collect();
            Rewrite::Set(Value::Object(normalized))
        }
        (_, Value::Object(nested)) => Rewrite::Set(Value::Object(normalize_map(nested))),
        (k, options) if COMPOSITION_KEYWORDS.contains(&k) => collapse_composition(source, options),
        (_, other) => Rewrite::Set(other.clone()),
    });

    if !result.contains_key("type") {
        result.insert("type".to_string(), Value::from(DEFAULT_TYPE));
    }
    if !result.contains_key("description") {
        result.insert("description".to_string(), Value::from(DEFAULT_DESCRIPTION));
    }
    result
}

fn normalize_value(value: &Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(normalize_map(map)),
        other => other.clone(),
    }
}

/// Take the first branch of a composition and merge it into the parent
fn collapse_composition(parent: &Map<String, Value>, options: &Value) -> Rewrite {
    let Some(Value::Object(first)) = options.as_array().and_then(|o| o.first()) else {
        return Rewrite::Drop;
    };

    let mut merged = normalize_map(first);
    let original = parent
        .get("description")
        .and_then(Value::as_str)
        .unwrap_or_default();
    merged.insert(
        "description".to_string(),
        Value::String(format!("{original}{SIMPLIFIED_SUFFIX}")),
    );
    Rewrite::Merge(merged)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    fn norm(value: Value) -> Value {
        normalize(&SchemaFragment::from_value(&value).unwrap()).into_value()
    }

    #[test]
    fn test_defaults_type_and_description() {
        assert_eq!(
            norm(json!({})),
            json!({"type": "object", "description": "No description available"})
        );
    }

    #[test]
    fn test_request_body_scenario() {
        let result = norm(json!({
            "type": "object",
            "properties": {"name": {"type": "string"}}
        }));
        assert_eq!(
            result,
            json!({
                "type": "object",
                "properties": {
                    "name": {"type": "string", "description": "No description available"}
                },
                "description": "No description available"
            })
        );
    }

    #[test]
    fn test_ref_is_dropped() {
        let result = norm(json!({"$ref": "#/components/schemas/Pet", "description": "A pet"}));
        assert_eq!(result, json!({"description": "A pet", "type": "object"}));
    }

    #[test]
    fn test_items_are_normalized() {
        let result = norm(json!({"type": "array", "items": {"type": "integer"}}));
        assert_eq!(result["items"]["description"], "No description available");
        assert_eq!(result["items"]["type"], "integer");
    }

    #[test]
    fn test_any_of_takes_first_branch_only() {
        let result = norm(json!({
            "description": "Either",
            "anyOf": [
                {"type": "string", "maxLength": 3},
                {"type": "integer", "minimum": 7}
            ]
        }));
        assert_eq!(
            result,
            json!({
                "description": "Either (Simplified from multiple options)",
                "type": "string",
                "maxLength": 3
            })
        );
        assert!(result.get("minimum").is_none());
    }

    #[test]
    fn test_composition_without_description_uses_empty_prefix() {
        let result = norm(json!({"oneOf": [{"type": "boolean"}]}));
        assert_eq!(result["description"], " (Simplified from multiple options)");
        assert_eq!(result["type"], "boolean");
    }

    #[test]
    fn test_description_after_composition_overwrites_annotation() {
        let result = norm(json!({
            "allOf": [{"type": "string"}],
            "description": "Set later"
        }));
        assert_eq!(result["description"], "Set later");
    }

    #[test]
    fn test_empty_composition_is_dropped() {
        let result = norm(json!({"type": "string", "anyOf": []}));
        assert_eq!(
            result,
            json!({"type": "string", "description": "No description available"})
        );
    }

    #[test]
    fn test_nested_mappings_and_passthrough() {
        let result = norm(json!({
            "type": "string",
            "enum": ["a", "b"],
            "default": "a",
            "x-extra": {"note": "kept"}
        }));
        assert_eq!(result["enum"], json!(["a", "b"]));
        assert_eq!(result["default"], "a");
        assert_eq!(result["x-extra"]["note"], "kept");
        assert_eq!(result["x-extra"]["type"], "object");
    }

    #[test]
    fn test_property_order_preserved() {
        let result = norm(json!({
            "properties": {"zeta": {}, "alpha": {}, "mid": {}}
        }));
        let keys: Vec<&str> = result["properties"]
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_input_is_not_mutated() {
        let source = SchemaFragment::from_value(&json!({"$ref": "#/x"})).unwrap();
        let _ = normalize(&source);
        assert!(source.contains_key("$ref"));
    }

    fn arb_schema() -> impl Strategy<Value = Value> {
        let leaf = prop_oneof![
            Just(json!({})),
            Just(json!({"type": "string"})),
            Just(json!({"type": "integer", "description": "count"})),
            Just(json!({"$ref": "#/components/schemas/Thing"})),
            Just(json!({"enum": ["a", "b"], "default": "a"})),
        ];
        leaf.prop_recursive(4, 32, 4, |inner| {
            prop_oneof![
                prop::collection::vec(("[a-z]{1,6}", inner.clone()), 0..4).prop_map(|props| {
                    let props: Map<String, Value> = props.into_iter().collect();
                    json!({"type": "object", "properties": props})
                }),
                inner
                    .clone()
                    .prop_map(|items| json!({"type": "array", "items": items})),
                prop::collection::vec(inner.clone(), 1..3)
                    .prop_map(|options| json!({"anyOf": options})),
                (inner.clone(), "[a-z ]{0,10}").prop_map(|(first, desc)| {
                    json!({"description": desc, "oneOf": [first, {"type": "null"}]})
                }),
            ]
        })
    }

    proptest! {
        #[test]
        fn prop_normalize_is_idempotent(schema in arb_schema()) {
            let once = norm(schema);
            let twice = norm(once.clone());
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn prop_every_result_has_type_and_description(schema in arb_schema()) {
            let result = norm(schema);
            prop_assert!(result.get("type").is_some());
            prop_assert!(result.get("description").is_some());
        }

        #[test]
        fn prop_any_of_keeps_only_first_branch(a in arb_schema(), b in arb_schema()) {
            let result = norm(json!({"anyOf": [a.clone(), b]}));
            let mut expected = norm(a);
            expected["description"] = json!(SIMPLIFIED_SUFFIX);
            prop_assert_eq!(result, expected);
        }
    }
}
