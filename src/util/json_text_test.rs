use super::*;
use serde_json::json;

#[test]
fn to_pretty_uses_four_space_indentation() {
    let text = to_pretty(&json!({"a": 1, "b": [2, 3]})).unwrap();
    assert_eq!(text, "{\n    \"a\": 1,\n    \"b\": [\n        2,\n        3\n    ]\n}");
}

#[test]
fn to_pretty_indents_nested_levels() {
    let text = to_pretty(&json!({"outer": {"inner": true}})).unwrap();
    assert_eq!(text, "{\n    \"outer\": {\n        \"inner\": true\n    }\n}");
}

#[test]
fn to_pretty_handles_scalar_roots() {
    assert_eq!(to_pretty(&json!(42)).unwrap(), "42");
    assert_eq!(to_pretty(&json!("hi")).unwrap(), "\"hi\"");
    assert_eq!(to_pretty(&json!(null)).unwrap(), "null");
}

#[test]
fn to_pretty_handles_empty_containers() {
    assert_eq!(to_pretty(&json!({})).unwrap(), "{}");
    assert_eq!(to_pretty(&json!([])).unwrap(), "[]");
}
