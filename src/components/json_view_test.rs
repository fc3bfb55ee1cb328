use super::*;
use serde_json::json;

#[test]
fn leaf_text_quotes_strings() {
    assert_eq!(leaf_text(&json!("hello")), "\"hello\"");
}

#[test]
fn leaf_text_renders_scalars_as_json() {
    assert_eq!(leaf_text(&json!(42)), "42");
    assert_eq!(leaf_text(&json!(1.5)), "1.5");
    assert_eq!(leaf_text(&json!(true)), "true");
    assert_eq!(leaf_text(&json!(null)), "null");
}

#[test]
fn leaf_text_summarizes_containers_by_size() {
    assert_eq!(leaf_text(&json!({"a": 1, "b": 2})), "{2}");
    assert_eq!(leaf_text(&json!([1, 2, 3])), "[3]");
}

#[test]
fn leaf_class_varies_by_value_kind() {
    let classes = [
        leaf_class(&json!("s")),
        leaf_class(&json!(1)),
        leaf_class(&json!(true)),
        leaf_class(&json!(null)),
    ];
    for (i, a) in classes.iter().enumerate() {
        for b in &classes[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn container_class_forks_on_scrolling() {
    assert_eq!(container_class(false), "json-view");
    assert_eq!(container_class(true), "json-view json-view--scrolling");
}
