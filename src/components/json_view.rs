//! Read-only tree rendering of a JSON value.
//!
//! DESIGN
//! ======
//! The tree is stateless: no expansion toggles, no selection. Each nested
//! level indents one step so the structure reads like the serialized form
//! without requiring a monospace blob.

use leptos::prelude::*;
use serde_json::Value;

#[cfg(test)]
#[path = "json_view_test.rs"]
mod json_view_test;

fn container_class(scrolling: bool) -> &'static str {
    if scrolling { "json-view json-view--scrolling" } else { "json-view" }
}

fn leaf_text(value: &Value) -> String {
    match value {
        Value::String(s) => format!("\"{s}\""),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_owned(),
        Value::Object(map) => format!("{{{}}}", map.len()),
        Value::Array(items) => format!("[{}]", items.len()),
    }
}

fn leaf_class(value: &Value) -> &'static str {
    match value {
        Value::String(_) => "json-view__leaf json-view__leaf--string",
        Value::Number(_) => "json-view__leaf json-view__leaf--number",
        Value::Bool(_) => "json-view__leaf json-view__leaf--bool",
        Value::Null => "json-view__leaf json-view__leaf--null",
        Value::Object(_) | Value::Array(_) => "json-view__leaf",
    }
}

fn render_value(value: &Value) -> AnyView {
    match value {
        Value::Object(map) if map.is_empty() => {
            view! { <span class="json-view__punct">"{}"</span> }.into_any()
        }
        Value::Object(map) => {
            let entries = map
                .iter()
                .map(|(key, child)| {
                    view! {
                        <div class="json-view__entry">
                            <span class="json-view__key">{format!("\"{key}\"")}</span>
                            <span class="json-view__punct">": "</span>
                            {render_value(child)}
                        </div>
                    }
                })
                .collect_view();
            view! { <div class="json-view__node">{entries}</div> }.into_any()
        }
        Value::Array(items) if items.is_empty() => {
            view! { <span class="json-view__punct">"[]"</span> }.into_any()
        }
        Value::Array(items) => {
            let entries = items
                .iter()
                .map(|child| {
                    view! { <div class="json-view__entry">{render_value(child)}</div> }
                })
                .collect_view();
            view! { <div class="json-view__node json-view__node--array">{entries}</div> }
                .into_any()
        }
        leaf => view! { <span class=leaf_class(leaf)>{leaf_text(leaf)}</span> }.into_any(),
    }
}

/// Structured, read-only rendering of `data`.
#[component]
pub fn JsonView(data: Value, #[prop(optional)] scrolling: bool) -> impl IntoView {
    view! { <div class=container_class(scrolling)>{render_value(&data)}</div> }
}
