//! Pretty-printed JSON serialization for clipboard export.

#[cfg(test)]
#[path = "json_text_test.rs"]
mod json_text_test;

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

/// Serialize a JSON value with 4-space indentation.
///
/// # Errors
///
/// Returns the underlying `serde_json` error when the value cannot be
/// serialized; callers disable the copy affordance instead of crashing.
pub fn to_pretty(value: &serde_json::Value) -> Result<String, serde_json::Error> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut ser = Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut ser)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}
