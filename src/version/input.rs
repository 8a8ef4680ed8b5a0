//! Boundary checks for version values arriving as untyped JSON

use serde_json::Value;

use crate::version::error::VersionError;

/// Extract a version string from a JSON value
///
/// Release payloads and manifests are untyped, so a tag can arrive as a
/// number, null or object. Those are rejected instead of being stringified.
pub fn raw_version_from_json(value: &Value) -> Result<&str, VersionError> {
    value.as_str().ok_or_else(|| VersionError::InvalidInput {
        found: json_type_name(value).to_string(),
    })
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
