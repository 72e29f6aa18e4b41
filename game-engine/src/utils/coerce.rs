//! Loose JSON coercions used when comparing submitted answers.
//!
//! Submissions arrive as untyped JSON and legacy clients are sloppy about
//! types (numeric choice indexes, stringified booleans, and so on). Answer
//! comparison therefore works on the string form / truthiness of a value
//! rather than on its JSON type.

use serde_json::Value;

/// String form of a JSON value, matching how clients display it:
/// `"abc"` stays `abc`, `4` becomes `"4"`, `true` becomes `"true"`.
pub fn string_form(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Null => "null".to_string(),
        // Arrays/objects are not meaningful answer tokens; compare as JSON text
        other => other.to_string(),
    }
}

/// Truthiness of a JSON value: null, false, 0 and "" are false,
/// everything else is true.
pub fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
