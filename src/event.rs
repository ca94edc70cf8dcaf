use serde_json::{json, Map, Value};

use crate::error::HandlerError;

/// Greeting used when the event carries no `message`.
pub const DEFAULT_MESSAGE: &str = "闘魂注入!";
pub const DEFAULT_TEST_PARAM: &str = "default";

/// Event sent by the `local` binary in place of a real invocation.
pub fn local_test_event() -> Value {
    json!({
        "test": "toukon",
        "message": "Rust闘魂テスト from ローカル",
    })
}

/// View the event as a mapping. Events are not schema-validated, but they
/// must at least be JSON objects for field lookup to make sense.
pub fn as_mapping(event: &Value) -> Result<&Map<String, Value>, HandlerError> {
    event.as_object().ok_or(HandlerError::EventNotObject {
        found: json_kind(event),
    })
}

/// Text interpolated into the greeting. Strings are used as-is, anything else
/// is rendered as compact JSON.
pub fn message(event: &Map<String, Value>) -> String {
    match event.get("message") {
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
        None => DEFAULT_MESSAGE.to_string(),
    }
}

/// The `test` field, echoed back unchanged.
pub fn test_param(event: &Map<String, Value>) -> Value {
    event
        .get("test")
        .cloned()
        .unwrap_or_else(|| Value::String(DEFAULT_TEST_PARAM.to_string()))
}

pub fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
