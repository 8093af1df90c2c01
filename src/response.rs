use serde_json::{Map, Value};

/// Empty bodies become `{}` and non-JSON text becomes `{"message": text}`.
pub fn normalize_body(text: &str) -> Value {
    if text.trim().is_empty() {
        return Value::Object(Map::new());
    }
    serde_json::from_str(text).unwrap_or_else(|_| {
        tracing::debug!(body = %text, "non-JSON response body");
        let mut body = Map::new();
        body.insert("message".to_string(), Value::String(text.to_string()));
        Value::Object(body)
    })
}
