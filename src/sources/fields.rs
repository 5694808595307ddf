//! Best-effort field extraction from loosely typed JSON records.

use serde_json::{Map, Value};

use crate::error::{Error, Result};

pub type Record = Map<String, Value>;

pub fn as_record(value: &Value) -> Result<&Record> {
    value
        .as_object()
        .ok_or_else(|| Error::InvalidRecord(format!("expected an object, got {}", kind(value))))
}

/// Strings as-is, numbers and booleans stringified, anything else absent.
pub fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

pub fn text(record: &Record, key: &str) -> Option<String> {
    record.get(key).and_then(scalar_text)
}

pub fn text_or(record: &Record, key: &str, default: &str) -> String {
    text(record, key).unwrap_or_else(|| default.to_string())
}

/// A usable title: a string with visible content.
pub fn title(record: &Record, key: &str) -> Option<String> {
    match record.get(key) {
        Some(Value::String(s)) if !s.trim().is_empty() => Some(s.clone()),
        _ => None,
    }
}

/// Tag arrays keep truthy scalar entries; nested lists and objects are dropped.
pub fn tags(value: Option<&Value>) -> Vec<String> {
    let Some(Value::Array(items)) = value else {
        return Vec::new();
    };

    items
        .iter()
        .filter(|item| is_truthy(item))
        .filter_map(scalar_text)
        .collect()
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

pub fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_tags_keep_truthy_scalars() {
        let value = json!(["rust", "", null, ["nested"], {"k": "v"}, 3, false, "go"]);
        assert_eq!(tags(Some(&value)), vec!["rust", "3", "go"]);
    }

    #[test]
    fn test_tags_non_array_is_empty() {
        assert!(tags(Some(&json!("rust, go"))).is_empty());
        assert!(tags(None).is_empty());
    }

    #[test]
    fn test_title_requires_visible_string() {
        let record = json!({"a": "Engineer", "b": "   ", "c": 42, "d": null});
        let record = record.as_object().unwrap();
        assert_eq!(title(record, "a").as_deref(), Some("Engineer"));
        assert_eq!(title(record, "b"), None);
        assert_eq!(title(record, "c"), None);
        assert_eq!(title(record, "d"), None);
        assert_eq!(title(record, "missing"), None);
    }

    #[test]
    fn test_as_record_rejects_non_objects() {
        assert!(matches!(as_record(&json!([1, 2])), Err(Error::InvalidRecord(_))));
    }
}
