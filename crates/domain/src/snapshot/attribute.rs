//! Attribute values as the card displays them.

use serde_json::Value;

/// Text form of a scalar attribute value.
///
/// Non-empty strings are returned as-is, numbers and booleans in their JSON
/// text form. Empty strings, `null`, arrays and objects count as missing.
#[must_use]
pub fn attribute_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) if text.is_empty() => None,
        Value::String(text) => Some(text.clone()),
        Value::Number(num) => Some(num.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn should_return_string_unchanged() {
        assert_eq!(attribute_text(&json!("120 MB")).as_deref(), Some("120 MB"));
    }

    #[test]
    fn should_format_numbers() {
        assert_eq!(attribute_text(&json!(42)).as_deref(), Some("42"));
        assert_eq!(attribute_text(&json!(21.5)).as_deref(), Some("21.5"));
    }

    #[test]
    fn should_format_booleans() {
        assert_eq!(attribute_text(&json!(true)).as_deref(), Some("true"));
    }

    #[test]
    fn should_treat_empty_string_as_missing() {
        assert!(attribute_text(&json!("")).is_none());
    }

    #[test]
    fn should_have_no_text_for_null_or_containers() {
        assert!(attribute_text(&Value::Null).is_none());
        assert!(attribute_text(&json!([1, 2])).is_none());
        assert!(attribute_text(&json!({"a": 1})).is_none());
    }
}
