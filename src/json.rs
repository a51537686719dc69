//! JSON-safe parsing of response bodies.
//!
//! Bodies are decoded as JSON when they can be and passed through as plain
//! text when they cannot. Decoding never fails.

use serde_json::Value;

/// Attempts to decode a non-empty string value as JSON.
///
/// Returns the decoded structure on success and the original value on
/// failure. Anything other than a non-empty string (including `""`) is
/// returned unchanged.
///
/// # Example
///
/// ```
/// use serde_json::{Value, json};
/// use yarp::json::parse_json_safe;
///
/// assert_eq!(parse_json_safe(json!(r#"{"foo":"bar"}"#)), json!({"foo": "bar"}));
/// assert_eq!(parse_json_safe(json!("not json")), json!("not json"));
/// assert_eq!(parse_json_safe(json!("")), json!(""));
/// assert_eq!(parse_json_safe(Value::Null), Value::Null);
/// ```
#[must_use]
pub fn parse_json_safe(value: Value) -> Value {
    match value {
        Value::String(s) if !s.is_empty() => {
            serde_json::from_str(&s).unwrap_or(Value::String(s))
        }
        other => other,
    }
}

/// Decodes a raw response body.
///
/// The bytes are read as (lossy) UTF-8 text and run through
/// [`parse_json_safe`]. An empty body yields `Value::String("")`.
#[must_use]
pub fn parse_body(body: &[u8]) -> Value {
    parse_json_safe(Value::String(String::from_utf8_lossy(body).into_owned()))
}

/// Returns whether a value counts as present for diagnostics.
///
/// `null`, `false`, `0` and `""` are falsy; everything else, including empty
/// arrays and objects, is truthy.
#[must_use]
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn decodes_json_object_text() {
        assert_eq!(
            parse_json_safe(json!(r#"{"foo": "bar"}"#)),
            json!({"foo": "bar"})
        );
    }

    #[test]
    fn decodes_scalars_and_arrays() {
        assert_eq!(parse_json_safe(json!("42")), json!(42));
        assert_eq!(parse_json_safe(json!("[1,2]")), json!([1, 2]));
        assert_eq!(parse_json_safe(json!("null")), Value::Null);
        assert_eq!(parse_json_safe(json!(r#""quoted""#)), json!("quoted"));
    }

    #[test]
    fn keeps_non_json_text() {
        assert_eq!(
            parse_json_safe(json!("This is not json")),
            json!("This is not json")
        );
    }

    #[test]
    fn keeps_empty_string() {
        assert_eq!(parse_json_safe(json!("")), json!(""));
    }

    #[test]
    fn passes_through_structured_values() {
        assert_eq!(parse_json_safe(json!({"a": 1})), json!({"a": 1}));
        assert_eq!(parse_json_safe(json!(7)), json!(7));
        assert_eq!(parse_json_safe(Value::Null), Value::Null);
    }

    #[test]
    fn parse_body_handles_empty_and_text_bodies() {
        assert_eq!(parse_body(b""), json!(""));
        assert_eq!(parse_body(b"plain"), json!("plain"));
        assert_eq!(parse_body(br#"{"message":"not found"}"#), json!({"message": "not found"}));
    }

    #[test]
    fn truthiness_matches_falsy_set() {
        for falsy in [Value::Null, json!(false), json!(0), json!(0.0), json!("")] {
            assert!(!is_truthy(&falsy), "{falsy} should be falsy");
        }
        for truthy in [json!(true), json!(1), json!("x"), json!([]), json!({})] {
            assert!(is_truthy(&truthy), "{truthy} should be truthy");
        }
    }
}
