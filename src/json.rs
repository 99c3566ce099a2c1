//! JSON formatting and validation
//!
//! Key order is kept as written (`serde_json` with `preserve_order`).

use serde::Serialize;
use serde_json::Value;
use serde_json::ser::PrettyFormatter;
use std::string::FromUtf8Error;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum JsonError {
    #[error("Invalid JSON! Error: {0}")]
    Invalid(serde_json::Error),

    #[error("Cannot compress JSON! Error: {0}")]
    Compress(serde_json::Error),

    #[error("JSON serialization error: {0}")]
    Serialize(serde_json::Error),

    #[error("Formatted output is not UTF-8: {0}")]
    Encoding(#[from] FromUtf8Error),
}

impl JsonError {
    /// 1-based line and column of a parse failure
    pub fn position(&self) -> Option<(usize, usize)> {
        match self {
            JsonError::Invalid(e) | JsonError::Compress(e) => Some((e.line(), e.column())),
            _ => None,
        }
    }
}

/// Parse `input` and report where it fails.
pub fn validate(input: &str) -> Result<Value, JsonError> {
    let mut value = serde_json::from_str(input).map_err(JsonError::Invalid)?;
    normalize_numbers(&mut value);
    Ok(value)
}

/// Pretty-print `input` with `indent` spaces per level. Zero means compact.
pub fn format(input: &str, indent: usize) -> Result<String, JsonError> {
    let value = validate(input)?;
    if indent == 0 {
        return serde_json::to_string(&value).map_err(JsonError::Serialize);
    }

    let indent = " ".repeat(indent);
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(indent.as_bytes());
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value
        .serialize(&mut serializer)
        .map_err(JsonError::Serialize)?;
    Ok(String::from_utf8(buf)?)
}

/// Strip all insignificant whitespace from `input`.
pub fn compress(input: &str) -> Result<String, JsonError> {
    let mut value: Value = serde_json::from_str(input).map_err(JsonError::Compress)?;
    normalize_numbers(&mut value);
    serde_json::to_string(&value).map_err(JsonError::Serialize)
}

// Below 2^63 every whole f64 converts to i64 exactly
const I64_BOUND: f64 = 9_223_372_036_854_775_808.0;

/// Print whole-number floats such as `1.0` or `1e2` as integers.
fn normalize_numbers(value: &mut Value) {
    match value {
        Value::Number(n) => {
            if let Some(f) = n.as_f64()
                && n.is_f64()
                && f.fract() == 0.0
                && f.abs() < I64_BOUND
            {
                *n = (f as i64).into();
            }
        }
        Value::Array(items) => items.iter_mut().for_each(normalize_numbers),
        Value::Object(map) => map.values_mut().for_each(normalize_numbers),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_uses_two_space_indent_and_keeps_key_order() {
        let formatted = format(r#"{"b":1,"a":[true,null]}"#, 2).unwrap();
        assert_eq!(
            formatted,
            "{\n  \"b\": 1,\n  \"a\": [\n    true,\n    null\n  ]\n}"
        );
    }

    #[test]
    fn format_honours_custom_indent() {
        let formatted = format(r#"{"k":"v"}"#, 4).unwrap();
        assert_eq!(formatted, "{\n    \"k\": \"v\"\n}");
        assert_eq!(format(r#"{ "k" : "v" }"#, 0).unwrap(), r#"{"k":"v"}"#);
    }

    #[test]
    fn compress_removes_whitespace() {
        let compressed = compress("{\n  \"name\": \"diff\",\n  \"tags\": [ 1, 2 ]\n}").unwrap();
        assert_eq!(compressed, r#"{"name":"diff","tags":[1,2]}"#);
    }

    #[test]
    fn whole_number_floats_print_as_integers() {
        let input = r#"{"a": 1.0, "b": [1e2, 1.5, -0.0, 2.50]}"#;
        assert_eq!(compress(input).unwrap(), r#"{"a":1,"b":[100,1.5,0,2.5]}"#);
        assert_eq!(format("[3.0]", 2).unwrap(), "[\n  3\n]");
        assert_eq!(validate("7.0").unwrap(), serde_json::json!(7));
    }

    #[test]
    fn invalid_input_reports_position() {
        let err = format("{\n  \"a\": 1,\n}", 2).unwrap_err();
        assert!(err.to_string().starts_with("Invalid JSON! Error:"));
        assert_eq!(err.position().map(|(line, _)| line), Some(3));

        let err = compress("[1, 2").unwrap_err();
        assert!(err.to_string().starts_with("Cannot compress JSON! Error:"));
    }

    #[test]
    fn empty_input_is_invalid() {
        assert!(validate("").is_err());
        assert!(validate("   ").is_err());
    }
}
