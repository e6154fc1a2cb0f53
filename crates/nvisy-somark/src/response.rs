//! Unwrapping of extraction responses into text.
//!
//! The API nests the useful content under `data.result.outputs.markdown`.
//! Anything that does not follow that shape is relayed as JSON instead of
//! being dropped, so the user always sees what the service returned.

use std::io;

use serde::Serialize;
use serde_json::Value;
use serde_json::ser::{Formatter, Serializer};

use crate::Result;

/// Turns a parsed response body into the text relayed to the user.
///
/// - `data.result.outputs.markdown` is returned verbatim;
/// - otherwise `data.result`, when present, is returned as JSON text;
/// - otherwise the whole object is returned as JSON text;
/// - a body that is not an object is returned as its string form.
///
/// See [`to_json_text`] for how JSON text is written.
///
/// # Errors
///
/// Returns [`Error::Parse`] if a value cannot be serialized.
///
/// [`Error::Parse`]: crate::Error::Parse
pub fn extract_text(body: Value) -> Result<String> {
    match body {
        Value::Object(mut object) => {
            let result = match object.get_mut("data") {
                Some(Value::Object(data)) => data.get_mut("result").map(Value::take),
                _ => None,
            };

            match result {
                Some(result) => unwrap_result(result),
                None => to_json_text(&Value::Object(object)),
            }
        }
        Value::String(text) => Ok(text),
        other => to_json_text(&other),
    }
}

/// Writes a value as single-line JSON with `", "` and `": "` separators.
///
/// Key order is kept as received, non-ASCII characters are written
/// literally, and numbers keep their original digits.
///
/// # Errors
///
/// Returns [`Error::Parse`] if the value cannot be serialized.
///
/// [`Error::Parse`]: crate::Error::Parse
pub fn to_json_text(value: &Value) -> Result<String> {
    let mut buffer = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buffer, SpacedFormatter);
    value.serialize(&mut serializer)?;

    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

/// Extracts the markdown output of `data.result`, falling back to JSON.
fn unwrap_result(mut result: Value) -> Result<String> {
    match result.pointer_mut("/outputs/markdown").map(Value::take) {
        Some(Value::String(markdown)) => Ok(markdown),
        Some(markdown) => to_json_text(&markdown),
        None => to_json_text(&result),
    }
}

/// Compact formatter with a space after item and key separators.
struct SpacedFormatter;

impl Formatter for SpacedFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first { Ok(()) } else { writer.write_all(b", ") }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first { Ok(()) } else { writer.write_all(b", ") }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn parse(body: &str) -> Value {
        serde_json::from_str(body).unwrap()
    }

    fn text_of(body: &str) -> String {
        extract_text(parse(body)).unwrap()
    }

    #[test]
    fn test_markdown_is_returned_verbatim() {
        assert_eq!(
            text_of(r##"{"data":{"result":{"outputs":{"markdown":"# Hi"}}}}"##),
            "# Hi"
        );
    }

    #[test]
    fn test_result_without_markdown_is_serialized() {
        assert_eq!(text_of(r#"{"data":{"result":{"foo":1}}}"#), r#"{"foo": 1}"#);
        assert_eq!(
            text_of(r#"{"data":{"result":{"outputs":{"html":"<p/>"}}}}"#),
            r#"{"outputs": {"html": "<p/>"}}"#
        );
    }

    #[test]
    fn test_unexpected_object_is_serialized_whole() {
        assert_eq!(text_of(r#"{"unexpected":true}"#), r#"{"unexpected": true}"#);

        // `data` that is not an object does not count as a result.
        assert_eq!(
            text_of(r#"{"data":"pending","code":0}"#),
            r#"{"data": "pending", "code": 0}"#
        );
        assert_eq!(
            text_of(r#"{"data":{"status":"queued"}}"#),
            r#"{"data": {"status": "queued"}}"#
        );
    }

    #[test]
    fn test_null_result_is_serialized() {
        assert_eq!(text_of(r#"{"data":{"result":null}}"#), "null");
    }

    #[test]
    fn test_non_string_markdown_is_serialized() {
        let body = json!({"data": {"result": {"outputs": {"markdown": ["p1", "p2"]}}}});
        assert_eq!(extract_text(body).unwrap(), r#"["p1", "p2"]"#);
    }

    #[test]
    fn test_key_order_is_preserved() {
        assert_eq!(
            text_of(r#"{"data":{"result":{"zeta":1,"alpha":2,"mid":3}}}"#),
            r#"{"zeta": 1, "alpha": 2, "mid": 3}"#
        );
    }

    #[test]
    fn test_non_ascii_is_not_escaped() {
        assert_eq!(
            text_of(r#"{"data":{"result":{"foo":1,"t":"Résumé","title":"文档 ✓"}}}"#),
            r#"{"foo": 1, "t": "Résumé", "title": "文档 ✓"}"#
        );
        assert_eq!(
            text_of(r##"{"data":{"result":{"outputs":{"markdown":"# 标题"}}}}"##),
            "# 标题"
        );
    }

    #[test]
    fn test_large_integers_keep_their_digits() {
        assert_eq!(
            text_of(r#"{"id":123456789012345678901234567890}"#),
            r#"{"id": 123456789012345678901234567890}"#
        );
        assert_eq!(
            text_of(r#"{"data":{"result":{"ids":[18446744073709551616,-9223372036854775809]}}}"#),
            r#"{"ids": [18446744073709551616, -9223372036854775809]}"#
        );
    }

    #[test]
    fn test_empty_containers() {
        assert_eq!(
            text_of(r#"{"data":{"result":{"pages":[],"meta":{}}}}"#),
            r#"{"pages": [], "meta": {}}"#
        );
    }

    #[test]
    fn test_non_object_bodies() {
        assert_eq!(extract_text(json!("plain text")).unwrap(), "plain text");
        assert_eq!(extract_text(json!(42)).unwrap(), "42");
        assert_eq!(extract_text(json!([1, "a"])).unwrap(), r#"[1, "a"]"#);
        assert_eq!(extract_text(Value::Null).unwrap(), "null");
    }
}
