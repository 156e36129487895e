//! JSON decode/encode utilities
//!
//! Registry responses are loosely shaped: every field may be missing, `null`,
//! or of an unexpected type. Decoding is therefore total. Each record
//! implements [`Decode`] by reading its fields through the helpers below,
//! which substitute the field's default (empty string, empty list, `None`)
//! instead of failing.
//!
//! Encoding goes through serde and strips absent (`null`) members so that
//! optional fields are omitted from the wire rather than sent as `null`.

use serde::Serialize;
use serde_json::{Map, Value};

/// Total conversion from an untyped JSON value into a record
pub trait Decode: Sized {
    /// Decode `value`, falling back to defaults for anything missing or malformed
    fn decode(value: &Value) -> Self;
}

/// Read a text field, or the empty string
pub fn text(value: &Value, key: &str) -> String {
    value
        .get(key)
        .and_then(Value::as_str)
        .map(str::to_owned)
        .unwrap_or_default()
}

/// Read an array field, decoding each element with `T::decode`
///
/// Missing, `null` and non-array fields yield an empty list.
pub fn list<T: Decode>(value: &Value, key: &str) -> Vec<T> {
    value
        .get(key)
        .and_then(Value::as_array)
        .map(|items| items.iter().map(T::decode).collect())
        .unwrap_or_default()
}

/// Read an arbitrary JSON field verbatim; `null` counts as absent
pub fn raw(value: &Value, key: &str) -> Option<Value> {
    value.get(key).filter(|v| !v.is_null()).cloned()
}

/// Serialize a record into its wire shape, dropping absent members
///
/// Serialization of the plain data records in this crate cannot fail; should
/// a foreign `Serialize` impl error out, the result is `Value::Null`.
pub fn encode<T: Serialize>(record: &T) -> Value {
    serde_json::to_value(record)
        .map(strip_nulls)
        .unwrap_or(Value::Null)
}

fn strip_nulls(value: Value) -> Value {
    match value {
        Value::Object(members) => Value::Object(
            members
                .into_iter()
                .filter(|(_, v)| !v.is_null())
                .map(|(k, v)| (k, strip_nulls(v)))
                .collect::<Map<_, _>>(),
        ),
        Value::Array(items) => Value::Array(items.into_iter().map(strip_nulls).collect()),
        other => other,
    }
}

impl Decode for String {
    fn decode(value: &Value) -> Self {
        value.as_str().map(str::to_owned).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_text_defaults() {
        let value = json!({ "a": "x", "b": null, "c": 42 });
        assert_eq!(text(&value, "a"), "x");
        assert_eq!(text(&value, "b"), "");
        assert_eq!(text(&value, "c"), "");
        assert_eq!(text(&value, "missing"), "");
        assert_eq!(text(&json!("not an object"), "a"), "");
    }

    #[test]
    fn test_list_defaults() {
        let value = json!({ "items": ["a", 1, "b"], "bad": "nope" });
        let items: Vec<String> = list(&value, "items");
        assert_eq!(items, vec!["a", "", "b"]);

        let bad: Vec<String> = list(&value, "bad");
        assert!(bad.is_empty());

        let missing: Vec<String> = list(&Value::Null, "items");
        assert!(missing.is_empty());
    }

    #[test]
    fn test_raw_treats_null_as_absent() {
        let value = json!({ "d": { "k": [1, 2] }, "n": null, "f": false });
        assert_eq!(raw(&value, "d"), Some(json!({ "k": [1, 2] })));
        assert_eq!(raw(&value, "n"), None);
        assert_eq!(raw(&value, "f"), Some(json!(false)));
    }

    #[test]
    fn test_encode_drops_absent_members() {
        #[derive(Serialize)]
        struct Inner {
            keep: &'static str,
            gone: Option<u8>,
        }

        #[derive(Serialize)]
        struct Outer {
            name: &'static str,
            note: Option<String>,
            empty: String,
            inner: Vec<Inner>,
        }

        let encoded = encode(&Outer {
            name: "n",
            note: None,
            empty: String::new(),
            inner: vec![Inner {
                keep: "k",
                gone: None,
            }],
        });

        assert_eq!(
            encoded,
            json!({ "name": "n", "empty": "", "inner": [{ "keep": "k" }] })
        );
    }
}
