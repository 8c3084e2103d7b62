//! Canonical JSON for request bodies.

use apisign_core::{Error, Result};
use serde::Serialize;
use serde_json::Value;

/// Serialize `body` into canonical JSON bytes.
///
/// Object keys are sorted lexicographically by their UTF-8 bytes at every
/// nesting level, with no insignificant whitespace. The same logical body
/// always yields the same bytes, which is what the session id is computed
/// over and what goes on the wire.
///
/// The top level value must be a JSON object.
pub fn canonical_json<B: Serialize + ?Sized>(body: &B) -> Result<Vec<u8>> {
    let value = serde_json::to_value(body)
        .map_err(|e| Error::encoding_failed("serialize request body failed").with_source(e))?;
    if !value.is_object() {
        return Err(Error::encoding_failed(format!(
            "request body must be a JSON object, got {}",
            kind_of(&value)
        )));
    }

    serde_json::to_vec(&sort_keys(value))
        .map_err(|e| Error::encoding_failed("serialize request body failed").with_source(e))
}

// serde_json's map is only ordered when `preserve_order` is off, which any
// crate in the graph can turn on. Sort explicitly.
fn sort_keys(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut entries: Vec<(String, Value)> = map.into_iter().collect();
            entries.sort_by(|(a, _), (b, _)| a.cmp(b));
            Value::Object(
                entries
                    .into_iter()
                    .map(|(k, v)| (k, sort_keys(v)))
                    .collect(),
            )
        }
        Value::Array(values) => Value::Array(values.into_iter().map(sort_keys).collect()),
        v => v,
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use apisign_core::ErrorKind;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use std::collections::BTreeMap;
    use std::collections::HashMap;

    #[test]
    fn test_key_order_does_not_matter() {
        let a = canonical_json(&json!({"b": "2", "a": "1"})).unwrap();
        let b = canonical_json(&json!({"a": "1", "b": "2"})).unwrap();
        assert_eq!(a, b);
        assert_eq!(a, br#"{"a":"1","b":"2"}"#.to_vec());
    }

    #[test]
    fn test_nested_keys_are_sorted() {
        let body = json!({
            "z": [{"y": 1, "x": 2}],
            "a": {"c": null, "b": true},
        });
        let bs = canonical_json(&body).unwrap();
        assert_eq!(
            String::from_utf8(bs).unwrap(),
            r#"{"a":{"b":true,"c":null},"z":[{"x":2,"y":1}]}"#
        );
    }

    #[test]
    fn test_struct_and_map_bodies() {
        #[derive(Serialize)]
        struct Body {
            second: u32,
            first: &'static str,
        }

        let from_struct = canonical_json(&Body {
            second: 2,
            first: "1",
        })
        .unwrap();
        let from_map = canonical_json(&HashMap::from([
            ("second", json!(2)),
            ("first", json!("1")),
        ]))
        .unwrap();
        assert_eq!(from_struct, from_map);
        assert_eq!(from_struct, br#"{"first":"1","second":2}"#.to_vec());
    }

    #[test]
    fn test_non_object_body() {
        for body in [json!([1, 2]), json!("text"), json!(null), json!(1)] {
            let err = canonical_json(&body).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::EncodingFailed, "{body}");
        }
    }

    #[test]
    fn test_unserializable_body() {
        // Map keys must be strings in JSON.
        let body = BTreeMap::from([(vec![1u8], "value")]);
        let err = canonical_json(&body).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::EncodingFailed);
    }
}
