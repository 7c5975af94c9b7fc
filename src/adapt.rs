mod de;
mod decoder;
pub mod error;
pub mod records;
pub mod types;

use serde::de::{DeserializeOwned, DeserializeSeed};
use tracing::{Level, debug, instrument};

use decoder::HookDecoder;
pub use error::Error;
pub use records::{FrozenRecord, Record};
pub use types::{Namespace, Value};

/// Decodes JSON text, turning every object into a [`Namespace`].
pub fn from_json(text: &str) -> Result<Value, Error> {
    from_json_with_hook(text, Value::Object)
}

/// Decodes JSON text, replacing each object with whatever `hook` returns for
/// it. Nested objects are handed to `hook` before their parents.
#[instrument(skip_all, level = Level::DEBUG)]
pub fn from_json_with_hook<F>(text: &str, mut hook: F) -> Result<Value, Error>
where
    F: FnMut(Namespace) -> Value,
{
    let mut deserializer = serde_json::Deserializer::from_str(text);
    let value = HookDecoder::new(&mut hook)
        .deserialize(&mut deserializer)
        .inspect_err(|error| debug!(%error, "Failed to decode"))?;
    deserializer.end()?;
    debug!(len = text.len(), "Decoded");
    Ok(value)
}

/// Builds `T` from the attributes of `source`, matching attribute names to
/// field names.
#[instrument(skip_all, fields(schema = std::any::type_name::<T>()), level = Level::DEBUG)]
pub fn adapt<T: DeserializeOwned>(source: impl Into<Namespace>) -> Result<T, Error> {
    T::deserialize(Value::Object(source.into()))
        .inspect_err(|error| debug!(%error, "Construction failed"))
}

/// Decodes JSON text and builds `T` from the result.
pub fn adapt_json<T: DeserializeOwned>(text: &str) -> Result<T, Error> {
    let value = from_json(text)?;
    T::deserialize(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{"a": 1, "b": "a string", "c": [1, 2, 3, 4]}"#;

    #[test]
    fn json_object_becomes_namespace() {
        let value = from_json(SAMPLE).unwrap();
        let namespace = value.as_namespace().unwrap();

        assert_eq!(namespace.attr("a"), Ok(&Value::Int(1)));
        assert_eq!(namespace.attr("b"), Ok(&Value::from("a string")));
        assert_eq!(namespace.attr("c"), Ok(&Value::from(vec![1, 2, 3, 4])));
    }

    #[test]
    fn objects_inside_arrays_are_namespaces() {
        let value = from_json(r#"[{"a": 1}, {"a": 2, "nested": {"b": true}}]"#).unwrap();
        let items = value.as_list().unwrap();

        assert_eq!(items[0].as_namespace().unwrap().attr("a"), Ok(&Value::Int(1)));
        let second = items[1].as_namespace().unwrap();
        let nested = second.attr("nested").unwrap().as_namespace().unwrap();
        assert_eq!(nested.attr("b"), Ok(&Value::Bool(true)));
    }

    #[test]
    fn builds_records_from_json() {
        let record: Record = adapt_json(SAMPLE).unwrap();
        assert_eq!(record.c, [1, 2, 3, 4]);

        let frozen: FrozenRecord = adapt_json(SAMPLE).unwrap();
        assert_eq!(frozen.b(), "a string");

        let many: Vec<FrozenRecord> = adapt_json(&format!("[{SAMPLE}, {SAMPLE}]")).unwrap();
        assert_eq!(many.len(), 2);
    }

    mod error_handling {
        use super::*;

        #[test]
        fn malformed_json_reports_position() {
            let error = from_json("{\"a\": 1,\n \"b\": }").unwrap_err();
            match error {
                Error::Parse { line, column, .. } => {
                    assert_eq!(line, 2);
                    assert_eq!(column, 7);
                }
                other => panic!("unexpected error: {other:?}"),
            }
        }

        #[test]
        fn trailing_characters_are_rejected() {
            assert!(matches!(from_json("{} x"), Err(Error::Parse { .. })));
        }

        #[test]
        fn missing_field_from_json() {
            let result: Result<Record, _> = adapt_json(r#"{"a": 1, "b": "x"}"#);
            assert_eq!(result, Err(Error::MissingField("c".to_string())));
        }
    }
}
