use std::fmt;

use serde::de::{DeserializeSeed, Deserializer, MapAccess, SeqAccess, Visitor};

use super::types::{Namespace, Value};

/// Decodes any JSON value into a [`Value`], passing every object to `hook`
/// once all of its members are decoded. Inner objects reach the hook before
/// the objects that contain them.
pub struct HookDecoder<'h, F> {
    hook: &'h mut F,
}

impl<'h, F> HookDecoder<'h, F>
where
    F: FnMut(Namespace) -> Value,
{
    pub fn new(hook: &'h mut F) -> Self {
        Self { hook }
    }

    fn nested(&mut self) -> HookDecoder<'_, F> {
        HookDecoder {
            hook: &mut *self.hook,
        }
    }
}

impl<'de, F> DeserializeSeed<'de> for HookDecoder<'_, F>
where
    F: FnMut(Namespace) -> Value,
{
    type Value = Value;

    fn deserialize<D: Deserializer<'de>>(self, deserializer: D) -> Result<Value, D::Error> {
        deserializer.deserialize_any(self)
    }
}

impl<'de, F> Visitor<'de> for HookDecoder<'_, F>
where
    F: FnMut(Namespace) -> Value,
{
    type Value = Value;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("any JSON value")
    }

    fn visit_unit<E>(self) -> Result<Value, E> {
        Ok(Value::Null)
    }

    fn visit_none<E>(self) -> Result<Value, E> {
        Ok(Value::Null)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Value, D::Error> {
        self.deserialize(deserializer)
    }

    fn visit_bool<E>(self, value: bool) -> Result<Value, E> {
        Ok(Value::Bool(value))
    }

    fn visit_i64<E>(self, value: i64) -> Result<Value, E> {
        Ok(Value::Int(value))
    }

    fn visit_u64<E>(self, value: u64) -> Result<Value, E> {
        Ok(Value::from(value))
    }

    fn visit_f64<E>(self, value: f64) -> Result<Value, E> {
        Ok(Value::Float(value))
    }

    fn visit_str<E>(self, value: &str) -> Result<Value, E> {
        Ok(Value::String(value.to_string()))
    }

    fn visit_string<E>(self, value: String) -> Result<Value, E> {
        Ok(Value::String(value))
    }

    fn visit_seq<A: SeqAccess<'de>>(mut self, mut seq: A) -> Result<Value, A::Error> {
        let mut values = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(value) = seq.next_element_seed(self.nested())? {
            values.push(value);
        }
        Ok(Value::List(values))
    }

    fn visit_map<A: MapAccess<'de>>(mut self, mut map: A) -> Result<Value, A::Error> {
        let mut namespace = Namespace::new();
        while let Some(name) = map.next_key::<String>()? {
            let value = map.next_value_seed(self.nested())?;
            namespace.set(name, value);
        }
        Ok((self.hook)(namespace))
    }
}
