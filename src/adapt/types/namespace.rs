use std::collections::{BTreeMap, HashMap};
use std::fmt;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::adapt::error::Error;
use crate::adapt::types::Value;

/// Open attribute holder: any set of names, each bound to a [`Value`].
///
/// Attributes keep the order in which they were first set. Equality ignores
/// that order and compares the attribute sets.
#[derive(Debug, Clone, Default)]
pub struct Namespace {
    attrs: Vec<(String, Value)>,
    positions: HashMap<String, usize>,
}

impl Namespace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            attrs: Vec::with_capacity(capacity),
            positions: HashMap::with_capacity(capacity),
        }
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        let position = *self.positions.get(name)?;
        Some(&self.attrs[position].1)
    }

    pub fn attr(&self, name: &str) -> Result<&Value, Error> {
        self.get(name)
            .ok_or_else(|| Error::NoAttribute(name.to_string()))
    }

    /// Binds `name`, returning the value it replaced.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        let name = name.into();
        let value = value.into();
        match self.positions.get(&name) {
            Some(&position) => Some(std::mem::replace(&mut self.attrs[position].1, value)),
            None => {
                self.positions.insert(name.clone(), self.attrs.len());
                self.attrs.push((name, value));
                None
            }
        }
    }

    /// Unbinds `name`; later attributes shift down one position.
    pub fn remove(&mut self, name: &str) -> Option<Value> {
        let position = self.positions.remove(name)?;
        let (_, value) = self.attrs.remove(position);
        for (shifted, (attr, _)) in self.attrs.iter().enumerate().skip(position) {
            self.positions.insert(attr.clone(), shifted);
        }
        Some(value)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.positions.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.attrs.iter().map(|(name, _)| name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.attrs.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.attrs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attrs.is_empty()
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

impl PartialEq for Namespace {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .all(|(name, value)| other.get(name) == Some(value))
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Namespace {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut namespace = Namespace::with_capacity(iter.size_hint().0);
        for (name, value) in iter {
            namespace.set(name, value);
        }
        namespace
    }
}

impl IntoIterator for Namespace {
    type Item = (String, Value);
    type IntoIter = std::vec::IntoIter<(String, Value)>;

    fn into_iter(self) -> Self::IntoIter {
        self.attrs.into_iter()
    }
}

impl<V: Into<Value>> From<HashMap<String, V>> for Namespace {
    fn from(map: HashMap<String, V>) -> Self {
        map.into_iter().collect()
    }
}

impl<V: Into<Value>> From<BTreeMap<String, V>> for Namespace {
    fn from(map: BTreeMap<String, V>) -> Self {
        map.into_iter().collect()
    }
}

impl Serialize for Namespace {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (name, value) in self.iter() {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "namespace(")?;
        for (index, (name, value)) in self.iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{name}={value}")?;
        }
        write!(f, ")")
    }
}
