use serde::Deserialize;

use super::error::Error;
use super::types::{Namespace, Value};

pub const FIELDS: [&str; 3] = ["a", "b", "c"];

/// Fixed schema `{a, b, c}` with freely assignable fields.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Record {
    pub a: i64,
    pub b: String,
    pub c: Vec<i64>,
}

/// Same schema as [`Record`], read-only once built. Fields are reachable by
/// name and by position.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FrozenRecord {
    a: i64,
    b: String,
    c: Vec<i64>,
}

impl FrozenRecord {
    pub fn new(a: i64, b: impl Into<String>, c: Vec<i64>) -> Self {
        Self { a, b: b.into(), c }
    }

    pub fn a(&self) -> i64 {
        self.a
    }

    pub fn b(&self) -> &str {
        &self.b
    }

    pub fn c(&self) -> &[i64] {
        &self.c
    }

    pub fn len(&self) -> usize {
        FIELDS.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn get(&self, index: usize) -> Option<Value> {
        match index {
            0 => Some(Value::Int(self.a)),
            1 => Some(Value::String(self.b.clone())),
            2 => Some(Value::from(self.c.clone())),
            _ => None,
        }
    }

    pub fn as_tuple(&self) -> (i64, &str, &[i64]) {
        (self.a, &self.b, &self.c)
    }

    pub fn into_tuple(self) -> (i64, String, Vec<i64>) {
        (self.a, self.b, self.c)
    }
}

impl From<FrozenRecord> for (i64, String, Vec<i64>) {
    fn from(record: FrozenRecord) -> Self {
        record.into_tuple()
    }
}

impl From<Record> for FrozenRecord {
    fn from(record: Record) -> Self {
        Self::new(record.a, record.b, record.c)
    }
}

impl From<Record> for Namespace {
    fn from(record: Record) -> Self {
        Namespace::from_iter([
            ("a", Value::Int(record.a)),
            ("b", Value::String(record.b)),
            ("c", Value::from(record.c)),
        ])
    }
}

impl From<FrozenRecord> for Namespace {
    fn from(record: FrozenRecord) -> Self {
        let (a, b, c) = record.into_tuple();
        Namespace::from(Record { a, b, c })
    }
}

impl TryFrom<Namespace> for Record {
    type Error = Error;

    fn try_from(namespace: Namespace) -> Result<Self, Error> {
        super::adapt(namespace)
    }
}

impl TryFrom<Namespace> for FrozenRecord {
    type Error = Error;

    fn try_from(namespace: Namespace) -> Result<Self, Error> {
        super::adapt(namespace)
    }
}
