use std::fmt::Display;

use serde::de::{self, Expected, Unexpected};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum Error {
    /// Input is not well-formed JSON.
    #[error("Malformed JSON: {message}")]
    Parse {
        line: usize,
        column: usize,
        message: String,
    },

    /// A fixed schema field has no matching key.
    #[error("Missing field `{0}`")]
    MissingField(String),

    /// A key has no matching fixed schema field.
    #[error("Unexpected field `{0}`")]
    UnknownField(String),

    #[error("Invalid type: {0}")]
    InvalidType(String),

    #[error("No attribute `{0}`")]
    NoAttribute(String),

    #[error("{0}")]
    Custom(String),
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Error::Parse {
            line: error.line(),
            column: error.column(),
            message: error.to_string(),
        }
    }
}

impl de::Error for Error {
    fn custom<T: Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    fn invalid_type(unexp: Unexpected<'_>, exp: &dyn Expected) -> Self {
        Error::InvalidType(format!("{unexp}, expected {exp}"))
    }

    fn unknown_field(field: &str, _expected: &'static [&'static str]) -> Self {
        Error::UnknownField(field.to_string())
    }

    fn missing_field(field: &'static str) -> Self {
        Error::MissingField(field.to_string())
    }
}
