use serde_json::{Map, Value};
use thiserror::Error;

/// Why a body could not be turned into a [`RawSubmission`].
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("malformed JSON: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("expected a JSON object, got {0}")]
    NotAnObject(&'static str),
}

/// A parsed but unvalidated submission: a JSON object of unknown shape.
///
/// Nothing about the field values is trusted. The only way to a
/// [`SanitizedRecord`](crate::SanitizedRecord) is through a
/// [`Validator`](crate::Validator).
#[derive(Clone, Debug, PartialEq)]
pub struct RawSubmission {
    fields: Map<String, Value>,
}

impl RawSubmission {
    /// Parse a request body.
    pub fn parse(body: &[u8]) -> Result<Self, ParseError> {
        let value: Value = serde_json::from_slice(body)?;
        Self::from_value(value)
    }

    /// Accept an already-parsed value, which must be an object.
    pub fn from_value(value: Value) -> Result<Self, ParseError> {
        match value {
            Value::Object(fields) => Ok(Self { fields }),
            other => Err(ParseError::NotAnObject(json_type_name(&other))),
        }
    }

    /// Look up a field. `null` is reported as absent.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field).filter(|v| !v.is_null())
    }

    /// The field as a trimmed string, if it is a string.
    pub fn trimmed_str(&self, field: &str) -> Option<&str> {
        self.get(field).and_then(Value::as_str).map(str::trim)
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    pub fn into_fields(self) -> Map<String, Value> {
        self.fields
    }
}

/// Name of a JSON value's type, for messages.
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
