//! Wire codec plumbing shared by the mapping, query, and ingest domains.
//!
//! Decoding is two-pass everywhere: parse loosely into JSON values, peek the
//! discriminator, construct the zero-value variant through the registry,
//! then replay the body over it. Errors always name the error kind and the
//! implicated key so a fault can be localized without re-parsing.

use crate::{param::WireMap, registry::RegistryError, scalar::ScalarError};
use serde_json::Value;
use thiserror::Error as ThisError;

///
/// EncodeError
///

#[derive(Debug, ThisError)]
pub enum EncodeError {
    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
}

///
/// DecodeError
///

#[derive(Debug, ThisError)]
pub enum DecodeError {
    #[error("json: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// A field-mapping object has no `"type"` sibling.
    #[error("mapping type is missing for field <{field}>")]
    MissingType { field: String },

    /// A parameter value could not be coerced to its wire kind.
    #[error("invalid {param} on {on}: {source}")]
    InvalidParam {
        param: &'static str,
        on: String,
        source: ScalarError,
    },

    #[error("expected a JSON object for {context}, got {got}")]
    ExpectedObject { context: String, got: &'static str },

    #[error("expected a JSON array for {context}, got {got}")]
    ExpectedArray { context: String, got: &'static str },

    /// A clause/processor wrapper must carry exactly one discriminator key.
    #[error("{context} wrapper must have exactly one discriminator key, got {keys}")]
    BadWrapper { context: String, keys: usize },
}

impl DecodeError {
    pub(crate) fn invalid(param: &'static str, on: impl ToString) -> impl FnOnce(ScalarError) -> Self {
        move |source| Self::InvalidParam {
            param,
            on: on.to_string(),
            source,
        }
    }
}

/// JSON type name, for error messages.
pub(crate) const fn json_type(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

pub(crate) fn expect_object<'a>(v: &'a Value, context: &str) -> Result<&'a WireMap, DecodeError> {
    v.as_object().ok_or_else(|| DecodeError::ExpectedObject {
        context: context.to_string(),
        got: json_type(v),
    })
}

/// Extract the sole `(discriminator, body)` entry of a wrapper object.
pub(crate) fn single_key<'a>(
    obj: &'a WireMap,
    context: &str,
) -> Result<(&'a str, &'a Value), DecodeError> {
    let mut entries = obj.iter();
    match (entries.next(), entries.next()) {
        (Some((key, body)), None) => Ok((key.as_str(), body)),
        _ => Err(DecodeError::BadWrapper {
            context: context.to_string(),
            keys: obj.len(),
        }),
    }
}

/// Read an optional string member, treating null as absent.
pub(crate) fn optional_str<'a>(obj: &'a WireMap, key: &str) -> Option<&'a str> {
    obj.get(key).and_then(Value::as_str)
}
