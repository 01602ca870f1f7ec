//! Flexible scalar values.
//!
//! Search-engine wire documents encode many parameters permissively: a
//! numeric parameter may legally arrive as a JSON number, a quoted number,
//! or be absent entirely. `Scalar` is the canonical in-memory form of such a
//! value, with lossless coercion between the representations. The flavored
//! wrappers in [`flex`] are the storage used by parameter mixins.

mod flex;

#[cfg(test)]
mod tests;

pub use flex::{FlexBool, FlexNumber, FlexText};

use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use serde_json::Value;
use std::fmt;
use thiserror::Error as ThisError;
use time::{OffsetDateTime, format_description::well_known::Rfc3339};

// Largest magnitude at which every integral f64 is exactly representable
// as an i64, used when choosing the native JSON number encoding.
const F64_SAFE_INT: f64 = 9_007_199_254_740_992.0; // 2^53

///
/// ScalarError
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum ScalarError {
    #[error("invalid {target} value <{value}>")]
    InvalidValue { value: String, target: &'static str },
}

impl ScalarError {
    pub(crate) fn invalid(value: impl fmt::Display, target: &'static str) -> Self {
        Self::InvalidValue {
            value: value.to_string(),
            target,
        }
    }
}

///
/// Scalar
///
/// Tagged union over the scalar shapes a permissive wire field can take.
/// `Absent` is distinct from every zero value; an absent scalar never
/// serializes and decodes leave it untouched.
///

#[derive(Clone, Debug, Default)]
pub enum Scalar {
    #[default]
    Absent,
    Number(f64),
    Bool(bool),
    Text(String),
    Time(OffsetDateTime),
}

impl Scalar {
    #[must_use]
    pub const fn is_unset(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Coerce to a number. Numeric text parses; everything else is `None`,
    /// never a silent zero.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Text(t) => t.trim().parse::<f64>().ok().filter(|f| f.is_finite()),
            _ => None,
        }
    }

    /// Coerce to a boolean. Accepts `true`/`false` text, case-insensitively.
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            Self::Text(t) if t.eq_ignore_ascii_case("true") => Some(true),
            Self::Text(t) if t.eq_ignore_ascii_case("false") => Some(false),
            _ => None,
        }
    }

    /// Borrow the text representation, if this scalar is textual.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(t) => Some(t),
            _ => None,
        }
    }

    /// Coerce to a point in time. Text must be RFC 3339.
    #[must_use]
    pub fn as_time(&self) -> Option<OffsetDateTime> {
        match self {
            Self::Time(t) => Some(*t),
            Self::Text(t) => OffsetDateTime::parse(t, &Rfc3339).ok(),
            _ => None,
        }
    }

    /// Render the value as text without loss. `None` only for `Absent`.
    #[must_use]
    pub fn to_text(&self) -> Option<String> {
        match self {
            Self::Absent => None,
            Self::Number(n) => Some(render_number(*n)),
            Self::Bool(b) => Some(b.to_string()),
            Self::Text(t) => Some(t.clone()),
            Self::Time(t) => t.format(&Rfc3339).ok(),
        }
    }

    /// Normalize a JSON wire value. Non-scalar JSON fails with the value and
    /// target kind in the error.
    pub(crate) fn from_wire(value: &Value, target: &'static str) -> Result<Self, ScalarError> {
        match value {
            Value::Null => Ok(Self::Absent),
            Value::Bool(b) => Ok(Self::Bool(*b)),
            Value::Number(n) => n
                .as_f64()
                .map(Self::Number)
                .ok_or_else(|| ScalarError::invalid(n, target)),
            Value::String(s) => Ok(Self::Text(s.clone())),
            Value::Array(_) | Value::Object(_) => Err(ScalarError::invalid(value, target)),
        }
    }

    /// Encode as the native JSON value for this scalar's kind.
    pub(crate) fn to_wire(&self) -> Value {
        match self {
            Self::Absent => Value::Null,
            Self::Number(n) => number_to_value(*n),
            Self::Bool(b) => Value::Bool(*b),
            Self::Text(t) => Value::String(t.clone()),
            Self::Time(t) => t
                .format(&Rfc3339)
                .map_or(Value::Null, Value::String),
        }
    }
}

// Equality operates on the coerced value, not the wire representation:
// `3`, `3.0`, and `"3"` are the same scalar.
impl PartialEq for Scalar {
    fn eq(&self, other: &Self) -> bool {
        if let (Self::Absent, Self::Absent) = (self, other) {
            return true;
        }
        if let (Some(a), Some(b)) = (self.as_f64(), other.as_f64()) {
            return a == b;
        }
        if let (Some(a), Some(b)) = (self.as_bool(), other.as_bool()) {
            return a == b;
        }
        if let (Some(a), Some(b)) = (self.as_time(), other.as_time()) {
            return a == b;
        }
        match (self, other) {
            (Self::Text(a), Self::Text(b)) => a == b,
            _ => false,
        }
    }
}

impl From<f64> for Scalar {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<f32> for Scalar {
    fn from(v: f32) -> Self {
        Self::Number(f64::from(v))
    }
}

impl From<i64> for Scalar {
    fn from(v: i64) -> Self {
        Self::Number(v as f64)
    }
}

impl From<i32> for Scalar {
    fn from(v: i32) -> Self {
        Self::Number(f64::from(v))
    }
}

impl From<u64> for Scalar {
    fn from(v: u64) -> Self {
        Self::Number(v as f64)
    }
}

impl From<u32> for Scalar {
    fn from(v: u32) -> Self {
        Self::Number(f64::from(v))
    }
}

impl From<bool> for Scalar {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<&str> for Scalar {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<String> for Scalar {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl From<OffsetDateTime> for Scalar {
    fn from(v: OffsetDateTime) -> Self {
        Self::Time(v)
    }
}

impl<T> From<Option<T>> for Scalar
where
    T: Into<Self>,
{
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Absent, Into::into)
    }
}

impl Serialize for Scalar {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Absent => serializer.serialize_none(),
            Self::Number(n) => number_to_value(*n).serialize(serializer),
            Self::Bool(b) => serializer.serialize_bool(*b),
            Self::Text(t) => serializer.serialize_str(t),
            Self::Time(t) => {
                let text = t.format(&Rfc3339).map_err(serde::ser::Error::custom)?;
                serializer.serialize_str(&text)
            }
        }
    }
}

impl<'de> Deserialize<'de> for Scalar {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ScalarVisitor;

        impl de::Visitor<'_> for ScalarVisitor {
            type Value = Scalar;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a JSON scalar (number, boolean, string, or null)")
            }

            fn visit_bool<E>(self, v: bool) -> Result<Scalar, E> {
                Ok(Scalar::Bool(v))
            }

            fn visit_i64<E>(self, v: i64) -> Result<Scalar, E> {
                Ok(Scalar::Number(v as f64))
            }

            fn visit_u64<E>(self, v: u64) -> Result<Scalar, E> {
                Ok(Scalar::Number(v as f64))
            }

            fn visit_f64<E>(self, v: f64) -> Result<Scalar, E> {
                Ok(Scalar::Number(v))
            }

            fn visit_str<E>(self, v: &str) -> Result<Scalar, E> {
                Ok(Scalar::Text(v.to_string()))
            }

            fn visit_unit<E>(self) -> Result<Scalar, E> {
                Ok(Scalar::Absent)
            }

            fn visit_none<E>(self) -> Result<Scalar, E> {
                Ok(Scalar::Absent)
            }
        }

        deserializer.deserialize_any(ScalarVisitor)
    }
}

/// Choose the native JSON encoding for a number: integral values within the
/// exact-i64 range stay integers so wire fixtures round-trip unchanged.
#[must_use]
pub(crate) fn number_to_value(f: f64) -> Value {
    if f.fract() == 0.0 && f.abs() < F64_SAFE_INT {
        Value::from(f as i64)
    } else {
        Value::from(f)
    }
}

fn render_number(f: f64) -> String {
    if f.fract() == 0.0 && f.abs() < F64_SAFE_INT {
        format!("{}", f as i64)
    } else {
        f.to_string()
    }
}
