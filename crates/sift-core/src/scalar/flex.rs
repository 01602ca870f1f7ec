//! Flavored scalar storage.
//!
//! Each wrapper holds one optional wire value in canonical form and tracks
//! explicit presence: `None` means the value was never assigned (and never
//! serializes), `Some` means it was assigned — by a builder or by decode —
//! even when it equals the domain default. The schema rule "empty or null
//! means absent" is applied here, not treated as an error.

use crate::scalar::{Scalar, ScalarError};
use serde_json::Value;

///
/// FlexNumber
///
/// A number-flavored wire value. Accepts numbers and numeric text.
///

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FlexNumber(Option<f64>);

impl FlexNumber {
    #[must_use]
    pub const fn get(&self) -> Option<f64> {
        self.0
    }

    #[must_use]
    pub const fn is_unset(&self) -> bool {
        self.0.is_none()
    }

    pub fn set(&mut self, v: impl Into<Scalar>) -> Result<(), ScalarError> {
        self.assign(&v.into())
    }

    pub(crate) fn assign(&mut self, s: &Scalar) -> Result<(), ScalarError> {
        match s {
            Scalar::Absent => {
                self.0 = None;
                Ok(())
            }
            Scalar::Text(t) if t.is_empty() => {
                self.0 = None;
                Ok(())
            }
            other => match other.as_f64() {
                Some(f) => {
                    self.0 = Some(f);
                    Ok(())
                }
                None => Err(ScalarError::invalid(
                    other.to_text().unwrap_or_default(),
                    "number",
                )),
            },
        }
    }

    pub(crate) fn decode(&mut self, v: &Value) -> Result<(), ScalarError> {
        self.assign(&Scalar::from_wire(v, "number")?)
    }
}

///
/// FlexBool
///
/// A boolean-flavored wire value. Accepts booleans and `true`/`false` text.
///

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FlexBool(Option<bool>);

impl FlexBool {
    #[must_use]
    pub const fn get(&self) -> Option<bool> {
        self.0
    }

    #[must_use]
    pub const fn is_unset(&self) -> bool {
        self.0.is_none()
    }

    pub fn set(&mut self, v: impl Into<Scalar>) -> Result<(), ScalarError> {
        self.assign(&v.into())
    }

    pub(crate) fn assign(&mut self, s: &Scalar) -> Result<(), ScalarError> {
        match s {
            Scalar::Absent => {
                self.0 = None;
                Ok(())
            }
            Scalar::Text(t) if t.is_empty() => {
                self.0 = None;
                Ok(())
            }
            other => match other.as_bool() {
                Some(b) => {
                    self.0 = Some(b);
                    Ok(())
                }
                None => Err(ScalarError::invalid(
                    other.to_text().unwrap_or_default(),
                    "boolean",
                )),
            },
        }
    }

    pub(crate) fn decode(&mut self, v: &Value) -> Result<(), ScalarError> {
        self.assign(&Scalar::from_wire(v, "boolean")?)
    }
}

///
/// FlexText
///
/// A text-flavored wire value. Any scalar is accepted and stored as its
/// lossless text render; empty text means unset.
///

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FlexText(Option<String>);

impl FlexText {
    #[must_use]
    pub fn get(&self) -> Option<&str> {
        self.0.as_deref()
    }

    #[must_use]
    pub const fn is_unset(&self) -> bool {
        self.0.is_none()
    }

    pub fn set(&mut self, v: impl Into<Scalar>) -> Result<(), ScalarError> {
        self.assign(&v.into())
    }

    pub(crate) fn assign(&mut self, s: &Scalar) -> Result<(), ScalarError> {
        match s.to_text() {
            None => {
                self.0 = None;
                Ok(())
            }
            Some(t) if t.is_empty() => {
                self.0 = None;
                Ok(())
            }
            Some(t) => {
                self.0 = Some(t);
                Ok(())
            }
        }
    }

    pub(crate) fn decode(&mut self, v: &Value) -> Result<(), ScalarError> {
        self.assign(&Scalar::from_wire(v, "text")?)
    }
}
