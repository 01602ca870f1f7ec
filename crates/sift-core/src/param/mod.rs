//! Composable optional parameters.
//!
//! Every optional wire attribute (`boost`, `analyzer`, `ignore_malformed`,
//! …) is one independent [`Param`]: it knows its own wire name, default, and
//! encode/decode hook, and nothing about its siblings. A concrete variant is
//! assembled from a required core plus an explicit list of these mixins; its
//! aggregate codec is the union of the hooks, driven by `encode_params!` /
//! `decode_params!`. Cross-parameter rules do not belong here — they live in
//! the resolver.

mod ingest;
mod mapping;
mod query;

#[cfg(test)]
mod tests;

pub use ingest::*;
pub use mapping::*;
pub use query::*;

use crate::scalar::ScalarError;
use serde_json::Value;

/// Wire object shape shared by every body codec.
pub type WireMap = serde_json::Map<String, Value>;

///
/// Param
///
/// One optional named attribute with its own wire identity and codec hook.
///
/// A param is *zero* when it was never assigned; a zero param never
/// serializes and its decode hook leaves it untouched when the key is
/// absent. An assigned value serializes even when it equals the domain
/// default, so explicitly-present defaults survive a decode→encode cycle.
///

pub trait Param {
    /// The JSON member name this parameter owns.
    fn wire_name(&self) -> &'static str;

    /// True iff the parameter was never assigned.
    fn is_zero(&self) -> bool;

    /// Write `obj[wire_name()]` with the native JSON value; no-op when zero.
    fn encode_into(&self, obj: &mut WireMap);

    /// Read `obj[wire_name()]`, coerce, and record explicit presence; no-op
    /// when the key is absent or JSON null.
    fn decode_from(&mut self, obj: &WireMap) -> Result<(), ScalarError>;
}

///
/// WireToken
///
/// Closed string vocabularies carried by enum-valued parameters.
///

pub trait WireToken: Sized {
    fn as_token(self) -> &'static str;
    fn from_token(s: &str) -> Option<Self>;
}

// Declare a number-flavored param. With `default =`, `get` falls back to the
// domain default when unset; without, `get` returns the raw option.
macro_rules! number_param {
    ($(#[$meta:meta])* $name:ident, $wire:literal, default = $default:expr) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Default, PartialEq)]
        pub struct $name(crate::scalar::FlexNumber);

        impl $name {
            /// Returns the configured value, falling back to the domain
            /// default when unset.
            #[must_use]
            pub fn get(&self) -> f64 {
                self.0.get().unwrap_or($default)
            }

            #[must_use]
            pub const fn raw(&self) -> Option<f64> {
                self.0.get()
            }

            pub fn set(
                &mut self,
                v: impl Into<crate::scalar::Scalar>,
            ) -> Result<(), crate::scalar::ScalarError> {
                self.0.set(v)
            }
        }

        crate::param::flex_param_impl!($name, $wire);
    };
    ($(#[$meta:meta])* $name:ident, $wire:literal) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Default, PartialEq)]
        pub struct $name(crate::scalar::FlexNumber);

        impl $name {
            #[must_use]
            pub const fn get(&self) -> Option<f64> {
                self.0.get()
            }

            pub fn set(
                &mut self,
                v: impl Into<crate::scalar::Scalar>,
            ) -> Result<(), crate::scalar::ScalarError> {
                self.0.set(v)
            }
        }

        crate::param::flex_param_impl!($name, $wire);
    };
}

// Declare a boolean-flavored param with a domain default.
macro_rules! bool_param {
    ($(#[$meta:meta])* $name:ident, $wire:literal, default = $default:expr) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
        pub struct $name(crate::scalar::FlexBool);

        impl $name {
            /// Returns the configured value, falling back to the domain
            /// default when unset.
            #[must_use]
            pub fn get(&self) -> bool {
                self.0.get().unwrap_or($default)
            }

            #[must_use]
            pub const fn raw(&self) -> Option<bool> {
                self.0.get()
            }

            pub fn set(
                &mut self,
                v: impl Into<crate::scalar::Scalar>,
            ) -> Result<(), crate::scalar::ScalarError> {
                self.0.set(v)
            }
        }

        crate::param::flex_param_impl!($name, $wire);
    };
}

// Declare a text param. Empty text is unset, matching the wire schema's
// "empty means absent" rule.
macro_rules! text_param {
    ($(#[$meta:meta])* $name:ident, $wire:literal) => {
        $(#[$meta])*
        #[derive(Clone, Debug, Default, PartialEq, Eq)]
        pub struct $name(crate::scalar::FlexText);

        impl $name {
            #[must_use]
            pub fn get(&self) -> Option<&str> {
                self.0.get()
            }

            pub fn set(
                &mut self,
                v: impl Into<crate::scalar::Scalar>,
            ) -> Result<(), crate::scalar::ScalarError> {
                self.0.set(v)
            }
        }

        crate::param::flex_param_impl!($name, $wire);
    };
}

// Shared Param impl for the flex-backed declarators above.
macro_rules! flex_param_impl {
    ($name:ident, $wire:literal) => {
        impl crate::param::Param for $name {
            fn wire_name(&self) -> &'static str {
                $wire
            }

            fn is_zero(&self) -> bool {
                self.0.is_unset()
            }

            fn encode_into(&self, obj: &mut crate::param::WireMap) {
                if let Some(v) = self.0.get() {
                    obj.insert($wire.to_string(), crate::param::wire_value(v));
                }
            }

            fn decode_from(
                &mut self,
                obj: &crate::param::WireMap,
            ) -> Result<(), crate::scalar::ScalarError> {
                match obj.get($wire) {
                    None | Some(serde_json::Value::Null) => Ok(()),
                    Some(v) => self.0.decode(v),
                }
            }
        }
    };
}

// Declare a closed string vocabulary plus the param storing it.
macro_rules! wire_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $token:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Eq, PartialEq)]
        pub enum $name {
            $($variant),+
        }

        impl crate::param::WireToken for $name {
            fn as_token(self) -> &'static str {
                match self {
                    $(Self::$variant => $token),+
                }
            }

            fn from_token(s: &str) -> Option<Self> {
                $(
                    if s.eq_ignore_ascii_case($token) {
                        return Some(Self::$variant);
                    }
                )+
                None
            }
        }
    };
}

// Declare a param backed by a WireToken enum.
macro_rules! enum_param {
    ($(#[$meta:meta])* $name:ident, $wire:literal, $token:ty, default = $default:expr) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
        pub struct $name(Option<$token>);

        impl $name {
            /// Returns the configured value, falling back to the domain
            /// default when unset.
            #[must_use]
            pub fn get(&self) -> $token {
                self.0.unwrap_or($default)
            }

            #[must_use]
            pub const fn raw(&self) -> Option<$token> {
                self.0
            }

            pub fn set(&mut self, v: $token) {
                self.0 = Some(v);
            }
        }

        impl crate::param::Param for $name {
            fn wire_name(&self) -> &'static str {
                $wire
            }

            fn is_zero(&self) -> bool {
                self.0.is_none()
            }

            fn encode_into(&self, obj: &mut crate::param::WireMap) {
                use crate::param::WireToken;
                if let Some(v) = self.0 {
                    obj.insert(
                        $wire.to_string(),
                        serde_json::Value::String(v.as_token().to_string()),
                    );
                }
            }

            fn decode_from(
                &mut self,
                obj: &crate::param::WireMap,
            ) -> Result<(), crate::scalar::ScalarError> {
                use crate::param::WireToken;
                match obj.get($wire) {
                    None | Some(serde_json::Value::Null) => Ok(()),
                    Some(serde_json::Value::String(s)) if s.is_empty() => Ok(()),
                    Some(serde_json::Value::String(s)) => match <$token>::from_token(s) {
                        Some(v) => {
                            self.0 = Some(v);
                            Ok(())
                        }
                        None => Err(crate::scalar::ScalarError::invalid(s, $wire)),
                    },
                    Some(other) => Err(crate::scalar::ScalarError::invalid(other, $wire)),
                }
            }
        }
    };
}

// Declare a param that carries any scalar shape (e.g. null_value, which is a
// number on numeric fields and text on keyword fields).
macro_rules! scalar_param {
    ($(#[$meta:meta])* $name:ident, $wire:literal) => {
        $(#[$meta])*
        #[derive(Clone, Debug, Default, PartialEq)]
        pub struct $name(crate::scalar::Scalar);

        impl $name {
            #[must_use]
            pub const fn get(&self) -> &crate::scalar::Scalar {
                &self.0
            }

            pub fn set(&mut self, v: impl Into<crate::scalar::Scalar>) {
                self.0 = v.into();
            }
        }

        impl crate::param::Param for $name {
            fn wire_name(&self) -> &'static str {
                $wire
            }

            fn is_zero(&self) -> bool {
                self.0.is_unset()
            }

            fn encode_into(&self, obj: &mut crate::param::WireMap) {
                if !self.0.is_unset() {
                    obj.insert($wire.to_string(), self.0.to_wire());
                }
            }

            fn decode_from(
                &mut self,
                obj: &crate::param::WireMap,
            ) -> Result<(), crate::scalar::ScalarError> {
                match obj.get($wire) {
                    None | Some(serde_json::Value::Null) => Ok(()),
                    Some(v) => {
                        self.0 = crate::scalar::Scalar::from_wire(v, $wire)?;
                        Ok(())
                    }
                }
            }
        }
    };
}

// Aggregate encode: the union of each listed param's hook.
macro_rules! encode_params {
    ($obj:expr, $($param:expr),+ $(,)?) => {
        $(crate::param::Param::encode_into(&$param, $obj);)+
    };
}

// Aggregate decode over one wire object, attaching the param name and the
// owning variant/field context to coercion failures.
macro_rules! decode_params {
    ($obj:expr, $on:expr, $($param:expr),+ $(,)?) => {
        $(
            crate::param::Param::decode_from(&mut $param, $obj).map_err(|source| {
                crate::codec::DecodeError::InvalidParam {
                    param: crate::param::Param::wire_name(&$param),
                    on: $on.to_string(),
                    source,
                }
            })?;
        )+
    };
}

pub(crate) use {
    bool_param, decode_params, encode_params, enum_param, flex_param_impl, number_param,
    scalar_param, text_param, wire_enum,
};

/// Native JSON encoding for a flex-stored value.
pub(crate) fn wire_value(v: impl Into<crate::scalar::Scalar>) -> Value {
    v.into().to_wire()
}
