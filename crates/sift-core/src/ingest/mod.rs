//! Ingest-processor domain.
//!
//! Processors share the query domain's single-key wrapper convention:
//! `{"set": {...}}`. A [`Pipeline`] is an ordered processor sequence with an
//! optional description; processors run in order, each reading the document
//! the previous one produced.

mod lowercase;
mod pipeline;
mod remove;
mod rename;
mod set;

#[cfg(test)]
mod tests;

pub use lowercase::{LowercaseParams, LowercaseProcessor};
pub use pipeline::Pipeline;
pub use remove::{RemoveParams, RemoveProcessor};
pub use rename::{RenameParams, RenameProcessor};
pub use set::{SetParams, SetProcessor};

use crate::{
    codec::{DecodeError, expect_object, single_key},
    param::WireMap,
    registry,
    resolve::{Resolve, ResolveError},
};
use serde::{Serialize, Serializer};
use serde_json::Value;
use std::fmt;

// The full discriminator vocabulary. Only a subset is constructible here;
// the rest reserve their wire names so a custom registration cannot collide
// with a standard processor silently.
macro_rules! processor_kinds {
    ($($variant:ident => $disc:literal),+ $(,)?) => {
        ///
        /// ProcessorKind
        ///

        #[derive(Clone, Copy, Debug, Eq, PartialEq)]
        pub enum ProcessorKind {
            $($variant),+
        }

        impl ProcessorKind {
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $disc),+
                }
            }
        }

        impl fmt::Display for ProcessorKind {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

processor_kinds! {
    Append => "append",
    Bytes => "bytes",
    Circle => "circle",
    Convert => "convert",
    Csv => "csv",
    Date => "date",
    DateIndexName => "date_index_name",
    Dissect => "dissect",
    DotExpander => "dot_expander",
    Drop => "drop",
    Enrich => "enrich",
    Fail => "fail",
    Foreach => "foreach",
    GeoIp => "geoip",
    Grok => "grok",
    Gsub => "gsub",
    HtmlStrip => "html_strip",
    Inference => "inference",
    Join => "join",
    Json => "json",
    Kv => "kv",
    Lowercase => "lowercase",
    Pipeline => "pipeline",
    Remove => "remove",
    Rename => "rename",
    Script => "script",
    Set => "set",
    SetSecurityUser => "set_security_user",
    Sort => "sort",
    Split => "split",
    Trim => "trim",
    Uppercase => "uppercase",
    UrlDecode => "urldecode",
    UserAgent => "user_agent",
}

// One row per constructible processor.
macro_rules! processors {
    ($(($variant:ident, $ty:ident)),+ $(,)?) => {
        ///
        /// Processor
        ///
        /// A canonical ingest processor. Constructed by [`Resolve`] from a
        /// params value, or by [`Pipeline`] decode from wire bytes.
        ///

        #[derive(Clone, Debug, PartialEq)]
        pub enum Processor {
            $($variant($ty)),+
        }

        impl Processor {
            #[must_use]
            pub const fn kind(&self) -> ProcessorKind {
                match self {
                    $(Self::$variant(_) => ProcessorKind::$variant),+
                }
            }

            pub(crate) fn encode_body(&self) -> WireMap {
                match self {
                    $(Self::$variant(processor) => processor.encode_body()),+
                }
            }

            pub(crate) fn decode_body(&mut self, body: &Value) -> Result<(), DecodeError> {
                match self {
                    $(Self::$variant(processor) => processor.decode_body(body)),+
                }
            }
        }

        pub(crate) const BUILTIN: &[(&str, fn() -> Processor)] = &[
            $((ProcessorKind::$variant.as_str(), || Processor::$variant(<$ty>::default()))),+
        ];
    };
}

processors! {
    (Lowercase, LowercaseProcessor),
    (Remove, RemoveProcessor),
    (Rename, RenameProcessor),
    (Set, SetProcessor),
}

impl Processor {
    /// Encode as the single-key wrapper object `{discriminator: body}`.
    #[must_use]
    pub fn to_value(&self) -> Value {
        let mut wrapper = WireMap::new();
        wrapper.insert(
            self.kind().as_str().to_string(),
            Value::Object(self.encode_body()),
        );
        Value::Object(wrapper)
    }

    /// Decode one wrapper object.
    pub fn from_value(value: &Value) -> Result<Self, DecodeError> {
        let obj = expect_object(value, "processor")?;
        let (discriminator, body) = single_key(obj, "processor")?;
        Self::decode_entry(discriminator, body)
    }

    pub(crate) fn decode_entry(discriminator: &str, body: &Value) -> Result<Self, DecodeError> {
        let mut processor = registry::construct_processor(discriminator)?;
        processor.decode_body(body)?;
        Ok(processor)
    }
}

impl Serialize for Processor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_value().serialize(serializer)
    }
}

// A canonical processor resolves to itself.
impl Resolve for Processor {
    type Output = Self;

    fn resolve(self) -> Result<Self, ResolveError> {
        Ok(self)
    }
}
