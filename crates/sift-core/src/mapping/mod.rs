//! Field-mapping domain.
//!
//! A mapping declares how a named field is indexed. On the wire the
//! discriminator rides as a `"type"` sibling property:
//! `{"type": "alias", "path": "distance"}`. The [`FieldMap`] container keys
//! variants by field name.

mod alias;
mod boolean;
mod date;
mod field_map;
mod keyword;
mod numeric;
mod rank_feature;
mod scaled_float;
mod text;

#[cfg(test)]
mod tests;

pub use alias::{AliasField, AliasFieldParams};
pub use boolean::{BooleanField, BooleanFieldParams};
pub use date::{DateField, DateFieldParams};
pub use field_map::{FieldMap, FieldMapError};
pub use keyword::{KeywordField, KeywordFieldParams};
pub use numeric::{
    ByteField, ByteFieldParams, DoubleField, DoubleFieldParams, FloatField, FloatFieldParams,
    IntegerField, IntegerFieldParams, LongField, LongFieldParams, ShortField, ShortFieldParams,
};
pub use rank_feature::{RankFeatureField, RankFeatureFieldParams};
pub use scaled_float::{ScaledFloatField, ScaledFloatFieldParams};
pub use text::{TextField, TextFieldParams};

use crate::{
    codec::{DecodeError, expect_object, optional_str},
    param::WireMap,
    registry,
    resolve::{Resolve, ResolveError},
};
use serde::{Serialize, Serializer};
use serde_json::Value;
use std::fmt;

// One row per field kind: enum variant, canonical type, wire discriminator.
macro_rules! field_kinds {
    ($(($variant:ident, $ty:ident, $disc:literal)),+ $(,)?) => {
        ///
        /// FieldKind
        ///

        #[derive(Clone, Copy, Debug, Eq, PartialEq)]
        pub enum FieldKind {
            $($variant),+
        }

        impl FieldKind {
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $disc),+
                }
            }
        }

        impl fmt::Display for FieldKind {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        ///
        /// Field
        ///
        /// A canonical field mapping. Constructed by [`Resolve`] from a
        /// params value, or by [`FieldMap`] decode from wire bytes.
        ///

        #[derive(Clone, Debug, PartialEq)]
        pub enum Field {
            $($variant($ty)),+
        }

        impl Field {
            #[must_use]
            pub const fn kind(&self) -> FieldKind {
                match self {
                    $(Self::$variant(_) => FieldKind::$variant),+
                }
            }

            pub(crate) fn encode_body(&self, obj: &mut WireMap) {
                match self {
                    $(Self::$variant(field) => field.encode_body(obj)),+
                }
            }

            pub(crate) fn decode_body(&mut self, obj: &WireMap, on: &str) -> Result<(), DecodeError> {
                match self {
                    $(Self::$variant(field) => field.decode_body(obj, on)),+
                }
            }
        }

        pub(crate) const BUILTIN: &[(&str, fn() -> Field)] = &[
            $(($disc, || Field::$variant(<$ty>::default()))),+
        ];
    };
}

field_kinds! {
    (Alias, AliasField, "alias"),
    (Boolean, BooleanField, "boolean"),
    (Byte, ByteField, "byte"),
    (Short, ShortField, "short"),
    (Integer, IntegerField, "integer"),
    (Long, LongField, "long"),
    (Float, FloatField, "float"),
    (Double, DoubleField, "double"),
    (ScaledFloat, ScaledFloatField, "scaled_float"),
    (Date, DateField, "date"),
    (Keyword, KeywordField, "keyword"),
    (Text, TextField, "text"),
    (RankFeature, RankFeatureField, "rank_feature"),
}

impl Field {
    /// Encode as the wire object, discriminator as the `"type"` sibling.
    #[must_use]
    pub fn to_value(&self) -> Value {
        let mut obj = WireMap::new();
        obj.insert(
            "type".to_string(),
            Value::String(self.kind().as_str().to_string()),
        );
        self.encode_body(&mut obj);
        Value::Object(obj)
    }

    /// Decode one field-map entry. Two passes: peek the `"type"` sibling,
    /// construct the zero value through the registry, then replay the body.
    pub fn from_entry(name: &str, value: &Value) -> Result<Self, DecodeError> {
        let obj = expect_object(value, &format!("field <{name}>"))?;
        let discriminator = optional_str(obj, "type").ok_or_else(|| DecodeError::MissingType {
            field: name.to_string(),
        })?;
        let mut field = registry::construct_field(discriminator)?;
        field.decode_body(obj, name)?;
        Ok(field)
    }
}

impl Serialize for Field {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_value().serialize(serializer)
    }
}

// A canonical field resolves to itself.
impl Resolve for Field {
    type Output = Self;

    fn resolve(self) -> Result<Self, ResolveError> {
        Ok(self)
    }
}
