//! The numeric field family.
//!
//! Byte through double share one parameter set; each kind is generated from
//! the same table row.

use crate::{
    codec::DecodeError,
    mapping::Field,
    param::{
        BoostParam, CoerceParam, DocValuesParam, IgnoreMalformedParam, IndexParam, NullValueParam,
        StoreParam, WireMap, decode_params, encode_params,
    },
    resolve::{Resolve, ResolveError},
    scalar::Scalar,
};

macro_rules! numeric_field {
    ($(#[$meta:meta])* $field:ident, $params:ident, $variant:ident, $disc:literal) => {
        $(#[$meta])*
        #[derive(Clone, Debug, Default, PartialEq)]
        pub struct $field {
            boost: BoostParam,
            coerce: CoerceParam,
            doc_values: DocValuesParam,
            ignore_malformed: IgnoreMalformedParam,
            index: IndexParam,
            null_value: NullValueParam,
            store: StoreParam,
        }

        impl $field {
            #[must_use]
            pub fn boost(&self) -> f64 {
                self.boost.get()
            }

            #[must_use]
            pub fn coerce(&self) -> bool {
                self.coerce.get()
            }

            #[must_use]
            pub fn doc_values(&self) -> bool {
                self.doc_values.get()
            }

            #[must_use]
            pub fn ignore_malformed(&self) -> bool {
                self.ignore_malformed.get()
            }

            #[must_use]
            pub fn index(&self) -> bool {
                self.index.get()
            }

            #[must_use]
            pub const fn null_value(&self) -> &Scalar {
                self.null_value.get()
            }

            #[must_use]
            pub fn store(&self) -> bool {
                self.store.get()
            }

            pub(crate) fn encode_body(&self, obj: &mut WireMap) {
                encode_params!(
                    obj,
                    self.boost,
                    self.coerce,
                    self.doc_values,
                    self.ignore_malformed,
                    self.index,
                    self.null_value,
                    self.store,
                );
            }

            pub(crate) fn decode_body(
                &mut self,
                obj: &WireMap,
                on: &str,
            ) -> Result<(), DecodeError> {
                decode_params!(
                    obj,
                    on,
                    self.boost,
                    self.coerce,
                    self.doc_values,
                    self.ignore_malformed,
                    self.index,
                    self.null_value,
                    self.store,
                );
                Ok(())
            }
        }

        ///
        #[doc = concat!(" ", stringify!($params))]
        ///

        #[derive(Clone, Debug, Default)]
        pub struct $params {
            pub boost: Scalar,
            pub coerce: Scalar,
            pub doc_values: Scalar,
            pub ignore_malformed: Scalar,
            pub index: Scalar,
            pub null_value: Scalar,
            pub store: Scalar,
        }

        impl Resolve for $params {
            type Output = Field;

            fn resolve(self) -> Result<Field, ResolveError> {
                let mut field = $field::default();
                field
                    .boost
                    .set(self.boost)
                    .map_err(ResolveError::invalid("boost", $disc))?;
                field
                    .coerce
                    .set(self.coerce)
                    .map_err(ResolveError::invalid("coerce", $disc))?;
                field
                    .doc_values
                    .set(self.doc_values)
                    .map_err(ResolveError::invalid("doc_values", $disc))?;
                field
                    .ignore_malformed
                    .set(self.ignore_malformed)
                    .map_err(ResolveError::invalid("ignore_malformed", $disc))?;
                field
                    .index
                    .set(self.index)
                    .map_err(ResolveError::invalid("index", $disc))?;
                field.null_value.set(self.null_value);
                field
                    .store
                    .set(self.store)
                    .map_err(ResolveError::invalid("store", $disc))?;
                Ok(Field::$variant(field))
            }
        }
    };
}

numeric_field! {
    /// A signed 8-bit integer field.
    ByteField, ByteFieldParams, Byte, "byte"
}

numeric_field! {
    /// A signed 16-bit integer field.
    ShortField, ShortFieldParams, Short, "short"
}

numeric_field! {
    /// A signed 32-bit integer field.
    IntegerField, IntegerFieldParams, Integer, "integer"
}

numeric_field! {
    /// A signed 64-bit integer field.
    LongField, LongFieldParams, Long, "long"
}

numeric_field! {
    /// A single-precision floating point field.
    FloatField, FloatFieldParams, Float, "float"
}

numeric_field! {
    /// A double-precision floating point field.
    DoubleField, DoubleFieldParams, Double, "double"
}
