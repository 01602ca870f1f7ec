use crate::{
    codec::DecodeError,
    mapping::{Field, FieldKind},
    param::{
        CoerceParam, DocValuesParam, IgnoreMalformedParam, IndexParam, NullValueParam,
        ScalingFactorParam, StoreParam, WireMap, decode_params, encode_params,
    },
    resolve::{Resolve, ResolveError},
    scalar::Scalar,
};

///
/// ScaledFloatField
///
/// A floating point field backed by a long and a fixed scaling factor:
/// `2.34` with a factor of 100 is stored as `234`. The factor is required.
///

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScaledFloatField {
    scaling_factor: ScalingFactorParam,
    coerce: CoerceParam,
    doc_values: DocValuesParam,
    ignore_malformed: IgnoreMalformedParam,
    index: IndexParam,
    null_value: NullValueParam,
    store: StoreParam,
}

impl ScaledFloatField {
    /// The factor values are multiplied by at index time. `None` only on a
    /// freshly-constructed zero value; resolution guarantees presence.
    #[must_use]
    pub const fn scaling_factor(&self) -> Option<f64> {
        self.scaling_factor.get()
    }

    #[must_use]
    pub fn coerce(&self) -> bool {
        self.coerce.get()
    }

    #[must_use]
    pub fn ignore_malformed(&self) -> bool {
        self.ignore_malformed.get()
    }

    #[must_use]
    pub const fn null_value(&self) -> &Scalar {
        self.null_value.get()
    }

    pub(crate) fn encode_body(&self, obj: &mut WireMap) {
        encode_params!(
            obj,
            self.scaling_factor,
            self.coerce,
            self.doc_values,
            self.ignore_malformed,
            self.index,
            self.null_value,
            self.store,
        );
    }

    pub(crate) fn decode_body(&mut self, obj: &WireMap, on: &str) -> Result<(), DecodeError> {
        decode_params!(
            obj,
            on,
            self.scaling_factor,
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
/// ScaledFloatFieldParams
///

#[derive(Clone, Debug, Default)]
pub struct ScaledFloatFieldParams {
    /// (Required) Factor to multiply values by before rounding to a long.
    pub scaling_factor: Scalar,
    pub coerce: Scalar,
    pub doc_values: Scalar,
    pub ignore_malformed: Scalar,
    pub index: Scalar,
    pub null_value: Scalar,
    pub store: Scalar,
}

impl Resolve for ScaledFloatFieldParams {
    type Output = Field;

    fn resolve(self) -> Result<Field, ResolveError> {
        const KIND: &str = FieldKind::ScaledFloat.as_str();

        if self.scaling_factor.is_unset() {
            return Err(ResolveError::ScalingFactorRequired { kind: KIND });
        }

        let mut field = ScaledFloatField::default();
        field
            .scaling_factor
            .set(self.scaling_factor)
            .map_err(ResolveError::invalid("scaling_factor", KIND))?;
        field
            .coerce
            .set(self.coerce)
            .map_err(ResolveError::invalid("coerce", KIND))?;
        field
            .doc_values
            .set(self.doc_values)
            .map_err(ResolveError::invalid("doc_values", KIND))?;
        field
            .ignore_malformed
            .set(self.ignore_malformed)
            .map_err(ResolveError::invalid("ignore_malformed", KIND))?;
        field
            .index
            .set(self.index)
            .map_err(ResolveError::invalid("index", KIND))?;
        field.null_value.set(self.null_value);
        field
            .store
            .set(self.store)
            .map_err(ResolveError::invalid("store", KIND))?;
        Ok(Field::ScaledFloat(field))
    }
}
