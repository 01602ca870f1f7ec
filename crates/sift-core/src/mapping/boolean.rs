use crate::{
    codec::DecodeError,
    mapping::{Field, FieldKind},
    param::{
        DocValuesParam, IndexParam, NullValueParam, StoreParam, WireMap, decode_params,
        encode_params,
    },
    resolve::{Resolve, ResolveError},
    scalar::Scalar,
};

///
/// BooleanField
///

#[derive(Clone, Debug, Default, PartialEq)]
pub struct BooleanField {
    doc_values: DocValuesParam,
    index: IndexParam,
    null_value: NullValueParam,
    store: StoreParam,
}

impl BooleanField {
    #[must_use]
    pub const fn null_value(&self) -> &Scalar {
        self.null_value.get()
    }

    pub(crate) fn encode_body(&self, obj: &mut WireMap) {
        encode_params!(obj, self.doc_values, self.index, self.null_value, self.store);
    }

    pub(crate) fn decode_body(&mut self, obj: &WireMap, on: &str) -> Result<(), DecodeError> {
        decode_params!(
            obj,
            on,
            self.doc_values,
            self.index,
            self.null_value,
            self.store,
        );
        Ok(())
    }
}

///
/// BooleanFieldParams
///

#[derive(Clone, Debug, Default)]
pub struct BooleanFieldParams {
    pub doc_values: Scalar,
    pub index: Scalar,
    pub null_value: Scalar,
    pub store: Scalar,
}

impl Resolve for BooleanFieldParams {
    type Output = Field;

    fn resolve(self) -> Result<Field, ResolveError> {
        const KIND: &str = FieldKind::Boolean.as_str();

        let mut field = BooleanField::default();
        field
            .doc_values
            .set(self.doc_values)
            .map_err(ResolveError::invalid("doc_values", KIND))?;
        field
            .index
            .set(self.index)
            .map_err(ResolveError::invalid("index", KIND))?;
        field.null_value.set(self.null_value);
        field
            .store
            .set(self.store)
            .map_err(ResolveError::invalid("store", KIND))?;
        Ok(Field::Boolean(field))
    }
}
