use crate::{
    codec::DecodeError,
    mapping::{Field, FieldKind},
    param::{
        DocValuesParam, IgnoreAboveParam, IndexParam, NormalizerParam, NullValueParam, StoreParam,
        WireMap, decode_params, encode_params,
    },
    resolve::{Resolve, ResolveError},
    scalar::Scalar,
};

///
/// KeywordField
///
/// Structured content indexed as-is, for filtering, sorting, and
/// aggregations.
///

#[derive(Clone, Debug, Default, PartialEq)]
pub struct KeywordField {
    doc_values: DocValuesParam,
    ignore_above: IgnoreAboveParam,
    index: IndexParam,
    normalizer: NormalizerParam,
    null_value: NullValueParam,
    store: StoreParam,
}

impl KeywordField {
    #[must_use]
    pub const fn ignore_above(&self) -> Option<f64> {
        self.ignore_above.get()
    }

    /// Normalizer applied prior to indexing; guarantees a single token.
    #[must_use]
    pub fn normalizer(&self) -> Option<&str> {
        self.normalizer.get()
    }

    #[must_use]
    pub const fn null_value(&self) -> &Scalar {
        self.null_value.get()
    }

    pub(crate) fn encode_body(&self, obj: &mut WireMap) {
        encode_params!(
            obj,
            self.doc_values,
            self.ignore_above,
            self.index,
            self.normalizer,
            self.null_value,
            self.store,
        );
    }

    pub(crate) fn decode_body(&mut self, obj: &WireMap, on: &str) -> Result<(), DecodeError> {
        decode_params!(
            obj,
            on,
            self.doc_values,
            self.ignore_above,
            self.index,
            self.normalizer,
            self.null_value,
            self.store,
        );
        Ok(())
    }
}

///
/// KeywordFieldParams
///

#[derive(Clone, Debug, Default)]
pub struct KeywordFieldParams {
    pub doc_values: Scalar,
    pub ignore_above: Scalar,
    pub index: Scalar,
    pub normalizer: Scalar,
    pub null_value: Scalar,
    pub store: Scalar,
}

impl Resolve for KeywordFieldParams {
    type Output = Field;

    fn resolve(self) -> Result<Field, ResolveError> {
        const KIND: &str = FieldKind::Keyword.as_str();

        let mut field = KeywordField::default();
        field
            .doc_values
            .set(self.doc_values)
            .map_err(ResolveError::invalid("doc_values", KIND))?;
        field
            .ignore_above
            .set(self.ignore_above)
            .map_err(ResolveError::invalid("ignore_above", KIND))?;
        field
            .index
            .set(self.index)
            .map_err(ResolveError::invalid("index", KIND))?;
        field
            .normalizer
            .set(self.normalizer)
            .map_err(ResolveError::invalid("normalizer", KIND))?;
        field.null_value.set(self.null_value);
        field
            .store
            .set(self.store)
            .map_err(ResolveError::invalid("store", KIND))?;
        Ok(Field::Keyword(field))
    }
}
