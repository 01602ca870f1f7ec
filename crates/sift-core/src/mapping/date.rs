use crate::{
    codec::DecodeError,
    mapping::{Field, FieldKind},
    param::{
        DocValuesParam, FormatParam, IgnoreMalformedParam, IndexParam, NullValueParam, StoreParam,
        WireMap, decode_params, encode_params,
    },
    resolve::{Resolve, ResolveError},
    scalar::Scalar,
};

///
/// DateField
///
/// A millisecond-resolution date field. Dates arrive as formatted text or
/// as epoch numbers; `format` declares the accepted patterns.
///

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DateField {
    doc_values: DocValuesParam,
    format: FormatParam,
    ignore_malformed: IgnoreMalformedParam,
    index: IndexParam,
    null_value: NullValueParam,
    store: StoreParam,
}

impl DateField {
    #[must_use]
    pub fn format(&self) -> Option<&str> {
        self.format.get()
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
            self.doc_values,
            self.format,
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
            self.doc_values,
            self.format,
            self.ignore_malformed,
            self.index,
            self.null_value,
            self.store,
        );
        Ok(())
    }
}

///
/// DateFieldParams
///

#[derive(Clone, Debug, Default)]
pub struct DateFieldParams {
    pub doc_values: Scalar,
    pub format: Scalar,
    pub ignore_malformed: Scalar,
    pub index: Scalar,
    pub null_value: Scalar,
    pub store: Scalar,
}

impl Resolve for DateFieldParams {
    type Output = Field;

    fn resolve(self) -> Result<Field, ResolveError> {
        const KIND: &str = FieldKind::Date.as_str();

        let mut field = DateField::default();
        field
            .doc_values
            .set(self.doc_values)
            .map_err(ResolveError::invalid("doc_values", KIND))?;
        field
            .format
            .set(self.format)
            .map_err(ResolveError::invalid("format", KIND))?;
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
        Ok(Field::Date(field))
    }
}
