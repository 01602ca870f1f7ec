use crate::{
    codec::DecodeError,
    mapping::{Field, FieldKind},
    param::{AnalyzerParam, IndexParam, StoreParam, WireMap, decode_params, encode_params},
    resolve::{Resolve, ResolveError},
    scalar::Scalar,
};

///
/// TextField
///
/// Full-text content, analyzed into tokens at index time.
///

#[derive(Clone, Debug, Default, PartialEq)]
pub struct TextField {
    analyzer: AnalyzerParam,
    index: IndexParam,
    store: StoreParam,
}

impl TextField {
    #[must_use]
    pub fn analyzer(&self) -> Option<&str> {
        self.analyzer.get()
    }

    #[must_use]
    pub fn index(&self) -> bool {
        self.index.get()
    }

    #[must_use]
    pub fn store(&self) -> bool {
        self.store.get()
    }

    pub(crate) fn encode_body(&self, obj: &mut WireMap) {
        encode_params!(obj, self.analyzer, self.index, self.store);
    }

    pub(crate) fn decode_body(&mut self, obj: &WireMap, on: &str) -> Result<(), DecodeError> {
        decode_params!(obj, on, self.analyzer, self.index, self.store);
        Ok(())
    }
}

///
/// TextFieldParams
///

#[derive(Clone, Debug, Default)]
pub struct TextFieldParams {
    pub analyzer: Scalar,
    pub index: Scalar,
    pub store: Scalar,
}

impl Resolve for TextFieldParams {
    type Output = Field;

    fn resolve(self) -> Result<Field, ResolveError> {
        const KIND: &str = FieldKind::Text.as_str();

        let mut field = TextField::default();
        field
            .analyzer
            .set(self.analyzer)
            .map_err(ResolveError::invalid("analyzer", KIND))?;
        field
            .index
            .set(self.index)
            .map_err(ResolveError::invalid("index", KIND))?;
        field
            .store
            .set(self.store)
            .map_err(ResolveError::invalid("store", KIND))?;
        Ok(Field::Text(field))
    }
}
