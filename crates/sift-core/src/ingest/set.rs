use crate::{
    codec::{DecodeError, expect_object, optional_str},
    ingest::{Processor, ProcessorKind},
    param::{
        DescriptionParam, IgnoreFailureParam, OverrideParam, WireMap, decode_params, encode_params,
    },
    resolve::{Resolve, ResolveError},
    scalar::Scalar,
};
use serde_json::Value;

///
/// SetProcessor
///
/// Assigns a value to a field, creating it when absent. With `override`
/// false an existing non-null value is left untouched.
///

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SetProcessor {
    field: String,
    value: Scalar,
    description: DescriptionParam,
    ignore_failure: IgnoreFailureParam,
    overwrite: OverrideParam,
}

impl SetProcessor {
    #[must_use]
    pub fn field(&self) -> &str {
        &self.field
    }

    #[must_use]
    pub const fn value(&self) -> &Scalar {
        &self.value
    }

    #[must_use]
    pub fn overwrite(&self) -> bool {
        self.overwrite.get()
    }

    pub(crate) fn encode_body(&self) -> WireMap {
        let mut body = WireMap::new();
        body.insert("field".to_string(), Value::String(self.field.clone()));
        body.insert("value".to_string(), self.value.to_wire());
        encode_params!(&mut body, self.description, self.ignore_failure, self.overwrite);
        body
    }

    pub(crate) fn decode_body(&mut self, body: &Value) -> Result<(), DecodeError> {
        let obj = expect_object(body, "set processor")?;
        if let Some(field) = optional_str(obj, "field") {
            self.field = field.to_string();
        }
        if let Some(v) = obj.get("value") {
            self.value =
                Scalar::from_wire(v, "value").map_err(DecodeError::invalid("value", "set"))?;
        }
        decode_params!(obj, "set", self.description, self.ignore_failure, self.overwrite);
        Ok(())
    }
}

///
/// SetParams
///

#[derive(Clone, Debug, Default)]
pub struct SetParams {
    pub field: String,
    pub value: Scalar,
    pub description: Scalar,
    pub ignore_failure: Scalar,
    pub overwrite: Scalar,
}

impl Resolve for SetParams {
    type Output = Processor;

    fn resolve(self) -> Result<Processor, ResolveError> {
        const KIND: &str = ProcessorKind::Set.as_str();

        if self.field.is_empty() {
            return Err(ResolveError::FieldRequired { kind: KIND });
        }
        if self.value.is_unset() {
            return Err(ResolveError::ValueRequired { kind: KIND });
        }

        let mut processor = SetProcessor {
            field: self.field,
            value: self.value,
            ..SetProcessor::default()
        };
        processor
            .description
            .set(self.description)
            .map_err(ResolveError::invalid("description", KIND))?;
        processor
            .ignore_failure
            .set(self.ignore_failure)
            .map_err(ResolveError::invalid("ignore_failure", KIND))?;
        processor
            .overwrite
            .set(self.overwrite)
            .map_err(ResolveError::invalid("override", KIND))?;

        Ok(Processor::Set(processor))
    }
}
