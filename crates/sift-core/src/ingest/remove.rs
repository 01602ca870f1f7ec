use crate::{
    codec::{DecodeError, expect_object, optional_str},
    ingest::{Processor, ProcessorKind},
    param::{
        DescriptionParam, IgnoreFailureParam, IgnoreMissingParam, WireMap, decode_params,
        encode_params,
    },
    resolve::{Resolve, ResolveError},
    scalar::Scalar,
};
use serde_json::Value;

///
/// RemoveProcessor
///
/// Drops a field from the document. Fails the document when the field is
/// absent unless `ignore_missing` is set.
///

#[derive(Clone, Debug, Default, PartialEq)]
pub struct RemoveProcessor {
    field: String,
    description: DescriptionParam,
    ignore_failure: IgnoreFailureParam,
    ignore_missing: IgnoreMissingParam,
}

impl RemoveProcessor {
    #[must_use]
    pub fn field(&self) -> &str {
        &self.field
    }

    #[must_use]
    pub fn ignore_missing(&self) -> bool {
        self.ignore_missing.get()
    }

    pub(crate) fn encode_body(&self) -> WireMap {
        let mut body = WireMap::new();
        body.insert("field".to_string(), Value::String(self.field.clone()));
        encode_params!(
            &mut body,
            self.description,
            self.ignore_failure,
            self.ignore_missing,
        );
        body
    }

    pub(crate) fn decode_body(&mut self, body: &Value) -> Result<(), DecodeError> {
        let obj = expect_object(body, "remove processor")?;
        if let Some(field) = optional_str(obj, "field") {
            self.field = field.to_string();
        }
        decode_params!(
            obj,
            "remove",
            self.description,
            self.ignore_failure,
            self.ignore_missing,
        );
        Ok(())
    }
}

///
/// RemoveParams
///

#[derive(Clone, Debug, Default)]
pub struct RemoveParams {
    pub field: String,
    pub description: Scalar,
    pub ignore_failure: Scalar,
    pub ignore_missing: Scalar,
}

impl Resolve for RemoveParams {
    type Output = Processor;

    fn resolve(self) -> Result<Processor, ResolveError> {
        const KIND: &str = ProcessorKind::Remove.as_str();

        if self.field.is_empty() {
            return Err(ResolveError::FieldRequired { kind: KIND });
        }

        let mut processor = RemoveProcessor {
            field: self.field,
            ..RemoveProcessor::default()
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
            .ignore_missing
            .set(self.ignore_missing)
            .map_err(ResolveError::invalid("ignore_missing", KIND))?;

        Ok(Processor::Remove(processor))
    }
}
