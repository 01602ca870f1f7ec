use crate::{
    codec::{DecodeError, expect_object, optional_str},
    ingest::{Processor, ProcessorKind},
    param::{
        DescriptionParam, IgnoreFailureParam, IgnoreMissingParam, TargetFieldParam, WireMap,
        decode_params, encode_params,
    },
    resolve::{Resolve, ResolveError},
    scalar::Scalar,
};
use serde_json::Value;

///
/// LowercaseProcessor
///
/// Lowercases a text field in place, or into `target_field` when one is
/// given.
///

#[derive(Clone, Debug, Default, PartialEq)]
pub struct LowercaseProcessor {
    field: String,
    description: DescriptionParam,
    ignore_failure: IgnoreFailureParam,
    ignore_missing: IgnoreMissingParam,
    target_field: TargetFieldParam,
}

impl LowercaseProcessor {
    #[must_use]
    pub fn field(&self) -> &str {
        &self.field
    }

    #[must_use]
    pub fn target_field(&self) -> Option<&str> {
        self.target_field.get()
    }

    pub(crate) fn encode_body(&self) -> WireMap {
        let mut body = WireMap::new();
        body.insert("field".to_string(), Value::String(self.field.clone()));
        encode_params!(
            &mut body,
            self.description,
            self.ignore_failure,
            self.ignore_missing,
            self.target_field,
        );
        body
    }

    pub(crate) fn decode_body(&mut self, body: &Value) -> Result<(), DecodeError> {
        let obj = expect_object(body, "lowercase processor")?;
        if let Some(field) = optional_str(obj, "field") {
            self.field = field.to_string();
        }
        decode_params!(
            obj,
            "lowercase",
            self.description,
            self.ignore_failure,
            self.ignore_missing,
            self.target_field,
        );
        Ok(())
    }
}

///
/// LowercaseParams
///

#[derive(Clone, Debug, Default)]
pub struct LowercaseParams {
    pub field: String,
    pub description: Scalar,
    pub ignore_failure: Scalar,
    pub ignore_missing: Scalar,
    pub target_field: Scalar,
}

impl Resolve for LowercaseParams {
    type Output = Processor;

    fn resolve(self) -> Result<Processor, ResolveError> {
        const KIND: &str = ProcessorKind::Lowercase.as_str();

        if self.field.is_empty() {
            return Err(ResolveError::FieldRequired { kind: KIND });
        }

        let mut processor = LowercaseProcessor {
            field: self.field,
            ..LowercaseProcessor::default()
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
        processor
            .target_field
            .set(self.target_field)
            .map_err(ResolveError::invalid("target_field", KIND))?;

        Ok(Processor::Lowercase(processor))
    }
}
