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
/// RenameProcessor
///
/// Moves a field to a new name. Fails the document when the target already
/// exists; both the source and target names are required.
///

#[derive(Clone, Debug, Default, PartialEq)]
pub struct RenameProcessor {
    field: String,
    target_field: String,
    description: DescriptionParam,
    ignore_failure: IgnoreFailureParam,
    ignore_missing: IgnoreMissingParam,
}

impl RenameProcessor {
    #[must_use]
    pub fn field(&self) -> &str {
        &self.field
    }

    #[must_use]
    pub fn target_field(&self) -> &str {
        &self.target_field
    }

    pub(crate) fn encode_body(&self) -> WireMap {
        let mut body = WireMap::new();
        body.insert("field".to_string(), Value::String(self.field.clone()));
        body.insert(
            "target_field".to_string(),
            Value::String(self.target_field.clone()),
        );
        encode_params!(
            &mut body,
            self.description,
            self.ignore_failure,
            self.ignore_missing,
        );
        body
    }

    pub(crate) fn decode_body(&mut self, body: &Value) -> Result<(), DecodeError> {
        let obj = expect_object(body, "rename processor")?;
        if let Some(field) = optional_str(obj, "field") {
            self.field = field.to_string();
        }
        if let Some(target) = optional_str(obj, "target_field") {
            self.target_field = target.to_string();
        }
        decode_params!(
            obj,
            "rename",
            self.description,
            self.ignore_failure,
            self.ignore_missing,
        );
        Ok(())
    }
}

///
/// RenameParams
///

#[derive(Clone, Debug, Default)]
pub struct RenameParams {
    pub field: String,
    pub target_field: String,
    pub description: Scalar,
    pub ignore_failure: Scalar,
    pub ignore_missing: Scalar,
}

impl Resolve for RenameParams {
    type Output = Processor;

    fn resolve(self) -> Result<Processor, ResolveError> {
        const KIND: &str = ProcessorKind::Rename.as_str();

        if self.field.is_empty() {
            return Err(ResolveError::FieldRequired { kind: KIND });
        }
        if self.target_field.is_empty() {
            return Err(ResolveError::TargetFieldRequired { kind: KIND });
        }

        let mut processor = RenameProcessor {
            field: self.field,
            target_field: self.target_field,
            ..RenameProcessor::default()
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

        Ok(Processor::Rename(processor))
    }
}
