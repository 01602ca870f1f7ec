use crate::{
    codec::{DecodeError, optional_str},
    mapping::{Field, FieldKind},
    param::WireMap,
    resolve::{Resolve, ResolveError},
};
use serde_json::Value;

///
/// AliasField
///
/// An alternate name for another field in the index. The target must be a
/// concrete field; an alias can have exactly one target.
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct AliasField {
    path: String,
}

impl AliasField {
    /// The full path of the target field.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn set_path(&mut self, v: impl Into<String>) {
        self.path = v.into();
    }

    pub(crate) fn encode_body(&self, obj: &mut WireMap) {
        obj.insert("path".to_string(), Value::String(self.path.clone()));
    }

    pub(crate) fn decode_body(&mut self, obj: &WireMap, _on: &str) -> Result<(), DecodeError> {
        if let Some(path) = optional_str(obj, "path") {
            self.path = path.to_string();
        }
        Ok(())
    }
}

///
/// AliasFieldParams
///

#[derive(Clone, Debug, Default)]
pub struct AliasFieldParams {
    /// (Required) The target field of the alias.
    pub path: String,
}

impl Resolve for AliasFieldParams {
    type Output = Field;

    fn resolve(self) -> Result<Field, ResolveError> {
        if self.path.is_empty() {
            return Err(ResolveError::PathRequired {
                kind: FieldKind::Alias.as_str(),
            });
        }
        let mut field = AliasField::default();
        field.set_path(self.path);
        Ok(Field::Alias(field))
    }
}
