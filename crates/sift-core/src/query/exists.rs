use crate::{
    codec::{DecodeError, expect_object, optional_str},
    param::{BoostParam, NameParam, WireMap, decode_params, encode_params},
    query::{Clause, QueryKind},
    resolve::{Resolve, ResolveError},
    scalar::Scalar,
};
use serde_json::Value;

///
/// ExistsClause
///
/// Matches documents carrying any indexed value for a field. The field name
/// is a plain `"field"` member of the body, not a wrapper key.
///

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ExistsClause {
    field: String,
    boost: BoostParam,
    name: NameParam,
}

impl ExistsClause {
    #[must_use]
    pub fn field(&self) -> &str {
        &self.field
    }

    #[must_use]
    pub fn boost(&self) -> f64 {
        self.boost.get()
    }

    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.get()
    }

    pub(crate) fn encode_body(&self) -> WireMap {
        let mut body = WireMap::new();
        body.insert("field".to_string(), Value::String(self.field.clone()));
        encode_params!(&mut body, self.boost, self.name);
        body
    }

    pub(crate) fn decode_body(&mut self, body: &Value) -> Result<(), DecodeError> {
        let obj = expect_object(body, "exists clause")?;
        if let Some(field) = optional_str(obj, "field") {
            self.field = field.to_string();
        }
        decode_params!(obj, "exists", self.boost, self.name);
        Ok(())
    }
}

///
/// ExistsParams
///

#[derive(Clone, Debug, Default)]
pub struct ExistsParams {
    pub field: String,
    pub boost: Scalar,
    pub name: Scalar,
}

impl Resolve for ExistsParams {
    type Output = Clause;

    fn resolve(self) -> Result<Clause, ResolveError> {
        const KIND: &str = QueryKind::Exists.as_str();

        if self.field.is_empty() {
            return Err(ResolveError::FieldRequired { kind: KIND });
        }

        let mut clause = ExistsClause {
            field: self.field,
            ..ExistsClause::default()
        };
        clause
            .boost
            .set(self.boost)
            .map_err(ResolveError::invalid("boost", KIND))?;
        clause
            .name
            .set(self.name)
            .map_err(ResolveError::invalid("_name", KIND))?;

        Ok(Clause::Exists(clause))
    }
}
