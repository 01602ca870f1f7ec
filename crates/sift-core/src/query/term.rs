use crate::{
    codec::{DecodeError, expect_object, single_key},
    param::{
        BoostParam, CaseInsensitiveParam, NameParam, WireMap, decode_params, encode_params,
    },
    query::{Clause, QueryKind},
    resolve::{Resolve, ResolveError},
    scalar::Scalar,
};
use serde_json::Value;

///
/// TermClause
///
/// Exact-value match against one field. The value is not analyzed, so this
/// is the clause for keyword, numeric, and boolean fields. Like `match`,
/// the body keys the field name and a bare scalar body is shorthand for
/// `{"value": <scalar>}`.
///

#[derive(Clone, Debug, Default, PartialEq)]
pub struct TermClause {
    field: String,
    value: Scalar,
    boost: BoostParam,
    case_insensitive: CaseInsensitiveParam,
    name: NameParam,
}

impl TermClause {
    #[must_use]
    pub fn field(&self) -> &str {
        &self.field
    }

    #[must_use]
    pub const fn value(&self) -> &Scalar {
        &self.value
    }

    #[must_use]
    pub fn boost(&self) -> f64 {
        self.boost.get()
    }

    #[must_use]
    pub fn case_insensitive(&self) -> bool {
        self.case_insensitive.get()
    }

    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.get()
    }

    pub(crate) fn encode_body(&self) -> WireMap {
        let mut inner = WireMap::new();
        inner.insert("value".to_string(), self.value.to_wire());
        encode_params!(&mut inner, self.boost, self.case_insensitive, self.name);

        let mut body = WireMap::new();
        body.insert(self.field.clone(), Value::Object(inner));
        body
    }

    pub(crate) fn decode_body(&mut self, body: &Value) -> Result<(), DecodeError> {
        let obj = expect_object(body, "term clause")?;
        let (field, entry) = single_key(obj, "term clause")?;
        self.field = field.to_string();

        match entry {
            Value::Object(inner) => {
                if let Some(v) = inner.get("value") {
                    self.value = Scalar::from_wire(v, "value")
                        .map_err(DecodeError::invalid("value", field))?;
                }
                decode_params!(inner, field, self.boost, self.case_insensitive, self.name);
            }
            shorthand => {
                self.value = Scalar::from_wire(shorthand, "value")
                    .map_err(DecodeError::invalid("value", field))?;
            }
        }

        Ok(())
    }
}

///
/// TermParams
///

#[derive(Clone, Debug, Default)]
pub struct TermParams {
    pub field: String,
    pub value: Scalar,
    pub boost: Scalar,
    pub case_insensitive: Scalar,
    pub name: Scalar,
}

impl Resolve for TermParams {
    type Output = Clause;

    fn resolve(self) -> Result<Clause, ResolveError> {
        const KIND: &str = QueryKind::Term.as_str();

        if self.field.is_empty() {
            return Err(ResolveError::FieldRequired { kind: KIND });
        }
        if self.value.is_unset() {
            return Err(ResolveError::ValueRequired { kind: KIND });
        }

        let mut clause = TermClause {
            field: self.field,
            value: self.value,
            ..TermClause::default()
        };
        clause
            .boost
            .set(self.boost)
            .map_err(ResolveError::invalid("boost", KIND))?;
        clause
            .case_insensitive
            .set(self.case_insensitive)
            .map_err(ResolveError::invalid("case_insensitive", KIND))?;
        clause
            .name
            .set(self.name)
            .map_err(ResolveError::invalid("_name", KIND))?;

        Ok(Clause::Term(clause))
    }
}
