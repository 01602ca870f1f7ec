use crate::{
    codec::{DecodeError, expect_object},
    param::{
        BoostParam, MinimumShouldMatchParam, NameParam, WireMap, decode_params, encode_params,
    },
    query::{Clause, Clauses, QueryKind},
    resolve::{Resolve, ResolveError},
    scalar::Scalar,
};
use serde_json::Value;

///
/// BoolClause
///
/// Boolean combination of sub-clauses across four occurrence slots. `must`
/// and `filter` clauses must match (filter without scoring); `must_not`
/// clauses exclude; `should` clauses are optional unless
/// `minimum_should_match` raises the bar.
///

#[derive(Clone, Debug, Default, PartialEq)]
pub struct BoolClause {
    must: Clauses,
    filter: Clauses,
    should: Clauses,
    must_not: Clauses,
    boost: BoostParam,
    minimum_should_match: MinimumShouldMatchParam,
    name: NameParam,
}

impl BoolClause {
    #[must_use]
    pub const fn must(&self) -> &Clauses {
        &self.must
    }

    #[must_use]
    pub const fn filter(&self) -> &Clauses {
        &self.filter
    }

    #[must_use]
    pub const fn should(&self) -> &Clauses {
        &self.should
    }

    #[must_use]
    pub const fn must_not(&self) -> &Clauses {
        &self.must_not
    }

    pub fn must_mut(&mut self) -> &mut Clauses {
        &mut self.must
    }

    pub fn filter_mut(&mut self) -> &mut Clauses {
        &mut self.filter
    }

    pub fn should_mut(&mut self) -> &mut Clauses {
        &mut self.should
    }

    pub fn must_not_mut(&mut self) -> &mut Clauses {
        &mut self.must_not
    }

    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.get()
    }

    pub(crate) fn encode_body(&self) -> WireMap {
        let mut body = WireMap::new();
        for (slot, clauses) in [
            ("must", &self.must),
            ("filter", &self.filter),
            ("should", &self.should),
            ("must_not", &self.must_not),
        ] {
            if !clauses.is_empty() {
                let entries = clauses.iter().map(Clause::to_value).collect();
                body.insert(slot.to_string(), Value::Array(entries));
            }
        }
        encode_params!(&mut body, self.boost, self.minimum_should_match, self.name);
        body
    }

    pub(crate) fn decode_body(&mut self, body: &Value) -> Result<(), DecodeError> {
        let obj = expect_object(body, "bool clause")?;
        for (slot, clauses) in [
            ("must", &mut self.must),
            ("filter", &mut self.filter),
            ("should", &mut self.should),
            ("must_not", &mut self.must_not),
        ] {
            if let Some(entry) = obj.get(slot) {
                *clauses = Clauses::from_value(entry)?;
            }
        }
        decode_params!(
            obj,
            "bool",
            self.boost,
            self.minimum_should_match,
            self.name,
        );
        Ok(())
    }
}

///
/// BoolParams
///

#[derive(Clone, Debug, Default)]
pub struct BoolParams {
    pub must: Clauses,
    pub filter: Clauses,
    pub should: Clauses,
    pub must_not: Clauses,
    pub boost: Scalar,
    pub minimum_should_match: Scalar,
    pub name: Scalar,
}

impl Resolve for BoolParams {
    type Output = Clause;

    fn resolve(self) -> Result<Clause, ResolveError> {
        const KIND: &str = QueryKind::Bool.as_str();

        let mut clause = BoolClause {
            must: self.must,
            filter: self.filter,
            should: self.should,
            must_not: self.must_not,
            ..BoolClause::default()
        };
        clause
            .boost
            .set(self.boost)
            .map_err(ResolveError::invalid("boost", KIND))?;
        clause
            .minimum_should_match
            .set(self.minimum_should_match)
            .map_err(ResolveError::invalid("minimum_should_match", KIND))?;
        clause
            .name
            .set(self.name)
            .map_err(ResolveError::invalid("_name", KIND))?;

        Ok(Clause::Bool(clause))
    }
}
