use crate::{
    codec::{DecodeError, expect_object},
    param::{BoostParam, NameParam, WireMap, decode_params, encode_params},
    query::{Clause, QueryKind},
    resolve::{Resolve, ResolveError},
    scalar::Scalar,
};
use serde_json::Value;

///
/// MatchAllClause
///
/// Matches every document with a score of `boost`. Has no required
/// parameters; the canonical empty body is `{"match_all": {}}`.
///

#[derive(Clone, Debug, Default, PartialEq)]
pub struct MatchAllClause {
    boost: BoostParam,
    name: NameParam,
}

impl MatchAllClause {
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
        encode_params!(&mut body, self.boost, self.name);
        body
    }

    pub(crate) fn decode_body(&mut self, body: &Value) -> Result<(), DecodeError> {
        let obj = expect_object(body, "match_all clause")?;
        decode_params!(obj, "match_all", self.boost, self.name);
        Ok(())
    }
}

///
/// MatchAllParams
///

#[derive(Clone, Debug, Default)]
pub struct MatchAllParams {
    pub boost: Scalar,
    pub name: Scalar,
}

impl Resolve for MatchAllParams {
    type Output = Clause;

    fn resolve(self) -> Result<Clause, ResolveError> {
        const KIND: &str = QueryKind::MatchAll.as_str();

        let mut clause = MatchAllClause::default();
        clause
            .boost
            .set(self.boost)
            .map_err(ResolveError::invalid("boost", KIND))?;
        clause
            .name
            .set(self.name)
            .map_err(ResolveError::invalid("_name", KIND))?;

        Ok(Clause::MatchAll(clause))
    }
}
