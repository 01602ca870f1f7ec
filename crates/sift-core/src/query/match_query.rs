use crate::{
    codec::{DecodeError, expect_object, single_key},
    param::{
        AnalyzerParam, AutoGenerateSynonymsPhraseQueryParam, BoostParam, FuzzinessParam,
        FuzzyRewriteParam, FuzzyTranspositionsParam, LenientParam, MaxExpansionsParam,
        MinimumShouldMatchParam, NameParam, Operator, OperatorParam, PrefixLengthParam, WireMap,
        ZeroTerms, ZeroTermsQueryParam, decode_params, encode_params,
    },
    query::{Clause, QueryKind},
    resolve::{Resolve, ResolveError},
    scalar::Scalar,
};
use serde_json::Value;

///
/// MatchClause
///
/// Full-text match against one field. The wire body keys the analyzed field
/// name: `{"message": {"query": "brown cow", ...}}`. A bare scalar body is
/// the documented shorthand for `{"query": <scalar>}` and is accepted on
/// decode; encode always produces the long form.
///

#[derive(Clone, Debug, Default, PartialEq)]
pub struct MatchClause {
    field: String,
    query: Scalar,
    analyzer: AnalyzerParam,
    auto_generate_synonyms_phrase_query: AutoGenerateSynonymsPhraseQueryParam,
    boost: BoostParam,
    fuzziness: FuzzinessParam,
    fuzzy_rewrite: FuzzyRewriteParam,
    fuzzy_transpositions: FuzzyTranspositionsParam,
    lenient: LenientParam,
    max_expansions: MaxExpansionsParam,
    minimum_should_match: MinimumShouldMatchParam,
    name: NameParam,
    operator: OperatorParam,
    prefix_length: PrefixLengthParam,
    zero_terms_query: ZeroTermsQueryParam,
}

impl MatchClause {
    #[must_use]
    pub fn field(&self) -> &str {
        &self.field
    }

    #[must_use]
    pub const fn query(&self) -> &Scalar {
        &self.query
    }

    #[must_use]
    pub fn boost(&self) -> f64 {
        self.boost.get()
    }

    #[must_use]
    pub fn operator(&self) -> Operator {
        self.operator.get()
    }

    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.get()
    }

    pub(crate) fn encode_body(&self) -> WireMap {
        let mut inner = WireMap::new();
        inner.insert("query".to_string(), self.query.to_wire());
        encode_params!(
            &mut inner,
            self.analyzer,
            self.auto_generate_synonyms_phrase_query,
            self.boost,
            self.fuzziness,
            self.fuzzy_rewrite,
            self.fuzzy_transpositions,
            self.lenient,
            self.max_expansions,
            self.minimum_should_match,
            self.name,
            self.operator,
            self.prefix_length,
            self.zero_terms_query,
        );

        let mut body = WireMap::new();
        body.insert(self.field.clone(), Value::Object(inner));
        body
    }

    pub(crate) fn decode_body(&mut self, body: &Value) -> Result<(), DecodeError> {
        let obj = expect_object(body, "match clause")?;
        let (field, entry) = single_key(obj, "match clause")?;
        self.field = field.to_string();

        match entry {
            Value::Object(inner) => {
                if let Some(q) = inner.get("query") {
                    self.query = Scalar::from_wire(q, "query")
                        .map_err(DecodeError::invalid("query", field))?;
                }
                decode_params!(
                    inner,
                    field,
                    self.analyzer,
                    self.auto_generate_synonyms_phrase_query,
                    self.boost,
                    self.fuzziness,
                    self.fuzzy_rewrite,
                    self.fuzzy_transpositions,
                    self.lenient,
                    self.max_expansions,
                    self.minimum_should_match,
                    self.name,
                    self.operator,
                    self.prefix_length,
                    self.zero_terms_query,
                );
            }
            shorthand => {
                self.query = Scalar::from_wire(shorthand, "query")
                    .map_err(DecodeError::invalid("query", field))?;
            }
        }

        Ok(())
    }
}

///
/// MatchParams
///

#[derive(Clone, Debug, Default)]
pub struct MatchParams {
    pub field: String,
    pub query: Scalar,
    pub analyzer: Scalar,
    pub auto_generate_synonyms_phrase_query: Scalar,
    pub boost: Scalar,
    pub fuzziness: Scalar,
    pub fuzzy_rewrite: Scalar,
    pub fuzzy_transpositions: Scalar,
    pub lenient: Scalar,
    pub max_expansions: Scalar,
    pub minimum_should_match: Scalar,
    pub name: Scalar,
    pub operator: Option<Operator>,
    pub prefix_length: Scalar,
    pub zero_terms_query: Option<ZeroTerms>,
}

impl Resolve for MatchParams {
    type Output = Clause;

    fn resolve(self) -> Result<Clause, ResolveError> {
        const KIND: &str = QueryKind::Match.as_str();

        if self.field.is_empty() {
            return Err(ResolveError::FieldRequired { kind: KIND });
        }
        if self.query.is_unset() {
            return Err(ResolveError::QueryRequired { kind: KIND });
        }

        let mut clause = MatchClause {
            field: self.field,
            query: self.query,
            ..MatchClause::default()
        };
        clause
            .analyzer
            .set(self.analyzer)
            .map_err(ResolveError::invalid("analyzer", KIND))?;
        clause
            .auto_generate_synonyms_phrase_query
            .set(self.auto_generate_synonyms_phrase_query)
            .map_err(ResolveError::invalid(
                "auto_generate_synonyms_phrase_query",
                KIND,
            ))?;
        clause
            .boost
            .set(self.boost)
            .map_err(ResolveError::invalid("boost", KIND))?;
        clause
            .fuzziness
            .set(self.fuzziness)
            .map_err(ResolveError::invalid("fuzziness", KIND))?;
        clause
            .fuzzy_rewrite
            .set(self.fuzzy_rewrite)
            .map_err(ResolveError::invalid("fuzzy_rewrite", KIND))?;
        clause
            .fuzzy_transpositions
            .set(self.fuzzy_transpositions)
            .map_err(ResolveError::invalid("fuzzy_transpositions", KIND))?;
        clause
            .lenient
            .set(self.lenient)
            .map_err(ResolveError::invalid("lenient", KIND))?;
        clause
            .max_expansions
            .set(self.max_expansions)
            .map_err(ResolveError::invalid("max_expansions", KIND))?;
        clause
            .minimum_should_match
            .set(self.minimum_should_match)
            .map_err(ResolveError::invalid("minimum_should_match", KIND))?;
        clause
            .name
            .set(self.name)
            .map_err(ResolveError::invalid("_name", KIND))?;
        if let Some(op) = self.operator {
            clause.operator.set(op);
        }
        clause
            .prefix_length
            .set(self.prefix_length)
            .map_err(ResolveError::invalid("prefix_length", KIND))?;
        if let Some(zt) = self.zero_terms_query {
            clause.zero_terms_query.set(zt);
        }

        Ok(Clause::Match(clause))
    }
}
