use crate::{
    codec::{DecodeError, expect_object, json_type, optional_str},
    param::{
        AllowLeadingWildcardParam, AnalyzeWildcardParam, AnalyzerParam,
        AutoGenerateSynonymsPhraseQueryParam, BoostParam, DefaultFieldParam,
        DefaultOperatorParam, EnablePositionIncrementsParam, FuzzinessParam,
        FuzzyMaxExpansionsParam, FuzzyRewriteParam, FuzzyTranspositionsParam, LenientParam,
        MaxDeterminizedStatesParam, MinimumShouldMatchParam, NameParam, Operator, PhraseSlopParam,
        QuoteAnalyzerParam, QuoteFieldSuffixParam, RewriteParam, TieBreakerParam, TimeZoneParam,
        WireMap, decode_params, encode_params,
    },
    query::{Clause, QueryKind},
    resolve::{Resolve, ResolveError},
    scalar::Scalar,
};
use serde_json::Value;

///
/// QueryStringClause
///
/// Parses a mini-language query string (`"city:portland AND state:OR"`) with
/// operators, wildcards, and field prefixes. The body is flat: the query
/// text and every option are direct members.
///

#[derive(Clone, Debug, Default, PartialEq)]
pub struct QueryStringClause {
    query: String,
    default_field: DefaultFieldParam,
    fields: Vec<String>,
    allow_leading_wildcard: AllowLeadingWildcardParam,
    analyze_wildcard: AnalyzeWildcardParam,
    analyzer: AnalyzerParam,
    auto_generate_synonyms_phrase_query: AutoGenerateSynonymsPhraseQueryParam,
    boost: BoostParam,
    default_operator: DefaultOperatorParam,
    enable_position_increments: EnablePositionIncrementsParam,
    fuzziness: FuzzinessParam,
    fuzzy_max_expansions: FuzzyMaxExpansionsParam,
    fuzzy_rewrite: FuzzyRewriteParam,
    fuzzy_transpositions: FuzzyTranspositionsParam,
    lenient: LenientParam,
    max_determinized_states: MaxDeterminizedStatesParam,
    minimum_should_match: MinimumShouldMatchParam,
    name: NameParam,
    phrase_slop: PhraseSlopParam,
    quote_analyzer: QuoteAnalyzerParam,
    quote_field_suffix: QuoteFieldSuffixParam,
    rewrite: RewriteParam,
    tie_breaker: TieBreakerParam,
    time_zone: TimeZoneParam,
}

impl QueryStringClause {
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    #[must_use]
    pub fn default_field(&self) -> Option<&str> {
        self.default_field.get()
    }

    #[must_use]
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    #[must_use]
    pub fn default_operator(&self) -> Operator {
        self.default_operator.get()
    }

    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.get()
    }

    pub(crate) fn encode_body(&self) -> WireMap {
        let mut body = WireMap::new();
        body.insert("query".to_string(), Value::String(self.query.clone()));
        if !self.fields.is_empty() {
            let fields = self.fields.iter().cloned().map(Value::String).collect();
            body.insert("fields".to_string(), Value::Array(fields));
        }
        encode_params!(
            &mut body,
            self.allow_leading_wildcard,
            self.analyze_wildcard,
            self.analyzer,
            self.auto_generate_synonyms_phrase_query,
            self.boost,
            self.default_field,
            self.default_operator,
            self.enable_position_increments,
            self.fuzziness,
            self.fuzzy_max_expansions,
            self.fuzzy_rewrite,
            self.fuzzy_transpositions,
            self.lenient,
            self.max_determinized_states,
            self.minimum_should_match,
            self.name,
            self.phrase_slop,
            self.quote_analyzer,
            self.quote_field_suffix,
            self.rewrite,
            self.tie_breaker,
            self.time_zone,
        );
        body
    }

    pub(crate) fn decode_body(&mut self, body: &Value) -> Result<(), DecodeError> {
        const KIND: &str = QueryKind::QueryString.as_str();

        let obj = expect_object(body, "query_string clause")?;
        if let Some(query) = optional_str(obj, "query") {
            self.query = query.to_string();
        }
        if let Some(entry) = obj.get("fields") {
            let entries = entry.as_array().ok_or_else(|| DecodeError::ExpectedArray {
                context: "query_string fields".to_string(),
                got: json_type(entry),
            })?;
            self.fields = entries
                .iter()
                .map(|v| {
                    v.as_str().map(str::to_string).ok_or_else(|| {
                        DecodeError::ExpectedArray {
                            context: "query_string fields".to_string(),
                            got: json_type(v),
                        }
                    })
                })
                .collect::<Result<_, _>>()?;
        }
        decode_params!(
            obj,
            KIND,
            self.allow_leading_wildcard,
            self.analyze_wildcard,
            self.analyzer,
            self.auto_generate_synonyms_phrase_query,
            self.boost,
            self.default_field,
            self.default_operator,
            self.enable_position_increments,
            self.fuzziness,
            self.fuzzy_max_expansions,
            self.fuzzy_rewrite,
            self.fuzzy_transpositions,
            self.lenient,
            self.max_determinized_states,
            self.minimum_should_match,
            self.name,
            self.phrase_slop,
            self.quote_analyzer,
            self.quote_field_suffix,
            self.rewrite,
            self.tie_breaker,
            self.time_zone,
        );
        Ok(())
    }
}

///
/// QueryStringParams
///

#[derive(Clone, Debug, Default)]
pub struct QueryStringParams {
    pub query: String,
    pub default_field: Scalar,
    pub fields: Vec<String>,
    pub allow_leading_wildcard: Scalar,
    pub analyze_wildcard: Scalar,
    pub analyzer: Scalar,
    pub auto_generate_synonyms_phrase_query: Scalar,
    pub boost: Scalar,
    pub default_operator: Option<Operator>,
    pub enable_position_increments: Scalar,
    pub fuzziness: Scalar,
    pub fuzzy_max_expansions: Scalar,
    pub fuzzy_rewrite: Scalar,
    pub fuzzy_transpositions: Scalar,
    pub lenient: Scalar,
    pub max_determinized_states: Scalar,
    pub minimum_should_match: Scalar,
    pub name: Scalar,
    pub phrase_slop: Scalar,
    pub quote_analyzer: Scalar,
    pub quote_field_suffix: Scalar,
    pub rewrite: Scalar,
    pub tie_breaker: Scalar,
    pub time_zone: Scalar,
}

impl Resolve for QueryStringParams {
    type Output = Clause;

    fn resolve(self) -> Result<Clause, ResolveError> {
        const KIND: &str = QueryKind::QueryString.as_str();

        if self.query.is_empty() {
            return Err(ResolveError::QueryRequired { kind: KIND });
        }

        let mut clause = QueryStringClause {
            query: self.query,
            fields: self.fields,
            ..QueryStringClause::default()
        };
        clause
            .allow_leading_wildcard
            .set(self.allow_leading_wildcard)
            .map_err(ResolveError::invalid("allow_leading_wildcard", KIND))?;
        clause
            .analyze_wildcard
            .set(self.analyze_wildcard)
            .map_err(ResolveError::invalid("analyze_wildcard", KIND))?;
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
            .default_field
            .set(self.default_field)
            .map_err(ResolveError::invalid("default_field", KIND))?;
        if let Some(op) = self.default_operator {
            clause.default_operator.set(op);
        }
        clause
            .enable_position_increments
            .set(self.enable_position_increments)
            .map_err(ResolveError::invalid("enable_position_increments", KIND))?;
        clause
            .fuzziness
            .set(self.fuzziness)
            .map_err(ResolveError::invalid("fuzziness", KIND))?;
        clause
            .fuzzy_max_expansions
            .set(self.fuzzy_max_expansions)
            .map_err(ResolveError::invalid("fuzzy_max_expansions", KIND))?;
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
            .max_determinized_states
            .set(self.max_determinized_states)
            .map_err(ResolveError::invalid("max_determinized_states", KIND))?;
        clause
            .minimum_should_match
            .set(self.minimum_should_match)
            .map_err(ResolveError::invalid("minimum_should_match", KIND))?;
        clause
            .name
            .set(self.name)
            .map_err(ResolveError::invalid("_name", KIND))?;
        clause
            .phrase_slop
            .set(self.phrase_slop)
            .map_err(ResolveError::invalid("phrase_slop", KIND))?;
        clause
            .quote_analyzer
            .set(self.quote_analyzer)
            .map_err(ResolveError::invalid("quote_analyzer", KIND))?;
        clause
            .quote_field_suffix
            .set(self.quote_field_suffix)
            .map_err(ResolveError::invalid("quote_field_suffix", KIND))?;
        clause
            .rewrite
            .set(self.rewrite)
            .map_err(ResolveError::invalid("rewrite", KIND))?;
        clause
            .tie_breaker
            .set(self.tie_breaker)
            .map_err(ResolveError::invalid("tie_breaker", KIND))?;
        clause
            .time_zone
            .set(self.time_zone)
            .map_err(ResolveError::invalid("time_zone", KIND))?;

        Ok(Clause::QueryString(clause))
    }
}
