//! Query-domain parameters.
//!
//! Defaults follow the search engine's documented behavior; a param left
//! unset never serializes, and a param assigned its default still does.

use crate::param::{bool_param, enum_param, number_param, text_param, wire_enum};

wire_enum! {
    /// Boolean logic used to interpret text in a query value.
    Operator {
        Or => "or",
        And => "and",
    }
}

wire_enum! {
    /// What to return when an analyzer removes all tokens, such as when
    /// using a stop filter.
    ZeroTerms {
        None => "none",
        All => "all",
    }
}

number_param! {
    /// Floating point number used to decrease or increase the relevance
    /// scores of a query. Values between 0 and 1.0 decrease the score; values
    /// greater than 1.0 increase it.
    BoostParam, "boost", default = 1.0
}

text_param! {
    /// Optional clause name. Named clauses can be tracked in responses and
    /// routed into clause sets before serialization.
    NameParam, "_name"
}

text_param! {
    /// Analyzer used to convert query text into tokens. Defaults to the
    /// index-time analyzer mapped for the field.
    AnalyzerParam, "analyzer"
}

text_param! {
    /// Field searched when the query string names none.
    DefaultFieldParam, "default_field"
}

text_param! {
    /// Analyzer used for quoted text, overriding `analyzer` for quotes.
    QuoteAnalyzerParam, "quote_analyzer"
}

text_param! {
    /// Suffix appended to quoted text, allowing a different analysis method
    /// for exact matches.
    QuoteFieldSuffixParam, "quote_field_suffix"
}

text_param! {
    /// Minimum number of clauses that must match for a document to be
    /// returned; the grammar allows counts, percentages, and combinations.
    MinimumShouldMatchParam, "minimum_should_match"
}

text_param! {
    /// Maximum edit distance allowed for matching, e.g. `"2"` or `"AUTO"`.
    FuzzinessParam, "fuzziness"
}

text_param! {
    /// Method used to rewrite the query into primitive queries.
    RewriteParam, "rewrite"
}

text_param! {
    /// Method used to rewrite the fuzzy portion of the query.
    FuzzyRewriteParam, "fuzzy_rewrite"
}

text_param! {
    /// UTC offset or IANA time zone used to convert date values in the
    /// query to UTC, e.g. `+01:00` or `America/Los_Angeles`.
    TimeZoneParam, "time_zone"
}

enum_param! {
    /// Boolean logic used to interpret text in the query value.
    OperatorParam, "operator", Operator, default = Operator::Or
}

enum_param! {
    /// Default boolean logic when the query string itself specifies none.
    DefaultOperatorParam, "default_operator", Operator, default = Operator::Or
}

enum_param! {
    /// Whether no documents or all documents are returned when the analyzer
    /// removes all tokens.
    ZeroTermsQueryParam, "zero_terms_query", ZeroTerms, default = ZeroTerms::None
}

bool_param! {
    /// If true, format-based errors, such as a text value for a numeric
    /// field, are ignored.
    LenientParam, "lenient", default = false
}

bool_param! {
    /// If true, edits for fuzzy matching include transpositions of two
    /// adjacent characters (ab → ba).
    FuzzyTranspositionsParam, "fuzzy_transpositions", default = true
}

bool_param! {
    /// If true, match phrase queries are automatically created for
    /// multi-term synonyms.
    AutoGenerateSynonymsPhraseQueryParam, "auto_generate_synonyms_phrase_query", default = true
}

bool_param! {
    /// If true, term matching ignores letter case.
    CaseInsensitiveParam, "case_insensitive", default = false
}

bool_param! {
    /// If true, the wildcard characters `*` and `?` are allowed as the first
    /// character of the query string.
    AllowLeadingWildcardParam, "allow_leading_wildcard", default = true
}

bool_param! {
    /// If true, the query attempts to analyze wildcard terms.
    AnalyzeWildcardParam, "analyze_wildcard", default = false
}

bool_param! {
    /// If true, position increments are enabled in queries constructed from
    /// a query string search.
    EnablePositionIncrementsParam, "enable_position_increments", default = true
}

number_param! {
    /// Maximum number of terms to which the query will expand.
    MaxExpansionsParam, "max_expansions", default = 50.0
}

number_param! {
    /// Maximum number of terms the fuzzy portion expands to.
    FuzzyMaxExpansionsParam, "fuzzy_max_expansions", default = 50.0
}

number_param! {
    /// Number of beginning characters left unchanged for fuzzy matching.
    PrefixLengthParam, "prefix_length", default = 0.0
}

number_param! {
    /// Maximum number of automaton states required for the query; guards
    /// regular-expression parsing from consuming too many resources.
    MaxDeterminizedStatesParam, "max_determinized_states", default = 10000.0
}

number_param! {
    /// Maximum number of positions allowed between matching tokens for
    /// phrases. Transposed terms have a slop of 2.
    PhraseSlopParam, "phrase_slop", default = 0.0
}

number_param! {
    /// How much the score of non-best matching fields contributes to the
    /// combined score.
    TieBreakerParam, "tie_breaker"
}

number_param! {
    /// Ceiling applied to the combined function score.
    MaxBoostParam, "max_boost"
}

number_param! {
    /// Documents scoring below this threshold are excluded.
    MinScoreParam, "min_score"
}

text_param! {
    /// How individual function scores combine: multiply, sum, avg, first,
    /// max, or min.
    ScoreModeParam, "score_mode"
}

text_param! {
    /// How the function result combines with the query score.
    BoostModeParam, "boost_mode"
}
