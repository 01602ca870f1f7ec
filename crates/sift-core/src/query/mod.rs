//! Query-clause domain.
//!
//! A clause's discriminator wraps its body as the sole key of the wire
//! object: `{"match": {...}}`. The [`Clauses`] container holds an ordered
//! sequence — order is semantically significant for boolean combination and
//! function summation.

mod bool_query;
mod clauses;
mod exists;
mod function_score;
mod match_all;
mod match_query;
mod query_string;
mod term;

#[cfg(test)]
mod tests;

pub use bool_query::{BoolClause, BoolParams};
pub use clauses::Clauses;
pub use exists::{ExistsClause, ExistsParams};
pub use function_score::{
    DecayCurve, DecayFunction, DecayParams, FunctionScoreClause, FunctionScoreParams,
    ScoreFunction, ScoreFunctionParams, WeightFunction,
};
pub use match_all::{MatchAllClause, MatchAllParams};
pub use match_query::{MatchClause, MatchParams};
pub use query_string::{QueryStringClause, QueryStringParams};
pub use term::{TermClause, TermParams};

use crate::{
    codec::{DecodeError, expect_object, single_key},
    param::WireMap,
    registry,
    resolve::{Resolve, ResolveError},
};
use serde::{Serialize, Serializer};
use serde_json::Value;
use std::fmt;

// One row per clause kind: enum variant, canonical type, wire discriminator.
macro_rules! clause_kinds {
    ($(($variant:ident, $ty:ident, $disc:literal)),+ $(,)?) => {
        ///
        /// QueryKind
        ///

        #[derive(Clone, Copy, Debug, Eq, PartialEq)]
        pub enum QueryKind {
            $($variant),+
        }

        impl QueryKind {
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $disc),+
                }
            }
        }

        impl fmt::Display for QueryKind {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        ///
        /// Clause
        ///
        /// A canonical query clause. Constructed by [`Resolve`] from a
        /// params value, or by [`Clauses`] decode from wire bytes.
        ///

        #[derive(Clone, Debug, PartialEq)]
        pub enum Clause {
            $($variant($ty)),+
        }

        impl Clause {
            #[must_use]
            pub const fn kind(&self) -> QueryKind {
                match self {
                    $(Self::$variant(_) => QueryKind::$variant),+
                }
            }

            /// The clause's `_name`, when one was assigned.
            #[must_use]
            pub fn name(&self) -> Option<&str> {
                match self {
                    $(Self::$variant(clause) => clause.name()),+
                }
            }

            pub(crate) fn encode_body(&self) -> WireMap {
                match self {
                    $(Self::$variant(clause) => clause.encode_body()),+
                }
            }

            pub(crate) fn decode_body(&mut self, body: &Value) -> Result<(), DecodeError> {
                match self {
                    $(Self::$variant(clause) => clause.decode_body(body)),+
                }
            }
        }

        pub(crate) const BUILTIN: &[(&str, fn() -> Clause)] = &[
            $(($disc, || Clause::$variant(<$ty>::default()))),+
        ];
    };
}

clause_kinds! {
    (Bool, BoolClause, "bool"),
    (Exists, ExistsClause, "exists"),
    (FunctionScore, FunctionScoreClause, "function_score"),
    (Match, MatchClause, "match"),
    (MatchAll, MatchAllClause, "match_all"),
    (QueryString, QueryStringClause, "query_string"),
    (Term, TermClause, "term"),
}

impl Clause {
    /// Encode as the single-key wrapper object `{discriminator: body}`.
    #[must_use]
    pub fn to_value(&self) -> Value {
        let mut wrapper = WireMap::new();
        wrapper.insert(
            self.kind().as_str().to_string(),
            Value::Object(self.encode_body()),
        );
        Value::Object(wrapper)
    }

    /// Decode one wrapper object. The sole key is the discriminator; the
    /// registry supplies the zero value, then the body is replayed over it.
    pub fn from_value(value: &Value) -> Result<Self, DecodeError> {
        let obj = expect_object(value, "clause")?;
        let (discriminator, body) = single_key(obj, "clause")?;
        Self::decode_entry(discriminator, body)
    }

    pub(crate) fn decode_entry(discriminator: &str, body: &Value) -> Result<Self, DecodeError> {
        let mut clause = registry::construct_clause(discriminator)?;
        clause.decode_body(body)?;
        Ok(clause)
    }
}

impl Serialize for Clause {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_value().serialize(serializer)
    }
}

// A canonical clause resolves to itself.
impl Resolve for Clause {
    type Output = Self;

    fn resolve(self) -> Result<Self, ResolveError> {
        Ok(self)
    }
}
