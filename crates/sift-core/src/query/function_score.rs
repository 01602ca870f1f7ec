use crate::{
    codec::{DecodeError, expect_object, json_type, single_key},
    param::{
        BoostModeParam, BoostParam, MaxBoostParam, MinScoreParam, NameParam, ScoreModeParam,
        WireMap, decode_params, encode_params, wire_value,
    },
    query::{Clause, QueryKind},
    resolve::{Resolve, ResolveError},
    scalar::{FlexNumber, Scalar, number_to_value},
};
use serde_json::Value;
use std::fmt;

///
/// DecayCurve
///
/// Shape of the score decay away from the origin.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DecayCurve {
    Exp,
    Gauss,
    Linear,
}

impl DecayCurve {
    const ALL: [Self; 3] = [Self::Exp, Self::Gauss, Self::Linear];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Exp => "exp",
            Self::Gauss => "gauss",
            Self::Linear => "linear",
        }
    }
}

impl fmt::Display for DecayCurve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

///
/// DecayFunction
///
/// Scores documents by their distance from `origin`, measured in units of
/// `scale`, after a free `offset`. On the wire the curve name wraps a body
/// keyed by the numeric, date, or geo field being measured:
/// `{"gauss": {"published": {"origin": ..., "scale": ...}}}`.
///

#[derive(Clone, Debug, PartialEq)]
pub struct DecayFunction {
    curve: DecayCurve,
    field: String,
    origin: Scalar,
    scale: Scalar,
    offset: Scalar,
    decay: FlexNumber,
    weight: FlexNumber,
    filter: Option<Box<Clause>>,
}

impl DecayFunction {
    #[must_use]
    pub const fn curve(&self) -> DecayCurve {
        self.curve
    }

    #[must_use]
    pub fn field(&self) -> &str {
        &self.field
    }

    #[must_use]
    pub const fn origin(&self) -> &Scalar {
        &self.origin
    }

    #[must_use]
    pub const fn scale(&self) -> &Scalar {
        &self.scale
    }
}

///
/// WeightFunction
///
/// Multiplies the score by a constant, optionally gated by a filter.
///

#[derive(Clone, Debug, PartialEq)]
pub struct WeightFunction {
    weight: f64,
    filter: Option<Box<Clause>>,
}

impl WeightFunction {
    #[must_use]
    pub const fn weight(&self) -> f64 {
        self.weight
    }
}

///
/// ScoreFunction
///

#[derive(Clone, Debug, PartialEq)]
pub enum ScoreFunction {
    Decay(DecayFunction),
    Weight(WeightFunction),
}

impl ScoreFunction {
    #[must_use]
    pub(crate) fn to_value(&self) -> Value {
        let mut entry = WireMap::new();
        match self {
            Self::Decay(decay) => {
                let mut inner = WireMap::new();
                inner.insert("origin".to_string(), decay.origin.to_wire());
                inner.insert("scale".to_string(), decay.scale.to_wire());
                if !decay.offset.is_unset() {
                    inner.insert("offset".to_string(), decay.offset.to_wire());
                }
                if let Some(d) = decay.decay.get() {
                    inner.insert("decay".to_string(), wire_value(d));
                }

                let mut by_field = WireMap::new();
                by_field.insert(decay.field.clone(), Value::Object(inner));
                entry.insert(decay.curve.as_str().to_string(), Value::Object(by_field));

                if let Some(w) = decay.weight.get() {
                    entry.insert("weight".to_string(), wire_value(w));
                }
                if let Some(filter) = &decay.filter {
                    entry.insert("filter".to_string(), filter.to_value());
                }
            }
            Self::Weight(weight) => {
                entry.insert("weight".to_string(), number_to_value(weight.weight));
                if let Some(filter) = &weight.filter {
                    entry.insert("filter".to_string(), filter.to_value());
                }
            }
        }
        Value::Object(entry)
    }

    pub(crate) fn from_value(value: &Value) -> Result<Self, DecodeError> {
        let obj = expect_object(value, "score function")?;

        let mut weight = FlexNumber::default();
        if let Some(w) = obj.get("weight") {
            weight
                .decode(w)
                .map_err(DecodeError::invalid("weight", "score function"))?;
        }
        let filter = match obj.get("filter") {
            Some(f) => Some(Box::new(Clause::from_value(f)?)),
            None => None,
        };

        for curve in DecayCurve::ALL {
            let Some(body) = obj.get(curve.as_str()) else {
                continue;
            };
            let by_field = expect_object(body, curve.as_str())?;
            let (field, inner) = single_key(by_field, curve.as_str())?;
            let inner = expect_object(inner, field)?;

            let mut decay = DecayFunction {
                curve,
                field: field.to_string(),
                origin: Scalar::Absent,
                scale: Scalar::Absent,
                offset: Scalar::Absent,
                decay: FlexNumber::default(),
                weight,
                filter,
            };
            if let Some(v) = inner.get("origin") {
                decay.origin = Scalar::from_wire(v, "origin")
                    .map_err(DecodeError::invalid("origin", field))?;
            }
            if let Some(v) = inner.get("scale") {
                decay.scale = Scalar::from_wire(v, "scale")
                    .map_err(DecodeError::invalid("scale", field))?;
            }
            if let Some(v) = inner.get("offset") {
                decay.offset = Scalar::from_wire(v, "offset")
                    .map_err(DecodeError::invalid("offset", field))?;
            }
            if let Some(v) = inner.get("decay") {
                decay
                    .decay
                    .decode(v)
                    .map_err(DecodeError::invalid("decay", field))?;
            }
            return Ok(Self::Decay(decay));
        }

        match weight.get() {
            Some(w) => Ok(Self::Weight(WeightFunction { weight: w, filter })),
            None => Err(DecodeError::BadWrapper {
                context: "score function".to_string(),
                keys: obj.len(),
            }),
        }
    }
}

// A canonical score function resolves to itself.
impl Resolve for ScoreFunction {
    type Output = Self;

    fn resolve(self) -> Result<Self, ResolveError> {
        Ok(self)
    }
}

///
/// DecayParams
///

#[derive(Clone, Debug, Default)]
pub struct DecayParams {
    pub field: String,
    pub origin: Scalar,
    pub scale: Scalar,
    pub offset: Scalar,
    pub decay: Scalar,
    pub weight: Scalar,
    pub filter: Option<Clause>,
}

impl DecayParams {
    fn resolve_with(self, curve: DecayCurve) -> Result<ScoreFunction, ResolveError> {
        let kind = curve.as_str();

        if self.field.is_empty() {
            return Err(ResolveError::FieldRequired { kind });
        }
        if self.origin.is_unset() {
            return Err(ResolveError::OriginRequired {
                kind,
                field: self.field,
            });
        }
        if self.scale.is_unset() {
            return Err(ResolveError::ScaleRequired {
                kind,
                field: self.field,
            });
        }

        let mut function = DecayFunction {
            curve,
            field: self.field,
            origin: self.origin,
            scale: self.scale,
            offset: self.offset,
            decay: FlexNumber::default(),
            weight: FlexNumber::default(),
            filter: self.filter.map(Box::new),
        };
        function
            .decay
            .set(self.decay)
            .map_err(ResolveError::invalid("decay", kind))?;
        function
            .weight
            .set(self.weight)
            .map_err(ResolveError::invalid("weight", kind))?;

        Ok(ScoreFunction::Decay(function))
    }
}

///
/// ScoreFunctionParams
///

#[derive(Clone, Debug)]
pub enum ScoreFunctionParams {
    Exp(DecayParams),
    Gauss(DecayParams),
    Linear(DecayParams),
    Weight(f64),
}

impl Resolve for ScoreFunctionParams {
    type Output = ScoreFunction;

    fn resolve(self) -> Result<ScoreFunction, ResolveError> {
        match self {
            Self::Exp(params) => params.resolve_with(DecayCurve::Exp),
            Self::Gauss(params) => params.resolve_with(DecayCurve::Gauss),
            Self::Linear(params) => params.resolve_with(DecayCurve::Linear),
            Self::Weight(weight) => Ok(ScoreFunction::Weight(WeightFunction {
                weight,
                filter: None,
            })),
        }
    }
}

///
/// FunctionScoreClause
///
/// Wraps a query and re-scores its matches through a list of functions.
/// Functions apply in order; `score_mode` combines their results and
/// `boost_mode` merges that with the wrapped query's own score.
///

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FunctionScoreClause {
    query: Option<Box<Clause>>,
    functions: Vec<ScoreFunction>,
    boost: BoostParam,
    boost_mode: BoostModeParam,
    max_boost: MaxBoostParam,
    min_score: MinScoreParam,
    name: NameParam,
    score_mode: ScoreModeParam,
}

impl FunctionScoreClause {
    #[must_use]
    pub fn query(&self) -> Option<&Clause> {
        self.query.as_deref()
    }

    #[must_use]
    pub fn functions(&self) -> &[ScoreFunction] {
        &self.functions
    }

    /// Resolve and append one score function.
    pub fn add_function(
        &mut self,
        entry: impl Resolve<Output = ScoreFunction>,
    ) -> Result<(), ResolveError> {
        self.functions.push(entry.resolve()?);
        Ok(())
    }

    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.get()
    }

    pub(crate) fn encode_body(&self) -> WireMap {
        let mut body = WireMap::new();
        if let Some(query) = &self.query {
            body.insert("query".to_string(), query.to_value());
        }
        if !self.functions.is_empty() {
            let entries = self.functions.iter().map(ScoreFunction::to_value).collect();
            body.insert("functions".to_string(), Value::Array(entries));
        }
        encode_params!(
            &mut body,
            self.boost,
            self.boost_mode,
            self.max_boost,
            self.min_score,
            self.name,
            self.score_mode,
        );
        body
    }

    pub(crate) fn decode_body(&mut self, body: &Value) -> Result<(), DecodeError> {
        const KIND: &str = QueryKind::FunctionScore.as_str();

        let obj = expect_object(body, "function_score clause")?;
        if let Some(q) = obj.get("query") {
            self.query = Some(Box::new(Clause::from_value(q)?));
        }
        if let Some(entry) = obj.get("functions") {
            let entries = entry.as_array().ok_or_else(|| DecodeError::ExpectedArray {
                context: "functions".to_string(),
                got: json_type(entry),
            })?;
            self.functions = entries
                .iter()
                .map(ScoreFunction::from_value)
                .collect::<Result<_, _>>()?;
        }
        decode_params!(
            obj,
            KIND,
            self.boost,
            self.boost_mode,
            self.max_boost,
            self.min_score,
            self.name,
            self.score_mode,
        );
        Ok(())
    }
}

///
/// FunctionScoreParams
///

#[derive(Clone, Debug, Default)]
pub struct FunctionScoreParams {
    pub query: Option<Clause>,
    pub functions: Vec<ScoreFunctionParams>,
    pub boost: Scalar,
    pub boost_mode: Scalar,
    pub max_boost: Scalar,
    pub min_score: Scalar,
    pub name: Scalar,
    pub score_mode: Scalar,
}

impl Resolve for FunctionScoreParams {
    type Output = Clause;

    fn resolve(self) -> Result<Clause, ResolveError> {
        const KIND: &str = QueryKind::FunctionScore.as_str();

        if self.functions.is_empty() {
            return Err(ResolveError::FunctionsRequired { kind: KIND });
        }

        let mut clause = FunctionScoreClause {
            query: self.query.map(Box::new),
            functions: Vec::with_capacity(self.functions.len()),
            ..FunctionScoreClause::default()
        };
        for function in self.functions {
            clause.functions.push(function.resolve()?);
        }
        clause
            .boost
            .set(self.boost)
            .map_err(ResolveError::invalid("boost", KIND))?;
        clause
            .boost_mode
            .set(self.boost_mode)
            .map_err(ResolveError::invalid("boost_mode", KIND))?;
        clause
            .max_boost
            .set(self.max_boost)
            .map_err(ResolveError::invalid("max_boost", KIND))?;
        clause
            .min_score
            .set(self.min_score)
            .map_err(ResolveError::invalid("min_score", KIND))?;
        clause
            .name
            .set(self.name)
            .map_err(ResolveError::invalid("_name", KIND))?;
        clause
            .score_mode
            .set(self.score_mode)
            .map_err(ResolveError::invalid("score_mode", KIND))?;

        Ok(Clause::FunctionScore(clause))
    }
}
