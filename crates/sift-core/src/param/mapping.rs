//! Mapping-domain parameters.

use crate::{
    param::{Param, WireMap, bool_param, number_param, scalar_param, text_param},
    scalar::{FlexNumber, Scalar, ScalarError},
};

bool_param! {
    /// Whether the field value is stored on disk in a column-stride fashion
    /// so it can later be used for sorting and aggregations.
    DocValuesParam, "doc_values", default = true
}

bool_param! {
    /// Whether the field is searchable.
    IndexParam, "index", default = true
}

bool_param! {
    /// Whether the field value is stored and retrievable separately from
    /// the `_source` field.
    StoreParam, "store", default = false
}

bool_param! {
    /// Whether strings are converted to numbers and fractions truncated for
    /// integer-valued fields.
    CoerceParam, "coerce", default = true
}

bool_param! {
    /// If true, malformed values are ignored rather than rejecting the
    /// whole document.
    IgnoreMalformedParam, "ignore_malformed", default = false
}

bool_param! {
    /// Rank features that correlate negatively with the score should set
    /// this to false so the score decreases with the feature value.
    PositiveScoreImpactParam, "positive_score_impact", default = true
}

text_param! {
    /// Normalizer applied prior to indexing a keyword; similar to an
    /// analyzer except it guarantees a single token.
    NormalizerParam, "normalizer"
}

text_param! {
    /// Date format(s) that can be parsed for this field; multiple formats
    /// are separated by `||`.
    FormatParam, "format"
}

number_param! {
    /// Strings longer than this are not indexed.
    IgnoreAboveParam, "ignore_above"
}

scalar_param! {
    /// Value substituted for explicit nulls at index time. Its scalar shape
    /// follows the owning field kind.
    NullValueParam, "null_value"
}

///
/// ScalingFactorParam
///
/// Factor values are multiplied by at index time before rounding to the
/// closest long. Required on scaled floats; factors below 1 lose information
/// and are rejected at assignment.
///

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScalingFactorParam(FlexNumber);

impl ScalingFactorParam {
    #[must_use]
    pub const fn get(&self) -> Option<f64> {
        self.0.get()
    }

    pub fn set(&mut self, v: impl Into<Scalar>) -> Result<(), ScalarError> {
        let mut staged = FlexNumber::default();
        staged.set(v)?;
        if let Some(f) = staged.get()
            && f < 1.0
        {
            return Err(ScalarError::invalid(f, "scaling_factor"));
        }
        self.0 = staged;
        Ok(())
    }
}

impl Param for ScalingFactorParam {
    fn wire_name(&self) -> &'static str {
        "scaling_factor"
    }

    fn is_zero(&self) -> bool {
        self.0.is_unset()
    }

    fn encode_into(&self, obj: &mut WireMap) {
        if let Some(v) = self.0.get() {
            obj.insert("scaling_factor".to_string(), crate::param::wire_value(v));
        }
    }

    fn decode_from(&mut self, obj: &WireMap) -> Result<(), ScalarError> {
        match obj.get("scaling_factor") {
            None | Some(serde_json::Value::Null) => Ok(()),
            Some(v) => self.set(Scalar::from_wire(v, "scaling_factor")?),
        }
    }
}
