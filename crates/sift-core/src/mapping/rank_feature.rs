use crate::{
    codec::DecodeError,
    mapping::{Field, FieldKind},
    param::{PositiveScoreImpactParam, WireMap, decode_params, encode_params},
    resolve::{Resolve, ResolveError},
    scalar::Scalar,
};

///
/// RankFeatureField
///
/// A numeric feature consumed by rank_feature queries. Features that
/// correlate negatively with the score (e.g. URL length) set
/// `positive_score_impact` to false.
///

#[derive(Clone, Debug, Default, PartialEq)]
pub struct RankFeatureField {
    positive_score_impact: PositiveScoreImpactParam,
}

impl RankFeatureField {
    #[must_use]
    pub fn positive_score_impact(&self) -> bool {
        self.positive_score_impact.get()
    }

    pub(crate) fn encode_body(&self, obj: &mut WireMap) {
        encode_params!(obj, self.positive_score_impact);
    }

    pub(crate) fn decode_body(&mut self, obj: &WireMap, on: &str) -> Result<(), DecodeError> {
        decode_params!(obj, on, self.positive_score_impact);
        Ok(())
    }
}

///
/// RankFeatureFieldParams
///

#[derive(Clone, Debug, Default)]
pub struct RankFeatureFieldParams {
    pub positive_score_impact: Scalar,
}

impl Resolve for RankFeatureFieldParams {
    type Output = Field;

    fn resolve(self) -> Result<Field, ResolveError> {
        let mut field = RankFeatureField::default();
        field
            .positive_score_impact
            .set(self.positive_score_impact)
            .map_err(ResolveError::invalid(
                "positive_score_impact",
                FieldKind::RankFeature.as_str(),
            ))?;
        Ok(Field::RankFeature(field))
    }
}
