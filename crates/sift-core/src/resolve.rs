//! Params → canonical variant resolution.
//!
//! Every variant kind has a loose, builder-facing `…Params` type and a
//! canonical wire-ready form. [`Resolve`] is the single conversion boundary
//! between the two: required-field checks, scalar coercion, and
//! cross-parameter rules all run here, and the loose form never reaches
//! container storage. Resolution is idempotent — canonical values resolve
//! to themselves.

use crate::scalar::ScalarError;
use thiserror::Error as ThisError;

///
/// Resolve
///

pub trait Resolve {
    type Output;

    fn resolve(self) -> Result<Self::Output, ResolveError>;
}

///
/// ResolveError
///
/// Required-field conditions are distinct variants so a caller can tell
/// *which* parameter was missing; coercion failures keep the parameter name
/// and the owning field.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum ResolveError {
    #[error("field is required for {kind}")]
    FieldRequired { kind: &'static str },

    #[error("query is required for {kind}")]
    QueryRequired { kind: &'static str },

    #[error("path is required for {kind}")]
    PathRequired { kind: &'static str },

    #[error("value is required for {kind}")]
    ValueRequired { kind: &'static str },

    #[error("origin is required for {kind} on field <{field}>")]
    OriginRequired { kind: &'static str, field: String },

    #[error("scale is required for {kind} on field <{field}>")]
    ScaleRequired { kind: &'static str, field: String },

    #[error("scaling_factor is required for {kind}")]
    ScalingFactorRequired { kind: &'static str },

    #[error("at least one score function is required for {kind}")]
    FunctionsRequired { kind: &'static str },

    #[error("target_field is required for {kind}")]
    TargetFieldRequired { kind: &'static str },

    #[error("invalid {param} on {on}: {source}")]
    InvalidParam {
        param: &'static str,
        on: String,
        source: ScalarError,
    },
}

impl ResolveError {
    /// Attach parameter and owner context to a coercion failure.
    pub(crate) fn invalid(param: &'static str, on: impl ToString) -> impl FnOnce(ScalarError) -> Self {
        move |source| Self::InvalidParam {
            param,
            on: on.to_string(),
            source,
        }
    }
}
