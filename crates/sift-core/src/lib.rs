//! Core runtime for Sift: flexible scalars, parameter mixins, variant
//! registries, the resolver boundary, and the wire codecs for the mapping,
//! query, and ingest domains.
#![warn(unreachable_pub)]

pub mod codec;
pub mod ingest;
pub mod mapping;
pub mod param;
pub mod query;
pub mod registry;
pub mod resolve;
pub mod scalar;

///
/// Prelude
///
/// Prelude contains only domain vocabulary.
/// No codec plumbing, registries, or parameter internals are re-exported
/// here.
///

pub mod prelude {
    pub use crate::{
        ingest::{Pipeline, Processor, ProcessorKind},
        mapping::{Field, FieldKind, FieldMap},
        query::{Clause, Clauses, QueryKind},
        resolve::Resolve,
        scalar::Scalar,
    };
}
