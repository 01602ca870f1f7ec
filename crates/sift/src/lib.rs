//! Sift — typed models and wire codecs for search-engine JSON schemas.
//!
//! This is the public meta-crate. Downstream users depend on **sift** only.
//!
//! It re-exports the stable public API from:
//!   - `sift-core` (scalars, parameters, registries, domains, codecs)

pub use sift_core as core;

pub use sift_core::{codec, ingest, mapping, param, query, registry, resolve, scalar};

/// Crate version, as published.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//
// Prelude
//

pub mod prelude {
    pub use sift_core::prelude::*;
}
