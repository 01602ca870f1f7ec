//! Discriminator registries.
//!
//! One registry per domain maps wire discriminator strings to zero-value
//! constructors. Registration is append-only during process initialization
//! (the builtin catalogs seed each registry the first time it is touched)
//! and read-only afterwards; concurrent `register_*` calls during startup
//! must be externally serialized. The registry never inspects decoded
//! bodies — a lookup miss at decode time is an error, never a panic.

use crate::{ingest::Processor, mapping::Field, query::Clause};
use std::{
    collections::HashMap,
    fmt,
    sync::{LazyLock, RwLock},
};
use thiserror::Error as ThisError;

///
/// Domain
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Domain {
    Mapping,
    Query,
    Ingest,
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Mapping => "mapping",
            Self::Query => "query",
            Self::Ingest => "ingest",
        })
    }
}

///
/// RegistryError
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum RegistryError {
    /// The discriminator is not registered in this domain.
    #[error("unsupported {domain} type <{discriminator}>")]
    UnsupportedType {
        domain: Domain,
        discriminator: String,
    },

    /// A discriminator was registered twice in one domain. Registration
    /// happens once at startup, so this is a programmer error.
    #[error("duplicate {domain} discriminator <{discriminator}>")]
    DuplicateDiscriminator {
        domain: Domain,
        discriminator: &'static str,
    },
}

///
/// Registry
///
/// Discriminator → zero-value factory for one domain.
///

#[derive(Debug)]
pub struct Registry<V> {
    domain: Domain,
    entries: HashMap<&'static str, fn() -> V>,
}

impl<V> Registry<V> {
    #[must_use]
    pub fn new(domain: Domain) -> Self {
        Self {
            domain,
            entries: HashMap::new(),
        }
    }

    pub fn register(
        &mut self,
        discriminator: &'static str,
        ctor: fn() -> V,
    ) -> Result<(), RegistryError> {
        if self.entries.contains_key(discriminator) {
            return Err(RegistryError::DuplicateDiscriminator {
                domain: self.domain,
                discriminator,
            });
        }
        self.entries.insert(discriminator, ctor);
        Ok(())
    }

    #[must_use]
    pub fn lookup(&self, discriminator: &str) -> Option<fn() -> V> {
        self.entries.get(discriminator).copied()
    }

    pub fn construct(&self, discriminator: &str) -> Result<V, RegistryError> {
        self.lookup(discriminator)
            .map(|ctor| ctor())
            .ok_or_else(|| RegistryError::UnsupportedType {
                domain: self.domain,
                discriminator: discriminator.to_string(),
            })
    }

    /// Registered discriminators, sorted for reproducible iteration.
    #[must_use]
    pub fn discriminators(&self) -> Vec<&'static str> {
        let mut all: Vec<_> = self.entries.keys().copied().collect();
        all.sort_unstable();
        all
    }
}

static MAPPING: LazyLock<RwLock<Registry<Field>>> =
    LazyLock::new(|| seed(Domain::Mapping, crate::mapping::BUILTIN));

static QUERY: LazyLock<RwLock<Registry<Clause>>> =
    LazyLock::new(|| seed(Domain::Query, crate::query::BUILTIN));

static INGEST: LazyLock<RwLock<Registry<Processor>>> =
    LazyLock::new(|| seed(Domain::Ingest, crate::ingest::BUILTIN));

fn seed<V>(domain: Domain, builtin: &[(&'static str, fn() -> V)]) -> RwLock<Registry<V>> {
    let mut registry = Registry::new(domain);
    for (discriminator, ctor) in builtin {
        registry
            .register(discriminator, *ctor)
            .expect("builtin discriminator registered twice");
    }
    RwLock::new(registry)
}

/// Register an additional field-mapping kind during startup.
pub fn register_field(discriminator: &'static str, ctor: fn() -> Field) -> Result<(), RegistryError> {
    MAPPING
        .write()
        .expect("mapping registry lock poisoned")
        .register(discriminator, ctor)
}

/// Register an additional query-clause kind during startup.
pub fn register_clause(discriminator: &'static str, ctor: fn() -> Clause) -> Result<(), RegistryError> {
    QUERY
        .write()
        .expect("query registry lock poisoned")
        .register(discriminator, ctor)
}

/// Register an additional ingest-processor kind during startup.
pub fn register_processor(
    discriminator: &'static str,
    ctor: fn() -> Processor,
) -> Result<(), RegistryError> {
    INGEST
        .write()
        .expect("ingest registry lock poisoned")
        .register(discriminator, ctor)
}

pub(crate) fn construct_field(discriminator: &str) -> Result<Field, RegistryError> {
    MAPPING
        .read()
        .expect("mapping registry lock poisoned")
        .construct(discriminator)
}

pub(crate) fn construct_clause(discriminator: &str) -> Result<Clause, RegistryError> {
    QUERY
        .read()
        .expect("query registry lock poisoned")
        .construct(discriminator)
}

pub(crate) fn construct_processor(discriminator: &str) -> Result<Processor, RegistryError> {
    INGEST
        .read()
        .expect("ingest registry lock poisoned")
        .construct(discriminator)
}

/// Registered field-mapping discriminators.
#[must_use]
pub fn field_discriminators() -> Vec<&'static str> {
    MAPPING
        .read()
        .expect("mapping registry lock poisoned")
        .discriminators()
}

/// Registered query-clause discriminators.
#[must_use]
pub fn clause_discriminators() -> Vec<&'static str> {
    QUERY
        .read()
        .expect("query registry lock poisoned")
        .discriminators()
}

/// Registered ingest-processor discriminators.
#[must_use]
pub fn processor_discriminators() -> Vec<&'static str> {
    INGEST
        .read()
        .expect("ingest registry lock poisoned")
        .discriminators()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_registration_fails() {
        let mut registry = Registry::new(Domain::Query);
        registry.register("match", || 1).unwrap();
        let err = registry.register("match", || 2).unwrap_err();
        assert_eq!(
            err,
            RegistryError::DuplicateDiscriminator {
                domain: Domain::Query,
                discriminator: "match",
            }
        );
        // the first constructor survives
        assert_eq!(registry.construct("match").unwrap(), 1);
    }

    #[test]
    fn unknown_discriminator_is_an_error() {
        let registry: Registry<u8> = Registry::new(Domain::Mapping);
        let err = registry.construct("bogus_kind").unwrap_err();
        assert_eq!(
            err,
            RegistryError::UnsupportedType {
                domain: Domain::Mapping,
                discriminator: "bogus_kind".to_string(),
            }
        );
    }

    #[test]
    fn builtin_domains_are_seeded() {
        assert!(field_discriminators().contains(&"alias"));
        assert!(clause_discriminators().contains(&"match"));
        assert!(processor_discriminators().contains(&"set"));
    }
}
