use crate::{
    codec::{DecodeError, EncodeError, json_type},
    query::Clause,
    resolve::{Resolve, ResolveError},
};
use derive_more::{Deref, DerefMut, IntoIterator};
use serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::{self, MapAccess, SeqAccess},
};
use serde_json::Value;
use std::fmt;

///
/// Clauses
///
/// An ordered clause sequence. Order matters: it controls how boolean
/// clauses combine and how scoring functions are summed, so decode
/// preserves source order exactly.
///

#[derive(Clone, Debug, Default, Deref, DerefMut, IntoIterator, PartialEq)]
pub struct Clauses {
    #[deref]
    #[deref_mut]
    #[into_iterator(owned, ref)]
    items: Vec<Clause>,
}

impl Clauses {
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Resolve the entry and append it. Only canonical clauses are stored;
    /// the loose params form never enters the container.
    pub fn add(&mut self, entry: impl Resolve<Output = Clause>) -> Result<(), ResolveError> {
        self.items.push(entry.resolve()?);
        Ok(())
    }

    /// Remove every clause whose `_name` matches, returning how many were
    /// removed. Removing all matches keeps the operation idempotent when
    /// duplicate names slip in.
    pub fn remove_by_name(&mut self, name: &str) -> usize {
        let before = self.items.len();
        self.items.retain(|clause| clause.name() != Some(name));
        before - self.items.len()
    }

    /// Decode from loosely-parsed JSON: either a single wrapper object (one
    /// clause per discriminator key) or an array of wrapper objects.
    pub fn from_value(value: &Value) -> Result<Self, DecodeError> {
        let mut clauses = Self::new();
        match value {
            Value::Object(obj) => {
                for (discriminator, body) in obj {
                    clauses.items.push(Clause::decode_entry(discriminator, body)?);
                }
            }
            Value::Array(entries) => {
                for entry in entries {
                    let obj = entry.as_object().ok_or_else(|| DecodeError::ExpectedObject {
                        context: "clause".to_string(),
                        got: json_type(entry),
                    })?;
                    for (discriminator, body) in obj {
                        clauses.items.push(Clause::decode_entry(discriminator, body)?);
                    }
                }
            }
            other => {
                return Err(DecodeError::ExpectedObject {
                    context: "clauses".to_string(),
                    got: json_type(other),
                });
            }
        }
        Ok(clauses)
    }

    pub fn to_json(&self) -> Result<Vec<u8>, EncodeError> {
        serde_json::to_vec(self).map_err(EncodeError::from)
    }

    pub fn from_json(data: &[u8]) -> Result<Self, DecodeError> {
        let value: Value = serde_json::from_slice(data)?;
        Self::from_value(&value)
    }
}

impl Serialize for Clauses {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.items.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Clauses {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ClausesVisitor;

        impl<'de> de::Visitor<'de> for ClausesVisitor {
            type Value = Clauses;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a clause wrapper object or an array of them")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Clauses, A::Error> {
                let mut clauses = Clauses::new();
                while let Some((discriminator, body)) = access.next_entry::<String, Value>()? {
                    let clause = Clause::decode_entry(&discriminator, &body)
                        .map_err(de::Error::custom)?;
                    clauses.items.push(clause);
                }
                Ok(clauses)
            }

            fn visit_seq<A: SeqAccess<'de>>(self, mut access: A) -> Result<Clauses, A::Error> {
                let mut clauses = Clauses::new();
                while let Some(entry) = access.next_element::<Value>()? {
                    let obj = entry.as_object().ok_or_else(|| {
                        de::Error::custom(DecodeError::ExpectedObject {
                            context: "clause".to_string(),
                            got: json_type(&entry),
                        })
                    })?;
                    for (discriminator, body) in obj {
                        let clause = Clause::decode_entry(discriminator, body)
                            .map_err(de::Error::custom)?;
                        clauses.items.push(clause);
                    }
                }
                Ok(clauses)
            }
        }

        deserializer.deserialize_any(ClausesVisitor)
    }
}
