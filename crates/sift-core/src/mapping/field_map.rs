use crate::{
    codec::{DecodeError, EncodeError, expect_object},
    mapping::Field,
    resolve::{Resolve, ResolveError},
};
use serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::{self, MapAccess},
    ser::SerializeMap,
};
use serde_json::Value;
use std::fmt;
use thiserror::Error as ThisError;

///
/// FieldMapError
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum FieldMapError {
    #[error("field <{key}> already exists")]
    FieldExists { key: String },

    #[error(transparent)]
    Resolve(#[from] ResolveError),
}

///
/// FieldMap
///
/// Field name → mapping. Keys are unique; entries keep insertion order so
/// encode output is reproducible and decode→encode preserves the source
/// document's member order.
///

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FieldMap {
    entries: Vec<(String, Field)>,
}

impl FieldMap {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Field> {
        self.entries
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, field)| field)
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.entries.iter().any(|(name, _)| name == key)
    }

    /// Insert or overwrite the entry under `key`.
    pub fn set_field(
        &mut self,
        key: impl Into<String>,
        entry: impl Resolve<Output = Field>,
    ) -> Result<(), ResolveError> {
        let key = key.into();
        let field = entry.resolve()?;
        match self.entries.iter_mut().find(|(name, _)| *name == key) {
            Some((_, existing)) => *existing = field,
            None => self.entries.push((key, field)),
        }
        Ok(())
    }

    /// Insert the entry under `key`. Atomic: on any failure — the key
    /// already existing, or the entry failing to resolve — the container is
    /// left untouched.
    pub fn add_field(
        &mut self,
        key: impl Into<String>,
        entry: impl Resolve<Output = Field>,
    ) -> Result<(), FieldMapError> {
        let key = key.into();
        if self.contains(&key) {
            return Err(FieldMapError::FieldExists { key });
        }
        let field = entry.resolve()?;
        self.entries.push((key, field));
        Ok(())
    }

    pub fn remove_field(&mut self, key: &str) -> Option<Field> {
        let at = self.entries.iter().position(|(name, _)| name == key)?;
        Some(self.entries.remove(at).1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Field)> {
        self.entries
            .iter()
            .map(|(name, field)| (name.as_str(), field))
    }

    /// Decode from a loosely-parsed JSON object.
    pub fn from_value(value: &Value) -> Result<Self, DecodeError> {
        let obj = expect_object(value, "field map")?;
        let mut map = Self::new();
        for (name, entry) in obj {
            let field = Field::from_entry(name, entry)?;
            map.entries.push((name.clone(), field));
        }
        Ok(map)
    }

    pub fn to_json(&self) -> Result<Vec<u8>, EncodeError> {
        serde_json::to_vec(self).map_err(EncodeError::from)
    }

    pub fn from_json(data: &[u8]) -> Result<Self, DecodeError> {
        let value: Value = serde_json::from_slice(data)?;
        Self::from_value(&value)
    }
}

impl<'a> IntoIterator for &'a FieldMap {
    type Item = &'a (String, Field);
    type IntoIter = std::slice::Iter<'a, (String, Field)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl IntoIterator for FieldMap {
    type Item = (String, Field);
    type IntoIter = std::vec::IntoIter<(String, Field)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl Serialize for FieldMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, field) in &self.entries {
            map.serialize_entry(name, field)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for FieldMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct FieldMapVisitor;

        impl<'de> de::Visitor<'de> for FieldMapVisitor {
            type Value = FieldMap;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a JSON object of field mappings")
            }

            // Entries are consumed in document order so it survives a
            // decode→encode cycle.
            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<FieldMap, A::Error> {
                let mut map = FieldMap::new();
                while let Some((name, entry)) = access.next_entry::<String, Value>()? {
                    let field = Field::from_entry(&name, &entry).map_err(de::Error::custom)?;
                    map.entries.push((name, field));
                }
                Ok(map)
            }
        }

        deserializer.deserialize_map(FieldMapVisitor)
    }
}
