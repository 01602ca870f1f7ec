use crate::{
    codec::{DecodeError, EncodeError, expect_object, json_type, optional_str},
    ingest::Processor,
    param::WireMap,
    resolve::{Resolve, ResolveError},
};
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use serde_json::Value;

///
/// Pipeline
///
/// An ordered processor sequence. Processors run in document order, each
/// reading the output of the one before it, so decode preserves source
/// order exactly.
///

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Pipeline {
    description: Option<String>,
    processors: Vec<Processor>,
}

impl Pipeline {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            description: None,
            processors: Vec::new(),
        }
    }

    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = Some(description.into());
    }

    #[must_use]
    pub fn processors(&self) -> &[Processor] {
        &self.processors
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.processors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.processors.is_empty()
    }

    /// Resolve the entry and append it. Only canonical processors are
    /// stored; the loose params form never enters the container.
    pub fn add(&mut self, entry: impl Resolve<Output = Processor>) -> Result<(), ResolveError> {
        self.processors.push(entry.resolve()?);
        Ok(())
    }

    #[must_use]
    pub fn to_value(&self) -> Value {
        let mut obj = WireMap::new();
        if let Some(description) = &self.description {
            obj.insert(
                "description".to_string(),
                Value::String(description.clone()),
            );
        }
        let entries = self.processors.iter().map(Processor::to_value).collect();
        obj.insert("processors".to_string(), Value::Array(entries));
        Value::Object(obj)
    }

    /// Decode from a loosely-parsed JSON object.
    pub fn from_value(value: &Value) -> Result<Self, DecodeError> {
        let obj = expect_object(value, "pipeline")?;
        let mut pipeline = Self::new();
        if let Some(description) = optional_str(obj, "description") {
            pipeline.description = Some(description.to_string());
        }
        if let Some(entry) = obj.get("processors") {
            let entries = entry.as_array().ok_or_else(|| DecodeError::ExpectedArray {
                context: "processors".to_string(),
                got: json_type(entry),
            })?;
            pipeline.processors = entries
                .iter()
                .map(Processor::from_value)
                .collect::<Result<_, _>>()?;
        }
        Ok(pipeline)
    }

    pub fn to_json(&self) -> Result<Vec<u8>, EncodeError> {
        serde_json::to_vec(self).map_err(EncodeError::from)
    }

    pub fn from_json(data: &[u8]) -> Result<Self, DecodeError> {
        let value: Value = serde_json::from_slice(data)?;
        Self::from_value(&value)
    }
}

impl<'a> IntoIterator for &'a Pipeline {
    type Item = &'a Processor;
    type IntoIter = std::slice::Iter<'a, Processor>;

    fn into_iter(self) -> Self::IntoIter {
        self.processors.iter()
    }
}

impl IntoIterator for Pipeline {
    type Item = Processor;
    type IntoIter = std::vec::IntoIter<Processor>;

    fn into_iter(self) -> Self::IntoIter {
        self.processors.into_iter()
    }
}

impl Serialize for Pipeline {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_value().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Pipeline {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Self::from_value(&value).map_err(de::Error::custom)
    }
}
