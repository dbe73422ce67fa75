//! Generic nested value tree and its flat counterpart.

use {indexmap::IndexMap, tap::Pipe};

pub mod indented;

/// A dynamically shaped value, as produced by deserializing a structured document.
///
/// Maps keep insertion order, which is the order the flattener walks them in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StructuredValue {
    Scalar(String),
    Sequence(Vec<StructuredValue>),
    Mapping(IndexMap<String, StructuredValue>),
}

impl StructuredValue {
    pub fn scalar(value: impl Into<String>) -> Self {
        Self::Scalar(value.into())
    }

    pub fn kind(&self) -> &'static str {
        match self {
            StructuredValue::Scalar(_) => "StructuredValue::Scalar",
            StructuredValue::Sequence(_) => "StructuredValue::Sequence",
            StructuredValue::Mapping(_) => "StructuredValue::Mapping",
        }
    }

    pub fn as_scalar(&self) -> Option<&str> {
        match self {
            StructuredValue::Scalar(value) => Some(value.as_str()),
            _ => None,
        }
    }
}

impl From<&str> for StructuredValue {
    fn from(value: &str) -> Self {
        Self::scalar(value)
    }
}

impl From<String> for StructuredValue {
    fn from(value: String) -> Self {
        Self::Scalar(value)
    }
}

impl From<Vec<StructuredValue>> for StructuredValue {
    fn from(values: Vec<StructuredValue>) -> Self {
        Self::Sequence(values)
    }
}

impl From<IndexMap<String, StructuredValue>> for StructuredValue {
    fn from(map: IndexMap<String, StructuredValue>) -> Self {
        Self::Mapping(map)
    }
}

impl<K, V> FromIterator<(K, V)> for StructuredValue
where
    K: Into<String>,
    V: Into<StructuredValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        iter.into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect::<IndexMap<_, _>>()
            .pipe(Self::Mapping)
    }
}

impl FromIterator<StructuredValue> for StructuredValue {
    fn from_iter<I: IntoIterator<Item = StructuredValue>>(iter: I) -> Self {
        iter.into_iter().collect::<Vec<_>>().pipe(Self::Sequence)
    }
}

/// Single-level mapping from joined path to scalar.
///
/// Equality does not depend on insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FlatMapping(IndexMap<String, String>);

impl FlatMapping {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Returns the previous value when `key` was already present.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.0.insert(key.into(), value.into())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn into_inner(self) -> IndexMap<String, String> {
        self.0
    }
}

impl From<IndexMap<String, String>> for FlatMapping {
    fn from(map: IndexMap<String, String>) -> Self {
        Self(map)
    }
}

impl<K, V> FromIterator<(K, V)> for FlatMapping
where
    K: Into<String>,
    V: Into<String>,
{
    /// Later pairs overwrite earlier ones sharing a key.
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        iter.into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect::<IndexMap<_, _>>()
            .pipe(Self)
    }
}

impl IntoIterator for FlatMapping {
    type Item = (String, String);
    type IntoIter = indexmap::map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl From<FlatMapping> for StructuredValue {
    fn from(flat: FlatMapping) -> Self {
        flat.into_iter()
            .map(|(k, v)| (k, StructuredValue::Scalar(v)))
            .collect()
    }
}
