use {
    crate::{
        flatten_value::flatten::flattened,
        structured_value::{FlatMapping, StructuredValue},
    },
    serde::{Deserialize, Deserializer, Serialize, Serializer},
    tracing::instrument,
};

impl Serialize for StructuredValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            StructuredValue::Scalar(scalar) => serializer.serialize_str(scalar),
            StructuredValue::Sequence(values) => serializer.collect_seq(values),
            StructuredValue::Mapping(map) => serializer.collect_map(map),
        }
    }
}

impl<'de> Deserialize<'de> for StructuredValue {
    #[instrument(skip(deserializer))]
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        serde_json::Value::deserialize(deserializer).map(StructuredValue::from)
    }
}

impl Serialize for FlatMapping {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_map(self.iter())
    }
}

/// Deserializes any document and flattens it on the way in.
impl<'de> Deserialize<'de> for FlatMapping {
    #[instrument(skip(deserializer))]
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        StructuredValue::deserialize(deserializer).map(|value| flattened(&value))
    }
}
