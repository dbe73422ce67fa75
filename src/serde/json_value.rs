use {
    crate::{
        flatten_value::flatten::flattened,
        structured_value::{FlatMapping, StructuredValue},
    },
    serde::Serialize,
    serde_json::Value,
    tap::Pipe,
};

/// `null` becomes an empty scalar; numbers and booleans keep their JSON text.
impl From<Value> for StructuredValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => StructuredValue::Scalar(String::new()),
            Value::Bool(bool) => bool.to_string().pipe(StructuredValue::Scalar),
            Value::Number(number) => number.to_string().pipe(StructuredValue::Scalar),
            Value::String(string) => StructuredValue::Scalar(string),
            Value::Array(values) => values.into_iter().map(StructuredValue::from).collect(),
            Value::Object(map) => map.into_iter().collect(),
        }
    }
}

impl StructuredValue {
    /// Captures any serializable value through its `serde_json` representation.
    pub fn from_serialize<T>(value: &T) -> serde_json::Result<Self>
    where
        T: Serialize + ?Sized,
    {
        serde_json::to_value(value).map(Self::from)
    }
}

#[extension_traits::extension(pub trait IntoStructuredExt)]
impl Value {
    fn into_structured(self) -> StructuredValue {
        StructuredValue::from(self)
    }

    fn into_flattened(self) -> FlatMapping {
        self.into_structured().pipe_ref(flattened)
    }
}
