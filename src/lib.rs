pub mod flatten_value;
pub mod structured_value;

pub use {
    crate::serde::json_value::IntoStructuredExt,
    flatten_value::{
        FieldPath, FlattenConfig, JOIN_TAG,
        flatten::{flattened, flattened_iter, flattened_with},
        reinterpret::reinterpreted,
    },
    structured_value::{FlatMapping, StructuredValue},
};

/// Serializes the wrapped value as its flattened mapping.
#[derive(Debug)]
pub struct Flattened<T>(T);

#[derive(Debug)]
pub struct FlattenedRef<'a, T>(&'a T);

impl<T> Flattened<T> {
    pub fn new(value: T) -> Self {
        Self(value)
    }

    pub fn as_ref(&self) -> FlattenedRef<'_, T> {
        FlattenedRef(&self.0)
    }

    pub fn into_inner(self) -> T {
        self.0
    }
}

mod serde;
