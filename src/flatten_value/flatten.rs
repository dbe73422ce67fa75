use {
    super::{FieldPath, FlattenConfig, boxed_iter},
    crate::structured_value::{FlatMapping, StructuredValue},
    std::{borrow::Cow, iter::once},
    tap::Pipe,
    tracing::instrument,
};

/// Every leaf of `value` in traversal order, before colliding keys are resolved.
///
/// Sequence elements reuse the sequence's own prefix.
pub fn flattened_iter<'a>(
    prefix: FieldPath<'a>,
    value: &'a StructuredValue,
) -> Box<dyn Iterator<Item = (FieldPath<'a>, &'a str)> + 'a> {
    match value {
        StructuredValue::Sequence(values) => values
            .iter()
            .flat_map(move |value| flattened_iter(prefix.clone(), value))
            .pipe(boxed_iter),
        StructuredValue::Mapping(map) => map
            .iter()
            .flat_map(move |(key, value)| {
                flattened_iter(prefix.join(Cow::Borrowed(key.as_str())), value)
            })
            .pipe(boxed_iter),
        StructuredValue::Scalar(scalar) => once((prefix, scalar.as_str())).pipe(boxed_iter),
    }
}

#[instrument(skip(value))]
pub fn flattened_with(config: &FlattenConfig, value: &StructuredValue) -> FlatMapping {
    flattened_iter(FieldPath::default(), value).fold(
        FlatMapping::new(),
        |mut out, (path, leaf)| {
            let key = path.to_key(&config.separator);
            if let Some(previous) = out.insert(key.as_str(), leaf) {
                tracing::trace!(%key, %previous, overwritten_by = %leaf, "key collision");
            }
            out
        },
    )
}

/// Collapses `value` into a single-level mapping keyed by dot-joined map keys.
///
/// On colliding keys the leaf visited last wins.
pub fn flattened(value: &StructuredValue) -> FlatMapping {
    flattened_with(&FlattenConfig::default(), value)
}
