use {
    crate::structured_value::{FlatMapping, StructuredValue},
    tracing::instrument,
};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("unsupported top level value, it expected a Map<String, Scalar>, found {0}")]
    UnsupportedTopLevelValue(&'static str),
    #[error("unsupported child level value for key: '{key}', it expected a Scalar, found {found}")]
    UnsupportedChildValue { key: String, found: &'static str },
}

type Result<T> = std::result::Result<T, self::Error>;

/// Reads a mapping whose values are all scalars as a [`FlatMapping`], keys taken verbatim.
#[instrument(skip_all)]
pub fn reinterpreted(value: StructuredValue) -> Result<FlatMapping> {
    match value {
        StructuredValue::Mapping(map) => map
            .into_iter()
            .map(|(key, value)| match value {
                StructuredValue::Scalar(scalar) => Ok((key, scalar)),
                other => Err(self::Error::UnsupportedChildValue {
                    key,
                    found: other.kind(),
                }),
            })
            .collect(),
        other => {
            tracing::debug!("other=\n{}", other.indented());
            Err(self::Error::UnsupportedTopLevelValue(other.kind()))
        }
    }
}

#[cfg(test)]
mod test {
    use {
        crate::{flatten_value::flatten::flattened, structured_value::StructuredValue},
        anyhow::Context,
        serde_json::json,
        tap::Pipe,
    };

    #[test_log::test]
    fn test_flattening_flat_input_is_a_no_op() -> anyhow::Result<()> {
        let input = StructuredValue::from(json!({"a": "1", "b": "2", "c": "3"}));

        let expected = super::reinterpreted(input.clone()).context("reinterpreting")?;
        anyhow::ensure!(
            flattened(&input) == expected,
            "expected:\n{}\ngot:\n{}",
            expected.indented(),
            flattened(&input).indented()
        );
        Ok(())
    }

    #[test_log::test]
    fn test_flattening_is_idempotent() -> anyhow::Result<()> {
        let once = StructuredValue::from(json!({
            "a": "1",
            "b": {"b_a": "2-1", "b_b": [{"x": "2-2"}, {"x": "2-3"}]},
            "": {"top": "0"}
        }))
        .pipe_ref(flattened);

        let twice = flattened(&StructuredValue::from(once.clone()));
        anyhow::ensure!(once == twice, "expected:\n{}\ngot:\n{}", once.indented(), twice.indented());
        Ok(())
    }

    #[test]
    fn test_non_mapping_top_level_is_rejected() {
        let err = super::reinterpreted(StructuredValue::from(json!(["1"]))).unwrap_err();
        assert!(matches!(
            err,
            super::Error::UnsupportedTopLevelValue("StructuredValue::Sequence")
        ));
    }

    #[test]
    fn test_nested_child_is_rejected() {
        let err = super::reinterpreted(StructuredValue::from(json!({"a": "1", "b": {"c": "2"}})))
            .unwrap_err();
        match err {
            super::Error::UnsupportedChildValue { key, found } => {
                assert_eq!(key, "b");
                assert_eq!(found, "StructuredValue::Mapping");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
