use {
    crate::{Flattened, FlattenedRef, flatten_value::flatten::flattened, structured_value::StructuredValue},
    serde::{Serialize, Serializer},
    tracing::instrument,
};

impl<T> Serialize for Flattened<T>
where
    T: Serialize,
{
    #[instrument(skip_all)]
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.as_ref().serialize(serializer)
    }
}

impl<T> Serialize for FlattenedRef<'_, T>
where
    T: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        StructuredValue::from_serialize(self.0)
            .map_err(serde::ser::Error::custom)
            .map(|value| flattened(&value))
            .and_then(|flat| flat.serialize(serializer))
    }
}

#[cfg(test)]
mod tests {
    use {crate::Flattened, serde::Serialize, serde_json::json};

    #[derive(Serialize)]
    struct Address {
        city: &'static str,
        zip: u32,
    }

    #[derive(Serialize)]
    struct User {
        name: &'static str,
        addresses: Vec<Address>,
        nickname: Option<&'static str>,
    }

    #[test_log::test]
    fn test_serializes_as_flat_map() -> anyhow::Result<()> {
        let user = User {
            name: "John",
            addresses: vec![
                Address {
                    city: "NYC",
                    zip: 10001,
                },
                Address {
                    city: "LA",
                    zip: 90001,
                },
            ],
            nickname: None,
        };

        let got = serde_json::to_value(Flattened::new(user))?;
        let expected = json!({
            "name": "John",
            "addresses.city": "LA",
            "addresses.zip": "90001",
            "nickname": ""
        });
        anyhow::ensure!(got == expected, "expected:\n{expected:#}\n\ngot:\n{got:#}");
        Ok(())
    }

    #[test]
    fn test_borrowed_view_matches_owned_wrapper() -> anyhow::Result<()> {
        let wrapped = Flattened::new(json!({"a": [{"b": 1}, {"b": 2}], "c": {"d": true}}));

        let borrowed = serde_json::to_string(&wrapped.as_ref())?;
        let owned = serde_json::to_string(&wrapped)?;
        assert_eq!(borrowed, owned);
        assert_eq!(borrowed, r#"{"a.b":"2","c.d":"true"}"#);
        assert_eq!(wrapped.into_inner()["c"]["d"], json!(true));
        Ok(())
    }
}
