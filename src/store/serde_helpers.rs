//! Serde helpers for request-supplied column values.

/// Decode an optional text column from any JSON scalar.
///
/// `null` or a missing key is `None`; strings pass through; numbers and
/// booleans keep their JSON spelling (`100` becomes `"100"`). Arrays and
/// objects are rejected.
pub mod scalar_text {
    use serde::{de, Deserialize, Deserializer};
    use serde_json::Value;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Value::deserialize(deserializer)? {
            Value::Null => Ok(None),
            Value::String(s) => Ok(Some(s)),
            Value::Number(n) => Ok(Some(n.to_string())),
            Value::Bool(b) => Ok(Some(b.to_string())),
            other => Err(de::Error::invalid_type(
                unexpected(&other),
                &"a string, number or boolean",
            )),
        }
    }

    fn unexpected(value: &Value) -> de::Unexpected<'static> {
        match value {
            Value::Array(_) => de::Unexpected::Seq,
            _ => de::Unexpected::Map,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Default, Deserialize)]
    struct Fields {
        #[serde(default, deserialize_with = "super::scalar_text::deserialize")]
        value: Option<String>,
    }

    fn decode(body: serde_json::Value) -> Result<Option<String>, serde_json::Error> {
        serde_json::from_value::<Fields>(body).map(|f| f.value)
    }

    #[test]
    fn scalars_become_text() {
        assert_eq!(decode(json!({"value": "철근"})).unwrap().as_deref(), Some("철근"));
        assert_eq!(decode(json!({"value": 100})).unwrap().as_deref(), Some("100"));
        assert_eq!(decode(json!({"value": 2.5})).unwrap().as_deref(), Some("2.5"));
        assert_eq!(decode(json!({"value": true})).unwrap().as_deref(), Some("true"));
    }

    #[test]
    fn null_and_missing_are_absent() {
        assert_eq!(decode(json!({"value": null})).unwrap(), None);
        assert_eq!(decode(json!({})).unwrap(), None);
    }

    #[test]
    fn containers_are_rejected() {
        assert!(decode(json!({"value": [1, 2]})).is_err());
        assert!(decode(json!({"value": {"n": 1}})).is_err());
    }
}
