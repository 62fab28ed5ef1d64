//! Tri-state JSON fields.
//!
//! A field that is absent keeps the stored value, `null` clears it and any
//! other value replaces it. Pair with `#[serde(default)]`.

use serde::{Deserialize, Deserializer};

pub(crate) fn deserialize<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;
    use testresult::TestResult;

    #[derive(Debug, Deserialize)]
    struct Patch {
        #[serde(default, deserialize_with = "super::deserialize")]
        parent: Option<Option<u32>>,
    }

    #[test]
    fn distinguishes_absent_null_and_value() -> TestResult {
        let absent: Patch = serde_json::from_str("{}")?;
        let null: Patch = serde_json::from_str(r#"{"parent":null}"#)?;
        let value: Patch = serde_json::from_str(r#"{"parent":3}"#)?;

        assert_eq!(absent.parent, None);
        assert_eq!(null.parent, Some(None));
        assert_eq!(value.parent, Some(Some(3)));

        Ok(())
    }
}
