//! Integer fields that accept the shapes browser forms send.
//!
//! Form inputs post numbers as strings (`"3"`), and an untouched select
//! posts `""`. [`opt_i64`] accepts a JSON number or a numeric string and
//! reads a blank string or `null` as absent.

use serde::de::{self, Deserializer};
use serde::Deserialize;

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Number(i64),
    String(String),
}

/// `deserialize_with` target for `Option<i64>` fields. Pair it with
/// `#[serde(default)]` so a missing key is also `None`.
pub fn opt_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<NumberOrString>::deserialize(deserializer)? {
        None => Ok(None),
        Some(NumberOrString::Number(n)) => Ok(Some(n)),
        Some(NumberOrString::String(s)) => {
            let s = s.trim();
            if s.is_empty() {
                return Ok(None);
            }
            s.parse::<i64>()
                .map(Some)
                .map_err(|_| de::Error::custom(format!("expected an integer, got \"{s}\"")))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Form {
        #[serde(default, deserialize_with = "opt_i64")]
        week: Option<i64>,
    }

    fn parse(json: &str) -> Result<Option<i64>, serde_json::Error> {
        serde_json::from_str::<Form>(json).map(|f| f.week)
    }

    #[test]
    fn accepts_numbers_and_numeric_strings() {
        assert_eq!(parse(r#"{"week": 3}"#).unwrap(), Some(3));
        assert_eq!(parse(r#"{"week": "3"}"#).unwrap(), Some(3));
        assert_eq!(parse(r#"{"week": " 12 "}"#).unwrap(), Some(12));
        assert_eq!(parse(r#"{"week": "-1"}"#).unwrap(), Some(-1));
    }

    #[test]
    fn blank_null_and_missing_are_absent() {
        assert_eq!(parse(r#"{"week": ""}"#).unwrap(), None);
        assert_eq!(parse(r#"{"week": "   "}"#).unwrap(), None);
        assert_eq!(parse(r#"{"week": null}"#).unwrap(), None);
        assert_eq!(parse("{}").unwrap(), None);
    }

    #[test]
    fn rejects_non_numeric_values() {
        let err = parse(r#"{"week": "three"}"#).unwrap_err();
        assert!(err.to_string().contains("expected an integer"));
        assert!(parse(r#"{"week": "3.5"}"#).is_err());
        assert!(parse(r#"{"week": true}"#).is_err());
    }
}
