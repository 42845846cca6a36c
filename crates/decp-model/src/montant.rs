//! Serde helpers for monetary amounts.
//!
//! The API serializes `Decimal` columns as JSON strings (`"12500.00"`),
//! while older endpoints emit plain numbers. Both forms deserialize to
//! `f64` here.

use serde::Deserializer;
use serde::de::{self, Visitor};
use std::fmt;

struct MontantVisitor;

impl<'de> Visitor<'de> for MontantVisitor {
    type Value = f64;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a number or a numeric string")
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<f64, E> {
        Ok(value)
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<f64, E> {
        Ok(value as f64)
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<f64, E> {
        Ok(value as f64)
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<f64, E> {
        value
            .trim()
            .parse()
            .map_err(|_| E::custom(format!("invalid amount: {value:?}")))
    }
}

pub fn de_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(MontantVisitor)
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Amount {
        #[serde(deserialize_with = "super::de_f64")]
        montant: f64,
    }

    #[test]
    fn accepts_string_amounts() {
        let parsed: Amount = serde_json::from_str(r#"{"montant": "12500.50"}"#).unwrap();
        assert_eq!(parsed.montant, 12500.50);
    }

    #[test]
    fn accepts_numeric_amounts() {
        let parsed: Amount = serde_json::from_str(r#"{"montant": 980}"#).unwrap();
        assert_eq!(parsed.montant, 980.0);
    }

    #[test]
    fn rejects_garbage() {
        let parsed: Result<Amount, _> = serde_json::from_str(r#"{"montant": "n/a"}"#);
        assert!(parsed.is_err());
    }
}
