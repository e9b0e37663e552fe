//! Boundary deserializers for fields the APIs encode inconsistently.

use rust_decimal::Decimal;
use serde::de::{self, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer};
use std::fmt;

/// Key serde_json uses to hand over a number's exact text when it does not
/// fit a primitive.
const EXACT_NUMBER_KEY: &str = "$serde_json::private::Number";

struct TextualVisitor;

impl<'de> Visitor<'de> for TextualVisitor {
    type Value = String;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a string or a number")
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<String, E> {
        Ok(value.to_string())
    }

    fn visit_string<E: de::Error>(self, value: String) -> Result<String, E> {
        Ok(value)
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<String, E> {
        Ok(value.to_string())
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<String, E> {
        Ok(value.to_string())
    }

    fn visit_u128<E: de::Error>(self, value: u128) -> Result<String, E> {
        Ok(value.to_string())
    }

    fn visit_i128<E: de::Error>(self, value: i128) -> Result<String, E> {
        Ok(value.to_string())
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<String, E> {
        Ok(value.to_string())
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<String, A::Error> {
        match map.next_key::<String>()? {
            Some(key) if key == EXACT_NUMBER_KEY => map.next_value::<String>(),
            _ => Err(de::Error::invalid_type(de::Unexpected::Map, &self)),
        }
    }
}

struct Textual(String);

impl<'de> Deserialize<'de> for Textual {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(TextualVisitor).map(Textual)
    }
}

/// Accepts `"123"` or `123` and yields the textual form. Numbers wider than
/// 64 bits keep their exact digits.
pub fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(TextualVisitor)
}

pub fn string_or_number_vec<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    struct ListVisitor;

    impl<'de> Visitor<'de> for ListVisitor {
        type Value = Vec<String>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a list of strings or numbers")
        }

        fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Vec<String>, A::Error> {
            let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));
            while let Some(Textual(item)) = seq.next_element()? {
                items.push(item);
            }
            Ok(items)
        }
    }

    deserializer.deserialize_seq(ListVisitor)
}

/// Addresses are compared case-insensitively everywhere, so store them lowercased.
pub fn lowercase<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    String::deserialize(deserializer).map(|s| s.to_lowercase())
}

/// Prices are never negative.
pub fn non_negative_decimal<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    let value = <Decimal as Deserialize>::deserialize(deserializer)?;
    if value < Decimal::ZERO {
        return Err(de::Error::custom(format!("negative price {}", value)));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Wire {
        #[serde(deserialize_with = "string_or_number")]
        value: String,
        #[serde(deserialize_with = "string_or_number_vec")]
        list: Vec<String>,
    }

    #[test]
    fn test_accepts_strings_and_numbers() {
        let wire: Wire = serde_json::from_str(r#"{"value": 42, "list": ["7", 8]}"#).unwrap();
        assert_eq!(wire.value, "42");
        assert_eq!(wire.list, vec!["7".to_string(), "8".to_string()]);

        let wire: Wire = serde_json::from_str(r#"{"value": "0x2a", "list": []}"#).unwrap();
        assert_eq!(wire.value, "0x2a");
    }

    #[test]
    fn test_wide_numbers_keep_their_digits() {
        let body = r#"{"value": 100000000000000000000000000000, "list": [18446744073709551616, -3]}"#;
        let wire: Wire = serde_json::from_str(body).unwrap();
        assert_eq!(wire.value, "100000000000000000000000000000");
        assert_eq!(wire.list, vec!["18446744073709551616".to_string(), "-3".to_string()]);

        let value: serde_json::Value = serde_json::from_str(body).unwrap();
        let wire: Wire = serde_json::from_value(value).unwrap();
        assert_eq!(wire.value, "100000000000000000000000000000");
        assert_eq!(wire.list[0], "18446744073709551616");
    }

    #[test]
    fn test_fractional_numbers() {
        let wire: Wire = serde_json::from_str(r#"{"value": 33.5, "list": [0.25]}"#).unwrap();
        assert_eq!(wire.value, "33.5");
        assert_eq!(wire.list, vec!["0.25".to_string()]);
    }

    #[test]
    fn test_rejects_other_shapes() {
        let result = serde_json::from_str::<Wire>(r#"{"value": {"nested": 1}, "list": []}"#);
        assert!(result.is_err());
        let result = serde_json::from_str::<Wire>(r#"{"value": true, "list": []}"#);
        assert!(result.is_err());
    }
}
