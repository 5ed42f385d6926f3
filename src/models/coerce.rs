//! Lenient deserializers for values that arrive either as JSON numbers or as
//! strings (query strings, form posts).

use serde::de::Error;
use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum Loose {
    Int(u64),
    Signed(i64),
    Float(f64),
    Text(String),
}

fn to_u32<E: Error>(value: Loose) -> Result<u32, E> {
    let out_of_range = || E::custom("value is not a non-negative whole number that fits u32");
    match value {
        Loose::Int(n) => u32::try_from(n).map_err(|_| out_of_range()),
        Loose::Signed(_) => Err(out_of_range()),
        Loose::Float(f) if f.fract() == 0.0 && f >= 0.0 && f <= f64::from(u32::MAX) => Ok(f as u32),
        Loose::Float(_) => Err(out_of_range()),
        Loose::Text(s) => s
            .trim()
            .parse::<u32>()
            .map_err(|e| E::custom(format!("invalid number '{}': {}", s, e))),
    }
}

/// `u32` from a number or numeric string.
pub fn u32_from_any<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    to_u32(Loose::deserialize(deserializer)?)
}

/// Optional `u32` from a number or numeric string. Pair with `#[serde(default)]`.
pub fn option_u32_from_any<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<Loose>::deserialize(deserializer)?
        .map(to_u32)
        .transpose()
}

/// Optional identifier that may be sent as a string or a number.
pub fn option_string_from_any<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Loose>::deserialize(deserializer)?.map(|value| match value {
        Loose::Int(n) => n.to_string(),
        Loose::Signed(n) => n.to_string(),
        Loose::Float(f) => f.to_string(),
        Loose::Text(s) => s,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Deserialize)]
    struct Probe {
        #[serde(deserialize_with = "u32_from_any")]
        count: u32,
        #[serde(default, deserialize_with = "option_u32_from_any")]
        guests: Option<u32>,
        #[serde(default, deserialize_with = "option_string_from_any")]
        lead_id: Option<String>,
    }

    #[test]
    fn test_accepts_numbers_and_strings() {
        let p: Probe = serde_json::from_value(json!({"count": 3, "guests": "8", "lead_id": 42})).unwrap();
        assert_eq!(p.count, 3);
        assert_eq!(p.guests, Some(8));
        assert_eq!(p.lead_id.as_deref(), Some("42"));

        let p: Probe = serde_json::from_value(json!({"count": " 12 ", "lead_id": "lead-1"})).unwrap();
        assert_eq!(p.count, 12);
        assert_eq!(p.guests, None);
        assert_eq!(p.lead_id.as_deref(), Some("lead-1"));
    }

    #[test]
    fn test_whole_floats_are_accepted() {
        let p: Probe = serde_json::from_value(json!({"count": 4.0})).unwrap();
        assert_eq!(p.count, 4);
    }

    #[test]
    fn test_rejects_negative_fractional_and_garbage() {
        assert!(serde_json::from_value::<Probe>(json!({"count": -1})).is_err());
        assert!(serde_json::from_value::<Probe>(json!({"count": 1.5})).is_err());
        assert!(serde_json::from_value::<Probe>(json!({"count": "many"})).is_err());
    }

    #[test]
    fn test_null_optional_is_none() {
        let p: Probe = serde_json::from_value(json!({"count": 1, "guests": null, "lead_id": null})).unwrap();
        assert_eq!(p.guests, None);
        assert_eq!(p.lead_id, None);
    }
}
