//! Serde field adapters shared by the record models.
//!
//! Coercion is narrow: strings stay strings, counts accept JSON
//! integers or digit strings, decimals accept JSON numbers or numeric strings.
//! Nothing else converts.

use rust_decimal::Decimal;
use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{self, Serialize, Serializer};
use serde_json::{Number, Value};

/// Non-negative integer from a JSON number or a digit string. A zero fraction
/// (`5.0`) is accepted, any other fraction is not.
pub(super) fn count<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let text = numeric_text::<D::Error>(Value::deserialize(deserializer)?, "a non-negative integer")?;
    parse_count(&text).ok_or_else(|| de::Error::custom(format!("invalid count '{}'", text)))
}

/// Exact decimal from a JSON number or a numeric string.
pub(super) fn decimal<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    let text = numeric_text::<D::Error>(Value::deserialize(deserializer)?, "a decimal number")?;
    parse_decimal(&text).ok_or_else(|| de::Error::custom(format!("invalid decimal '{}'", text)))
}

/// Writes a decimal as a JSON number carrying its exact text, trailing
/// zeros included.
pub(super) fn decimal_number<S>(value: &Decimal, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let number: Number = value.to_string().parse().map_err(ser::Error::custom)?;
    number.serialize(serializer)
}

fn numeric_text<E: de::Error>(value: Value, expected: &'static str) -> Result<String, E> {
    match value {
        Value::Number(n) => Ok(n.to_string()),
        Value::String(s) => Ok(s.trim().to_string()),
        other => Err(E::custom(format!(
            "invalid type: {}, expected {}",
            kind(&other),
            expected
        ))),
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn parse_count(text: &str) -> Option<u64> {
    let whole = match text.split_once('.') {
        Some((whole, fraction)) if fraction.bytes().all(|b| b == b'0') => whole,
        Some(_) => return None,
        None => text,
    };
    if whole.is_empty() || !whole.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    whole.parse().ok()
}

fn parse_decimal(text: &str) -> Option<Decimal> {
    if text.contains(['e', 'E']) {
        Decimal::from_scientific(text).ok()
    } else {
        Decimal::from_str_exact(text).ok()
    }
}
