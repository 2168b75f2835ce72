//! Coercion of malformed numeric input to zero.
//!
//! A half-filled form row must never stop a recalculation, so anything that is
//! not a finite number (null, missing, empty, garbage text, NaN, infinity)
//! becomes `0` before it reaches the arithmetic. Strict validation belongs to
//! the form layer, not here.

use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Maps a missing value to zero.
#[inline]
#[must_use]
pub fn or_zero(value: Option<Decimal>) -> Decimal {
    value.unwrap_or_default()
}

/// Converts a float, mapping NaN, infinities and out-of-range values to zero.
#[inline]
#[must_use]
pub fn from_f64(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_default()
}

/// Parses text leniently; surrounding whitespace is ignored and anything
/// unparseable yields zero.
#[must_use]
pub fn parse(text: &str) -> Decimal {
    parse_strict(text).unwrap_or_default()
}

fn parse_strict(text: &str) -> Option<Decimal> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .ok()
}

fn from_value(value: &Value) -> Option<Decimal> {
    match value {
        Value::Number(number) => parse_strict(&number.to_string())
            .or_else(|| number.as_f64().and_then(Decimal::from_f64)),
        Value::String(text) => Some(parse(text)),
        Value::Bool(_) | Value::Array(_) | Value::Object(_) => Some(Decimal::ZERO),
        Value::Null => None,
    }
}

/// Serde adapter: decodes any value into a `Decimal`, defaulting to zero.
///
/// Use together with `#[serde(default)]` so a missing field is zero as well.
pub fn lenient_decimal<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(or_zero(from_value(&value)))
}

/// Serde adapter for optional figures: `null` and blank text stay `None`,
/// anything else decodes leniently.
pub fn lenient_opt_decimal<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match &value {
        Value::String(text) if text.trim().is_empty() => None,
        other => from_value(other),
    })
}
