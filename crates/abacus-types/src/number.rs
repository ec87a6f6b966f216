use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A numeric operand or result.
///
/// Integers stay integers through add, subtract and multiply; any float
/// operand (and every division) produces a `Float`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    /// Integer value
    Integer(i64),
    /// Floating point value
    Float(f64),
}

impl Number {
    /// Returns the value as an `f64`, widening integers.
    pub fn as_f64(self) -> f64 {
        match self {
            Self::Integer(i) => i as f64,
            Self::Float(f) => f,
        }
    }

    /// True for integer zero and for both signed float zeros.
    pub fn is_zero(self) -> bool {
        match self {
            Self::Integer(i) => i == 0,
            // `-0.0 == 0.0` under IEEE-754 comparison.
            Self::Float(f) => f == 0.0,
        }
    }

    /// True when the value is an `Integer`.
    pub const fn is_integer(self) -> bool {
        matches!(self, Self::Integer(_))
    }

    /// Reads a number out of a JSON value.
    ///
    /// JSON integers that fit `i64` become `Integer`; every other JSON number
    /// becomes `Float`. Non-number values yield `None` (no string coercion).
    pub fn from_json(value: &serde_json::Value) -> Option<Self> {
        let serde_json::Value::Number(n) = value else {
            return None;
        };
        n.as_i64()
            .map(Self::Integer)
            .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(Self::Float))
    }

    /// Parses user-entered text, as typed into a form field or on the
    /// command line.
    ///
    /// Integer literals that fit `i64` become `Integer`, other finite float
    /// literals become `Float`. `inf`, `NaN` and friends are rejected.
    pub fn parse_text(text: &str) -> Option<Self> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        if let Ok(i) = text.parse::<i64>() {
            return Some(Self::Integer(i));
        }
        // `f64::from_str` accepts "inf"/"nan" spellings; only digits count here.
        if !text.bytes().any(|b| b.is_ascii_digit()) {
            return None;
        }
        text.parse::<f64>().ok().filter(|f| f.is_finite()).map(Self::Float)
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

/// Renders the number the way a browser prints the equivalent JSON value, so
/// server-rendered and script-rendered results read the same.
impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Integer(i) => write!(f, "{i}"),
            Self::Float(x) => write_float(f, x),
        }
    }
}

fn write_float(f: &mut fmt::Formatter<'_>, x: f64) -> fmt::Result {
    if x.is_nan() {
        return f.write_str("NaN");
    }
    if x.is_infinite() {
        return f.write_str(if x > 0.0 { "Infinity" } else { "-Infinity" });
    }
    if x == 0.0 {
        return f.write_str("0");
    }

    let magnitude = x.abs();
    if (1e-6..1e21).contains(&magnitude) {
        return write!(f, "{x}");
    }

    let exp = format!("{x:e}");
    match exp.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            write!(f, "{mantissa}e+{exponent}")
        }
        _ => f.write_str(&exp),
    }
}

impl Serialize for Number {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match *self {
            Self::Integer(i) => serializer.serialize_i64(i),
            Self::Float(x) => serializer.serialize_f64(x),
        }
    }
}

impl<'de> Deserialize<'de> for Number {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(NumberVisitor)
    }
}

struct NumberVisitor;

impl Visitor<'_> for NumberVisitor {
    type Value = Number;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a finite number")
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Number, E> {
        Ok(Number::Integer(value))
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Number, E> {
        Ok(i64::try_from(value).map_or(Number::Float(value as f64), Number::Integer))
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<Number, E> {
        if value.is_finite() {
            Ok(Number::Float(value))
        } else {
            Err(E::invalid_value(de::Unexpected::Float(value), &self))
        }
    }
}
