//! Optional numeric metrics
//!
//! Fund metrics (returns, scores, AUM, ratios) arrive from storage either as
//! numbers, as numeric text, or as null. They are normalized into a single
//! `Metric` representation at the boundary so formatting and sorting never
//! need to inspect the original shape.

use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A metric value exactly as it was read from storage or upstream JSON
///
/// Null is represented by the surrounding `Option`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawMetric {
    /// A JSON/SQL number
    Number(f64),
    /// Numeric text such as `"12.50"`
    Text(String),
}

/// A normalized optional decimal metric
///
/// `Metric::missing()` covers null and unparseable input alike. Missing values
/// are never treated as zero for display; for ordering, callers use
/// [`Metric::or_zero`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Metric(Option<Decimal>);

impl Metric {
    /// Creates a present metric
    pub fn new(value: Decimal) -> Self {
        Self(Some(value))
    }

    /// Creates a missing metric
    pub fn missing() -> Self {
        Self(None)
    }

    /// Normalizes a raw storage value
    pub fn from_raw(raw: Option<RawMetric>) -> Self {
        match raw {
            None => Self::missing(),
            Some(RawMetric::Number(value)) => Self::from_f64(value),
            Some(RawMetric::Text(text)) => Self::parse(&text),
        }
    }

    /// Parses numeric text, yielding a missing metric when the text is not a number
    pub fn parse(text: &str) -> Self {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Self::missing();
        }

        Decimal::from_str(trimmed)
            .or_else(|_| Decimal::from_scientific(trimmed))
            .map(Self::new)
            .unwrap_or_default()
    }

    /// Converts a float, rejecting NaN and infinities
    pub fn from_f64(value: f64) -> Self {
        if !value.is_finite() {
            return Self::missing();
        }
        // Display yields the shortest round-trip form, so 78.9 stays 78.9
        match Self::parse(&value.to_string()) {
            metric @ Metric(Some(_)) => metric,
            Metric(None) => Self(Decimal::from_f64(value)),
        }
    }

    /// Returns the value if present
    pub fn value(&self) -> Option<Decimal> {
        self.0
    }

    /// Returns true if the metric is null or was unparseable
    pub fn is_missing(&self) -> bool {
        self.0.is_none()
    }

    /// Returns the value, substituting zero for a missing metric
    pub fn or_zero(&self) -> Decimal {
        self.0.unwrap_or(Decimal::ZERO)
    }

    /// Returns true if the metric is missing or exactly zero
    pub fn is_blank(&self) -> bool {
        self.0.map_or(true, |v| v.is_zero())
    }

    /// Returns the value as a float, if present
    pub fn to_f64(&self) -> Option<f64> {
        self.0.and_then(|v| v.to_f64())
    }
}

impl From<Decimal> for Metric {
    fn from(value: Decimal) -> Self {
        Self::new(value)
    }
}

impl From<Option<Decimal>> for Metric {
    fn from(value: Option<Decimal>) -> Self {
        Self(value)
    }
}

impl From<Option<String>> for Metric {
    fn from(value: Option<String>) -> Self {
        Self::from_raw(value.map(RawMetric::Text))
    }
}

impl From<f64> for Metric {
    fn from(value: f64) -> Self {
        Self::from_f64(value)
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(value) => write!(f, "{}", value),
            None => write!(f, "null"),
        }
    }
}

impl Serialize for Metric {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self.to_f64() {
            Some(value) => serializer.serialize_some(&value),
            None => serializer.serialize_none(),
        }
    }
}

impl<'de> Deserialize<'de> for Metric {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<RawMetric>::deserialize(deserializer)?;
        Ok(Self::from_raw(raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_parse_numeric_text() {
        assert_eq!(Metric::parse("12.50").value(), Some(dec!(12.50)));
        assert_eq!(Metric::parse(" -3.456 ").value(), Some(dec!(-3.456)));
    }

    #[test]
    fn test_parse_garbage_is_missing() {
        assert!(Metric::parse("n/a").is_missing());
        assert!(Metric::parse("").is_missing());
    }

    #[test]
    fn test_float_keeps_short_form() {
        assert_eq!(Metric::from_f64(78.9).value(), Some(dec!(78.9)));
        assert!(Metric::from_f64(f64::NAN).is_missing());
    }

    #[test]
    fn test_blank() {
        assert!(Metric::missing().is_blank());
        assert!(Metric::new(dec!(0.00)).is_blank());
        assert!(!Metric::new(dec!(0.01)).is_blank());
    }

    #[test]
    fn test_json_accepts_number_text_and_null() {
        let values: Vec<Metric> = serde_json::from_str(r#"[1.5, "2.25", null, "abc"]"#).unwrap();
        assert_eq!(values[0].value(), Some(dec!(1.5)));
        assert_eq!(values[1].value(), Some(dec!(2.25)));
        assert!(values[2].is_missing());
        assert!(values[3].is_missing());
    }

    #[test]
    fn test_serializes_as_number_or_null() {
        let json = serde_json::to_string(&vec![Metric::new(dec!(45.2)), Metric::missing()]).unwrap();
        assert_eq!(json, "[45.2,null]");
    }
}
