//! Display formatting for fund metrics
//!
//! Every function here is a pure function of its input. Missing metrics render
//! as a placeholder rather than zero.

use core_kernel::{DbTimestamp, Metric};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;
use tracing::warn;

/// Placeholder for missing returns, AUM, and dates
pub const PLACEHOLDER: &str = "--";

/// Placeholder for missing scores and currency amounts
pub const NOT_AVAILABLE: &str = "N/A";

/// Currency symbol prefixed to amounts
pub const RUPEE: &str = "₹";

/// Colour classification of a return figure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReturnTone {
    Neutral,
    Positive,
    Negative,
}

impl ReturnTone {
    /// CSS class used by the rankings table
    pub fn css_class(&self) -> &'static str {
        match self {
            ReturnTone::Neutral => "text-slate-900",
            ReturnTone::Positive => "text-green-600",
            ReturnTone::Negative => "text-red-600",
        }
    }
}

fn round(value: Decimal, dp: u32) -> Decimal {
    value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero)
}

/// Renders `value` with exactly `dp` fraction digits
fn fixed(value: Decimal, dp: u32) -> String {
    let text = round(value, dp).to_string();
    if dp == 0 {
        return text;
    }

    let (int_part, frac_part) = text.split_once('.').unwrap_or((text.as_str(), ""));
    format!("{int_part}.{frac_part:0<width$}", width = dp as usize)
}

/// Splits a rounded decimal into sign, integer digits and fraction digits
fn split_digits(value: Decimal) -> (&'static str, String, String) {
    let sign = if value.is_sign_negative() && !value.is_zero() { "-" } else { "" };
    let text = value.abs().normalize().to_string();
    match text.split_once('.') {
        Some((int_part, frac_part)) => (sign, int_part.to_string(), frac_part.to_string()),
        None => (sign, text, String::new()),
    }
}

/// Inserts a comma every three digits from the right
fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Groups digits the Indian way: the last three, then pairs
///
/// `123456789` becomes `12,34,56,789`.
pub fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (head, last_three) = digits.split_at(digits.len() - 3);
    let mut out = String::with_capacity(digits.len() + digits.len() / 2);
    for (i, ch) in head.chars().enumerate() {
        if i > 0 && (head.len() - i) % 2 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out.push(',');
    out.push_str(last_three);
    out
}

/// Formats a return percentage: `-3.46%`, or `--` when missing or zero
pub fn format_return(metric: Metric) -> String {
    if metric.is_blank() {
        return PLACEHOLDER.to_string();
    }
    format!("{}%", fixed(metric.or_zero(), 2))
}

/// Classifies a return for colouring
pub fn return_tone(metric: Metric) -> ReturnTone {
    match metric.value() {
        Some(v) if v.is_sign_negative() && !v.is_zero() => ReturnTone::Negative,
        Some(v) if !v.is_zero() => ReturnTone::Positive,
        _ => ReturnTone::Neutral,
    }
}

/// Formats a composite score to one decimal place, or `N/A`
pub fn format_score(metric: Metric) -> String {
    match metric.value() {
        Some(v) => fixed(v, 1),
        None => NOT_AVAILABLE.to_string(),
    }
}

/// Formats an amount with thousands grouping and up to three fraction
/// digits, e.g. `₹5,000` or `₹1,234.5`; `N/A` when missing
pub fn format_currency(metric: Metric) -> String {
    let Some(value) = metric.value() else {
        return NOT_AVAILABLE.to_string();
    };

    let (sign, int_digits, frac_digits) = split_digits(round(value, 3));
    let grouped = group_thousands(&int_digits);
    if frac_digits.is_empty() {
        format!("{RUPEE}{sign}{grouped}")
    } else {
        format!("{RUPEE}{sign}{grouped}.{frac_digits}")
    }
}

/// Formats assets under management in crores with Indian grouping
///
/// # Example
///
/// ```rust
/// use core_kernel::Metric;
/// use domain_fund::format::format_aum;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(format_aum(Metric::new(dec!(123456789))), "₹12,34,56,789 Cr");
/// assert_eq!(format_aum(Metric::missing()), "--");
/// ```
pub fn format_aum(metric: Metric) -> String {
    let Some(value) = metric.value() else {
        return PLACEHOLDER.to_string();
    };

    let (sign, int_digits, _) = split_digits(round(value, 0));
    format!("{RUPEE}{sign}{} Cr", group_indian(&int_digits))
}

/// Formats a metric with fixed decimals and a suffix, or `--` when missing
pub fn format_value(metric: Metric, decimals: u32, suffix: &str) -> String {
    match metric.value() {
        Some(v) => format!("{}{suffix}", fixed(v, decimals)),
        None => PLACEHOLDER.to_string(),
    }
}

/// Formats database timestamp text for display
///
/// Renders `DD/MM/YYYY` when `date_only` is set, otherwise
/// `DD/MM/YYYY, H:MM AM`. Blank input renders as `--`. Text that does not
/// match the timestamp pattern is logged and shown as-is.
pub fn format_timestamp(raw: Option<&str>, date_only: bool) -> String {
    let Some(raw) = raw.filter(|s| !s.is_empty()) else {
        return PLACEHOLDER.to_string();
    };

    let timestamp = DbTimestamp::parse(raw);
    if let DbTimestamp::Unparsed(text) = &timestamp {
        warn!(raw = %text, "Timestamp did not match expected pattern, showing raw text");
    }

    if date_only {
        timestamp.date_label()
    } else {
        timestamp.date_time_label()
    }
}

/// Builds the logo URL for a fund house
pub fn logo_url(base_url: &str, fund_house: Option<&str>) -> Option<String> {
    fund_house
        .filter(|h| !h.is_empty())
        .map(|house| format!("{}/{}.png", base_url.trim_end_matches('/'), house))
}

/// Formats a purchase minimum, shown only when purchases are available
///
/// `available` must be exactly `"Y"` and the minimum present and non-zero;
/// otherwise `N/A`.
pub fn format_purchase_minimum(available: Option<&str>, minimum: Metric) -> String {
    if available == Some("Y") && !minimum.is_blank() {
        format_currency(minimum)
    } else {
        NOT_AVAILABLE.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_format_return_examples() {
        assert_eq!(format_return(Metric::new(dec!(0))), "--");
        assert_eq!(format_return(Metric::new(dec!(-3.456))), "-3.46%");
        assert_eq!(format_return(Metric::missing()), "--");
        assert_eq!(format_return(Metric::new(dec!(12))), "12.00%");
    }

    #[test]
    fn test_return_tone_examples() {
        assert_eq!(return_tone(Metric::new(dec!(-3.456))), ReturnTone::Negative);
        assert_eq!(return_tone(Metric::missing()), ReturnTone::Neutral);
        assert_eq!(return_tone(Metric::new(dec!(0.0))), ReturnTone::Neutral);
        assert_eq!(return_tone(Metric::new(dec!(0.1))), ReturnTone::Positive);
    }

    #[test]
    fn test_format_score() {
        assert_eq!(format_score(Metric::new(dec!(78.94))), "78.9");
        assert_eq!(format_score(Metric::new(dec!(78.95))), "79.0");
        assert_eq!(format_score(Metric::new(dec!(80))), "80.0");
        assert_eq!(format_score(Metric::missing()), "N/A");
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(Metric::new(dec!(5000))), "₹5,000");
        assert_eq!(format_currency(Metric::new(dec!(1234567.50))), "₹1,234,567.5");
        assert_eq!(format_currency(Metric::new(dec!(100))), "₹100");
        assert_eq!(format_currency(Metric::new(dec!(0.12345))), "₹0.123");
        assert_eq!(format_currency(Metric::missing()), "N/A");
    }

    #[test]
    fn test_format_aum() {
        assert_eq!(format_aum(Metric::new(dec!(123456789))), "₹12,34,56,789 Cr");
        assert_eq!(format_aum(Metric::new(dec!(1234.5))), "₹1,235 Cr");
        assert_eq!(format_aum(Metric::new(dec!(999))), "₹999 Cr");
        assert_eq!(format_aum(Metric::new(dec!(0))), "₹0 Cr");
    }

    #[test]
    fn test_group_indian() {
        assert_eq!(group_indian("1000"), "1,000");
        assert_eq!(group_indian("100000"), "1,00,000");
        assert_eq!(group_indian("12345678"), "1,23,45,678");
    }

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(Metric::new(dec!(0.5)), 2, "%"), "0.50%");
        assert_eq!(format_value(Metric::new(dec!(123.456)), 2, ""), "123.46");
        assert_eq!(format_value(Metric::missing(), 2, "%"), "--");
    }

    #[test]
    fn test_format_timestamp() {
        assert_eq!(format_timestamp(Some("2024-03-05 14:07:09.000000"), true), "05/03/2024");
        assert_eq!(format_timestamp(Some("2024-03-05 14:07:09.000000"), false), "05/03/2024, 2:07 PM");
        assert_eq!(format_timestamp(Some("not a date"), true), "not a date");
        assert_eq!(format_timestamp(None, true), "--");
        assert_eq!(format_timestamp(Some(""), false), "--");
    }

    #[test]
    fn test_format_timestamp_keeps_impossible_dates() {
        assert_eq!(format_timestamp(Some("2024-02-30 10:00:00"), true), "30/02/2024");
        assert_eq!(format_timestamp(Some("2024-02-30 22:15:00"), false), "30/02/2024, 10:15 PM");
    }

    #[test]
    fn test_logo_url() {
        assert_eq!(
            logo_url("https://cdn.example.com/AMC/", Some("HDFC")),
            Some("https://cdn.example.com/AMC/HDFC.png".to_string())
        );
        assert_eq!(logo_url("https://cdn.example.com", None), None);
    }

    #[test]
    fn test_purchase_minimum() {
        assert_eq!(format_purchase_minimum(Some("Y"), Metric::new(dec!(500))), "₹500");
        assert_eq!(format_purchase_minimum(Some("N"), Metric::new(dec!(500))), "N/A");
        assert_eq!(format_purchase_minimum(Some("Y"), Metric::missing()), "N/A");
    }
}
