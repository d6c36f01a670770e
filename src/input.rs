//! Normalization of raw calculator fields
//!
//! Field text is parsed leniently (longest leading number wins), missing or
//! unparseable values fall back to their defaults, and the result is clamped
//! to each field's lower bound. Nothing here rejects input.

use serde::{Deserialize, Serialize};

use crate::models::{Currency, DurationUnit, ProjectionInput};

/// Raw text of the calculator fields, as a form would hold them
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldValues {
    pub start_amount: String,
    pub duration: String,
    pub duration_unit: String,
    pub rate: String,
    pub currency: String,
}

impl FieldValues {
    pub fn new(
        start_amount: impl Into<String>,
        duration: impl Into<String>,
        duration_unit: impl Into<String>,
        rate: impl Into<String>,
        currency: impl Into<String>,
    ) -> Self {
        Self {
            start_amount: start_amount.into(),
            duration: duration.into(),
            duration_unit: duration_unit.into(),
            rate: rate.into(),
            currency: currency.into(),
        }
    }
}

/// Turns `FieldValues` into a `ProjectionInput`
#[derive(Debug, Clone, Copy, Default)]
pub struct InputNormalizer {
    /// Used when the currency field does not name a supported currency
    pub fallback_currency: Currency,
}

impl InputNormalizer {
    pub fn new(fallback_currency: Currency) -> Self {
        Self { fallback_currency }
    }

    pub fn normalize(&self, fields: &FieldValues) -> ProjectionInput {
        let start_amount = parse_number_or(&fields.start_amount, 0.0);
        let duration_value = parse_number_or(&fields.duration, 1.0);
        let rate = parse_number_or(&fields.rate, 0.0);

        let duration_unit = if fields.duration_unit.trim().eq_ignore_ascii_case("years") {
            DurationUnit::Years
        } else {
            DurationUnit::Months
        };

        let currency = match fields.currency.parse::<Currency>() {
            Ok(currency) => currency,
            Err(_) => {
                tracing::warn!(
                    code = %fields.currency,
                    fallback = %self.fallback_currency,
                    "unsupported currency, using fallback"
                );
                self.fallback_currency
            }
        };

        ProjectionInput::new(start_amount, duration_value, duration_unit, rate, currency)
    }
}

/// Parse the leading number of `text`, or return `fallback`.
///
/// Leading whitespace is skipped and trailing garbage ignored, so `"12abc"`
/// is 12 and `" .5"` is 0.5. Empty, non-numeric and non-finite text yields
/// `fallback`.
pub fn parse_number_or(text: &str, fallback: f64) -> f64 {
    parse_leading_number(text)
        .filter(|v| v.is_finite())
        .unwrap_or(fallback)
}

/// Longest numeric prefix of `text` (after leading whitespace), if any
pub fn parse_leading_number(text: &str) -> Option<f64> {
    let s = text.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        let frac_digits = frac_end - frac_start;
        if digits + frac_digits > 0 {
            end = frac_end;
            digits += frac_digits;
        }
    }

    if digits == 0 {
        return None;
    }

    // Exponent only counts when at least one digit follows it.
    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+') | Some(b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse::<f64>().ok()
}
