//! Property tests for field normalization.

use proptest::prelude::*;

use growth_projector::input::{parse_leading_number, parse_number_or};
use growth_projector::models::{
    Currency, MAX_ANNUAL_RATE_PERCENT, MAX_DURATION_MONTHS, MAX_START_AMOUNT,
};
use growth_projector::{FieldValues, InputNormalizer};

fn field_text() -> impl Strategy<Value = String> {
    prop_oneof![
        "(?s).{0,24}",
        "[ ]{0,2}-?[0-9]{0,6}(\\.[0-9]{0,3})?([eE][+-]?[0-9]{0,3})?[a-z%]{0,3}",
    ]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Normalization never panics and always honors lower bounds.
    #[test]
    fn property_normalized_input_is_in_bounds(
        amount in field_text(),
        duration in field_text(),
        unit in field_text(),
        rate in field_text(),
        currency in field_text(),
    ) {
        let fields = FieldValues::new(amount, duration, unit, rate, currency);
        let input = InputNormalizer::new(Currency::Usd).normalize(&fields);

        prop_assert!(input.start_amount >= 0.0);
        prop_assert!(input.duration_value >= 1.0);
        prop_assert!(input.annual_rate_percent >= 0.0);
        prop_assert!(input.start_amount <= MAX_START_AMOUNT);
        prop_assert!(input.months() <= MAX_DURATION_MONTHS);
        prop_assert!(input.annual_rate_percent <= MAX_ANNUAL_RATE_PERCENT);
        prop_assert!(!input.start_amount.is_nan());
        prop_assert!(!input.annual_rate_percent.is_nan());
    }

    /// PROPERTY: Leading-number parsing never panics on arbitrary text.
    #[test]
    fn property_parse_leading_number_never_panics(text in "(?s).{0,64}") {
        let _ = parse_leading_number(&text);
    }

    /// PROPERTY: Plain decimals parse to themselves.
    #[test]
    fn property_plain_numbers_parse_exactly(value in -1e12..1e12_f64) {
        let text = value.to_string();
        prop_assert_eq!(parse_number_or(&text, -1.0), value);
    }

    /// PROPERTY: Trailing garbage after a number is ignored.
    #[test]
    fn property_trailing_text_is_ignored(value in 0u32..1_000_000, suffix in "[a-zA-Z%]{1,6}") {
        let text = format!("{}{}", value, suffix);
        prop_assert_eq!(parse_leading_number(&text), Some(f64::from(value)));
    }
}
