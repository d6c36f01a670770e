//! Property tests for currency formatting.

use proptest::prelude::*;

use growth_projector::format_currency;
use growth_projector::models::Currency;

fn currency() -> impl Strategy<Value = Currency> {
    prop_oneof![Just(Currency::Ils), Just(Currency::Usd), Just(Currency::Eur)]
}

proptest! {
    /// PROPERTY: Formatting never panics, including non-finite values.
    #[test]
    fn property_format_never_panics(value in proptest::num::f64::ANY, currency in currency()) {
        let _ = format_currency(value, currency);
    }

    /// PROPERTY: Digits in the output spell the rounded whole amount.
    #[test]
    fn property_digits_match_rounded_value(value in 0.0..1e12_f64, currency in currency()) {
        let text = format_currency(value, currency);
        let digits: String = text.chars().filter(char::is_ascii_digit).collect();
        prop_assert_eq!(digits, format!("{}", value.round() as u64));
    }

    /// PROPERTY: The currency symbol is always present.
    #[test]
    fn property_symbol_present(value in -1e9..1e9_f64, currency in currency()) {
        let text = format_currency(value, currency);
        let symbol = match currency {
            Currency::Ils => '₪',
            Currency::Usd => '$',
            Currency::Eur => '€',
        };
        prop_assert!(text.contains(symbol));
    }
}
