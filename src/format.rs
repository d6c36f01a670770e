//! Locale-aware currency formatting
//!
//! Whole-unit amounts only (no fractional digits). Each supported currency
//! maps to one fixed locale pattern.

use crate::models::Currency;

const RLM: char = '\u{200F}';
const NBSP: char = '\u{00A0}';
const INFINITY_SIGN: char = '∞';

/// Where the currency symbol sits relative to the number
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SymbolPosition {
    Prefix,
    Suffix,
}

/// Number/currency layout for a locale
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct LocalePattern {
    group_separator: char,
    symbol: &'static str,
    position: SymbolPosition,
    /// Inserted between number and a suffix symbol
    symbol_gap: Option<char>,
    /// Bidi mark placed before everything else
    direction_mark: Option<char>,
}

const HE_IL: LocalePattern = LocalePattern {
    group_separator: ',',
    symbol: "₪",
    position: SymbolPosition::Suffix,
    symbol_gap: Some(NBSP),
    direction_mark: Some(RLM),
};

const EN_US: LocalePattern = LocalePattern {
    group_separator: ',',
    symbol: "$",
    position: SymbolPosition::Prefix,
    symbol_gap: None,
    direction_mark: None,
};

const DE_DE: LocalePattern = LocalePattern {
    group_separator: '.',
    symbol: "€",
    position: SymbolPosition::Suffix,
    symbol_gap: Some(NBSP),
    direction_mark: None,
};

fn pattern_for(currency: Currency) -> &'static LocalePattern {
    match currency {
        Currency::Ils => &HE_IL,
        Currency::Usd => &EN_US,
        Currency::Eur => &DE_DE,
    }
}

/// Format `value` in `currency` with zero fractional digits.
///
/// Rounds half away from zero. Infinities print as `∞` with their sign;
/// NaN formats as zero.
pub fn format_currency(value: f64, currency: Currency) -> String {
    let pattern = pattern_for(currency);
    let rounded = if value.is_nan() { 0.0 } else { value.round() };
    let negative = rounded < 0.0;
    let digits = if rounded.is_infinite() {
        INFINITY_SIGN.to_string()
    } else {
        group_digits(rounded.abs(), pattern.group_separator)
    };

    let mut out = String::with_capacity(digits.len() + 8);
    if let Some(mark) = pattern.direction_mark {
        out.push(mark);
    }
    if negative {
        out.push('-');
    }
    match pattern.position {
        SymbolPosition::Prefix => {
            out.push_str(pattern.symbol);
            out.push_str(&digits);
        }
        SymbolPosition::Suffix => {
            out.push_str(&digits);
            if let Some(gap) = pattern.symbol_gap {
                out.push(gap);
            }
            out.push_str(pattern.symbol);
        }
    }
    out
}

fn group_digits(whole: f64, separator: char) -> String {
    let raw = format!("{:.0}", whole);
    let len = raw.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in raw.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(c);
    }
    out
}
