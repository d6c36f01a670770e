//! Core data models
//!
//! Defines the values that flow through a projection:
//! - `ProjectionInput`: normalized calculator fields
//! - `ProjectionResult`: final value, accrued interest and the sampled series
//! - Supporting enums: `Currency`, `DurationUnit`

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ProjectorError;

/// Currency the projection is denominated in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// Israeli new shekel
    #[default]
    Ils,
    /// US dollar
    Usd,
    /// Euro
    Eur,
}

impl Currency {
    pub const ALL: [Currency; 3] = [Currency::Ils, Currency::Usd, Currency::Eur];

    /// ISO 4217 code
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Ils => "ILS",
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
        }
    }

    /// BCP 47 locale used when formatting amounts in this currency
    pub fn locale(&self) -> &'static str {
        match self {
            Currency::Ils => "he-IL",
            Currency::Usd => "en-US",
            Currency::Eur => "de-DE",
        }
    }
}

impl FromStr for Currency {
    type Err = ProjectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "ILS" => Ok(Currency::Ils),
            "USD" => Ok(Currency::Usd),
            "EUR" => Ok(Currency::Eur),
            _ => Err(ProjectorError::UnknownCurrency {
                code: s.trim().to_string(),
            }),
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Unit the duration field is expressed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DurationUnit {
    #[default]
    Months,
    Years,
}

impl DurationUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            DurationUnit::Months => "months",
            DurationUnit::Years => "years",
        }
    }
}

impl FromStr for DurationUnit {
    type Err = ProjectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "months" | "month" | "m" => Ok(DurationUnit::Months),
            "years" | "year" | "y" => Ok(DurationUnit::Years),
            _ => Err(ProjectorError::UnknownDurationUnit {
                unit: s.trim().to_string(),
            }),
        }
    }
}

impl fmt::Display for DurationUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Largest accepted starting amount
pub const MAX_START_AMOUNT: f64 = 1e15;

/// Longest accepted duration, in months (100 years)
pub const MAX_DURATION_MONTHS: f64 = 1200.0;

/// Highest accepted annual rate, in percent
pub const MAX_ANNUAL_RATE_PERCENT: f64 = 1000.0;

/// Normalized calculator input.
///
/// Values are expected to already lie within their bounds; use
/// [`ProjectionInput::new`] or the input normalizer to guarantee that.
/// At the upper bounds every projection stays finite.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionInput {
    /// Starting capital, `0..=MAX_START_AMOUNT`
    pub start_amount: f64,
    /// Duration in `duration_unit`, `>= 1` and at most `MAX_DURATION_MONTHS`
    pub duration_value: f64,
    pub duration_unit: DurationUnit,
    /// Annual effective rate of return in percent, `0..=MAX_ANNUAL_RATE_PERCENT`
    pub annual_rate_percent: f64,
    pub currency: Currency,
}

impl ProjectionInput {
    /// Build an input, clamping every numeric field into its bounds.
    ///
    /// NaN is treated like a missing value (0, or 1 for the duration).
    pub fn new(
        start_amount: f64,
        duration_value: f64,
        duration_unit: DurationUnit,
        annual_rate_percent: f64,
        currency: Currency,
    ) -> Self {
        let max_duration = match duration_unit {
            DurationUnit::Years => MAX_DURATION_MONTHS / 12.0,
            DurationUnit::Months => MAX_DURATION_MONTHS,
        };
        Self {
            start_amount: clamp(start_amount, 0.0, MAX_START_AMOUNT),
            duration_value: clamp(duration_value, 1.0, max_duration),
            duration_unit,
            annual_rate_percent: clamp(annual_rate_percent, 0.0, MAX_ANNUAL_RATE_PERCENT),
            currency,
        }
    }

    /// Duration expressed in months (may be fractional)
    pub fn months(&self) -> f64 {
        match self.duration_unit {
            DurationUnit::Years => self.duration_value * 12.0,
            DurationUnit::Months => self.duration_value,
        }
    }
}

impl Default for ProjectionInput {
    fn default() -> Self {
        Self::new(0.0, 1.0, DurationUnit::Months, 0.0, Currency::default())
    }
}

/// `value` limited to `min..=max`; NaN becomes `min`
pub(crate) fn clamp(value: f64, min: f64, max: f64) -> f64 {
    if value.is_nan() {
        min
    } else {
        value.clamp(min, max)
    }
}

/// One sampled point of the growth series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    /// Calendar year the sample falls in
    pub label: String,
    /// Running total rounded to 2 decimals
    pub value: f64,
}

/// Output of a projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionResult {
    pub final_value: f64,
    pub total_interest: f64,
    pub series: Vec<SeriesPoint>,
}

impl ProjectionResult {
    /// The sampled values in order, for charting
    pub fn values(&self) -> Vec<f64> {
        self.series.iter().map(|p| p.value).collect()
    }

    /// The sample labels in order, for charting
    pub fn labels(&self) -> Vec<String> {
        self.series.iter().map(|p| p.label.clone()).collect()
    }
}

/// Principal/growth split shown by the proportion chart
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Breakdown {
    pub principal: f64,
    pub growth: f64,
}

impl Breakdown {
    pub fn new(input: &ProjectionInput, result: &ProjectionResult) -> Self {
        Self {
            principal: input.start_amount,
            growth: result.total_interest,
        }
    }

    /// Share of the final value that came from growth, in `[0, 1]`
    pub fn growth_share(&self) -> f64 {
        let total = self.principal + self.growth;
        if total > 0.0 {
            self.growth / total
        } else {
            0.0
        }
    }
}

/// Everything one recompute produces
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Projection {
    pub input: ProjectionInput,
    pub result: ProjectionResult,
    pub breakdown: Breakdown,
}
