//! Compound-interest projection
//!
//! Converts an annual effective rate into its monthly-equivalent compounding
//! rate, compounds month by month, and samples the running total once per
//! year plus on the final month.

use chrono::Datelike;

use crate::models::{ProjectionInput, ProjectionResult, SeriesPoint, MAX_DURATION_MONTHS};

/// Months between yearly samples
const MONTHS_PER_YEAR: u64 = 12;

/// Monthly compounding rate equivalent to `annual_rate_percent` per year.
///
/// `(1 + r)^(1/12) - 1`, so twelve compoundings reproduce the annual rate.
pub fn monthly_equivalent_rate(annual_rate_percent: f64) -> f64 {
    (1.0 + annual_rate_percent / 100.0).powf(1.0 / 12.0) - 1.0
}

/// Monthly rate under the nominal-APR reading (`r / 12`).
///
/// Only used for comparison output; projections use
/// [`monthly_equivalent_rate`].
pub fn nominal_monthly_rate(annual_rate_percent: f64) -> f64 {
    annual_rate_percent / 100.0 / 12.0
}

/// Number of compounding iterations for `months`.
///
/// Fractional durations round up so the final sample always exists.
/// The count never exceeds [`MAX_DURATION_MONTHS`], even for inputs built
/// without [`ProjectionInput::new`].
pub fn iteration_count(months: f64) -> u64 {
    if months.is_nan() || months <= 1.0 {
        1
    } else {
        months.min(MAX_DURATION_MONTHS).ceil() as u64
    }
}

/// Round to 2 decimal places, half away from zero
pub fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Project using the current local calendar year as the first label
pub fn project(input: &ProjectionInput) -> ProjectionResult {
    project_in_year(input, chrono::Local::now().year())
}

/// Project with an explicit start year
pub fn project_in_year(input: &ProjectionInput, start_year: i32) -> ProjectionResult {
    let monthly_rate = monthly_equivalent_rate(input.annual_rate_percent);
    let iterations = iteration_count(input.months());
    let last = iterations - 1;

    let mut total = input.start_amount;
    let mut series = Vec::new();

    for i in 0..iterations {
        total *= 1.0 + monthly_rate;
        if i % MONTHS_PER_YEAR == 0 || i == last {
            let year = i64::from(start_year) + (i / MONTHS_PER_YEAR) as i64;
            series.push(SeriesPoint {
                label: year.to_string(),
                value: round_cents(total),
            });
        }
    }

    let total_interest = (total - input.start_amount).max(0.0);

    tracing::debug!(
        months = iterations,
        monthly_rate,
        samples = series.len(),
        final_value = total,
        "projected growth"
    );

    ProjectionResult {
        final_value: total,
        total_interest,
        series,
    }
}
