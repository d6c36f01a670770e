//! Property tests for the projection loop.

use proptest::prelude::*;

use growth_projector::models::{Currency, DurationUnit, ProjectionInput};
use growth_projector::projector::{project_in_year, round_cents};

const YEAR: i32 = 2026;

fn unit() -> impl Strategy<Value = DurationUnit> {
    prop_oneof![Just(DurationUnit::Months), Just(DurationUnit::Years)]
}

fn input() -> impl Strategy<Value = ProjectionInput> {
    (0.0..1e9_f64, 1.0..600.0_f64, unit(), 0.0..100.0_f64).prop_map(|(amount, duration, unit, rate)| {
        let duration = match unit {
            DurationUnit::Years => duration / 12.0,
            DurationUnit::Months => duration,
        };
        ProjectionInput::new(amount, duration, unit, rate, Currency::Usd)
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Growth never drops below the starting amount.
    #[test]
    fn property_final_value_at_least_start(input in input()) {
        let result = project_in_year(&input, YEAR);
        prop_assert!(result.final_value >= input.start_amount);
        prop_assert!(result.total_interest >= 0.0);
    }

    /// PROPERTY: A zero rate leaves capital untouched.
    #[test]
    fn property_zero_rate_is_flat(amount in 0.0..1e9_f64, months in 1.0..600.0_f64) {
        let input = ProjectionInput::new(amount, months, DurationUnit::Months, 0.0, Currency::Eur);
        let result = project_in_year(&input, YEAR);
        prop_assert_eq!(result.final_value, amount);
        prop_assert_eq!(result.total_interest, 0.0);
    }

    /// PROPERTY: Interest is exactly the gain over principal.
    #[test]
    fn property_interest_is_gain(input in input()) {
        let result = project_in_year(&input, YEAR);
        prop_assert_eq!(
            result.total_interest,
            (result.final_value - input.start_amount).max(0.0)
        );
    }

    /// PROPERTY: The series is non-empty, ends on the rounded final value,
    /// and its year labels start at the first year and never decrease.
    #[test]
    fn property_series_shape(input in input()) {
        let result = project_in_year(&input, YEAR);
        prop_assert!(!result.series.is_empty());

        let last = &result.series[result.series.len() - 1];
        prop_assert_eq!(last.value, round_cents(result.final_value));

        let years: Vec<i32> = result.series.iter().map(|p| p.label.parse().unwrap()).collect();
        prop_assert_eq!(years[0], YEAR);
        prop_assert!(years.windows(2).all(|w| w[0] <= w[1]));
    }

    /// PROPERTY: Sampled values never decrease over time.
    #[test]
    fn property_series_values_non_decreasing(input in input()) {
        let result = project_in_year(&input, YEAR);
        prop_assert!(result.series.windows(2).all(|w| w[0].value <= w[1].value));
    }

    /// PROPERTY: Projection is a pure function of its input.
    #[test]
    fn property_projection_is_idempotent(input in input()) {
        prop_assert_eq!(project_in_year(&input, YEAR), project_in_year(&input, YEAR));
    }

    /// PROPERTY: A zero starting amount stays zero at any rate.
    #[test]
    fn property_zero_start_stays_zero(rate in 0.0..100.0_f64, months in 1.0..600.0_f64) {
        let input = ProjectionInput::new(0.0, months, DurationUnit::Months, rate, Currency::Ils);
        let result = project_in_year(&input, YEAR);
        prop_assert_eq!(result.final_value, 0.0);
        prop_assert_eq!(result.total_interest, 0.0);
    }
}

#[test]
fn single_month_has_one_sample_in_first_year() {
    let input = ProjectionInput::new(5_000.0, 1.0, DurationUnit::Months, 7.0, Currency::Usd);
    let result = project_in_year(&input, YEAR);
    assert_eq!(result.series.len(), 1);
    assert_eq!(result.series[0].label, YEAR.to_string());
}
