//! Properties that must hold for every input in the clamped domains
//!
//! These exercise the input model and engine over arbitrary raw edits,
//! including out-of-range and non-finite values.

use finde_roi::domain::{compute, Calculator, Catalog, InputChange};
use proptest::prelude::*;

// Property test generators
pub mod generators {
    use super::*;

    /// Raw numbers as an input field might deliver them
    pub fn raw_number() -> impl Strategy<Value = f64> {
        prop_oneof![
            8 => -100.0..3000.0f64,
            1 => Just(f64::NAN),
            1 => Just(f64::INFINITY),
        ]
    }

    /// Catalog ids, some known and some not
    pub fn catalog_id() -> impl Strategy<Value = String> {
        prop_oneof![
            Just("legal".to_string()),
            Just("consulting".to_string()),
            Just("growth".to_string()),
            Just("pilot".to_string()),
            Just("enterprise".to_string()),
            "[a-z]{1,10}",
        ]
    }

    /// A single edit
    pub fn input_change() -> impl Strategy<Value = InputChange> {
        prop_oneof![
            raw_number().prop_map(InputChange::HourlyRate),
            raw_number().prop_map(InputChange::TeamSize),
            raw_number().prop_map(InputChange::HoursSaved),
            raw_number().prop_map(InputChange::UsageWeeks),
            catalog_id().prop_map(InputChange::Industry),
            catalog_id().prop_map(InputChange::Plan),
        ]
    }
}

fn apply_all(changes: &[InputChange]) -> Calculator {
    let mut calculator = Calculator::new(Catalog::default());
    for change in changes {
        calculator.apply(change.clone());
    }
    calculator
}

proptest! {
    #[test]
    fn inputs_always_stay_in_domain(changes in prop::collection::vec(generators::input_change(), 0..30)) {
        let calculator = apply_all(&changes);
        let input = calculator.input();

        prop_assert!((20.0..=2000.0).contains(&input.hourly_rate.into_inner()));
        prop_assert!((1..=1000).contains(&input.team_size.into_inner()));
        prop_assert!((1.0..=60.0).contains(&input.hours_saved.into_inner()));
        prop_assert!((4..=52).contains(&input.usage_weeks.into_inner()));
    }

    #[test]
    fn annual_value_is_product_of_inputs(changes in prop::collection::vec(generators::input_change(), 0..30)) {
        let calculator = apply_all(&changes);
        let input = calculator.input();
        let metrics = calculator.metrics();

        let expected = input.hourly_rate.into_inner()
            * input.hours_saved.into_inner()
            * input.team_size.as_f64()
            * input.usage_weeks.as_f64();
        prop_assert!((metrics.annual_value - expected).abs() <= expected * 1e-12);
    }

    #[test]
    fn monthly_value_round_trips_to_annual(changes in prop::collection::vec(generators::input_change(), 0..30)) {
        let metrics = apply_all(&changes).metrics();
        let tolerance = metrics.annual_value * 1e-12;
        prop_assert!((metrics.monthly_value * 12.0 - metrics.annual_value).abs() <= tolerance);
    }

    #[test]
    fn every_metric_is_finite(changes in prop::collection::vec(generators::input_change(), 0..30)) {
        let metrics = apply_all(&changes).metrics();

        for value in [
            metrics.monthly_value,
            metrics.monthly_cost,
            metrics.monthly_net,
            metrics.annual_value,
            metrics.annual_cost,
            metrics.annual_net,
            metrics.roi,
            metrics.daily_value,
        ] {
            prop_assert!(value.is_finite());
        }
    }

    #[test]
    fn payback_is_reported_only_when_there_is_something_to_recover(
        changes in prop::collection::vec(generators::input_change(), 0..30)
    ) {
        let metrics = apply_all(&changes).metrics();

        match metrics.payback_months {
            Some(months) => {
                prop_assert!(months >= 1);
                prop_assert!(metrics.monthly_net > 0.0);
                prop_assert!(metrics.annual_cost > 0.0);
            }
            None => {
                prop_assert!(metrics.monthly_net <= 0.0 || metrics.annual_cost == 0.0);
            }
        }
    }

    #[test]
    fn free_tier_never_reports_cost_or_roi(changes in prop::collection::vec(generators::input_change(), 0..30)) {
        let mut calculator = apply_all(&changes);
        calculator.select_plan("pilot");
        let report = calculator.report();

        prop_assert_eq!(report.metrics.annual_cost, 0.0);
        prop_assert_eq!(report.metrics.roi, 0.0);
        prop_assert!(report
            .advisories
            .iter()
            .any(|advisory| advisory.to_string().contains("60 days")));
    }

    #[test]
    fn replaying_final_state_gives_same_metrics(changes in prop::collection::vec(generators::input_change(), 0..30)) {
        let calculator = apply_all(&changes);
        let input = calculator.input().clone();

        // Skip every intermediate state and apply only the final values
        let replayed = apply_all(&[
            InputChange::Industry(input.industry_id.to_string()),
            InputChange::Plan(input.plan_id.to_string()),
            InputChange::HourlyRate(input.hourly_rate.into_inner()),
            InputChange::TeamSize(input.team_size.as_f64()),
            InputChange::HoursSaved(input.hours_saved.into_inner()),
            InputChange::UsageWeeks(input.usage_weeks.as_f64()),
        ]);

        prop_assert_eq!(replayed.input(), &input);
        prop_assert_eq!(replayed.metrics(), calculator.metrics());
        prop_assert_eq!(compute(&input, calculator.active_plan()), calculator.metrics());
    }
}
