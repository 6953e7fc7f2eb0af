//! Property-based tests of run invariants

use ferment_rs::physics::FluxVector;
use ferment_rs::{
    FermentationRun, Objective, OneStageFermentation, Settings, TwoStageFermentation,
};
use proptest::prelude::*;

fn flux_strategy() -> impl Strategy<Value = FluxVector> {
    (0.0f64..1.0, -5.0f64..0.0, -1.0f64..2.0)
        .prop_map(|(growth, uptake, product)| FluxVector::from([growth, uptake, product]))
}

fn settings_strategy() -> impl Strategy<Value = Settings> {
    (0.01f64..1.0, 0.0f64..20.0, 0.0f64..5.0, 1.0f64..15.0, 2usize..40).prop_map(
        |(biomass, substrate, product, time_end, points)| Settings {
            initial_biomass: biomass,
            initial_substrate: substrate,
            initial_product: product,
            time_end,
            num_timepoints: points,
            integration_substeps: 10,
            ..Settings::default()
        },
    )
}

fn objective_name_strategy() -> impl Strategy<Value = String> {
    prop::sample::select(vec![
        "batch_productivity",
        "batch_yield",
        "batch_titer",
        "dupont_metric",
        "linear_combination",
        "not_a_metric",
        "",
    ])
    .prop_map(str::to_string)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    /// Property: substrate never drops below zero at any sample
    #[test]
    fn prop_one_stage_substrate_non_negative(
        fluxes in flux_strategy(),
        settings in settings_strategy()
    ) {
        let run = OneStageFermentation::new(fluxes, &settings).unwrap();

        for state in run.trajectory().states() {
            prop_assert!(state.substrate() >= 0.0, "substrate {}", state.substrate());
        }
        prop_assert!(run.metrics().batch_yield.is_finite());
        prop_assert!(run.time_end() <= settings.time_end);
    }

    /// Property: two-stage runs keep the switch time in range, never store
    /// negative core metrics and never let substrate go negative
    #[test]
    fn prop_two_stage_invariants(
        stage_one in flux_strategy(),
        stage_two in flux_strategy(),
        settings in settings_strategy(),
        objective in objective_name_strategy()
    ) {
        let settings = Settings { objective, ..settings };
        let run = TwoStageFermentation::new(stage_one, stage_two, &settings).unwrap();

        let switch_time = run.optimal_switch_time();
        prop_assert!((0.0..=settings.time_end).contains(&switch_time), "switch {}", switch_time);

        let metrics = run.metrics();
        prop_assert!(metrics.batch_productivity >= 0.0);
        prop_assert!(metrics.batch_yield >= 0.0);
        prop_assert!(metrics.batch_titer >= 0.0);
        prop_assert!(metrics.batch_yield.is_finite());

        for state in run.trajectory().states() {
            prop_assert!(state.substrate() >= 0.0);
        }

        let expected = Objective::from_name(&settings.objective).unwrap_or(Objective::DEFAULT);
        prop_assert_eq!(run.objective(), expected);
        prop_assert_eq!(run.objective_value(), metrics.get(expected));
    }

    /// Property: without substrate nothing happens
    #[test]
    fn prop_no_substrate_no_yield(
        fluxes in flux_strategy(),
        settings in settings_strategy()
    ) {
        let settings = Settings { initial_substrate: 0.0, ..settings };
        let run = OneStageFermentation::new(fluxes, &settings).unwrap();

        prop_assert_eq!(run.metrics().batch_yield, 0.0);
        prop_assert_eq!(run.final_state(), run.trajectory().initial_state());
    }
}
