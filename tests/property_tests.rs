//! Property-based tests for the intersection phase machine.
//!
//! These tests use proptest to verify the safety and timing properties
//! hold across many randomly generated configurations.

use chrono::TimeDelta;
use proptest::prelude::*;
use std::time::Duration;
use stoplight::core::LightState;
use stoplight::intersection::{ConfigError, Intersection, Phase};

prop_compose! {
    fn valid_millis()(millis in 1..600_000i64) -> i64 {
        millis
    }
}

prop_compose! {
    fn non_positive_millis()(millis in -600_000..=0i64) -> i64 {
        millis
    }
}

fn intersection(green_ms: i64, yellow_ms: i64) -> Result<Intersection, ConfigError> {
    Intersection::new(
        "North-South",
        "East-West",
        TimeDelta::milliseconds(green_ms),
        TimeDelta::milliseconds(yellow_ms),
    )
}

proptest! {
    #[test]
    fn exactly_one_axis_permits_traffic(
        green in valid_millis(),
        yellow in valid_millis(),
        steps in 1..64usize,
    ) {
        let mut intersection = intersection(green, yellow).unwrap();

        for _ in 0..steps {
            let event = intersection.advance();
            prop_assert!(event.status().is_exclusive());
            prop_assert!(intersection.status().is_exclusive());
        }
    }

    #[test]
    fn phase_table_holds_for_any_timing(green in valid_millis(), yellow in valid_millis()) {
        let mut intersection = intersection(green, yellow).unwrap();
        let green = Duration::from_millis(green as u64);
        let yellow = Duration::from_millis(yellow as u64);

        let observed: Vec<_> = intersection
            .run_cycle()
            .into_iter()
            .map(|e| (e.status().as_pair(), e.hold))
            .collect();

        prop_assert_eq!(
            observed,
            vec![
                ((LightState::Green, LightState::Red), green),
                ((LightState::Yellow, LightState::Red), yellow),
                ((LightState::Red, LightState::Green), green),
                ((LightState::Red, LightState::Yellow), yellow),
            ]
        );
    }

    #[test]
    fn every_cycle_restarts_at_phase_one(
        green in valid_millis(),
        yellow in valid_millis(),
        cycles in 1..20u64,
    ) {
        let mut intersection = intersection(green, yellow).unwrap();

        for cycle in 1..=cycles {
            let events = intersection.run_cycle();
            prop_assert_eq!(events[0].phase, Phase::AxisAGo);
            prop_assert_eq!(events[0].status().as_pair(), (LightState::Green, LightState::Red));
            prop_assert_eq!(events[0].cycle, cycle);
        }
    }

    #[test]
    fn red_is_green_plus_yellow(green in valid_millis(), yellow in valid_millis()) {
        let intersection = intersection(green, yellow).unwrap();
        let timing = intersection.timing();

        prop_assert_eq!(timing.red(), timing.green() + timing.yellow());
    }

    #[test]
    fn each_axis_waits_exactly_red(green in valid_millis(), yellow in valid_millis()) {
        let mut intersection = intersection(green, yellow).unwrap();
        let red = intersection.timing().red();
        let events = intersection.run_cycle();

        let red_a: Duration = events
            .iter()
            .filter(|e| e.axis_a.to == LightState::Red)
            .map(|e| e.hold)
            .sum();
        let red_b: Duration = events
            .iter()
            .filter(|e| e.axis_b.to == LightState::Red)
            .map(|e| e.hold)
            .sum();

        prop_assert_eq!(red_a, red);
        prop_assert_eq!(red_b, red);
    }

    #[test]
    fn non_positive_green_is_rejected(green in non_positive_millis(), yellow in valid_millis()) {
        let result = intersection(green, yellow);
        prop_assert!(
            matches!(result, Err(ConfigError::InvalidConfiguration { .. })),
            "expected InvalidConfiguration error"
        );
    }

    #[test]
    fn non_positive_yellow_is_rejected(green in valid_millis(), yellow in non_positive_millis()) {
        let result = intersection(green, yellow);
        prop_assert!(
            matches!(result, Err(ConfigError::InvalidConfiguration { .. })),
            "expected InvalidConfiguration error"
        );
    }

    #[test]
    fn both_bad_durations_are_reported(
        green in non_positive_millis(),
        yellow in non_positive_millis(),
    ) {
        let error = intersection(green, yellow).unwrap_err();
        prop_assert_eq!(error.violations().len(), 2);
    }
}
