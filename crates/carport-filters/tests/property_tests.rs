//! Property-based tests for the torque limiter and speed filter

use carport_filters::prelude::*;
use proptest::prelude::*;

const LIMITS: TorqueLimits = TorqueLimits::chrysler();

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn prop_magnitude_bound(
        requested in -5000.0f32..5000.0,
        previous in -400i32..400,
        live in -1000.0f32..1000.0,
    ) {
        let result = limit_steer_torque(requested, previous, live, &LIMITS);
        prop_assert!(result.applied.abs() <= LIMITS.max);
    }

    #[test]
    fn prop_rate_bound_without_live_torque(
        requested in -1000.0f32..1000.0,
        previous in -261i32..=261,
    ) {
        let result = limit_steer_torque(requested, previous, 0.0, &LIMITS);
        prop_assert!((result.applied - previous).abs() <= LIMITS.max_step());
    }

    #[test]
    fn prop_rate_limited_flag_matches_change(
        requested in -1000.0f32..1000.0,
        previous in -261i32..=261,
        live in -300.0f32..300.0,
    ) {
        let result = limit_steer_torque(requested, previous, live, &LIMITS);
        prop_assert_eq!(result.rate_limited, result.applied != requested.round() as i32);
    }

    #[test]
    fn prop_driver_override_never_pushes_toward_request(
        requested in 1.0f32..261.0,
        previous in -261i32..=261,
        live in -1000.0f32..-121.0,
    ) {
        let result = limit_steer_torque(requested, previous, live, &LIMITS);
        prop_assert!(result.applied <= previous.max(0));
        prop_assert!(result.applied <= previous || result.applied == 0);
    }

    #[test]
    fn prop_limiter_is_deterministic(
        requested in -1000.0f32..1000.0,
        previous in -261i32..=261,
        live in -300.0f32..300.0,
    ) {
        let a = limit_steer_torque(requested, previous, live, &LIMITS);
        let b = limit_steer_torque(requested, previous, live, &LIMITS);
        prop_assert_eq!(a, b);
    }

    #[test]
    fn prop_speed_filter_finite(samples in proptest::collection::vec(0.0f32..60.0, 1..200)) {
        let mut filter = SpeedFilterState::new();
        for raw in samples {
            let estimate = filter.update(raw);
            prop_assert!(estimate.speed.is_finite());
            prop_assert!(estimate.accel.is_finite());
        }
    }
}

#[test]
fn limiter_idempotent_under_no_input() {
    for _ in 0..10 {
        assert_eq!(limit_steer_torque(0.0, 0, 0.0, &LIMITS).applied, 0);
    }
}
