// ABOUTME: Pure formula functions for training statistics
// ABOUTME: Distance from action counters, mean speeds, and per-discipline calorie models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Trainstat Contributors

//! Pure formula functions.
//!
//! Every function here is a total, side-effect-free calculation over plain
//! numbers. A zero session duration is guarded and yields a mean speed of
//! `0.0`; every other degenerate input (zero height, negative weight, ...)
//! flows through the arithmetic unvalidated, per the crate contract.

use crate::constants::{conversions, running, stride, swimming, walking};

/// Distance in kilometres covered by `action_count` actions.
///
/// Formula: `action_count x 0.65 / 1000`
///
/// One action (step or stroke) advances the athlete by the fixed mean
/// stride length of 0.65 m.
#[must_use]
pub fn distance(action_count: u32) -> f64 {
    f64::from(action_count) * stride::ACTION_LENGTH_M / conversions::M_IN_KM
}

/// Mean speed in km/h for stride-based disciplines (running, walking).
///
/// Formula: `distance_km / duration_hours`
///
/// A zero duration yields `0.0` rather than an error or a non-finite value.
#[must_use]
pub fn mean_speed(distance_km: f64, duration_hours: f64) -> f64 {
    if duration_hours == 0.0 {
        return 0.0;
    }
    distance_km / duration_hours
}

/// Mean swimming speed in km/h from pool geometry.
///
/// Formula: `pool_length_m x pool_laps / 1000 / duration_hours`
///
/// Same zero-duration guard as [`mean_speed`].
#[must_use]
pub fn swimming_mean_speed(pool_length_m: u32, pool_laps: u32, duration_hours: f64) -> f64 {
    if duration_hours == 0.0 {
        return 0.0;
    }
    f64::from(pool_length_m) * f64::from(pool_laps) / conversions::M_IN_KM / duration_hours
}

/// Calories burned while running.
///
/// Formula: `(18 x speed + 1.79) x weight / 1000 x duration x 60`
#[must_use]
pub fn running_calories(weight_kg: f64, duration_hours: f64, mean_speed_kmh: f64) -> f64 {
    (running::SPEED_MULTIPLIER * mean_speed_kmh + running::SPEED_SHIFT) * weight_kg
        / conversions::M_IN_KM
        * duration_hours
        * conversions::MIN_IN_H
}

/// Calories burned while walking.
///
/// The speed is converted to m/s (x 0.278) and the height to metres (/ 100),
/// then:
///
/// `(0.035 x weight + speed_ms^2 / height_m x 0.029 x weight) x duration x 60`
///
/// The quadratic speed-over-height term captures the nonlinear cost of a
/// faster gait. A zero height makes the quotient non-finite; inputs are the
/// caller's responsibility.
#[must_use]
pub fn walking_calories(
    duration_hours: f64,
    weight_kg: f64,
    height_cm: f64,
    mean_speed_kmh: f64,
) -> f64 {
    let speed_ms = mean_speed_kmh * conversions::KMH_TO_MS;
    let height_m = height_cm / conversions::CM_IN_M;

    (walking::WEIGHT_MULTIPLIER * weight_kg
        + (speed_ms.powi(2) / height_m) * walking::SPEED_HEIGHT_MULTIPLIER * weight_kg)
        * duration_hours
        * conversions::MIN_IN_H
}

/// Calories burned while swimming.
///
/// Formula: `(speed + 1.1) x 2 x weight x duration`
///
/// A simpler linear model than the land disciplines.
#[must_use]
pub fn swimming_calories(duration_hours: f64, weight_kg: f64, mean_speed_kmh: f64) -> f64 {
    (mean_speed_kmh + swimming::SPEED_SHIFT)
        * swimming::WEIGHT_MULTIPLIER
        * weight_kg
        * duration_hours
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn distance_follows_stride_length() {
        assert!((distance(0) - 0.0).abs() < EPSILON);
        assert!((distance(1000) - 0.65).abs() < EPSILON);
        assert!((distance(10_000) - 6.5).abs() < EPSILON);
    }

    #[test]
    fn distance_is_monotonically_non_decreasing() {
        let mut previous = distance(0);
        for count in (0..50_000).step_by(777) {
            let current = distance(count);
            assert!(current >= previous);
            previous = current;
        }
    }

    #[test]
    fn mean_speed_divides_distance_by_duration() {
        assert!((mean_speed(10.0, 2.0) - 5.0).abs() < EPSILON);
    }

    #[test]
    fn zero_duration_yields_zero_speed() {
        assert!((mean_speed(42.0, 0.0) - 0.0).abs() < EPSILON);
        assert!((swimming_mean_speed(25, 40, 0.0) - 0.0).abs() < EPSILON);
    }

    #[test]
    fn swimming_speed_uses_pool_geometry() {
        // 25 m pool, 40 laps = 1 km; half an hour -> 2 km/h
        assert!((swimming_mean_speed(25, 40, 0.5) - 2.0).abs() < EPSILON);
    }

    #[test]
    fn running_calories_match_formula() {
        let expected = (18.0 * 10.0 + 1.79) * 70.0 / 1000.0 * 1.0 * 60.0;
        assert!((running_calories(70.0, 1.0, 10.0) - expected).abs() < EPSILON);
    }

    #[test]
    fn walking_calories_match_formula() {
        let speed_ms = 5.0 * 0.278;
        let height_m = 1.75;
        let expected =
            (0.035 * 70.0 + (speed_ms * speed_ms / height_m) * 0.029 * 70.0) * 1.0 * 60.0;
        assert!((walking_calories(1.0, 70.0, 175.0, 5.0) - expected).abs() < EPSILON);
    }

    #[test]
    fn swimming_calories_match_formula() {
        // (2 + 1.1) x 2 x 70 x 1 = 434
        assert!((swimming_calories(1.0, 70.0, 2.0) - 434.0).abs() < 1e-6);
    }

    #[test]
    fn zero_duration_yields_zero_calories_for_duration_scaled_models() {
        assert!((running_calories(70.0, 0.0, 0.0) - 0.0).abs() < EPSILON);
        assert!((walking_calories(0.0, 70.0, 175.0, 0.0) - 0.0).abs() < EPSILON);
        assert!((swimming_calories(0.0, 70.0, 0.0) - 0.0).abs() < EPSILON);
    }
}
