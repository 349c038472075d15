// ABOUTME: Kind dispatch and report rendering for training sessions
// ABOUTME: Routes each training kind through its distance, speed, and calorie pipeline
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Trainstat Contributors

//! Kind dispatch and report rendering.
//!
//! [`summarize`] is the typed pipeline: it routes a [`SessionInput`] through
//! the formula set selected by its [`TrainingKind`] and returns the computed
//! [`TrainingSummary`]. [`generate_report`] is the thin string entry point
//! over it, taking the raw counters plus a kind tag and returning either the
//! rendered template or the [`UNKNOWN_TRAINING_TYPE`] sentinel.

use std::str::FromStr;

use tracing::{debug, warn};

use crate::metrics;
use crate::models::{SessionInput, TrainingKind, TrainingSummary};

/// Sentinel returned by [`generate_report`] for an unrecognized kind tag.
pub const UNKNOWN_TRAINING_TYPE: &str = "unknown training type";

/// Compute the full statistics for one session.
///
/// Running and walking derive the mean speed from the stride-based distance;
/// swimming derives it from pool geometry. Each kind then applies its own
/// calorie model. Distance is always the stride-based value, strokes
/// included.
#[must_use]
pub fn summarize(input: &SessionInput) -> TrainingSummary {
    let distance_km = metrics::distance(input.action_count);

    let (mean_speed_kmh, calories_kcal) = match input.kind {
        TrainingKind::Running => {
            let speed = metrics::mean_speed(distance_km, input.duration_hours);
            let calories = metrics::running_calories(input.weight_kg, input.duration_hours, speed);
            (speed, calories)
        }
        TrainingKind::Walking => {
            let speed = metrics::mean_speed(distance_km, input.duration_hours);
            let calories = metrics::walking_calories(
                input.duration_hours,
                input.weight_kg,
                input.height_cm,
                speed,
            );
            (speed, calories)
        }
        TrainingKind::Swimming => {
            let speed = metrics::swimming_mean_speed(
                input.pool_length_m,
                input.pool_laps,
                input.duration_hours,
            );
            let calories = metrics::swimming_calories(input.duration_hours, input.weight_kg, speed);
            (speed, calories)
        }
    };

    debug!(
        kind = %input.kind,
        distance_km,
        mean_speed_kmh,
        calories_kcal,
        "session summarized"
    );

    TrainingSummary {
        kind: input.kind,
        duration_hours: input.duration_hours,
        distance_km,
        mean_speed_kmh,
        calories_kcal,
    }
}

/// Render the report string for raw session counters.
///
/// The parameters mirror the flat upstream contract: `height_cm` is only
/// read for walking, `pool_length_m`/`pool_laps` only for swimming; pass
/// zeros for the fields the discipline ignores. An unrecognized
/// `training_type` tag returns the [`UNKNOWN_TRAINING_TYPE`] sentinel
/// instead of an error.
#[must_use]
pub fn generate_report(
    action_count: u32,
    training_type: &str,
    duration_hours: f64,
    weight_kg: f64,
    height_cm: f64,
    pool_length_m: u32,
    pool_laps: u32,
) -> String {
    let Ok(kind) = TrainingKind::from_str(training_type) else {
        warn!(tag = training_type, "unknown training type tag");
        return UNKNOWN_TRAINING_TYPE.to_owned();
    };

    let input = SessionInput {
        action_count,
        kind,
        duration_hours,
        weight_kg,
        height_cm,
        pool_length_m,
        pool_laps,
    };

    summarize(&input).to_string()
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn walking_input() -> SessionInput {
        SessionInput {
            action_count: 6000,
            kind: TrainingKind::Walking,
            duration_hours: 1.0,
            weight_kg: 70.0,
            height_cm: 175.0,
            pool_length_m: 0,
            pool_laps: 0,
        }
    }

    #[test]
    fn summarize_routes_each_kind_to_its_calorie_model() {
        let base = walking_input();
        let running = SessionInput {
            kind: TrainingKind::Running,
            ..base
        };
        let swimming = SessionInput {
            kind: TrainingKind::Swimming,
            pool_length_m: 25,
            pool_laps: 40,
            ..base
        };

        let walking_summary = summarize(&base);
        let running_summary = summarize(&running);
        let swimming_summary = summarize(&swimming);

        // Identical counters, three different energy models.
        assert!((walking_summary.calories_kcal - running_summary.calories_kcal).abs() > EPSILON);
        assert!((walking_summary.calories_kcal - swimming_summary.calories_kcal).abs() > EPSILON);
        assert!((running_summary.calories_kcal - swimming_summary.calories_kcal).abs() > EPSILON);
    }

    #[test]
    fn summarize_uses_stride_distance_for_swimming_distance_field() {
        let input = SessionInput {
            action_count: 1000,
            kind: TrainingKind::Swimming,
            duration_hours: 0.5,
            weight_kg: 70.0,
            height_cm: 0.0,
            pool_length_m: 25,
            pool_laps: 40,
        };

        let summary = summarize(&input);

        // Distance comes from strokes, speed from pool geometry.
        assert!((summary.distance_km - 0.65).abs() < EPSILON);
        assert!((summary.mean_speed_kmh - 2.0).abs() < EPSILON);
    }

    #[test]
    fn zero_duration_session_reports_zero_speed() {
        let input = SessionInput {
            duration_hours: 0.0,
            ..walking_input()
        };

        let summary = summarize(&input);
        assert!((summary.mean_speed_kmh - 0.0).abs() < EPSILON);
    }

    #[test]
    fn unknown_tag_returns_sentinel() {
        let report = generate_report(10_000, "Unknown", 1.0, 70.0, 175.0, 25, 40);
        assert_eq!(report, UNKNOWN_TRAINING_TYPE);
    }
}
