// ABOUTME: Core data models for training sessions
// ABOUTME: Training kind enum plus the raw session input and computed summary records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Trainstat Contributors

//! Core data models.
//!
//! A session is described by a flat record of raw counters ([`SessionInput`])
//! tagged with a [`TrainingKind`]; the computed statistics come back as a
//! [`TrainingSummary`] whose `Display` impl renders the fixed report
//! template. Nothing here is persisted: records are built per report request
//! and discarded after formatting.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::TrainingError;

/// Enumeration of supported training kinds.
///
/// Each kind selects its own calorie model; swimming additionally derives
/// its mean speed from pool geometry instead of the stride-based distance.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum TrainingKind {
    /// Running session; actions are steps
    Running,
    /// Walking session; actions are steps
    Walking,
    /// Swimming session; actions are strokes
    Swimming,
}

impl TrainingKind {
    /// Human-readable label used in the report header
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Running => "Running",
            Self::Walking => "Walking",
            Self::Swimming => "Swimming",
        }
    }
}

impl fmt::Display for TrainingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for TrainingKind {
    type Err = TrainingError;

    /// Parse a kind tag.
    ///
    /// Accepts the capitalized report labels and their lowercase forms;
    /// any other tag is a [`TrainingError::UnknownTrainingKind`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Running" | "running" => Ok(Self::Running),
            "Walking" | "walking" => Ok(Self::Walking),
            "Swimming" | "swimming" => Ok(Self::Swimming),
            other => Err(TrainingError::UnknownTrainingKind(other.to_owned())),
        }
    }
}

/// Raw counters describing one training session.
///
/// The record is flat: `height_cm` only feeds the walking calorie model,
/// and `pool_length_m`/`pool_laps` only feed the swimming
/// pipeline. Fields that do not apply to the session's kind are carried as
/// zeros and ignored. Inputs are not validated; nonsensical values produce
/// nonsensical (but non-panicking) numbers.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct SessionInput {
    /// Number of actions performed (steps, or strokes for swimming)
    pub action_count: u32,
    /// Training discipline
    pub kind: TrainingKind,
    /// Session duration in hours
    pub duration_hours: f64,
    /// Body weight in kilograms
    pub weight_kg: f64,
    /// Body height in centimetres (walking only)
    pub height_cm: f64,
    /// Pool length in metres (swimming only)
    pub pool_length_m: u32,
    /// Number of pool lengths swum (swimming only)
    pub pool_laps: u32,
}

/// Computed statistics for one training session.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct TrainingSummary {
    /// Training discipline
    pub kind: TrainingKind,
    /// Session duration in hours
    pub duration_hours: f64,
    /// Distance covered in kilometres
    pub distance_km: f64,
    /// Mean speed in km/h
    pub mean_speed_kmh: f64,
    /// Calories burned in kcal
    pub calories_kcal: f64,
}

impl fmt::Display for TrainingSummary {
    /// Render the fixed report template.
    ///
    /// Every numeric field is formatted with exactly two decimal places and
    /// the rendered block ends with a newline.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Training type: {}\nDuration: {:.2} h.\nDistance: {:.2} km.\nSpeed: {:.2} km/h\nCalories burned: {:.2}",
            self.kind, self.duration_hours, self.distance_km, self.mean_speed_kmh, self.calories_kcal
        )
    }
}
