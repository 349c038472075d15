// ABOUTME: Named coefficients for the distance, speed, and calorie formulas
// ABOUTME: Grouped into unit conversions, stride geometry, and per-discipline models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Trainstat Contributors

//! Formula coefficients used throughout the crate.
//!
//! The calorie coefficients are empirical multipliers from step-counter
//! energy-expenditure models; they are grouped per discipline so each
//! module reads as the formula it implements.

/// Unit conversion factors
pub mod conversions {
    /// Metres in one kilometre
    pub const M_IN_KM: f64 = 1000.0;

    /// Minutes in one hour
    pub const MIN_IN_H: f64 = 60.0;

    /// Factor converting km/h into m/s
    pub const KMH_TO_MS: f64 = 0.278;

    /// Centimetres in one metre
    pub const CM_IN_M: f64 = 100.0;
}

/// Stride geometry shared by all disciplines
pub mod stride {
    /// Mean distance covered by one action (step or stroke), in metres
    pub const ACTION_LENGTH_M: f64 = 0.65;
}

/// Running calorie model coefficients
pub mod running {
    /// Multiplier applied to the mean speed (km/h)
    pub const SPEED_MULTIPLIER: f64 = 18.0;

    /// Additive shift applied after the speed term
    pub const SPEED_SHIFT: f64 = 1.79;
}

/// Walking calorie model coefficients
pub mod walking {
    /// Multiplier applied to body weight (kg)
    pub const WEIGHT_MULTIPLIER: f64 = 0.035;

    /// Multiplier applied to the speed-squared-over-height term
    pub const SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;
}

/// Swimming calorie model coefficients
pub mod swimming {
    /// Additive shift applied to the mean speed (km/h)
    pub const SPEED_SHIFT: f64 = 1.1;

    /// Multiplier applied to body weight (kg)
    pub const WEIGHT_MULTIPLIER: f64 = 2.0;
}
