// ABOUTME: Training session statistics library for running, walking, and swimming
// ABOUTME: Computes distance, mean speed, and calories and renders text reports
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Trainstat Contributors

//! # Trainstat
//!
//! A pure calculation library that turns raw activity counters (steps or
//! strokes) into training session statistics: distance covered, mean speed,
//! and calories burned, plus a fixed-template text report.
//!
//! Three disciplines are supported, each with its own calorie model:
//! running, walking, and swimming. Swimming additionally derives its mean
//! speed from pool geometry rather than the stride-based distance.
//!
//! All functions are pure and side-effect-free apart from allocating the
//! output string, so the crate is safe to call from any number of threads
//! without synchronization.
//!
//! ## Modules
//!
//! - **models**: `TrainingKind`, `SessionInput`, and the computed `TrainingSummary`
//! - **constants**: named coefficients for the distance and calorie formulas
//! - **metrics**: the pure formula functions
//! - **report**: kind dispatch and report rendering
//! - **errors**: the crate error type
//!
//! ## Example
//!
//! ```rust
//! use trainstat::generate_report;
//!
//! let report = generate_report(10_000, "Running", 1.0, 70.0, 0.0, 0, 0);
//! assert!(report.starts_with("Training type: Running\n"));
//! ```

/// Named coefficients for the distance, speed, and calorie formulas
pub mod constants;

/// Crate error type
pub mod errors;

/// Pure formula functions for distance, mean speed, and calories
pub mod metrics;

/// Core data models for training sessions
pub mod models;

/// Kind dispatch and report rendering
pub mod report;

pub use errors::TrainingError;
pub use models::{SessionInput, TrainingKind, TrainingSummary};
pub use report::{generate_report, summarize, UNKNOWN_TRAINING_TYPE};
