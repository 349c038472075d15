// ABOUTME: Error types for the training statistics API
// ABOUTME: Covers the single domain failure, an unrecognized training kind tag
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Trainstat Contributors

//! Crate error type.
//!
//! The calculation functions themselves are total: degenerate numeric inputs
//! flow through the arithmetic rather than erroring. The only failure the
//! typed API can report is a training kind tag that does not match any
//! supported discipline.

use thiserror::Error;

/// Errors produced by the training statistics API.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TrainingError {
    /// The training kind tag did not match any supported discipline
    #[error("unknown training type: {0}")]
    UnknownTrainingKind(String),
}
