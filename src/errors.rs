// ABOUTME: Unified error surface for collaborators driving the engine
// ABOUTME: Undetermined analytics results are enum states, never errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Meridian Life Intelligence

//! Error taxonomy.
//!
//! Only two things can actually fail: building a configuration and building a
//! snapshot. Undetermined analytics results, such as an inestimable completion
//! date or an unmeasurable completion rate, are first-class result states the
//! caller branches on rather than errors.

use thiserror::Error;

pub use crate::config::ConfigError;
pub use crate::snapshot::SnapshotError;

/// Any failure a collaborator can see while driving the engine.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration failed to load or validate
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Snapshot ingestion rejected an invariant violation
    #[error(transparent)]
    Snapshot(#[from] SnapshotError),
}

/// Convenience alias for collaborator-facing results.
pub type EngineResult<T> = Result<T, EngineError>;
