// ABOUTME: Deterministic analytics engine for personal goals, habits, and life balance
// ABOUTME: Pure computation over immutable snapshots; no I/O, clocks, or persistence
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Meridian Life Intelligence

#![deny(unsafe_code)]

//! # Meridian Intelligence
//!
//! Deterministic analytics engine for a personal goal and habit tracker. The
//! engine is a pure function of its inputs: collaborators build a validated
//! [`snapshot::Snapshot`] of goals, habits, completions, journal entries, and
//! assessments, and one [`intelligence::Engine::run`] pass produces priority
//! scores, habit forecasts, a life-balance summary, and prioritized insights.
//! Running the same snapshot twice yields byte-identical reports.
//!
//! ## Modules
//!
//! - **models**: Domain entities (goals, habits, journal entries, assessments, profile)
//! - **snapshot**: Immutable validated input view with ingestion-time invariant checks
//! - **intelligence**: Goal scoring, habit prediction, life analytics, and insight generation
//! - **config**: Tunable heuristics with defaults and environment overrides
//! - **errors**: The unified error surface (`EngineError`)

/// Tunable heuristic parameters with environment overrides
pub mod config;

/// Unified error surface for collaborators driving the engine
pub mod errors;

/// Goal scoring, habit prediction, life analytics, and insight generation
pub mod intelligence;

/// Domain entities shared by every component
pub mod models;

/// Immutable validated input view for one computation pass
pub mod snapshot;

pub use config::EngineConfig;
pub use errors::{EngineError, EngineResult};
pub use intelligence::{Engine, EngineReport};
pub use snapshot::Snapshot;
