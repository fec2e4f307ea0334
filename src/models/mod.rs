// ABOUTME: Entity models consumed by the intelligence engine
// ABOUTME: All types here are immutable inputs; derived results live under intelligence
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Meridian Life Intelligence

//! Entity models for the Meridian intelligence engine.
//!
//! The collaborator (storage/CLI layer) constructs these and hands them to the
//! engine inside a [`crate::snapshot::Snapshot`]. The engine never mutates
//! them; every derived value is a new, transient result record.

mod assessment;
mod category;
mod goal;
mod habit;
mod journal;
mod profile;

pub use assessment::{AssessmentInterval, LifeAssessment};
pub use category::LifeCategory;
pub use goal::{Goal, GoalStatus, Milestone, ProgressSample};
pub use habit::{Habit, HabitCompletion, HabitFrequency};
pub use journal::DailyEntry;
pub use profile::UserProfile;
