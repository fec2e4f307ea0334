// ABOUTME: Goal entity with milestones, effort inputs, and progress observations
// ABOUTME: Immutable engine input; all derived scores live in the intelligence layer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Meridian Life Intelligence

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::LifeCategory;

/// Lifecycle state of a goal.
///
/// Transitions are one-way (`Active` → `Completed` | `Abandoned`, never
/// reversed); the collaborator enforces that before a snapshot is built.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum GoalStatus {
    /// Being worked on
    Active,
    /// Reached its target
    Completed,
    /// Given up on
    Abandoned,
}

/// A single step toward a goal.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Milestone {
    /// What this step accomplishes
    pub description: String,
    /// Whether the step has been completed
    pub done: bool,
}

/// A dated progress observation supplied by the collaborator.
///
/// Two or more observations are required before the engine will estimate a
/// completion date.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProgressSample {
    /// When the observation was recorded
    pub date: NaiveDate,
    /// Observed progress percentage, 0-100
    pub percent: f64,
}

/// A tracked goal in one of the twelve life areas.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Goal {
    /// Stable identifier
    pub id: Uuid,
    /// Life area this goal belongs to
    pub category: LifeCategory,
    /// Short title
    pub title: String,
    /// Longer free-form description
    pub description: String,
    /// Lifecycle state
    pub status: GoalStatus,
    /// When the goal was created
    pub created_date: NaiveDate,
    /// When the goal should be done
    pub target_date: NaiveDate,
    /// When the goal reached `Completed`, if it has
    pub completed_date: Option<NaiveDate>,
    /// Ordered milestone breakdown; may be empty
    pub milestones: Vec<Milestone>,
    /// Estimated complexity, 1 (trivial) to 5 (very hard)
    pub complexity: u8,
    /// Availability of required resources, 1 (scarce) to 5 (abundant)
    pub resource_availability: u8,
    /// Explicit progress percentage for goals without milestones, 0-100
    pub manual_progress: Option<f64>,
    /// Date-ascending progress observations
    pub progress_history: Vec<ProgressSample>,
}

impl Goal {
    /// Whether the goal is still being worked on
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.status == GoalStatus::Active
    }

    /// Milestone completion ratio as a percentage, if milestones exist
    #[must_use]
    pub fn milestone_progress(&self) -> Option<f64> {
        if self.milestones.is_empty() {
            return None;
        }
        let done = self.milestones.iter().filter(|m| m.done).count();
        Some(done as f64 / self.milestones.len() as f64 * 100.0)
    }
}
