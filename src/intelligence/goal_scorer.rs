// ABOUTME: Goal difficulty scoring, progress computation, priority ranking, completion estimation
// ABOUTME: Pure pass over a validated snapshot; produces one GoalScore per goal
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Meridian Life Intelligence

//! Goal scoring component.

use std::cmp::Ordering;

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::constants::scales;
use crate::config::GoalScoringConfig;
use crate::models::{Goal, GoalStatus, LifeCategory};
use crate::snapshot::Snapshot;

/// Where a goal's progress percentage came from.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ProgressSource {
    /// Derived from the milestone done-ratio
    Milestones,
    /// Supplied explicitly by the collaborator
    Manual,
    /// Neither milestones nor an explicit value exist; reported as 0
    Unreported,
}

/// Estimated completion date, or an explicit undetermined state.
///
/// `InsufficientData` is a first-class result, not an error: callers must
/// branch on it rather than treating 0 or a past date as a sentinel.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CompletionEstimate {
    /// Linear extrapolation landed on this date
    Date(NaiveDate),
    /// Fewer than two observations, zero progress, or a non-positive rate
    InsufficientData,
}

/// Derived scores for a single goal.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GoalScore {
    /// Goal this score belongs to
    pub goal_id: Uuid,
    /// Life area of the goal
    pub category: LifeCategory,
    /// Lifecycle state at snapshot time
    pub status: GoalStatus,
    /// Difficulty score, 0-100
    pub difficulty: f64,
    /// Progress percentage, 0-100
    pub progress_percent: f64,
    /// Where the progress percentage came from
    pub progress_source: ProgressSource,
    /// Days until the target date; negative once overdue
    pub days_until_target: i64,
    /// Whether the target date has passed while the goal is still active
    pub overdue: bool,
    /// Whether the goal's category is a profile focus area
    pub focus_match: bool,
    /// Position in the total priority order, 1 = highest priority
    pub priority_rank: usize,
    /// Most recent date the observed progress value changed
    pub last_progress_change: Option<NaiveDate>,
    /// Extrapolated completion date
    pub estimated_completion: CompletionEstimate,
}

/// Scores and ranks goals against a snapshot.
pub struct GoalScorer {
    config: GoalScoringConfig,
}

impl GoalScorer {
    /// Create a scorer with the given configuration
    #[must_use]
    pub const fn new(config: GoalScoringConfig) -> Self {
        Self { config }
    }

    /// Score every goal in the snapshot and assign priority ranks.
    ///
    /// The result is ordered by priority: active goals first, then urgency
    /// (overdue first), difficulty descending, focus-category match, goal id.
    /// Ranks are 1-based positions in that order.
    #[must_use]
    pub fn score_goals(&self, snapshot: &Snapshot) -> Vec<GoalScore> {
        let today = snapshot.reference_date;
        let mut scores: Vec<GoalScore> = snapshot
            .goals
            .iter()
            .map(|goal| self.score_goal(goal, today, snapshot))
            .collect();

        scores.sort_by(compare_priority);
        for (index, score) in scores.iter_mut().enumerate() {
            score.priority_rank = index + 1;
        }

        tracing::debug!(goals = scores.len(), "scored and ranked goals");
        scores
    }

    fn score_goal(&self, goal: &Goal, today: NaiveDate, snapshot: &Snapshot) -> GoalScore {
        let days_until_target = (goal.target_date - today).num_days();
        let overdue = days_until_target < 0 && goal.is_active();
        let (progress_percent, progress_source) = progress_of(goal);

        GoalScore {
            goal_id: goal.id,
            category: goal.category,
            status: goal.status,
            difficulty: self.difficulty_score(goal, days_until_target),
            progress_percent,
            progress_source,
            days_until_target,
            overdue,
            focus_match: snapshot.profile.is_focus(goal.category),
            priority_rank: 0, // assigned after sorting
            last_progress_change: last_progress_change(goal),
            estimated_completion: estimate_completion(goal, progress_percent),
        }
    }

    /// Weighted blend of complexity, resource scarcity, and time pressure.
    fn difficulty_score(&self, goal: &Goal, days_until_target: i64) -> f64 {
        let span = f64::from(scales::EFFORT_MAX - scales::EFFORT_MIN);
        let complexity =
            f64::from(goal.complexity - scales::EFFORT_MIN) / span * scales::PERCENT_MAX;
        let scarcity = f64::from(scales::EFFORT_MAX - goal.resource_availability) / span
            * scales::PERCENT_MAX;
        let pressure = self.time_pressure(days_until_target);

        let score = self.config.complexity_weight * complexity
            + self.config.resource_scarcity_weight * scarcity
            + self.config.time_pressure_weight * pressure;
        score.clamp(0.0, scales::PERCENT_MAX)
    }

    /// Monotonically increasing with target proximity, saturated at 100 once
    /// overdue, and 0 while the target is beyond the configured horizon.
    fn time_pressure(&self, days_until_target: i64) -> f64 {
        if days_until_target <= 0 {
            return scales::PERCENT_MAX;
        }
        let horizon = self.config.time_pressure_horizon_days as f64;
        ((horizon - days_until_target as f64) / horizon * scales::PERCENT_MAX)
            .clamp(0.0, scales::PERCENT_MAX)
    }
}

/// Milestone done-ratio, falling back to the explicit manual value.
///
/// A goal with neither is tolerated: it reports 0 with an `Unreported` tag
/// rather than being rejected.
fn progress_of(goal: &Goal) -> (f64, ProgressSource) {
    if let Some(percent) = goal.milestone_progress() {
        return (percent.clamp(0.0, scales::PERCENT_MAX), ProgressSource::Milestones);
    }
    match goal.manual_progress {
        Some(percent) => (percent.clamp(0.0, scales::PERCENT_MAX), ProgressSource::Manual),
        None => (0.0, ProgressSource::Unreported),
    }
}

/// Most recent date at which the observed progress value actually changed.
fn last_progress_change(goal: &Goal) -> Option<NaiveDate> {
    let history = &goal.progress_history;
    let first = history.first()?;
    let mut changed = first.date;
    for pair in history.windows(2) {
        if (pair[1].percent - pair[0].percent).abs() > f64::EPSILON {
            changed = pair[1].date;
        }
    }
    Some(changed)
}

/// Linear extrapolation of the progress rate to 100%.
fn estimate_completion(goal: &Goal, current_progress: f64) -> CompletionEstimate {
    let history = &goal.progress_history;
    if history.len() < 2 || current_progress <= 0.0 {
        return CompletionEstimate::InsufficientData;
    }
    let (Some(first), Some(last)) = (history.first(), history.last()) else {
        return CompletionEstimate::InsufficientData;
    };

    let elapsed_days = (last.date - first.date).num_days();
    let gained = last.percent - first.percent;
    if elapsed_days <= 0 || gained <= 0.0 {
        return CompletionEstimate::InsufficientData;
    }

    if last.percent >= scales::PERCENT_MAX {
        return CompletionEstimate::Date(last.date);
    }

    let rate_per_day = gained / elapsed_days as f64;
    let remaining_days = ((scales::PERCENT_MAX - last.percent) / rate_per_day).ceil() as i64;
    CompletionEstimate::Date(last.date + Duration::days(remaining_days))
}

/// Total priority order: active status, urgency, difficulty, focus, id.
fn compare_priority(a: &GoalScore, b: &GoalScore) -> Ordering {
    a.status
        .cmp(&b.status)
        .then_with(|| a.days_until_target.cmp(&b.days_until_target))
        .then_with(|| {
            b.difficulty
                .partial_cmp(&a.difficulty)
                .unwrap_or(Ordering::Equal)
        })
        .then_with(|| b.focus_match.cmp(&a.focus_match))
        .then_with(|| a.goal_id.cmp(&b.goal_id))
}
