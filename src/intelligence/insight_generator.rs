// ABOUTME: Rule-based natural-language insights over the other components' outputs
// ABOUTME: Deterministic templates with structured data payloads, sorted by priority and kind
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Meridian Life Intelligence

//! Insight generation component.

use std::cmp::Ordering;

use chrono::Duration;
use serde::{Deserialize, Serialize};
use serde_json::json;
use uuid::Uuid;

use super::constants::insight_priorities;
use super::goal_scorer::GoalScore;
use super::habit_predictor::HabitForecast;
use super::life_analytics::{LifeSummary, ScoreMeasure};
use crate::config::InsightConfig;
use crate::models::{GoalStatus, LifeCategory};
use crate::snapshot::Snapshot;

/// The tone of an insight; orders warning before recommendation before celebration.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum InsightKind {
    /// Something needs attention now
    Warning,
    /// A concrete suggested action
    Recommendation,
    /// Something worth celebrating
    Celebration,
}

/// What an insight is about, used as the final deterministic tie-break.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum InsightTarget {
    /// A specific goal
    Goal(Uuid),
    /// A specific habit
    Habit(Uuid),
    /// A life category
    Category(LifeCategory),
    /// The whole picture
    General,
}

/// Which rule produced an insight.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum InsightTemplate {
    /// Active goal with no progress change beyond the stall window
    StalledGoal,
    /// Habit completion rate below the struggling threshold
    StrugglingHabit,
    /// More active goals than the configured maximum
    Overcommitment,
    /// Trailing mean energy below the low-energy threshold
    EnergyConcern,
    /// A surfaced habit optimization recommendation
    HabitOptimization,
    /// A category in the bottom of the scored set
    FocusArea,
    /// A top-ranked goal with no milestone breakdown
    BreakItDown,
    /// Current streak surpassed the previous best
    NewLongestStreak,
    /// Goal completed within the celebration window
    GoalCompleted,
    /// Unbroken run of daily entries
    ConsistencyMilestone,
}

/// One generated insight.
///
/// `message` is rendered deterministically from the template; `data` carries
/// the structured values behind it so collaborators can re-render.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Insight {
    /// Tone of the insight
    pub kind: InsightKind,
    /// What the insight is about
    pub target: InsightTarget,
    /// Rule priority, higher surfaces first
    pub priority: u8,
    /// Which rule fired
    pub template: InsightTemplate,
    /// Rendered natural-language message
    pub message: String,
    /// Structured values behind the message
    pub data: serde_json::Value,
}

/// Generates prioritized insights from the other components' outputs.
pub struct InsightGenerator {
    config: InsightConfig,
}

impl InsightGenerator {
    /// Create a generator with the given configuration
    #[must_use]
    pub const fn new(config: InsightConfig) -> Self {
        Self { config }
    }

    /// Run every insight rule and return the results sorted by priority
    /// descending, then kind (warnings first), then target.
    #[must_use]
    pub fn generate(
        &self,
        snapshot: &Snapshot,
        goal_scores: &[GoalScore],
        habit_forecasts: &[HabitForecast],
        life_summary: &LifeSummary,
    ) -> Vec<Insight> {
        let mut insights = Vec::new();

        self.stalled_goals(snapshot, goal_scores, &mut insights);
        self.struggling_habits(snapshot, habit_forecasts, &mut insights);
        self.overcommitment(snapshot, &mut insights);
        self.energy_concern(snapshot, &mut insights);
        self.habit_optimizations(habit_forecasts, &mut insights);
        self.focus_areas(life_summary, &mut insights);
        self.break_it_down(snapshot, goal_scores, &mut insights);
        self.new_longest_streaks(snapshot, habit_forecasts, &mut insights);
        self.completed_goals(snapshot, &mut insights);
        self.consistency_milestone(snapshot, &mut insights);

        insights.sort_by(compare_insights);
        tracing::debug!(insights = insights.len(), "generated insights");
        insights
    }

    /// Active, unfinished goals whose progress has not moved inside the stall
    /// window. A goal with no progress history stalls from its creation date,
    /// and the boundary is inclusive: exactly `stalled_goal_days` idle days
    /// fires the warning.
    fn stalled_goals(
        &self,
        snapshot: &Snapshot,
        goal_scores: &[GoalScore],
        insights: &mut Vec<Insight>,
    ) {
        let cutoff =
            snapshot.reference_date - Duration::days(i64::from(self.config.stalled_goal_days));
        for score in goal_scores {
            if score.status != GoalStatus::Active
                || score.progress_percent >= 100.0
            {
                continue;
            }
            let Some(goal) = snapshot.goals.iter().find(|g| g.id == score.goal_id) else {
                continue;
            };
            let last_movement = score.last_progress_change.unwrap_or(goal.created_date);
            if last_movement > cutoff {
                continue;
            }
            let idle_days = (snapshot.reference_date - last_movement).num_days();
            insights.push(Insight {
                kind: InsightKind::Warning,
                target: InsightTarget::Goal(goal.id),
                priority: insight_priorities::STALLED_GOAL,
                template: InsightTemplate::StalledGoal,
                message: format!(
                    "\"{}\" has not moved in {idle_days} days. Schedule a small next step",
                    goal.title
                ),
                data: json!({
                    "goal_id": goal.id,
                    "idle_days": idle_days,
                    "progress_percent": score.progress_percent,
                }),
            });
        }
    }

    fn struggling_habits(
        &self,
        snapshot: &Snapshot,
        habit_forecasts: &[HabitForecast],
        insights: &mut Vec<Insight>,
    ) {
        for forecast in habit_forecasts {
            let Some(rate) = forecast.completion_rate.value() else {
                continue;
            };
            if rate >= self.config.struggling_rate_threshold {
                continue;
            }
            let Some(habit) = snapshot.habits.iter().find(|h| h.id == forecast.habit_id)
            else {
                continue;
            };
            insights.push(Insight {
                kind: InsightKind::Warning,
                target: InsightTarget::Habit(habit.id),
                priority: insight_priorities::STRUGGLING_HABIT,
                template: InsightTemplate::StrugglingHabit,
                message: format!(
                    "\"{}\" is landing only {:.0}% of the time; shrink it until it sticks",
                    habit.title,
                    rate * 100.0
                ),
                data: json!({
                    "habit_id": habit.id,
                    "completion_rate": rate,
                }),
            });
        }
    }

    fn overcommitment(&self, snapshot: &Snapshot, insights: &mut Vec<Insight>) {
        let active = snapshot.active_goal_count();
        if active <= self.config.max_active_goals {
            return;
        }
        insights.push(Insight {
            kind: InsightKind::Warning,
            target: InsightTarget::General,
            priority: insight_priorities::OVERCOMMITMENT,
            template: InsightTemplate::Overcommitment,
            message: format!(
                "{active} goals are active at once. Finishing or parking a few will help the rest",
            ),
            data: json!({
                "active_goals": active,
                "recommended_max": self.config.max_active_goals,
            }),
        });
    }

    /// Mean energy over the trailing window; silent without any entries.
    fn energy_concern(&self, snapshot: &Snapshot, insights: &mut Vec<Insight>) {
        let mut sum = 0.0;
        let mut count = 0_usize;
        for entry in snapshot.entries_in_trailing_days(self.config.energy_window_days) {
            sum += f64::from(entry.energy);
            count += 1;
        }
        if count == 0 {
            return;
        }
        let mean_energy = sum / count as f64;
        if mean_energy >= self.config.low_energy_threshold {
            return;
        }
        insights.push(Insight {
            kind: InsightKind::Warning,
            target: InsightTarget::General,
            priority: insight_priorities::ENERGY_CONCERN,
            template: InsightTemplate::EnergyConcern,
            message: format!(
                "Average energy is {mean_energy:.1}/10 this week; rest may be the highest-leverage move",
            ),
            data: json!({
                "mean_energy": mean_energy,
                "window_days": self.config.energy_window_days,
                "entries": count,
            }),
        });
    }

    /// Surface each habit's top recommendation as an insight.
    fn habit_optimizations(
        &self,
        habit_forecasts: &[HabitForecast],
        insights: &mut Vec<Insight>,
    ) {
        for forecast in habit_forecasts {
            let Some(recommendation) = forecast.recommendations.first() else {
                continue;
            };
            insights.push(Insight {
                kind: InsightKind::Recommendation,
                target: InsightTarget::Habit(forecast.habit_id),
                priority: insight_priorities::HABIT_OPTIMIZATION,
                template: InsightTemplate::HabitOptimization,
                message: recommendation.message.clone(),
                data: json!({
                    "habit_id": forecast.habit_id,
                    "optimization": recommendation.kind,
                }),
            });
        }
    }

    /// Lowest-scoring categories, only once the overall picture is measurable.
    fn focus_areas(&self, life_summary: &LifeSummary, insights: &mut Vec<Insight>) {
        if !matches!(life_summary.overall_score, ScoreMeasure::Measured(_)) {
            return;
        }
        let mut ranked: Vec<_> = life_summary.category_scores.iter().collect();
        ranked.sort_by(|a, b| {
            a.score
                .partial_cmp(&b.score)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.category.cmp(&b.category))
        });
        for category_score in ranked.into_iter().take(self.config.focus_area_count) {
            insights.push(Insight {
                kind: InsightKind::Recommendation,
                target: InsightTarget::Category(category_score.category),
                priority: insight_priorities::FOCUS_AREA,
                template: InsightTemplate::FocusArea,
                message: format!(
                    "{} is your lowest-scoring area at {:.0}/100 — worth a deliberate goal or habit",
                    category_score.category.display_name(),
                    category_score.score
                ),
                data: json!({
                    "category": category_score.category,
                    "score": category_score.score,
                }),
            });
        }
    }

    /// High-priority goals that have never been broken into milestones.
    fn break_it_down(
        &self,
        snapshot: &Snapshot,
        goal_scores: &[GoalScore],
        insights: &mut Vec<Insight>,
    ) {
        for score in goal_scores {
            if score.status != GoalStatus::Active
                || score.priority_rank > self.config.breakdown_rank_cutoff
            {
                continue;
            }
            let Some(goal) = snapshot.goals.iter().find(|g| g.id == score.goal_id) else {
                continue;
            };
            if !goal.milestones.is_empty() {
                continue;
            }
            insights.push(Insight {
                kind: InsightKind::Recommendation,
                target: InsightTarget::Goal(goal.id),
                priority: insight_priorities::BREAK_IT_DOWN,
                template: InsightTemplate::BreakItDown,
                message: format!(
                    "\"{}\" is one of your top priorities but has no milestones. Break it into steps",
                    goal.title
                ),
                data: json!({
                    "goal_id": goal.id,
                    "priority_rank": score.priority_rank,
                }),
            });
        }
    }

    /// Fires when the current streak surpassed a previous best worth beating.
    fn new_longest_streaks(
        &self,
        snapshot: &Snapshot,
        habit_forecasts: &[HabitForecast],
        insights: &mut Vec<Insight>,
    ) {
        for forecast in habit_forecasts {
            if forecast.longest_streak == 0
                || forecast.current_streak <= forecast.longest_streak
            {
                continue;
            }
            let Some(habit) = snapshot.habits.iter().find(|h| h.id == forecast.habit_id)
            else {
                continue;
            };
            insights.push(Insight {
                kind: InsightKind::Celebration,
                target: InsightTarget::Habit(habit.id),
                priority: insight_priorities::NEW_LONGEST_STREAK,
                template: InsightTemplate::NewLongestStreak,
                message: format!(
                    "New record: \"{}\" is at {} in a row, past your previous best of {}",
                    habit.title, forecast.current_streak, forecast.longest_streak
                ),
                data: json!({
                    "habit_id": habit.id,
                    "current_streak": forecast.current_streak,
                    "previous_best": forecast.longest_streak,
                }),
            });
        }
    }

    fn completed_goals(&self, snapshot: &Snapshot, insights: &mut Vec<Insight>) {
        let cutoff = snapshot.reference_date
            - Duration::days(i64::from(self.config.celebration_window_days));
        for goal in &snapshot.goals {
            if goal.status != GoalStatus::Completed {
                continue;
            }
            let Some(completed) = goal.completed_date else {
                continue;
            };
            if completed < cutoff || completed > snapshot.reference_date {
                continue;
            }
            insights.push(Insight {
                kind: InsightKind::Celebration,
                target: InsightTarget::Goal(goal.id),
                priority: insight_priorities::GOAL_COMPLETED,
                template: InsightTemplate::GoalCompleted,
                message: format!("You completed \"{}\" on {completed} — well done", goal.title),
                data: json!({
                    "goal_id": goal.id,
                    "completed_date": completed,
                }),
            });
        }
    }

    /// Unbroken run of daily entries ending at the reference date.
    fn consistency_milestone(&self, snapshot: &Snapshot, insights: &mut Vec<Insight>) {
        let mut streak = 0_u32;
        let mut expected = snapshot.reference_date;
        for entry in snapshot.daily_entries.iter().rev() {
            if entry.date != expected {
                break;
            }
            streak += 1;
            expected = match expected.pred_opt() {
                Some(previous) => previous,
                None => break,
            };
        }
        if streak < self.config.consistency_days {
            return;
        }
        insights.push(Insight {
            kind: InsightKind::Celebration,
            target: InsightTarget::General,
            priority: insight_priorities::CONSISTENCY_MILESTONE,
            template: InsightTemplate::ConsistencyMilestone,
            message: format!("{streak} days of journaling in a row; the reflection habit is real"),
            data: json!({ "entry_streak": streak }),
        });
    }
}

/// Priority descending, then kind (warnings first), then target.
fn compare_insights(a: &Insight, b: &Insight) -> Ordering {
    b.priority
        .cmp(&a.priority)
        .then_with(|| a.kind.cmp(&b.kind))
        .then_with(|| a.target.cmp(&b.target))
}
