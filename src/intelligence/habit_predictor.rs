// ABOUTME: Habit streak analysis, completion-rate statistics, and success prediction
// ABOUTME: Deterministic heuristics over the scheduled-occurrence calendar of each habit
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Meridian Life Intelligence

//! Habit prediction component.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::HabitPredictionConfig;
use crate::models::{Habit, HabitFrequency, LifeCategory};
use crate::snapshot::Snapshot;

/// Completion rate over the trailing window, or an explicit undetermined state.
///
/// A habit with no scheduled occurrences in the window (created today, say)
/// is `NotYetMeasurable` rather than a misleading 0.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum CompletionRate {
    /// Completions over scheduled occurrences, 0-1
    Measured(f64),
    /// No scheduled occurrences in the window yet
    NotYetMeasurable,
}

impl CompletionRate {
    /// The measured value, if any
    #[must_use]
    pub const fn value(self) -> Option<f64> {
        match self {
            Self::Measured(rate) => Some(rate),
            Self::NotYetMeasurable => None,
        }
    }
}

/// Kinds of rule-based habit optimizations, in evaluation priority order.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum OptimizationKind {
    /// Daily habit with a low completion rate; try fewer scheduled days
    ReduceFrequency,
    /// A streak broke in the last few days; nudge toward restarting now
    RecoveryNudge,
    /// Habit is comfortably beyond its target streak; raise the bar
    RaiseTarget,
    /// No trigger cue defined for a habit that is not yet reliable
    DefineTrigger,
    /// No reward defined for a habit that is not yet reliable
    AttachReward,
}

/// A single optimization recommendation for one habit.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HabitRecommendation {
    /// Habit this recommendation targets
    pub habit_id: Uuid,
    /// Which rule fired
    pub kind: OptimizationKind,
    /// Deterministic rendered message
    pub message: String,
}

/// Derived prediction results for a single habit.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HabitForecast {
    /// Habit this forecast belongs to
    pub habit_id: Uuid,
    /// Life area of the habit
    pub category: LifeCategory,
    /// Consecutive completed scheduled occurrences ending at the reference date
    pub current_streak: u32,
    /// Best completed run prior to the current one
    pub longest_streak: u32,
    /// Completion rate over the trailing window
    pub completion_rate: CompletionRate,
    /// Heuristic success probability, 0-1
    pub success_probability: f64,
    /// Whether a streak broke within the recovery window
    pub streak_broke_recently: bool,
    /// Top-N optimization recommendations, highest rule priority first
    pub recommendations: Vec<HabitRecommendation>,
}

/// Predicts habit outcomes against a snapshot.
pub struct HabitPredictor {
    config: HabitPredictionConfig,
}

impl HabitPredictor {
    /// Create a predictor with the given configuration
    #[must_use]
    pub const fn new(config: HabitPredictionConfig) -> Self {
        Self { config }
    }

    /// Forecast every habit in the snapshot, ordered by habit id.
    #[must_use]
    pub fn forecast_habits(&self, snapshot: &Snapshot) -> Vec<HabitForecast> {
        let forecasts: Vec<HabitForecast> = snapshot
            .habits
            .iter()
            .map(|habit| self.forecast_habit(habit, snapshot))
            .collect();
        tracing::debug!(habits = forecasts.len(), "forecast habits");
        forecasts
    }

    fn forecast_habit(&self, habit: &Habit, snapshot: &Snapshot) -> HabitForecast {
        let reference = snapshot.reference_date;
        let completed: BTreeSet<NaiveDate> = snapshot
            .completions_for(habit.id)
            .filter(|c| c.completed)
            .map(|c| c.date)
            .collect();

        let scheduled = scheduled_dates(habit, habit.created_date, reference);
        let (current_streak, longest_streak) =
            streaks(&scheduled, &completed, reference);
        let completion_rate = self.completion_rate(habit, &completed, reference);
        let recency = self.recency_weighted_rate(habit, &completed, reference);
        let momentum = momentum(current_streak, habit.target_streak);
        let success_probability =
            self.blend_probability(completion_rate.value(), momentum, recency);
        let streak_broke_recently =
            self.streak_broke_recently(&scheduled, &completed, reference);

        let recommendations = self.recommend(
            habit,
            completion_rate,
            success_probability,
            current_streak,
            streak_broke_recently,
        );

        HabitForecast {
            habit_id: habit.id,
            category: habit.category,
            current_streak,
            longest_streak,
            completion_rate,
            success_probability,
            streak_broke_recently,
            recommendations,
        }
    }

    /// Completions over scheduled occurrences in the trailing window, clipped
    /// to the habit's creation date.
    fn completion_rate(
        &self,
        habit: &Habit,
        completed: &BTreeSet<NaiveDate>,
        reference: NaiveDate,
    ) -> CompletionRate {
        let window_start = reference
            - chrono::Duration::days(i64::from(self.config.completion_rate_window_days) - 1);
        let start = window_start.max(habit.created_date);
        let scheduled = scheduled_dates(habit, start, reference);
        if scheduled.is_empty() {
            return CompletionRate::NotYetMeasurable;
        }
        let hits = scheduled.iter().filter(|d| completed.contains(*d)).count();
        CompletionRate::Measured((hits as f64 / scheduled.len() as f64).clamp(0.0, 1.0))
    }

    /// Exponential-decay-weighted completion rate over the trailing window.
    ///
    /// Recent scheduled occurrences dominate; the half-life fixes how fast
    /// older behavior fades.
    fn recency_weighted_rate(
        &self,
        habit: &Habit,
        completed: &BTreeSet<NaiveDate>,
        reference: NaiveDate,
    ) -> Option<f64> {
        let window_start = reference
            - chrono::Duration::days(i64::from(self.config.completion_rate_window_days) - 1);
        let start = window_start.max(habit.created_date);
        let scheduled = scheduled_dates(habit, start, reference);
        if scheduled.is_empty() {
            return None;
        }

        let half_life = self.config.recency_half_life_days;
        let mut weighted_hits = 0.0;
        let mut total_weight = 0.0;
        for date in &scheduled {
            let age = (reference - *date).num_days() as f64;
            let weight = 0.5_f64.powf(age / half_life);
            total_weight += weight;
            if completed.contains(date) {
                weighted_hits += weight;
            }
        }
        if total_weight <= 0.0 {
            return None;
        }
        Some((weighted_hits / total_weight).clamp(0.0, 1.0))
    }

    /// Blend of rate, momentum, and recency with weight renormalization over
    /// the measurable components.
    fn blend_probability(
        &self,
        rate: Option<f64>,
        momentum: f64,
        recency: Option<f64>,
    ) -> f64 {
        let components = [
            (self.config.rate_weight, rate),
            (self.config.momentum_weight, Some(momentum)),
            (self.config.recency_weight, recency),
        ];

        let mut weighted = 0.0;
        let mut total_weight = 0.0;
        for (weight, value) in components {
            if let Some(value) = value {
                weighted += weight * value;
                total_weight += weight;
            }
        }
        if total_weight <= 0.0 {
            return 0.0;
        }
        (weighted / total_weight).clamp(0.0, 1.0)
    }

    /// Whether a scheduled occurrence was missed within the recovery window,
    /// after at least one completion had established a streak to break.
    fn streak_broke_recently(
        &self,
        scheduled: &[NaiveDate],
        completed: &BTreeSet<NaiveDate>,
        reference: NaiveDate,
    ) -> bool {
        let last_miss = scheduled
            .iter()
            .rev()
            // The reference day may simply not be logged yet.
            .filter(|d| **d < reference)
            .find(|d| !completed.contains(*d));
        let Some(miss) = last_miss else {
            return false;
        };
        if (reference - *miss).num_days() > self.config.recovery_window_days {
            return false;
        }
        completed.iter().any(|d| d < miss)
    }

    /// Rule-based optimization recommendations in fixed priority order.
    fn recommend(
        &self,
        habit: &Habit,
        rate: CompletionRate,
        probability: f64,
        current_streak: u32,
        streak_broke_recently: bool,
    ) -> Vec<HabitRecommendation> {
        let mut recommendations = Vec::new();
        let measured_rate = rate.value();

        if habit.frequency == HabitFrequency::Daily {
            if let Some(rate) = measured_rate {
                if rate < self.config.low_rate_threshold {
                    recommendations.push(HabitRecommendation {
                        habit_id: habit.id,
                        kind: OptimizationKind::ReduceFrequency,
                        message: format!(
                            "Completion rate is {:.0}%. Scheduling \"{}\" on fewer days could rebuild consistency",
                            rate * 100.0,
                            habit.title
                        ),
                    });
                }
            }
        }

        if streak_broke_recently {
            recommendations.push(HabitRecommendation {
                habit_id: habit.id,
                kind: OptimizationKind::RecoveryNudge,
                message: format!(
                    "Your \"{}\" streak just broke; completing it today starts the next one",
                    habit.title
                ),
            });
        }

        if habit.target_streak > 0
            && current_streak >= habit.target_streak
            && probability > self.config.raise_target_probability
        {
            recommendations.push(HabitRecommendation {
                habit_id: habit.id,
                kind: OptimizationKind::RaiseTarget,
                message: format!(
                    "\"{}\" is at {current_streak} consecutive completions with a {:.0}% success outlook; raise the target streak beyond {}",
                    habit.title,
                    probability * 100.0,
                    habit.target_streak
                ),
            });
        }

        if let Some(rate) = measured_rate {
            if rate < self.config.metadata_rate_threshold {
                if habit.trigger_cue.is_none() {
                    recommendations.push(HabitRecommendation {
                        habit_id: habit.id,
                        kind: OptimizationKind::DefineTrigger,
                        message: format!(
                            "\"{}\" has no trigger cue yet; attach it to an existing routine",
                            habit.title
                        ),
                    });
                }
                if habit.reward.is_none() {
                    recommendations.push(HabitRecommendation {
                        habit_id: habit.id,
                        kind: OptimizationKind::AttachReward,
                        message: format!(
                            "\"{}\" has no reward yet; add an immediate one to reinforce the loop",
                            habit.title
                        ),
                    });
                }
            }
        }

        recommendations.truncate(self.config.max_recommendations);
        recommendations
    }
}

/// Scheduled occurrences for a habit between two dates, inclusive.
fn scheduled_dates(habit: &Habit, from: NaiveDate, to: NaiveDate) -> Vec<NaiveDate> {
    let mut dates = Vec::new();
    let mut day = from;
    while day <= to {
        if habit.frequency.is_scheduled(day, habit.created_date) {
            dates.push(day);
        }
        day = match day.succ_opt() {
            Some(next) => next,
            None => break,
        };
    }
    dates
}

/// Streak momentum relative to the target, capped at 1.0.
fn momentum(current_streak: u32, target_streak: u32) -> f64 {
    if target_streak == 0 {
        return if current_streak > 0 { 1.0 } else { 0.0 };
    }
    (f64::from(current_streak) / f64::from(target_streak)).min(1.0)
}

/// Current streak and best prior run.
///
/// The current streak walks scheduled occurrences backward from the reference
/// date; a not-yet-logged reference day is skipped rather than counted as a
/// miss. The longest streak is the best completed run strictly before the
/// current one, which is what makes "new longest streak" a meaningful event.
fn streaks(
    scheduled: &[NaiveDate],
    completed: &BTreeSet<NaiveDate>,
    reference: NaiveDate,
) -> (u32, u32) {
    let mut current = 0_u32;
    let mut walk = scheduled.iter().rev().peekable();
    if let Some(latest) = walk.peek() {
        if **latest == reference && !completed.contains(*latest) {
            walk.next();
        }
    }
    for date in walk {
        if completed.contains(date) {
            current += 1;
        } else {
            break;
        }
    }

    // Completed runs over the full scheduled history, oldest first.
    let mut runs: Vec<u32> = Vec::new();
    let mut run = 0_u32;
    for date in scheduled {
        if completed.contains(date) {
            run += 1;
        } else if run > 0 {
            runs.push(run);
            run = 0;
        }
    }
    if run > 0 {
        runs.push(run);
    }

    // The trailing run is the current streak; everything before it is history.
    if current > 0 && !runs.is_empty() {
        runs.pop();
    }
    let longest = runs.into_iter().max().unwrap_or(0);

    (current, longest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineConfig;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn daily_habit(created: NaiveDate) -> Habit {
        Habit {
            id: Uuid::new_v4(),
            category: LifeCategory::HealthFitness,
            title: "Morning run".into(),
            frequency: HabitFrequency::Daily,
            created_date: created,
            target_streak: 7,
            trigger_cue: None,
            reward: None,
            environment_setup: None,
        }
    }

    #[test]
    fn missed_day_splits_current_and_longest_streak() {
        // Created 10 days before the reference; missed only day 5.
        let reference = date(2025, 6, 10);
        let created = date(2025, 6, 1);
        let habit = daily_habit(created);
        let completed: BTreeSet<NaiveDate> = (0..10)
            .filter(|offset| *offset != 4)
            .map(|offset| created + chrono::Duration::days(offset))
            .collect();
        let scheduled = scheduled_dates(&habit, created, reference);

        let (current, longest) = streaks(&scheduled, &completed, reference);
        assert_eq!(current, 5);
        assert_eq!(longest, 4);
    }

    #[test]
    fn unlogged_reference_day_does_not_break_the_streak() {
        let reference = date(2025, 6, 10);
        let created = date(2025, 6, 1);
        let habit = daily_habit(created);
        // Days 1-9 completed, reference day not logged yet.
        let completed: BTreeSet<NaiveDate> = (0..9)
            .map(|offset| created + chrono::Duration::days(offset))
            .collect();
        let scheduled = scheduled_dates(&habit, created, reference);

        let (current, longest) = streaks(&scheduled, &completed, reference);
        assert_eq!(current, 9);
        assert_eq!(longest, 0);
    }

    #[test]
    fn zero_completions_is_streak_zero() {
        let reference = date(2025, 6, 10);
        let habit = daily_habit(date(2025, 6, 1));
        let scheduled = scheduled_dates(&habit, habit.created_date, reference);
        let (current, longest) = streaks(&scheduled, &BTreeSet::new(), reference);
        assert_eq!(current, 0);
        assert_eq!(longest, 0);
    }

    #[test]
    fn momentum_caps_at_one() {
        assert!((momentum(20, 7) - 1.0).abs() < f64::EPSILON);
        assert!((momentum(3, 6) - 0.5).abs() < f64::EPSILON);
        assert!((momentum(0, 0) - 0.0).abs() < f64::EPSILON);
        assert!((momentum(2, 0) - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn probability_renormalizes_without_measurable_rate() {
        let predictor = HabitPredictor::new(EngineConfig::default().habit_prediction);
        // Only momentum is measurable: probability equals it exactly.
        let p = predictor.blend_probability(None, 0.6, None);
        assert!((p - 0.6).abs() < 1e-9);
    }

    #[test]
    fn weekly_schedule_produces_one_occurrence_per_week() {
        let created = date(2025, 6, 2); // Monday
        let mut habit = daily_habit(created);
        habit.frequency = HabitFrequency::Weekly;
        let scheduled = scheduled_dates(&habit, created, date(2025, 6, 30));
        assert_eq!(
            scheduled,
            vec![
                date(2025, 6, 2),
                date(2025, 6, 9),
                date(2025, 6, 16),
                date(2025, 6, 23),
                date(2025, 6, 30),
            ]
        );
    }
}
