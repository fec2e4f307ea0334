// ABOUTME: Immutable point-in-time input view with ingestion-time invariant checks
// ABOUTME: Rejects contract breaches at the boundary so engine passes never re-validate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Meridian Life Intelligence

//! Snapshot construction and validation.
//!
//! The engine computes over a validated, normalized snapshot. Invariant
//! violations (duplicate completions, out-of-range ratings, completions that
//! predate their habit) are programming errors on the collaborator side and
//! are rejected here with [`SnapshotError`]; inside the engine they are
//! assumed impossible. Collections are sorted into a canonical order during
//! construction so a full pass over the same data is byte-idempotent.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::models::{
    DailyEntry, Goal, GoalStatus, Habit, HabitCompletion, LifeAssessment, UserProfile,
};

/// Invariant violations detected while building a snapshot.
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// Two completion records share one (habit, date) slot
    #[error("duplicate completion for habit {habit_id} on {date}")]
    DuplicateCompletion {
        /// Habit the records reference
        habit_id: Uuid,
        /// The duplicated date
        date: NaiveDate,
    },

    /// A completion references a habit not present in the snapshot
    #[error("completion references unknown habit {habit_id}")]
    UnknownHabit {
        /// The dangling habit id
        habit_id: Uuid,
    },

    /// A completion is dated before its habit existed
    #[error("completion for habit {habit_id} on {date} predates habit creation ({created})")]
    CompletionBeforeCreation {
        /// Habit the record references
        habit_id: Uuid,
        /// Completion date
        date: NaiveDate,
        /// Habit creation date
        created: NaiveDate,
    },

    /// A completion is dated after the snapshot's reference date
    #[error("completion for habit {habit_id} on {date} is after the reference date {reference}")]
    CompletionInFuture {
        /// Habit the record references
        habit_id: Uuid,
        /// Completion date
        date: NaiveDate,
        /// Snapshot reference date
        reference: NaiveDate,
    },

    /// A progress value escaped the 0-100 range
    #[error("goal {goal_id} carries progress {value} outside 0-100")]
    ProgressOutOfRange {
        /// Offending goal
        goal_id: Uuid,
        /// Offending value
        value: f64,
    },

    /// An effort input escaped the 1-5 range
    #[error("goal {goal_id} carries effort input {value} outside 1-5")]
    EffortOutOfRange {
        /// Offending goal
        goal_id: Uuid,
        /// Offending value
        value: u8,
    },

    /// A wellness or satisfaction rating escaped the 1-10 scale
    #[error("rating {value} on {date} is outside the 1-10 scale")]
    RatingOutOfRange {
        /// Date of the offending record
        date: NaiveDate,
        /// Offending value
        value: u8,
    },

    /// Two daily entries share a date
    #[error("duplicate daily entry for {date}")]
    DuplicateDailyEntry {
        /// The duplicated date
        date: NaiveDate,
    },

    /// A completed goal is missing its completion date
    #[error("goal {goal_id} is completed but has no completed date")]
    CompletedWithoutDate {
        /// Offending goal
        goal_id: Uuid,
    },
}

/// An immutable, validated view of all entities for one computation pass.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Snapshot {
    /// "Today" for every calendar computation in the pass
    pub reference_date: NaiveDate,
    /// The user the data belongs to
    pub profile: UserProfile,
    /// Goals, sorted by id
    pub goals: Vec<Goal>,
    /// Habits, sorted by id
    pub habits: Vec<Habit>,
    /// Completions, sorted by (habit id, date)
    pub completions: Vec<HabitCompletion>,
    /// Daily entries, sorted by date
    pub daily_entries: Vec<DailyEntry>,
    /// Assessments, sorted by date (latest last)
    pub assessments: Vec<LifeAssessment>,
}

impl Snapshot {
    /// Validate and normalize collaborator-supplied collections.
    ///
    /// # Errors
    ///
    /// Returns a [`SnapshotError`] describing the first invariant violation
    /// found. A snapshot that fails here indicates a collaborator bug, not a
    /// recoverable user condition.
    pub fn new(
        reference_date: NaiveDate,
        profile: UserProfile,
        mut goals: Vec<Goal>,
        mut habits: Vec<Habit>,
        mut completions: Vec<HabitCompletion>,
        mut daily_entries: Vec<DailyEntry>,
        mut assessments: Vec<LifeAssessment>,
    ) -> Result<Self, SnapshotError> {
        validate_goals(&goals)?;
        validate_completions(reference_date, &habits, &completions)?;
        validate_entries(&daily_entries)?;
        validate_assessments(&assessments)?;

        goals.sort_by_key(|g| g.id);
        habits.sort_by_key(|h| h.id);
        completions.sort_by_key(|c| (c.habit_id, c.date));
        daily_entries.sort_by_key(|e| e.date);
        assessments.sort_by_key(|a| a.date);

        Ok(Self {
            reference_date,
            profile,
            goals,
            habits,
            completions,
            daily_entries,
            assessments,
        })
    }

    /// Completions belonging to one habit, in date order.
    pub fn completions_for(&self, habit_id: Uuid) -> impl Iterator<Item = &HabitCompletion> {
        self.completions
            .iter()
            .filter(move |c| c.habit_id == habit_id)
    }

    /// Daily entries within the trailing window ending at the reference date.
    pub fn entries_in_trailing_days(&self, days: u32) -> impl Iterator<Item = &DailyEntry> {
        let start = self.reference_date - chrono::Duration::days(i64::from(days) - 1);
        self.daily_entries
            .iter()
            .filter(move |e| e.date >= start && e.date <= self.reference_date)
    }

    /// Number of goals still in `Active` status.
    #[must_use]
    pub fn active_goal_count(&self) -> usize {
        self.goals.iter().filter(|g| g.is_active()).count()
    }

    /// The most recent assessment carrying a rating for `category`.
    #[must_use]
    pub fn latest_rating_for(&self, category: crate::models::LifeCategory) -> Option<u8> {
        self.assessments
            .iter()
            .rev()
            .find_map(|a| a.ratings.get(&category).copied())
    }
}

fn validate_goals(goals: &[Goal]) -> Result<(), SnapshotError> {
    for goal in goals {
        if !(1..=5).contains(&goal.complexity) {
            return Err(SnapshotError::EffortOutOfRange {
                goal_id: goal.id,
                value: goal.complexity,
            });
        }
        if !(1..=5).contains(&goal.resource_availability) {
            return Err(SnapshotError::EffortOutOfRange {
                goal_id: goal.id,
                value: goal.resource_availability,
            });
        }
        if let Some(progress) = goal.manual_progress {
            if !(0.0..=100.0).contains(&progress) {
                return Err(SnapshotError::ProgressOutOfRange {
                    goal_id: goal.id,
                    value: progress,
                });
            }
        }
        for sample in &goal.progress_history {
            if !(0.0..=100.0).contains(&sample.percent) {
                return Err(SnapshotError::ProgressOutOfRange {
                    goal_id: goal.id,
                    value: sample.percent,
                });
            }
        }
        if goal.status == GoalStatus::Completed && goal.completed_date.is_none() {
            return Err(SnapshotError::CompletedWithoutDate { goal_id: goal.id });
        }
    }
    Ok(())
}

fn validate_completions(
    reference_date: NaiveDate,
    habits: &[Habit],
    completions: &[HabitCompletion],
) -> Result<(), SnapshotError> {
    let mut seen = BTreeSet::new();
    for completion in completions {
        if !seen.insert((completion.habit_id, completion.date)) {
            return Err(SnapshotError::DuplicateCompletion {
                habit_id: completion.habit_id,
                date: completion.date,
            });
        }
        let Some(habit) = habits.iter().find(|h| h.id == completion.habit_id) else {
            return Err(SnapshotError::UnknownHabit {
                habit_id: completion.habit_id,
            });
        };
        if completion.date < habit.created_date {
            return Err(SnapshotError::CompletionBeforeCreation {
                habit_id: completion.habit_id,
                date: completion.date,
                created: habit.created_date,
            });
        }
        if completion.date > reference_date {
            return Err(SnapshotError::CompletionInFuture {
                habit_id: completion.habit_id,
                date: completion.date,
                reference: reference_date,
            });
        }
    }
    Ok(())
}

fn validate_entries(entries: &[DailyEntry]) -> Result<(), SnapshotError> {
    let mut seen = BTreeSet::new();
    for entry in entries {
        if !seen.insert(entry.date) {
            return Err(SnapshotError::DuplicateDailyEntry { date: entry.date });
        }
        for rating in [entry.energy, entry.mood, entry.stress, entry.sleep_quality] {
            if !(1..=10).contains(&rating) {
                return Err(SnapshotError::RatingOutOfRange {
                    date: entry.date,
                    value: rating,
                });
            }
        }
    }
    Ok(())
}

fn validate_assessments(assessments: &[LifeAssessment]) -> Result<(), SnapshotError> {
    for assessment in assessments {
        for rating in assessment.ratings.values() {
            if !(1..=10).contains(rating) {
                return Err(SnapshotError::RatingOutOfRange {
                    date: assessment.date,
                    value: *rating,
                });
            }
        }
    }
    Ok(())
}
