// ABOUTME: Habit entity, scheduling frequency, and per-day completion records
// ABOUTME: Completions back-reference the habit by id rather than being embedded
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Meridian Life Intelligence

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::LifeCategory;

/// How often a habit is scheduled to occur.
///
/// `Weekly` and `Monthly` are anchored on the habit's creation date: the
/// creation weekday, or the creation day-of-month clamped to short months.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum HabitFrequency {
    /// Every day
    Daily,
    /// Once a week, on the creation weekday
    Weekly,
    /// Once a month, on the creation day-of-month
    Monthly,
    /// An explicit set of weekdays
    Custom(Vec<Weekday>),
}

impl HabitFrequency {
    /// Whether `date` is a scheduled occurrence for a habit created on `anchor`.
    #[must_use]
    pub fn is_scheduled(&self, date: NaiveDate, anchor: NaiveDate) -> bool {
        match self {
            Self::Daily => true,
            Self::Weekly => date.weekday() == anchor.weekday(),
            Self::Monthly => {
                let target_day = anchor.day().min(days_in_month(date.year(), date.month()));
                date.day() == target_day
            }
            Self::Custom(days) => days.contains(&date.weekday()),
        }
    }
}

/// Number of days in the given month, with a conservative fallback.
fn days_in_month(year: i32, month: u32) -> u32 {
    let first_of_next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    first_of_next
        .and_then(|d| d.pred_opt())
        .map_or(28, |d| d.day())
}

/// A recurring habit in one of the twelve life areas.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Habit {
    /// Stable identifier
    pub id: Uuid,
    /// Life area this habit belongs to
    pub category: LifeCategory,
    /// Short title
    pub title: String,
    /// Scheduling frequency
    pub frequency: HabitFrequency,
    /// When the habit was created; anchors the schedule
    pub created_date: NaiveDate,
    /// Streak length the user is aiming for
    pub target_streak: u32,
    /// Cue that should start the habit (free-form, not scored)
    pub trigger_cue: Option<String>,
    /// Immediate reward after the habit (free-form, not scored)
    pub reward: Option<String>,
    /// Environment preparation notes (free-form, not scored)
    pub environment_setup: Option<String>,
}

/// One day's completion record for a habit.
///
/// At most one record may exist per (habit id, date); the snapshot boundary
/// rejects duplicates.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HabitCompletion {
    /// Habit this record belongs to
    pub habit_id: Uuid,
    /// Calendar day of the occurrence
    pub date: NaiveDate,
    /// Whether the habit was done that day
    pub completed: bool,
    /// Optional free-form note
    pub note: Option<String>,
}
