// ABOUTME: Daily journal entry with wellness ratings and reflection text
// ABOUTME: One entry per calendar date; ratings sit on a fixed 1-10 scale
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Meridian Life Intelligence

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A daily reflection and wellness entry.
///
/// The four ratings share a fixed 1-10 scale; the snapshot boundary rejects
/// anything outside it. Text fields are free-form and never scored; only the
/// energy rating feeds the insight rules.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DailyEntry {
    /// Calendar day of the entry (one per date per user)
    pub date: NaiveDate,
    /// Energy level, 1-10
    pub energy: u8,
    /// Mood rating, 1-10
    pub mood: u8,
    /// Stress level, 1-10
    pub stress: u8,
    /// Sleep quality, 1-10
    pub sleep_quality: u8,
    /// Things the user is grateful for
    pub gratitude: Vec<String>,
    /// Wins of the day
    pub wins: Vec<String>,
    /// Challenges faced
    pub challenges: Vec<String>,
    /// Lessons learned
    pub lessons: Vec<String>,
    /// Priorities queued for tomorrow
    pub tomorrow_priorities: Vec<String>,
}
