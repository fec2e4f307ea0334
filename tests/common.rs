// ABOUTME: Shared test fixtures and setup for integration tests
// ABOUTME: Snapshot builders with sensible defaults so tests state only what they vary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Meridian Life Intelligence
#![allow(dead_code)]

//! Shared test utilities for `meridian_intelligence` integration tests.

use std::sync::Once;

use chrono::NaiveDate;
use uuid::Uuid;

use meridian_intelligence::models::{
    DailyEntry, Goal, GoalStatus, Habit, HabitCompletion, HabitFrequency, LifeCategory,
    UserProfile,
};
use meridian_intelligence::snapshot::Snapshot;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // TEST_LOG controls verbosity; defaults to WARN for quiet tests
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Profile with no focus areas; tests that need focus set it explicitly.
pub fn test_profile() -> UserProfile {
    UserProfile {
        name: "Test User".into(),
        primary_focus: Vec::new(),
        created_date: date(2025, 1, 1),
    }
}

/// Active goal with mid-scale effort inputs and a far-off target.
pub fn test_goal(category: LifeCategory) -> Goal {
    Goal {
        id: Uuid::new_v4(),
        category,
        title: "Test goal".into(),
        description: String::new(),
        status: GoalStatus::Active,
        created_date: date(2025, 1, 1),
        target_date: date(2025, 12, 31),
        completed_date: None,
        milestones: Vec::new(),
        complexity: 3,
        resource_availability: 3,
        manual_progress: None,
        progress_history: Vec::new(),
    }
}

/// Daily habit with a one-week target streak and no loop metadata.
pub fn test_habit(category: LifeCategory, created: NaiveDate) -> Habit {
    Habit {
        id: Uuid::new_v4(),
        category,
        title: "Test habit".into(),
        frequency: HabitFrequency::Daily,
        created_date: created,
        target_streak: 7,
        trigger_cue: None,
        reward: None,
        environment_setup: None,
    }
}

pub fn completion(habit_id: Uuid, date: NaiveDate, completed: bool) -> HabitCompletion {
    HabitCompletion {
        habit_id,
        date,
        completed,
        note: None,
    }
}

/// Daily entry with the given energy and neutral ratings elsewhere.
pub fn entry(date: NaiveDate, energy: u8) -> DailyEntry {
    DailyEntry {
        date,
        energy,
        mood: 5,
        stress: 5,
        sleep_quality: 5,
        gratitude: Vec::new(),
        wins: Vec::new(),
        challenges: Vec::new(),
        lessons: Vec::new(),
        tomorrow_priorities: Vec::new(),
    }
}

/// Snapshot over the given collections with an empty journal and no assessments.
pub fn snapshot(
    reference_date: NaiveDate,
    goals: Vec<Goal>,
    habits: Vec<Habit>,
    completions: Vec<HabitCompletion>,
) -> Snapshot {
    init_test_logging();
    Snapshot::new(
        reference_date,
        test_profile(),
        goals,
        habits,
        completions,
        Vec::new(),
        Vec::new(),
    )
    .unwrap()
}
