// ABOUTME: Integration tests for insight rules, their triggers, and deterministic ordering
// ABOUTME: Runs the full engine so insights see the same inputs collaborators would supply
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Meridian Life Intelligence

mod common;

use chrono::Duration;
use meridian_intelligence::config::EngineConfig;
use meridian_intelligence::intelligence::{InsightKind, InsightTemplate};
use meridian_intelligence::models::{GoalStatus, LifeCategory, ProgressSample};
use meridian_intelligence::snapshot::Snapshot;
use meridian_intelligence::Engine;

use common::{date, entry, snapshot, test_goal, test_profile};

fn engine() -> Engine {
    Engine::new(EngineConfig::default())
}

#[test]
fn stalled_goal_raises_a_warning() {
    let reference = date(2025, 6, 15);
    let mut goal = test_goal(LifeCategory::CareerEducation);
    goal.progress_history = vec![
        ProgressSample { date: date(2025, 4, 1), percent: 10.0 },
        ProgressSample { date: date(2025, 4, 20), percent: 30.0 },
    ];
    goal.manual_progress = Some(30.0);

    let snap = snapshot(reference, vec![goal.clone()], Vec::new(), Vec::new());
    let report = engine().run(&snap, &[]);

    let stalled = report
        .insights
        .iter()
        .find(|i| i.template == InsightTemplate::StalledGoal)
        .expect("stalled goal insight");
    assert_eq!(stalled.kind, InsightKind::Warning);
    assert_eq!(stalled.data["idle_days"], 56);
}

#[test]
fn goal_with_no_history_stalls_from_its_creation_date() {
    let reference = date(2025, 6, 15);
    let goal = test_goal(LifeCategory::Community); // created 2025-01-01, no history

    let snap = snapshot(reference, vec![goal], Vec::new(), Vec::new());
    let report = engine().run(&snap, &[]);

    assert!(report
        .insights
        .iter()
        .any(|i| i.template == InsightTemplate::StalledGoal));
}

#[test]
fn recently_touched_goal_does_not_stall() {
    let reference = date(2025, 6, 15);
    let mut goal = test_goal(LifeCategory::CareerEducation);
    goal.progress_history = vec![
        ProgressSample { date: date(2025, 6, 1), percent: 10.0 },
        ProgressSample { date: date(2025, 6, 10), percent: 30.0 },
    ];

    let snap = snapshot(reference, vec![goal], Vec::new(), Vec::new());
    let report = engine().run(&snap, &[]);

    assert!(!report
        .insights
        .iter()
        .any(|i| i.template == InsightTemplate::StalledGoal));
}

#[test]
fn stall_warning_fires_at_the_exact_day_boundary() {
    let reference = date(2025, 6, 15);
    let threshold = EngineConfig::default().insights.stalled_goal_days;

    let mut at_boundary = test_goal(LifeCategory::CareerEducation);
    at_boundary.progress_history = vec![
        ProgressSample { date: date(2025, 5, 20), percent: 10.0 },
        ProgressSample { date: reference - Duration::days(threshold), percent: 30.0 },
    ];
    let mut inside = test_goal(LifeCategory::CareerEducation);
    inside.progress_history = vec![
        ProgressSample { date: date(2025, 5, 20), percent: 10.0 },
        ProgressSample { date: reference - Duration::days(threshold - 1), percent: 30.0 },
    ];

    let stalled = |goal| {
        let snap = snapshot(reference, vec![goal], Vec::new(), Vec::new());
        engine()
            .run(&snap, &[])
            .insights
            .iter()
            .any(|i| i.template == InsightTemplate::StalledGoal)
    };

    assert!(stalled(at_boundary));
    assert!(!stalled(inside));
}

#[test]
fn too_many_active_goals_flags_overcommitment() {
    let goals: Vec<_> = (0..8).map(|_| test_goal(LifeCategory::Finances)).collect();
    let snap = snapshot(date(2025, 6, 15), goals, Vec::new(), Vec::new());
    let report = engine().run(&snap, &[]);

    let insight = report
        .insights
        .iter()
        .find(|i| i.template == InsightTemplate::Overcommitment)
        .expect("overcommitment insight");
    assert_eq!(insight.data["active_goals"], 8);
}

#[test]
fn low_trailing_energy_raises_the_top_warning() {
    let reference = date(2025, 6, 15);
    let entries: Vec<_> = (0..7)
        .map(|offset| entry(reference - Duration::days(offset), 2))
        .collect();
    // A stalled goal alongside, to check ordering against the energy warning.
    let goal = test_goal(LifeCategory::HealthFitness);
    let snap = Snapshot::new(
        reference,
        test_profile(),
        vec![goal],
        Vec::new(),
        Vec::new(),
        entries,
        Vec::new(),
    )
    .unwrap();
    let report = engine().run(&snap, &[]);

    assert_eq!(report.insights[0].template, InsightTemplate::EnergyConcern);
    assert_eq!(report.insights[0].kind, InsightKind::Warning);
    assert!(report
        .insights
        .iter()
        .any(|i| i.template == InsightTemplate::StalledGoal));
}

#[test]
fn unbroken_journaling_run_earns_a_celebration() {
    let reference = date(2025, 6, 15);
    let entries: Vec<_> = (0..10)
        .map(|offset| entry(reference - Duration::days(offset), 7))
        .collect();
    let snap = Snapshot::new(
        reference,
        test_profile(),
        Vec::new(),
        Vec::new(),
        Vec::new(),
        entries,
        Vec::new(),
    )
    .unwrap();
    let report = engine().run(&snap, &[]);

    let milestone = report
        .insights
        .iter()
        .find(|i| i.template == InsightTemplate::ConsistencyMilestone)
        .expect("consistency insight");
    assert_eq!(milestone.kind, InsightKind::Celebration);
    assert_eq!(milestone.data["entry_streak"], 10);
}

#[test]
fn gap_in_journaling_resets_the_run() {
    let reference = date(2025, 6, 15);
    // Five recent entries, then a gap, then more.
    let mut entries: Vec<_> = (0..5)
        .map(|offset| entry(reference - Duration::days(offset), 7))
        .collect();
    entries.push(entry(reference - Duration::days(6), 7));
    let snap = Snapshot::new(
        reference,
        test_profile(),
        Vec::new(),
        Vec::new(),
        Vec::new(),
        entries,
        Vec::new(),
    )
    .unwrap();
    let report = engine().run(&snap, &[]);

    assert!(!report
        .insights
        .iter()
        .any(|i| i.template == InsightTemplate::ConsistencyMilestone));
}

#[test]
fn fresh_completion_is_celebrated_and_old_ones_are_not() {
    let reference = date(2025, 6, 15);
    let mut fresh = test_goal(LifeCategory::Creativity);
    fresh.status = GoalStatus::Completed;
    fresh.completed_date = Some(date(2025, 6, 12));
    let mut old = test_goal(LifeCategory::Creativity);
    old.status = GoalStatus::Completed;
    old.completed_date = Some(date(2025, 3, 1));

    let snap = snapshot(reference, vec![fresh.clone(), old], Vec::new(), Vec::new());
    let report = engine().run(&snap, &[]);

    let celebrations: Vec<_> = report
        .insights
        .iter()
        .filter(|i| i.template == InsightTemplate::GoalCompleted)
        .collect();
    assert_eq!(celebrations.len(), 1);
    assert!(celebrations[0].message.contains(&fresh.title));
}

#[test]
fn top_priority_goal_without_milestones_gets_breakdown_advice() {
    let goal = test_goal(LifeCategory::PersonalGrowth);
    let snap = snapshot(date(2025, 6, 15), vec![goal], Vec::new(), Vec::new());
    let report = engine().run(&snap, &[]);

    assert!(report
        .insights
        .iter()
        .any(|i| i.template == InsightTemplate::BreakItDown));
}

#[test]
fn insights_are_sorted_by_priority_descending() {
    let reference = date(2025, 6, 15);
    let goals: Vec<_> = (0..8).map(|_| test_goal(LifeCategory::Finances)).collect();
    let snap = snapshot(reference, goals, Vec::new(), Vec::new());
    let report = engine().run(&snap, &[]);

    assert!(!report.insights.is_empty());
    for pair in report.insights.windows(2) {
        assert!(pair[0].priority >= pair[1].priority);
    }
}
