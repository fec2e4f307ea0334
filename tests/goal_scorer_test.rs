// ABOUTME: Integration tests for goal scoring, priority ranking, and completion estimation
// ABOUTME: Exercises the scorer through real snapshots rather than unit-level helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Meridian Life Intelligence

mod common;

use chrono::Duration;
use meridian_intelligence::config::EngineConfig;
use meridian_intelligence::intelligence::{CompletionEstimate, GoalScorer, ProgressSource};
use meridian_intelligence::models::{GoalStatus, LifeCategory, Milestone, ProgressSample};

use common::{date, snapshot, test_goal, test_profile};

fn scorer() -> GoalScorer {
    GoalScorer::new(EngineConfig::default().goal_scoring)
}

#[test]
fn overdue_active_goal_ranks_above_distant_one() {
    let reference = date(2025, 6, 15);
    let mut overdue = test_goal(LifeCategory::Finances);
    overdue.target_date = date(2025, 6, 1);
    let mut distant = test_goal(LifeCategory::Creativity);
    distant.target_date = date(2025, 12, 31);

    let snap = snapshot(reference, vec![overdue.clone(), distant], Vec::new(), Vec::new());
    let scores = scorer().score_goals(&snap);

    assert_eq!(scores[0].goal_id, overdue.id);
    assert!(scores[0].overdue);
    assert_eq!(scores[0].priority_rank, 1);
    assert_eq!(scores[1].priority_rank, 2);
}

#[test]
fn active_goals_outrank_completed_ones_regardless_of_urgency() {
    let reference = date(2025, 6, 15);
    let mut finished = test_goal(LifeCategory::HealthFitness);
    finished.status = GoalStatus::Completed;
    finished.completed_date = Some(date(2025, 6, 1));
    finished.target_date = date(2025, 6, 1); // long past
    let active = test_goal(LifeCategory::CareerEducation);

    let snap = snapshot(reference, vec![finished.clone(), active.clone()], Vec::new(), Vec::new());
    let scores = scorer().score_goals(&snap);

    assert_eq!(scores[0].goal_id, active.id);
    assert_eq!(scores[1].goal_id, finished.id);
    assert!(!scores[1].overdue);
}

#[test]
fn focus_category_breaks_difficulty_ties() {
    let reference = date(2025, 6, 15);
    let target = reference + Duration::days(30);
    let mut focused = test_goal(LifeCategory::HealthFitness);
    focused.target_date = target;
    let mut unfocused = test_goal(LifeCategory::Finances);
    unfocused.target_date = target;

    let mut profile = test_profile();
    profile.primary_focus = vec![LifeCategory::HealthFitness];
    let snap = meridian_intelligence::snapshot::Snapshot::new(
        reference,
        profile,
        vec![focused.clone(), unfocused],
        Vec::new(),
        Vec::new(),
        Vec::new(),
        Vec::new(),
    )
    .unwrap();
    let scores = scorer().score_goals(&snap);

    assert_eq!(scores[0].goal_id, focused.id);
    assert!(scores[0].focus_match);
}

#[test]
fn milestone_progress_reported_with_source() {
    let mut goal = test_goal(LifeCategory::PersonalGrowth);
    goal.milestones = vec![
        Milestone { description: "draft".into(), done: true },
        Milestone { description: "review".into(), done: true },
        Milestone { description: "publish".into(), done: false },
        Milestone { description: "share".into(), done: false },
    ];
    let snap = snapshot(date(2025, 6, 15), vec![goal], Vec::new(), Vec::new());
    let scores = scorer().score_goals(&snap);

    assert!((scores[0].progress_percent - 50.0).abs() < f64::EPSILON);
    assert_eq!(scores[0].progress_source, ProgressSource::Milestones);
}

#[test]
fn goal_without_progress_data_scores_zero_unreported() {
    let snap = snapshot(
        date(2025, 6, 15),
        vec![test_goal(LifeCategory::Community)],
        Vec::new(),
        Vec::new(),
    );
    let scores = scorer().score_goals(&snap);

    assert!((scores[0].progress_percent - 0.0).abs() < f64::EPSILON);
    assert_eq!(scores[0].progress_source, ProgressSource::Unreported);
    assert_eq!(scores[0].estimated_completion, CompletionEstimate::InsufficientData);
}

#[test]
fn progress_history_drives_estimate_and_last_change() {
    let mut goal = test_goal(LifeCategory::CareerEducation);
    goal.progress_history = vec![
        ProgressSample { date: date(2025, 5, 1), percent: 10.0 },
        ProgressSample { date: date(2025, 5, 11), percent: 30.0 },
        ProgressSample { date: date(2025, 5, 21), percent: 30.0 },
    ];
    goal.manual_progress = Some(30.0);
    let snap = snapshot(date(2025, 6, 15), vec![goal], Vec::new(), Vec::new());
    let scores = scorer().score_goals(&snap);

    // Last actual change was the 10 -> 30 step on May 11.
    assert_eq!(scores[0].last_progress_change, Some(date(2025, 5, 11)));
    // 20% over 20 days = 1%/day; 70% remaining from May 21 -> July 30.
    assert_eq!(
        scores[0].estimated_completion,
        CompletionEstimate::Date(date(2025, 7, 30))
    );
}

#[test]
fn identical_snapshots_produce_identical_scores() {
    let mut goal = test_goal(LifeCategory::Spirituality);
    goal.manual_progress = Some(42.0);
    let snap = snapshot(date(2025, 6, 15), vec![goal], Vec::new(), Vec::new());

    let first = scorer().score_goals(&snap);
    let second = scorer().score_goals(&snap);
    assert_eq!(first, second);
}
