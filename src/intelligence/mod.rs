// ABOUTME: The four analytics components and the Engine pipeline that runs them in order
// ABOUTME: Pure functions of (snapshot, history, config); same inputs always produce the same report
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Meridian Life Intelligence

//! Intelligence components.
//!
//! Each component is independently constructible and testable; [`Engine`]
//! wires them in dependency order. Goal scoring and habit prediction read
//! only the snapshot, life analytics reads their outputs, and insight
//! generation reads everything. Nothing here performs I/O, reads clocks, or
//! mutates the snapshot.

pub mod constants;
pub mod goal_scorer;
pub mod habit_predictor;
pub mod insight_generator;
pub mod life_analytics;

pub use goal_scorer::{CompletionEstimate, GoalScore, GoalScorer, ProgressSource};
pub use habit_predictor::{
    CompletionRate, HabitForecast, HabitPredictor, HabitRecommendation, OptimizationKind,
};
pub use insight_generator::{
    Insight, InsightGenerator, InsightKind, InsightTarget, InsightTemplate,
};
pub use life_analytics::{
    CategoryScore, LifeAnalytics, LifeSummary, PeriodRecord, ScoreMeasure, TrendClassification,
};

use serde::{Deserialize, Serialize};

use crate::config::EngineConfig;
use crate::snapshot::Snapshot;

/// Everything one full pass produces.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EngineReport {
    /// Per-goal scores in priority order
    pub goal_scores: Vec<GoalScore>,
    /// Per-habit forecasts in habit-id order
    pub habit_forecasts: Vec<HabitForecast>,
    /// Aggregated life-level analytics
    pub life_summary: LifeSummary,
    /// Prioritized insights
    pub insights: Vec<Insight>,
}

/// Runs the full analytics pipeline over a snapshot.
pub struct Engine {
    goal_scorer: GoalScorer,
    habit_predictor: HabitPredictor,
    life_analytics: LifeAnalytics,
    insight_generator: InsightGenerator,
}

impl Engine {
    /// Build an engine from a validated configuration
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        Self {
            goal_scorer: GoalScorer::new(config.goal_scoring),
            habit_predictor: HabitPredictor::new(config.habit_prediction),
            life_analytics: LifeAnalytics::new(config.life_analytics),
            insight_generator: InsightGenerator::new(config.insights),
        }
    }

    /// Run all four components over one snapshot.
    ///
    /// `history` carries previous periods' overall scores for trend
    /// classification; pass an empty slice on the first run. The pass is
    /// deterministic: identical snapshot, history, and configuration always
    /// produce an identical report.
    #[must_use]
    pub fn run(&self, snapshot: &Snapshot, history: &[PeriodRecord]) -> EngineReport {
        tracing::debug!(
            reference_date = %snapshot.reference_date,
            goals = snapshot.goals.len(),
            habits = snapshot.habits.len(),
            "running intelligence pass"
        );

        let goal_scores = self.goal_scorer.score_goals(snapshot);
        let habit_forecasts = self.habit_predictor.forecast_habits(snapshot);
        let life_summary =
            self.life_analytics
                .summarize(snapshot, &goal_scores, &habit_forecasts, history);
        let insights =
            self.insight_generator
                .generate(snapshot, &goal_scores, &habit_forecasts, &life_summary);

        EngineReport {
            goal_scores,
            habit_forecasts,
            life_summary,
            insights,
        }
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}
