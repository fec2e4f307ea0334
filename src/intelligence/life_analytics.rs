// ABOUTME: Category, overall, and balance scoring plus period-over-period trend classification
// ABOUTME: Missing sub-components drop out with weight renormalization, never default to zero
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Meridian Life Intelligence

//! Life analytics component.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::constants::scales;
use super::goal_scorer::GoalScore;
use super::habit_predictor::HabitForecast;
use crate::config::LifeAnalyticsConfig;
use crate::models::{GoalStatus, LifeCategory};
use crate::snapshot::Snapshot;

/// A score that may be explicitly undetermined.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum ScoreMeasure {
    /// A measured 0-100 score
    Measured(f64),
    /// Too little data for a meaningful number
    InsufficientData,
}

impl ScoreMeasure {
    /// The measured value, if any
    #[must_use]
    pub const fn value(self) -> Option<f64> {
        match self {
            Self::Measured(score) => Some(score),
            Self::InsufficientData => None,
        }
    }
}

/// Period-over-period movement of the overall score.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TrendClassification {
    /// Overall score rose beyond the improving delta
    Improving,
    /// Overall score fell beyond the declining delta
    Declining,
    /// Movement within the stable band
    Stable,
    /// Fewer than two measurable periods
    NotYetTrendable,
}

/// One category's score with its contributing components.
///
/// Absent components are `None`, never silently zero; the score is the
/// renormalized weighted mean of whichever components are present.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategoryScore {
    /// The life area
    pub category: LifeCategory,
    /// Renormalized weighted score, 0-100
    pub score: f64,
    /// Mean progress of active and completed goals, 0-100
    pub goal_component: Option<f64>,
    /// Mean habit success probability rescaled to 0-100
    pub habit_component: Option<f64>,
    /// Latest assessment satisfaction rescaled from 1-10 to 0-100
    pub assessment_component: Option<f64>,
}

/// A previous period's overall score, supplied by the collaborator.
///
/// The engine stays stateless between invocations; trend classification
/// reads this short rolling history instead of remembering anything.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PeriodRecord {
    /// End date of the period the score belongs to
    pub period_end: NaiveDate,
    /// The period's overall life score, 0-100
    pub overall_score: f64,
}

/// Aggregated life-level analytics for one pass.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LifeSummary {
    /// Scores for every category with at least one data source, sorted by category
    pub category_scores: Vec<CategoryScore>,
    /// Mean of scored categories, or insufficient data below the coverage threshold
    pub overall_score: ScoreMeasure,
    /// Inverse coefficient of variation across category scores, 0-100
    pub balance_score: ScoreMeasure,
    /// Movement versus the previous period
    pub trend: TrendClassification,
}

/// Aggregates component outputs into life-level scores.
pub struct LifeAnalytics {
    config: LifeAnalyticsConfig,
}

impl LifeAnalytics {
    /// Create an analyzer with the given configuration
    #[must_use]
    pub const fn new(config: LifeAnalyticsConfig) -> Self {
        Self { config }
    }

    /// Aggregate goal scores, habit forecasts, and assessment data into a
    /// category/overall/balance/trend summary.
    #[must_use]
    pub fn summarize(
        &self,
        snapshot: &Snapshot,
        goal_scores: &[GoalScore],
        habit_forecasts: &[HabitForecast],
        history: &[PeriodRecord],
    ) -> LifeSummary {
        let category_scores: Vec<CategoryScore> = LifeCategory::ALL
            .iter()
            .filter_map(|category| {
                self.category_score(*category, snapshot, goal_scores, habit_forecasts)
            })
            .collect();

        let overall_score = self.overall_score(&category_scores);
        let balance_score = match overall_score {
            ScoreMeasure::Measured(_) => balance_of(&category_scores),
            ScoreMeasure::InsufficientData => ScoreMeasure::InsufficientData,
        };
        let trend = self.classify_trend(overall_score, history);

        tracing::debug!(
            scored_categories = category_scores.len(),
            ?trend,
            "aggregated life summary"
        );

        LifeSummary {
            category_scores,
            overall_score,
            balance_score,
            trend,
        }
    }

    /// Weighted mean of the present components, with renormalized weights.
    fn category_score(
        &self,
        category: LifeCategory,
        snapshot: &Snapshot,
        goal_scores: &[GoalScore],
        habit_forecasts: &[HabitForecast],
    ) -> Option<CategoryScore> {
        let goal_component = mean(
            goal_scores
                .iter()
                .filter(|s| {
                    s.category == category
                        && matches!(s.status, GoalStatus::Active | GoalStatus::Completed)
                })
                .map(|s| s.progress_percent),
        );
        let habit_component = mean(
            habit_forecasts
                .iter()
                .filter(|f| f.category == category)
                .map(|f| f.success_probability * scales::PERCENT_MAX),
        );
        let assessment_component = snapshot
            .latest_rating_for(category)
            .map(|rating| rescale_rating(rating));

        let components = [
            (self.config.goal_weight, goal_component),
            (self.config.habit_weight, habit_component),
            (self.config.assessment_weight, assessment_component),
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
            return None; // no data at all in this category
        }

        Some(CategoryScore {
            category,
            score: (weighted / total_weight).clamp(0.0, scales::PERCENT_MAX),
            goal_component,
            habit_component,
            assessment_component,
        })
    }

    /// Mean of scored categories, gated on the coverage threshold.
    fn overall_score(&self, category_scores: &[CategoryScore]) -> ScoreMeasure {
        if category_scores.len() < self.config.min_category_coverage {
            return ScoreMeasure::InsufficientData;
        }
        match mean(category_scores.iter().map(|c| c.score)) {
            Some(score) => ScoreMeasure::Measured(score.clamp(0.0, scales::PERCENT_MAX)),
            None => ScoreMeasure::InsufficientData,
        }
    }

    fn classify_trend(
        &self,
        current: ScoreMeasure,
        history: &[PeriodRecord],
    ) -> TrendClassification {
        let (Some(current), Some(previous)) = (current.value(), history.last()) else {
            return TrendClassification::NotYetTrendable;
        };
        let delta = current - previous.overall_score;
        if delta > self.config.trend_improving_delta {
            TrendClassification::Improving
        } else if delta < self.config.trend_declining_delta {
            TrendClassification::Declining
        } else {
            TrendClassification::Stable
        }
    }
}

/// Rescale a 1-10 satisfaction rating onto 0-100.
fn rescale_rating(rating: u8) -> f64 {
    let span = f64::from(scales::RATING_MAX - scales::RATING_MIN);
    f64::from(rating.clamp(scales::RATING_MIN, scales::RATING_MAX) - scales::RATING_MIN) / span
        * scales::PERCENT_MAX
}

/// Inverse coefficient of variation, pinned at 100 for equal scores.
fn balance_of(category_scores: &[CategoryScore]) -> ScoreMeasure {
    let values: Vec<f64> = category_scores.iter().map(|c| c.score).collect();
    let Some(mean_score) = mean(values.iter().copied()) else {
        return ScoreMeasure::InsufficientData;
    };

    if mean_score <= f64::EPSILON {
        // Every score is zero: perfectly (if grimly) balanced.
        return ScoreMeasure::Measured(scales::PERCENT_MAX);
    }

    let variance = values
        .iter()
        .map(|v| {
            let diff = v - mean_score;
            diff * diff
        })
        .sum::<f64>()
        / values.len() as f64;
    let coefficient_of_variation = variance.sqrt() / mean_score;
    ScoreMeasure::Measured(
        ((1.0 - coefficient_of_variation) * scales::PERCENT_MAX).clamp(0.0, scales::PERCENT_MAX),
    )
}

fn mean(values: impl Iterator<Item = f64>) -> Option<f64> {
    let mut sum = 0.0;
    let mut count = 0_usize;
    for value in values {
        sum += value;
        count += 1;
    }
    if count == 0 {
        None
    } else {
        Some(sum / count as f64)
    }
}
