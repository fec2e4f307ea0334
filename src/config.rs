// ABOUTME: Configuration-driven constants for engine heuristics replacing magic numbers
// ABOUTME: Type-safe, environment-overridable parameters for all four components
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Meridian Life Intelligence

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Engine configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An environment override did not parse
    #[error("Invalid value for {0}")]
    InvalidValue(String),

    /// A validation rule failed
    #[error("Configuration validation failed: {0}")]
    ValidationFailed(String),
}

/// Goal difficulty and ranking parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalScoringConfig {
    /// Weight of the complexity component in the difficulty score
    pub complexity_weight: f64,

    /// Weight of the resource-scarcity component in the difficulty score
    pub resource_scarcity_weight: f64,

    /// Weight of the time-pressure component in the difficulty score
    pub time_pressure_weight: f64,

    /// Days before the target date at which time pressure starts rising from 0
    pub time_pressure_horizon_days: i64,
}

/// Habit streak, rate, and probability parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HabitPredictionConfig {
    /// Trailing window for completion-rate measurement, in days
    pub completion_rate_window_days: u32,

    /// Weight of the completion-rate component in success probability
    pub rate_weight: f64,

    /// Weight of the streak-momentum component in success probability
    pub momentum_weight: f64,

    /// Weight of the recency component in success probability
    pub recency_weight: f64,

    /// Half-life of the recency decay, in days
    pub recency_half_life_days: f64,

    /// Completion rate below which a daily habit should reduce frequency
    pub low_rate_threshold: f64,

    /// How recently a streak must have broken to trigger a recovery nudge, days
    pub recovery_window_days: i64,

    /// Success probability above which raising the target is suggested
    pub raise_target_probability: f64,

    /// Completion rate below which missing trigger/reward metadata is flagged
    pub metadata_rate_threshold: f64,

    /// Maximum optimization recommendations surfaced per habit
    pub max_recommendations: usize,
}

/// Category, overall, balance, and trend parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LifeAnalyticsConfig {
    /// Weight of mean goal progress in a category score
    pub goal_weight: f64,

    /// Weight of mean habit success probability in a category score
    pub habit_weight: f64,

    /// Weight of the latest assessment rating in a category score
    pub assessment_weight: f64,

    /// Minimum number of scored categories before the overall score is reported
    pub min_category_coverage: usize,

    /// Overall-score delta above which the trend is improving
    pub trend_improving_delta: f64,

    /// Overall-score delta below which the trend is declining
    pub trend_declining_delta: f64,
}

/// Insight trigger thresholds
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsightConfig {
    /// Days without a progress change before an active goal is stalled
    pub stalled_goal_days: i64,

    /// Completion rate below which a habit is struggling
    pub struggling_rate_threshold: f64,

    /// Active goal count above which overcommitment fires
    pub max_active_goals: usize,

    /// Trailing window for the energy-concern average, in days
    pub energy_window_days: u32,

    /// Mean energy rating below which the energy concern fires
    pub low_energy_threshold: f64,

    /// Consecutive daily entries required for the consistency celebration
    pub consistency_days: u32,

    /// Trailing window in which a goal completion is celebrated, in days
    pub celebration_window_days: i64,

    /// How many lowest-scoring categories become focus-area recommendations
    pub focus_area_count: usize,

    /// Priority-rank cutoff for the "break it down" recommendation
    pub breakdown_rank_cutoff: usize,
}

/// Main engine configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Goal scoring parameters
    pub goal_scoring: GoalScoringConfig,
    /// Habit prediction parameters
    pub habit_prediction: HabitPredictionConfig,
    /// Life analytics parameters
    pub life_analytics: LifeAnalyticsConfig,
    /// Insight trigger thresholds
    pub insights: InsightConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            goal_scoring: GoalScoringConfig {
                complexity_weight: 0.4,
                resource_scarcity_weight: 0.3,
                time_pressure_weight: 0.3,
                time_pressure_horizon_days: 90,
            },
            habit_prediction: HabitPredictionConfig {
                completion_rate_window_days: 30,
                rate_weight: 0.5,
                momentum_weight: 0.3,
                recency_weight: 0.2,
                recency_half_life_days: 14.0,
                low_rate_threshold: 0.5,
                recovery_window_days: 3,
                raise_target_probability: 0.8,
                metadata_rate_threshold: 0.8,
                max_recommendations: 3,
            },
            life_analytics: LifeAnalyticsConfig {
                goal_weight: 0.4,
                habit_weight: 0.3,
                assessment_weight: 0.3,
                min_category_coverage: 4,
                trend_improving_delta: 5.0,
                trend_declining_delta: -5.0,
            },
            insights: InsightConfig {
                stalled_goal_days: 14,
                struggling_rate_threshold: 0.3,
                max_active_goals: 7,
                energy_window_days: 7,
                low_energy_threshold: 3.0,
                consistency_days: 7,
                celebration_window_days: 7,
                focus_area_count: 2,
                breakdown_rank_cutoff: 3,
            },
        }
    }
}

impl EngineConfig {
    /// Load configuration from environment variables with fallback to defaults
    ///
    /// # Errors
    ///
    /// Returns an error if an environment variable contains an invalid value
    /// or the resulting configuration fails validation.
    pub fn from_environment() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Ok(val) = std::env::var("MERIDIAN_TIME_PRESSURE_HORIZON_DAYS") {
            config.goal_scoring.time_pressure_horizon_days = val
                .parse()
                .map_err(|_| ConfigError::InvalidValue("MERIDIAN_TIME_PRESSURE_HORIZON_DAYS".into()))?;
        }

        if let Ok(val) = std::env::var("MERIDIAN_COMPLETION_RATE_WINDOW_DAYS") {
            config.habit_prediction.completion_rate_window_days = val
                .parse()
                .map_err(|_| ConfigError::InvalidValue("MERIDIAN_COMPLETION_RATE_WINDOW_DAYS".into()))?;
        }

        if let Ok(val) = std::env::var("MERIDIAN_RECENCY_HALF_LIFE_DAYS") {
            config.habit_prediction.recency_half_life_days = val
                .parse()
                .map_err(|_| ConfigError::InvalidValue("MERIDIAN_RECENCY_HALF_LIFE_DAYS".into()))?;
        }

        if let Ok(val) = std::env::var("MERIDIAN_MAX_RECOMMENDATIONS") {
            config.habit_prediction.max_recommendations = val
                .parse()
                .map_err(|_| ConfigError::InvalidValue("MERIDIAN_MAX_RECOMMENDATIONS".into()))?;
        }

        if let Ok(val) = std::env::var("MERIDIAN_MIN_CATEGORY_COVERAGE") {
            config.life_analytics.min_category_coverage = val
                .parse()
                .map_err(|_| ConfigError::InvalidValue("MERIDIAN_MIN_CATEGORY_COVERAGE".into()))?;
        }

        if let Ok(val) = std::env::var("MERIDIAN_MAX_ACTIVE_GOALS") {
            config.insights.max_active_goals = val
                .parse()
                .map_err(|_| ConfigError::InvalidValue("MERIDIAN_MAX_ACTIVE_GOALS".into()))?;
        }

        if let Ok(val) = std::env::var("MERIDIAN_STALLED_GOAL_DAYS") {
            config.insights.stalled_goal_days = val
                .parse()
                .map_err(|_| ConfigError::InvalidValue("MERIDIAN_STALLED_GOAL_DAYS".into()))?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration value is out of range or the
    /// weight sets do not sum to 1.0.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_weight_sum(
            "goal difficulty",
            &[
                self.goal_scoring.complexity_weight,
                self.goal_scoring.resource_scarcity_weight,
                self.goal_scoring.time_pressure_weight,
            ],
        )?;
        check_weight_sum(
            "success probability",
            &[
                self.habit_prediction.rate_weight,
                self.habit_prediction.momentum_weight,
                self.habit_prediction.recency_weight,
            ],
        )?;
        check_weight_sum(
            "category score",
            &[
                self.life_analytics.goal_weight,
                self.life_analytics.habit_weight,
                self.life_analytics.assessment_weight,
            ],
        )?;

        if self.goal_scoring.time_pressure_horizon_days <= 0 {
            return Err(ConfigError::ValidationFailed(
                "time_pressure_horizon_days must be > 0".into(),
            ));
        }

        if self.habit_prediction.completion_rate_window_days == 0 {
            return Err(ConfigError::ValidationFailed(
                "completion_rate_window_days must be > 0".into(),
            ));
        }

        if self.habit_prediction.recency_half_life_days <= 0.0 {
            return Err(ConfigError::ValidationFailed(
                "recency_half_life_days must be > 0".into(),
            ));
        }

        for (name, value) in [
            ("low_rate_threshold", self.habit_prediction.low_rate_threshold),
            (
                "raise_target_probability",
                self.habit_prediction.raise_target_probability,
            ),
            (
                "metadata_rate_threshold",
                self.habit_prediction.metadata_rate_threshold,
            ),
            (
                "struggling_rate_threshold",
                self.insights.struggling_rate_threshold,
            ),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::ValidationFailed(format!(
                    "{name} must be between 0 and 1"
                )));
            }
        }

        if self.life_analytics.min_category_coverage == 0
            || self.life_analytics.min_category_coverage > crate::models::LifeCategory::ALL.len()
        {
            return Err(ConfigError::ValidationFailed(
                "min_category_coverage must be between 1 and 12".into(),
            ));
        }

        if self.life_analytics.trend_declining_delta >= self.life_analytics.trend_improving_delta {
            return Err(ConfigError::ValidationFailed(
                "trend_declining_delta must be < trend_improving_delta".into(),
            ));
        }

        if !(1.0..=10.0).contains(&self.insights.low_energy_threshold) {
            return Err(ConfigError::ValidationFailed(
                "low_energy_threshold must be on the 1-10 scale".into(),
            ));
        }

        Ok(())
    }
}

fn check_weight_sum(label: &str, weights: &[f64]) -> Result<(), ConfigError> {
    let sum: f64 = weights.iter().sum();
    if (sum - 1.0).abs() > 0.01 {
        return Err(ConfigError::ValidationFailed(format!(
            "{label} weights must sum to 1.0, got {sum}"
        )));
    }
    Ok(())
}
