// ABOUTME: Named behavioral constants used across the intelligence components
// ABOUTME: Scale bounds and insight rule priorities; tunable knobs live in EngineConfig
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Meridian Life Intelligence

//! Behavioral constants grounded in habit-formation and wellbeing research.
//!
//! Values that users may reasonably tune live in [`crate::config::EngineConfig`];
//! this module holds the fixed scales and orderings that define the contract
//! itself.

/// Scale bounds shared by the scoring heuristics
pub mod scales {
    /// Minimum effort input (complexity, resource availability)
    pub const EFFORT_MIN: u8 = 1;

    /// Maximum effort input (complexity, resource availability)
    pub const EFFORT_MAX: u8 = 5;

    /// Minimum wellness/satisfaction rating
    pub const RATING_MIN: u8 = 1;

    /// Maximum wellness/satisfaction rating
    pub const RATING_MAX: u8 = 10;

    /// Upper bound of every percentage-style score
    pub const PERCENT_MAX: f64 = 100.0;
}

/// Habit formation research anchors behind the prediction defaults
///
/// References:
/// - Lally, P. et al. (2010). How are habits formed: Modelling habit formation
///   in the real world. European Journal of Social Psychology, 40(6).
///   Median of 66 days to automaticity motivates the two-week recency half-life
///   (recent behavior dominates, older behavior still counts).
pub mod habit_formation {
    /// Median days to habit automaticity (Lally et al. 2010)
    pub const AUTOMATICITY_DAYS: u32 = 66;
}

/// Priorities assigned to insight rules, higher surfaces first
///
/// Warnings outrank recommendations, which outrank celebrations, but priority
/// is assigned per rule so an urgent celebration can still beat a mild
/// recommendation before the kind tie-break applies.
pub mod insight_priorities {
    /// Mean energy below threshold over the trailing week
    pub const ENERGY_CONCERN: u8 = 85;

    /// Active goal with no progress change beyond the stall window
    pub const STALLED_GOAL: u8 = 80;

    /// Habit completion rate below the struggling threshold
    pub const STRUGGLING_HABIT: u8 = 75;

    /// More active goals than the configured maximum
    pub const OVERCOMMITMENT: u8 = 70;

    /// Top-ranked goal with no milestone breakdown
    pub const BREAK_IT_DOWN: u8 = 60;

    /// Category in the bottom of the scored set
    pub const FOCUS_AREA: u8 = 55;

    /// A surfaced habit optimization recommendation
    pub const HABIT_OPTIMIZATION: u8 = 50;

    /// Goal completed within the celebration window
    pub const GOAL_COMPLETED: u8 = 45;

    /// Current streak surpassed the previous best
    pub const NEW_LONGEST_STREAK: u8 = 40;

    /// Unbroken run of daily entries
    pub const CONSISTENCY_MILESTONE: u8 = 35;
}
