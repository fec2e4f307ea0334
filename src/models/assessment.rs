// ABOUTME: Periodic life assessment with per-category satisfaction ratings
// ABOUTME: Latest assessment feeds the category score's satisfaction component
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Meridian Life Intelligence

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::LifeCategory;

/// Cadence of a periodic life assessment.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AssessmentInterval {
    /// Every week
    Weekly,
    /// Every month
    Monthly,
    /// Every quarter
    Quarterly,
    /// Every year
    Yearly,
}

/// A periodic review of life satisfaction across categories.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LifeAssessment {
    /// When the assessment was taken
    pub date: NaiveDate,
    /// Cadence this assessment belongs to
    pub interval: AssessmentInterval,
    /// Satisfaction rating per category, 1-10; categories may be omitted
    pub ratings: BTreeMap<LifeCategory, u8>,
    /// Free-text notes on focus areas for the coming period
    pub focus_notes: Vec<String>,
}
