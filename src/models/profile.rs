// ABOUTME: User profile with primary focus categories
// ABOUTME: Read-only engine input; focus categories bias goal priority ranking
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Meridian Life Intelligence

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::LifeCategory;

/// The user the snapshot belongs to.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserProfile {
    /// Display name
    pub name: String,
    /// Life areas the user has chosen to prioritize
    pub primary_focus: Vec<LifeCategory>,
    /// When the profile was created
    pub created_date: NaiveDate,
}

impl UserProfile {
    /// Whether `category` is one of the user's primary focus areas
    #[must_use]
    pub fn is_focus(&self, category: LifeCategory) -> bool {
        self.primary_focus.contains(&category)
    }
}
