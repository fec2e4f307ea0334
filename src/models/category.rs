// ABOUTME: Life category enumeration covering the twelve fixed life areas
// ABOUTME: Provides display names and exhaustive iteration for analytics passes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Meridian Life Intelligence

use serde::{Deserialize, Serialize};

/// The twelve fixed life areas every goal, habit, and assessment belongs to.
///
/// The set is closed by design: category scores, balance scores, and the
/// coverage threshold in life analytics all assume exactly these twelve areas.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash,
)]
#[serde(rename_all = "snake_case")]
pub enum LifeCategory {
    /// Health & Fitness
    HealthFitness,
    /// Career & Education
    CareerEducation,
    /// Relationships & Social
    Relationships,
    /// Finances & Money
    Finances,
    /// Personal Growth & Learning
    PersonalGrowth,
    /// Hobbies & Recreation
    HobbiesRecreation,
    /// Spirituality & Mindfulness
    Spirituality,
    /// Home & Environment
    HomeEnvironment,
    /// Family & Parenting
    Family,
    /// Creativity & Arts
    Creativity,
    /// Community & Service
    Community,
    /// Travel & Adventure
    TravelAdventure,
}

impl LifeCategory {
    /// All twelve categories in canonical order.
    pub const ALL: [Self; 12] = [
        Self::HealthFitness,
        Self::CareerEducation,
        Self::Relationships,
        Self::Finances,
        Self::PersonalGrowth,
        Self::HobbiesRecreation,
        Self::Spirituality,
        Self::HomeEnvironment,
        Self::Family,
        Self::Creativity,
        Self::Community,
        Self::TravelAdventure,
    ];

    /// Human-readable display name
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::HealthFitness => "Health & Fitness",
            Self::CareerEducation => "Career & Education",
            Self::Relationships => "Relationships & Social",
            Self::Finances => "Finances & Money",
            Self::PersonalGrowth => "Personal Growth & Learning",
            Self::HobbiesRecreation => "Hobbies & Recreation",
            Self::Spirituality => "Spirituality & Mindfulness",
            Self::HomeEnvironment => "Home & Environment",
            Self::Family => "Family & Parenting",
            Self::Creativity => "Creativity & Arts",
            Self::Community => "Community & Service",
            Self::TravelAdventure => "Travel & Adventure",
        }
    }
}

impl std::fmt::Display for LifeCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_covers_twelve_distinct_categories() {
        let mut seen = std::collections::BTreeSet::new();
        for category in LifeCategory::ALL {
            seen.insert(category);
        }
        assert_eq!(seen.len(), 12);
    }

    #[test]
    fn display_names_are_nonempty() {
        for category in LifeCategory::ALL {
            assert!(!category.display_name().is_empty());
        }
    }
}
