// ABOUTME: Runner classification enumerations: ability tier, persona identifier, injury status
// ABOUTME: Wire strings match the quiz intake and persona catalogue exactly
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;

/// Ordered fitness classification bounding realistic weekly and long-run distances
///
/// Declaration order is the ability order, so `Ord` compares tiers directly.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "snake_case")]
pub enum AbilityTier {
    /// New or returning to running
    #[default]
    Beginner,
    /// Running regularly at modest volume
    LowerIntermediate,
    /// Consistent runner with some structure
    UpperIntermediate,
    /// High-volume runner with race experience
    Advanced,
    /// Sub-elite club racer
    Competitive,
    /// Elite volume and long-run history
    Elite,
}

impl AbilityTier {
    /// All tiers in ascending order
    pub const ALL: [Self; 6] = [
        Self::Beginner,
        Self::LowerIntermediate,
        Self::UpperIntermediate,
        Self::Advanced,
        Self::Competitive,
        Self::Elite,
    ];

    /// Wire string representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::LowerIntermediate => "lower_intermediate",
            Self::UpperIntermediate => "upper_intermediate",
            Self::Advanced => "advanced",
            Self::Competitive => "competitive",
            Self::Elite => "elite",
        }
    }

    /// Parse from the wire string
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "beginner" => Some(Self::Beginner),
            "lower_intermediate" => Some(Self::LowerIntermediate),
            "upper_intermediate" => Some(Self::UpperIntermediate),
            "advanced" => Some(Self::Advanced),
            "competitive" => Some(Self::Competitive),
            "elite" => Some(Self::Elite),
            _ => None,
        }
    }

    /// Human-readable label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::LowerIntermediate => "Lower Intermediate",
            Self::UpperIntermediate => "Upper Intermediate",
            Self::Advanced => "Advanced",
            Self::Competitive => "Competitive",
            Self::Elite => "Elite",
        }
    }

    /// Position of this tier in `ALL`, used to index static tables
    #[must_use]
    pub const fn index(&self) -> usize {
        match self {
            Self::Beginner => 0,
            Self::LowerIntermediate => 1,
            Self::UpperIntermediate => 2,
            Self::Advanced => 3,
            Self::Competitive => 4,
            Self::Elite => 5,
        }
    }
}

impl fmt::Display for AbilityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identifier of one of the six runner personas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PersonaId {
    /// Low current volume, building the habit
    #[serde(rename = "beginner_low_mileage")]
    BeginnerLowMileage,
    /// Moderate volume, ready for structure
    #[serde(rename = "intermediate_builder")]
    IntermediateBuilder,
    /// High volume, racing for time
    #[serde(rename = "high_mileage_racer")]
    HighMileageRacer,
    /// Currently injured or with a recurring injury
    #[serde(rename = "returning_from_injury")]
    ReturningFromInjury,
    /// Only two or three days a week available
    #[serde(rename = "time_poor_3_day")]
    TimePoor3Day,
    /// Ultra distance or trail focused
    #[serde(rename = "ultra_trail_runner")]
    UltraTrailRunner,
}

impl PersonaId {
    /// All persona identifiers
    pub const ALL: [Self; 6] = [
        Self::BeginnerLowMileage,
        Self::IntermediateBuilder,
        Self::HighMileageRacer,
        Self::ReturningFromInjury,
        Self::TimePoor3Day,
        Self::UltraTrailRunner,
    ];

    /// Wire string representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::BeginnerLowMileage => "beginner_low_mileage",
            Self::IntermediateBuilder => "intermediate_builder",
            Self::HighMileageRacer => "high_mileage_racer",
            Self::ReturningFromInjury => "returning_from_injury",
            Self::TimePoor3Day => "time_poor_3_day",
            Self::UltraTrailRunner => "ultra_trail_runner",
        }
    }

    /// Parse from the wire string
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let needle = s.trim().to_lowercase();
        Self::ALL.into_iter().find(|id| id.as_str() == needle)
    }
}

impl fmt::Display for PersonaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Self-reported injury status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum InjuryStatus {
    /// No injury
    #[default]
    None,
    /// Minor niggle that does not stop running
    Minor,
    /// Injury that keeps coming back
    Recurring,
    /// Injured right now
    Current,
}

impl InjuryStatus {
    /// Wire string representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Minor => "minor",
            Self::Recurring => "recurring",
            Self::Current => "current",
        }
    }

    /// Parse from the wire string
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "none" => Some(Self::None),
            "minor" => Some(Self::Minor),
            "recurring" => Some(Self::Recurring),
            "current" => Some(Self::Current),
            _ => None,
        }
    }

    /// Current or recurring injuries override classification and volume
    #[must_use]
    pub const fn is_limiting(&self) -> bool {
        matches!(self, Self::Current | Self::Recurring)
    }
}

impl fmt::Display for InjuryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
