// ABOUTME: Training structure enumerations: phase, session type, and training day
// ABOUTME: Phases are ordered periodisation segments of the fixed twelve-week horizon
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;

/// Periodisation segment of the twelve-week plan
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "snake_case")]
pub enum TrainingPhase {
    /// Weeks 1-3: aerobic base
    #[default]
    Foundation,
    /// Weeks 4-7: progressive load
    Build,
    /// Weeks 8-10: race-specific peak
    Peak,
    /// Weeks 11-12: volume reduction before race day
    Taper,
}

impl TrainingPhase {
    /// All phases in plan order
    pub const ALL: [Self; 4] = [Self::Foundation, Self::Build, Self::Peak, Self::Taper];

    /// Wire string representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Foundation => "foundation",
            Self::Build => "build",
            Self::Peak => "peak",
            Self::Taper => "taper",
        }
    }

    /// Human-readable label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Foundation => "Foundation",
            Self::Build => "Build",
            Self::Peak => "Peak",
            Self::Taper => "Taper",
        }
    }

    /// Position of this phase in `ALL`, used to index static tables
    #[must_use]
    pub const fn index(&self) -> usize {
        match self {
            Self::Foundation => 0,
            Self::Build => 1,
            Self::Peak => 2,
            Self::Taper => 3,
        }
    }
}

impl fmt::Display for TrainingPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of key session in a week
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionType {
    /// Weekly long run
    LongRun,
    /// Sustained threshold effort
    Threshold,
    /// Comfortably hard continuous tempo
    Tempo,
    /// Repeats at or faster than race pace
    Intervals,
    /// Blocks at goal race pace
    RacePace,
    /// Blocks at goal marathon pace
    MarathonPace,
    /// Ultra steady aerobic effort
    Steady,
    /// Hill repeats or hill strength
    Hills,
    /// Unstructured speed play
    Fartlek,
    /// Run that finishes faster than it starts
    Progression,
    /// Short relaxed accelerations
    Strides,
    /// Duration-based time on feet
    TimeOnFeet,
}

impl SessionType {
    /// Human-readable label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::LongRun => "Long Run",
            Self::Threshold => "Threshold",
            Self::Tempo => "Tempo",
            Self::Intervals => "Intervals",
            Self::RacePace => "Race Pace",
            Self::MarathonPace => "Marathon Pace",
            Self::Steady => "Steady Effort",
            Self::Hills => "Hills",
            Self::Fartlek => "Fartlek",
            Self::Progression => "Progression Run",
            Self::Strides => "Strides",
            Self::TimeOnFeet => "Time on Feet",
        }
    }

    /// Whether this session counts against the weekly quality budget
    #[must_use]
    pub const fn is_quality(&self) -> bool {
        !matches!(self, Self::LongRun | Self::TimeOnFeet)
    }
}

impl fmt::Display for SessionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Day of the week a session is scheduled on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TrainingDay {
    /// Monday
    Monday,
    /// Tuesday
    Tuesday,
    /// Wednesday
    Wednesday,
    /// Thursday
    Thursday,
    /// Friday
    Friday,
    /// Saturday
    Saturday,
    /// Sunday
    Sunday,
}

impl TrainingDay {
    /// Day name as printed in reports
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Monday => "Monday",
            Self::Tuesday => "Tuesday",
            Self::Wednesday => "Wednesday",
            Self::Thursday => "Thursday",
            Self::Friday => "Friday",
            Self::Saturday => "Saturday",
            Self::Sunday => "Sunday",
        }
    }
}

impl fmt::Display for TrainingDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
