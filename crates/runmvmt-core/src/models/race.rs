// ABOUTME: Race distance and goal intent enumerations with their exact wire strings
// ABOUTME: Used as lookup-table axes throughout the plan pipeline
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;

/// Target race distance
///
/// The wire strings (`"5k"`, `"half_marathon"`, ...) are table keys shared
/// with the quiz intake and must not change.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
pub enum Distance {
    /// 5 kilometres
    #[serde(rename = "5k")]
    FiveK,
    /// 10 kilometres
    #[default]
    #[serde(rename = "10k")]
    TenK,
    /// 21.1 kilometres
    #[serde(rename = "half_marathon")]
    HalfMarathon,
    /// 42.2 kilometres
    #[serde(rename = "marathon")]
    Marathon,
    /// 50 kilometre ultra
    #[serde(rename = "50k")]
    FiftyK,
    /// 80 kilometre ultra
    #[serde(rename = "80k")]
    EightyK,
    /// 100 kilometres and beyond
    #[serde(rename = "100k_plus")]
    HundredKPlus,
}

impl Distance {
    /// All distances in ascending order
    pub const ALL: [Self; 7] = [
        Self::FiveK,
        Self::TenK,
        Self::HalfMarathon,
        Self::Marathon,
        Self::FiftyK,
        Self::EightyK,
        Self::HundredKPlus,
    ];

    /// Wire string representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::FiveK => "5k",
            Self::TenK => "10k",
            Self::HalfMarathon => "half_marathon",
            Self::Marathon => "marathon",
            Self::FiftyK => "50k",
            Self::EightyK => "80k",
            Self::HundredKPlus => "100k_plus",
        }
    }

    /// Parse from the wire string
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "5k" => Some(Self::FiveK),
            "10k" => Some(Self::TenK),
            "half_marathon" => Some(Self::HalfMarathon),
            "marathon" => Some(Self::Marathon),
            "50k" => Some(Self::FiftyK),
            "80k" => Some(Self::EightyK),
            "100k_plus" => Some(Self::HundredKPlus),
            _ => None,
        }
    }

    /// Human-readable label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::FiveK => "5K",
            Self::TenK => "10K",
            Self::HalfMarathon => "Half Marathon",
            Self::Marathon => "Marathon",
            Self::FiftyK => "50K Ultra",
            Self::EightyK => "80K Ultra",
            Self::HundredKPlus => "100K+ Ultra",
        }
    }

    /// Position of this distance in `ALL`, used to index static tables
    #[must_use]
    pub const fn index(&self) -> usize {
        match self {
            Self::FiveK => 0,
            Self::TenK => 1,
            Self::HalfMarathon => 2,
            Self::Marathon => 3,
            Self::FiftyK => 4,
            Self::EightyK => 5,
            Self::HundredKPlus => 6,
        }
    }

    /// Ultra distances (beyond the marathon)
    #[must_use]
    pub const fn is_ultra(&self) -> bool {
        matches!(self, Self::FiftyK | Self::EightyK | Self::HundredKPlus)
    }

    /// Marathon and longer, subject to the weekly volume ceiling
    #[must_use]
    pub const fn is_long_distance(&self) -> bool {
        matches!(self, Self::Marathon) || self.is_ultra()
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What the runner wants out of the block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum GoalIntent {
    /// Get to the finish line comfortably
    #[default]
    Finish,
    /// Run a personal best
    Pb,
    /// Race competitively
    Race,
    /// Train for general fitness without a target race
    GeneralFitness,
    /// No clear goal yet
    Unsure,
}

impl GoalIntent {
    /// All goal intents
    pub const ALL: [Self; 5] = [
        Self::Finish,
        Self::Pb,
        Self::Race,
        Self::GeneralFitness,
        Self::Unsure,
    ];

    /// Wire string representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Finish => "finish",
            Self::Pb => "pb",
            Self::Race => "race",
            Self::GeneralFitness => "general_fitness",
            Self::Unsure => "unsure",
        }
    }

    /// Parse from the wire string
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "finish" => Some(Self::Finish),
            "pb" => Some(Self::Pb),
            "race" => Some(Self::Race),
            "general_fitness" => Some(Self::GeneralFitness),
            "unsure" => Some(Self::Unsure),
            _ => None,
        }
    }

    /// Human-readable label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Finish => "Finish strong",
            Self::Pb => "Personal best",
            Self::Race => "Race it",
            Self::GeneralFitness => "General fitness",
            Self::Unsure => "Still deciding",
        }
    }

    /// Goals that aim at a specific race performance
    #[must_use]
    pub const fn is_performance(&self) -> bool {
        matches!(self, Self::Pb | Self::Race)
    }
}

impl fmt::Display for GoalIntent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
