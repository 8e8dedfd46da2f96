// ABOUTME: Ability tier catalogue and classifier from quiz answer buckets
// ABOUTME: Maps weekly distance, longest run, and frequency buckets onto six ordered tiers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Ability tier classification
//!
//! Bucket answers are first turned into representative kilometre figures,
//! then walked through one of three threshold ladders. Override precedence:
//!
//! 1. Current or recurring injury: weekly km only, capped at `advanced`
//! 2. Time-poor persona: capped at `upper_intermediate`
//! 3. Everyone else: general ladder on `(weekly km, longest run)`

use runmvmt_core::constants::{
    answer_keys, defaults, longest_run_buckets as lr, runs_per_week_buckets as rpw,
    weekly_km_buckets as wk,
};
use runmvmt_core::models::{AbilityTier, PersonaId, QuizAnswers};
use serde::Serialize;
use tracing::debug;

/// Inclusive kilometre range
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct KmRange {
    /// Lower bound (km)
    pub min: f64,
    /// Upper bound (km)
    pub max: f64,
}

impl KmRange {
    const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }
}

/// Static description of one ability tier
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AbilityTierConfig {
    /// Tier this row describes
    pub tier: AbilityTier,
    /// Typical weekly distance
    pub weekly_km_range: KmRange,
    /// Typical longest run
    pub longest_run_range: KmRange,
    /// Quality sessions this tier can absorb per week
    pub max_quality_sessions: u8,
    /// Typical training days per week
    pub typical_training_days: u8,
}

/// Tier catalogue, ordered so that `ABILITY_TIERS[tier.index()]` is the tier's row
pub static ABILITY_TIERS: [AbilityTierConfig; 6] = [
    AbilityTierConfig {
        tier: AbilityTier::Beginner,
        weekly_km_range: KmRange::new(0.0, 20.0),
        longest_run_range: KmRange::new(0.0, 8.0),
        max_quality_sessions: 1,
        typical_training_days: 3,
    },
    AbilityTierConfig {
        tier: AbilityTier::LowerIntermediate,
        weekly_km_range: KmRange::new(20.0, 40.0),
        longest_run_range: KmRange::new(8.0, 16.0),
        max_quality_sessions: 1,
        typical_training_days: 4,
    },
    AbilityTierConfig {
        tier: AbilityTier::UpperIntermediate,
        weekly_km_range: KmRange::new(40.0, 60.0),
        longest_run_range: KmRange::new(14.0, 24.0),
        max_quality_sessions: 2,
        typical_training_days: 5,
    },
    AbilityTierConfig {
        tier: AbilityTier::Advanced,
        weekly_km_range: KmRange::new(60.0, 90.0),
        longest_run_range: KmRange::new(20.0, 32.0),
        max_quality_sessions: 2,
        typical_training_days: 6,
    },
    AbilityTierConfig {
        tier: AbilityTier::Competitive,
        weekly_km_range: KmRange::new(90.0, 130.0),
        longest_run_range: KmRange::new(28.0, 36.0),
        max_quality_sessions: 2,
        typical_training_days: 6,
    },
    AbilityTierConfig {
        tier: AbilityTier::Elite,
        weekly_km_range: KmRange::new(130.0, 200.0),
        longest_run_range: KmRange::new(32.0, 45.0),
        max_quality_sessions: 3,
        typical_training_days: 7,
    },
];

/// Catalogue row for a tier
#[must_use]
pub fn tier_config(tier: AbilityTier) -> &'static AbilityTierConfig {
    &ABILITY_TIERS[tier.index()]
}

const WEEKLY_KM_MIDPOINTS: [(&str, f64); 6] = [
    (wk::UNDER_10, 5.0),
    (wk::KM_10_30, 20.0),
    (wk::KM_30_50, 40.0),
    (wk::KM_50_80, 65.0),
    (wk::KM_80_120, 100.0),
    (wk::KM_120_PLUS, 130.0),
];

const LONGEST_RUN_MIDPOINTS: [(&str, f64); 6] = [
    (lr::UNDER_5, 3.0),
    (lr::KM_5_10, 7.0),
    (lr::KM_10_21, 15.0),
    (lr::KM_21_30, 25.0),
    (lr::KM_30_42, 36.0),
    (lr::KM_42_PLUS, 50.0),
];

const RUNS_PER_WEEK_VALUES: [(&str, f64); 4] = [
    (rpw::RUNS_0_2, 2.0),
    (rpw::RUNS_3_4, 3.0),
    (rpw::RUNS_5_6, 5.0),
    (rpw::RUNS_7_PLUS, 7.0),
];

fn lookup_bucket(table: &[(&str, f64)], bucket: Option<&str>, fallback: f64) -> f64 {
    bucket
        .and_then(|b| table.iter().find(|(key, _)| *key == b))
        .map_or(fallback, |(_, value)| *value)
}

/// Representative weekly km for a `current_weekly_km` bucket (20 km when unknown)
#[must_use]
pub fn weekly_km_from_bucket(bucket: Option<&str>) -> f64 {
    lookup_bucket(&WEEKLY_KM_MIDPOINTS, bucket, defaults::WEEKLY_KM)
}

/// Representative km for a `longest_run` bucket (7 km when unknown)
#[must_use]
pub fn longest_run_from_bucket(bucket: Option<&str>) -> f64 {
    lookup_bucket(&LONGEST_RUN_MIDPOINTS, bucket, defaults::LONGEST_RUN_KM)
}

/// Representative runs per week for a `current_runs_per_week` bucket (3 when unknown)
#[must_use]
pub fn runs_per_week_from_bucket(bucket: Option<&str>) -> f64 {
    lookup_bucket(&RUNS_PER_WEEK_VALUES, bucket, defaults::RUNS_PER_WEEK)
}

/// Classify answers into an ability tier
///
/// Total: unknown or missing buckets silently fall back to their defaults.
#[must_use]
pub fn classify_ability_tier(answers: &QuizAnswers, persona_id: PersonaId) -> AbilityTier {
    let current_km = weekly_km_from_bucket(answers.text(answer_keys::CURRENT_WEEKLY_KM));
    let longest_run = longest_run_from_bucket(answers.text(answer_keys::LONGEST_RUN));
    let runs_per_week = runs_per_week_from_bucket(answers.text(answer_keys::CURRENT_RUNS_PER_WEEK));

    let tier = if answers.injury_status().is_limiting() {
        injury_ladder(current_km)
    } else if persona_id == PersonaId::TimePoor3Day {
        time_poor_ladder(current_km, longest_run)
    } else {
        general_ladder(current_km, longest_run, runs_per_week)
    };

    debug!(
        current_km,
        longest_run,
        runs_per_week,
        persona = %persona_id,
        tier = %tier,
        "classified ability tier"
    );
    tier
}

fn injury_ladder(current_km: f64) -> AbilityTier {
    if current_km >= 80.0 {
        AbilityTier::Advanced
    } else if current_km >= 45.0 {
        AbilityTier::UpperIntermediate
    } else if current_km >= 20.0 {
        AbilityTier::LowerIntermediate
    } else {
        AbilityTier::Beginner
    }
}

fn time_poor_ladder(current_km: f64, longest_run: f64) -> AbilityTier {
    if current_km >= 45.0 && longest_run >= 15.0 {
        AbilityTier::UpperIntermediate
    } else if current_km >= 20.0 {
        AbilityTier::LowerIntermediate
    } else {
        AbilityTier::Beginner
    }
}

fn general_ladder(current_km: f64, longest_run: f64, runs_per_week: f64) -> AbilityTier {
    if current_km >= 120.0 && longest_run >= 30.0 {
        AbilityTier::Elite
    } else if current_km >= 85.0 && longest_run >= 25.0 {
        AbilityTier::Competitive
    } else if current_km >= 55.0 && longest_run >= 20.0 {
        AbilityTier::Advanced
    } else if current_km >= 45.0 && longest_run >= 15.0 {
        AbilityTier::UpperIntermediate
    } else if current_km >= 30.0 && longest_run >= 10.0 {
        // Boundary band between the intermediate tiers: frequency decides
        if runs_per_week >= 5.0 {
            AbilityTier::UpperIntermediate
        } else {
            AbilityTier::LowerIntermediate
        }
    } else if current_km >= 15.0 && longest_run >= 5.0 {
        AbilityTier::LowerIntermediate
    } else {
        AbilityTier::Beginner
    }
}
