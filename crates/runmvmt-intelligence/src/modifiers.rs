// ABOUTME: Lifestyle, recovery, and injury modifiers applied to weekly base volume
// ABOUTME: Scales volume, trims the quality-session budget, and collects recovery guidance
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Modifier engine
//!
//! Each modifier table has a neutral entry used when the answer is missing
//! or unrecognised. Non-neutral entries contribute their description to the
//! recovery guidance, in lifestyle, recovery, injury order.

use crate::config::planner::QualityConfig;
use runmvmt_core::constants::answer_keys;
use runmvmt_core::models::QuizAnswers;
use serde::{Deserialize, Serialize};

/// One row of a modifier table
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Modifier {
    /// Answer value this row matches
    pub key: &'static str,
    /// Volume multiplier
    pub multiplier: f64,
    /// Quality sessions removed from the weekly budget
    pub max_quality_sessions_reduction: u8,
    /// Guidance surfaced when this row applies
    pub description: &'static str,
}

const fn modifier(
    key: &'static str,
    multiplier: f64,
    max_quality_sessions_reduction: u8,
    description: &'static str,
) -> Modifier {
    Modifier {
        key,
        multiplier,
        max_quality_sessions_reduction,
        description,
    }
}

/// Neutral lifestyle answer
pub const NEUTRAL_LIFESTYLE: &str = "mixed";
/// Neutral recovery answer
pub const NEUTRAL_RECOVERY: &str = "normal";
/// Neutral injury answer
pub const NEUTRAL_INJURY: &str = "none";
/// Injury key whose volume may never rise above the injury factor
pub const CURRENT_INJURY: &str = "current";

/// Lifestyle load modifiers
pub static LIFESTYLE_MODIFIERS: [Modifier; 6] = [
    modifier(
        "desk_based",
        1.0,
        0,
        "Desk-based days: add short mobility breaks so your hips and back are ready to run.",
    ),
    modifier(NEUTRAL_LIFESTYLE, 1.0, 0, "Balanced daily activity."),
    modifier(
        "active_job",
        0.95,
        0,
        "Your job keeps you on your feet, so volume is trimmed slightly to account for daily load.",
    ),
    modifier(
        "physical_job",
        0.90,
        0,
        "Physical work adds real fatigue. Volume is reduced and easy days should stay genuinely easy.",
    ),
    modifier(
        "shift_work",
        0.85,
        1,
        "Shift work disrupts sleep. Fewer hard sessions, and schedule them after your best nights.",
    ),
    modifier(
        "high_stress",
        0.80,
        1,
        "High life stress limits recovery. Volume and intensity are reduced; skipping a run is fine.",
    ),
];

/// Subjective recovery modifiers
pub static RECOVERY_MODIFIERS: [Modifier; 4] = [
    modifier(
        "great",
        1.05,
        0,
        "You recover well, so volume gets a small lift. Keep sleep and fuelling consistent.",
    ),
    modifier(NEUTRAL_RECOVERY, 1.0, 0, "Normal recovery."),
    modifier(
        "tired",
        0.90,
        0,
        "You often feel tired. Volume is reduced; prioritise sleep before adding more running.",
    ),
    modifier(
        "exhausted",
        0.75,
        1,
        "You report feeling exhausted. Volume and intensity are cut back; consider speaking to a professional if this persists.",
    ),
];

/// Injury status modifiers
pub static INJURY_MODIFIERS: [Modifier; 4] = [
    modifier(NEUTRAL_INJURY, 1.0, 0, "No current injuries."),
    modifier(
        "minor",
        0.90,
        0,
        "Minor niggles: volume is eased slightly. Back off if anything worsens during a run.",
    ),
    modifier(
        "recurring",
        0.85,
        1,
        "Recurring injury: a lighter week arrives early and hard sessions are limited. Keep up your rehab work.",
    ),
    modifier(
        "current",
        0.70,
        2,
        "Current injury: volume is heavily reduced and all hard sessions are removed. Get clearance before building further.",
    ),
];

fn lookup(table: &'static [Modifier], answer: Option<&str>, neutral: &str) -> &'static Modifier {
    let find = |key: &str| table.iter().find(|m| m.key == key);
    answer
        .and_then(find)
        .or_else(|| find(neutral))
        .unwrap_or(&table[0])
}

/// Lifestyle modifier for an answer, falling back to `mixed`
#[must_use]
pub fn lifestyle_modifier(answer: Option<&str>) -> &'static Modifier {
    lookup(&LIFESTYLE_MODIFIERS, answer, NEUTRAL_LIFESTYLE)
}

/// Recovery modifier for an answer, falling back to `normal`
#[must_use]
pub fn recovery_modifier(answer: Option<&str>) -> &'static Modifier {
    lookup(&RECOVERY_MODIFIERS, answer, NEUTRAL_RECOVERY)
}

/// Injury modifier for an answer, falling back to `none`
#[must_use]
pub fn injury_modifier(answer: Option<&str>) -> &'static Modifier {
    lookup(&INJURY_MODIFIERS, answer, NEUTRAL_INJURY)
}

/// Outcome of applying all modifiers to one base volume
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModifierResult {
    /// Base volume after every multiplier, rounded to whole km
    pub adjusted_volume: f64,
    /// Quality sessions allowed per week, never below zero
    pub max_quality_sessions: u8,
    /// Guidance from each non-neutral modifier
    pub recovery_guidance: Vec<String>,
}

/// Apply modifiers with the default quality budget
#[must_use]
pub fn apply_modifiers(base_volume: f64, answers: &QuizAnswers) -> ModifierResult {
    apply_modifiers_with(&QualityConfig::default(), base_volume, answers)
}

/// Apply modifiers with an explicit quality budget
///
/// The three multipliers are independent, except that a `current` injury
/// caps the lifestyle and recovery product at 1.0 so volume never exceeds
/// the injury factor before rounding.
#[must_use]
pub fn apply_modifiers_with(
    quality: &QualityConfig,
    base_volume: f64,
    answers: &QuizAnswers,
) -> ModifierResult {
    let lifestyle = lifestyle_modifier(answers.text(answer_keys::LIFESTYLE));
    let recovery = recovery_modifier(answers.text(answer_keys::RECOVERY_FEEL));
    let injury = injury_modifier(answers.text(answer_keys::INJURY_STATUS));

    let mut load_factor = lifestyle.multiplier * recovery.multiplier;
    if injury.key == CURRENT_INJURY {
        load_factor = load_factor.min(1.0);
    }
    let adjusted_volume = (base_volume * load_factor * injury.multiplier).round();

    let max_quality_sessions = [lifestyle, recovery, injury]
        .iter()
        .fold(quality.max_sessions_per_week, |budget, m| {
            budget.saturating_sub(m.max_quality_sessions_reduction)
        });

    let recovery_guidance = [
        (lifestyle, NEUTRAL_LIFESTYLE),
        (recovery, NEUTRAL_RECOVERY),
        (injury, NEUTRAL_INJURY),
    ]
    .into_iter()
    .filter(|(m, neutral)| m.key != *neutral)
    .map(|(m, _)| m.description.to_owned())
    .collect();

    ModifierResult {
        adjusted_volume,
        max_quality_sessions,
        recovery_guidance,
    }
}
