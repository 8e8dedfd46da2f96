// ABOUTME: Runner persona catalogue and the priority cascade that assigns one persona per runner
// ABOUTME: Injury beats time constraints, which beat terrain/distance, which beat volume
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use runmvmt_core::constants::{
    answer_keys, weekly_km_buckets as wk, TIME_POOR_DAYS_BUCKET, TRAIL_SURFACE,
};
use runmvmt_core::models::{PersonaId, QuizAnswers};
use serde::Serialize;
use tracing::debug;

/// A fixed runner persona
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RunnerPersona {
    /// Stable identifier
    pub id: PersonaId,
    /// Display label
    pub label: &'static str,
    /// Who this persona describes
    pub description: &'static str,
    /// How the plan treats this persona, surfaced in plan notes
    pub guidance: &'static str,
}

/// The six personas, one per `PersonaId`
pub static RUNNER_PERSONAS: [RunnerPersona; 6] = [
    RunnerPersona {
        id: PersonaId::BeginnerLowMileage,
        label: "The Foundation Builder",
        description: "You're early in your running journey or running light weekly volume. \
                      Consistency matters far more than speed right now.",
        guidance: "Volume grows gently from where you are today. Most runs should feel easy \
                   enough to hold a conversation.",
    },
    RunnerPersona {
        id: PersonaId::IntermediateBuilder,
        label: "The Intermediate Builder",
        description: "You run regularly and have a solid base. You're ready for structured \
                      quality work to move up a level.",
        guidance: "Expect a steady climb in volume with one or two quality sessions each week \
                   and a scheduled lighter week mid-block.",
    },
    RunnerPersona {
        id: PersonaId::HighMileageRacer,
        label: "The High-Mileage Racer",
        description: "You already carry serious weekly volume and race for time. Marginal \
                      gains come from precise structure and recovery.",
        guidance: "Volume starts close to your current load and peaks high. Protect the easy \
                   days so the key sessions land.",
    },
    RunnerPersona {
        id: PersonaId::ReturningFromInjury,
        label: "The Comeback Runner",
        description: "You're managing a current or recurring injury. The priority is getting \
                      to the start line healthy.",
        guidance: "Volume is capped conservatively and intensity is limited. Stop and seek \
                   professional advice if pain changes your stride.",
    },
    RunnerPersona {
        id: PersonaId::TimePoor3Day,
        label: "The Time-Crunched Runner",
        description: "Life is busy and you can commit two or three days a week. Every session \
                      needs to count.",
        guidance: "Each run has a clear purpose. Keep the long run sacred and don't try to \
                   squeeze missed sessions into the next day.",
    },
    RunnerPersona {
        id: PersonaId::UltraTrailRunner,
        label: "The Ultra & Trail Runner",
        description: "You're drawn to long distances and rough terrain. Time on feet, climbing \
                      strength, and fuelling are your limiters.",
        guidance: "Long runs build toward race-day time on feet. Practise race fuelling and \
                   kit on every long outing.",
    },
];

/// Catalogue entry for a persona identifier
#[must_use]
pub fn persona_by_id(id: PersonaId) -> &'static RunnerPersona {
    match id {
        PersonaId::BeginnerLowMileage => &RUNNER_PERSONAS[0],
        PersonaId::IntermediateBuilder => &RUNNER_PERSONAS[1],
        PersonaId::HighMileageRacer => &RUNNER_PERSONAS[2],
        PersonaId::ReturningFromInjury => &RUNNER_PERSONAS[3],
        PersonaId::TimePoor3Day => &RUNNER_PERSONAS[4],
        PersonaId::UltraTrailRunner => &RUNNER_PERSONAS[5],
    }
}

/// Assign exactly one persona; first matching rule wins
///
/// Never fails: the final branch is an unconditional catch-all, so even an
/// empty answer set yields `high_mileage_racer`.
#[must_use]
pub fn classify_persona(answers: &QuizAnswers) -> &'static RunnerPersona {
    let id = persona_id_for(answers);
    debug!(persona = %id, "classified persona");
    persona_by_id(id)
}

fn persona_id_for(answers: &QuizAnswers) -> PersonaId {
    if answers.injury_status().is_limiting() {
        return PersonaId::ReturningFromInjury;
    }

    if answers.text(answer_keys::PREFERRED_DAYS_PER_WEEK) == Some(TIME_POOR_DAYS_BUCKET) {
        return PersonaId::TimePoor3Day;
    }

    if answers.distance().is_ultra() || answers.text(answer_keys::MAIN_SURFACE) == Some(TRAIL_SURFACE)
    {
        return PersonaId::UltraTrailRunner;
    }

    match answers.text(answer_keys::CURRENT_WEEKLY_KM) {
        Some(wk::UNDER_10 | wk::KM_10_30) => PersonaId::BeginnerLowMileage,
        Some(wk::KM_30_50 | wk::KM_50_80) => PersonaId::IntermediateBuilder,
        _ => PersonaId::HighMileageRacer,
    }
}
