// ABOUTME: Tests for runner persona classification
// ABOUTME: Verifies the priority order of the persona rules and the persona catalogue
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use runmvmt_planner::intelligence::{classify_persona, persona_by_id, RUNNER_PERSONAS};
use runmvmt_planner::models::{PersonaId, QuizAnswers};

fn persona_of(answers: &QuizAnswers) -> PersonaId {
    classify_persona(answers).id
}

#[test]
fn test_reference_runner_is_intermediate_builder() {
    assert_eq!(
        persona_of(&common::marathon_pb_answers()),
        PersonaId::IntermediateBuilder
    );
}

#[test]
fn test_limiting_injury_wins_over_everything() {
    let answers = common::marathon_pb_answers()
        .with("injury_status", "current")
        .with("preferred_days_per_week", "2_3")
        .with("goal_distance", "100k_plus");
    assert_eq!(persona_of(&answers), PersonaId::ReturningFromInjury);

    let answers = common::marathon_pb_with("injury_status", "recurring");
    assert_eq!(persona_of(&answers), PersonaId::ReturningFromInjury);
}

#[test]
fn test_minor_injury_is_not_returning() {
    let answers = common::marathon_pb_with("injury_status", "minor");
    assert_eq!(persona_of(&answers), PersonaId::IntermediateBuilder);
}

#[test]
fn test_time_poor_wins_over_ultra() {
    let answers = common::marathon_pb_answers()
        .with("preferred_days_per_week", "2_3")
        .with("goal_distance", "50k");
    assert_eq!(persona_of(&answers), PersonaId::TimePoor3Day);
}

#[test]
fn test_ultra_distance_or_trail_surface() {
    for distance in ["50k", "80k", "100k_plus"] {
        let answers = common::marathon_pb_with("goal_distance", distance);
        assert_eq!(persona_of(&answers), PersonaId::UltraTrailRunner, "{distance}");
    }
    let answers = common::marathon_pb_with("main_surface", "trail");
    assert_eq!(persona_of(&answers), PersonaId::UltraTrailRunner);
}

#[test]
fn test_volume_buckets() {
    let cases = [
        ("<10", PersonaId::BeginnerLowMileage),
        ("10_30", PersonaId::BeginnerLowMileage),
        ("30_50", PersonaId::IntermediateBuilder),
        ("50_80", PersonaId::IntermediateBuilder),
        ("80_120", PersonaId::HighMileageRacer),
        ("120_plus", PersonaId::HighMileageRacer),
    ];
    for (bucket, expected) in cases {
        let answers = common::marathon_pb_with("current_weekly_km", bucket);
        assert_eq!(persona_of(&answers), expected, "{bucket}");
    }
}

#[test]
fn test_empty_answers_fall_through_to_racer() {
    assert_eq!(persona_of(&QuizAnswers::new()), PersonaId::HighMileageRacer);
}

#[test]
fn test_catalogue_covers_every_persona() {
    assert_eq!(RUNNER_PERSONAS.len(), PersonaId::ALL.len());
    for id in PersonaId::ALL {
        let persona = persona_by_id(id);
        assert_eq!(persona.id, id);
        assert!(!persona.label.is_empty());
        assert!(!persona.guidance.is_empty());
    }
    assert_eq!(
        persona_by_id(PersonaId::IntermediateBuilder).label,
        "The Intermediate Builder"
    );
}
