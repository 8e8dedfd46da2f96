// ABOUTME: Tests for report content built from a generated plan
// ABOUTME: Checks titles, highlights, per-week rows, and guidance sections
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use runmvmt_planner::answers::parse_answers;
use runmvmt_planner::intelligence::{
    build_pdf_content, classify_persona, generate_training_plan, TrainingPlanPdfData,
};
use runmvmt_planner::models::QuizAnswers;

fn report(answers: &QuizAnswers) -> TrainingPlanPdfData {
    let plan = generate_training_plan(answers);
    build_pdf_content(&plan, answers, classify_persona(answers))
}

#[test]
fn test_reference_report() {
    let answers = parse_answers(common::MARATHON_PB_JSON).unwrap();
    let data = report(&answers);

    assert_eq!(data.title, "Alex's 12-Week Marathon Training Plan");
    assert_eq!(data.runner_name.as_deref(), Some("Alex"));
    assert_eq!(data.distance_label, "Marathon");
    assert_eq!(data.goal_label, "Personal best");
    assert_eq!(data.persona_label, "The Intermediate Builder");
    assert_eq!(data.tier_label, "Lower Intermediate");
    assert_eq!(
        data.highlights,
        vec![
            "Peak week: 50 km",
            "Longest long run: 28 km",
            "1 quality session per week",
            "Built for 4 training days a week",
        ]
    );
}

#[test]
fn test_untitled_runner() {
    let data = report(&common::marathon_pb_answers());
    assert_eq!(data.title, "Your 12-Week Marathon Training Plan");
    assert!(data.runner_name.is_none());

    let data = report(&common::marathon_pb_with("first_name", "   "));
    assert!(data.runner_name.is_none());
}

#[test]
fn test_week_rows() {
    let data = report(&common::marathon_pb_answers());
    assert_eq!(data.weeks.len(), 12);

    let week_1 = &data.weeks[0];
    assert_eq!(week_1.phase_label, "Foundation");
    assert_eq!(week_1.sessions[0].day, "Tuesday");
    assert_eq!(week_1.sessions[0].detail, "40 min · Steady tempo, RPE 6-7");

    let week_9 = &data.weeks[8];
    let long_run = week_9.sessions.last().unwrap();
    assert_eq!(long_run.day, "Sunday");
    assert_eq!(long_run.title, "Marathon-pace long run");
    assert_eq!(long_run.detail, "28 km · Easy, last section at goal effort");
}

#[test]
fn test_recovery_guidance_includes_modifiers() {
    let data = report(&common::marathon_pb_answers());
    assert_eq!(data.recovery_guidance.len(), 2);
    assert!(data.recovery_guidance[1].starts_with("Aim for 7-9 hours"));

    let data = report(&common::marathon_pb_with("lifestyle", "high_stress"));
    assert_eq!(data.recovery_guidance.len(), 3);
    assert!(data.recovery_guidance[1].starts_with("High life stress"));
}

#[test]
fn test_strength_guidance_by_answer() {
    let data = report(&common::marathon_pb_with("strength_training", "regular"));
    assert!(data.strength_guidance[0].starts_with("Keep your current strength routine"));

    let data = report(&common::marathon_pb_with("strength_training", "occasional"));
    assert!(data.strength_guidance[0].starts_with("Aim for two short sessions"));

    let data = report(&common::marathon_pb_answers());
    assert!(data.strength_guidance[0].starts_with("Start with two 20-minute"));
}

#[test]
fn test_fuelling_guidance_by_distance() {
    let data = report(&common::marathon_pb_with("goal_distance", "5k"));
    assert!(data.fuelling_guidance[0].starts_with("Eat a light"));

    let data = report(&common::marathon_pb_answers());
    assert!(data.fuelling_guidance[0].starts_with("Practise taking 30-60 g"));

    let data = report(&common::marathon_pb_with("goal_distance", "80k"));
    assert!(data.fuelling_guidance[0].starts_with("Train your gut"));
}

#[test]
fn test_injured_runner_highlights_no_intensity() {
    let data = report(&common::marathon_pb_with("injury_status", "current"));
    assert!(data.highlights[2].starts_with("No high-intensity sessions"));
    assert_eq!(data.persona_label, "The Comeback Runner");
}

#[test]
fn test_notes_are_copied_from_plan() {
    let answers = common::marathon_pb_answers();
    let plan = generate_training_plan(&answers);
    let data = build_pdf_content(&plan, &answers, classify_persona(&answers));
    assert_eq!(data.notes, plan.notes);
}

#[test]
fn test_report_json_uses_camel_case() {
    let value = serde_json::to_value(report(&common::marathon_pb_answers())).unwrap();
    assert!(value.get("personaLabel").is_some());
    assert!(value.get("recoveryGuidance").is_some());
    assert!(value.get("runnerName").is_none());
    assert!(value["weeks"][0].get("phaseLabel").is_some());
}
