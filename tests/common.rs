// ABOUTME: Shared answer fixtures for integration tests
// ABOUTME: Builds QuizAnswers for the reference scenarios used across test files
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(dead_code)]
#![allow(missing_docs)]

use runmvmt_planner::models::QuizAnswers;

/// Marathon PB runner on 30-50 km a week: the reference scenario
pub fn marathon_pb_answers() -> QuizAnswers {
    QuizAnswers::new()
        .with("goal_distance", "marathon")
        .with("goal_type", "pb")
        .with("current_weekly_km", "30_50")
        .with("longest_run", "10_21")
        .with("current_runs_per_week", "3_4")
        .with("injury_status", "none")
        .with("preferred_days_per_week", "4_5")
        .with("lifestyle", "mixed")
        .with("recovery_feel", "normal")
        .with("main_surface", "road")
}

/// Reference scenario with one answer replaced
pub fn marathon_pb_with(key: &str, value: &str) -> QuizAnswers {
    let mut answers = marathon_pb_answers();
    answers.insert(key, value);
    answers
}

/// Reference scenario as the JSON an intake form would send
pub const MARATHON_PB_JSON: &str = r#"{
    "goal_distance": "marathon",
    "goal_type": "pb",
    "current_weekly_km": "30_50",
    "longest_run": "10_21",
    "current_runs_per_week": "3_4",
    "injury_status": "none",
    "preferred_days_per_week": "4_5",
    "lifestyle": "mixed",
    "recovery_feel": "normal",
    "main_surface": "road",
    "first_name": "Alex",
    "strength_training": null,
    "motivations": ["health", "race"],
    "age": 34
}"#;

/// A spread of answer sets covering every persona and distance class
pub fn varied_answers() -> Vec<QuizAnswers> {
    vec![
        marathon_pb_answers(),
        QuizAnswers::new(),
        QuizAnswers::new()
            .with("goal_distance", "5k")
            .with("current_weekly_km", "<10")
            .with("longest_run", "<5"),
        QuizAnswers::new()
            .with("goal_distance", "10k")
            .with("goal_type", "race")
            .with("current_weekly_km", "120_plus")
            .with("longest_run", "30_42")
            .with("current_runs_per_week", "7_plus"),
        QuizAnswers::new()
            .with("goal_distance", "half_marathon")
            .with("current_weekly_km", "50_80")
            .with("longest_run", "21_30")
            .with("preferred_days_per_week", "2_3"),
        QuizAnswers::new()
            .with("goal_distance", "100k_plus")
            .with("current_weekly_km", "80_120")
            .with("longest_run", "42_plus")
            .with("main_surface", "trail"),
        marathon_pb_with("injury_status", "recurring"),
        marathon_pb_with("injury_status", "current"),
        marathon_pb_with("lifestyle", "high_stress"),
        marathon_pb_with("recovery_feel", "exhausted"),
    ]
}
