// ABOUTME: `classify` command: persona, ability tier, and volume envelope
// ABOUTME: Skips weekly plan assembly entirely
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use runmvmt_planner::errors::AppResult;
use runmvmt_planner::intelligence::PlanGenerator;
use runmvmt_planner::models::QuizAnswers;

use crate::helpers::output::print_json;

/// Classify and print
pub fn run(generator: &PlanGenerator, answers: &QuizAnswers, pretty: bool) -> AppResult<()> {
    print_json(&generator.classify(answers), pretty)
}
