// ABOUTME: `plan` command: generates the twelve-week TrainingPlan
// ABOUTME: Logs a one-line summary and prints the plan as JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use runmvmt_planner::errors::AppResult;
use runmvmt_planner::intelligence::PlanGenerator;
use runmvmt_planner::models::QuizAnswers;
use tracing::info;

use crate::helpers::output::print_json;

/// Generate and print the plan
pub fn run(generator: &PlanGenerator, answers: &QuizAnswers, pretty: bool) -> AppResult<()> {
    let plan = generator.generate(answers);
    info!(
        distance = %plan.distance,
        persona = %plan.persona,
        tier = %plan.ability_tier,
        peak_week_km = plan.peak_week_km(),
        "generated training plan"
    );
    print_json(&plan, pretty)
}
