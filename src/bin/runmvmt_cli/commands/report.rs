// ABOUTME: `report` command: builds PDF report content for a generated plan
// ABOUTME: Prints TrainingPlanPdfData as JSON for an external renderer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use runmvmt_planner::errors::AppResult;
use runmvmt_planner::intelligence::{build_pdf_content, persona_by_id, PlanGenerator};
use runmvmt_planner::models::QuizAnswers;

use crate::helpers::output::print_json;

/// Generate the plan, then print its report content
pub fn run(generator: &PlanGenerator, answers: &QuizAnswers, pretty: bool) -> AppResult<()> {
    let plan = generator.generate(answers);
    let content = build_pdf_content(&plan, answers, persona_by_id(plan.persona));
    print_json(&content, pretty)
}
