// ABOUTME: Flattens a TrainingPlan into pre-formatted report content for an external PDF renderer
// ABOUTME: String selection only: labels, highlights, per-week rows, and guidance sections
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::ability::tier_config;
use crate::modifiers::apply_modifiers;
use crate::persona::RunnerPersona;
use crate::plan_generator::{Session, TrainingPlan, WeeklyPlan};
use runmvmt_core::constants::answer_keys;
use runmvmt_core::models::{Distance, QuizAnswers, SessionType};
use serde::{Deserialize, Serialize};

/// Report content consumed by the PDF renderer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainingPlanPdfData {
    /// Document title
    pub title: String,
    /// Runner's first name, when given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub runner_name: Option<String>,
    /// Distance label, e.g. "Half Marathon"
    pub distance_label: String,
    /// Goal label, e.g. "Personal best"
    pub goal_label: String,
    /// Persona label
    pub persona_label: String,
    /// Persona description
    pub persona_description: String,
    /// Ability tier label
    pub tier_label: String,
    /// Short headline facts about the plan
    pub highlights: Vec<String>,
    /// One row per week
    pub weeks: Vec<PdfWeek>,
    /// Strength training advice
    pub strength_guidance: Vec<String>,
    /// Recovery advice
    pub recovery_guidance: Vec<String>,
    /// Fuelling advice
    pub fuelling_guidance: Vec<String>,
    /// Plan notes, copied through
    pub notes: Vec<String>,
}

/// One week in the report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PdfWeek {
    /// Week number
    pub week: u8,
    /// Phase label
    pub phase_label: String,
    /// Weekly target (km)
    pub target_km: f64,
    /// Weekly focus
    pub focus: String,
    /// Sessions in day order
    pub sessions: Vec<PdfSession>,
}

/// One session in the report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PdfSession {
    /// Day name
    pub day: String,
    /// Session title
    pub title: String,
    /// What to do
    pub description: String,
    /// Formatted duration and intensity, e.g. "24 km · Conversational, RPE 3-4"
    pub detail: String,
}

/// Build report content for a plan
#[must_use]
pub fn build_pdf_content(
    plan: &TrainingPlan,
    answers: &QuizAnswers,
    persona: &RunnerPersona,
) -> TrainingPlanPdfData {
    let runner_name = answers
        .text(answer_keys::FIRST_NAME)
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_owned);

    let title = runner_name.as_ref().map_or_else(
        || format!("Your {}-Week {} Training Plan", plan.duration_weeks, plan.distance.label()),
        |name| format!("{name}'s {}-Week {} Training Plan", plan.duration_weeks, plan.distance.label()),
    );

    TrainingPlanPdfData {
        title,
        runner_name,
        distance_label: plan.distance.label().to_owned(),
        goal_label: plan.goal.label().to_owned(),
        persona_label: persona.label.to_owned(),
        persona_description: persona.description.to_owned(),
        tier_label: plan.ability_tier.label().to_owned(),
        highlights: highlights(plan),
        weeks: plan.weekly_structure.iter().map(pdf_week).collect(),
        strength_guidance: strength_guidance(answers.text(answer_keys::STRENGTH_TRAINING)),
        recovery_guidance: recovery_guidance(persona, answers),
        fuelling_guidance: fuelling_guidance(plan.distance),
        notes: plan.notes.clone(),
    }
}

fn highlights(plan: &TrainingPlan) -> Vec<String> {
    let quality = plan.max_quality_sessions_per_week();
    let quality_line = match quality {
        0 => "No high-intensity sessions: every run builds your aerobic base".to_owned(),
        1 => "1 quality session per week".to_owned(),
        n => format!("Up to {n} quality sessions per week"),
    };
    vec![
        format!("Peak week: {} km", plan.peak_week_km()),
        format!("Longest long run: {} km", plan.longest_long_run_km()),
        quality_line,
        format!(
            "Built for {} training days a week",
            tier_config(plan.ability_tier).typical_training_days
        ),
    ]
}

fn pdf_week(week: &WeeklyPlan) -> PdfWeek {
    PdfWeek {
        week: week.week,
        phase_label: week.phase.label().to_owned(),
        target_km: week.target_km,
        focus: week.focus.clone(),
        sessions: week.key_sessions.iter().map(pdf_session).collect(),
    }
}

fn pdf_session(session: &Session) -> PdfSession {
    let amount = session.duration_km_or_min.map(|value| {
        if session.session_type == SessionType::LongRun {
            format!("{value} km")
        } else {
            format!("{value} min")
        }
    });
    let detail = match (amount, session.intensity_hint.as_deref()) {
        (Some(amount), Some(hint)) => format!("{amount} · {hint}"),
        (Some(amount), None) => amount,
        (None, Some(hint)) => hint.to_owned(),
        (None, None) => String::new(),
    };

    PdfSession {
        day: session.day.as_str().to_owned(),
        title: session.title.clone(),
        description: session.description.clone(),
        detail,
    }
}

fn strength_guidance(answer: Option<&str>) -> Vec<String> {
    let lines: &[&str] = match answer {
        Some("regular") => &[
            "Keep your current strength routine, moving heavy sessions away from quality days.",
            "Reduce load during the taper so your legs arrive fresh.",
        ],
        Some("occasional") => &[
            "Aim for two short sessions a week: squats, lunges, calf raises, and core.",
            "Schedule strength after easy runs, never the day before a long run.",
        ],
        _ => &[
            "Start with two 20-minute bodyweight sessions a week: squats, glute bridges, calf raises, and planks.",
            "Strength work lowers injury risk and helps you hold form late in runs.",
        ],
    };
    lines.iter().map(|line| (*line).to_owned()).collect()
}

fn recovery_guidance(persona: &RunnerPersona, answers: &QuizAnswers) -> Vec<String> {
    let mut lines = vec![persona.guidance.to_owned()];
    lines.extend(apply_modifiers(0.0, answers).recovery_guidance);
    lines.push("Aim for 7-9 hours of sleep and keep at least one full rest day each week.".to_owned());
    lines
}

fn fuelling_guidance(distance: Distance) -> Vec<String> {
    let lines: &[&str] = match distance {
        Distance::FiveK | Distance::TenK => &[
            "Eat a light, carbohydrate-based meal 2-3 hours before hard sessions.",
            "You won't need fuel during runs under an hour; focus on hydration and recovery meals.",
        ],
        Distance::HalfMarathon | Distance::Marathon => &[
            "Practise taking 30-60 g of carbohydrate per hour on runs longer than 75 minutes.",
            "Rehearse your race-day breakfast before your longest long runs.",
            "Increase carbohydrate intake in the two days before race day.",
        ],
        Distance::FiftyK | Distance::EightyK | Distance::HundredKPlus => &[
            "Train your gut: aim for 60-90 g of carbohydrate per hour on long runs.",
            "Mix gels with real food and practise eating while hiking.",
            "Plan electrolytes for heat and long climbs, and test everything before race day.",
        ],
    };
    lines.iter().map(|line| (*line).to_owned()).collect()
}
