// ABOUTME: Plan assembler orchestrating classification, volume, modifiers, phases, and sessions
// ABOUTME: Produces the twelve-week TrainingPlan from quiz answers as a pure, deterministic function
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Training plan generator
//!
//! `PlanGenerator` runs the whole pipeline for one set of answers:
//!
//! 1. persona, then ability tier (the tier depends on the persona)
//! 2. volume envelope and the base volume for each week
//! 3. modifiers on every week's base volume
//! 4. phase, focus, and session selection per week
//!
//! Nothing here reads the environment or the clock. The same answers and the
//! same `PlannerConfig` always produce an identical plan.

use crate::ability::{classify_ability_tier, tier_config};
use crate::config::PlannerConfig;
use crate::modifiers::{apply_modifiers_with, ModifierResult};
use crate::persona::{classify_persona, persona_by_id, RunnerPersona};
use crate::phase::{get_phase_for_week, week_focus};
use crate::sessions::{
    get_quality_session_template, get_secondary_quality_session, long_run_template,
    SessionTemplate,
};
use crate::volume::{build_base_volume_table, get_volume_config_with, VolumeConfig};
use runmvmt_core::constants::{answer_keys, plan};
use runmvmt_core::models::{
    AbilityTier, Distance, GoalIntent, InjuryStatus, PersonaId, QuizAnswers, SessionType,
    TrainingDay, TrainingPhase,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// One scheduled session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// Day of the week
    pub day: TrainingDay,
    /// Session category
    #[serde(rename = "type")]
    pub session_type: SessionType,
    /// Short title
    pub title: String,
    /// What to do
    pub description: String,
    /// Long runs: km for this week. Quality sessions: nominal minutes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_km_or_min: Option<f64>,
    /// Effort guidance
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intensity_hint: Option<String>,
}

impl Session {
    fn from_template(day: TrainingDay, template: &SessionTemplate, duration: f64) -> Self {
        Self {
            day,
            session_type: template.session_type,
            title: template.title.to_owned(),
            description: template.description.to_owned(),
            duration_km_or_min: Some(duration),
            intensity_hint: Some(template.intensity_hint.to_owned()),
        }
    }
}

/// One week of the plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyPlan {
    /// Week number, 1-based
    pub week: u8,
    /// Training phase of this week
    pub phase: TrainingPhase,
    /// Target weekly volume (km)
    pub target_km: f64,
    /// Quality sessions followed by the long run
    pub key_sessions: Vec<Session>,
    /// One-line focus
    pub focus: String,
}

/// The generated twelve-week plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainingPlan {
    /// Target race distance
    pub distance: Distance,
    /// Goal intent
    pub goal: GoalIntent,
    /// Always twelve
    pub duration_weeks: u8,
    /// One entry per week, in week order
    pub weekly_structure: Vec<WeeklyPlan>,
    /// Assigned persona
    pub persona: PersonaId,
    /// Assigned ability tier
    pub ability_tier: AbilityTier,
    /// Volume envelope the plan was built from
    pub volume: VolumeConfig,
    /// Guidance notes, deduplicated
    pub notes: Vec<String>,
}

impl TrainingPlan {
    /// Highest weekly target in the plan
    #[must_use]
    pub fn peak_week_km(&self) -> f64 {
        self.weekly_structure
            .iter()
            .map(|w| w.target_km)
            .fold(0.0, f64::max)
    }

    /// Longest long run scheduled in the plan
    #[must_use]
    pub fn longest_long_run_km(&self) -> f64 {
        self.weekly_structure
            .iter()
            .flat_map(|w| &w.key_sessions)
            .filter(|s| s.session_type == SessionType::LongRun)
            .filter_map(|s| s.duration_km_or_min)
            .fold(0.0, f64::max)
    }

    /// Most quality sessions scheduled in any single week
    #[must_use]
    pub fn max_quality_sessions_per_week(&self) -> usize {
        self.weekly_structure
            .iter()
            .map(|w| {
                w.key_sessions
                    .iter()
                    .filter(|s| s.session_type.is_quality())
                    .count()
            })
            .max()
            .unwrap_or(0)
    }
}

/// Persona, tier, and envelope for a set of answers, without the weekly plan
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunnerClassification {
    /// Assigned persona
    pub persona: PersonaId,
    /// Persona display label
    pub persona_label: &'static str,
    /// Assigned ability tier
    pub ability_tier: AbilityTier,
    /// Target distance
    pub distance: Distance,
    /// Goal intent
    pub goal: GoalIntent,
    /// Volume envelope
    pub volume: VolumeConfig,
}

/// Training plan generator
#[derive(Debug, Clone, Default)]
pub struct PlanGenerator {
    config: PlannerConfig,
}

impl PlanGenerator {
    /// Generator with the default tuning
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Generator with explicit tuning
    #[must_use]
    pub const fn with_config(config: PlannerConfig) -> Self {
        Self { config }
    }

    /// Tuning in use
    #[must_use]
    pub const fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Classify a runner without building the weekly plan
    #[must_use]
    pub fn classify(&self, answers: &QuizAnswers) -> RunnerClassification {
        let persona = classify_persona(answers);
        let ability_tier = classify_ability_tier(answers, persona.id);
        let distance = answers.distance();
        let goal = answers.goal();
        let volume = get_volume_config_with(
            &self.config.envelope,
            distance,
            goal,
            ability_tier,
            answers.text(answer_keys::CURRENT_WEEKLY_KM),
            persona.id,
        );

        RunnerClassification {
            persona: persona.id,
            persona_label: persona.label,
            ability_tier,
            distance,
            goal,
            volume,
        }
    }

    /// Generate the full twelve-week plan
    #[must_use]
    pub fn generate(&self, answers: &QuizAnswers) -> TrainingPlan {
        let classification = self.classify(answers);
        let persona = persona_by_id(classification.persona);
        let injury = answers.injury_status();

        let base_volumes = build_base_volume_table(
            &self.config.curve,
            &classification.volume,
            classification.goal,
            Some(injury),
        );
        let adjusted: Vec<ModifierResult> = base_volumes
            .iter()
            .map(|base| apply_modifiers_with(&self.config.quality, *base, answers))
            .collect();

        let mut targets: Vec<f64> = adjusted.iter().map(|m| m.adjusted_volume).collect();
        hold_race_week_lowest(&mut targets, classification.goal);

        let quality_budget = adjusted
            .first()
            .map_or(0, |m| m.max_quality_sessions)
            .min(tier_config(classification.ability_tier).max_quality_sessions)
            .min(2);

        let weekly_structure = self.assemble_weeks(
            &classification,
            persona,
            injury,
            &base_volumes,
            &targets,
            quality_budget,
        );

        let guidance = adjusted
            .first()
            .map(|m| m.recovery_guidance.as_slice())
            .unwrap_or_default();
        let notes = build_notes(persona, classification.ability_tier, classification.goal, guidance);

        TrainingPlan {
            distance: classification.distance,
            goal: classification.goal,
            duration_weeks: plan::DURATION_WEEKS,
            weekly_structure,
            persona: classification.persona,
            ability_tier: classification.ability_tier,
            volume: classification.volume,
            notes,
        }
    }

    fn assemble_weeks(
        &self,
        classification: &RunnerClassification,
        persona: &RunnerPersona,
        injury: InjuryStatus,
        base_volumes: &[f64],
        targets: &[f64],
        quality_budget: u8,
    ) -> Vec<WeeklyPlan> {
        let peak_target = targets.iter().copied().fold(0.0, f64::max);
        let long_run_peak = classification.volume.long_run_peak_km;
        let long_run_day = if persona.id == PersonaId::TimePoor3Day {
            TrainingDay::Saturday
        } else {
            TrainingDay::Sunday
        };
        let down_week = if injury == InjuryStatus::Recurring {
            self.config.curve.recurring_injury_down_week
        } else {
            self.config.curve.down_week
        };

        (1..=plan::DURATION_WEEKS)
            .zip(targets.iter().zip(base_volumes))
            .map(|(week, (&target_km, &base_km))| {
                let phase = get_phase_for_week(week, Some(classification.goal));
                let is_down_week = phase == TrainingPhase::Build && week == down_week;

                let mut key_sessions = Vec::with_capacity(3);
                if quality_budget >= 1 {
                    let primary = get_quality_session_template(
                        classification.distance,
                        phase,
                        week,
                        classification.ability_tier,
                    );
                    key_sessions.push(Session::from_template(
                        TrainingDay::Tuesday,
                        primary,
                        f64::from(primary.duration_km_or_min),
                    ));
                }
                if quality_budget >= 2 {
                    let secondary =
                        get_secondary_quality_session(classification.distance, phase, week);
                    key_sessions.push(Session::from_template(
                        TrainingDay::Thursday,
                        secondary,
                        f64::from(secondary.duration_km_or_min),
                    ));
                }

                let long_run_km = scaled_long_run(long_run_peak, target_km, peak_target);
                key_sessions.push(Session::from_template(
                    long_run_day,
                    long_run_template(classification.distance, phase),
                    long_run_km,
                ));

                debug!(week, phase = %phase, base_km, target_km, long_run_km, "planned week");

                WeeklyPlan {
                    week,
                    phase,
                    target_km,
                    key_sessions,
                    focus: week_focus(week, phase, is_down_week).to_owned(),
                }
            })
            .collect()
    }
}

/// Race week is never above any earlier week once modifiers and rounding apply
fn hold_race_week_lowest(targets: &mut [f64], goal: GoalIntent) {
    if get_phase_for_week(plan::DURATION_WEEKS, Some(goal)) != TrainingPhase::Taper {
        return;
    }
    let Some((race_week, earlier)) = targets.split_last_mut() else {
        return;
    };
    let lowest_earlier = earlier.iter().copied().fold(f64::INFINITY, f64::min);
    if *race_week > lowest_earlier {
        debug!(from = *race_week, to = lowest_earlier, "clamped race week volume");
        *race_week = lowest_earlier;
    }
}

/// Long run proportional to the week's share of the peak week, never above the long-run peak
fn scaled_long_run(long_run_peak: f64, week_km: f64, peak_week_km: f64) -> f64 {
    if peak_week_km <= 0.0 {
        return 0.0;
    }
    (long_run_peak * week_km / peak_week_km)
        .round()
        .min(long_run_peak)
}

fn build_notes(
    persona: &RunnerPersona,
    tier: AbilityTier,
    goal: GoalIntent,
    guidance: &[String],
) -> Vec<String> {
    let tier_row = tier_config(tier);
    let mut notes = vec![
        persona.guidance.to_owned(),
        format!(
            "Ability tier: {}. Runners at this level typically train {} days a week with up to {} quality sessions.",
            tier.label(),
            tier_row.typical_training_days,
            tier_row.max_quality_sessions
        ),
    ];
    if goal == GoalIntent::Unsure {
        notes.push(
            "Weeks 11 and 12 consolidate your fitness instead of tapering for a race.".to_owned(),
        );
    }
    for line in guidance {
        if !notes.contains(line) {
            notes.push(line.clone());
        }
    }
    notes
}

/// Generate a plan with the default tuning
#[must_use]
pub fn generate_training_plan(answers: &QuizAnswers) -> TrainingPlan {
    PlanGenerator::new().generate(answers)
}

/// Classify a runner with the default tuning
#[must_use]
pub fn classify_runner(answers: &QuizAnswers) -> RunnerClassification {
    PlanGenerator::new().classify(answers)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scaled_long_run_caps_at_peak() {
        assert!((scaled_long_run(28.0, 50.0, 50.0) - 28.0).abs() < f64::EPSILON);
        assert!((scaled_long_run(28.0, 25.0, 50.0) - 14.0).abs() < f64::EPSILON);
        assert!(scaled_long_run(28.0, 10.0, 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_notes_are_deduplicated() {
        let persona = persona_by_id(PersonaId::IntermediateBuilder);
        let guidance = vec!["Rest more.".to_owned(), "Rest more.".to_owned()];
        let notes = build_notes(persona, AbilityTier::Advanced, GoalIntent::Pb, &guidance);
        assert_eq!(notes.iter().filter(|n| *n == "Rest more.").count(), 1);
    }
}
