// ABOUTME: Training plan generation engine for RunMVMT
// ABOUTME: Turns quiz answers into a deterministic twelve-week plan and report content
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # RunMVMT Intelligence
//!
//! The plan pipeline, leaves first:
//!
//! - **persona**: six-way persona cascade
//! - **ability**: ability tier catalogue and classifier
//! - **volume**: base volume table, envelope selection, weekly curve
//! - **modifiers**: lifestyle, recovery, and injury adjustments
//! - **phase**: week-to-phase mapping and phase prose
//! - **sessions**: long-run and quality session templates
//! - **plan_generator**: orchestration into a `TrainingPlan`
//! - **pdf_content**: flat report content for an external renderer
//!
//! Every stage is a pure function. Errors only exist at the configuration
//! boundary (`config::ConfigError`).

/// Ability tier catalogue and classifier
pub mod ability;

/// Planner configuration
pub mod config;

/// Lifestyle, recovery, and injury modifiers
pub mod modifiers;

/// Report content for the PDF renderer
pub mod pdf_content;

/// Week-to-phase mapping
pub mod phase;

/// Persona catalogue and cascade
pub mod persona;

/// Twelve-week plan assembly
pub mod plan_generator;

/// Session templates and selectors
pub mod sessions;

/// Literal tuning constants
pub mod training_constants;

/// Volume envelope and weekly curve
pub mod volume;

pub use ability::{classify_ability_tier, tier_config, AbilityTierConfig, ABILITY_TIERS};
pub use config::{ConfigError, PlannerConfig};
pub use modifiers::{apply_modifiers, ModifierResult};
pub use pdf_content::{build_pdf_content, TrainingPlanPdfData};
pub use persona::{classify_persona, persona_by_id, RunnerPersona, RUNNER_PERSONAS};
pub use phase::{get_phase_for_week, phase_description};
pub use plan_generator::{
    classify_runner, generate_training_plan, PlanGenerator, RunnerClassification, Session,
    TrainingPlan, WeeklyPlan,
};
pub use sessions::{
    get_quality_session_template, get_secondary_quality_session, long_run_template,
    SessionTemplate, LONG_RUN_TEMPLATES,
};
pub use volume::{build_base_volume_curve, get_volume_config, VolumeConfig};
