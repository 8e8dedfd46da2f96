// ABOUTME: Core data models for the plan engine
// ABOUTME: Quiz answers plus the race, runner, and training enumerations shared by all crates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Quiz answer mapping and typed accessors
pub mod answers;
/// Race distance and goal intent
pub mod race;
/// Ability tier, persona identifier, and injury status
pub mod runner;
/// Training phase, session type, and training day
pub mod training;

pub use answers::{AnswerValue, QuizAnswers};
pub use race::{Distance, GoalIntent};
pub use runner::{AbilityTier, InjuryStatus, PersonaId};
pub use training::{SessionType, TrainingDay, TrainingPhase};
