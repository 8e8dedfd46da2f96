// ABOUTME: Maps week numbers onto training phases and supplies phase prose
// ABOUTME: Handles the "unsure" goal, which consolidates instead of tapering
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use runmvmt_core::models::{GoalIntent, TrainingPhase};

/// Last week of the foundation phase
pub const FOUNDATION_LAST_WEEK: u8 = 3;
/// Last week of the build phase
pub const BUILD_LAST_WEEK: u8 = 7;
/// Last week of the peak phase
pub const PEAK_LAST_WEEK: u8 = 10;

/// Focus text for a scheduled down-week
pub const DOWN_WEEK_FOCUS: &str =
    "Recovery week: volume drops so your body can absorb the build. Keep every run easy.";

/// Focus text for the consolidation weeks of an undecided goal
pub const CONSOLIDATION_FOCUS: &str =
    "Consolidation: hold steady volume and keep one quality touch while you choose your next target.";

/// Phase for a week number
///
/// An `Unsure` goal turns the final two weeks into light consolidation
/// (`Build`) instead of a race taper.
#[must_use]
pub fn get_phase_for_week(week: u8, goal: Option<GoalIntent>) -> TrainingPhase {
    if week <= FOUNDATION_LAST_WEEK {
        TrainingPhase::Foundation
    } else if week <= BUILD_LAST_WEEK {
        TrainingPhase::Build
    } else if week <= PEAK_LAST_WEEK {
        TrainingPhase::Peak
    } else if goal == Some(GoalIntent::Unsure) {
        TrainingPhase::Build
    } else {
        TrainingPhase::Taper
    }
}

/// Human-readable explanation of a phase
#[must_use]
pub const fn phase_description(phase: TrainingPhase, goal: Option<GoalIntent>) -> &'static str {
    match (phase, goal) {
        (TrainingPhase::Foundation, _) => {
            "Building your aerobic base with easy, consistent running. \
             The goal is to make running feel routine before the work gets harder."
        }
        (TrainingPhase::Build, _) => {
            "Volume rises week by week and structured quality sessions arrive. \
             One lighter week gives your body time to adapt."
        }
        (TrainingPhase::Peak, Some(GoalIntent::Pb | GoalIntent::Race)) => {
            "Your hardest and most race-specific block. Sessions rehearse goal pace \
             so race day feels familiar. Sleep and fuelling matter as much as the running."
        }
        (TrainingPhase::Peak, _) => {
            "The highest-volume weeks of the plan. Long runs reach their longest \
             and quality sessions are at their most demanding."
        }
        (TrainingPhase::Taper, Some(GoalIntent::Unsure)) => {
            "Volume eases off and you keep sharp with short efforts. \
             Use this time to decide on your next race or goal."
        }
        (TrainingPhase::Taper, _) => {
            "Volume drops sharply while a touch of intensity keeps you sharp. \
             Trust the training: freshness is the goal now."
        }
    }
}

/// One-line weekly focus for a phase
#[must_use]
pub const fn phase_focus(phase: TrainingPhase) -> &'static str {
    match phase {
        TrainingPhase::Foundation => "Foundation: easy aerobic running and routine",
        TrainingPhase::Build => "Build: progressive volume with structured quality",
        TrainingPhase::Peak => "Peak: race-specific work at the highest volume",
        TrainingPhase::Taper => "Taper: reduce volume, stay sharp, arrive fresh",
    }
}

/// Weekly focus string for a specific week
#[must_use]
pub fn week_focus(week: u8, phase: TrainingPhase, is_down_week: bool) -> &'static str {
    if is_down_week {
        DOWN_WEEK_FOCUS
    } else if phase == TrainingPhase::Build && week > PEAK_LAST_WEEK {
        CONSOLIDATION_FOCUS
    } else {
        phase_focus(phase)
    }
}
