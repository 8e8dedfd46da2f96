// ABOUTME: Tests for week-to-phase mapping and phase prose
// ABOUTME: Covers phase boundaries, the consolidation weeks of an undecided goal, and weekly focus
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use runmvmt_planner::intelligence::phase::{
    phase_focus, week_focus, CONSOLIDATION_FOCUS, DOWN_WEEK_FOCUS,
};
use runmvmt_planner::intelligence::{get_phase_for_week, phase_description};
use runmvmt_planner::models::{GoalIntent, TrainingPhase};

#[test]
fn test_phase_boundaries() {
    let phases: Vec<TrainingPhase> = (1..=12)
        .map(|week| get_phase_for_week(week, Some(GoalIntent::Pb)))
        .collect();
    let expected = [
        TrainingPhase::Foundation,
        TrainingPhase::Foundation,
        TrainingPhase::Foundation,
        TrainingPhase::Build,
        TrainingPhase::Build,
        TrainingPhase::Build,
        TrainingPhase::Build,
        TrainingPhase::Peak,
        TrainingPhase::Peak,
        TrainingPhase::Peak,
        TrainingPhase::Taper,
        TrainingPhase::Taper,
    ];
    assert_eq!(phases, expected);
}

#[test]
fn test_missing_goal_tapers() {
    assert_eq!(get_phase_for_week(11, None), TrainingPhase::Taper);
    assert_eq!(get_phase_for_week(12, None), TrainingPhase::Taper);
}

#[test]
fn test_unsure_goal_only_changes_final_weeks() {
    for week in 1..=10 {
        assert_eq!(
            get_phase_for_week(week, Some(GoalIntent::Unsure)),
            get_phase_for_week(week, Some(GoalIntent::Finish)),
            "week {week}"
        );
    }
    assert_eq!(get_phase_for_week(11, Some(GoalIntent::Unsure)), TrainingPhase::Build);
    assert_eq!(get_phase_for_week(12, Some(GoalIntent::Unsure)), TrainingPhase::Build);
}

#[test]
fn test_peak_description_depends_on_goal() {
    let race = phase_description(TrainingPhase::Peak, Some(GoalIntent::Race));
    let pb = phase_description(TrainingPhase::Peak, Some(GoalIntent::Pb));
    let finish = phase_description(TrainingPhase::Peak, Some(GoalIntent::Finish));
    assert_eq!(race, pb);
    assert_ne!(race, finish);
    assert!(race.contains("race-specific"));
}

#[test]
fn test_every_phase_has_prose() {
    for phase in TrainingPhase::ALL {
        assert!(!phase_description(phase, None).is_empty());
        assert!(!phase_focus(phase).is_empty());
    }
    assert_ne!(
        phase_description(TrainingPhase::Taper, Some(GoalIntent::Unsure)),
        phase_description(TrainingPhase::Taper, None)
    );
}

#[test]
fn test_week_focus() {
    assert_eq!(week_focus(5, TrainingPhase::Build, true), DOWN_WEEK_FOCUS);
    assert_eq!(week_focus(11, TrainingPhase::Build, false), CONSOLIDATION_FOCUS);
    assert_eq!(
        week_focus(6, TrainingPhase::Build, false),
        phase_focus(TrainingPhase::Build)
    );
    assert_eq!(
        week_focus(12, TrainingPhase::Taper, false),
        phase_focus(TrainingPhase::Taper)
    );
}
