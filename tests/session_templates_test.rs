// ABOUTME: Tests for long-run and quality session template selection
// ABOUTME: Checks selection by distance class, phase, and week number
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use runmvmt_planner::intelligence::{
    get_quality_session_template, get_secondary_quality_session, long_run_template,
    LONG_RUN_TEMPLATES,
};
use runmvmt_planner::models::{AbilityTier, Distance, SessionType, TrainingPhase};

const ADVANCED: AbilityTier = AbilityTier::Advanced;

#[test]
fn test_short_distance_primary_session() {
    for distance in [Distance::FiveK, Distance::TenK] {
        let early = get_quality_session_template(distance, TrainingPhase::Build, 4, ADVANCED);
        assert_eq!(early.session_type, SessionType::Threshold);

        let later = get_quality_session_template(distance, TrainingPhase::Build, 6, ADVANCED);
        assert_eq!(later.session_type, SessionType::Intervals);
    }
}

#[test]
fn test_tier_does_not_change_the_primary_session() {
    for tier in AbilityTier::ALL {
        let early = get_quality_session_template(Distance::TenK, TrainingPhase::Foundation, 3, tier);
        assert_eq!(early.session_type, SessionType::Threshold);

        let peak = get_quality_session_template(Distance::TenK, TrainingPhase::Peak, 9, tier);
        assert_eq!(peak.session_type, SessionType::Intervals);

        let marathon = get_quality_session_template(Distance::Marathon, TrainingPhase::Build, 8, tier);
        assert_eq!(marathon.session_type, SessionType::MarathonPace);
    }
}

#[test]
fn test_marathon_pace_blocks_in_weeks_seven_to_nine() {
    let marathon = |week, phase| {
        get_quality_session_template(Distance::Marathon, phase, week, ADVANCED).session_type
    };
    assert_eq!(marathon(2, TrainingPhase::Foundation), SessionType::Tempo);
    assert_eq!(marathon(6, TrainingPhase::Build), SessionType::RacePace);
    assert_eq!(marathon(7, TrainingPhase::Build), SessionType::MarathonPace);
    assert_eq!(marathon(9, TrainingPhase::Peak), SessionType::MarathonPace);
    assert_eq!(marathon(10, TrainingPhase::Peak), SessionType::RacePace);

    let half = get_quality_session_template(Distance::HalfMarathon, TrainingPhase::Peak, 8, ADVANCED);
    assert_eq!(half.session_type, SessionType::RacePace);
}

#[test]
fn test_ultra_primary_is_always_steady() {
    for distance in [Distance::FiftyK, Distance::EightyK, Distance::HundredKPlus] {
        for phase in TrainingPhase::ALL {
            for tier in AbilityTier::ALL {
                let template = get_quality_session_template(distance, phase, 8, tier);
                assert_eq!(template.session_type, SessionType::Steady);
            }
        }
    }
}

#[test]
fn test_secondary_sessions() {
    let secondary =
        |distance, phase, week| get_secondary_quality_session(distance, phase, week).session_type;
    assert_eq!(secondary(Distance::FiveK, TrainingPhase::Build, 4), SessionType::Hills);
    assert_eq!(secondary(Distance::TenK, TrainingPhase::Build, 6), SessionType::Fartlek);
    assert_eq!(
        secondary(Distance::HalfMarathon, TrainingPhase::Foundation, 2),
        SessionType::Progression
    );
    assert_eq!(secondary(Distance::Marathon, TrainingPhase::Peak, 8), SessionType::Threshold);
    assert_eq!(
        get_secondary_quality_session(Distance::Marathon, TrainingPhase::Peak, 8).title,
        "Cruise intervals"
    );
}

#[test]
fn test_ultra_secondary_depends_on_phase_only() {
    for week in 1..=12 {
        assert_eq!(
            get_secondary_quality_session(Distance::FiftyK, TrainingPhase::Build, week).session_type,
            SessionType::Hills
        );
        assert_eq!(
            get_secondary_quality_session(Distance::HundredKPlus, TrainingPhase::Peak, week)
                .session_type,
            SessionType::TimeOnFeet
        );
    }
}

#[test]
fn test_long_run_template_lookup() {
    let template = long_run_template(Distance::Marathon, TrainingPhase::Peak);
    assert_eq!(template.session_type, SessionType::LongRun);
    assert_eq!(template.title, "Marathon-pace long run");
    assert_eq!(template.intensity_hint, "Easy, last section at goal effort");
}

#[test]
fn test_long_runs_grow_until_peak() {
    for (distance, row) in Distance::ALL.into_iter().zip(&LONG_RUN_TEMPLATES) {
        let [foundation, build, peak, taper] = row;
        assert!(foundation.duration_km_or_min <= build.duration_km_or_min, "{distance}");
        assert!(build.duration_km_or_min <= peak.duration_km_or_min, "{distance}");
        assert!(taper.duration_km_or_min < peak.duration_km_or_min, "{distance}");
    }
}

#[test]
fn test_templates_serialize_type_field() {
    let value = serde_json::to_value(long_run_template(Distance::FiveK, TrainingPhase::Foundation))
        .unwrap();
    assert_eq!(value["type"], "long_run");
    assert!(value.get("durationKmOrMin").is_some());
}
