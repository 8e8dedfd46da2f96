// ABOUTME: Tests for the volume envelope and the twelve-week base volume curve
// ABOUTME: Checks persona placement, ceilings, down weeks, injury handling, and taper shape
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]
#![allow(clippy::float_cmp)]

use runmvmt_planner::config::CurveConfig;
use runmvmt_planner::intelligence::volume::{build_base_volume_table, volume_range};
use runmvmt_planner::intelligence::{
    build_base_volume_curve, get_phase_for_week, get_volume_config, VolumeConfig,
};
use runmvmt_planner::models::{
    AbilityTier, Distance, GoalIntent, InjuryStatus, PersonaId, TrainingPhase,
};

const REFERENCE: VolumeConfig = VolumeConfig {
    start_km: 35.0,
    peak_km: 50.0,
    long_run_peak_km: 28.0,
};

fn table(goal: GoalIntent, injury: InjuryStatus) -> Vec<f64> {
    build_base_volume_table(&CurveConfig::default(), &REFERENCE, goal, Some(injury))
}

#[test]
fn test_reference_envelope() {
    let config = get_volume_config(
        Distance::Marathon,
        GoalIntent::Pb,
        AbilityTier::LowerIntermediate,
        Some("30_50"),
        PersonaId::IntermediateBuilder,
    );
    assert_eq!(config, REFERENCE);
}

#[test]
fn test_elite_racer_marathon_is_capped_by_ceiling() {
    let config = get_volume_config(
        Distance::Marathon,
        GoalIntent::Race,
        AbilityTier::Elite,
        Some("120_plus"),
        PersonaId::HighMileageRacer,
    );
    assert_eq!(config.start_km, 115.0);
    assert_eq!(config.peak_km, 150.0);
}

#[test]
fn test_elite_racer_short_distance_uses_current_volume_floor() {
    let config = get_volume_config(
        Distance::FiveK,
        GoalIntent::Race,
        AbilityTier::Elite,
        Some("120_plus"),
        PersonaId::HighMileageRacer,
    );
    assert_eq!(config.start_km, 100.0);
    assert_eq!(config.peak_km, 156.0);
}

#[test]
fn test_beginner_starts_close_to_current_volume() {
    let config = get_volume_config(
        Distance::FiveK,
        GoalIntent::Finish,
        AbilityTier::Beginner,
        Some("<10"),
        PersonaId::BeginnerLowMileage,
    );
    assert_eq!(config.start_km, 6.0);
    assert_eq!(config.peak_km, 20.0);
    assert_eq!(config.long_run_peak_km, 7.0);
}

#[test]
fn test_time_poor_start_stays_in_lower_band() {
    let config = get_volume_config(
        Distance::TenK,
        GoalIntent::Finish,
        AbilityTier::LowerIntermediate,
        Some("30_50"),
        PersonaId::TimePoor3Day,
    );
    assert_eq!(config.start_km, 22.0);
    assert_eq!(config.peak_km, 34.0);
}

#[test]
fn test_envelope_invariants_hold_everywhere() {
    let buckets = [None, Some("<10"), Some("30_50"), Some("120_plus")];
    for distance in Distance::ALL {
        for tier in AbilityTier::ALL {
            for persona in PersonaId::ALL {
                for bucket in buckets {
                    let config =
                        get_volume_config(distance, GoalIntent::Finish, tier, bucket, persona);
                    assert!(config.peak_km >= config.start_km, "{distance} {tier} {persona}");
                    assert_eq!(config.start_km, config.start_km.round());
                    assert_eq!(config.peak_km, config.peak_km.round());
                    if distance.is_long_distance() {
                        assert!(config.peak_km <= 150.0);
                    }
                    let range = volume_range(distance, GoalIntent::Finish, tier);
                    assert!(config.long_run_peak_km >= range.long_run_peak_min.floor());
                    assert!(config.long_run_peak_km <= range.long_run_peak_max.ceil());
                }
            }
        }
    }
}

#[test]
fn test_goal_does_not_change_envelope() {
    let configs: Vec<VolumeConfig> = GoalIntent::ALL
        .into_iter()
        .map(|goal| {
            get_volume_config(
                Distance::HalfMarathon,
                goal,
                AbilityTier::Advanced,
                Some("50_80"),
                PersonaId::IntermediateBuilder,
            )
        })
        .collect();
    assert!(configs.windows(2).all(|pair| pair[0] == pair[1]));
}

#[test]
fn test_reference_curve() {
    assert_eq!(
        table(GoalIntent::Pb, InjuryStatus::None),
        vec![35.0, 37.0, 38.0, 40.0, 34.0, 43.0, 44.0, 48.0, 50.0, 46.0, 35.0, 25.0]
    );
}

#[test]
fn test_first_week_is_start_and_peak_week_is_peak() {
    for (start, peak) in [(10.0, 20.0), (35.0, 50.0), (115.0, 150.0)] {
        assert_eq!(
            build_base_volume_curve(start, peak, 1, TrainingPhase::Foundation, None),
            start
        );
        assert_eq!(
            build_base_volume_curve(start, peak, 9, TrainingPhase::Peak, None),
            peak
        );
    }
}

#[test]
fn test_recurring_injury_moves_down_week_earlier() {
    let recurring = Some(InjuryStatus::Recurring);
    assert_eq!(
        build_base_volume_curve(35.0, 50.0, 4, TrainingPhase::Build, recurring),
        32.0
    );
    assert_eq!(
        build_base_volume_curve(35.0, 50.0, 5, TrainingPhase::Build, recurring),
        41.0
    );
}

#[test]
fn test_current_injury_lowers_the_peak() {
    assert_eq!(
        build_base_volume_curve(35.0, 50.0, 9, TrainingPhase::Peak, Some(InjuryStatus::Current)),
        38.0
    );
}

#[test]
fn test_taper_is_strictly_decreasing_from_peak() {
    for goal in [GoalIntent::Finish, GoalIntent::Pb, GoalIntent::Race, GoalIntent::GeneralFitness] {
        let weeks = table(goal, InjuryStatus::None);
        assert!(weeks[9] > weeks[10], "{goal}");
        assert!(weeks[10] > weeks[11], "{goal}");
        let lowest = weeks.iter().copied().fold(f64::INFINITY, f64::min);
        assert_eq!(weeks[11], lowest);
    }
}

#[test]
fn test_unsure_goal_consolidates_instead_of_tapering() {
    let weeks = table(GoalIntent::Unsure, InjuryStatus::None);
    assert_eq!(get_phase_for_week(11, Some(GoalIntent::Unsure)), TrainingPhase::Build);
    assert_eq!(weeks[10], 44.0);
    assert_eq!(weeks[11], 44.0);
}

#[test]
fn test_custom_curve_moves_down_week() {
    let curve = CurveConfig {
        down_week: 6,
        ..CurveConfig::default()
    };
    let weeks = build_base_volume_table(&curve, &REFERENCE, GoalIntent::Pb, None);
    assert_eq!(weeks[4], 41.0);
    assert_eq!(weeks[5], 35.0);
}

#[test]
fn test_down_week_is_below_the_week_before() {
    for distance in Distance::ALL {
        for tier in AbilityTier::ALL {
            for persona in PersonaId::ALL {
                let config =
                    get_volume_config(distance, GoalIntent::Pb, tier, Some("30_50"), persona);
                let week_4 = build_base_volume_curve(
                    config.start_km,
                    config.peak_km,
                    4,
                    TrainingPhase::Build,
                    None,
                );
                let week_5 = build_base_volume_curve(
                    config.start_km,
                    config.peak_km,
                    5,
                    TrainingPhase::Build,
                    None,
                );
                assert!(week_5 < week_4, "{distance} {tier} {persona}");
            }
        }
    }
}
