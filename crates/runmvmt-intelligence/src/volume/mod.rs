// ABOUTME: Volume envelope selection and the weekly base volume curve
// ABOUTME: Turns distance, tier, persona, and current fitness into start/peak/long-run km and per-week targets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Volume curve builder
//!
//! Two stages:
//!
//! 1. **Envelope**: `get_volume_config` picks a start, peak, and long-run peak
//!    inside the `BASE_VOLUME_CONFIGS` cell for the runner's distance and tier.
//!    Where inside the cell depends on the persona.
//! 2. **Curve**: `build_base_volume_curve` expands the envelope into a target
//!    for one week. Every week is a closed-form function of its number, so the
//!    down-week is derived from the ramp value of the week before it rather
//!    than by re-entering the curve.

mod tables;

pub use tables::{VolumeRange, BASE_VOLUME_CONFIGS};

use crate::ability::weekly_km_from_bucket;
use crate::config::planner::{CurveConfig, EnvelopeConfig};
use crate::phase::get_phase_for_week;
use runmvmt_core::constants::plan;
use runmvmt_core::models::{
    AbilityTier, Distance, GoalIntent, InjuryStatus, PersonaId, TrainingPhase,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Start, peak, and long-run peak distances bounding one plan (km)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VolumeConfig {
    /// First-week weekly volume
    pub start_km: f64,
    /// Peak-week weekly volume
    pub peak_km: f64,
    /// Longest long run of the block
    pub long_run_peak_km: f64,
}

/// How a persona is placed inside its table cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EnvelopeProfile {
    Cautious,
    TimePoor,
    Builder,
    Racer,
}

impl From<PersonaId> for EnvelopeProfile {
    fn from(id: PersonaId) -> Self {
        match id {
            PersonaId::BeginnerLowMileage | PersonaId::ReturningFromInjury => Self::Cautious,
            PersonaId::TimePoor3Day => Self::TimePoor,
            PersonaId::IntermediateBuilder | PersonaId::UltraTrailRunner => Self::Builder,
            PersonaId::HighMileageRacer => Self::Racer,
        }
    }
}

/// Table cell for a distance and tier
///
/// The goal intent is an independent axis of the table but every intent
/// currently shares the same ranges.
#[must_use]
pub fn volume_range(distance: Distance, _goal: GoalIntent, tier: AbilityTier) -> &'static VolumeRange {
    &BASE_VOLUME_CONFIGS[distance.index()][tier.index()]
}

/// Volume envelope using the default envelope settings
#[must_use]
pub fn get_volume_config(
    distance: Distance,
    goal: GoalIntent,
    tier: AbilityTier,
    current_km_bucket: Option<&str>,
    persona_id: PersonaId,
) -> VolumeConfig {
    get_volume_config_with(
        &EnvelopeConfig::default(),
        distance,
        goal,
        tier,
        current_km_bucket,
        persona_id,
    )
}

/// Volume envelope with explicit envelope settings
///
/// All three distances are rounded to whole kilometres and the peak is never
/// below the start.
#[must_use]
pub fn get_volume_config_with(
    envelope: &EnvelopeConfig,
    distance: Distance,
    goal: GoalIntent,
    tier: AbilityTier,
    current_km_bucket: Option<&str>,
    persona_id: PersonaId,
) -> VolumeConfig {
    let range = volume_range(distance, goal, tier);
    let current_km = weekly_km_from_bucket(current_km_bucket);
    let profile = EnvelopeProfile::from(persona_id);

    let start_km = start_volume(envelope, range, profile, current_km).round();

    let mut peak_km = position_in(range.peak_min, range.peak_max, peak_position(envelope, profile));
    if profile == EnvelopeProfile::Racer && tier == AbilityTier::Elite {
        peak_km = peak_km.max(current_km * envelope.elite_peak_floor_multiplier);
    }
    if distance.is_long_distance() {
        peak_km = peak_km.min(envelope.long_distance_weekly_ceiling_km);
    }
    let peak_km = peak_km.round().max(start_km);

    let long_run_peak_km = position_in(
        range.long_run_peak_min,
        range.long_run_peak_max,
        envelope.long_run_peak_position,
    )
    .round();

    let config = VolumeConfig {
        start_km,
        peak_km,
        long_run_peak_km,
    };
    debug!(
        distance = %distance,
        tier = %tier,
        persona = %persona_id,
        current_km,
        start_km,
        peak_km,
        long_run_peak_km,
        "selected volume envelope"
    );
    config
}

fn start_volume(
    envelope: &EnvelopeConfig,
    range: &VolumeRange,
    profile: EnvelopeProfile,
    current_km: f64,
) -> f64 {
    match profile {
        EnvelopeProfile::Cautious => current_km
            .clamp(range.start_min, range.start_max)
            .min(current_km * envelope.cautious_start_multiplier),
        EnvelopeProfile::TimePoor => {
            let band_top = position_in(range.start_min, range.start_max, envelope.time_poor_start_band);
            current_km.clamp(range.start_min, band_top)
        }
        EnvelopeProfile::Builder => current_km.clamp(range.start_min, range.start_max),
        EnvelopeProfile::Racer => {
            (current_km * envelope.racer_start_multiplier).clamp(range.start_min, range.start_max)
        }
    }
}

const fn peak_position(envelope: &EnvelopeConfig, profile: EnvelopeProfile) -> f64 {
    match profile {
        EnvelopeProfile::Cautious => envelope.cautious_peak_position,
        EnvelopeProfile::TimePoor => envelope.time_poor_peak_position,
        EnvelopeProfile::Builder => envelope.builder_peak_position,
        EnvelopeProfile::Racer => envelope.racer_peak_position,
    }
}

fn position_in(min: f64, max: f64, position: f64) -> f64 {
    (max - min).mul_add(position, min)
}

/// Base volume for one week using the default curve shape
///
/// `week` is expected in `1..=12`; values outside are not rejected.
#[must_use]
pub fn build_base_volume_curve(
    start_km: f64,
    peak_km: f64,
    week: u8,
    phase: TrainingPhase,
    injury: Option<InjuryStatus>,
) -> f64 {
    base_volume_for_week(&CurveConfig::default(), start_km, peak_km, week, phase, injury)
}

/// Base volume for one week with an explicit curve shape, rounded to whole km
#[must_use]
pub fn base_volume_for_week(
    curve: &CurveConfig,
    start_km: f64,
    peak_km: f64,
    week: u8,
    phase: TrainingPhase,
    injury: Option<InjuryStatus>,
) -> f64 {
    let adjusted_peak = if injury == Some(InjuryStatus::Current) {
        peak_km * curve.current_injury_peak_factor
    } else {
        peak_km
    };
    let ramp = |w: u8| (adjusted_peak - start_km).mul_add(ramp_fraction(curve, w), start_km);

    let down_week = if injury == Some(InjuryStatus::Recurring) {
        curve.recurring_injury_down_week
    } else {
        curve.down_week
    };

    let value = match phase {
        TrainingPhase::Foundation => ramp(week),
        TrainingPhase::Build if week == down_week => {
            curve.down_week_factor * ramp(week.saturating_sub(1)).round()
        }
        TrainingPhase::Build => ramp(week),
        TrainingPhase::Peak => {
            let [first, top, pre_taper] = curve.peak_week_fractions;
            let fraction = match week {
                8 => first,
                10 => pre_taper,
                _ => top,
            };
            adjusted_peak * fraction
        }
        TrainingPhase::Taper => {
            let [first, race] = curve.taper_week_fractions;
            adjusted_peak * if week <= 11 { first } else { race }
        }
    };

    value.round()
}

/// Share of the start-to-peak delta reached by `week` on the ramp
///
/// Weeks 1-3 climb from 0 to the foundation end fraction; weeks 4-7 climb
/// from the build start to the build end fraction and hold there afterwards.
fn ramp_fraction(curve: &CurveConfig, week: u8) -> f64 {
    if week <= 3 {
        curve.foundation_end_fraction * f64::from(week.saturating_sub(1)) / 2.0
    } else {
        let step = (curve.build_end_fraction - curve.build_start_fraction) / 3.0;
        step.mul_add(f64::from(week - 4), curve.build_start_fraction)
            .min(curve.build_end_fraction)
    }
}

/// Base volume for every week of the plan, in week order
#[must_use]
pub fn build_base_volume_table(
    curve: &CurveConfig,
    volume: &VolumeConfig,
    goal: GoalIntent,
    injury: Option<InjuryStatus>,
) -> Vec<f64> {
    (1..=plan::DURATION_WEEKS)
        .map(|week| {
            let phase = get_phase_for_week(week, Some(goal));
            base_volume_for_week(curve, volume.start_km, volume.peak_km, week, phase, injury)
        })
        .collect()
}
