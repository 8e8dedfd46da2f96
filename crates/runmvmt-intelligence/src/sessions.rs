// ABOUTME: Static session templates and the selectors that pick long-run and quality sessions
// ABOUTME: Selection is categorical on distance class, phase, and week number
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Session template selector
//!
//! Durations on quality templates are nominal minutes; on long-run templates
//! they are nominal kilometres that the plan assembler rescales to the week's
//! volume.

use runmvmt_core::models::{AbilityTier, Distance, SessionType, TrainingPhase};
use serde::Serialize;

/// Immutable session blueprint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionTemplate {
    /// Session category
    #[serde(rename = "type")]
    pub session_type: SessionType,
    /// Short title
    pub title: &'static str,
    /// What to do
    pub description: &'static str,
    /// Nominal duration, km for long runs and minutes otherwise
    pub duration_km_or_min: u32,
    /// Effort guidance
    pub intensity_hint: &'static str,
}

const fn template(
    session_type: SessionType,
    title: &'static str,
    description: &'static str,
    duration_km_or_min: u32,
    intensity_hint: &'static str,
) -> SessionTemplate {
    SessionTemplate {
        session_type,
        title,
        description,
        duration_km_or_min,
        intensity_hint,
    }
}

const fn long_run(
    title: &'static str,
    description: &'static str,
    km: u32,
    intensity_hint: &'static str,
) -> SessionTemplate {
    template(SessionType::LongRun, title, description, km, intensity_hint)
}

const EASY: &str = "Conversational, RPE 3-4";
const STEADY: &str = "Comfortably steady, RPE 5";
const FINISH_FAST: &str = "Easy, last section at goal effort";

/// Long-run templates by distance (outer) and phase (inner)
pub static LONG_RUN_TEMPLATES: [[SessionTemplate; 4]; 7] = [
    // 5k
    [
        long_run("Easy long run", "Relaxed aerobic run. Walk breaks are fine if you need them.", 6, EASY),
        long_run("Long run", "Steady aerobic running to build endurance for sustained speed.", 8, EASY),
        long_run("Long run with strides", "Easy long run finishing with 4 x 20 second relaxed strides.", 10, EASY),
        long_run("Short easy run", "Keep the legs moving without adding fatigue.", 5, EASY),
    ],
    // 10k
    [
        long_run("Easy long run", "Relaxed aerobic run at a pace you could chat at.", 8, EASY),
        long_run("Long run", "Build time on your feet with an even, easy effort.", 10, EASY),
        long_run("Long run, fast finish", "Run the final 2 km at 10K effort.", 13, FINISH_FAST),
        long_run("Shortened long run", "Easy running to stay loose before race day.", 6, EASY),
    ],
    // half marathon
    [
        long_run("Easy long run", "Build aerobic endurance at an easy, even effort.", 12, EASY),
        long_run("Progressive long run", "Start easy and finish the last third at steady effort.", 15, STEADY),
        long_run("Long run with race-pace finish", "Final 5 km at half marathon effort.", 18, FINISH_FAST),
        long_run("Taper long run", "Easy, shorter long run to stay sharp.", 10, EASY),
    ],
    // marathon
    [
        long_run("Easy long run", "Aerobic long run. Practise taking fluids on the move.", 18, EASY),
        long_run("Long run", "Extend your longest run. Rehearse your race fuelling every 40 minutes.", 24, EASY),
        long_run("Marathon-pace long run", "Easy running with the middle 10 km at marathon effort.", 30, FINISH_FAST),
        long_run("Taper long run", "Easy, shorter long run. Nothing to prove this week.", 16, EASY),
    ],
    // 50k
    [
        long_run("Easy long run", "Aerobic run on mixed terrain. Walk the steep climbs.", 20, EASY),
        long_run("Long run on terrain", "Run on race-like terrain and practise eating every 30-45 minutes.", 26, EASY),
        long_run("Race-simulation long run", "Full race kit and fuelling plan on race-like terrain.", 32, STEADY),
        long_run("Taper long run", "Easy trail run to stay loose.", 16, EASY),
    ],
    // 80k
    [
        long_run("Easy long run", "Relaxed time on feet on trails. Power-hike the climbs.", 22, EASY),
        long_run("Long run on terrain", "Build time on feet with a hike-run strategy and regular fuelling.", 28, EASY),
        long_run("Race-simulation long run", "Long day out in full kit. Test night gear if your race needs it.", 35, STEADY),
        long_run("Taper long run", "Easy trail run. Check kit and shoes one last time.", 18, EASY),
    ],
    // 100k+
    [
        long_run("Easy long run", "Patient aerobic time on feet. Walk the hills from the start.", 24, EASY),
        long_run("Long run on terrain", "Hike-run on race terrain and practise eating real food.", 30, EASY),
        long_run("Race-simulation long run", "Longest day of the block in full race kit with your fuelling plan.", 38, STEADY),
        long_run("Taper long run", "Easy trail run. Rest is now the training.", 20, EASY),
    ],
];

/// Long-run template for a distance and phase
#[must_use]
pub fn long_run_template(distance: Distance, phase: TrainingPhase) -> &'static SessionTemplate {
    &LONG_RUN_TEMPLATES[distance.index()][phase.index()]
}

static THRESHOLD_RUN: SessionTemplate = template(
    SessionType::Threshold,
    "Threshold run",
    "10 min easy, 3 x 6 min at comfortably hard effort with 2 min jog, 10 min easy.",
    45,
    "Comfortably hard, RPE 7",
);

static SPEED_INTERVALS: SessionTemplate = template(
    SessionType::Intervals,
    "Intervals",
    "15 min easy, 6 x 400 m at 5K effort with 90 s jog, 10 min easy.",
    45,
    "Hard but controlled, RPE 8",
);

static TEMPO_RUN: SessionTemplate = template(
    SessionType::Tempo,
    "Tempo run",
    "10 min easy, 20 min at steady tempo effort, 10 min easy.",
    40,
    "Steady tempo, RPE 6-7",
);

static RACE_PACE: SessionTemplate = template(
    SessionType::RacePace,
    "Race-pace session",
    "15 min easy, 3 x 10 min at goal race effort with 3 min easy, 10 min easy.",
    60,
    "Goal race effort",
);

static MARATHON_PACE: SessionTemplate = template(
    SessionType::MarathonPace,
    "Marathon-pace blocks",
    "15 min easy, 2 x 20 min at marathon effort with 5 min easy, 10 min easy.",
    75,
    "Marathon effort, controlled",
);

static STEADY_EFFORT: SessionTemplate = template(
    SessionType::Steady,
    "Steady effort run",
    "45-60 min at steady, sustainable effort on rolling terrain.",
    60,
    STEADY,
);

static HILL_REPEATS: SessionTemplate = template(
    SessionType::Hills,
    "Hill repeats",
    "15 min easy, 6-8 x 60 s uphill at strong effort, jog back down, 10 min easy.",
    45,
    "Strong uphill, RPE 7-8",
);

static FARTLEK: SessionTemplate = template(
    SessionType::Fartlek,
    "Fartlek",
    "35 min run with 8 x 1 min faster surges and 1-2 min easy between.",
    35,
    "Playful surges, RPE 6-8",
);

static PROGRESSION_RUN: SessionTemplate = template(
    SessionType::Progression,
    "Progression run",
    "40 min starting easy, each 10 min a little quicker, finishing at steady tempo.",
    40,
    "Easy building to RPE 7",
);

static CRUISE_INTERVALS: SessionTemplate = template(
    SessionType::Threshold,
    "Cruise intervals",
    "15 min easy, 4 x 8 min at threshold effort with 2 min jog, 10 min easy.",
    60,
    "Comfortably hard, RPE 7",
);

static TRAIL_HILLS: SessionTemplate = template(
    SessionType::Hills,
    "Hill power hike and run",
    "45 min on hilly terrain: run the gentle climbs, power-hike the steep ones.",
    45,
    "Strong climbing effort",
);

static TIME_ON_FEET: SessionTemplate = template(
    SessionType::TimeOnFeet,
    "Time on feet",
    "60-90 min easy on trails with race kit, practising fuelling.",
    75,
    EASY,
);

fn is_early(phase: TrainingPhase, week: u8) -> bool {
    phase == TrainingPhase::Foundation || week < 5
}

/// Primary quality session for a week
///
/// The tier is accepted for callers but does not change the choice; the
/// quality budget already limits how many of these a lower tier receives.
/// Ultra distances always get the steady-effort template.
#[must_use]
pub fn get_quality_session_template(
    distance: Distance,
    phase: TrainingPhase,
    week: u8,
    _tier: AbilityTier,
) -> &'static SessionTemplate {
    let gentle = is_early(phase, week);
    match distance {
        Distance::FiveK | Distance::TenK => {
            if gentle {
                &THRESHOLD_RUN
            } else {
                &SPEED_INTERVALS
            }
        }
        Distance::HalfMarathon | Distance::Marathon => {
            if gentle {
                &TEMPO_RUN
            } else if distance == Distance::Marathon && (7..=9).contains(&week) {
                &MARATHON_PACE
            } else {
                &RACE_PACE
            }
        }
        Distance::FiftyK | Distance::EightyK | Distance::HundredKPlus => &STEADY_EFFORT,
    }
}

/// Secondary quality session for a week
///
/// Ultra distances choose by phase alone; the week number only matters for
/// road distances.
#[must_use]
pub fn get_secondary_quality_session(
    distance: Distance,
    phase: TrainingPhase,
    week: u8,
) -> &'static SessionTemplate {
    match distance {
        Distance::FiveK | Distance::TenK => {
            if is_early(phase, week) {
                &HILL_REPEATS
            } else {
                &FARTLEK
            }
        }
        Distance::HalfMarathon | Distance::Marathon => {
            if is_early(phase, week) {
                &PROGRESSION_RUN
            } else {
                &CRUISE_INTERVALS
            }
        }
        Distance::FiftyK | Distance::EightyK | Distance::HundredKPlus => match phase {
            TrainingPhase::Foundation | TrainingPhase::Build => &TRAIL_HILLS,
            TrainingPhase::Peak | TrainingPhase::Taper => &TIME_ON_FEET,
        },
    }
}
