// ABOUTME: Literal tuning constants for plan generation (volume curve, envelope, modifiers)
// ABOUTME: Defaults for PlannerConfig; the numbers themselves are the product definition
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Training plan constants
//!
//! Every number the plan pipeline uses by default lives here, grouped by the
//! stage that consumes it. `PlannerConfig::default()` is built from these.

/// Weekly volume curve across the twelve-week horizon
pub mod volume_curve {
    /// Share of the start-to-peak delta reached at the end of foundation (week 3)
    pub const FOUNDATION_END_FRACTION: f64 = 0.20;

    /// Share of the delta at the first build week (week 4)
    pub const BUILD_START_FRACTION: f64 = 0.30;

    /// Share of the delta at the last build week (week 7)
    pub const BUILD_END_FRACTION: f64 = 0.60;

    /// Down-week volume as a share of the preceding week
    pub const DOWN_WEEK_FACTOR: f64 = 0.85;

    /// Scheduled down-week
    pub const DOWN_WEEK: u8 = 5;

    /// Down-week brought forward for recurring injuries
    pub const RECURRING_INJURY_DOWN_WEEK: u8 = 4;

    /// Peak scaling applied while currently injured
    pub const CURRENT_INJURY_PEAK_FACTOR: f64 = 0.75;

    /// Peak weeks 8, 9, 10 as shares of peak volume (week 10 dips before the taper)
    pub const PEAK_WEEK_FRACTIONS: [f64; 3] = [0.95, 1.00, 0.92];

    /// Taper weeks 11 and 12 as shares of peak volume (week 12 is race week)
    pub const TAPER_WEEK_FRACTIONS: [f64; 2] = [0.70, 0.50];
}

/// Start, peak, and long-run envelope derived from the base volume table
pub mod volume_envelope {
    /// Weekly ceiling for marathon and longer
    pub const LONG_DISTANCE_WEEKLY_CEILING_KM: f64 = 150.0;

    /// Position of the long-run peak inside its table range
    pub const LONG_RUN_PEAK_POSITION: f64 = 0.60;

    /// Beginners and injury returners never start above this multiple of current volume
    pub const CAUTIOUS_START_MULTIPLIER: f64 = 1.20;

    /// High-mileage racers may start up to this multiple of current volume
    pub const RACER_START_MULTIPLIER: f64 = 1.15;

    /// Time-poor runners start within this share of the start range above its minimum
    pub const TIME_POOR_START_BAND: f64 = 0.25;

    /// Elite peak never falls below this multiple of current volume
    pub const ELITE_PEAK_FLOOR_MULTIPLIER: f64 = 1.20;

    /// Peak position for beginners and injury returners
    pub const CAUTIOUS_PEAK_POSITION: f64 = 0.25;

    /// Peak position for time-poor runners
    pub const TIME_POOR_PEAK_POSITION: f64 = 0.40;

    /// Peak position for intermediate builders and ultra runners
    pub const BUILDER_PEAK_POSITION: f64 = 0.50;

    /// Peak position for high-mileage racers
    pub const RACER_PEAK_POSITION: f64 = 0.75;
}

/// Weekly quality-session budget
pub mod quality_sessions {
    /// Quality sessions allowed before modifiers reduce the budget
    pub const BASE_MAX_PER_WEEK: u8 = 2;
}
