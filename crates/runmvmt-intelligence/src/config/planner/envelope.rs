// ABOUTME: Volume envelope configuration: persona start multipliers and peak positions
// ABOUTME: Controls how start, peak, and long-run peak are picked inside the base volume table
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::training_constants::volume_envelope;
use serde::{Deserialize, Serialize};

/// How the start/peak/long-run envelope is placed within a table row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnvelopeConfig {
    /// Weekly ceiling for marathon and longer (km)
    pub long_distance_weekly_ceiling_km: f64,
    /// Position of the long-run peak inside its range (0.0 = min, 1.0 = max)
    pub long_run_peak_position: f64,
    /// Start cap for beginners and injury returners, as a multiple of current volume
    pub cautious_start_multiplier: f64,
    /// Start target for high-mileage racers, as a multiple of current volume
    pub racer_start_multiplier: f64,
    /// Width of the start band above the range minimum for time-poor runners
    pub time_poor_start_band: f64,
    /// Elite peak floor, as a multiple of current volume
    pub elite_peak_floor_multiplier: f64,
    /// Peak position for beginners and injury returners
    pub cautious_peak_position: f64,
    /// Peak position for time-poor runners
    pub time_poor_peak_position: f64,
    /// Peak position for intermediate builders and ultra runners
    pub builder_peak_position: f64,
    /// Peak position for high-mileage racers
    pub racer_peak_position: f64,
}

impl Default for EnvelopeConfig {
    fn default() -> Self {
        Self {
            long_distance_weekly_ceiling_km: volume_envelope::LONG_DISTANCE_WEEKLY_CEILING_KM,
            long_run_peak_position: volume_envelope::LONG_RUN_PEAK_POSITION,
            cautious_start_multiplier: volume_envelope::CAUTIOUS_START_MULTIPLIER,
            racer_start_multiplier: volume_envelope::RACER_START_MULTIPLIER,
            time_poor_start_band: volume_envelope::TIME_POOR_START_BAND,
            elite_peak_floor_multiplier: volume_envelope::ELITE_PEAK_FLOOR_MULTIPLIER,
            cautious_peak_position: volume_envelope::CAUTIOUS_PEAK_POSITION,
            time_poor_peak_position: volume_envelope::TIME_POOR_PEAK_POSITION,
            builder_peak_position: volume_envelope::BUILDER_PEAK_POSITION,
            racer_peak_position: volume_envelope::RACER_PEAK_POSITION,
        }
    }
}
