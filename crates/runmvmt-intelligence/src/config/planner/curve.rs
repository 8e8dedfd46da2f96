// ABOUTME: Weekly volume curve configuration: ramp fractions, down-week, peak and taper shape
// ABOUTME: Defaults come from training_constants::volume_curve
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::training_constants::volume_curve;
use serde::{Deserialize, Serialize};

/// Shape of the weekly base volume curve
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurveConfig {
    /// Share of the start-to-peak delta reached at week 3
    pub foundation_end_fraction: f64,
    /// Share of the delta at week 4
    pub build_start_fraction: f64,
    /// Share of the delta at week 7, also the consolidation level for weeks 11-12
    pub build_end_fraction: f64,
    /// Down-week volume relative to the preceding week
    pub down_week_factor: f64,
    /// Week number of the scheduled down-week
    pub down_week: u8,
    /// Down-week used when the injury is recurring
    pub recurring_injury_down_week: u8,
    /// Peak scaling while currently injured
    pub current_injury_peak_factor: f64,
    /// Weeks 8, 9, 10 as shares of peak
    pub peak_week_fractions: [f64; 3],
    /// Weeks 11, 12 as shares of peak
    pub taper_week_fractions: [f64; 2],
}

impl Default for CurveConfig {
    fn default() -> Self {
        Self {
            foundation_end_fraction: volume_curve::FOUNDATION_END_FRACTION,
            build_start_fraction: volume_curve::BUILD_START_FRACTION,
            build_end_fraction: volume_curve::BUILD_END_FRACTION,
            down_week_factor: volume_curve::DOWN_WEEK_FACTOR,
            down_week: volume_curve::DOWN_WEEK,
            recurring_injury_down_week: volume_curve::RECURRING_INJURY_DOWN_WEEK,
            current_injury_peak_factor: volume_curve::CURRENT_INJURY_PEAK_FACTOR,
            peak_week_fractions: volume_curve::PEAK_WEEK_FRACTIONS,
            taper_week_fractions: volume_curve::TAPER_WEEK_FRACTIONS,
        }
    }
}
