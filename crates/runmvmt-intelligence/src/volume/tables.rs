// ABOUTME: Literal base volume table: start, peak, and long-run ranges per distance and tier
// ABOUTME: Indexed by Distance::index() then AbilityTier::index(); shared by every goal intent
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::Serialize;

/// Weekly-volume ranges for one (distance, tier) cell, all in km
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VolumeRange {
    /// Lowest sensible first-week volume
    pub start_min: f64,
    /// Highest sensible first-week volume
    pub start_max: f64,
    /// Lowest peak-week volume
    pub peak_min: f64,
    /// Highest peak-week volume
    pub peak_max: f64,
    /// Shortest peak long run
    pub long_run_peak_min: f64,
    /// Longest peak long run
    pub long_run_peak_max: f64,
}

const fn row(start: (f64, f64), peak: (f64, f64), long_run: (f64, f64)) -> VolumeRange {
    VolumeRange {
        start_min: start.0,
        start_max: start.1,
        peak_min: peak.0,
        peak_max: peak.1,
        long_run_peak_min: long_run.0,
        long_run_peak_max: long_run.1,
    }
}

/// Rows: 5k, 10k, half, marathon, 50k, 80k, 100k+.
/// Columns: beginner, lower/upper intermediate, advanced, competitive, elite.
pub static BASE_VOLUME_CONFIGS: [[VolumeRange; 6]; 7] = [
    // 5k
    [
        row((10.0, 15.0), (18.0, 25.0), (6.0, 8.0)),
        row((18.0, 25.0), (28.0, 35.0), (8.0, 10.0)),
        row((30.0, 40.0), (40.0, 50.0), (10.0, 14.0)),
        row((45.0, 55.0), (55.0, 70.0), (14.0, 16.0)),
        row((60.0, 75.0), (75.0, 90.0), (16.0, 18.0)),
        row((80.0, 100.0), (100.0, 120.0), (18.0, 22.0)),
    ],
    // 10k
    [
        row((12.0, 18.0), (20.0, 28.0), (8.0, 10.0)),
        row((20.0, 28.0), (30.0, 40.0), (10.0, 13.0)),
        row((32.0, 42.0), (45.0, 55.0), (13.0, 16.0)),
        row((48.0, 58.0), (60.0, 75.0), (16.0, 19.0)),
        row((65.0, 80.0), (80.0, 100.0), (18.0, 21.0)),
        row((85.0, 105.0), (110.0, 130.0), (20.0, 24.0)),
    ],
    // half marathon
    [
        row((15.0, 20.0), (25.0, 32.0), (12.0, 16.0)),
        row((22.0, 30.0), (35.0, 45.0), (15.0, 18.0)),
        row((35.0, 45.0), (50.0, 60.0), (18.0, 21.0)),
        row((50.0, 60.0), (65.0, 80.0), (21.0, 24.0)),
        row((70.0, 85.0), (85.0, 105.0), (22.0, 26.0)),
        row((90.0, 110.0), (115.0, 140.0), (24.0, 28.0)),
    ],
    // marathon
    [
        row((18.0, 25.0), (35.0, 45.0), (24.0, 28.0)),
        row((25.0, 35.0), (45.0, 55.0), (26.0, 30.0)),
        row((40.0, 50.0), (55.0, 70.0), (28.0, 32.0)),
        row((55.0, 65.0), (70.0, 90.0), (30.0, 34.0)),
        row((75.0, 90.0), (95.0, 120.0), (32.0, 35.0)),
        row((95.0, 115.0), (125.0, 160.0), (32.0, 38.0)),
    ],
    // 50k
    [
        row((20.0, 28.0), (40.0, 50.0), (26.0, 30.0)),
        row((28.0, 38.0), (50.0, 60.0), (28.0, 32.0)),
        row((42.0, 52.0), (60.0, 75.0), (30.0, 35.0)),
        row((58.0, 68.0), (75.0, 95.0), (32.0, 38.0)),
        row((78.0, 92.0), (100.0, 125.0), (35.0, 40.0)),
        row((100.0, 120.0), (130.0, 160.0), (38.0, 45.0)),
    ],
    // 80k
    [
        row((25.0, 32.0), (45.0, 55.0), (28.0, 32.0)),
        row((32.0, 42.0), (55.0, 68.0), (30.0, 35.0)),
        row((45.0, 55.0), (68.0, 82.0), (32.0, 38.0)),
        row((60.0, 72.0), (82.0, 100.0), (35.0, 42.0)),
        row((80.0, 95.0), (105.0, 130.0), (38.0, 45.0)),
        row((105.0, 125.0), (135.0, 165.0), (42.0, 50.0)),
    ],
    // 100k+
    [
        row((28.0, 35.0), (50.0, 60.0), (30.0, 35.0)),
        row((35.0, 45.0), (60.0, 72.0), (32.0, 38.0)),
        row((48.0, 58.0), (72.0, 88.0), (35.0, 42.0)),
        row((62.0, 75.0), (88.0, 105.0), (38.0, 45.0)),
        row((85.0, 100.0), (110.0, 135.0), (42.0, 50.0)),
        row((110.0, 130.0), (140.0, 170.0), (45.0, 55.0)),
    ],
];
