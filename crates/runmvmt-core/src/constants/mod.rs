// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Quiz answer keys, bucket identifiers, and conservative fallback values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Answer keys and bucket strings are the wire format between the quiz intake
//! and the plan engine. They must match the intake exactly.

/// Question identifiers used as keys in `QuizAnswers`
pub mod answer_keys {
    /// Target race distance
    pub const GOAL_DISTANCE: &str = "goal_distance";
    /// Goal intent (finish, pb, race, general fitness, unsure)
    pub const GOAL_TYPE: &str = "goal_type";
    /// Current weekly distance bucket
    pub const CURRENT_WEEKLY_KM: &str = "current_weekly_km";
    /// Longest recent run bucket
    pub const LONGEST_RUN: &str = "longest_run";
    /// Current runs per week bucket
    pub const CURRENT_RUNS_PER_WEEK: &str = "current_runs_per_week";
    /// Injury status
    pub const INJURY_STATUS: &str = "injury_status";
    /// Preferred training days per week bucket
    pub const PREFERRED_DAYS_PER_WEEK: &str = "preferred_days_per_week";
    /// Lifestyle load category
    pub const LIFESTYLE: &str = "lifestyle";
    /// Subjective recovery category
    pub const RECOVERY_FEEL: &str = "recovery_feel";
    /// Main running surface
    pub const MAIN_SURFACE: &str = "main_surface";
    /// Strength training habit
    pub const STRENGTH_TRAINING: &str = "strength_training";
    /// Runner's first name, used to personalise reports
    pub const FIRST_NAME: &str = "first_name";
}

/// Bucket identifiers for the current weekly distance question
pub mod weekly_km_buckets {
    /// Under 10 km per week
    pub const UNDER_10: &str = "<10";
    /// 10 to 30 km per week
    pub const KM_10_30: &str = "10_30";
    /// 30 to 50 km per week
    pub const KM_30_50: &str = "30_50";
    /// 50 to 80 km per week
    pub const KM_50_80: &str = "50_80";
    /// 80 to 120 km per week
    pub const KM_80_120: &str = "80_120";
    /// Over 120 km per week
    pub const KM_120_PLUS: &str = "120_plus";
}

/// Bucket identifiers for the longest recent run question
pub mod longest_run_buckets {
    /// Under 5 km
    pub const UNDER_5: &str = "<5";
    /// 5 to 10 km
    pub const KM_5_10: &str = "5_10";
    /// 10 km to half marathon
    pub const KM_10_21: &str = "10_21";
    /// Half marathon to 30 km
    pub const KM_21_30: &str = "21_30";
    /// 30 km to marathon
    pub const KM_30_42: &str = "30_42";
    /// Beyond marathon distance
    pub const KM_42_PLUS: &str = "42_plus";
}

/// Bucket identifiers for the runs-per-week question
pub mod runs_per_week_buckets {
    /// Two or fewer runs
    pub const RUNS_0_2: &str = "0_2";
    /// Three to four runs
    pub const RUNS_3_4: &str = "3_4";
    /// Five to six runs
    pub const RUNS_5_6: &str = "5_6";
    /// Seven or more runs
    pub const RUNS_7_PLUS: &str = "7_plus";
}

/// Preferred-days bucket that marks a time-constrained runner
pub const TIME_POOR_DAYS_BUCKET: &str = "2_3";

/// Surface answer that marks a trail runner
pub const TRAIL_SURFACE: &str = "trail";

/// Fallback values substituted when an answer is missing or unrecognised
pub mod defaults {
    /// Weekly km assumed when the bucket is missing (midpoint of `10_30`)
    pub const WEEKLY_KM: f64 = 20.0;
    /// Longest run assumed when the bucket is missing (midpoint of `5_10`)
    pub const LONGEST_RUN_KM: f64 = 7.0;
    /// Runs per week assumed when the bucket is missing
    pub const RUNS_PER_WEEK: f64 = 3.0;
}

/// Fixed plan horizon
pub mod plan {
    /// Every plan spans exactly twelve weeks
    pub const DURATION_WEEKS: u8 = 12;
}
