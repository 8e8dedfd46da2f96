// ABOUTME: Quality-session budget configuration
// ABOUTME: Cap on high-intensity sessions per week before modifier reductions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::training_constants::quality_sessions;
use serde::{Deserialize, Serialize};

/// Weekly quality-session budget
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualityConfig {
    /// Sessions allowed before lifestyle, recovery, and injury reductions
    pub max_sessions_per_week: u8,
}

impl Default for QualityConfig {
    fn default() -> Self {
        Self {
            max_sessions_per_week: quality_sessions::BASE_MAX_PER_WEEK,
        }
    }
}
