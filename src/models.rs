// ABOUTME: Model re-exports from runmvmt-core
// ABOUTME: Quiz answers and the distance, goal, tier, persona, and phase enumerations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use runmvmt_core::constants::answer_keys;
pub use runmvmt_core::models::*;
