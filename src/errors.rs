// ABOUTME: Error module re-exports from runmvmt-core
// ABOUTME: Keeps crate::errors paths stable for the CLI and integration tests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use runmvmt_core::errors::*;
