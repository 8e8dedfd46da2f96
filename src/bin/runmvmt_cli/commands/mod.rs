// ABOUTME: Re-exports command modules for runmvmt-cli
// ABOUTME: One module per subcommand: plan, report, classify
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod classify;
pub mod plan;
pub mod report;
