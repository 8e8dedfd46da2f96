// ABOUTME: Core types and constants for the RunMVMT training plan engine
// ABOUTME: Foundation crate with error handling, quiz answers, and wire-format enumerations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # RunMVMT Core
//!
//! Foundation crate providing shared types and constants for the RunMVMT
//! training plan engine. Every identifier that crosses a component boundary
//! (distances, goals, tiers, personas, phases) lives here together with its
//! exact wire string, so the intelligence crate can match on it exhaustively.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `AppResult`
//! - **constants**: Answer keys, bucket identifiers, and fallback values
//! - **models**: `QuizAnswers` and the domain enumerations

/// Unified error handling system with standard error codes
pub mod errors;

/// Answer keys, bucket identifiers, and fallback values
pub mod constants;

/// Quiz answers and domain enumerations (distance, goal, tier, persona, phase)
pub mod models;
