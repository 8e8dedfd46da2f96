// ABOUTME: Output formatting helpers for runmvmt-cli
// ABOUTME: Writes compact or indented JSON to stdout followed by a newline
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use runmvmt_planner::errors::AppResult;
use serde::Serialize;
use std::io::{self, Write};

/// Write `value` to stdout as JSON
pub fn print_json<T: Serialize>(value: &T, pretty: bool) -> AppResult<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    if pretty {
        serde_json::to_writer_pretty(&mut out, value)?;
    } else {
        serde_json::to_writer(&mut out, value)?;
    }
    writeln!(out)?;
    out.flush()?;
    Ok(())
}
