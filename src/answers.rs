// ABOUTME: Loads quiz answers from a JSON file, stdin, or a JSON string
// ABOUTME: The only place answer input can fail; the pipeline itself is total
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::{AppError, AppResult};
use crate::models::QuizAnswers;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Where answers are read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerSource {
    /// Standard input
    Stdin,
    /// A JSON file
    File(PathBuf),
}

impl AnswerSource {
    /// `-` means stdin, anything else is a path
    #[must_use]
    pub fn from_arg(arg: &str) -> Self {
        if arg == "-" {
            Self::Stdin
        } else {
            Self::File(PathBuf::from(arg))
        }
    }
}

/// Parse answers from a JSON object
///
/// # Errors
///
/// Returns `InvalidFormat` if the text is not a JSON object of string,
/// number, string-array, or null values
pub fn parse_answers(json: &str) -> AppResult<QuizAnswers> {
    let answers: QuizAnswers = serde_json::from_str(json)?;
    debug!(answer_count = answers.len(), "parsed quiz answers");
    Ok(answers)
}

/// Read and parse answers from a source
///
/// # Errors
///
/// Returns `ResourceNotFound` for a missing file, `StorageError` for other
/// read failures, and `InvalidFormat` for malformed JSON
pub fn read_answers(source: &AnswerSource) -> AppResult<QuizAnswers> {
    let raw = match source {
        AnswerSource::Stdin => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
        AnswerSource::File(path) => read_file(path)?,
    };
    parse_answers(&raw)
}

fn read_file(path: &Path) -> AppResult<String> {
    fs::read_to_string(path).map_err(|error| {
        if error.kind() == io::ErrorKind::NotFound {
            AppError::not_found(format!("answers file {}", path.display())).with_source(error)
        } else {
            AppError::from(error)
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorCode;

    #[test]
    fn test_dash_means_stdin() {
        assert_eq!(AnswerSource::from_arg("-"), AnswerSource::Stdin);
        assert_eq!(
            AnswerSource::from_arg("answers.json"),
            AnswerSource::File(PathBuf::from("answers.json"))
        );
    }

    #[test]
    fn test_top_level_array_is_invalid_format() {
        let code = parse_answers("[1, 2]").err().map(|e| e.code);
        assert_eq!(code, Some(ErrorCode::InvalidFormat));
    }
}
