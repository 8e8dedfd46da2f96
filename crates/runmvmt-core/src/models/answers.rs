// ABOUTME: Quiz answer mapping from question identifier to answer value
// ABOUTME: Typed accessors substitute conservative defaults for missing or unknown answers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Quiz answers as handed over by the intake.
//!
//! Answers are immutable once they enter the pipeline. Every typed accessor
//! is total: a missing key, a `null`, or an unrecognised string resolves to a
//! documented default instead of an error.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

use crate::constants::answer_keys;
use crate::models::{Distance, GoalIntent, InjuryStatus};

/// A single answer value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    /// Single-choice or free-text answer
    Text(String),
    /// Numeric answer
    Number(f64),
    /// Multi-choice answer
    List(Vec<String>),
    /// Explicitly unanswered
    Null,
}

impl AnswerValue {
    /// Text content, if this is a text answer
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text.as_str()),
            Self::Number(_) | Self::List(_) | Self::Null => None,
        }
    }

    /// Numeric content, parsing text answers that hold a number
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(value) => Some(*value),
            Self::Text(text) => text.trim().parse().ok(),
            Self::List(_) | Self::Null => None,
        }
    }

    /// List content, if this is a multi-choice answer
    #[must_use]
    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Self::List(items) => Some(items.as_slice()),
            Self::Text(_) | Self::Number(_) | Self::Null => None,
        }
    }
}

impl From<&str> for AnswerValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for AnswerValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<f64> for AnswerValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<Vec<String>> for AnswerValue {
    fn from(value: Vec<String>) -> Self {
        Self::List(value)
    }
}

/// Mapping from question identifier to answer
///
/// Backed by a `BTreeMap` so serialisation order is stable across runs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuizAnswers {
    answers: BTreeMap<String, AnswerValue>,
}

impl QuizAnswers {
    /// Empty answer set
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<AnswerValue>) -> Self {
        self.answers.insert(key.into(), value.into());
        self
    }

    /// Insert or replace an answer
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<AnswerValue>) {
        self.answers.insert(key.into(), value.into());
    }

    /// Raw answer for a key
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&AnswerValue> {
        self.answers.get(key)
    }

    /// Text answer for a key, ignoring nulls, numbers and lists
    #[must_use]
    pub fn text(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(AnswerValue::as_text)
    }

    /// Number of answered questions
    #[must_use]
    pub fn len(&self) -> usize {
        self.answers.len()
    }

    /// Whether no question was answered
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    /// Iterate answers in key order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &AnswerValue)> {
        self.answers.iter().map(|(key, value)| (key.as_str(), value))
    }

    /// Goal distance, defaulting to 10K when missing or unknown
    #[must_use]
    pub fn distance(&self) -> Distance {
        let raw = self.text(answer_keys::GOAL_DISTANCE);
        raw.and_then(Distance::parse).unwrap_or_else(|| {
            debug!(answer = ?raw, "unrecognised goal distance, using default");
            Distance::default()
        })
    }

    /// Goal intent, defaulting to `finish` when missing or unknown
    #[must_use]
    pub fn goal(&self) -> GoalIntent {
        let raw = self.text(answer_keys::GOAL_TYPE);
        raw.and_then(GoalIntent::parse).unwrap_or_else(|| {
            debug!(answer = ?raw, "unrecognised goal type, using default");
            GoalIntent::default()
        })
    }

    /// Injury status, defaulting to `none` when missing or unknown
    #[must_use]
    pub fn injury_status(&self) -> InjuryStatus {
        self.text(answer_keys::INJURY_STATUS)
            .and_then(InjuryStatus::parse)
            .unwrap_or_default()
    }
}

impl<K, V> FromIterator<(K, V)> for QuizAnswers
where
    K: Into<String>,
    V: Into<AnswerValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            answers: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}
