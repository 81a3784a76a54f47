//! Question entity and identifier

use crate::category::entities::CategoryId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a stored [`Question`], assigned by the store on insert
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionId(u64);

impl QuestionId {
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    pub const fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for QuestionId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

/// A stored trivia question (Entity)
///
/// Created and deleted through the mutation use cases, never updated in
/// place. `difficulty` is a small positive integer whose range is left to
/// the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    pub question: String,
    pub answer: String,
    pub category: CategoryId,
    pub difficulty: u32,
}

impl Question {
    /// Attach a store-assigned id to a validated draft
    pub fn from_new(id: QuestionId, new: NewQuestion) -> Self {
        Self {
            id,
            question: new.question,
            answer: new.answer,
            category: new.category,
            difficulty: new.difficulty,
        }
    }
}

/// A validated question that has not been stored yet
///
/// Only obtainable through [`QuestionDraft::validate`](super::draft::QuestionDraft::validate),
/// so every field is known to be present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuestion {
    pub(crate) question: String,
    pub(crate) answer: String,
    pub(crate) category: CategoryId,
    pub(crate) difficulty: u32,
}

impl NewQuestion {
    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }

    pub fn category(&self) -> CategoryId {
        self.category
    }

    pub fn difficulty(&self) -> u32 {
        self.difficulty
    }
}
