//! Candidate pool for quiz play

use crate::category::entities::CategoryId;
use crate::question::entities::{Question, QuestionId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Question ids already shown in the current quiz (Value Object)
///
/// Lives for one selection call only; nothing about a quiz session is
/// kept between calls.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreviousQuestions(BTreeSet<QuestionId>);

impl PreviousQuestions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: QuestionId) -> bool {
        self.0.contains(&id)
    }

    pub fn insert(&mut self, id: QuestionId) -> bool {
        self.0.insert(id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = QuestionId> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<QuestionId> for PreviousQuestions {
    fn from_iter<I: IntoIterator<Item = QuestionId>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Category selector sent with a quiz request: `{"id": "4", "type": "History"}`
///
/// Only the id matters. The id is not checked against the stored
/// categories; an unknown one just matches no questions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizCategory {
    pub id: CategoryId,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl QuizCategory {
    pub fn new(id: impl Into<CategoryId>) -> Self {
        Self {
            id: id.into(),
            label: None,
        }
    }

    pub fn scope(&self) -> QuizScope {
        QuizScope::Category(self.id)
    }
}

/// Which questions a quiz draws from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuizScope {
    #[default]
    All,
    Category(CategoryId),
}

impl QuizScope {
    pub fn from_category(category: Option<&QuizCategory>) -> Self {
        category.map(QuizCategory::scope).unwrap_or_default()
    }

    pub fn includes(&self, question: &Question) -> bool {
        match self {
            QuizScope::All => true,
            QuizScope::Category(id) => question.category == *id,
        }
    }
}

/// Questions eligible for the next draw, ordered by id.
///
/// Keeps questions inside `scope` whose ids are not in `previous`. The
/// order makes the pool deterministic; the pick from it is not.
pub fn candidate_pool(
    questions: Vec<Question>,
    scope: QuizScope,
    previous: &PreviousQuestions,
) -> Vec<Question> {
    let mut pool: Vec<Question> = questions
        .into_iter()
        .filter(|q| scope.includes(q) && !previous.contains(q.id))
        .collect();
    pool.sort_by_key(|q| q.id);
    pool
}
