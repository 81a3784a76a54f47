//! Unvalidated question input and the create-side field checks

use super::entities::NewQuestion;
use crate::category::entities::CategoryId;
use crate::core::error::TriviaError;
use serde::{Deserialize, Serialize};

/// Raw create input as supplied by a caller
///
/// Every field is optional here; [`QuestionDraft::validate`] decides which
/// ones count as present. Blank text and zero for `category` or `difficulty`
/// are treated as missing, matching how the form submits unset values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuestionDraft {
    pub question: Option<String>,
    pub answer: Option<String>,
    pub category: Option<CategoryId>,
    pub difficulty: Option<u32>,
}

impl QuestionDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_question(mut self, question: impl Into<String>) -> Self {
        self.question = Some(question.into());
        self
    }

    pub fn with_answer(mut self, answer: impl Into<String>) -> Self {
        self.answer = Some(answer.into());
        self
    }

    pub fn with_category(mut self, category: impl Into<CategoryId>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_difficulty(mut self, difficulty: u32) -> Self {
        self.difficulty = Some(difficulty);
        self
    }

    /// Check that all four fields are present.
    ///
    /// Reports every missing field at once, in declaration order.
    pub fn validate(self) -> Result<NewQuestion, TriviaError> {
        let question = self.question.filter(|s| !s.trim().is_empty());
        let answer = self.answer.filter(|s| !s.trim().is_empty());
        let category = self.category.filter(|c| !c.is_zero());
        let difficulty = self.difficulty.filter(|d| *d != 0);

        match (question, answer, category, difficulty) {
            (Some(question), Some(answer), Some(category), Some(difficulty)) => Ok(NewQuestion {
                question,
                answer,
                category,
                difficulty,
            }),
            (question, answer, category, difficulty) => {
                let mut fields = Vec::new();
                if question.is_none() {
                    fields.push("question");
                }
                if answer.is_none() {
                    fields.push("answer");
                }
                if category.is_none() {
                    fields.push("category");
                }
                if difficulty.is_none() {
                    fields.push("difficulty");
                }
                Err(TriviaError::MissingRequiredField { fields })
            }
        }
    }
}
