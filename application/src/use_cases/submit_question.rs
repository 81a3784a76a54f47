//! Submit question use case
//!
//! The question form and the search box post to the same operation. A
//! non-empty search term turns the submission into a search and nothing is
//! created; otherwise the draft goes through the create checks.

use super::create_question::CreateQuestionUseCase;
use super::search_questions::{SearchQuestionsUseCase, SearchResults};
use crate::config::BehaviorConfig;
use crate::ports::question_store::QuestionStore;
use std::sync::Arc;
use trivia_domain::{Question, QuestionDraft, SearchTerm, TriviaError};

/// Input for the SubmitQuestion use case
#[derive(Debug, Clone, Default)]
pub struct SubmitQuestionInput {
    pub draft: QuestionDraft,
    pub search_term: Option<String>,
}

/// What a submission turned out to be
#[derive(Debug, Clone)]
pub enum SubmitOutcome {
    Created(Question),
    Searched(SearchResults),
}

/// Use case dispatching a submission to search or create
pub struct SubmitQuestionUseCase {
    create: CreateQuestionUseCase,
    search: SearchQuestionsUseCase,
}

impl SubmitQuestionUseCase {
    pub fn new(store: Arc<dyn QuestionStore>) -> Self {
        Self {
            create: CreateQuestionUseCase::new(Arc::clone(&store)),
            search: SearchQuestionsUseCase::new(store),
        }
    }

    pub fn with_config(mut self, config: BehaviorConfig) -> Self {
        self.create = self.create.with_config(config);
        self
    }

    pub async fn execute(&self, input: SubmitQuestionInput) -> Result<SubmitOutcome, TriviaError> {
        match input.search_term.and_then(SearchTerm::try_new) {
            Some(term) => Ok(SubmitOutcome::Searched(self.search.execute(&term).await?)),
            None => Ok(SubmitOutcome::Created(self.create.execute(input.draft).await?)),
        }
    }
}
