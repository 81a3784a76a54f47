//! Search questions use case

use crate::ports::question_store::QuestionStore;
use std::sync::Arc;
use tracing::debug;
use trivia_domain::{CategoryId, LISTING_CURRENT_CATEGORY, Question, SearchTerm, TriviaError};

/// Questions matching a search term
#[derive(Debug, Clone)]
pub struct SearchResults {
    pub questions: Vec<Question>,
    /// Always [`LISTING_CURRENT_CATEGORY`]
    pub current_category: CategoryId,
}

impl SearchResults {
    pub fn total(&self) -> usize {
        self.questions.len()
    }
}

/// Use case for case-insensitive substring search over question text
///
/// Results keep store order; an empty result is not an error.
pub struct SearchQuestionsUseCase {
    store: Arc<dyn QuestionStore>,
}

impl SearchQuestionsUseCase {
    pub fn new(store: Arc<dyn QuestionStore>) -> Self {
        Self { store }
    }

    pub async fn execute(&self, term: &SearchTerm) -> Result<SearchResults, TriviaError> {
        let questions = self.store.search_questions(term).await?;
        debug!("Search for {:?} matched {} questions", term.as_str(), questions.len());

        Ok(SearchResults {
            questions,
            current_category: LISTING_CURRENT_CATEGORY,
        })
    }
}
