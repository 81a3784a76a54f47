//! Delete question use case

use crate::ports::question_store::QuestionStore;
use std::sync::Arc;
use tracing::info;
use trivia_domain::{QuestionId, TriviaError};

/// Use case for permanently removing a question
///
/// Categories are unaffected. Deleting the same id twice, even
/// concurrently, reports [`TriviaError::QuestionNotFound`] the second time.
pub struct DeleteQuestionUseCase {
    store: Arc<dyn QuestionStore>,
}

impl DeleteQuestionUseCase {
    pub fn new(store: Arc<dyn QuestionStore>) -> Self {
        Self { store }
    }

    pub async fn execute(&self, id: QuestionId) -> Result<QuestionId, TriviaError> {
        if self.store.find_question(id).await?.is_none() {
            return Err(TriviaError::QuestionNotFound(id));
        }

        // A concurrent delete between the lookup and here surfaces as NotFound.
        self.store.delete_question(id).await?;
        info!("Deleted question {}", id);
        Ok(id)
    }
}
