//! Questions-by-category use case
//!
//! Validates the category before scoping the listing to it. An unknown
//! category is reported as bad caller input, not as an empty result.

use crate::ports::question_store::QuestionStore;
use std::sync::Arc;
use tracing::debug;
use trivia_domain::{Category, CategoryId, Question, TriviaError};

/// All questions of one validated category
#[derive(Debug, Clone)]
pub struct CategoryQuestions {
    pub category: Category,
    /// In store order
    pub questions: Vec<Question>,
}

impl CategoryQuestions {
    pub fn total(&self) -> usize {
        self.questions.len()
    }

    /// The validated id, echoed back as the active category
    pub fn current_category(&self) -> CategoryId {
        self.category.id
    }
}

/// Use case for listing the questions of a single category
pub struct QuestionsByCategoryUseCase {
    store: Arc<dyn QuestionStore>,
}

impl QuestionsByCategoryUseCase {
    pub fn new(store: Arc<dyn QuestionStore>) -> Self {
        Self { store }
    }

    /// # Errors
    ///
    /// - [`TriviaError::UnknownCategory`] - no category has this id
    /// - [`TriviaError::StoreUnavailable`] - the store failed
    pub async fn execute(&self, id: CategoryId) -> Result<CategoryQuestions, TriviaError> {
        let category = self
            .store
            .find_category(id)
            .await?
            .ok_or(TriviaError::UnknownCategory(id))?;

        let questions = self.store.filter_questions_by_category(id).await?;
        debug!(
            "Category {} ({}) has {} questions",
            category.id,
            category.label,
            questions.len()
        );

        Ok(CategoryQuestions {
            category,
            questions,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::use_cases::test_support::{FakeStore, categories, question};

    fn store() -> FakeStore {
        FakeStore::new(
            categories(),
            vec![
                question(16, 2),
                question(17, 2),
                question(18, 2),
                question(19, 2),
                question(20, 1),
            ],
        )
    }

    #[tokio::test]
    async fn test_known_category() {
        let use_case = QuestionsByCategoryUseCase::new(Arc::new(store()));

        let result = use_case.execute(CategoryId::new(2)).await.unwrap();
        assert_eq!(result.total(), 4);
        assert_eq!(result.current_category(), CategoryId::new(2));
        assert_eq!(result.category.label, "Art");
        assert!(result.questions.iter().all(|q| q.category == CategoryId::new(2)));
    }

    #[tokio::test]
    async fn test_known_category_without_questions() {
        let use_case = QuestionsByCategoryUseCase::new(Arc::new(store()));

        let result = use_case.execute(CategoryId::new(6)).await.unwrap();
        assert_eq!(result.total(), 0);
    }

    #[tokio::test]
    async fn test_unknown_category() {
        let use_case = QuestionsByCategoryUseCase::new(Arc::new(store()));

        let error = use_case.execute(CategoryId::new(1000)).await.unwrap_err();
        assert_eq!(error, TriviaError::UnknownCategory(CategoryId::new(1000)));
    }
}
