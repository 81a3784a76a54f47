//! Question store port
//!
//! Defines the interface to the durable store holding questions and
//! categories.

use async_trait::async_trait;
use thiserror::Error;
use trivia_domain::{Category, CategoryId, NewQuestion, Question, QuestionId, SearchTerm, TriviaError};

/// Errors that can occur during store operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The store could not serve the request (I/O, corruption, lock poisoning)
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    /// The question to delete does not exist (or was deleted concurrently)
    #[error("Question not found: {0}")]
    NotFound(QuestionId),
}

impl From<StoreError> for TriviaError {
    fn from(error: StoreError) -> Self {
        match error {
            StoreError::Unavailable(message) => TriviaError::StoreUnavailable(message),
            StoreError::NotFound(id) => TriviaError::QuestionNotFound(id),
        }
    }
}

/// Store of questions and categories
///
/// This port defines how the use cases read and mutate trivia data.
/// Implementations (adapters) live in the infrastructure layer and are
/// responsible for keeping each single call atomic; use cases never hold a
/// lock across calls.
#[async_trait]
pub trait QuestionStore: Send + Sync {
    /// All questions ordered by id ascending
    async fn list_questions(&self) -> Result<Vec<Question>, StoreError>;

    /// All categories ordered by id ascending
    async fn list_categories(&self) -> Result<Vec<Category>, StoreError>;

    async fn find_category(&self, id: CategoryId) -> Result<Option<Category>, StoreError>;

    async fn find_question(&self, id: QuestionId) -> Result<Option<Question>, StoreError>;

    /// Store a validated question and return it with its assigned id
    async fn insert_question(&self, question: NewQuestion) -> Result<Question, StoreError>;

    /// Remove a question permanently; [`StoreError::NotFound`] if absent
    async fn delete_question(&self, id: QuestionId) -> Result<(), StoreError>;

    /// Questions whose category equals `id`, in store order
    async fn filter_questions_by_category(
        &self,
        id: CategoryId,
    ) -> Result<Vec<Question>, StoreError>;

    /// Questions whose text contains `term`, ignoring case, in store order
    async fn search_questions(&self, term: &SearchTerm) -> Result<Vec<Question>, StoreError>;
}
