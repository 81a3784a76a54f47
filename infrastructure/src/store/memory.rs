//! In-memory question store
//!
//! Holds everything in a [`StoreSnapshot`] behind an async `RwLock`. Nothing
//! survives the process; used for tests, demos and `backend = "memory"`.

use super::seed::seed_snapshot;
use super::snapshot::StoreSnapshot;
use async_trait::async_trait;
use tokio::sync::RwLock;
use trivia_application::{QuestionStore, StoreError};
use trivia_domain::{Category, CategoryId, NewQuestion, Question, QuestionId, SearchTerm};

/// Question store kept entirely in memory
///
/// # Examples
///
/// ```
/// use trivia_infrastructure::InMemoryQuestionStore;
///
/// let store = InMemoryQuestionStore::seeded();
/// ```
#[derive(Debug, Default)]
pub struct InMemoryQuestionStore {
    state: RwLock<StoreSnapshot>,
}

impl InMemoryQuestionStore {
    /// An empty store: no categories, no questions
    pub fn new() -> Self {
        Self::default()
    }

    /// A store holding the standard data set
    pub fn seeded() -> Self {
        Self::from_snapshot(seed_snapshot())
    }

    pub fn from_snapshot(snapshot: StoreSnapshot) -> Self {
        Self {
            state: RwLock::new(snapshot.normalized()),
        }
    }

    /// Copy of the current contents
    pub async fn snapshot(&self) -> StoreSnapshot {
        self.state.read().await.clone()
    }
}

#[async_trait]
impl QuestionStore for InMemoryQuestionStore {
    async fn list_questions(&self) -> Result<Vec<Question>, StoreError> {
        Ok(self.state.read().await.questions())
    }

    async fn list_categories(&self) -> Result<Vec<Category>, StoreError> {
        Ok(self.state.read().await.categories())
    }

    async fn find_category(&self, id: CategoryId) -> Result<Option<Category>, StoreError> {
        Ok(self.state.read().await.find_category(id))
    }

    async fn find_question(&self, id: QuestionId) -> Result<Option<Question>, StoreError> {
        Ok(self.state.read().await.find_question(id))
    }

    async fn insert_question(&self, question: NewQuestion) -> Result<Question, StoreError> {
        Ok(self.state.write().await.insert(question))
    }

    async fn delete_question(&self, id: QuestionId) -> Result<(), StoreError> {
        self.state.write().await.delete(id)
    }

    async fn filter_questions_by_category(
        &self,
        id: CategoryId,
    ) -> Result<Vec<Question>, StoreError> {
        Ok(self.state.read().await.by_category(id))
    }

    async fn search_questions(&self, term: &SearchTerm) -> Result<Vec<Question>, StoreError> {
        Ok(self.state.read().await.search(term))
    }
}
