//! List questions use case
//!
//! Serves one page of the full question listing together with the
//! category map the listing screen shows beside it.

use crate::ports::question_store::QuestionStore;
use std::sync::Arc;
use tracing::debug;
use trivia_domain::{
    Category, CategoryId, LISTING_CURRENT_CATEGORY, Page, PageRequest, Question, TriviaError,
    paginate,
};

/// Input for the ListQuestions use case
#[derive(Debug, Clone, Copy, Default)]
pub struct ListQuestionsInput {
    pub page: PageRequest,
}

impl ListQuestionsInput {
    pub fn new(page: i64) -> Self {
        Self {
            page: PageRequest::new(page),
        }
    }
}

/// One page of questions
#[derive(Debug, Clone)]
pub struct QuestionPage {
    /// The page window; `page.total` is the size of the unfiltered listing
    pub page: Page<Question>,
    /// Every category, ordered by id
    pub categories: Vec<Category>,
    /// Always [`LISTING_CURRENT_CATEGORY`]
    pub current_category: CategoryId,
}

/// Use case for paging through all questions ordered by id
pub struct ListQuestionsUseCase {
    store: Arc<dyn QuestionStore>,
}

impl ListQuestionsUseCase {
    pub fn new(store: Arc<dyn QuestionStore>) -> Self {
        Self { store }
    }

    /// # Errors
    ///
    /// - [`TriviaError::InvalidPage`] - page number is zero or negative
    /// - [`TriviaError::PageOutOfRange`] - page number beyond the last page
    /// - [`TriviaError::StoreUnavailable`] - the store failed
    pub async fn execute(&self, input: ListQuestionsInput) -> Result<QuestionPage, TriviaError> {
        let mut questions = self.store.list_questions().await?;
        questions.sort_by_key(|q| q.id);

        let page = paginate(questions, input.page)?;
        debug!(
            page = page.number,
            shown = page.items.len(),
            total = page.total,
            "Serving question page"
        );

        let mut categories = self.store.list_categories().await?;
        categories.sort_by_key(|c| c.id);

        Ok(QuestionPage {
            page,
            categories,
            current_category: LISTING_CURRENT_CATEGORY,
        })
    }
}
