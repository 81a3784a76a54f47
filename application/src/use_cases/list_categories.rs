//! List categories use case

use crate::ports::question_store::QuestionStore;
use std::sync::Arc;
use tracing::debug;
use trivia_domain::{Category, TriviaError};

/// Use case for listing every category, ordered by id
pub struct ListCategoriesUseCase {
    store: Arc<dyn QuestionStore>,
}

impl ListCategoriesUseCase {
    pub fn new(store: Arc<dyn QuestionStore>) -> Self {
        Self { store }
    }

    pub async fn execute(&self) -> Result<Vec<Category>, TriviaError> {
        let mut categories = self.store.list_categories().await?;
        categories.sort_by_key(|c| c.id);
        debug!("Listing {} categories", categories.len());
        Ok(categories)
    }
}
