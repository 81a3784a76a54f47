//! Create question use case

use crate::config::BehaviorConfig;
use crate::ports::question_store::QuestionStore;
use std::sync::Arc;
use tracing::info;
use trivia_domain::{Question, QuestionDraft, TriviaError};

/// Use case for adding a question
///
/// Requires question text, answer text, category and difficulty. Duplicate
/// text is allowed. Whether the category has to exist depends on
/// [`BehaviorConfig::enforce_category_on_create`].
pub struct CreateQuestionUseCase {
    store: Arc<dyn QuestionStore>,
    config: BehaviorConfig,
}

impl CreateQuestionUseCase {
    pub fn new(store: Arc<dyn QuestionStore>) -> Self {
        Self {
            store,
            config: BehaviorConfig::default(),
        }
    }

    pub fn with_config(mut self, config: BehaviorConfig) -> Self {
        self.config = config;
        self
    }

    /// # Errors
    ///
    /// - [`TriviaError::MissingRequiredField`] - any of the four fields absent
    /// - [`TriviaError::UnknownCategory`] - category missing while enforcement is on
    /// - [`TriviaError::StoreUnavailable`] - the store failed
    pub async fn execute(&self, draft: QuestionDraft) -> Result<Question, TriviaError> {
        let new_question = draft.validate()?;

        if self.config.enforce_category_on_create
            && self
                .store
                .find_category(new_question.category())
                .await?
                .is_none()
        {
            return Err(TriviaError::UnknownCategory(new_question.category()));
        }

        let question = self.store.insert_question(new_question).await?;
        info!(
            "Created question {} in category {}",
            question.id, question.category
        );
        Ok(question)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::use_cases::test_support::FakeStore;
    use trivia_domain::CategoryId;

    fn draft() -> QuestionDraft {
        QuestionDraft::new()
            .with_question("Who discovered penicillin?")
            .with_answer("Alexander Fleming")
            .with_category(1)
            .with_difficulty(3)
    }

    #[tokio::test]
    async fn test_create_adds_exactly_one() {
        let store = Arc::new(FakeStore::with_questions(19));
        let use_case = CreateQuestionUseCase::new(store.clone());

        let created = use_case.execute(draft()).await.unwrap();
        assert_eq!(store.count(), 20);
        assert_eq!(created.id.value(), 20);
        assert_eq!(created.answer, "Alexander Fleming");
    }

    #[tokio::test]
    async fn test_duplicates_are_allowed() {
        let store = Arc::new(FakeStore::with_questions(0));
        let use_case = CreateQuestionUseCase::new(store.clone());

        let first = use_case.execute(draft()).await.unwrap();
        let second = use_case.execute(draft()).await.unwrap();
        assert_ne!(first.id, second.id);
        assert_eq!(store.count(), 2);
    }

    #[tokio::test]
    async fn test_missing_field_leaves_store_untouched() {
        let store = Arc::new(FakeStore::with_questions(3));
        let use_case = CreateQuestionUseCase::new(store.clone());
        let mut incomplete = draft();
        incomplete.answer = None;

        let error = use_case.execute(incomplete).await.unwrap_err();
        assert_eq!(error, TriviaError::missing("answer"));
        assert_eq!(store.count(), 3);
    }

    #[tokio::test]
    async fn test_unknown_category_accepted_by_default() {
        let store = Arc::new(FakeStore::with_questions(0));
        let use_case = CreateQuestionUseCase::new(store.clone());

        let created = use_case.execute(draft().with_category(99)).await.unwrap();
        assert_eq!(created.category, CategoryId::new(99));
    }

    #[tokio::test]
    async fn test_unknown_category_rejected_when_enforced() {
        let store = Arc::new(FakeStore::with_questions(0));
        let use_case = CreateQuestionUseCase::new(store.clone()).with_config(BehaviorConfig::strict());

        let error = use_case.execute(draft().with_category(99)).await.unwrap_err();
        assert_eq!(error, TriviaError::UnknownCategory(CategoryId::new(99)));
        assert_eq!(store.count(), 0);

        assert!(use_case.execute(draft()).await.is_ok());
    }
}
