//! Test doubles shared by the use case tests.

use crate::ports::question_store::{QuestionStore, StoreError};
use crate::ports::random_source::RandomSource;
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;
use trivia_domain::{
    Category, CategoryId, NewQuestion, Question, QuestionId, SearchTerm, filter_matches,
};

// ==================== Fake Store ====================

pub(crate) struct FakeStore {
    categories: Vec<Category>,
    questions: Mutex<Vec<Question>>,
    next_id: Mutex<u64>,
}

impl FakeStore {
    pub(crate) fn new(categories: Vec<Category>, questions: Vec<Question>) -> Self {
        let next_id = questions.iter().map(|q| q.id.value()).max().unwrap_or(0) + 1;
        Self {
            categories,
            questions: Mutex::new(questions),
            next_id: Mutex::new(next_id),
        }
    }

    pub(crate) fn empty() -> Self {
        Self::new(Vec::new(), Vec::new())
    }

    /// Six categories and `count` questions with ids `1..=count`, cycling
    /// through categories 1..=6.
    pub(crate) fn with_questions(count: u64) -> Self {
        let questions = (1..=count).map(|id| question(id, (id - 1) % 6 + 1)).collect();
        Self::new(categories(), questions)
    }

    pub(crate) fn count(&self) -> usize {
        self.questions.lock().unwrap().len()
    }
}

pub(crate) fn categories() -> Vec<Category> {
    ["Science", "Art", "Geography", "History", "Entertainment", "Sports"]
        .into_iter()
        .enumerate()
        .map(|(i, label)| Category::new(i as u64 + 1, label))
        .collect()
}

pub(crate) fn question(id: u64, category: u64) -> Question {
    Question {
        id: QuestionId::new(id),
        question: format!("Question number {id}?"),
        answer: format!("Answer {id}"),
        category: CategoryId::new(category),
        difficulty: 1,
    }
}

#[async_trait]
impl QuestionStore for FakeStore {
    async fn list_questions(&self) -> Result<Vec<Question>, StoreError> {
        let mut questions = self.questions.lock().unwrap().clone();
        questions.sort_by_key(|q| q.id);
        Ok(questions)
    }

    async fn list_categories(&self) -> Result<Vec<Category>, StoreError> {
        Ok(self.categories.clone())
    }

    async fn find_category(&self, id: CategoryId) -> Result<Option<Category>, StoreError> {
        Ok(self.categories.iter().find(|c| c.id == id).cloned())
    }

    async fn find_question(&self, id: QuestionId) -> Result<Option<Question>, StoreError> {
        Ok(self
            .questions
            .lock()
            .unwrap()
            .iter()
            .find(|q| q.id == id)
            .cloned())
    }

    async fn insert_question(&self, question: NewQuestion) -> Result<Question, StoreError> {
        let mut next_id = self.next_id.lock().unwrap();
        let stored = Question::from_new(QuestionId::new(*next_id), question);
        *next_id += 1;
        self.questions.lock().unwrap().push(stored.clone());
        Ok(stored)
    }

    async fn delete_question(&self, id: QuestionId) -> Result<(), StoreError> {
        let mut questions = self.questions.lock().unwrap();
        let before = questions.len();
        questions.retain(|q| q.id != id);
        if questions.len() == before {
            Err(StoreError::NotFound(id))
        } else {
            Ok(())
        }
    }

    async fn filter_questions_by_category(
        &self,
        id: CategoryId,
    ) -> Result<Vec<Question>, StoreError> {
        Ok(self
            .questions
            .lock()
            .unwrap()
            .iter()
            .filter(|q| q.category == id)
            .cloned()
            .collect())
    }

    async fn search_questions(&self, term: &SearchTerm) -> Result<Vec<Question>, StoreError> {
        let questions = self.questions.lock().unwrap().clone();
        Ok(filter_matches(questions, term))
    }
}

// ==================== Failing Store ====================

/// Every call fails as if the backing store were down.
pub(crate) struct UnavailableStore;

#[async_trait]
impl QuestionStore for UnavailableStore {
    async fn list_questions(&self) -> Result<Vec<Question>, StoreError> {
        Err(down())
    }

    async fn list_categories(&self) -> Result<Vec<Category>, StoreError> {
        Err(down())
    }

    async fn find_category(&self, _id: CategoryId) -> Result<Option<Category>, StoreError> {
        Err(down())
    }

    async fn find_question(&self, _id: QuestionId) -> Result<Option<Question>, StoreError> {
        Err(down())
    }

    async fn insert_question(&self, _question: NewQuestion) -> Result<Question, StoreError> {
        Err(down())
    }

    async fn delete_question(&self, _id: QuestionId) -> Result<(), StoreError> {
        Err(down())
    }

    async fn filter_questions_by_category(
        &self,
        _id: CategoryId,
    ) -> Result<Vec<Question>, StoreError> {
        Err(down())
    }

    async fn search_questions(&self, _term: &SearchTerm) -> Result<Vec<Question>, StoreError> {
        Err(down())
    }
}

fn down() -> StoreError {
    StoreError::Unavailable("connection refused".to_string())
}

// ==================== Scripted Random ====================

/// Returns queued indices in order, then 0 once the script runs out.
pub(crate) struct ScriptedRandom {
    picks: Mutex<VecDeque<usize>>,
    seen_lengths: Mutex<Vec<usize>>,
}

impl ScriptedRandom {
    pub(crate) fn new(picks: impl IntoIterator<Item = usize>) -> Self {
        Self {
            picks: Mutex::new(picks.into_iter().collect()),
            seen_lengths: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn first() -> Self {
        Self::new([])
    }

    /// Pool sizes the selector asked to pick from
    pub(crate) fn seen_lengths(&self) -> Vec<usize> {
        self.seen_lengths.lock().unwrap().clone()
    }
}

impl RandomSource for ScriptedRandom {
    fn pick_index(&self, len: usize) -> usize {
        self.seen_lengths.lock().unwrap().push(len);
        self.picks.lock().unwrap().pop_front().unwrap_or(0)
    }
}
