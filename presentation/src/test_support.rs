//! Small in-crate store and random source for presentation tests

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Mutex;
use trivia_application::{QuestionStore, RandomSource, StoreError};
use trivia_domain::{Category, CategoryId, NewQuestion, Question, QuestionId, SearchTerm};

/// Science(1) holds questions 1 and 2, Art(2) holds question 3.
pub struct TinyStore {
    questions: Mutex<BTreeMap<u64, Question>>,
}

impl TinyStore {
    pub fn new() -> Self {
        let rows: [(u64, u64, &str, &str); 3] = [
            (1, 1, "What is H2O?", "Water"),
            (2, 1, "What is the speed of light?", "299,792 km/s"),
            (3, 2, "Who painted the Mona Lisa?", "Leonardo da Vinci"),
        ];
        let questions = rows
            .into_iter()
            .map(|(id, category, text, answer)| {
                (
                    id,
                    Question {
                        id: QuestionId::new(id),
                        question: text.to_string(),
                        answer: answer.to_string(),
                        category: CategoryId::new(category),
                        difficulty: 1,
                    },
                )
            })
            .collect();
        Self {
            questions: Mutex::new(questions),
        }
    }

    fn categories() -> Vec<Category> {
        vec![
            Category::new(CategoryId::new(1), "Science"),
            Category::new(CategoryId::new(2), "Art"),
        ]
    }
}

#[async_trait]
impl QuestionStore for TinyStore {
    async fn list_questions(&self) -> Result<Vec<Question>, StoreError> {
        Ok(self.questions.lock().unwrap().values().cloned().collect())
    }

    async fn list_categories(&self) -> Result<Vec<Category>, StoreError> {
        Ok(Self::categories())
    }

    async fn find_category(&self, id: CategoryId) -> Result<Option<Category>, StoreError> {
        Ok(Self::categories().into_iter().find(|c| c.id == id))
    }

    async fn find_question(&self, id: QuestionId) -> Result<Option<Question>, StoreError> {
        Ok(self.questions.lock().unwrap().get(&id.value()).cloned())
    }

    async fn insert_question(&self, question: NewQuestion) -> Result<Question, StoreError> {
        let mut questions = self.questions.lock().unwrap();
        let id = questions.keys().last().copied().unwrap_or(0) + 1;
        let stored = Question::from_new(QuestionId::new(id), question);
        questions.insert(id, stored.clone());
        Ok(stored)
    }

    async fn delete_question(&self, id: QuestionId) -> Result<(), StoreError> {
        self.questions
            .lock()
            .unwrap()
            .remove(&id.value())
            .map(|_| ())
            .ok_or(StoreError::NotFound(id))
    }

    async fn filter_questions_by_category(
        &self,
        id: CategoryId,
    ) -> Result<Vec<Question>, StoreError> {
        Ok(self
            .list_questions()
            .await?
            .into_iter()
            .filter(|q| q.category == id)
            .collect())
    }

    async fn search_questions(&self, term: &SearchTerm) -> Result<Vec<Question>, StoreError> {
        Ok(self
            .list_questions()
            .await?
            .into_iter()
            .filter(|q| term.matches_question(q))
            .collect())
    }
}

/// Always draws the lowest id in the pool
pub struct FirstPick;

impl RandomSource for FirstPick {
    fn pick_index(&self, _len: usize) -> usize {
        0
    }
}
