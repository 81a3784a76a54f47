//! In-memory image of the store contents
//!
//! Both store adapters keep a [`StoreSnapshot`] and apply every operation
//! to it; the JSON file adapter additionally writes it out after mutations.

use serde::{Deserialize, Serialize};
use trivia_application::StoreError;
use trivia_domain::{
    Category, CategoryId, NewQuestion, Question, QuestionId, SearchTerm, filter_matches,
};

/// Categories, questions and the id sequence
///
/// Invariant: `questions` and `categories` are sorted by id and
/// `next_id` is greater than every question id ever handed out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreSnapshot {
    pub next_id: u64,
    pub categories: Vec<Category>,
    pub questions: Vec<Question>,
}

impl Default for StoreSnapshot {
    fn default() -> Self {
        Self {
            next_id: 1,
            categories: Vec::new(),
            questions: Vec::new(),
        }
    }
}

impl StoreSnapshot {
    pub fn new(categories: Vec<Category>, questions: Vec<Question>) -> Self {
        Self {
            next_id: 0,
            categories,
            questions,
        }
        .normalized()
    }

    /// Restore the ordering and id invariants, e.g. after loading a file
    /// that was edited by hand.
    pub fn normalized(mut self) -> Self {
        self.categories.sort_by_key(|c| c.id);
        self.questions.sort_by_key(|q| q.id);
        let after_max = self.questions.last().map_or(1, |q| q.id.value() + 1);
        self.next_id = self.next_id.max(after_max);
        self
    }

    pub fn questions(&self) -> Vec<Question> {
        self.questions.clone()
    }

    pub fn categories(&self) -> Vec<Category> {
        self.categories.clone()
    }

    pub fn find_category(&self, id: CategoryId) -> Option<Category> {
        self.categories.iter().find(|c| c.id == id).cloned()
    }

    pub fn find_question(&self, id: QuestionId) -> Option<Question> {
        self.questions
            .binary_search_by_key(&id, |q| q.id)
            .ok()
            .map(|index| self.questions[index].clone())
    }

    pub fn insert(&mut self, new_question: NewQuestion) -> Question {
        let question = Question::from_new(QuestionId::new(self.next_id), new_question);
        self.next_id += 1;
        self.questions.push(question.clone());
        question
    }

    pub fn delete(&mut self, id: QuestionId) -> Result<(), StoreError> {
        let index = self
            .questions
            .binary_search_by_key(&id, |q| q.id)
            .map_err(|_| StoreError::NotFound(id))?;
        self.questions.remove(index);
        Ok(())
    }

    pub fn by_category(&self, id: CategoryId) -> Vec<Question> {
        self.questions
            .iter()
            .filter(|q| q.category == id)
            .cloned()
            .collect()
    }

    pub fn search(&self, term: &SearchTerm) -> Vec<Question> {
        filter_matches(self.questions.iter().cloned(), term)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trivia_domain::QuestionDraft;

    fn new_question(text: &str) -> NewQuestion {
        QuestionDraft::new()
            .with_question(text)
            .with_answer("A")
            .with_category(1)
            .with_difficulty(1)
            .validate()
            .unwrap()
    }

    #[test]
    fn test_ids_are_not_reused_after_delete() {
        let mut snapshot = StoreSnapshot::default();
        let first = snapshot.insert(new_question("first"));
        let second = snapshot.insert(new_question("second"));
        snapshot.delete(second.id).unwrap();

        let third = snapshot.insert(new_question("third"));
        assert_eq!(first.id.value(), 1);
        assert_eq!(third.id.value(), 3);
    }

    #[test]
    fn test_delete_missing_is_not_found() {
        let mut snapshot = StoreSnapshot::default();
        assert_eq!(
            snapshot.delete(QuestionId::new(4)),
            Err(StoreError::NotFound(QuestionId::new(4)))
        );
    }

    #[test]
    fn test_normalized_sorts_and_advances_sequence() {
        let snapshot: StoreSnapshot = serde_json::from_str(
            r#"{
                "categories": [{"id": 2, "type": "Art"}, {"id": 1, "type": "Science"}],
                "questions": [
                    {"id": 9, "question": "B", "answer": "b", "category": 1, "difficulty": 1},
                    {"id": 3, "question": "A", "answer": "a", "category": 2, "difficulty": 1}
                ]
            }"#,
        )
        .unwrap();

        let snapshot = snapshot.normalized();
        assert_eq!(snapshot.next_id, 10);
        assert_eq!(snapshot.questions[0].id.value(), 3);
        assert_eq!(snapshot.categories[0].label, "Science");
        assert!(snapshot.find_question(QuestionId::new(9)).is_some());
    }
}
