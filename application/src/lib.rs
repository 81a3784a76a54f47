//! Application layer for trivia
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::BehaviorConfig;
pub use ports::{
    question_store::{QuestionStore, StoreError},
    random_source::RandomSource,
};
pub use use_cases::create_question::CreateQuestionUseCase;
pub use use_cases::delete_question::DeleteQuestionUseCase;
pub use use_cases::list_categories::ListCategoriesUseCase;
pub use use_cases::list_questions::{ListQuestionsInput, ListQuestionsUseCase, QuestionPage};
pub use use_cases::play_quiz::{PlayQuizInput, PlayQuizUseCase, QuizDraw};
pub use use_cases::questions_by_category::{CategoryQuestions, QuestionsByCategoryUseCase};
pub use use_cases::search_questions::{SearchQuestionsUseCase, SearchResults};
pub use use_cases::submit_question::{SubmitOutcome, SubmitQuestionInput, SubmitQuestionUseCase};
