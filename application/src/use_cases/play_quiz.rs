//! Play quiz use case
//!
//! Picks the next quiz question at random from the candidate pool: the
//! questions of the requested category (or all of them) that the caller has
//! not been shown yet. Running out of questions is a normal end of the
//! quiz and yields no question rather than an error.
//!
//! # Usage
//!
//! ```ignore
//! use trivia_application::{PlayQuizInput, PlayQuizUseCase};
//!
//! let use_case = PlayQuizUseCase::new(store, random);
//! let input = PlayQuizInput::new([5, 9]).with_category(QuizCategory::new(4));
//!
//! match use_case.execute(input).await?.question {
//!     Some(question) => println!("{}", question.question),
//!     None => println!("No questions left"),
//! }
//! ```

use crate::ports::question_store::QuestionStore;
use crate::ports::random_source::RandomSource;
use std::sync::Arc;
use tracing::debug;
use trivia_domain::{
    PreviousQuestions, Question, QuestionId, QuizCategory, QuizScope, TriviaError, candidate_pool,
};

/// Input for the PlayQuiz use case
#[derive(Debug, Clone, Default)]
pub struct PlayQuizInput {
    /// Ids already shown. `None` means the caller left the field out,
    /// which is different from an empty set.
    pub previous_questions: Option<PreviousQuestions>,
    /// Category to draw from; `None` draws from all categories
    pub quiz_category: Option<QuizCategory>,
}

impl PlayQuizInput {
    pub fn new<I>(previous: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<QuestionId>,
    {
        Self {
            previous_questions: Some(previous.into_iter().map(Into::into).collect()),
            quiz_category: None,
        }
    }

    pub fn with_category(mut self, category: QuizCategory) -> Self {
        self.quiz_category = Some(category);
        self
    }
}

/// Result of one draw
#[derive(Debug, Clone)]
pub struct QuizDraw {
    /// The drawn question, `None` when the pool is exhausted
    pub question: Option<Question>,
    /// Number of candidates the question was drawn from
    pub pool_size: usize,
}

/// Use case for drawing the next quiz question
pub struct PlayQuizUseCase {
    store: Arc<dyn QuestionStore>,
    random: Arc<dyn RandomSource>,
}

impl PlayQuizUseCase {
    pub fn new(store: Arc<dyn QuestionStore>, random: Arc<dyn RandomSource>) -> Self {
        Self { store, random }
    }

    /// # Errors
    ///
    /// - [`TriviaError::MissingRequiredField`] - `previous_questions` absent
    /// - [`TriviaError::StoreUnavailable`] - the store failed
    pub async fn execute(&self, input: PlayQuizInput) -> Result<QuizDraw, TriviaError> {
        let previous = input
            .previous_questions
            .ok_or_else(|| TriviaError::missing("previous_questions"))?;
        let scope = QuizScope::from_category(input.quiz_category.as_ref());

        // Unknown categories are not validated here: they simply have no questions.
        let questions = match scope {
            QuizScope::All => self.store.list_questions().await?,
            QuizScope::Category(id) => self.store.filter_questions_by_category(id).await?,
        };

        let mut pool = candidate_pool(questions, scope, &previous);
        let pool_size = pool.len();
        debug!(
            ?scope,
            excluded = previous.len(),
            pool_size,
            "Drawing quiz question"
        );

        if pool.is_empty() {
            return Ok(QuizDraw {
                question: None,
                pool_size,
            });
        }

        let index = self.random.pick_index(pool_size) % pool_size;
        Ok(QuizDraw {
            question: Some(pool.swap_remove(index)),
            pool_size,
        })
    }
}
