//! State of one interactive quiz

use trivia_application::{PlayQuizInput, PlayQuizUseCase};
use trivia_domain::{
    CategoryId, PreviousQuestions, Question, QuizCategory, TriviaError, is_correct_guess,
};

/// Questions asked and answered correctly so far
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Score {
    pub correct: usize,
    pub asked: usize,
}

/// One play-through: a category, a round limit and the ids already shown.
///
/// Every draw sends the full set of shown ids, so the selector never repeats
/// a question within a session.
#[derive(Debug, Clone)]
pub struct QuizSession {
    category: Option<QuizCategory>,
    previous: PreviousQuestions,
    rounds: usize,
    score: Score,
}

impl QuizSession {
    pub fn new(category: Option<QuizCategory>, rounds: usize) -> Self {
        Self {
            category,
            previous: PreviousQuestions::new(),
            rounds,
            score: Score::default(),
        }
    }

    /// Session for a pick from the play menu, where 0 is "All" and sends
    /// no category selector.
    pub fn from_menu(choice: CategoryId, rounds: usize) -> Self {
        let category = (!choice.is_zero()).then(|| QuizCategory::new(choice));
        Self::new(category, rounds)
    }

    pub fn is_finished(&self) -> bool {
        self.score.asked >= self.rounds
    }

    pub fn score(&self) -> Score {
        self.score
    }

    /// Draw the next question, or `None` when the round limit is reached or
    /// the pool is exhausted.
    pub async fn draw(
        &mut self,
        play_quiz: &PlayQuizUseCase,
    ) -> Result<Option<Question>, TriviaError> {
        if self.is_finished() {
            return Ok(None);
        }

        let input = PlayQuizInput {
            previous_questions: Some(self.previous.clone()),
            quiz_category: self.category.clone(),
        };
        let question = play_quiz.execute(input).await?.question;
        if let Some(question) = &question {
            self.previous.insert(question.id);
        }
        Ok(question)
    }

    /// Record a guess for `question`; returns whether it was right.
    pub fn answer(&mut self, question: &Question, guess: &str) -> bool {
        let correct = is_correct_guess(guess, &question.answer);
        self.score.asked += 1;
        if correct {
            self.score.correct += 1;
        }
        correct
    }
}
