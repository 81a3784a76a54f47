//! Trivia questions.
//!
//! - [`entities::Question`]: a stored question
//! - [`draft::QuestionDraft`]: caller input checked before anything is stored

pub mod draft;
pub mod entities;
