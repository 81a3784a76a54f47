//! Domain layer for trivia
//!
//! This crate contains the entities, value objects and decision rules of the
//! trivia engine. It has no dependencies on storage, randomness or
//! presentation concerns.
//!
//! # Core Concepts
//!
//! ## Listing
//!
//! - **Page window**: the question listing is cut into pages of
//!   [`QUESTIONS_PER_PAGE`] ordered by id; see [`PageRequest::window`]
//! - **Search**: case-insensitive substring match over question text
//!
//! ## Quiz
//!
//! - **Candidate pool**: questions in the chosen category that were not
//!   shown yet; see [`candidate_pool`]
//! - **Previous questions**: the caller-held exclusion set, one call long

pub mod category;
pub mod config;
pub mod core;
pub mod pagination;
pub mod question;
pub mod quiz;
pub mod search;

// Re-export commonly used types
pub use category::entities::{Category, CategoryId, ParseCategoryIdError};
pub use config::OutputFormat;
pub use core::error::{ErrorKind, TriviaError};
pub use pagination::page::{
    LISTING_CURRENT_CATEGORY, Page, PageRequest, QUESTIONS_PER_PAGE, page_count, paginate,
};
pub use question::{
    draft::QuestionDraft,
    entities::{NewQuestion, Question, QuestionId},
};
pub use quiz::{
    answer::is_correct_guess,
    selection::{PreviousQuestions, QuizCategory, QuizScope, candidate_pool},
};
pub use search::matcher::{SearchTerm, filter_matches};
