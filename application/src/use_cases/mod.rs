//! Use cases
//!
//! Application-level operations that orchestrate domain logic over the
//! store. Each use case takes its ports as constructor dependencies.

pub mod create_question;
pub mod delete_question;
pub mod list_categories;
pub mod list_questions;
pub mod play_quiz;
pub mod questions_by_category;
pub mod search_questions;
pub mod submit_question;

#[cfg(test)]
pub(crate) mod test_support;
