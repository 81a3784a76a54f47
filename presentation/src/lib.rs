//! Presentation layer for trivia
//!
//! This crate contains the CLI definition, the request/response envelope
//! mapping, output formatters, and the interactive quiz.

pub mod api;
pub mod cli;
pub mod output;
pub mod quiz;

#[cfg(test)]
pub(crate) mod test_support;

// Re-export commonly used types
pub use api::{ApiError, ApiRequest, ApiResponse, Reply, Status, TriviaApi, serve};
pub use cli::commands::{Cli, Command, OutputFormat, StoreKind};
pub use output::console::ConsoleFormatter;
pub use output::formatter::{JsonFormatter, OutputFormatter, formatter_for};
pub use output::set_color_enabled;
pub use quiz::{QuizRepl, QuizSession, Score};
