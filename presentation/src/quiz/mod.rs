//! Interactive quiz play

mod repl;
mod session;

pub use repl::QuizRepl;
pub use session::{QuizSession, Score};
