//! Categories that group questions.

pub mod entities;
