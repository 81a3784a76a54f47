//! Quiz play: which questions may be drawn next and how guesses are judged.

pub mod answer;
pub mod selection;
