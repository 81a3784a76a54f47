//! Guess checking for interactive play

/// Lowercase, drop punctuation and split on whitespace.
fn words(text: &str) -> Vec<String> {
    text.chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace())
        .collect::<String>()
        .to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Whether `guess` should be accepted for `answer`.
///
/// Every word of the answer has to appear in the guess, ignoring case and
/// punctuation, so "the palace of versailles!" matches "The Palace of
/// Versailles". A blank guess never matches.
pub fn is_correct_guess(guess: &str, answer: &str) -> bool {
    let guess_words = words(guess);
    if guess_words.is_empty() {
        return false;
    }
    let answer_words = words(answer);
    !answer_words.is_empty() && answer_words.iter().all(|w| guess_words.contains(w))
}
