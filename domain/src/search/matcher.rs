//! Case-insensitive substring search over question text

use crate::question::entities::Question;

/// A non-empty search term (Value Object)
///
/// The term is matched literally: characters that would be wildcards in a
/// SQL `LIKE` pattern (`%`, `_`) have no special meaning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTerm {
    raw: String,
    folded: String,
}

impl SearchTerm {
    /// Returns `None` for the empty string, which means "no search".
    pub fn try_new(raw: impl Into<String>) -> Option<Self> {
        let raw = raw.into();
        if raw.is_empty() {
            return None;
        }
        let folded = raw.to_lowercase();
        Some(Self { raw, folded })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Whether `text` contains this term, ignoring case
    pub fn matches(&self, text: &str) -> bool {
        text.to_lowercase().contains(&self.folded)
    }

    /// Whether the question's text (not its answer) contains this term
    pub fn matches_question(&self, question: &Question) -> bool {
        self.matches(&question.question)
    }
}

impl std::fmt::Display for SearchTerm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Keep the questions matching `term`, preserving iteration order
pub fn filter_matches<I>(questions: I, term: &SearchTerm) -> Vec<Question>
where
    I: IntoIterator<Item = Question>,
{
    questions
        .into_iter()
        .filter(|q| term.matches_question(q))
        .collect()
}
