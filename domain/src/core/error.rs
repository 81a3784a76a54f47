//! Domain error types

use crate::category::entities::CategoryId;
use crate::question::entities::QuestionId;
use std::fmt;
use thiserror::Error;

/// Errors produced by the trivia engine.
///
/// Everything except [`TriviaError::StoreUnavailable`] is an expected
/// condition caused by caller input and is returned as a typed failure.
/// `StoreUnavailable` carries the store's own message and is never retried
/// here.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TriviaError {
    #[error("Invalid page {page}: pages start at 1")]
    InvalidPage { page: i64 },

    #[error("Page {page} is out of range ({total_pages} pages available)")]
    PageOutOfRange { page: i64, total_pages: usize },

    #[error("Unknown category: {0}")]
    UnknownCategory(CategoryId),

    #[error("Missing required field(s): {}", .fields.join(", "))]
    MissingRequiredField { fields: Vec<&'static str> },

    #[error("Question not found: {0}")]
    QuestionNotFound(QuestionId),

    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),
}

impl TriviaError {
    /// Shorthand for a single missing field
    pub fn missing(field: &'static str) -> Self {
        TriviaError::MissingRequiredField {
            fields: vec![field],
        }
    }

    /// Stable classification of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            TriviaError::InvalidPage { .. } => ErrorKind::InvalidPage,
            TriviaError::PageOutOfRange { .. } => ErrorKind::PageOutOfRange,
            TriviaError::UnknownCategory(_) => ErrorKind::UnknownCategory,
            TriviaError::MissingRequiredField { .. } => ErrorKind::MissingRequiredField,
            TriviaError::QuestionNotFound(_) => ErrorKind::QuestionNotFound,
            TriviaError::StoreUnavailable(_) => ErrorKind::StoreUnavailable,
        }
    }

    /// Whether the caller caused this error (and can fix it by changing input)
    pub fn is_client_error(&self) -> bool {
        !matches!(self, TriviaError::StoreUnavailable(_))
    }
}

/// Machine-readable error classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidPage,
    PageOutOfRange,
    UnknownCategory,
    MissingRequiredField,
    QuestionNotFound,
    StoreUnavailable,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::InvalidPage => "invalid_page",
            ErrorKind::PageOutOfRange => "page_out_of_range",
            ErrorKind::UnknownCategory => "unknown_category",
            ErrorKind::MissingRequiredField => "missing_required_field",
            ErrorKind::QuestionNotFound => "question_not_found",
            ErrorKind::StoreUnavailable => "store_unavailable",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
