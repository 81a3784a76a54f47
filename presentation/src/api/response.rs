//! Response status classes and the JSON envelope

use serde::Serialize;
use serde_json::{Value, json};
use thiserror::Error;
use trivia_domain::TriviaError;

/// Status class of a response, numbered like HTTP status codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Status(u16);

impl Status {
    pub const OK: Status = Status(200);
    pub const BAD_REQUEST: Status = Status(400);
    pub const NOT_FOUND: Status = Status(404);
    pub const METHOD_NOT_ALLOWED: Status = Status(405);
    pub const INTERNAL_SERVER_ERROR: Status = Status(500);

    pub fn code(self) -> u16 {
        self.0
    }

    pub fn is_success(self) -> bool {
        (200..300).contains(&self.0)
    }

    pub fn reason(self) -> &'static str {
        match self.0 {
            200 => "OK",
            400 => "Bad Request",
            404 => "Not Found",
            405 => "Method Not Allowed",
            _ => "Internal Server Error",
        }
    }

    /// Status class for an engine error.
    ///
    /// `QuestionNotFound` and `UnknownCategory` are reported as bad requests,
    /// not as not-found; only an out-of-range page is a 404.
    pub fn for_error(error: &TriviaError) -> Status {
        match error {
            TriviaError::PageOutOfRange { .. } => Status::NOT_FOUND,
            TriviaError::StoreUnavailable(_) => Status::INTERNAL_SERVER_ERROR,
            TriviaError::InvalidPage { .. }
            | TriviaError::UnknownCategory(_)
            | TriviaError::MissingRequiredField { .. }
            | TriviaError::QuestionNotFound(_) => Status::BAD_REQUEST,
        }
    }
}

/// Failure of one API call
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error(transparent)]
    Trivia(#[from] TriviaError),

    #[error("Malformed request: {0}")]
    Malformed(String),

    #[error("No route for {0}")]
    NoRoute(String),

    #[error("Method {method} not allowed on {path}")]
    MethodNotAllowed { method: String, path: String },
}

impl ApiError {
    pub fn status(&self) -> Status {
        match self {
            ApiError::Trivia(e) => Status::for_error(e),
            ApiError::Malformed(_) => Status::BAD_REQUEST,
            ApiError::NoRoute(_) => Status::NOT_FOUND,
            ApiError::MethodNotAllowed { .. } => Status::METHOD_NOT_ALLOWED,
        }
    }

    /// Stable machine-readable code, e.g. `"page_out_of_range"`
    pub fn code(&self) -> &'static str {
        match self {
            ApiError::Trivia(e) => e.kind().as_str(),
            ApiError::Malformed(_) => "malformed_request",
            ApiError::NoRoute(_) => "no_route",
            ApiError::MethodNotAllowed { .. } => "method_not_allowed",
        }
    }

    /// `{"success": false, "error": <status>, "message": <reason>, ...}`
    pub fn to_body(&self) -> Value {
        let status = self.status();
        json!({
            "success": false,
            "error": status.code(),
            "message": status.reason(),
            "kind": self.code(),
            "detail": self.to_string(),
        })
    }
}

/// One response: a status class and a JSON body
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApiResponse {
    pub status: Status,
    pub body: Value,
}

impl ApiResponse {
    pub fn ok(body: Value) -> Self {
        Self {
            status: Status::OK,
            body,
        }
    }

    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }
}

impl From<ApiError> for ApiResponse {
    fn from(error: ApiError) -> Self {
        Self {
            status: error.status(),
            body: error.to_body(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trivia_domain::{CategoryId, QuestionId};

    #[test]
    fn test_error_status_classes() {
        assert_eq!(
            Status::for_error(&TriviaError::InvalidPage { page: 0 }),
            Status::BAD_REQUEST
        );
        assert_eq!(
            Status::for_error(&TriviaError::PageOutOfRange {
                page: 3,
                total_pages: 2
            }),
            Status::NOT_FOUND
        );
        assert_eq!(
            Status::for_error(&TriviaError::UnknownCategory(CategoryId::new(9))),
            Status::BAD_REQUEST
        );
        assert_eq!(
            Status::for_error(&TriviaError::QuestionNotFound(QuestionId::new(9))),
            Status::BAD_REQUEST
        );
        assert_eq!(
            Status::for_error(&TriviaError::StoreUnavailable("disk".into())),
            Status::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_error_envelope() {
        let response = ApiResponse::from(ApiError::from(TriviaError::missing("answer")));

        assert_eq!(response.status.code(), 400);
        assert_eq!(response.body["success"], false);
        assert_eq!(response.body["error"], 400);
        assert_eq!(response.body["message"], "Bad Request");
        assert_eq!(response.body["kind"], "missing_required_field");
    }

    #[test]
    fn test_response_serializes_status_as_number() {
        let response = ApiResponse::ok(json!({"success": true}));
        let line = serde_json::to_string(&response).unwrap();
        assert_eq!(line, r#"{"status":200,"body":{"success":true}}"#);
    }
}
