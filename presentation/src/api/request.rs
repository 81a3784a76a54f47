//! Request lines, routing and body decoding

use super::response::ApiError;
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use trivia_application::{PlayQuizInput, SubmitQuestionInput};
use trivia_domain::{CategoryId, QuestionDraft, QuestionId, QuizCategory};

/// One request read by `serve-stdin`:
/// `{"method": "POST", "path": "/quizzes", "body": {...}}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiRequest {
    pub method: String,
    pub path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<Value>,
}

impl ApiRequest {
    pub fn new(method: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            path: path.into(),
            body: None,
        }
    }

    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }
}

/// A resolved operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Categories,
    Questions { page: i64 },
    SubmitQuestion,
    DeleteQuestion(QuestionId),
    CategoryQuestions(CategoryId),
    Quiz,
}

impl Route {
    /// Match a method and path (with optional query string) to an operation.
    ///
    /// Path ids must be non-negative integers; anything else does not match
    /// a route at all.
    pub fn resolve(method: &str, target: &str) -> Result<Route, ApiError> {
        let (path, query) = target.split_once('?').unwrap_or((target, ""));
        let segments: Vec<&str> = path.trim_matches('/').split('/').collect();
        let method = method.to_ascii_uppercase();

        let allowed: &[&str] = match segments.as_slice() {
            ["categories"] => &["GET"],
            ["questions"] => &["GET", "POST"],
            ["questions", id] if id.parse::<u64>().is_ok() => &["DELETE"],
            ["categories", id, "questions"] if id.parse::<u64>().is_ok() => &["GET"],
            ["quizzes"] => &["POST"],
            _ => return Err(ApiError::NoRoute(path.to_string())),
        };
        if !allowed.contains(&method.as_str()) {
            return Err(ApiError::MethodNotAllowed {
                method,
                path: path.to_string(),
            });
        }

        let route = match (method.as_str(), segments.as_slice()) {
            ("GET", ["categories"]) => Route::Categories,
            ("GET", ["questions"]) => Route::Questions {
                page: page_param(query),
            },
            ("POST", ["questions"]) => Route::SubmitQuestion,
            (_, ["questions", id]) => Route::DeleteQuestion(QuestionId::new(parse_id(id)?)),
            (_, ["categories", id, "questions"]) => {
                Route::CategoryQuestions(CategoryId::new(parse_id(id)?))
            }
            _ => Route::Quiz,
        };
        Ok(route)
    }
}

fn parse_id(segment: &str) -> Result<u64, ApiError> {
    segment
        .parse()
        .map_err(|_| ApiError::NoRoute(segment.to_string()))
}

/// `page` from a query string; absent or non-integer values mean page 1.
pub fn page_param(query: &str) -> i64 {
    query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == "page")
        .and_then(|(_, value)| value.parse().ok())
        .unwrap_or(1)
}

/// Body of `POST /questions`: a new question or a search
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct SubmitBody {
    #[serde(rename = "searchTerm")]
    search_term: Option<String>,
    question: Option<String>,
    answer: Option<String>,
    category: Option<CategoryId>,
    #[serde(deserialize_with = "lenient_u32")]
    difficulty: Option<u32>,
}

/// Body of `POST /quizzes`
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct QuizBody {
    previous_questions: Option<Vec<QuestionId>>,
    #[serde(deserialize_with = "lenient_selector")]
    quiz_category: Option<QuizCategory>,
}

/// A selector without an `id`, such as `{}`, means every category.
fn lenient_selector<'de, D>(deserializer: D) -> Result<Option<QuizCategory>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    struct Raw {
        id: Option<CategoryId>,
        #[serde(rename = "type")]
        label: Option<String>,
    }

    Ok(Option::<Raw>::deserialize(deserializer)?
        .and_then(|raw| raw.id.map(|id| QuizCategory { id, label: raw.label })))
}

/// Form fields arrive as numbers or numeric strings.
fn lenient_u32<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(u32),
        Text(String),
    }

    match Option::<Raw>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Raw::Number(n)) => Ok(Some(n)),
        Some(Raw::Text(s)) if s.trim().is_empty() => Ok(None),
        Some(Raw::Text(s)) => s.trim().parse().map(Some).map_err(de::Error::custom),
    }
}

fn object_body<T>(body: Option<&Value>) -> Result<T, ApiError>
where
    T: for<'de> Deserialize<'de>,
{
    match body {
        Some(value @ Value::Object(_)) => {
            T::deserialize(value).map_err(|e| ApiError::Malformed(e.to_string()))
        }
        Some(_) => Err(ApiError::Malformed("body must be a JSON object".into())),
        None => Err(ApiError::Malformed("request body is required".into())),
    }
}

/// Decode a `POST /questions` body
pub fn submit_input(body: Option<&Value>) -> Result<SubmitQuestionInput, ApiError> {
    let body: SubmitBody = object_body(body)?;
    Ok(SubmitQuestionInput {
        draft: QuestionDraft {
            question: body.question,
            answer: body.answer,
            category: body.category,
            difficulty: body.difficulty,
        },
        search_term: body.search_term,
    })
}

/// Decode a `POST /quizzes` body
///
/// `previous_questions: null` is treated like a missing field.
pub fn quiz_input(body: Option<&Value>) -> Result<PlayQuizInput, ApiError> {
    let body: QuizBody = object_body(body)?;
    Ok(PlayQuizInput {
        previous_questions: body
            .previous_questions
            .map(|ids| ids.into_iter().collect()),
        quiz_category: body.quiz_category,
    })
}
