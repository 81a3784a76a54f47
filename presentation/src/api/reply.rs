//! Successful results of the caller operations and their wire shapes

use serde_json::{Map, Value, json};
use trivia_application::{CategoryQuestions, QuestionPage, QuizDraw, SearchResults};
use trivia_domain::{Category, Question, QuestionId};

/// Result of one successful operation
#[derive(Debug, Clone)]
pub enum Reply {
    Categories(Vec<Category>),
    Page(QuestionPage),
    ByCategory(CategoryQuestions),
    Searched(SearchResults),
    Created(Question),
    Deleted(QuestionId),
    Quiz(QuizDraw),
}

impl Reply {
    /// JSON body with `"success": true`
    pub fn to_body(&self) -> Value {
        match self {
            Reply::Categories(categories) => json!({
                "success": true,
                "categories": category_map(categories),
            }),
            Reply::Page(page) => json!({
                "success": true,
                "questions": page.page.items,
                "total_questions": page.page.total,
                "categories": category_map(&page.categories),
                "current_category": page.current_category,
            }),
            Reply::ByCategory(listing) => json!({
                "success": true,
                "questions": listing.questions,
                "total_questions": listing.total(),
                "current_category": listing.current_category(),
            }),
            Reply::Searched(results) => json!({
                "success": true,
                "questions": results.questions,
                "total_questions": results.total(),
                "current_category": results.current_category,
            }),
            Reply::Created(question) => json!({
                "success": true,
                "created": question.id,
            }),
            Reply::Deleted(id) => json!({
                "success": true,
                "deleted": id,
            }),
            Reply::Quiz(draw) => json!({
                "success": true,
                "question": draw.question,
            }),
        }
    }
}

/// `{"1": "Science", "2": "Art", ...}` in the order given, which is id order
fn category_map(categories: &[Category]) -> Value {
    let map: Map<String, Value> = categories
        .iter()
        .map(|c| (c.id.to_string(), Value::String(c.label.clone())))
        .collect();
    Value::Object(map)
}
