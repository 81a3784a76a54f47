//! Caller-facing API
//!
//! [`TriviaApi`] is built once at start-up from the injected store and
//! random source and exposes the six caller operations. Each operation
//! returns a typed [`Reply`] or [`ApiError`]; [`TriviaApi::dispatch`] maps a
//! routed request to the JSON envelope and [`serve`] runs that over
//! newline-delimited JSON.

mod reply;
mod request;
mod response;

pub use reply::Reply;
pub use request::{ApiRequest, Route, page_param, quiz_input, submit_input};
pub use response::{ApiError, ApiResponse, Status};

use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, warn};
use trivia_application::{
    BehaviorConfig, DeleteQuestionUseCase, ListCategoriesUseCase, ListQuestionsInput,
    ListQuestionsUseCase, PlayQuizInput, PlayQuizUseCase, QuestionStore,
    QuestionsByCategoryUseCase, RandomSource, SubmitOutcome, SubmitQuestionInput,
    SubmitQuestionUseCase,
};
use trivia_domain::{CategoryId, QuestionId};

/// The six caller operations over one store
pub struct TriviaApi {
    list_categories: ListCategoriesUseCase,
    list_questions: ListQuestionsUseCase,
    by_category: QuestionsByCategoryUseCase,
    submit: SubmitQuestionUseCase,
    delete: DeleteQuestionUseCase,
    play_quiz: PlayQuizUseCase,
}

impl TriviaApi {
    pub fn new(
        store: Arc<dyn QuestionStore>,
        random: Arc<dyn RandomSource>,
        config: BehaviorConfig,
    ) -> Self {
        Self {
            list_categories: ListCategoriesUseCase::new(Arc::clone(&store)),
            list_questions: ListQuestionsUseCase::new(Arc::clone(&store)),
            by_category: QuestionsByCategoryUseCase::new(Arc::clone(&store)),
            submit: SubmitQuestionUseCase::new(Arc::clone(&store)).with_config(config),
            delete: DeleteQuestionUseCase::new(Arc::clone(&store)),
            play_quiz: PlayQuizUseCase::new(store, random),
        }
    }

    pub async fn categories(&self) -> Result<Reply, ApiError> {
        Ok(Reply::Categories(self.list_categories.execute().await?))
    }

    pub async fn questions(&self, page: i64) -> Result<Reply, ApiError> {
        let page = self
            .list_questions
            .execute(ListQuestionsInput::new(page))
            .await?;
        Ok(Reply::Page(page))
    }

    pub async fn category_questions(&self, id: CategoryId) -> Result<Reply, ApiError> {
        Ok(Reply::ByCategory(self.by_category.execute(id).await?))
    }

    /// Create a question, or search when the input carries a search term
    pub async fn submit_question(&self, input: SubmitQuestionInput) -> Result<Reply, ApiError> {
        Ok(match self.submit.execute(input).await? {
            SubmitOutcome::Created(question) => Reply::Created(question),
            SubmitOutcome::Searched(results) => Reply::Searched(results),
        })
    }

    pub async fn delete_question(&self, id: QuestionId) -> Result<Reply, ApiError> {
        Ok(Reply::Deleted(self.delete.execute(id).await?))
    }

    pub async fn next_quiz_question(&self, input: PlayQuizInput) -> Result<Reply, ApiError> {
        Ok(Reply::Quiz(self.play_quiz.execute(input).await?))
    }

    /// Route a request and run it, returning the JSON envelope.
    pub async fn dispatch(&self, request: &ApiRequest) -> ApiResponse {
        let result = match Route::resolve(&request.method, &request.path) {
            Ok(route) => self.run(route, request).await,
            Err(e) => Err(e),
        };
        respond(result)
    }

    async fn run(&self, route: Route, request: &ApiRequest) -> Result<Reply, ApiError> {
        debug!(?route, "Dispatching request");
        match route {
            Route::Categories => self.categories().await,
            Route::Questions { page } => self.questions(page).await,
            Route::SubmitQuestion => {
                self.submit_question(submit_input(request.body.as_ref())?)
                    .await
            }
            Route::DeleteQuestion(id) => self.delete_question(id).await,
            Route::CategoryQuestions(id) => self.category_questions(id).await,
            Route::Quiz => {
                self.next_quiz_question(quiz_input(request.body.as_ref())?)
                    .await
            }
        }
    }
}

/// Turn an operation result into its envelope
pub fn respond(result: Result<Reply, ApiError>) -> ApiResponse {
    match result {
        Ok(reply) => ApiResponse::ok(reply.to_body()),
        Err(e) => {
            if e.status() == Status::INTERNAL_SERVER_ERROR {
                warn!("Request failed: {}", e);
            } else {
                debug!("Request rejected: {}", e);
            }
            ApiResponse::from(e)
        }
    }
}

/// Serve newline-delimited JSON requests until `reader` is exhausted.
///
/// Blank lines are skipped. A line that is not a valid request gets a
/// 400 response; the loop never stops on bad input.
pub async fn serve<R, W>(api: &TriviaApi, reader: R, mut writer: W) -> std::io::Result<usize>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = reader.lines();
    let mut served = 0;

    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let response = match serde_json::from_str::<ApiRequest>(line) {
            Ok(request) => api.dispatch(&request).await,
            Err(e) => ApiResponse::from(ApiError::Malformed(e.to_string())),
        };

        let mut encoded = serde_json::to_vec(&response)?;
        encoded.push(b'\n');
        writer.write_all(&encoded).await?;
        writer.flush().await?;
        served += 1;
    }

    Ok(served)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{FirstPick, TinyStore};
    use serde_json::{Value, json};

    fn api() -> TriviaApi {
        TriviaApi::new(
            Arc::new(TinyStore::new()),
            Arc::new(FirstPick),
            BehaviorConfig::default(),
        )
    }

    async fn call(api: &TriviaApi, method: &str, path: &str, body: Option<Value>) -> ApiResponse {
        let mut request = ApiRequest::new(method, path);
        request.body = body;
        api.dispatch(&request).await
    }

    #[tokio::test]
    async fn test_listing_envelope() {
        let response = call(&api(), "GET", "/questions", None).await;

        assert_eq!(response.status, Status::OK);
        assert_eq!(response.body["success"], true);
        assert_eq!(response.body["total_questions"], 3);
        assert_eq!(response.body["current_category"], 1);
        assert_eq!(response.body["categories"]["2"], "Art");
        assert_eq!(response.body["questions"][0]["id"], 1);
    }

    #[tokio::test]
    async fn test_page_errors() {
        let api = api();
        assert_eq!(
            call(&api, "GET", "/questions?page=0", None).await.status,
            Status::BAD_REQUEST
        );
        assert_eq!(
            call(&api, "GET", "/questions?page=2", None).await.status,
            Status::NOT_FOUND
        );
    }

    #[tokio::test]
    async fn test_category_listing() {
        let api = api();

        let art = call(&api, "GET", "/categories/2/questions", None).await;
        assert_eq!(art.body["total_questions"], 1);
        assert_eq!(art.body["current_category"], 2);

        let unknown = call(&api, "GET", "/categories/9/questions", None).await;
        assert_eq!(unknown.status, Status::BAD_REQUEST);
        assert_eq!(unknown.body["kind"], "unknown_category");
    }

    #[tokio::test]
    async fn test_submit_creates_or_searches() {
        let api = api();

        let created = call(
            &api,
            "POST",
            "/questions",
            Some(json!({"question": "Q?", "answer": "A", "category": 2, "difficulty": 1})),
        )
        .await;
        assert_eq!(created.body, json!({"success": true, "created": 4}));

        let searched = call(
            &api,
            "POST",
            "/questions",
            Some(json!({"searchTerm": "MONA"})),
        )
        .await;
        assert_eq!(searched.body["total_questions"], 1);
        assert_eq!(searched.body["current_category"], 1);

        let missing = call(&api, "POST", "/questions", Some(json!({"question": "Q?"}))).await;
        assert_eq!(missing.status, Status::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_delete_twice() {
        let api = api();

        let first = call(&api, "DELETE", "/questions/3", None).await;
        assert_eq!(first.body, json!({"success": true, "deleted": 3}));

        let second = call(&api, "DELETE", "/questions/3", None).await;
        assert_eq!(second.status, Status::BAD_REQUEST);
        assert_eq!(second.body["kind"], "question_not_found");
    }

    #[tokio::test]
    async fn test_quiz_exhaustion_and_missing_field() {
        let api = api();

        let next = call(
            &api,
            "POST",
            "/quizzes",
            Some(json!({"previous_questions": [1], "quiz_category": {"id": "1"}})),
        )
        .await;
        assert_eq!(next.body["question"]["id"], 2);

        let done = call(
            &api,
            "POST",
            "/quizzes",
            Some(json!({"previous_questions": [1, 2], "quiz_category": {"id": 1}})),
        )
        .await;
        assert_eq!(done.body, json!({"success": true, "question": null}));

        let missing = call(&api, "POST", "/quizzes", Some(json!({}))).await;
        assert_eq!(missing.status, Status::BAD_REQUEST);
        assert_eq!(missing.body["kind"], "missing_required_field");
    }

    #[tokio::test]
    async fn test_serve_lines() {
        let api = api();
        let input = concat!(
            "{\"method\":\"GET\",\"path\":\"/categories\"}\n",
            "\n",
            "not json\n",
            "{\"method\":\"PUT\",\"path\":\"/categories\"}\n",
        );
        let mut output = Vec::new();

        let served = serve(&api, input.as_bytes(), &mut output).await.unwrap();
        assert_eq!(served, 3);

        let responses: Vec<Value> = String::from_utf8(output)
            .unwrap()
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(responses[0]["status"], 200);
        assert_eq!(responses[0]["body"]["categories"]["1"], "Science");
        assert_eq!(responses[1]["status"], 400);
        assert_eq!(responses[2]["status"], 405);
    }
}
