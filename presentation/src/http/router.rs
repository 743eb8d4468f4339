//! HTTP routes over the question repository.
//!
//! Handlers translate requests into [`QuestionRepository`] calls and map
//! the results back to JSON. New question and answer ids are generated
//! here, never by the repository.

use super::dto::{NewAnswerRequest, NewQuestionRequest};
use super::error::ApiError;
use super::extract::Payload;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use responder_application::{DocumentStore, QuestionRepository};
use responder_domain::{Answer, Question};
use serde_json::{Value, json};
use std::future::Future;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{debug, info};

type Repo<S> = State<Arc<QuestionRepository<S>>>;

/// Build the application router
pub fn router<S: DocumentStore + 'static>(repository: Arc<QuestionRepository<S>>) -> Router {
    Router::new()
        .route("/", get(welcome))
        .route(
            "/questions",
            get(list_questions::<S>).post(create_question::<S>),
        )
        .route("/questions/:question_id", get(get_question::<S>))
        .route(
            "/questions/:question_id/answers",
            get(list_answers::<S>).post(create_answer::<S>),
        )
        .route(
            "/questions/:question_id/answers/:answer_id",
            get(get_answer::<S>),
        )
        .with_state(repository)
}

/// Serve the API on `listener` until `shutdown` resolves
pub async fn serve<S, F>(
    listener: TcpListener,
    repository: Arc<QuestionRepository<S>>,
    shutdown: F,
) -> std::io::Result<()>
where
    S: DocumentStore + 'static,
    F: Future<Output = ()> + Send + 'static,
{
    if let Ok(addr) = listener.local_addr() {
        info!("Responder listening on http://{}", addr);
    }
    axum::serve(listener, router(repository))
        .with_graceful_shutdown(shutdown)
        .await
}

async fn welcome() -> Json<Value> {
    Json(json!({ "message": "Welcome to responder!" }))
}

async fn list_questions<S: DocumentStore>(
    State(repo): Repo<S>,
) -> Result<Json<Vec<Question>>, ApiError> {
    Ok(Json(repo.get_questions().await?))
}

async fn get_question<S: DocumentStore>(
    State(repo): Repo<S>,
    Path(question_id): Path<String>,
) -> Result<Json<Question>, ApiError> {
    let question = repo.get_question_by_id(&question_id.into()).await?;
    Ok(Json(question))
}

async fn create_question<S: DocumentStore>(
    State(repo): Repo<S>,
    Payload(request): Payload<NewQuestionRequest>,
) -> Result<(StatusCode, Json<Question>), ApiError> {
    let question = repo.add_question(request.into_question()).await?;
    debug!("Created question {}", question.id());
    Ok((StatusCode::CREATED, Json(question)))
}

async fn list_answers<S: DocumentStore>(
    State(repo): Repo<S>,
    Path(question_id): Path<String>,
) -> Result<Json<Vec<Answer>>, ApiError> {
    Ok(Json(repo.get_answers(&question_id.into()).await?))
}

async fn create_answer<S: DocumentStore>(
    State(repo): Repo<S>,
    Path(question_id): Path<String>,
    Payload(request): Payload<NewAnswerRequest>,
) -> Result<(StatusCode, Json<Answer>), ApiError> {
    let answer = repo
        .add_answer(&question_id.into(), request.into_answer())
        .await?;
    debug!("Created answer {}", answer.id);
    Ok((StatusCode::CREATED, Json(answer)))
}

async fn get_answer<S: DocumentStore>(
    State(repo): Repo<S>,
    Path((question_id, answer_id)): Path<(String, String)>,
) -> Result<Json<Answer>, ApiError> {
    let answer = repo
        .get_answer(&question_id.into(), &answer_id.into())
        .await?;
    Ok(Json(answer))
}
