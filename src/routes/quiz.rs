use axum::{
    Json, Router,
    extract::State,
    routing::{get, post},
};

use crate::{
    dto::quiz::{AnswerRequest, AnswerResponse, QuizView},
    error::AppError,
    services::quiz_service,
    state::SharedState,
};

/// Timed icebreaker quiz.
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/quiz", post(start_quiz).get(get_quiz))
        .route("/quiz/answer", post(answer))
}

#[utoipa::path(
    post,
    path = "/quiz",
    tag = "quiz",
    responses(
        (status = 200, description = "Quiz started on its first question", body = QuizView),
        (status = 303, description = "No profile stored, redirect to login")
    )
)]
/// Start a new quiz run.
pub async fn start_quiz(State(state): State<SharedState>) -> Result<Json<QuizView>, AppError> {
    Ok(Json(quiz_service::start(&state).await?))
}

#[utoipa::path(
    get,
    path = "/quiz",
    tag = "quiz",
    responses(
        (status = 200, description = "Quiz in progress", body = QuizView),
        (status = 404, description = "No quiz in progress")
    )
)]
/// Return the quiz in progress.
pub async fn get_quiz(State(state): State<SharedState>) -> Result<Json<QuizView>, AppError> {
    Ok(Json(quiz_service::current(&state).await?))
}

#[utoipa::path(
    post,
    path = "/quiz/answer",
    tag = "quiz",
    request_body = AnswerRequest,
    responses(
        (status = 200, description = "Answer processed", body = AnswerResponse),
        (status = 400, description = "Option does not exist")
    )
)]
/// Answer the current question.
pub async fn answer(
    State(state): State<SharedState>,
    Json(payload): Json<AnswerRequest>,
) -> Result<Json<AnswerResponse>, AppError> {
    Ok(Json(quiz_service::answer(&state, payload.option).await?))
}
