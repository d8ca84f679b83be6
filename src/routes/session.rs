use axum::{
    Json, Router,
    extract::State,
    routing::{get, post},
};
use validator::Validate;

use crate::{
    dto::session::{LoginRequest, LoginResponse, LoginScreenResponse},
    error::AppError,
    services::session_service,
    state::{SharedState, navigation::Screen},
};

/// Unauthenticated entry point and sign-in.
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/", get(login_screen))
        .route("/login", post(login))
        .route("/login/linkedin", post(login_linkedin))
}

#[utoipa::path(
    get,
    path = "/",
    tag = "session",
    responses((status = 200, description = "Login screen", body = LoginScreenResponse))
)]
/// Describe the login screen.
pub async fn login_screen(State(state): State<SharedState>) -> Json<LoginScreenResponse> {
    state.enter_screen(Screen::Login).await;
    Json(LoginScreenResponse::new())
}

#[utoipa::path(
    post,
    path = "/login",
    tag = "session",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Signed in", body = LoginResponse),
        (status = 400, description = "Invalid email or display name"),
        (status = 503, description = "Profile store unavailable")
    )
)]
/// Sign up with an email address.
pub async fn login(
    State(state): State<SharedState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    payload.validate()?;
    Ok(Json(
        session_service::login_with_email(&state, payload).await?,
    ))
}

#[utoipa::path(
    post,
    path = "/login/linkedin",
    tag = "session",
    responses(
        (status = 200, description = "Signed in", body = LoginResponse),
        (status = 503, description = "Profile store unavailable")
    )
)]
/// Sign in with LinkedIn.
pub async fn login_linkedin(
    State(state): State<SharedState>,
) -> Result<Json<LoginResponse>, AppError> {
    Ok(Json(session_service::login_with_linkedin(&state).await?))
}
