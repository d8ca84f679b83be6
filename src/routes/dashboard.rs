use axum::{
    Json, Router,
    extract::State,
    routing::{get, post},
};

use crate::{
    dto::dashboard::{ChallengeDismissedResponse, DashboardResponse},
    error::AppError,
    services::dashboard_service,
    state::SharedState,
};

/// Home screen with the round clock and the challenge popup.
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/dashboard", get(get_dashboard))
        .route("/dashboard/challenge/dismiss", post(dismiss_challenge))
}

#[utoipa::path(
    get,
    path = "/dashboard",
    tag = "dashboard",
    responses(
        (status = 200, description = "Dashboard", body = DashboardResponse),
        (status = 303, description = "No profile stored, redirect to login")
    )
)]
/// Enter the dashboard.
pub async fn get_dashboard(
    State(state): State<SharedState>,
) -> Result<Json<DashboardResponse>, AppError> {
    Ok(Json(dashboard_service::enter(&state).await?))
}

#[utoipa::path(
    post,
    path = "/dashboard/challenge/dismiss",
    tag = "dashboard",
    responses(
        (status = 200, description = "Challenge hidden", body = ChallengeDismissedResponse),
        (status = 409, description = "Dashboard is not on screen")
    )
)]
/// Hide the challenge popup.
pub async fn dismiss_challenge(
    State(state): State<SharedState>,
) -> Result<Json<ChallengeDismissedResponse>, AppError> {
    Ok(Json(dashboard_service::dismiss_challenge(&state).await?))
}
