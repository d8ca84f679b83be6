use axum::{
    Json, Router,
    extract::{Query, State},
    routing::get,
};

use crate::{
    dto::leaderboard::{LeaderboardQuery, LeaderboardResponse},
    error::AppError,
    services::leaderboard_service,
    state::SharedState,
};

pub fn router() -> Router<SharedState> {
    Router::new().route("/leaderboard", get(get_leaderboard))
}

#[utoipa::path(
    get,
    path = "/leaderboard",
    tag = "leaderboard",
    params(LeaderboardQuery),
    responses(
        (status = 200, description = "Ranked board", body = LeaderboardResponse),
        (status = 303, description = "No profile stored, redirect to login")
    )
)]
/// Rank the weekly board.
pub async fn get_leaderboard(
    State(state): State<SharedState>,
    Query(query): Query<LeaderboardQuery>,
) -> Result<Json<LeaderboardResponse>, AppError> {
    Ok(Json(
        leaderboard_service::leaderboard(&state, query.period).await?,
    ))
}
