use axum::{Json, Router, extract::State, routing::get};

use crate::{
    dto::profile::ProfileResponse, error::AppError, services::profile_service, state::SharedState,
};

pub fn router() -> Router<SharedState> {
    Router::new().route("/profile", get(get_profile))
}

#[utoipa::path(
    get,
    path = "/profile",
    tag = "profile",
    responses(
        (status = 200, description = "Profile of the signed-in participant", body = ProfileResponse),
        (status = 303, description = "No profile stored, redirect to login")
    )
)]
/// Return the signed-in participant's profile.
pub async fn get_profile(
    State(state): State<SharedState>,
) -> Result<Json<ProfileResponse>, AppError> {
    Ok(Json(profile_service::profile(&state).await?))
}
