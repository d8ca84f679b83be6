use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{get, post},
};

use crate::{
    dto::groups::GroupsResponse, error::AppError, services::groups_service, state::SharedState,
};

/// Event groups and their chats.
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/groups", get(list_groups))
        .route("/groups/{name}/open", post(open_group))
        .route("/groups/close", post(close_group))
}

#[utoipa::path(
    get,
    path = "/groups",
    tag = "groups",
    responses((status = 200, description = "Event groups", body = GroupsResponse))
)]
/// List the event groups.
pub async fn list_groups(State(state): State<SharedState>) -> Json<GroupsResponse> {
    Json(groups_service::list(&state).await)
}

#[utoipa::path(
    post,
    path = "/groups/{name}/open",
    tag = "groups",
    params(("name" = String, Path, description = "Group name, case-insensitive")),
    responses(
        (status = 200, description = "Group chat opened", body = GroupsResponse),
        (status = 404, description = "Unknown group")
    )
)]
/// Open a group chat.
pub async fn open_group(
    State(state): State<SharedState>,
    Path(name): Path<String>,
) -> Result<Json<GroupsResponse>, AppError> {
    Ok(Json(groups_service::open(&state, &name).await?))
}

#[utoipa::path(
    post,
    path = "/groups/close",
    tag = "groups",
    responses((status = 200, description = "Back on the group list", body = GroupsResponse))
)]
/// Close the open group chat.
pub async fn close_group(State(state): State<SharedState>) -> Json<GroupsResponse> {
    Json(groups_service::close(&state).await)
}
