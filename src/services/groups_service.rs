use tracing::info;

use crate::{
    dto::groups::GroupsResponse,
    error::ServiceError,
    state::{SharedState, navigation::Screen},
};

/// Enter the groups screen.
pub async fn list(state: &SharedState) -> GroupsResponse {
    let _entry = state.enter_screen(Screen::Groups).await;
    GroupsResponse::from(&*state.groups().read().await)
}

/// Open the chat of the group called `name`.
pub async fn open(state: &SharedState, name: &str) -> Result<GroupsResponse, ServiceError> {
    let _entry = state.enter_screen(Screen::Groups).await;
    let mut board = state.groups().write().await;
    let group = board.open(name)?;
    info!(group = %group.name, live = group.active, "group chat opened");
    Ok(GroupsResponse::from(&*board))
}

/// Go back to the group list.
pub async fn close(state: &SharedState) -> GroupsResponse {
    let mut board = state.groups().write().await;
    board.close();
    GroupsResponse::from(&*board)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::{
        config::AppConfig, dao::profile_store::memory::MemoryProfileStore, state::AppState,
    };

    #[tokio::test]
    async fn opens_known_groups_only() {
        let state = AppState::new(AppConfig::in_memory(), Arc::new(MemoryProfileStore::new()));

        let listed = list(&state).await;
        assert_eq!(listed.groups.len(), 2);
        assert!(listed.open.is_none());

        let opened = open(&state, "dongmination").await.unwrap();
        assert_eq!(opened.open.unwrap().name, "DONGMINATION");

        let err = open(&state, "Chess Club").await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));

        assert!(close(&state).await.open.is_none());
    }
}
