use crate::{
    dto::profile::{ProfileResponse, ProfileView},
    error::ServiceError,
    services::session_service,
    state::{SharedState, content, navigation::Screen},
};

/// Enter the profile screen.
pub async fn profile(state: &SharedState) -> Result<ProfileResponse, ServiceError> {
    let profile = session_service::require_profile(state).await?;
    state.enter_screen(Screen::Profile).await;

    Ok(ProfileResponse {
        profile: ProfileView::from(&profile),
        achievements: content::achievements(),
        interests: content::interests(),
    })
}
