use tracing::{debug, info};

use crate::{
    dao::models::ProfileRecord,
    dto::{
        profile::ProfileView,
        session::{LoginRequest, LoginResponse},
    },
    error::ServiceError,
    state::{SharedState, navigation::Screen, profile::UserProfile},
};

/// Load the stored profile, or fail with [`ServiceError::ProfileAbsent`] so
/// the caller redirects to login before rendering anything personal.
pub async fn require_profile(state: &SharedState) -> Result<UserProfile, ServiceError> {
    match state.profiles().load().await? {
        Some(record) => Ok(record.into()),
        None => {
            debug!("no profile stored; redirecting to login");
            state.enter_screen(Screen::Login).await;
            Err(ServiceError::ProfileAbsent)
        }
    }
}

/// Sign up with an email address.
pub async fn login_with_email(
    state: &SharedState,
    request: LoginRequest,
) -> Result<LoginResponse, ServiceError> {
    let display_name = request
        .display_name
        .map(|name| name.trim().to_string())
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| UserProfile::DEFAULT_NAME.to_string());
    sign_in(state, UserProfile::signed_in(display_name, request.email)).await
}

/// Sign in with the demo LinkedIn identity.
pub async fn login_with_linkedin(state: &SharedState) -> Result<LoginResponse, ServiceError> {
    sign_in(
        state,
        UserProfile::signed_in(UserProfile::DEFAULT_NAME, UserProfile::LINKEDIN_EMAIL),
    )
    .await
}

async fn sign_in(state: &SharedState, profile: UserProfile) -> Result<LoginResponse, ServiceError> {
    state
        .profiles()
        .save(ProfileRecord::from(profile.clone()))
        .await?;
    info!(email = %profile.email, "participant signed in");

    Ok(LoginResponse {
        profile: ProfileView::from(&profile),
        navigate_to: Screen::Dashboard,
    })
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::{
        config::AppConfig, dao::profile_store::memory::MemoryProfileStore, state::AppState,
    };

    fn state() -> SharedState {
        AppState::new(AppConfig::in_memory(), Arc::new(MemoryProfileStore::new()))
    }

    #[tokio::test]
    async fn empty_store_means_profile_absent() {
        let state = state();
        let err = require_profile(&state).await.unwrap_err();
        assert!(matches!(err, ServiceError::ProfileAbsent));
        assert_eq!(state.screen().await, Screen::Login);
    }

    #[tokio::test]
    async fn email_login_saves_the_starting_profile() {
        let state = state();
        let response = login_with_email(
            &state,
            LoginRequest {
                email: "sam@example.com".into(),
                display_name: Some("  Sam ".into()),
            },
        )
        .await
        .unwrap();
        assert_eq!(response.navigate_to, Screen::Dashboard);

        let profile = require_profile(&state).await.unwrap();
        assert_eq!(profile.display_name, "Sam");
        assert_eq!(profile.email, "sam@example.com");
        assert_eq!(profile.points, 2690);
        assert_eq!(profile.rank, 4);
    }

    #[tokio::test]
    async fn linkedin_login_uses_the_demo_identity() {
        let state = state();
        login_with_linkedin(&state).await.unwrap();

        let profile = require_profile(&state).await.unwrap();
        assert_eq!(profile.display_name, "Alex");
        assert_eq!(profile.email, "alex@example.com");
    }
}
