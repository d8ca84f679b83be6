use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::{dto::profile::ProfileView, state::navigation::Screen};

/// Unauthenticated entry screen.
#[derive(Debug, Serialize, ToSchema)]
pub struct LoginScreenResponse {
    pub screen: Screen,
    pub title: String,
    pub tagline: String,
    /// Ways to sign in, in display order.
    pub providers: Vec<String>,
}

impl LoginScreenResponse {
    pub fn new() -> Self {
        Self {
            screen: Screen::Login,
            title: "RAMBLE".into(),
            tagline: "Connect, play and climb the leaderboard".into(),
            providers: vec!["linkedin".into(), "email".into()],
        }
    }
}

impl Default for LoginScreenResponse {
    fn default() -> Self {
        Self::new()
    }
}

/// Email sign-up form.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct LoginRequest {
    #[validate(email)]
    pub email: String,
    /// Display name; defaults to the event's demo name when omitted.
    #[serde(default)]
    #[validate(length(min = 1, max = 40))]
    pub display_name: Option<String>,
}

/// Result of a successful sign-in.
#[derive(Debug, Serialize, ToSchema)]
pub struct LoginResponse {
    pub profile: ProfileView,
    /// Screen the client should open next.
    pub navigate_to: Screen,
}
