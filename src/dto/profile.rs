use serde::Serialize;
use utoipa::ToSchema;

use crate::state::{content::Achievement, profile::UserProfile};

#[derive(Debug, Clone, Serialize, ToSchema)]
/// Public view of the signed-in participant.
pub struct ProfileView {
    pub display_name: String,
    pub email: String,
    /// Avatar letter.
    pub initial: String,
    pub points: u64,
    pub rank: u32,
}

impl From<&UserProfile> for ProfileView {
    fn from(profile: &UserProfile) -> Self {
        Self {
            display_name: profile.display_name.clone(),
            email: profile.email.clone(),
            initial: profile.initial(),
            points: profile.points,
            rank: profile.rank,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
/// Payload of the profile screen.
pub struct ProfileResponse {
    pub profile: ProfileView,
    pub achievements: Vec<Achievement>,
    pub interests: Vec<String>,
}
