use crate::dao::models::ProfileRecord;

/// The signed-in participant as stored by the profile gateway.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    pub display_name: String,
    pub email: String,
    /// Accumulated Ram Points.
    pub points: u64,
    /// Weekly rank as last saved, 1 being best.
    pub rank: u32,
}

impl UserProfile {
    /// Name used when signing in without choosing one.
    pub const DEFAULT_NAME: &'static str = "Alex";
    /// Email of the demo LinkedIn identity.
    pub const LINKEDIN_EMAIL: &'static str = "alex@example.com";
    const STARTING_POINTS: u64 = 2690;
    const STARTING_RANK: u32 = 4;

    /// Profile handed out on sign-in, carrying the event's starting standings.
    pub fn signed_in(display_name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            email: email.into(),
            points: Self::STARTING_POINTS,
            rank: Self::STARTING_RANK,
        }
    }

    /// Upper-cased first letter, used as avatar.
    pub fn initial(&self) -> String {
        self.display_name
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_default()
    }
}

impl From<ProfileRecord> for UserProfile {
    fn from(value: ProfileRecord) -> Self {
        Self {
            display_name: value.name,
            email: value.email,
            points: value.points,
            rank: value.rank,
        }
    }
}

impl From<UserProfile> for ProfileRecord {
    fn from(value: UserProfile) -> Self {
        Self {
            name: value.display_name,
            email: value.email,
            points: value.points,
            rank: value.rank,
        }
    }
}
