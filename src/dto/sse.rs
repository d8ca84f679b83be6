use std::time::SystemTime;

use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::{
    dto::{dashboard::ClockView, format_system_time, quiz::QuizView},
    state::{content::Challenge, navigation::Screen},
};

#[derive(Clone, Debug)]
/// Dispatched payload carried across the SSE channel.
pub struct ServerEvent {
    pub event: Option<String>,
    pub data: String,
}

impl ServerEvent {
    /// Build an event from an already rendered data field.
    pub fn new<E>(event: E, data: String) -> Self
    where
        E: Into<Option<String>>,
    {
        Self {
            event: event.into(),
            data,
        }
    }

    /// Convenience wrapper that serialises `payload` into the SSE data field.
    pub fn json<E, T>(event: E, payload: &T) -> serde_json::Result<Self>
    where
        E: Into<Option<String>>,
        T: Serialize,
    {
        Ok(Self {
            event: event.into(),
            data: serde_json::to_string(payload)?,
        })
    }
}

#[derive(Debug, Serialize, ToSchema)]
/// Asks the client to switch to another screen.
pub struct NavigateEvent {
    pub screen: Screen,
    /// Client route of the screen.
    pub path: String,
    /// RFC 3339 timestamp of the request.
    pub requested_at: String,
}

impl NavigateEvent {
    pub fn new(screen: Screen) -> Self {
        Self {
            screen,
            path: screen.path().to_string(),
            requested_at: format_system_time(SystemTime::now()),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
/// One second of the next-round countdown went by.
pub struct RoundTickEvent {
    pub dashboard_id: Uuid,
    pub clock: ClockView,
}

#[derive(Debug, Serialize, ToSchema)]
/// The networking challenge popped up on the dashboard.
pub struct ChallengeShownEvent {
    pub dashboard_id: Uuid,
    pub challenge: Challenge,
}

#[derive(Debug, Serialize, ToSchema)]
/// One second of the current question went by.
pub struct QuizTickEvent {
    pub quiz_id: Uuid,
    pub remaining_seconds: u64,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(transparent)]
/// Broadcast whenever the quiz moves to another question or completes.
pub struct QuizAdvancedEvent(pub QuizView);
