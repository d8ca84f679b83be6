use serde::Serialize;
use tracing::{debug, warn};
use utoipa::ToSchema;

use crate::{
    dto::sse::{NavigateEvent, ServerEvent},
    state::SseHub,
};

/// Screens of the client app.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Screen {
    /// Unauthenticated entry point.
    Login,
    Dashboard,
    Quiz,
    Groups,
    Leaderboard,
    Profile,
}

impl Screen {
    /// Route under which the client shows this screen.
    pub fn path(self) -> &'static str {
        match self {
            Screen::Login => "/",
            Screen::Dashboard => "/dashboard",
            Screen::Quiz => "/quiz",
            Screen::Groups => "/groups",
            Screen::Leaderboard => "/leaderboard",
            Screen::Profile => "/profile",
        }
    }
}

/// Fire-and-forget "go to screen X" capability.
pub trait Navigator: Send + Sync {
    /// Ask the client to show `screen`. Never blocks on delivery.
    fn go_to(&self, screen: Screen);
}

/// Navigator that asks connected clients to switch screens over SSE.
pub struct SseNavigator {
    hub: SseHub,
}

impl SseNavigator {
    pub fn new(hub: SseHub) -> Self {
        Self { hub }
    }
}

impl Navigator for SseNavigator {
    fn go_to(&self, screen: Screen) {
        debug!(?screen, "navigating");
        match ServerEvent::json(Some("navigate".to_string()), &NavigateEvent::new(screen)) {
            Ok(event) => self.hub.broadcast(event),
            Err(err) => warn!(error = %err, "failed to serialize navigate event"),
        }
    }
}
