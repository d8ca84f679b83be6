use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::{
    dto::{format_clock, profile::ProfileView},
    state::{
        content::{Challenge, EventRound, UpcomingRound},
        countdown::CountdownState,
        ranking::RankedEntry,
    },
};

#[derive(Debug, Clone, Serialize, ToSchema)]
/// A countdown as the client displays it.
pub struct ClockView {
    pub remaining_seconds: u64,
    /// `m:ss` rendering of `remaining_seconds`.
    pub display: String,
    pub running: bool,
}

impl From<CountdownState> for ClockView {
    fn from(state: CountdownState) -> Self {
        Self {
            remaining_seconds: state.remaining_seconds(),
            display: format_clock(state.remaining_seconds()),
            running: state.is_running(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
/// Payload of the dashboard screen.
pub struct DashboardResponse {
    /// Identifies the dashboard visit; SSE ticks carry the same id.
    pub dashboard_id: Uuid,
    pub greeting: String,
    pub profile: ProfileView,
    /// Time until the next round starts.
    pub round_clock: ClockView,
    pub next_round: EventRound,
    /// Podium of the weekly board, empty when fewer than three participants.
    pub top_ramblers: Vec<RankedEntry>,
    pub upcoming_rounds: Vec<UpcomingRound>,
    pub challenge: Challenge,
    pub challenge_visible: bool,
}

#[derive(Debug, Serialize, ToSchema)]
/// State of the challenge popup after dismissing it.
pub struct ChallengeDismissedResponse {
    pub challenge_visible: bool,
}
