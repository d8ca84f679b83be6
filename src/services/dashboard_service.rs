use tracing::info;
use uuid::Uuid;

use crate::{
    dto::{
        dashboard::{ChallengeDismissedResponse, ClockView, DashboardResponse},
        profile::ProfileView,
    },
    error::ServiceError,
    services::{leaderboard_service, session_service, sse_events},
    state::{
        SharedState, content,
        navigation::Screen,
        ranking::podium,
        session::DashboardSession,
    },
};

/// Enter the dashboard, starting its timers unless it is already on screen.
pub async fn enter(state: &SharedState) -> Result<DashboardResponse, ServiceError> {
    let profile = session_service::require_profile(state).await?;
    let (dashboard_id, round_clock, challenge_visible) = {
        let _entry = state.enter_screen(Screen::Dashboard).await;
        let mut guard = state.dashboard().lock().await;
        let session = guard.get_or_insert_with(|| start_session(state));
        (
            session.id(),
            session.round_clock(),
            session.challenge_visible(),
        )
    };

    let board = leaderboard_service::weekly_board(&profile, state.config().ranking_policy);
    let top_ramblers = podium(&board)
        .map(|top| vec![top.first.clone(), top.second.clone(), top.third.clone()])
        .unwrap_or_default();

    Ok(DashboardResponse {
        dashboard_id,
        greeting: format!("Hi, {}!", profile.display_name),
        profile: ProfileView::from(&profile),
        round_clock: ClockView::from(round_clock),
        next_round: content::next_round(),
        top_ramblers,
        upcoming_rounds: content::upcoming_rounds(),
        challenge: content::network_challenge(),
        challenge_visible,
    })
}

/// Close the challenge popup. A challenge still pending will not show.
pub async fn dismiss_challenge(
    state: &SharedState,
) -> Result<ChallengeDismissedResponse, ServiceError> {
    let mut guard = state.dashboard().lock().await;
    let session = guard
        .as_mut()
        .ok_or_else(|| ServiceError::InvalidState("dashboard is not on screen".into()))?;
    session.dismiss_challenge();
    info!(dashboard_id = %session.id(), "challenge dismissed");

    Ok(ChallengeDismissedResponse {
        challenge_visible: session.challenge_visible(),
    })
}

fn start_session(state: &SharedState) -> DashboardSession {
    let id = Uuid::new_v4();
    let ticks = state.events().clone();
    let shown = state.events().clone();

    let session = DashboardSession::start(
        id,
        state.config(),
        move |clock| sse_events::broadcast_round_tick(&ticks, id, clock),
        move || sse_events::broadcast_challenge_shown(&shown, id, content::network_challenge()),
    );
    info!(
        dashboard_id = %id,
        round_secs = state.config().round_countdown.as_secs(),
        "dashboard timers started"
    );
    session
}
