use axum::Router;

use crate::state::SharedState;

pub mod dashboard;
pub mod docs;
pub mod groups;
pub mod health;
pub mod leaderboard;
pub mod profile;
pub mod quiz;
pub mod session;
pub mod sse;

/// Compose all route trees, wiring in shared state and documentation routes.
pub fn router(state: SharedState) -> Router<()> {
    let api_router = health::router()
        .merge(sse::router())
        .merge(session::router())
        .merge(dashboard::router())
        .merge(quiz::router())
        .merge(leaderboard::router())
        .merge(profile::router())
        .merge(groups::router());

    api_router.merge(docs::router()).with_state(state)
}
