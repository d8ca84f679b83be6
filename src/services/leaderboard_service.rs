use tracing::debug;

use crate::{
    dto::leaderboard::{
        LeaderboardEntry, LeaderboardPeriod, LeaderboardResponse, PodiumView, StandingView,
    },
    error::ServiceError,
    services::session_service,
    state::{
        SharedState, content,
        navigation::Screen,
        profile::UserProfile,
        ranking::{Podium, RankedEntry, RankingPolicy, ScoreEntry, podium, rank},
    },
};

/// Enter the leaderboard and rank the board for `period`.
pub async fn leaderboard(
    state: &SharedState,
    period: Option<LeaderboardPeriod>,
) -> Result<LeaderboardResponse, ServiceError> {
    let profile = session_service::require_profile(state).await?;
    state.enter_screen(Screen::Leaderboard).await;

    let policy = state.config().ranking_policy;
    let ranked = weekly_board(&profile, policy);
    Ok(board_view(
        period.unwrap_or_default(),
        policy,
        ranked,
        &board_identity(&profile),
    ))
}

/// The event roster plus the signed-in participant, ranked under `policy`.
pub fn weekly_board(profile: &UserProfile, policy: RankingPolicy) -> Vec<RankedEntry> {
    let mut entries = content::weekly_standings();
    entries.push(ScoreEntry::new(board_identity(profile), profile.points));
    rank(entries, policy)
}

/// Name under which the signed-in participant appears on the board.
pub fn board_identity(profile: &UserProfile) -> String {
    format!("{} (You)", profile.display_name)
}

fn board_view(
    period: LeaderboardPeriod,
    policy: RankingPolicy,
    ranked: Vec<RankedEntry>,
    you: &str,
) -> LeaderboardResponse {
    let row = |entry: &RankedEntry| LeaderboardEntry::new(entry.clone(), entry.identity == you);

    let podium = match podium(&ranked) {
        Ok(Podium {
            first,
            second,
            third,
        }) => Some(PodiumView {
            first: row(first),
            second: row(second),
            third: row(third),
        }),
        Err(err) => {
            debug!(error = %err, "leaderboard shown as a plain list");
            None
        }
    };

    let standing = ranked
        .iter()
        .find(|entry| entry.identity == you)
        .map(|entry| StandingView {
            rank: entry.rank,
            points: entry.points,
        });

    LeaderboardResponse {
        period,
        policy,
        podium,
        rankings: ranked.iter().map(row).collect(),
        you: standing,
    }
}
