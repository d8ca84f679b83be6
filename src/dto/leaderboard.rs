use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::state::ranking::{RankedEntry, RankingPolicy};

/// Time window of the leaderboard. Every window shows the same board for now.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum LeaderboardPeriod {
    Day,
    #[default]
    Week,
    Month,
    All,
}

/// Query string accepted by `GET /leaderboard`.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct LeaderboardQuery {
    /// Defaults to `week`.
    pub period: Option<LeaderboardPeriod>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
/// One row of the leaderboard.
pub struct LeaderboardEntry {
    pub identity: String,
    pub points: u64,
    pub rank: u32,
    /// Row of the signed-in participant.
    pub is_current_user: bool,
}

impl LeaderboardEntry {
    pub fn new(entry: RankedEntry, is_current_user: bool) -> Self {
        Self {
            identity: entry.identity,
            points: entry.points,
            rank: entry.rank,
            is_current_user,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
/// The three leading rows, shown on the podium.
pub struct PodiumView {
    pub first: LeaderboardEntry,
    pub second: LeaderboardEntry,
    pub third: LeaderboardEntry,
}

#[derive(Debug, Serialize, ToSchema)]
/// Where the signed-in participant stands on this board.
pub struct StandingView {
    pub rank: u32,
    pub points: u64,
}

#[derive(Debug, Serialize, ToSchema)]
/// Payload of the leaderboard screen.
pub struct LeaderboardResponse {
    pub period: LeaderboardPeriod,
    pub policy: RankingPolicy,
    /// Absent when fewer than three participants are ranked.
    pub podium: Option<PodiumView>,
    pub rankings: Vec<LeaderboardEntry>,
    pub you: Option<StandingView>,
}
