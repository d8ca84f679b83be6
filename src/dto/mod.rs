use std::time::SystemTime;
use time::{OffsetDateTime, format_description::well_known::Rfc3339};

pub mod dashboard;
pub mod groups;
pub mod health;
pub mod leaderboard;
pub mod profile;
pub mod quiz;
pub mod session;
pub mod sse;

fn format_system_time(time: SystemTime) -> String {
    OffsetDateTime::from(time)
        .format(&Rfc3339)
        .unwrap_or_else(|_| "invalid-timestamp".into())
}

/// Render seconds as `m:ss`, the way the round clock is displayed.
pub fn format_clock(seconds: u64) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}
