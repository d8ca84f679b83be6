//! Rank ordering for the leaderboard and the dashboard's top ramblers.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// Raw points of one participant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreEntry {
    pub identity: String,
    pub points: u64,
}

impl ScoreEntry {
    pub fn new(identity: impl Into<String>, points: u64) -> Self {
        Self {
            identity: identity.into(),
            points,
        }
    }
}

/// A participant placed on the board. Rank 1 is best.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct RankedEntry {
    pub identity: String,
    pub points: u64,
    pub rank: u32,
}

/// How equal points share a rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum RankingPolicy {
    /// Ties share a rank and the next rank skips ahead (1, 2, 2, 4).
    #[default]
    Competition,
    /// Ties share a rank and the next rank follows on (1, 2, 2, 3).
    Dense,
}

/// Podium requested from a board with fewer than three entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PodiumError {
    #[error("a podium needs three ranked entries, only {available} available")]
    InsufficientEntries { available: usize },
}

/// The top three entries of a ranked board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Podium<'a> {
    pub first: &'a RankedEntry,
    pub second: &'a RankedEntry,
    pub third: &'a RankedEntry,
}

/// Sort entries by points, highest first, and assign ranks under `policy`.
///
/// The sort is stable: entries with equal points keep their input order, so
/// ranking an already ranked list leaves it unchanged.
pub fn rank<I>(entries: I, policy: RankingPolicy) -> Vec<RankedEntry>
where
    I: IntoIterator<Item = ScoreEntry>,
{
    let mut entries: Vec<ScoreEntry> = entries.into_iter().collect();
    entries.sort_by(|a, b| b.points.cmp(&a.points));

    let mut ranked: Vec<RankedEntry> = Vec::with_capacity(entries.len());
    for (position, entry) in entries.into_iter().enumerate() {
        let rank = match ranked.last() {
            Some(previous) if previous.points == entry.points => previous.rank,
            Some(previous) => match policy {
                RankingPolicy::Competition => position as u32 + 1,
                RankingPolicy::Dense => previous.rank + 1,
            },
            None => 1,
        };
        ranked.push(RankedEntry {
            identity: entry.identity,
            points: entry.points,
            rank,
        });
    }

    ranked
}

/// Split off the first three entries of a ranked board.
pub fn podium(ranked: &[RankedEntry]) -> Result<Podium<'_>, PodiumError> {
    match ranked {
        [first, second, third, ..] => Ok(Podium {
            first,
            second,
            third,
        }),
        _ => Err(PodiumError::InsufficientEntries {
            available: ranked.len(),
        }),
    }
}

impl From<RankedEntry> for ScoreEntry {
    fn from(value: RankedEntry) -> Self {
        Self {
            identity: value.identity,
            points: value.points,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries(raw: &[(&str, u64)]) -> Vec<ScoreEntry> {
        raw.iter()
            .map(|(identity, points)| ScoreEntry::new(*identity, *points))
            .collect()
    }

    fn ranks(ranked: &[RankedEntry]) -> Vec<u32> {
        ranked.iter().map(|entry| entry.rank).collect()
    }

    #[test]
    fn ranks_top_three_in_point_order() {
        let ranked = rank(
            entries(&[("Qelvin", 6900), ("Rick", 4200), ("Sarah", 2880)]),
            RankingPolicy::Competition,
        );
        assert_eq!(ranks(&ranked), vec![1, 2, 3]);

        let top = podium(&ranked).unwrap();
        assert_eq!(top.first.identity, "Qelvin");
        assert_eq!(top.second.identity, "Rick");
        assert_eq!(top.third.identity, "Sarah");
    }

    #[test]
    fn sorts_unordered_input() {
        let ranked = rank(
            entries(&[
                ("Sarah M.", 2880),
                ("Mike R.", 2720),
                ("Qelvin N.", 6900),
                ("Rick C.", 4200),
            ]),
            RankingPolicy::Competition,
        );
        let names: Vec<_> = ranked.iter().map(|e| e.identity.as_str()).collect();
        assert_eq!(names, ["Qelvin N.", "Rick C.", "Sarah M.", "Mike R."]);
    }

    #[test]
    fn competition_ties_skip_the_next_rank() {
        let ranked = rank(
            entries(&[("a", 10), ("b", 8), ("c", 8), ("d", 5)]),
            RankingPolicy::Competition,
        );
        assert_eq!(ranks(&ranked), vec![1, 2, 2, 4]);
    }

    #[test]
    fn dense_ties_keep_ranks_contiguous() {
        let ranked = rank(
            entries(&[("a", 10), ("b", 8), ("c", 8), ("d", 5)]),
            RankingPolicy::Dense,
        );
        assert_eq!(ranks(&ranked), vec![1, 2, 2, 3]);
    }

    #[test]
    fn equal_points_keep_input_order() {
        let ranked = rank(
            entries(&[("Marwin G.", 2690), ("Alex", 2690)]),
            RankingPolicy::Competition,
        );
        assert_eq!(ranked[0].identity, "Marwin G.");
        assert_eq!(ranked[1].identity, "Alex");
        assert_eq!(ranks(&ranked), vec![1, 1]);
    }

    #[test]
    fn reranking_is_idempotent() {
        for policy in [RankingPolicy::Competition, RankingPolicy::Dense] {
            let once = rank(
                entries(&[("x", 3), ("y", 9), ("z", 3), ("w", 0), ("v", 9)]),
                policy,
            );
            let twice = rank(once.iter().cloned().map(ScoreEntry::from), policy);
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn podium_requires_three_entries() {
        for size in 0..3 {
            let ranked = rank(
                (0..size).map(|i| ScoreEntry::new(format!("p{i}"), i as u64)),
                RankingPolicy::Competition,
            );
            assert_eq!(
                podium(&ranked).unwrap_err(),
                PodiumError::InsufficientEntries { available: size }
            );
        }
    }
}
