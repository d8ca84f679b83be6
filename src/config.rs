//! Application-level configuration loading: round timings, ranking policy and
//! where the profile record lives.

use std::{env, fs, io::ErrorKind, path::PathBuf, time::Duration};

use serde::Deserialize;
use serde_with::{DurationMilliSeconds, DurationSeconds, serde_as};
use tracing::{info, warn};

use crate::state::ranking::RankingPolicy;

/// Default location on disk where the server looks for the JSON configuration.
const DEFAULT_CONFIG_PATH: &str = "config/app.json";
/// Environment variable that overrides [`DEFAULT_CONFIG_PATH`].
const CONFIG_PATH_ENV: &str = "RAMBLE_BACK_CONFIG_PATH";
/// Default location of the profile record when none is configured.
const DEFAULT_PROFILE_STORE_PATH: &str = "data/profile.json";

const DEFAULT_ROUND_COUNTDOWN: Duration = Duration::from_secs(7 * 60);
const DEFAULT_CHALLENGE_DELAY: Duration = Duration::from_secs(3);
const DEFAULT_QUESTION_DURATION: Duration = Duration::from_secs(10);
const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(1000);

#[derive(Debug, Clone, PartialEq, Eq)]
/// Immutable runtime configuration shared across the application.
pub struct AppConfig {
    /// Time until the next round, shown on the dashboard.
    pub round_countdown: Duration,
    /// Delay before the networking challenge pops up on the dashboard.
    pub challenge_delay: Duration,
    /// Time given for each quiz question.
    pub question_duration: Duration,
    /// Wall-clock length of one countdown second.
    pub tick_interval: Duration,
    /// How equal points share a rank.
    pub ranking_policy: RankingPolicy,
    /// JSON file holding the profile record; `None` keeps it in memory.
    pub profile_store_path: Option<PathBuf>,
}

impl AppConfig {
    /// Load the application configuration from disk, falling back to built-in defaults.
    pub fn load() -> Self {
        let path = resolve_config_path();
        match fs::read_to_string(&path) {
            Ok(contents) => match Self::from_json(&contents) {
                Ok(app_config) => {
                    info!(
                        path = %path.display(),
                        round_secs = app_config.round_countdown.as_secs(),
                        ranking = ?app_config.ranking_policy,
                        "loaded configuration"
                    );
                    app_config
                }
                Err(err) => {
                    warn!(
                        path = %path.display(),
                        error = %err,
                        "failed to parse config; falling back to defaults"
                    );
                    Self::default()
                }
            },
            Err(err) if err.kind() == ErrorKind::NotFound => {
                info!(
                    path = %path.display(),
                    "config file not found; using built-in defaults"
                );
                Self::default()
            }
            Err(err) => {
                warn!(
                    path = %path.display(),
                    error = %err,
                    "failed to read config; falling back to defaults"
                );
                Self::default()
            }
        }
    }

    /// Parse a configuration document. Absent keys take their default.
    pub fn from_json(contents: &str) -> serde_json::Result<Self> {
        serde_json::from_str::<RawConfig>(contents).map(Into::into)
    }

    /// Configuration for tests and embedding: defaults with an in-memory profile.
    pub fn in_memory() -> Self {
        Self {
            profile_store_path: None,
            ..Self::default()
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            round_countdown: DEFAULT_ROUND_COUNTDOWN,
            challenge_delay: DEFAULT_CHALLENGE_DELAY,
            question_duration: DEFAULT_QUESTION_DURATION,
            tick_interval: DEFAULT_TICK_INTERVAL,
            ranking_policy: RankingPolicy::default(),
            profile_store_path: Some(PathBuf::from(DEFAULT_PROFILE_STORE_PATH)),
        }
    }
}

#[serde_as]
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
/// JSON representation of the configuration file located at [`DEFAULT_CONFIG_PATH`].
struct RawConfig {
    #[serde_as(as = "Option<DurationSeconds<u64>>")]
    round_countdown_secs: Option<Duration>,
    #[serde_as(as = "Option<DurationSeconds<u64>>")]
    challenge_delay_secs: Option<Duration>,
    #[serde_as(as = "Option<DurationSeconds<u64>>")]
    question_duration_secs: Option<Duration>,
    #[serde_as(as = "Option<DurationMilliSeconds<u64>>")]
    tick_interval_ms: Option<Duration>,
    ranking_policy: Option<RankingPolicy>,
    /// Missing keeps the default file, `null` selects the in-memory store.
    #[serde(with = "::serde_with::rust::double_option")]
    profile_store_path: Option<Option<PathBuf>>,
}

impl From<RawConfig> for AppConfig {
    fn from(value: RawConfig) -> Self {
        let defaults = Self::default();
        Self {
            // A zero round countdown is valid: the round is starting now.
            round_countdown: value.round_countdown_secs.unwrap_or(defaults.round_countdown),
            challenge_delay: non_zero(
                "challenge_delay_secs",
                value.challenge_delay_secs,
                defaults.challenge_delay,
            ),
            question_duration: non_zero(
                "question_duration_secs",
                value.question_duration_secs,
                defaults.question_duration,
            ),
            tick_interval: non_zero(
                "tick_interval_ms",
                value.tick_interval_ms,
                defaults.tick_interval,
            ),
            ranking_policy: value.ranking_policy.unwrap_or(defaults.ranking_policy),
            profile_store_path: value
                .profile_store_path
                .unwrap_or(defaults.profile_store_path),
        }
    }
}

fn non_zero(key: &str, value: Option<Duration>, default: Duration) -> Duration {
    match value {
        Some(duration) if duration.is_zero() => {
            warn!(key, "zero duration is not allowed; using default");
            default
        }
        Some(duration) => duration,
        None => default,
    }
}

/// Resolve the configuration path taking the environment override into account.
fn resolve_config_path() -> PathBuf {
    env::var_os(CONFIG_PATH_ENV)
        .map(PathBuf::from)
        .filter(|path| !path.as_os_str().is_empty())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH))
}
