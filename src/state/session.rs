//! Per-screen resources. Each session owns its timers, so dropping it is the
//! release path when the participant leaves the screen.

use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

use tracing::debug;
use uuid::Uuid;

use crate::{
    config::AppConfig,
    state::{
        countdown::{Countdown, CountdownState},
        quiz::QuizSession,
        task::TaskGuard,
        trigger::{DeferredTrigger, TriggerError},
    },
};

/// Timers running while the dashboard is on screen.
#[derive(Debug)]
pub struct DashboardSession {
    id: Uuid,
    round: Countdown,
    challenge: DeferredTrigger,
    challenge_visible: Arc<AtomicBool>,
}

impl DashboardSession {
    /// Start the next-round countdown and arm the challenge popup.
    ///
    /// `on_round_tick` observes every countdown state; `on_challenge_shown`
    /// runs once the challenge becomes visible.
    pub fn start<T, C>(
        id: Uuid,
        config: &AppConfig,
        on_round_tick: T,
        on_challenge_shown: C,
    ) -> Self
    where
        T: FnMut(&CountdownState) + Send + 'static,
        C: FnOnce() + Send + 'static,
    {
        let round = Countdown::spawn(
            config.round_countdown.as_secs(),
            config.tick_interval,
            on_round_tick,
        );

        let challenge_visible = Arc::new(AtomicBool::new(false));
        let visible = challenge_visible.clone();
        let challenge = DeferredTrigger::arm(config.challenge_delay, move || {
            visible.store(true, Ordering::SeqCst);
            on_challenge_shown();
        });

        Self {
            id,
            round,
            challenge,
            challenge_visible,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Time left before the next round.
    pub fn round_clock(&self) -> CountdownState {
        self.round.snapshot()
    }

    pub fn challenge_visible(&self) -> bool {
        self.challenge_visible.load(Ordering::SeqCst)
    }

    /// Hide the challenge, or keep it from ever showing if it is still pending.
    pub fn dismiss_challenge(&mut self) {
        match self.challenge.cancel() {
            Ok(()) => debug!(dashboard_id = %self.id, "pending challenge cancelled"),
            Err(TriggerError::AlreadyFired | TriggerError::NotArmed) => {}
        }
        self.challenge_visible.store(false, Ordering::SeqCst);
    }
}

/// A quiz in progress together with the ticker driving its deadlines.
#[derive(Debug)]
pub struct QuizRun {
    id: Uuid,
    session: QuizSession,
    ticker: TaskGuard,
}

impl QuizRun {
    pub fn new(id: Uuid, session: QuizSession, ticker: TaskGuard) -> Self {
        Self {
            id,
            session,
            ticker,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn session(&self) -> &QuizSession {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut QuizSession {
        &mut self.session
    }

    /// Swap in a fresh ticker, aborting the previous one.
    pub fn restart_ticker(&mut self, ticker: TaskGuard) {
        self.ticker = ticker;
    }

    /// Whether the question deadlines are still being driven.
    pub fn is_ticking(&self) -> bool {
        !self.ticker.is_finished()
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    fn config() -> AppConfig {
        AppConfig {
            round_countdown: Duration::from_secs(420),
            challenge_delay: Duration::from_secs(3),
            tick_interval: Duration::from_secs(1),
            ..AppConfig::in_memory()
        }
    }

    #[tokio::test(start_paused = true)]
    async fn challenge_shows_after_the_delay() {
        let session = DashboardSession::start(Uuid::new_v4(), &config(), |_| {}, || {});
        assert!(!session.challenge_visible());

        tokio::time::sleep(Duration::from_millis(3100)).await;
        assert!(session.challenge_visible());
        assert_eq!(session.round_clock().remaining_seconds(), 417);
    }

    #[tokio::test(start_paused = true)]
    async fn early_dismiss_keeps_the_challenge_hidden() {
        let mut session = DashboardSession::start(Uuid::new_v4(), &config(), |_| {}, || {});
        tokio::time::sleep(Duration::from_secs(1)).await;
        session.dismiss_challenge();

        tokio::time::sleep(Duration::from_secs(5)).await;
        assert!(!session.challenge_visible());
    }

    #[tokio::test(start_paused = true)]
    async fn dismiss_hides_a_shown_challenge() {
        let mut session = DashboardSession::start(Uuid::new_v4(), &config(), |_| {}, || {});
        tokio::time::sleep(Duration::from_secs(4)).await;
        assert!(session.challenge_visible());

        session.dismiss_challenge();
        assert!(!session.challenge_visible());
    }

    #[tokio::test(start_paused = true)]
    async fn dropping_the_session_stops_its_timers() {
        let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();
        let session = DashboardSession::start(
            Uuid::new_v4(),
            &config(),
            move |state: &CountdownState| {
                let _ = tx.send(state.remaining_seconds());
            },
            || {},
        );

        tokio::time::sleep(Duration::from_millis(2500)).await;
        drop(session);
        tokio::time::sleep(Duration::from_secs(10)).await;

        let mut seen = Vec::new();
        while let Ok(value) = rx.try_recv() {
            seen.push(value);
        }
        assert_eq!(seen, vec![419, 418]);
    }

    #[tokio::test(start_paused = true)]
    async fn restarted_quiz_ticker_replaces_a_finished_one() {
        let quiz = QuizSession::new(crate::state::content::icebreaker_questions(), 10).unwrap();
        let mut run = QuizRun::new(Uuid::new_v4(), quiz, TaskGuard::finished());
        assert!(!run.is_ticking());

        run.restart_ticker(TaskGuard::new(tokio::spawn(tokio::time::sleep(
            Duration::from_secs(60),
        ))));
        assert!(run.is_ticking());
    }
}
