//! One-second countdown used for the next-round clock and the quiz deadlines.

use std::{ops::ControlFlow, sync::Arc, time::Duration};

use serde::Serialize;
use tokio::sync::watch;
use tracing::debug;
use utoipa::ToSchema;

use crate::state::task::{TaskGuard, spawn_ticker};

/// Remaining time of a countdown and whether it is still being ticked.
///
/// `remaining_seconds` never goes below zero. Once it reaches zero the state
/// stays elapsed until its owner starts a new countdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub struct CountdownState {
    remaining_seconds: u64,
    running: bool,
}

impl CountdownState {
    /// Start counting down from `initial_seconds`.
    ///
    /// A zero start is already elapsed and therefore not running.
    pub fn start(initial_seconds: u64) -> Self {
        Self {
            remaining_seconds: initial_seconds,
            running: initial_seconds > 0,
        }
    }

    /// Consume one second. No-op once elapsed or stopped.
    pub fn tick(self) -> Self {
        if !self.running {
            return self;
        }

        let remaining_seconds = self.remaining_seconds.saturating_sub(1);
        Self {
            remaining_seconds,
            running: remaining_seconds > 0,
        }
    }

    /// Halt the countdown, keeping whatever time was left.
    pub fn stop(self) -> Self {
        Self {
            running: false,
            ..self
        }
    }

    /// Whole seconds left on the clock.
    pub fn remaining_seconds(&self) -> u64 {
        self.remaining_seconds
    }

    /// False once stopped or elapsed.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// True once the countdown has reached zero.
    pub fn is_elapsed(&self) -> bool {
        self.remaining_seconds == 0
    }
}

/// A countdown ticked in the background, owned by the screen that shows it.
///
/// Every new state is published on a watch channel and handed to the `on_tick`
/// observer. Dropping the handle stops the ticking task.
#[derive(Debug)]
pub struct Countdown {
    state: Arc<watch::Sender<CountdownState>>,
    ticker: TaskGuard,
}

impl Countdown {
    /// Start ticking `initial_seconds` down, one step per `period`.
    pub fn spawn<F>(initial_seconds: u64, period: Duration, mut on_tick: F) -> Self
    where
        F: FnMut(&CountdownState) + Send + 'static,
    {
        let (sender, _receiver) = watch::channel(CountdownState::start(initial_seconds));
        let state = Arc::new(sender);

        let ticker = if initial_seconds == 0 {
            TaskGuard::finished()
        } else {
            let state = state.clone();
            spawn_ticker(period, move || {
                let mut next = CountdownState::start(0);
                state.send_modify(|current| {
                    *current = current.tick();
                    next = *current;
                });
                on_tick(&next);

                let flow = if next.is_running() {
                    ControlFlow::Continue(())
                } else {
                    debug!("countdown elapsed");
                    ControlFlow::Break(())
                };
                async move { flow }
            })
        };

        Self { state, ticker }
    }

    /// Current state of the countdown.
    pub fn snapshot(&self) -> CountdownState {
        *self.state.borrow()
    }

    /// Observe every state change of this countdown.
    pub fn subscribe(&self) -> watch::Receiver<CountdownState> {
        self.state.subscribe()
    }

    /// Stop ticking. The remaining time is kept and `running` becomes false.
    pub fn stop(&mut self) {
        self.ticker.release();
        self.state.send_modify(|current| *current = current.stop());
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;

    #[test]
    fn ticks_down_strictly_until_zero() {
        for initial in [0_u64, 1, 2, 10, 59] {
            let mut state = CountdownState::start(initial);
            let mut previous = state.remaining_seconds();
            for _ in 0..initial {
                state = state.tick();
                assert!(state.remaining_seconds() < previous);
                previous = state.remaining_seconds();
            }
            assert_eq!(state.remaining_seconds(), 0);
            assert_eq!(state.tick(), state);
        }
    }

    #[test]
    fn seven_minute_round_clock_stays_at_zero() {
        let mut state = CountdownState::start(7 * 60);
        for _ in 0..420 {
            state = state.tick();
        }
        assert_eq!(state.remaining_seconds(), 0);
        assert!(state.is_elapsed());
        assert!(!state.is_running());

        let after = state.tick();
        assert_eq!(after.remaining_seconds(), 0);
    }

    #[test]
    fn stopped_countdown_does_not_tick() {
        let state = CountdownState::start(5).tick().stop();
        assert_eq!(state.remaining_seconds(), 4);
        assert_eq!(state.tick(), state);
    }

    #[tokio::test(start_paused = true)]
    async fn background_countdown_reaches_zero_and_notifies() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let observed = seen.clone();
        let countdown = Countdown::spawn(3, Duration::from_secs(1), move |state| {
            observed
                .lock()
                .expect("observer lock")
                .push(state.remaining_seconds());
        });

        let mut updates = countdown.subscribe();
        updates
            .wait_for(|state| state.is_elapsed())
            .await
            .expect("countdown sender alive");

        assert_eq!(*seen.lock().expect("observer lock"), vec![2, 1, 0]);
        assert!(!countdown.snapshot().is_running());
    }

    #[tokio::test(start_paused = true)]
    async fn stopping_keeps_the_remaining_time() {
        let mut countdown = Countdown::spawn(10, Duration::from_secs(1), |_| {});
        tokio::time::sleep(Duration::from_millis(3_500)).await;
        countdown.stop();
        tokio::time::sleep(Duration::from_secs(5)).await;

        let state = countdown.snapshot();
        assert_eq!(state.remaining_seconds(), 7);
        assert!(!state.is_running());
    }
}
