//! Owned background tasks used by the screen timers.

use std::{future::Future, ops::ControlFlow, time::Duration};

use tokio::{
    task::JoinHandle,
    time::{Instant, MissedTickBehavior, interval_at},
};

/// Handle to a spawned task that is aborted when the handle goes away.
///
/// Every timer owned by a screen is wrapped in a guard so leaving the screen
/// (or dropping its session for any other reason) stops the task.
#[derive(Debug)]
pub struct TaskGuard {
    handle: Option<JoinHandle<()>>,
}

impl TaskGuard {
    /// Wrap an already spawned task.
    pub fn new(handle: JoinHandle<()>) -> Self {
        Self {
            handle: Some(handle),
        }
    }

    /// A guard with nothing left to stop.
    pub fn finished() -> Self {
        Self { handle: None }
    }

    /// Abort the task now. Calling this more than once is harmless.
    pub fn release(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }

    /// Whether the task has stopped on its own or was released.
    pub fn is_finished(&self) -> bool {
        self.handle
            .as_ref()
            .is_none_or(|handle| handle.is_finished())
    }
}

impl Drop for TaskGuard {
    fn drop(&mut self) {
        self.release();
    }
}

/// Run `on_tick` once per `period` until it returns [`ControlFlow::Break`].
///
/// The first call happens one full period after spawning. Ticks missed while
/// the runtime was busy are skipped, never replayed.
pub fn spawn_ticker<F, Fut>(period: Duration, mut on_tick: F) -> TaskGuard
where
    F: FnMut() -> Fut + Send + 'static,
    Fut: Future<Output = ControlFlow<()>> + Send + 'static,
{
    let handle = tokio::spawn(async move {
        let mut ticks = interval_at(Instant::now() + period, period);
        ticks.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            ticks.tick().await;
            if on_tick().await.is_break() {
                break;
            }
        }
    });

    TaskGuard::new(handle)
}
