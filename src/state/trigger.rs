//! One-shot delayed action, used to surface the networking challenge.

use std::{
    sync::{Arc, Mutex, MutexGuard, PoisonError},
    time::Duration,
};

use thiserror::Error;
use tracing::debug;

use crate::state::task::TaskGuard;

/// Whether a trigger is still waiting and whether it already fired.
///
/// `fired` implies `!armed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DeferredTriggerState {
    /// The action is still waiting on its delay.
    pub armed: bool,
    /// The action ran.
    pub fired: bool,
}

/// Cancelling a trigger that is no longer armed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TriggerError {
    /// The action already ran.
    #[error("trigger already fired")]
    AlreadyFired,
    /// The trigger was cancelled before.
    #[error("trigger is not armed")]
    NotArmed,
}

/// Runs an action exactly once after a delay unless cancelled first.
///
/// The fire path and [`DeferredTrigger::cancel`] take the same lock, so a
/// cancel that gets there first always prevents the action. Dropping an armed
/// trigger cancels it.
#[derive(Debug)]
pub struct DeferredTrigger {
    state: Arc<Mutex<DeferredTriggerState>>,
    task: TaskGuard,
}

impl DeferredTrigger {
    /// Arm a trigger that runs `action` once `delay` has elapsed.
    pub fn arm<F>(delay: Duration, action: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        let state = Arc::new(Mutex::new(DeferredTriggerState {
            armed: true,
            fired: false,
        }));

        let shared = state.clone();
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;

            {
                let mut guard = lock(&shared);
                if !guard.armed {
                    return;
                }
                guard.armed = false;
                guard.fired = true;
            }

            debug!(delay_ms = delay.as_millis() as u64, "deferred trigger fired");
            action();
        });

        Self {
            state,
            task: TaskGuard::new(handle),
        }
    }

    /// Prevent the action from running.
    pub fn cancel(&mut self) -> Result<(), TriggerError> {
        let mut guard = lock(&self.state);
        if guard.fired {
            return Err(TriggerError::AlreadyFired);
        }
        if !guard.armed {
            return Err(TriggerError::NotArmed);
        }

        guard.armed = false;
        drop(guard);
        self.task.release();
        debug!("deferred trigger cancelled");
        Ok(())
    }

    /// Snapshot of the armed and fired flags.
    pub fn state(&self) -> DeferredTriggerState {
        *lock(&self.state)
    }
}

impl Drop for DeferredTrigger {
    fn drop(&mut self) {
        let _ = self.cancel();
    }
}

fn lock(state: &Mutex<DeferredTriggerState>) -> MutexGuard<'_, DeferredTriggerState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    fn counting_trigger(delay: Duration) -> (DeferredTrigger, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let trigger = DeferredTrigger::arm(delay, move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        (trigger, calls)
    }

    #[tokio::test(start_paused = true)]
    async fn fires_once_after_the_delay() {
        let (trigger, calls) = counting_trigger(Duration::from_secs(3));

        tokio::time::sleep(Duration::from_millis(2_900)).await;
        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert!(trigger.state().armed);

        tokio::time::sleep(Duration::from_secs(10)).await;
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(
            trigger.state(),
            DeferredTriggerState {
                armed: false,
                fired: true
            }
        );
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_before_the_delay_prevents_the_action() {
        let (mut trigger, calls) = counting_trigger(Duration::from_secs(3));

        tokio::time::sleep(Duration::from_secs(1)).await;
        trigger.cancel().expect("armed trigger cancels");
        tokio::time::sleep(Duration::from_secs(10)).await;

        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert_eq!(trigger.state(), DeferredTriggerState::default());
        assert_eq!(trigger.cancel(), Err(TriggerError::NotArmed));
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_after_firing_is_reported_and_harmless() {
        let (mut trigger, calls) = counting_trigger(Duration::from_secs(1));

        tokio::time::sleep(Duration::from_secs(2)).await;
        assert_eq!(trigger.cancel(), Err(TriggerError::AlreadyFired));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn dropping_an_armed_trigger_cancels_it() {
        let (trigger, calls) = counting_trigger(Duration::from_secs(3));
        drop(trigger);

        tokio::time::sleep(Duration::from_secs(5)).await;
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }
}
