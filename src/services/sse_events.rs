use serde::Serialize;
use tracing::warn;
use uuid::Uuid;

use crate::{
    dto::{
        dashboard::ClockView,
        quiz::QuizView,
        sse::{
            ChallengeShownEvent, QuizAdvancedEvent, QuizTickEvent, RoundTickEvent, ServerEvent,
        },
    },
    state::{SseHub, content::Challenge, countdown::CountdownState},
};

const EVENT_ROUND_TICK: &str = "round.tick";
const EVENT_CHALLENGE_SHOWN: &str = "challenge.shown";
const EVENT_QUIZ_TICK: &str = "quiz.tick";
const EVENT_QUIZ_ADVANCED: &str = "quiz.advanced";

/// Broadcast the next-round clock after one of its ticks.
pub fn broadcast_round_tick(hub: &SseHub, dashboard_id: Uuid, clock: &CountdownState) {
    let payload = RoundTickEvent {
        dashboard_id,
        clock: ClockView::from(*clock),
    };
    send_event(hub, EVENT_ROUND_TICK, &payload);
}

/// Broadcast that the networking challenge is now on screen.
pub fn broadcast_challenge_shown(hub: &SseHub, dashboard_id: Uuid, challenge: Challenge) {
    let payload = ChallengeShownEvent {
        dashboard_id,
        challenge,
    };
    send_event(hub, EVENT_CHALLENGE_SHOWN, &payload);
}

/// Broadcast the time left on the current question.
pub fn broadcast_quiz_tick(hub: &SseHub, quiz_id: Uuid, remaining_seconds: u64) {
    let payload = QuizTickEvent {
        quiz_id,
        remaining_seconds,
    };
    send_event(hub, EVENT_QUIZ_TICK, &payload);
}

/// Broadcast the quiz after it moved to another question or completed.
pub fn broadcast_quiz_advanced(hub: &SseHub, view: QuizView) {
    send_event(hub, EVENT_QUIZ_ADVANCED, &QuizAdvancedEvent(view));
}

fn send_event(hub: &SseHub, event: &str, payload: &impl Serialize) {
    match ServerEvent::json(Some(event.to_string()), payload) {
        Ok(event) => hub.broadcast(event),
        Err(err) => warn!(event, error = %err, "failed to serialize SSE payload"),
    }
}
