use std::{ops::ControlFlow, sync::Arc};

use tracing::{debug, info};
use uuid::Uuid;

use crate::{
    dto::quiz::{AnswerResponse, QuizView},
    error::ServiceError,
    services::{session_service, sse_events},
    state::{
        SharedState, content,
        navigation::Screen,
        quiz::{QuizPhase, QuizSession},
        session::QuizRun,
        task::{TaskGuard, spawn_ticker},
    },
};

/// Enter the quiz screen with a fresh run on the first question.
pub async fn start(state: &SharedState) -> Result<QuizView, ServiceError> {
    session_service::require_profile(state).await?;
    let entry = state.enter_screen(Screen::Quiz).await;

    let session = QuizSession::new(
        content::icebreaker_questions(),
        state.config().question_duration.as_secs(),
    )?;
    let id = Uuid::new_v4();
    let run = QuizRun::new(id, session, spawn_question_ticker(state, id));
    let view = QuizView::from(&run);

    if let Some(previous) = state.quiz().lock().await.replace(run) {
        debug!(quiz_id = %previous.id(), "previous quiz run replaced");
    }
    drop(entry);
    info!(
        quiz_id = %id,
        questions = view.question_count,
        question_secs = state.config().question_duration.as_secs(),
        "quiz started"
    );
    Ok(view)
}

/// Snapshot of the quiz in progress.
pub async fn current(state: &SharedState) -> Result<QuizView, ServiceError> {
    let guard = state.quiz().lock().await;
    guard
        .as_ref()
        .map(QuizView::from)
        .ok_or_else(|| ServiceError::NotFound("no quiz in progress".into()))
}

/// Answer the current question with the option at `option`.
///
/// Answers arriving when no quiz is waiting are ignored and reported as not
/// accepted.
pub async fn answer(state: &SharedState, option: usize) -> Result<AnswerResponse, ServiceError> {
    let mut guard = state.quiz().lock().await;
    let Some(run) = guard.as_mut() else {
        debug!(option, "answer ignored: no quiz in progress");
        return Ok(AnswerResponse {
            accepted: false,
            quiz: None,
            navigate_to: None,
        });
    };

    let quiz_id = run.id();
    let choice = match run.session().current_question() {
        Some(question) => question
            .options
            .get(option)
            .map(|picked| picked.label.clone())
            .ok_or_else(|| {
                ServiceError::InvalidInput(format!(
                    "option {option} does not exist, the question has {} options",
                    question.options.len()
                ))
            })?,
        // Completed runs are discarded right away; the transition rejects this.
        None => String::new(),
    };

    match run.session_mut().answer(choice) {
        Ok(QuizPhase::InProgress { index }) => {
            run.restart_ticker(spawn_question_ticker(state, quiz_id));
            let view = QuizView::from(&*run);
            info!(quiz_id = %quiz_id, next = index, "question answered");
            sse_events::broadcast_quiz_advanced(state.events(), view.clone());
            Ok(AnswerResponse {
                accepted: true,
                quiz: Some(view),
                navigate_to: None,
            })
        }
        Ok(QuizPhase::Completed) => {
            let view = QuizView::from(&*run);
            let finished = guard.take();
            drop(guard);
            complete(state, view.clone(), finished);
            Ok(AnswerResponse {
                accepted: true,
                quiz: Some(view),
                navigate_to: Some(Screen::Dashboard),
            })
        }
        Err(err) => {
            debug!(quiz_id = %quiz_id, error = %err, "answer ignored");
            Ok(AnswerResponse {
                accepted: false,
                quiz: Some(QuizView::from(&*run)),
                navigate_to: None,
            })
        }
    }
}

/// Tick the current question once per configured second. The ticker holds
/// only a weak reference so it never keeps the application state alive.
fn spawn_question_ticker(state: &SharedState, quiz_id: Uuid) -> TaskGuard {
    let weak = Arc::downgrade(state);
    spawn_ticker(state.config().tick_interval, move || {
        let weak = weak.clone();
        async move {
            match weak.upgrade() {
                Some(state) => on_tick(&state, quiz_id).await,
                None => ControlFlow::Break(()),
            }
        }
    })
}

async fn on_tick(state: &SharedState, quiz_id: Uuid) -> ControlFlow<()> {
    let mut guard = state.quiz().lock().await;
    let Some(run) = guard.as_mut().filter(|run| run.id() == quiz_id) else {
        return ControlFlow::Break(());
    };

    match run.session_mut().tick() {
        None => {
            let remaining = run.session().remaining_seconds();
            sse_events::broadcast_quiz_tick(state.events(), quiz_id, remaining);
            ControlFlow::Continue(())
        }
        Some(QuizPhase::InProgress { index }) => {
            info!(quiz_id = %quiz_id, next = index, "question timed out");
            sse_events::broadcast_quiz_advanced(state.events(), QuizView::from(&*run));
            ControlFlow::Continue(())
        }
        Some(QuizPhase::Completed) => {
            info!(quiz_id = %quiz_id, "last question timed out");
            let view = QuizView::from(&*run);
            let finished = guard.take();
            drop(guard);
            complete(state, view, finished);
            ControlFlow::Break(())
        }
    }
}

/// Leave the quiz once every question has an answer. The run is discarded.
fn complete(state: &SharedState, view: QuizView, run: Option<QuizRun>) {
    info!(quiz_id = %view.quiz_id, answers = ?view.answers, "quiz completed");
    sse_events::broadcast_quiz_advanced(state.events(), view);
    state.navigator().go_to(Screen::Dashboard);
    // Must stay last: the run owns the ticker, which may be the caller.
    drop(run);
}
