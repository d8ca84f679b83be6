use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::state::{navigation::Screen, quiz::Question, session::QuizRun};

#[derive(Debug, Clone, Serialize, ToSchema)]
/// Snapshot of a quiz run.
pub struct QuizView {
    pub quiz_id: Uuid,
    /// One-based number of the question on screen; equals `question_count`
    /// once completed.
    pub question_number: usize,
    pub question_count: usize,
    /// Question awaiting an answer, absent once completed.
    pub question: Option<Question>,
    pub remaining_seconds: u64,
    pub answers: Vec<String>,
    pub completed: bool,
}

impl From<&QuizRun> for QuizView {
    fn from(run: &QuizRun) -> Self {
        let session = run.session();
        Self {
            quiz_id: run.id(),
            question_number: (session.answers().len() + 1).min(session.question_count()),
            question_count: session.question_count(),
            question: session.current_question().cloned(),
            remaining_seconds: session.remaining_seconds(),
            answers: session.answers().to_vec(),
            completed: session.is_completed(),
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
/// Answer picked for the current question.
pub struct AnswerRequest {
    /// Zero-based index into the current question's options.
    pub option: usize,
}

#[derive(Debug, Serialize, ToSchema)]
/// Outcome of an answer.
pub struct AnswerResponse {
    /// False when no quiz was waiting for an answer.
    pub accepted: bool,
    /// Quiz after the answer, absent when there is no quiz.
    pub quiz: Option<QuizView>,
    /// Set once the quiz completed and the client should move on.
    pub navigate_to: Option<Screen>,
}
