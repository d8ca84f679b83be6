//! Timed multiple-choice quiz: one question at a time, each with its own
//! deadline.

use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

use crate::state::countdown::CountdownState;

/// Choice recorded for a question whose countdown ran out.
pub const NO_ANSWER: &str = "<no answer>";

/// One selectable answer of a question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct QuizOption {
    /// Emoji shown next to the label.
    pub icon: String,
    /// Answer text, recorded verbatim when chosen.
    pub label: String,
}

/// A quiz question and its ordered options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Question {
    /// Text shown above the options.
    pub prompt: String,
    /// Choices in display order; answers refer to them by index.
    pub options: Vec<QuizOption>,
}

/// Where the quiz currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizPhase {
    /// Waiting for an answer to the question at `index`.
    InProgress { index: usize },
    /// Every question has an answer; terminal.
    Completed,
}

/// Inputs accepted by the quiz.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizEvent {
    /// The participant picked a choice for the current question.
    Answer(String),
    /// The current question's countdown ran out.
    Timeout,
}

/// Error returned when an event arrives after the quiz is over.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid transition: {event:?} cannot be applied while in {from:?}")]
pub struct InvalidTransition {
    /// Phase the quiz was in when the event arrived.
    pub from: QuizPhase,
    /// The rejected event.
    pub event: QuizEvent,
}

/// Reasons a quiz cannot be built from its questions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuizError {
    #[error("a quiz needs at least one question")]
    NoQuestions,
    #[error("question {index} has no options")]
    NoOptions { index: usize },
}

/// A single run through a fixed list of timed questions.
///
/// `answers().len()` always equals the index of the current question, and
/// equals the number of questions once completed.
#[derive(Debug, Clone)]
pub struct QuizSession {
    questions: Vec<Question>,
    answers: Vec<String>,
    question_seconds: u64,
    countdown: CountdownState,
}

impl QuizSession {
    /// Open a quiz on its first question with a fresh `question_seconds` countdown.
    pub fn new(questions: Vec<Question>, question_seconds: u64) -> Result<Self, QuizError> {
        if questions.is_empty() {
            return Err(QuizError::NoQuestions);
        }
        if let Some(index) = questions.iter().position(|q| q.options.is_empty()) {
            return Err(QuizError::NoOptions { index });
        }

        Ok(Self {
            answers: Vec::with_capacity(questions.len()),
            questions,
            question_seconds,
            countdown: CountdownState::start(question_seconds),
        })
    }

    pub fn phase(&self) -> QuizPhase {
        if self.answers.len() < self.questions.len() {
            QuizPhase::InProgress {
                index: self.answers.len(),
            }
        } else {
            QuizPhase::Completed
        }
    }

    pub fn is_completed(&self) -> bool {
        self.phase() == QuizPhase::Completed
    }

    /// Question awaiting an answer, if any.
    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.answers.len())
    }

    /// Answers collected so far, in question order.
    pub fn answers(&self) -> &[String] {
        &self.answers
    }

    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    /// Seconds left on the current question.
    pub fn remaining_seconds(&self) -> u64 {
        self.countdown.remaining_seconds()
    }

    /// Record a choice for the current question.
    pub fn answer(&mut self, choice: impl Into<String>) -> Result<QuizPhase, InvalidTransition> {
        self.apply(QuizEvent::Answer(choice.into()))
    }

    /// Apply an event, moving to the next question or to completion.
    ///
    /// A timeout records [`NO_ANSWER`] and then follows the same rule as an
    /// answer. Nothing changes when the quiz is already completed.
    pub fn apply(&mut self, event: QuizEvent) -> Result<QuizPhase, InvalidTransition> {
        let from = self.phase();
        let QuizPhase::InProgress { .. } = from else {
            return Err(InvalidTransition { from, event });
        };

        let choice = match event {
            QuizEvent::Answer(choice) => choice,
            QuizEvent::Timeout => NO_ANSWER.to_string(),
        };
        self.answers.push(choice);

        let next = self.phase();
        self.countdown = match next {
            QuizPhase::InProgress { .. } => CountdownState::start(self.question_seconds),
            QuizPhase::Completed => self.countdown.stop(),
        };

        Ok(next)
    }

    /// Consume one second of the current question.
    ///
    /// Returns the new phase when the countdown ran out and the quiz was
    /// forced forward, `None` otherwise.
    pub fn tick(&mut self) -> Option<QuizPhase> {
        if self.is_completed() {
            return None;
        }

        self.countdown = self.countdown.tick();
        if self.countdown.is_elapsed() {
            self.apply(QuizEvent::Timeout).ok()
        } else {
            None
        }
    }
}
