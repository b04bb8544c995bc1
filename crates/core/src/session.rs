use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::{Question, Verdict};

//
// ─── ERRORS ───────────────────────────────────────────────────────────────────
//

/// Rejections raised by session operations. State is unchanged whenever one is returned.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error("no answer selected")]
    NoSelection,

    #[error("no current question")]
    NoCurrentQuestion,
}

//
// ─── PHASE ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    NotStarted,
    InProgress,
    Ended,
}

/// Transition produced by a successful [`QuizSession::advance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvanceOutcome {
    /// Moved on to the question at `index`.
    Continue { correct: bool, index: usize },
    /// The final question was answered.
    Ended { correct: bool },
}

impl AdvanceOutcome {
    #[must_use]
    pub fn was_correct(self) -> bool {
        match self {
            Self::Continue { correct, .. } | Self::Ended { correct } => correct,
        }
    }

    #[must_use]
    pub fn is_ended(self) -> bool {
        matches!(self, Self::Ended { .. })
    }
}

//
// ─── SESSION ──────────────────────────────────────────────────────────────────
//

/// Session state for one run through a fixed question list.
///
/// All mutation goes through [`start`](Self::start), [`select_answer`](Self::select_answer),
/// [`advance`](Self::advance) and [`reset`](Self::reset).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizSession {
    questions: Vec<Question>,
    current_index: usize,
    selected_answer: Option<String>,
    score: u32,
    started: bool,
    ended: bool,
}

impl QuizSession {
    #[must_use]
    pub fn new(questions: Vec<Question>) -> Self {
        Self {
            questions,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    #[must_use]
    pub fn selected_answer(&self) -> Option<&str> {
        self.selected_answer.as_deref()
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn is_started(&self) -> bool {
        self.started
    }

    #[must_use]
    pub fn is_ended(&self) -> bool {
        self.ended
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        if !self.started {
            Phase::NotStarted
        } else if self.ended {
            Phase::Ended
        } else {
            Phase::InProgress
        }
    }

    /// The question awaiting an answer.
    ///
    /// `None` before the session starts, after it ends, or when the list is empty.
    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        if self.phase() == Phase::InProgress {
            self.questions.get(self.current_index)
        } else {
            None
        }
    }

    /// Options for the current question, correct answer first. Empty when there is none.
    #[must_use]
    pub fn answer_options(&self) -> Vec<&str> {
        self.current_question()
            .map(Question::answer_options)
            .unwrap_or_default()
    }

    #[must_use]
    pub fn verdict(&self) -> Verdict {
        Verdict::from_score(self.score, self.questions.len())
    }

    pub fn start(&mut self) {
        self.started = true;
    }

    /// Record the pick for the current question, replacing any earlier one.
    ///
    /// The value is not checked against the rendered options. An empty string
    /// clears the selection.
    pub fn select_answer(&mut self, value: impl Into<String>) {
        let value = value.into();
        self.selected_answer = (!value.is_empty()).then_some(value);
    }

    /// Score the current selection and move to the next question.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NoSelection` if nothing is selected.
    /// Returns `SessionError::NoCurrentQuestion` if the session is not in progress
    /// or holds no question at the current index.
    pub fn advance(&mut self) -> Result<AdvanceOutcome, SessionError> {
        let Some(selected) = self.selected_answer.as_deref() else {
            return Err(SessionError::NoSelection);
        };
        let Some(question) = self.current_question() else {
            return Err(SessionError::NoCurrentQuestion);
        };

        let correct = question.is_correct(selected);
        if correct {
            self.score = self.score.saturating_add(1);
        }
        self.selected_answer = None;

        if self.current_index + 1 < self.questions.len() {
            self.current_index += 1;
            Ok(AdvanceOutcome::Continue {
                correct,
                index: self.current_index,
            })
        } else {
            self.ended = true;
            Ok(AdvanceOutcome::Ended { correct })
        }
    }

    /// Back to `NotStarted`, keeping the question list.
    pub fn reset(&mut self) {
        self.current_index = 0;
        self.selected_answer = None;
        self.score = 0;
        self.started = false;
        self.ended = false;
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
