use std::sync::Arc;

use quiz_core::{AdvanceOutcome, Phase, QuizSession, SessionError};
use tracing::{debug, info, warn};

use crate::error::QuizError;
use crate::notify::{Notice, Notifier};
use crate::provider::QuestionProvider;
use crate::view::{LoadStatus, QuestionView, QuizView};

pub const FETCH_FAILED_MESSAGE: &str =
    "Failed to fetch questions. Please check your internet connection or try again later.";
pub const NO_QUESTIONS_MESSAGE: &str = "No questions are available right now.";
pub const NO_SELECTION_MESSAGE: &str = "Please select an option";
pub const NO_CURRENT_QUESTION_MESSAGE: &str = "There is no question to answer.";
pub const RESET_CONFIRM_MESSAGE: &str = "Restart the quiz? Your current progress will be lost.";
pub const RESET_DONE_MESSAGE: &str = "Quiz restarted";

/// Owns one quiz session and drives it from user actions.
///
/// Questions are requested from the provider once, on [`load`](Self::load).
/// Failures and rejected actions are reported through the notifier; nothing
/// is retried automatically.
pub struct QuizController {
    provider: Arc<dyn QuestionProvider>,
    notifier: Arc<dyn Notifier>,
    confirm_reset: bool,
    status: LoadStatus,
    session: QuizSession,
}

impl QuizController {
    #[must_use]
    pub fn new(provider: Arc<dyn QuestionProvider>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            provider,
            notifier,
            confirm_reset: true,
            status: LoadStatus::Loading,
            session: QuizSession::default(),
        }
    }

    #[must_use]
    pub fn with_confirm_reset(mut self, confirm_reset: bool) -> Self {
        self.confirm_reset = confirm_reset;
        self
    }

    #[must_use]
    pub fn status(&self) -> &LoadStatus {
        &self.status
    }

    #[must_use]
    pub fn session(&self) -> &QuizSession {
        &self.session
    }

    /// Fetch the question list if it has not been fetched yet.
    ///
    /// Once the first fetch has completed, successfully or not, further calls do nothing.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Fetch` when the provider fails. The user has already been
    /// notified and the status is `Failed`.
    pub async fn load(&mut self) -> Result<(), QuizError> {
        if !self.status.is_loading() {
            return Ok(());
        }
        self.fetch().await
    }

    /// Fetch a fresh question list on explicit request and start over with it.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Fetch` when the provider fails.
    pub async fn reload(&mut self) -> Result<(), QuizError> {
        self.status = LoadStatus::Loading;
        self.fetch().await
    }

    async fn fetch(&mut self) -> Result<(), QuizError> {
        match self.provider.fetch_questions().await {
            Ok(questions) => {
                info!(count = questions.len(), "questions loaded");
                if questions.is_empty() {
                    self.notifier.notify(Notice::warning(NO_QUESTIONS_MESSAGE));
                }
                self.session = QuizSession::new(questions);
                self.status = LoadStatus::Loaded;
                Ok(())
            }
            Err(err) => {
                warn!(error = %err, "failed to fetch questions");
                self.notifier.notify(Notice::error(FETCH_FAILED_MESSAGE));
                self.session = QuizSession::default();
                self.status = LoadStatus::Failed(err.to_string());
                Err(QuizError::Fetch(err))
            }
        }
    }

    /// Mark the quiz as started. An empty or missing question list is allowed;
    /// there is simply no current question afterwards.
    pub fn start(&mut self) {
        if !self.session.is_started() {
            debug!(total = self.session.total_questions(), "quiz started");
        }
        self.session.start();
    }

    pub fn select_answer(&mut self, value: impl Into<String>) {
        self.session.select_answer(value);
    }

    /// Select the option at `index` of the current question.
    ///
    /// Returns `false` and leaves the selection untouched if there is no such option.
    pub fn select_option(&mut self, index: usize) -> bool {
        let Some(value) = self
            .session
            .answer_options()
            .get(index)
            .map(|option| (*option).to_string())
        else {
            return false;
        };
        self.session.select_answer(value);
        true
    }

    /// Score the selection and move on.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Session` when nothing is selected or there is no current
    /// question. The user is warned and state is unchanged.
    pub fn advance(&mut self) -> Result<AdvanceOutcome, QuizError> {
        match self.session.advance() {
            Ok(outcome) => {
                if outcome.is_ended() {
                    let verdict = self.session.verdict();
                    info!(
                        score = self.session.score(),
                        total = self.session.total_questions(),
                        verdict = verdict.label(),
                        "quiz finished"
                    );
                } else {
                    debug!(correct = outcome.was_correct(), "advanced");
                }
                Ok(outcome)
            }
            Err(err) => {
                let message = match err {
                    SessionError::NoSelection => NO_SELECTION_MESSAGE,
                    _ => NO_CURRENT_QUESTION_MESSAGE,
                };
                self.notifier.notify(Notice::warning(message));
                Err(err.into())
            }
        }
    }

    /// Return to the start screen with the same questions.
    ///
    /// When confirmation is enabled the user is asked first; declining leaves
    /// everything as it was. Returns whether the session was reset.
    pub async fn reset(&mut self) -> bool {
        if self.confirm_reset && !self.notifier.confirm(RESET_CONFIRM_MESSAGE).await {
            debug!("reset declined");
            return false;
        }
        self.session.reset();
        self.notifier.notify(Notice::info(RESET_DONE_MESSAGE));
        true
    }

    #[must_use]
    pub fn view(&self) -> QuizView {
        let session = &self.session;
        let question = session.current_question().map(|question| QuestionView {
            text: question.text().to_string(),
            options: question
                .answer_options()
                .into_iter()
                .map(str::to_string)
                .collect(),
            meta: question.meta().clone(),
        });
        let phase = session.phase();

        QuizView {
            status: self.status.clone(),
            phase,
            current_index: session.current_index(),
            total: session.total_questions(),
            question,
            selected: session.selected_answer().map(str::to_string),
            ended: session.is_ended(),
            score: session.score(),
            verdict: (phase == Phase::Ended).then(|| session.verdict()),
        }
    }
}
