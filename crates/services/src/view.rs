use quiz_core::{Phase, QuestionMeta, Verdict};

/// Progress of the question fetch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoadStatus {
    Loading,
    Loaded,
    Failed(String),
}

impl LoadStatus {
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded)
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}

/// The question currently on screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionView {
    pub text: String,
    /// Correct answer first, then distractors in source order.
    pub options: Vec<String>,
    pub meta: QuestionMeta,
}

/// Read-only snapshot of the quiz, rebuilt after every state change.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizView {
    pub status: LoadStatus,
    pub phase: Phase,
    pub current_index: usize,
    pub total: usize,
    pub question: Option<QuestionView>,
    pub selected: Option<String>,
    pub ended: bool,
    pub score: u32,
    /// Present once the session has ended.
    pub verdict: Option<Verdict>,
}

impl QuizView {
    /// Whether the start action makes sense: questions are loaded and there is at least one.
    #[must_use]
    pub fn can_start(&self) -> bool {
        self.status.is_loaded() && self.total > 0 && self.phase == Phase::NotStarted
    }
}
