use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Warning,
    Error,
}

/// A user-facing message raised by the quiz controller.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    #[must_use]
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Info, message)
    }

    #[must_use]
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Warning, message)
    }

    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Error, message)
    }

    #[must_use]
    pub fn new(level: NoticeLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
        }
    }
}

/// Channel for telling the user about failures and asking for confirmation.
#[async_trait]
pub trait Notifier: Send + Sync {
    fn notify(&self, notice: Notice);

    /// Ask the user to accept or decline. Resolves once they answer.
    async fn confirm(&self, message: &str) -> bool;
}

/// Notifier that records everything it is told and answers confirmations
/// with a preset choice.
#[derive(Debug)]
pub struct NoticeLog {
    notices: Mutex<Vec<Notice>>,
    confirmations: Mutex<Vec<String>>,
    accept: AtomicBool,
}

impl Default for NoticeLog {
    fn default() -> Self {
        Self::accepting()
    }
}

impl NoticeLog {
    #[must_use]
    pub fn accepting() -> Self {
        Self::with_answer(true)
    }

    #[must_use]
    pub fn declining() -> Self {
        Self::with_answer(false)
    }

    fn with_answer(accept: bool) -> Self {
        Self {
            notices: Mutex::new(Vec::new()),
            confirmations: Mutex::new(Vec::new()),
            accept: AtomicBool::new(accept),
        }
    }

    pub fn set_accept(&self, accept: bool) {
        self.accept.store(accept, Ordering::SeqCst);
    }

    #[must_use]
    pub fn notices(&self) -> Vec<Notice> {
        lock(&self.notices).clone()
    }

    /// Messages of every confirmation requested so far.
    #[must_use]
    pub fn confirmations(&self) -> Vec<String> {
        lock(&self.confirmations).clone()
    }
}

#[async_trait]
impl Notifier for NoticeLog {
    fn notify(&self, notice: Notice) {
        lock(&self.notices).push(notice);
    }

    async fn confirm(&self, message: &str) -> bool {
        lock(&self.confirmations).push(message.to_string());
        self.accept.load(Ordering::SeqCst)
    }
}

fn lock<T>(mutex: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    mutex
        .lock()
        .unwrap_or_else(std::sync::PoisonError::into_inner)
}
