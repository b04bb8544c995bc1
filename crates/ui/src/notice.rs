use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use services::{Notice, Notifier};
use tokio::sync::{Notify, oneshot};

/// Oldest notices are dropped beyond this many.
const MAX_NOTICES: usize = 3;

/// What the notice banner and confirm dialog should currently show.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NoticeBoard {
    pub notices: Vec<Notice>,
    pub confirm: Option<String>,
}

struct PendingConfirm {
    message: String,
    reply: oneshot::Sender<bool>,
}

#[derive(Default)]
struct NotifierState {
    notices: Vec<Notice>,
    pending: Option<PendingConfirm>,
}

/// In-window notifier: notices show in a banner, confirmations in a dialog.
///
/// The view listens on [`changed`](Self::changed) and re-reads the [`board`](Self::board).
#[derive(Default)]
pub struct UiNotifier {
    state: Mutex<NotifierState>,
    changed: Notify,
}

impl UiNotifier {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn board(&self) -> NoticeBoard {
        let state = self.lock();
        NoticeBoard {
            notices: state.notices.clone(),
            confirm: state.pending.as_ref().map(|p| p.message.clone()),
        }
    }

    pub fn dismiss(&self, index: usize) {
        {
            let mut state = self.lock();
            if index < state.notices.len() {
                state.notices.remove(index);
            }
        }
        self.changed.notify_one();
    }

    /// Resolve the open confirmation, if any.
    pub fn answer(&self, accepted: bool) {
        let pending = self.lock().pending.take();
        if let Some(pending) = pending {
            let _ = pending.reply.send(accepted);
        }
        self.changed.notify_one();
    }

    /// Wait until the board has changed since the last wake-up.
    pub async fn changed(&self) {
        self.changed.notified().await;
    }

    fn lock(&self) -> MutexGuard<'_, NotifierState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl Notifier for UiNotifier {
    fn notify(&self, notice: Notice) {
        tracing::debug!(level = ?notice.level, message = %notice.message, "notice");
        {
            let mut state = self.lock();
            state.notices.push(notice);
            let overflow = state.notices.len().saturating_sub(MAX_NOTICES);
            state.notices.drain(..overflow);
        }
        self.changed.notify_one();
    }

    async fn confirm(&self, message: &str) -> bool {
        let (reply, answer) = oneshot::channel();
        {
            let mut state = self.lock();
            // A newer question supersedes an unanswered one; its sender is
            // dropped and the earlier caller sees a decline.
            state.pending = Some(PendingConfirm {
                message: message.to_string(),
                reply,
            });
        }
        self.changed.notify_one();
        answer.await.unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    async fn wait_for_confirm(notifier: &UiNotifier) -> String {
        loop {
            if let Some(message) = notifier.board().confirm {
                return message;
            }
            tokio::task::yield_now().await;
        }
    }

    #[test]
    fn keeps_only_recent_notices() {
        let notifier = UiNotifier::new();
        for i in 0..5 {
            notifier.notify(Notice::info(format!("n{i}")));
        }
        let messages: Vec<_> = notifier
            .board()
            .notices
            .into_iter()
            .map(|n| n.message)
            .collect();
        assert_eq!(messages, vec!["n2", "n3", "n4"]);
    }

    #[test]
    fn dismiss_removes_by_index() {
        let notifier = UiNotifier::new();
        notifier.notify(Notice::warning("first"));
        notifier.notify(Notice::error("second"));
        notifier.dismiss(0);
        notifier.dismiss(9);
        assert_eq!(notifier.board().notices, vec![Notice::error("second")]);
    }

    #[tokio::test]
    async fn confirm_resolves_with_user_answer() {
        let notifier = Arc::new(UiNotifier::new());
        let asking = Arc::clone(&notifier);
        let handle = tokio::spawn(async move { asking.confirm("Restart?").await });

        assert_eq!(wait_for_confirm(&notifier).await, "Restart?");
        notifier.answer(true);

        assert!(handle.await.unwrap());
        assert!(notifier.board().confirm.is_none());
    }

    #[tokio::test]
    async fn superseded_confirm_is_declined() {
        let notifier = Arc::new(UiNotifier::new());
        let first = Arc::clone(&notifier);
        let first = tokio::spawn(async move { first.confirm("one").await });
        wait_for_confirm(&notifier).await;

        let second = Arc::clone(&notifier);
        let second = tokio::spawn(async move { second.confirm("two").await });
        while notifier.board().confirm.as_deref() != Some("two") {
            tokio::task::yield_now().await;
        }

        assert!(!first.await.unwrap());
        notifier.answer(true);
        assert!(second.await.unwrap());
    }

    #[tokio::test]
    async fn changed_wakes_after_notify() {
        let notifier = UiNotifier::new();
        notifier.notify(Notice::info("hello"));
        tokio::time::timeout(std::time::Duration::from_millis(100), notifier.changed())
            .await
            .expect("notify stores a wake-up");
    }
}
