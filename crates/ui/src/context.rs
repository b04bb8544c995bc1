use std::sync::Arc;

use services::{Notifier, QuestionProvider, QuizController};

use crate::notice::UiNotifier;

pub trait UiApp: Send + Sync {
    fn app_name(&self) -> &str;
    fn question_provider(&self) -> Arc<dyn QuestionProvider>;
    fn confirm_reset(&self) -> bool;
}

#[derive(Clone)]
pub struct AppContext {
    app_name: String,
    confirm_reset: bool,
    provider: Arc<dyn QuestionProvider>,
    notifier: Arc<UiNotifier>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            app_name: app.app_name().to_string(),
            confirm_reset: app.confirm_reset(),
            provider: app.question_provider(),
            notifier: Arc::new(UiNotifier::new()),
        }
    }

    #[must_use]
    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    #[must_use]
    pub fn notifier(&self) -> Arc<UiNotifier> {
        Arc::clone(&self.notifier)
    }

    /// A fresh controller wired to this context's provider and notifier.
    #[must_use]
    pub fn new_controller(&self) -> QuizController {
        let notifier: Arc<dyn Notifier> = self.notifier();
        QuizController::new(Arc::clone(&self.provider), notifier)
            .with_confirm_reset(self.confirm_reset)
    }
}

// This context is provided by the application composition root (`crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
