#![forbid(unsafe_code)]

pub mod config;
pub mod controller;
pub mod error;
pub mod notify;
pub mod provider;
pub mod view;

pub use config::QuizConfig;
pub use controller::QuizController;
pub use error::{ConfigError, ProviderError, QuizError};
pub use notify::{Notice, NoticeLevel, NoticeLog, Notifier};
pub use provider::{InMemoryQuestionProvider, QuestionProvider, TriviaApiProvider};
pub use view::{LoadStatus, QuestionView, QuizView};
