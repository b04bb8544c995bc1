#![forbid(unsafe_code)]

pub mod model;
pub mod session;

pub use model::{Question, QuestionMeta, Verdict};
pub use session::{AdvanceOutcome, Phase, QuizSession, SessionError};
