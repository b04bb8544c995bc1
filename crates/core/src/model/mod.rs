mod question;
mod verdict;

pub use question::{Question, QuestionMeta};
pub use verdict::Verdict;
