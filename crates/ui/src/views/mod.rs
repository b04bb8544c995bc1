mod notices;
mod quiz;
mod state;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use notices::{ConfirmDialog, NoticeBanner};
pub use quiz::QuizPage;
pub use state::{ViewError, ViewState, view_state_from_resource};
