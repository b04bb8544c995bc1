use quiz_core::{Phase, QuestionMeta, Verdict};
use services::QuizView;
use services::controller::NO_QUESTIONS_MESSAGE;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizIntent {
    Start,
    Select(usize),
    Next,
    Restart,
    Reload,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StartVm {
    pub can_start: bool,
    pub note: Option<&'static str>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionVm {
    pub index: usize,
    pub text: String,
    pub selected: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionVm {
    pub progress_label: String,
    pub text: String,
    pub tags_label: Option<String>,
    pub options: Vec<OptionVm>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SummaryVm {
    pub score_label: String,
    pub message: &'static str,
    pub passed: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuizScreen {
    Start(StartVm),
    Question(QuestionVm),
    Summary(SummaryVm),
}

#[must_use]
pub fn map_quiz_screen(view: &QuizView) -> QuizScreen {
    match (view.phase, view.question.as_ref()) {
        (Phase::Ended, _) => {
            let verdict = view.verdict.unwrap_or(Verdict::TryAgain);
            QuizScreen::Summary(SummaryVm {
                score_label: format!("Your score: {} / {}", view.score, view.total),
                message: verdict_message(verdict),
                passed: verdict.is_pass(),
            })
        }
        (Phase::InProgress, Some(question)) => {
            let options = question
                .options
                .iter()
                .enumerate()
                .map(|(index, text)| OptionVm {
                    index,
                    text: text.clone(),
                    selected: view.selected.as_deref() == Some(text.as_str()),
                })
                .collect();
            QuizScreen::Question(QuestionVm {
                progress_label: format!("Question {} / {}", view.current_index + 1, view.total),
                text: question.text.clone(),
                tags_label: tags_label(&question.meta),
                options,
            })
        }
        // Started on an empty list: nothing to show but the start screen.
        (Phase::NotStarted | Phase::InProgress, _) => QuizScreen::Start(StartVm {
            can_start: view.can_start(),
            note: (view.status.is_loaded() && view.total == 0).then_some(NO_QUESTIONS_MESSAGE),
        }),
    }
}

fn verdict_message(verdict: Verdict) -> &'static str {
    match verdict {
        Verdict::Passed => "You Passed!",
        Verdict::TryAgain => "Try Again!",
    }
}

fn tags_label(meta: &QuestionMeta) -> Option<String> {
    let parts: Vec<&str> = [meta.category.as_deref(), meta.difficulty.as_deref()]
        .into_iter()
        .flatten()
        .filter(|part| !part.is_empty())
        .collect();
    (!parts.is_empty()).then(|| parts.join(" · "))
}

/// Digit keys 1-9 pick the matching option.
#[must_use]
pub fn option_index_for_key(key: &str, option_count: usize) -> Option<usize> {
    let digit = key.parse::<usize>().ok()?;
    (1..=option_count.min(9))
        .contains(&digit)
        .then(|| digit - 1)
}
