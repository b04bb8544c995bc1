use dioxus::prelude::ReadableExt;
use quiz_core::{Phase, Question};
use services::controller::RESET_CONFIRM_MESSAGE;
use services::{InMemoryQuestionProvider, NoticeLevel};

use super::test_harness::{ViewHarness, setup_view_harness};
use crate::vm::QuizIntent;

fn two_plus_two() -> Vec<Question> {
    vec![Question::new("2+2?", "4", vec!["3".into(), "5".into()])]
}

async fn finished_quiz(confirm_reset: bool) -> ViewHarness {
    let mut harness =
        setup_view_harness(InMemoryQuestionProvider::new(two_plus_two()), confirm_reset);
    harness.rebuild();
    harness.drive_async().await;

    harness.dispatch(QuizIntent::Start);
    harness.dispatch(QuizIntent::Select(0));
    harness.dispatch(QuizIntent::Next);
    assert!(harness.render().contains("You Passed!"));
    harness
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_renders_start_screen() {
    let mut harness = setup_view_harness(InMemoryQuestionProvider::new(two_plus_two()), false);
    harness.rebuild();
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("Get Started"), "missing start button in {html}");
    assert_eq!(harness.provider.request_count(), 1);
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_renders_error_state() {
    let mut harness = setup_view_harness(InMemoryQuestionProvider::failing("offline"), false);
    harness.rebuild();
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("Could not load questions"), "missing error in {html}");
    assert!(html.contains("Retry"), "missing retry in {html}");
    assert!(
        html.contains("Failed to fetch questions"),
        "missing fetch notice in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_plays_to_summary() {
    let mut harness = setup_view_harness(InMemoryQuestionProvider::new(two_plus_two()), false);
    harness.rebuild();
    harness.drive_async().await;

    harness.dispatch(QuizIntent::Start);
    let html = harness.render();
    assert!(html.contains("Question 1 / 1"), "missing progress in {html}");
    assert!(html.contains("2+2?"), "missing question text in {html}");

    harness.dispatch(QuizIntent::Select(0));
    harness.dispatch(QuizIntent::Next);

    let snapshot = harness.handles.snapshot();
    let view = harness
        .dom
        .in_runtime(|| snapshot.peek().clone())
        .expect("snapshot");
    assert_eq!(view.phase, Phase::Ended);
    assert_eq!(view.score, 1);

    let html = harness.render();
    assert!(html.contains("You Passed!"), "missing verdict in {html}");
    assert!(html.contains("Your score: 1 / 1"), "missing score in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_warns_without_selection() {
    let mut harness = setup_view_harness(InMemoryQuestionProvider::new(two_plus_two()), false);
    harness.rebuild();
    harness.drive_async().await;

    harness.dispatch(QuizIntent::Start);
    harness.dispatch(QuizIntent::Next);

    let board = harness.notifier().board();
    let last = board.notices.last().expect("warning notice");
    assert_eq!(last.level, NoticeLevel::Warning);
    assert_eq!(last.message, "Please select an option");

    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("Question 1 / 1"), "should stay on question in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_restart_returns_to_start() {
    let mut harness = setup_view_harness(InMemoryQuestionProvider::new(two_plus_two()), false);
    harness.rebuild();
    harness.drive_async().await;

    harness.dispatch(QuizIntent::Start);
    harness.dispatch(QuizIntent::Select(1));
    harness.dispatch(QuizIntent::Next);
    assert!(harness.render().contains("Try Again!"));

    harness.dispatch(QuizIntent::Restart);
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("Get Started"), "missing start screen in {html}");
    assert!(html.contains("Quiz restarted"), "missing restart notice in {html}");
    assert_eq!(harness.provider.request_count(), 1);
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_confirmed_restart() {
    let mut harness = finished_quiz(true).await;

    harness.dispatch(QuizIntent::Restart);
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains(RESET_CONFIRM_MESSAGE), "missing confirm dialog in {html}");
    assert_eq!(
        harness.notifier().board().confirm.as_deref(),
        Some(RESET_CONFIRM_MESSAGE)
    );

    harness.notifier().answer(true);
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("Get Started"), "missing start screen in {html}");
    assert!(!html.contains(RESET_CONFIRM_MESSAGE), "dialog still open in {html}");
    assert!(html.contains("Quiz restarted"), "missing restart notice in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_declined_restart_keeps_summary() {
    let mut harness = finished_quiz(true).await;

    harness.dispatch(QuizIntent::Restart);
    harness.drive_async().await;
    assert!(harness.render().contains(RESET_CONFIRM_MESSAGE));

    harness.notifier().answer(false);
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("Your score: 1 / 1"), "summary lost in {html}");
    assert!(!html.contains(RESET_CONFIRM_MESSAGE), "dialog still open in {html}");
    assert!(!html.contains("Quiz restarted"), "unexpected restart notice in {html}");

    // The controller is back in place and still answers intents.
    harness.dispatch(QuizIntent::Restart);
    harness.drive_async().await;
    assert!(harness.render().contains(RESET_CONFIRM_MESSAGE));
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_retry_recovers() {
    let mut harness = setup_view_harness(InMemoryQuestionProvider::failing("offline"), false);
    harness.rebuild();
    harness.drive_async().await;
    assert!(harness.render().contains("Retry"));

    harness.provider.set_questions(two_plus_two());
    harness.dispatch(QuizIntent::Reload);
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("Get Started"), "missing start screen in {html}");
    assert!(!html.contains("Could not load questions"), "error still shown in {html}");
    assert_eq!(harness.provider.request_count(), 2);
}
