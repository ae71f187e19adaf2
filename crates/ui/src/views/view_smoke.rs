use std::time::Duration;

use services::QuizAction;
use tables_core::model::{Digit, Factor, Locale, Order, SessionConfig};

use super::test_harness::{
    MANUAL_ADVANCE, ViewHarness, setup_view_harness, setup_view_harness_with_locale,
};

fn config(table: u8, order: Order) -> SessionConfig {
    SessionConfig::default()
        .with_multiplier(Factor::new(table).unwrap())
        .with_order(order)
}

fn type_answer(harness: &mut ViewHarness, answer: u8) {
    for ch in answer.to_string().chars() {
        harness.dispatch(QuizAction::Digit(Digit::from_char(ch).unwrap()));
    }
}

#[tokio::test(flavor = "current_thread")]
async fn setup_view_smoke_renders_choices() {
    let harness = setup_view_harness(config(6, Order::Descending), MANUAL_ADVANCE);
    let html = harness.render();

    assert!(html.contains("Times Tables"), "missing title in {html}");
    assert!(html.contains("dan-btn selected"), "missing selection in {html}");
    assert!(html.contains("6×"), "missing table label in {html}");
    assert!(html.contains("9 → 1"), "missing order label in {html}");
    assert!(html.contains("start-btn"), "missing start button in {html}");
    assert!(!html.contains("quiz-screen"));
}

#[tokio::test(flavor = "current_thread")]
async fn start_renders_first_problem_and_speaks_it() {
    let mut harness = setup_view_harness(config(4, Order::Ascending), MANUAL_ADVANCE);
    harness.dispatch(QuizAction::Start);
    let html = harness.render();

    assert!(html.contains("quiz-screen"), "missing quiz screen in {html}");
    assert!(html.contains("4 × 1"), "missing problem in {html}");
    assert!(html.contains("0 / 9"), "missing progress label in {html}");
    assert!(html.contains("width: 0%;"), "missing progress bar in {html}");
    assert_eq!(harness.announcer.spoken(), vec!["4 times 1 is?"]);
}

#[tokio::test(flavor = "current_thread")]
async fn correct_answer_holds_problem_until_advance() {
    let mut harness = setup_view_harness(config(4, Order::Ascending), MANUAL_ADVANCE);
    harness.dispatch(QuizAction::Start);
    type_answer(&mut harness, 4);

    let html = harness.render();
    assert!(html.contains("4 × 1"), "solved problem should stay in {html}");
    assert!(html.contains("feedback-overlay--correct"), "missing mark in {html}");

    // Input is locked until the advance fires.
    type_answer(&mut harness, 8);
    assert!(harness.with_controller(|c| c.session().unwrap().pending_input().is_empty()));

    harness.elapse_advance();
    let html = harness.render();
    assert!(html.contains("4 × 2"), "missing next problem in {html}");
    assert!(html.contains("1 / 9"), "missing progress label in {html}");
    assert!(!html.contains("feedback-overlay"), "stale mark in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn wrong_answer_shows_cross_and_keeps_problem() {
    let mut harness = setup_view_harness(config(3, Order::Descending), MANUAL_ADVANCE);
    harness.dispatch(QuizAction::Start);
    type_answer(&mut harness, 28);

    let html = harness.render();
    assert!(html.contains("3 × 9"), "missing problem in {html}");
    assert!(html.contains("feedback-overlay--incorrect"), "missing mark in {html}");
    assert_eq!(harness.pending_advance(), None);
    assert_eq!(harness.announcer.spoken().last().map(String::as_str), Some("So close!"));

    harness.dispatch(QuizAction::Digit(Digit::new(2).unwrap()));
    let html = harness.render();
    assert!(!html.contains("feedback-overlay"), "mark should clear in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn back_returns_to_setup_and_drops_advance() {
    let mut harness = setup_view_harness(config(2, Order::Ascending), MANUAL_ADVANCE);
    harness.dispatch(QuizAction::Start);
    type_answer(&mut harness, 2);
    let ticket = harness.pending_advance().expect("advance scheduled");

    harness.dispatch(QuizAction::Back);
    assert!(harness.render().contains("setup-screen"));

    harness.dispatch(QuizAction::AdvanceElapsed(ticket));
    let html = harness.render();
    assert!(html.contains("setup-screen"), "stale advance moved screens: {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn full_run_reaches_result_and_restarts() {
    let mut harness = setup_view_harness(config(7, Order::Random), MANUAL_ADVANCE);
    harness.dispatch(QuizAction::Start);

    for _ in 0..9 {
        let answer = harness.with_controller(|c| c.displayed_problem().unwrap().answer());
        type_answer(&mut harness, answer);
        harness.elapse_advance();
    }

    let html = harness.render();
    assert!(html.contains("result-screen"), "missing result in {html}");
    assert!(html.contains("You finished the 7 times table!"), "missing title in {html}");
    assert_eq!(
        harness.announcer.spoken().last().map(String::as_str),
        Some("Perfect! Congratulations!")
    );

    harness.dispatch(QuizAction::Restart);
    let html = harness.render();
    assert!(html.contains("setup-screen"), "restart should show setup in {html}");
    assert!(html.contains("dan-btn selected"));
}

#[tokio::test(flavor = "current_thread")]
async fn advance_timer_moves_to_next_problem() {
    let mut harness = setup_view_harness(config(5, Order::Ascending), Duration::from_millis(1));
    harness.dispatch(QuizAction::Start);
    type_answer(&mut harness, 5);

    for _ in 0..20 {
        if harness.pending_advance().is_none() {
            break;
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
        harness.drive_async().await;
    }
    harness.drive();

    let html = harness.render();
    assert!(html.contains("5 × 2"), "timer did not advance: {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn japanese_locale_speaks_japanese_prompts() {
    let mut harness = setup_view_harness_with_locale(
        config(8, Order::Ascending),
        Locale::Japanese,
        MANUAL_ADVANCE,
    );
    harness.dispatch(QuizAction::Start);
    assert_eq!(harness.announcer.spoken(), vec!["8 かける 1 は？"]);
}
