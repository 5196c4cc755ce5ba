use super::test_harness::{ViewKind, setup_view_harness};

#[test]
fn stages_view_renders_tiles_with_lock_state() {
    let mut harness = setup_view_harness(ViewKind::Stages, |_| {});
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Warm-up"), "missing first stage in {html}");
    assert!(html.contains("Final round"), "missing second stage in {html}");
    assert!(html.contains("2 questions"), "missing count in {html}");
    assert!(html.contains("Locked"), "missing lock badge in {html}");
}

#[test]
fn stages_view_marks_completed_stages() {
    let mut harness = setup_view_harness(ViewKind::Stages, |engine| {
        engine.select_stage(0).unwrap();
        engine.submit_answer(1);
        engine.advance().unwrap();
        engine.submit_answer(2);
        engine.advance().unwrap();
        engine.exit_to_stage_select();
    });
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Completed"), "missing completed badge in {html}");
    assert!(!html.contains("Locked"), "stage 1 should be unlocked in {html}");
}

#[test]
fn quiz_view_renders_the_current_question() {
    let mut harness = setup_view_harness(ViewKind::Quiz, |engine| {
        engine.select_stage(0).unwrap();
    });
    harness.rebuild();
    let html = harness.render();

    assert!(
        html.contains("Which planet is closest to the sun?"),
        "missing prompt in {html}"
    );
    assert!(html.contains("Mercury"), "missing option in {html}");
    assert!(html.contains("Question 1 of 2"), "missing position in {html}");
    assert!(!html.contains("Try again"), "retry shown too early in {html}");
}

#[test]
fn quiz_view_offers_retry_after_a_wrong_answer() {
    let mut harness = setup_view_harness(ViewKind::Quiz, |engine| {
        engine.select_stage(0).unwrap();
        engine.submit_answer(0);
    });
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Try again"), "missing retry button in {html}");
    assert!(html.contains("option--wrong"), "missing wrong tone in {html}");
    assert!(html.contains("option--correct"), "missing reveal in {html}");
    assert!(
        html.contains("Mercury orbits at about 58 million km."),
        "missing explanation in {html}"
    );
}

#[test]
fn quiz_view_offers_advance_after_a_correct_answer() {
    let mut harness = setup_view_harness(ViewKind::Quiz, |engine| {
        engine.select_stage(0).unwrap();
        engine.submit_answer(1);
    });
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Next question"), "missing advance in {html}");
    assert!(!html.contains("Try again"), "retry after correct in {html}");
}

#[test]
fn quiz_view_renders_the_completion_panel() {
    let mut harness = setup_view_harness(ViewKind::Quiz, |engine| {
        engine.select_stage(0).unwrap();
        engine.submit_answer(1);
        engine.advance().unwrap();
        engine.submit_answer(2);
        engine.advance().unwrap();
    });
    harness.rebuild();
    let html = harness.render();

    assert!(
        html.contains("You completed Warm-up"),
        "missing completion title in {html}"
    );
    assert!(html.contains("2 / 2"), "missing final score in {html}");
    assert!(html.contains("Next stage"), "missing next-stage cta in {html}");
}

#[test]
fn quiz_view_without_a_stage_falls_back_to_selection() {
    let mut harness = setup_view_harness(ViewKind::Quiz, |_| {});
    harness.rebuild();
    let html = harness.render();

    assert!(
        html.contains("No stage in progress."),
        "missing fallback in {html}"
    );
}
