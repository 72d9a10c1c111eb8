//! End-to-end flip lifecycle tests against the engine surface the TUI reads.

use std::time::Duration;

use toss_engine::{FeedbackEvent, Outcome};

use crate::common::{FRAME, app_from_toml, flip_once, seeded_app, settle};

/// A fresh app rests on the head face with no recorded outcome.
#[test]
fn fresh_app_rests_on_head_with_no_outcome() {
    let app = seeded_app(1);

    assert!(!app.is_flipping());
    assert_eq!(app.outcome(), None);
    assert_eq!(app.coin_face(), Outcome::Head);
    assert!(app.rotation_degrees().abs() < f32::EPSILON);
    assert_eq!(app.result_label(), "");
}

/// One trigger runs the whole lifecycle: start pulse, flight, settle pulse.
#[test]
fn single_flip_runs_the_full_lifecycle() {
    let mut app = seeded_app(2);
    app.trigger_flip();

    assert!(app.is_flipping());
    assert_eq!(app.outcome(), None);
    assert_eq!(app.result_label(), "Wait ...");
    assert_eq!(app.take_feedback_events(), vec![FeedbackEvent::FlipStarted]);

    settle(&mut app);

    let outcome = app.outcome().expect("settled flip has an outcome");
    assert_eq!(app.result_label(), outcome.label());
    assert_eq!(app.coin_face(), outcome);
    assert!(app.rotation_degrees().abs() < f32::EPSILON);
    assert_eq!(app.take_feedback_events(), vec![FeedbackEvent::FlipSettled]);
    assert_eq!(app.stats().flips, 1);
}

/// Triggers while airborne are silent no-ops: one flight, one settle.
#[test]
fn rapid_triggers_run_exactly_one_flip() {
    let mut app = seeded_app(3);
    app.trigger_flip();
    app.advance(FRAME);
    let rotation = app.rotation_degrees();

    for _ in 0..5 {
        app.trigger_flip();
    }
    assert!(
        (app.rotation_degrees() - rotation).abs() < f32::EPSILON,
        "retrigger must not restart the flight"
    );

    settle(&mut app);

    assert_eq!(app.stats().flips, 1);
    assert_eq!(
        app.take_feedback_events(),
        vec![FeedbackEvent::FlipStarted, FeedbackEvent::FlipSettled]
    );
}

/// A settled flip is recorded exactly once even as frames keep coming.
#[test]
fn settled_flip_is_recorded_exactly_once() {
    let mut app = seeded_app(4);
    app.trigger_flip();
    settle(&mut app);
    app.take_feedback_events();

    for _ in 0..100 {
        app.advance(FRAME);
    }

    assert_eq!(app.stats().flips, 1);
    assert!(app.take_feedback_events().is_empty());
}

/// Consecutive flips each settle with their own outcome and feedback.
#[test]
fn consecutive_flips_settle_independently() {
    let mut app = seeded_app(5);

    for expected in 1..=3 {
        let outcome = flip_once(&mut app);
        assert_eq!(app.coin_face(), outcome);
        assert_eq!(app.stats().flips, expected);
        assert_eq!(
            app.take_feedback_events(),
            vec![FeedbackEvent::FlipStarted, FeedbackEvent::FlipSettled]
        );
    }
}

/// A new flip can start immediately after a settle and clears the outcome.
#[test]
fn new_flip_can_start_immediately_after_settle() {
    let mut app = seeded_app(6);
    flip_once(&mut app);

    app.trigger_flip();

    assert!(app.is_flipping());
    assert_eq!(app.outcome(), None, "previous outcome is cleared at trigger");
}

/// A [flip] config section drives the settle timing end to end.
#[test]
fn configured_schedule_controls_flight_time() {
    let mut app = app_from_toml(
        r#"
        [flip]
        repetitions = 2
        half_cycle_ms = 50
    "#,
        7,
    );

    app.trigger_flip();
    app.advance(Duration::from_millis(199));
    assert!(app.is_flipping());

    app.advance(Duration::from_millis(1));
    assert!(!app.is_flipping());
}

/// Rotation only grows during a flight and never exceeds the scheduled spins.
#[test]
fn rotation_is_monotonic_and_capped_during_flight() {
    let mut app = seeded_app(8);
    app.trigger_flip();

    let mut last = 0.0f32;
    while app.is_flipping() {
        app.advance(FRAME);
        if app.is_flipping() {
            let rotation = app.rotation_degrees();
            assert!(rotation >= last, "rotation went backwards: {last} -> {rotation}");
            assert!(rotation <= 1800.0, "rotation exceeded five full spins");
            last = rotation;
        }
    }
}
