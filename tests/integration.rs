// SPDX-License-Identifier: MPL-2.0
//! End-to-end scenarios for the alert presentation engine, driven
//! through the public API only.

use iced_alerts::{
    config::{self, Anchor, Config},
    Alert, AlertId, DismissReason, Error, Phase, PresentationController,
};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::{Duration, Instant};

#[test]
fn presentation_order_is_enqueue_order() {
    let mut alerts = PresentationController::new();
    let mut ids: Vec<AlertId> = Vec::new();

    for i in 0..6 {
        let alert = Alert::info(format!("message {i}")).expect("valid alert");
        ids.push(alerts.enqueue(alert).expect("enqueue"));
    }

    let mut presented = Vec::new();
    while let Some(current) = alerts.current() {
        presented.push(current.id());
        alerts.dismiss_current().expect("dismiss");
    }

    assert_eq!(presented, ids);
    assert_eq!(alerts.phase(), Phase::Idle);
}

#[test]
fn duplicate_enqueue_fails_and_leaves_state_unchanged() {
    let mut alerts = PresentationController::new();
    let shown = Alert::warning("shown").expect("valid alert");
    let queued = Alert::warning("queued").expect("valid alert");
    let shown_dup = shown.clone();
    let queued_dup = queued.clone();

    alerts.enqueue(shown).expect("enqueue shown");
    alerts.enqueue(queued).expect("enqueue queued");

    assert_eq!(
        alerts.enqueue(shown_dup.clone()),
        Err(Error::DuplicateAlert(shown_dup.id()))
    );
    assert_eq!(
        alerts.enqueue(queued_dup.clone()),
        Err(Error::DuplicateAlert(queued_dup.id()))
    );

    assert_eq!(alerts.phase(), Phase::Showing);
    assert_eq!(alerts.current().map(|a| a.id()), Some(shown_dup.id()));
    assert_eq!(alerts.queued_count(), 1);
}

#[test]
fn at_most_one_alert_is_ever_showing() {
    let showing_counts = Rc::new(RefCell::new(0_i32));
    let max_seen = Rc::new(RefCell::new(0_i32));

    let counts = Rc::clone(&showing_counts);
    let max = Rc::clone(&max_seen);

    let mut alerts = PresentationController::new();
    alerts.subscribe(move |event| {
        let mut active = counts.borrow_mut();
        match event.phase {
            Phase::Showing => *active += 1,
            Phase::Dismissing => *active -= 1,
            Phase::Idle => {}
        }
        let mut max = max.borrow_mut();
        *max = (*max).max(*active);
    });

    for i in 0..5 {
        let alert = Alert::info(format!("message {i}")).expect("valid alert");
        alerts.enqueue(alert).expect("enqueue");
    }
    while alerts.dismiss_current().is_ok() {}

    assert_eq!(*max_seen.borrow(), 1);
    assert_eq!(*showing_counts.borrow(), 0);
}

#[test]
fn timed_alert_expires_then_sticky_alert_waits_for_manual_dismiss() {
    // enqueue A (2s) then B (no duration): A shows immediately, expires
    // at +2s, B shows, and dismissing B returns the controller to idle.
    let mut alerts = PresentationController::new();

    let a = Alert::error("connection lost")
        .expect("valid alert")
        .with_duration(Duration::from_secs(2))
        .expect("positive duration");
    let b = Alert::error("disk full").expect("valid alert");
    let (a_id, b_id) = (a.id(), b.id());

    let start = Instant::now();
    alerts.enqueue(a).expect("enqueue a");
    alerts.enqueue(b).expect("enqueue b");
    assert_eq!(alerts.current().map(|x| x.id()), Some(a_id));

    // Not expired yet.
    alerts.tick_at(start + Duration::from_millis(1500));
    assert_eq!(alerts.current().map(|x| x.id()), Some(a_id));

    // A expires, B takes over.
    alerts.tick_at(start + Duration::from_millis(2500));
    assert_eq!(alerts.current().map(|x| x.id()), Some(b_id));

    // B has no duration: much later ticks leave it alone.
    alerts.tick_at(start + Duration::from_secs(60));
    assert_eq!(alerts.current().map(|x| x.id()), Some(b_id));

    alerts.dismiss_current().expect("dismiss b");
    assert_eq!(alerts.phase(), Phase::Idle);
    assert!(!alerts.has_alerts());
}

#[test]
fn cancel_before_shown_leaves_controller_idle() {
    let mut alerts = PresentationController::new();

    // Occupy the screen so the next alert stays queued.
    alerts
        .enqueue(Alert::error("busy").expect("valid alert"))
        .expect("enqueue");
    let pending = alerts
        .enqueue(Alert::info("never seen").expect("valid alert"))
        .expect("enqueue");

    assert!(alerts.cancel(pending));
    alerts.dismiss_current().expect("dismiss");

    assert_eq!(alerts.phase(), Phase::Idle);
    assert_eq!(alerts.queued_count(), 0);
}

#[test]
fn dismiss_reasons_distinguish_expiry_from_user_action() {
    let reasons = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&reasons);

    let mut alerts = PresentationController::new();
    alerts.subscribe(move |event| {
        if let Some(reason) = event.reason {
            sink.borrow_mut().push(reason);
        }
    });

    let start = Instant::now();
    let timed = Alert::error("timed")
        .expect("valid alert")
        .with_duration(Duration::from_secs(1))
        .expect("positive duration");
    alerts.enqueue(timed).expect("enqueue");
    alerts
        .enqueue(Alert::error("manual").expect("valid alert"))
        .expect("enqueue");

    alerts.tick_at(start + Duration::from_secs(2));
    alerts.dismiss_current().expect("dismiss");

    assert_eq!(
        reasons.borrow().as_slice(),
        &[DismissReason::Expired, DismissReason::Manual]
    );
}

#[test]
fn invalid_descriptors_are_rejected_at_construction() {
    assert!(matches!(Alert::info("  "), Err(Error::InvalidAlert(_))));
    assert!(matches!(
        Alert::info("ok").unwrap().with_duration(Duration::ZERO),
        Err(Error::InvalidAlert(_))
    ));
}

#[test]
fn config_round_trip_through_toml_file() {
    let dir = tempfile::tempdir().expect("failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let saved = Config {
        anchor: Some(Anchor::TopLeft),
        tick_interval_ms: Some(200),
        notice_duration_secs: Some(2),
        warning_duration_secs: Some(6),
    };
    config::save_to_path(&saved, &path).expect("failed to save config");

    let loaded = config::load_from_path(&path).expect("failed to load config");
    assert_eq!(loaded, saved);
    assert_eq!(loaded.tick_interval(), Duration::from_millis(200));

    dir.close().expect("failed to close temporary directory");
}
