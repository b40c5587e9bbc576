// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! End-to-end checks of the doubles standing in for `sendTrack`.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use mf_core::{Shape, ShapeError, ShapeSet, ValueKind, SEND_TRACK_TARGET};
use mf_doubles::{metrics_settings_fake_return, SendTrackFake, Tracker, TrackerSpy};
use serde_json::{json, Map, Value};
use tracing_subscriber::EnvFilter;
use yare::parameterized;

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}

fn opts(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        _ => Map::new(),
    }
}

/// Reports a list size the way a list view does: every fifth entry is special.
fn report_list(tracker: &dyn Tracker, list_type: &str, len: usize) -> mf_doubles::Result<usize> {
    if len > 0 && len % 5 == 0 {
        let opts = opts(json!({"special": true, "meta": {"count": len}}));
        tracker.send_track(&json!(list_type), Some(&opts))?;
    }
    Ok(len)
}

/// Saves a pet, reporting a special favorite for snakes when marketing is on.
fn save_as_favorite(
    tracker: &dyn Tracker,
    marketing: bool,
    id: u64,
    pet_type: &str,
) -> mf_doubles::Result<String> {
    if marketing {
        let opts = if pet_type == "snake" {
            opts(json!({"especial": true}))
        } else {
            Map::new()
        };
        tracker.send_track(&json!("favorite"), Some(&opts))?;
    }
    Ok(format!("pet-{id}-saved"))
}

#[test]
fn skipped_list_of_five_reports_special_event() {
    init_logging();
    let spy = TrackerSpy::new(SendTrackFake::new());

    assert_eq!(report_list(&spy, "skipped", 5).unwrap(), 5);

    assert_eq!(spy.call_count(), 1);
    assert!(spy.was_called_with(
        &json!("skipped"),
        Some(&opts(json!({"special": true, "meta": {"count": 5}})))
    ));
}

#[test]
fn short_list_sends_nothing() {
    let spy = TrackerSpy::new(SendTrackFake::new());
    report_list(&spy, "skipped", 3).unwrap();
    assert_eq!(spy.call_count(), 0);
}

#[test]
fn misspelled_option_fails_the_caller() {
    init_logging();
    let spy = TrackerSpy::new(SendTrackFake::new());

    let err = save_as_favorite(&spy, true, 678, "snake").unwrap_err();

    assert_eq!(spy.call_count(), 1);
    assert!(err.to_string().contains("\"especial\""));
}

#[test]
fn regular_favorite_passes() {
    let spy = TrackerSpy::new(SendTrackFake::new());
    assert_eq!(save_as_favorite(&spy, true, 678, "dog").unwrap(), "pet-678-saved");
    assert!(spy.was_called_with(&json!("favorite"), Some(&Map::new())));
}

#[test]
fn marketing_disabled_by_default_settings() {
    let spy = TrackerSpy::new(SendTrackFake::new());
    let settings = metrics_settings_fake_return(&Map::new()).unwrap();

    save_as_favorite(&spy, settings.marketing, 678, "dog").unwrap();

    assert_eq!(spy.call_count(), 0);
}

#[test]
fn misspelled_settings_override_is_caught() {
    let err = metrics_settings_fake_return(&opts(json!({"markting": true}))).unwrap_err();
    assert!(matches!(
        err.as_shape(),
        Some(ShapeError::UnexpectedOptionKeys { keys, .. }) if keys == &["markting"]
    ));
}

#[parameterized(
    skipped_special_meta = { vec![json!("skipped"), json!({"special": true, "meta": {"count": 5}})], None },
    number_identifier = { vec![json!(123), json!({})], Some("123") },
    misspelled_key = { vec![json!("favorite"), json!({"especial": true})], Some("especial") },
    empty_options = { vec![json!("favorite"), json!({})], None },
)]
fn concrete_scenarios(args: Vec<Value>, failure_mentions: Option<&str>) {
    let result = Shape::send_track().validate_args(&args);
    match failure_mentions {
        None => assert!(result.is_ok()),
        Some(text) => assert!(result.unwrap_err().to_string().contains(text)),
    }
}

#[parameterized(
    number = { json!(123) },
    null = { json!(null) },
)]
fn non_string_identifier_wins_over_bad_options(id: Value) {
    let result = Shape::send_track().validate_args(&[id, json!({"especial": true})]);
    assert!(matches!(result, Err(ShapeError::InvalidIdentifierType { .. })));
}

#[test]
fn registered_shapes_drive_the_fake() {
    let mut shapes = ShapeSet::builtin();
    shapes
        .insert(Shape::new("pets saveAsFavorite", ValueKind::Number).allow(["type"]))
        .unwrap();

    let fake = SendTrackFake::from_shapes(&shapes, "pets saveAsFavorite").unwrap();
    assert_eq!(fake.shape().identifier, ValueKind::Number);
    assert!(fake.send_track(&json!(678), Some(&opts(json!({"type": "snake"})))).is_ok());
    assert!(fake.send_track(&json!(678), Some(&opts(json!({"kind": "snake"})))).is_err());

    let send_track = SendTrackFake::from_shapes(&shapes, SEND_TRACK_TARGET).unwrap();
    assert!(send_track.send_track(&json!("favorite"), None).is_ok());
}
