//! Integration Tests für das optionale `serde` Feature
//!
//! Zustände und Statistik sollen sich z.B. für Host-Tools als JSON austauschen lassen.

use playback_core::{BrightnessTable, PlaybackDriver, PlaybackEvent, PlaybackState, TableSummary};

#[test]
fn test_playback_state_json() {
    assert_eq!(
        serde_json::to_string(&PlaybackState::Idle).unwrap(),
        "\"Idle\""
    );

    let playing = PlaybackState::Playing {
        started_at_ms: 1000,
    };
    let json = serde_json::to_string(&playing).unwrap();
    assert_eq!(json, r#"{"Playing":{"started_at_ms":1000}}"#);
    assert_eq!(
        serde_json::from_str::<PlaybackState>(&json).unwrap(),
        playing
    );
}

#[test]
fn test_events_from_driver_survive_json() {
    let table = BrightnessTable::new(&[10, 200, 0], 100).unwrap();
    let mut driver = PlaybackDriver::new(table);

    let started = driver.tick(1000, true).event.unwrap();
    let finished = driver.tick(1300, false).event.unwrap();

    for event in [started, finished] {
        let json = serde_json::to_string(&event).unwrap();
        assert_eq!(serde_json::from_str::<PlaybackEvent>(&json).unwrap(), event);
    }
    assert_eq!(
        serde_json::to_string(&finished).unwrap(),
        r#"{"Finished":{"at_ms":1300}}"#
    );
}

#[test]
fn test_table_summary_json() {
    let summary = BrightnessTable::new(&[0, 100, 200], 50).unwrap().summary();
    let value = serde_json::to_value(summary).unwrap();

    assert_eq!(value["entries"], 3);
    assert_eq!(value["duration_ms"], 150);
    assert_eq!(value["active_entries"], 2);
    assert_eq!(value["average_active_level"], 150);
    assert_eq!(
        serde_json::from_value::<TableSummary>(value).unwrap(),
        summary
    );
}
