//! Round-trip tests for the JSON event log store.

use chrono::NaiveDate;
use emotion_quote_companion::lexicon::EmotionLabel;
use emotion_quote_companion::store::{EmotionRecord, EventLogStore};
use emotion_quote_companion::Error;
use tempfile::tempdir;

fn ts(day: u32, hour: u32, sec: u32) -> chrono::NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 8, day)
        .unwrap()
        .and_hms_opt(hour, 0, sec)
        .unwrap()
}

#[test]
fn missing_file_loads_as_empty_store() {
    let dir = tempdir().unwrap();
    let store = EventLogStore::new(dir.path().join("emotion_log.json"));
    assert!(store.load_all().unwrap().is_empty());
}

#[test]
fn appended_records_load_back_in_order() {
    let dir = tempdir().unwrap();
    let store = EventLogStore::new(dir.path().join("emotion_log.json"));

    let records = vec![
        EmotionRecord {
            emotion: EmotionLabel::Happy,
            timestamp: ts(20, 9, 1),
        },
        EmotionRecord {
            emotion: EmotionLabel::Sad,
            timestamp: ts(21, 10, 2),
        },
        EmotionRecord {
            emotion: EmotionLabel::Neutral,
            timestamp: ts(22, 11, 3),
        },
    ];
    for record in &records {
        store.append(record.clone()).unwrap();
    }

    let loaded = store.load_all().unwrap();
    assert_eq!(loaded, records);
}

#[test]
fn timestamp_precision_survives_round_trip() {
    let dir = tempdir().unwrap();
    let store = EventLogStore::new(dir.path().join("emotion_log.json"));

    let timestamp = NaiveDate::from_ymd_opt(2026, 8, 25)
        .unwrap()
        .and_hms_micro_opt(14, 30, 59, 123_456)
        .unwrap();
    store
        .append(EmotionRecord {
            emotion: EmotionLabel::Love,
            timestamp,
        })
        .unwrap();

    let loaded = store.load_all().unwrap();
    assert_eq!(loaded[0].timestamp, timestamp);

    // The reloaded instant makes the same window-filtering decision.
    let window_start = timestamp - chrono::Duration::days(7);
    assert!(loaded[0].timestamp >= window_start);
    let future_window = timestamp + chrono::Duration::seconds(1);
    assert!(loaded[0].timestamp < future_window);
}

#[test]
fn malformed_log_is_a_hard_failure() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("emotion_log.json");
    std::fs::write(&path, "{ not json").unwrap();

    let store = EventLogStore::new(&path);
    match store.load_all() {
        Err(Error::MalformedLog { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("expected MalformedLog, got {other:?}"),
    }
}

#[test]
fn append_over_malformed_log_fails_without_touching_the_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("emotion_log.json");
    std::fs::write(&path, "[oops").unwrap();

    let store = EventLogStore::new(&path);
    let result = store.append(EmotionRecord {
        emotion: EmotionLabel::Happy,
        timestamp: ts(25, 8, 0),
    });
    assert!(matches!(result, Err(Error::MalformedLog { .. })));
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "[oops");
}

#[test]
fn persisted_format_is_a_json_array_of_lowercase_emotions() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("emotion_log.json");
    let store = EventLogStore::new(&path);
    store
        .append(EmotionRecord {
            emotion: EmotionLabel::Motivation,
            timestamp: ts(25, 8, 0),
        })
        .unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    let array = value.as_array().unwrap();
    assert_eq!(array.len(), 1);
    assert_eq!(array[0]["emotion"], "motivation");
    assert!(array[0]["timestamp"]
        .as_str()
        .unwrap()
        .starts_with("2026-08-25T08:00:00"));
}
