//! Integration tests for snapshot persistence and fallback.

use chrono::{Duration, Utc};
use fatigueboard_core::{
    AppState, Load, Minutes, ModelParams, MuscleGroup, Session, SnapshotStore,
};

fn store_in(dir: &tempfile::TempDir) -> SnapshotStore {
    SnapshotStore::with_path(dir.path().join("state.json"))
}

fn populated_state() -> AppState {
    let now = Utc::now();
    let mut state = AppState::new(now - Duration::days(1));
    for (muscle, minutes) in [(MuscleGroup::Back, 40), (MuscleGroup::Calves, 15)] {
        state.log_session(
            Session::new(
                muscle,
                Minutes::new(minutes).unwrap(),
                Load::new(2).unwrap(),
                None,
                now,
            ),
            &ModelParams::default(),
        );
    }
    state
}

fn quarantined_files(dir: &tempfile::TempDir) -> Vec<std::path::PathBuf> {
    std::fs::read_dir(dir.path())
        .unwrap()
        .map(|entry| entry.unwrap().path())
        .filter(|path| {
            path.file_name()
                .and_then(|name| name.to_str())
                .is_some_and(|name| name.starts_with("state.json.corrupt."))
        })
        .collect()
}

#[test]
fn test_missing_file_yields_initial_state() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir);
    let now = Utc::now();

    assert!(store.load().unwrap().is_none());
    let state = store.load_or_initial(now).unwrap();
    assert_eq!(state, AppState::new(now));
}

#[test]
fn test_save_then_load() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir);
    let state = populated_state();

    store.save(&state).unwrap();
    assert!(store.path().exists());
    assert!(!store.path().with_extension("json.tmp").exists());

    let loaded = store.load().unwrap().unwrap();
    assert_eq!(loaded, state);
    assert_eq!(loaded.history.len(), 2);
}

#[test]
fn test_save_overwrites_previous_snapshot() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir);
    let mut state = populated_state();
    store.save(&state).unwrap();

    state.clear(Utc::now());
    store.save(&state).unwrap();

    let loaded = store.load().unwrap().unwrap();
    assert!(loaded.history.is_empty());
    assert!(loaded.fatigue.is_initial());
}

#[test]
fn test_malformed_file_falls_back_and_is_quarantined() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir);
    std::fs::write(store.path(), "{ not json").unwrap();

    let now = Utc::now();
    let state = store.load_or_initial(now).unwrap();
    assert_eq!(state, AppState::new(now));
    assert!(!store.path().exists());
    let quarantined = quarantined_files(&dir);
    assert_eq!(quarantined.len(), 1);
    assert_eq!(
        std::fs::read_to_string(&quarantined[0]).unwrap(),
        "{ not json"
    );
}

#[test]
fn test_invalid_utf8_file_falls_back_and_is_quarantined() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir);
    std::fs::write(store.path(), [0xff, 0xfe, b'{', 0x80]).unwrap();

    let now = Utc::now();
    let state = store.load_or_initial(now).unwrap();
    assert_eq!(state, AppState::new(now));
    assert!(!store.path().exists());
    assert_eq!(quarantined_files(&dir).len(), 1);
}

#[test]
fn test_repeated_corruption_keeps_every_quarantined_file() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir);

    for garbage in ["first", "second", "third"] {
        std::fs::write(store.path(), garbage).unwrap();
        assert!(store.load().unwrap().is_none());
    }

    let mut contents: Vec<String> = quarantined_files(&dir)
        .iter()
        .map(|p| std::fs::read_to_string(p).unwrap())
        .collect();
    contents.sort();
    assert_eq!(contents, ["first", "second", "third"]);
}

#[test]
fn test_partial_fatigue_map_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir);
    let text = r#"{
        "schemaVersion": 1,
        "fatigue": { "chest": 40.0 },
        "history": [],
        "lastEvaluatedTimestamp": "2024-05-01T07:30:00Z"
    }"#;
    std::fs::write(store.path(), text).unwrap();

    assert!(store.load().unwrap().is_none());
}

#[test]
fn test_handwritten_snapshot_loads() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir);
    let text = r#"{
        "schemaVersion": 1,
        "fatigue": {
            "chest": 40.0, "back": 0, "shoulders": 0, "biceps": 0, "triceps": 4,
            "quads": 0, "hamstrings": 0, "glutes": 0, "calves": 0, "core": 0, "cardio": 0
        },
        "history": [
            {
                "id": "6f1c2a4e-3b5d-4c8e-9a7f-1e2d3c4b5a69",
                "loggedAt": "2024-05-01T07:00:00Z",
                "muscle": "chest",
                "minutes": 20,
                "load": 2
            }
        ],
        "lastEvaluatedTimestamp": "2024-05-01T07:30:00Z"
    }"#;
    std::fs::write(store.path(), text).unwrap();

    let state = store.load().unwrap().unwrap();
    assert_eq!(state.fatigue.get(MuscleGroup::Chest), 40.0);
    assert_eq!(state.fatigue.get(MuscleGroup::Triceps), 4.0);
    assert_eq!(state.history.totals().total_minutes, 20);
    assert!(state.history.latest().unwrap().note.is_none());
}

#[test]
fn test_save_creates_missing_parent_dir() {
    let dir = tempfile::tempdir().unwrap();
    let store = SnapshotStore::with_path(dir.path().join("nested").join("state.json"));
    store.save(&populated_state()).unwrap();
    assert!(store.load().unwrap().is_some());
}
