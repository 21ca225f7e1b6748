//! Persisted snapshot of the application state.
//!
//! The snapshot is a single JSON document:
//!
//! ```json
//! {
//!   "schemaVersion": 1,
//!   "fatigue": { "chest": 98.5, "back": 0.0, ... },
//!   "history": [ { "id": "...", "loggedAt": "...", "muscle": "chest", ... } ],
//!   "lastEvaluatedTimestamp": "2024-05-01T07:30:00Z"
//! }
//! ```
//!
//! Decoding is strict. Anything that does not describe a complete, valid
//! state is rejected, and [`SnapshotStore`] turns that rejection into a
//! fresh initial state instead of an error.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::data_dir;
use crate::app_state::AppState;
use crate::error::StoreError;
use crate::fatigue::FatigueState;
use crate::history::HistoryLog;

/// Schema version written by this build.
pub const SCHEMA_VERSION: u32 = 1;

const SNAPSHOT_FILE: &str = "state.json";

/// Reasons a snapshot document is rejected.
#[derive(Error, Debug)]
pub enum SnapshotError {
    #[error("malformed snapshot: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("snapshot schema version {found} is newer than supported version {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },
}

/// Wire shape of a persisted [`AppState`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Snapshot {
    pub schema_version: u32,
    pub fatigue: FatigueState,
    pub history: HistoryLog,
    pub last_evaluated_timestamp: DateTime<Utc>,
}

impl Snapshot {
    pub fn from_state(state: &AppState) -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            fatigue: state.fatigue,
            history: state.history.clone(),
            last_evaluated_timestamp: state.last_evaluated,
        }
    }

    pub fn into_state(self) -> AppState {
        AppState {
            fatigue: self.fatigue,
            history: self.history,
            last_evaluated: self.last_evaluated_timestamp,
        }
    }

    /// Encode `state` as pretty-printed JSON.
    pub fn encode(state: &AppState) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&Self::from_state(state))
    }

    /// Decode and validate a snapshot document.
    pub fn decode(text: &str) -> Result<AppState, SnapshotError> {
        Self::decode_bytes(text.as_bytes())
    }

    /// Decode raw file contents. Invalid UTF-8 is reported as malformed.
    pub fn decode_bytes(bytes: &[u8]) -> Result<AppState, SnapshotError> {
        let snapshot: Snapshot = serde_json::from_slice(bytes)?;
        if snapshot.schema_version > SCHEMA_VERSION {
            return Err(SnapshotError::UnsupportedVersion {
                found: snapshot.schema_version,
                supported: SCHEMA_VERSION,
            });
        }
        Ok(snapshot.into_state())
    }
}

/// File-backed snapshot storage.
#[derive(Debug, Clone)]
pub struct SnapshotStore {
    path: PathBuf,
}

impl SnapshotStore {
    /// Open the store at `<data_dir>/state.json`.
    pub fn open() -> Result<Self, StoreError> {
        let dir = data_dir().map_err(|e| StoreError::DataDir(e.to_string()))?;
        Ok(Self::with_path(dir.join(SNAPSHOT_FILE)))
    }

    /// Create a store with a custom path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Where a snapshot rejected at `at` is moved.
    ///
    /// The timestamp suffix keeps earlier quarantined files around.
    pub fn quarantine_path(&self, at: DateTime<Utc>) -> PathBuf {
        let stamp = at.format("%Y%m%dT%H%M%S%.3fZ");
        self.path.with_extension(format!("json.corrupt.{stamp}"))
    }

    /// Read the stored state.
    ///
    /// `Ok(None)` means there is no usable prior state: either no file, or a
    /// file that failed to decode (it is moved to [`quarantine_path`]).
    /// Unreadable bytes, including invalid UTF-8, count as a failed decode.
    ///
    /// [`quarantine_path`]: SnapshotStore::quarantine_path
    ///
    /// # Errors
    /// Only I/O failures other than a missing file.
    pub fn load(&self) -> Result<Option<AppState>, StoreError> {
        let bytes = match std::fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::info!(path = %self.path.display(), "no snapshot, starting fresh");
                return Ok(None);
            }
            Err(source) => {
                return Err(StoreError::ReadFailed {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        match Snapshot::decode_bytes(&bytes) {
            Ok(state) => {
                tracing::info!(
                    path = %self.path.display(),
                    sessions = state.history.len(),
                    "loaded snapshot"
                );
                Ok(Some(state))
            }
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "discarding unreadable snapshot");
                self.quarantine();
                Ok(None)
            }
        }
    }

    /// Stored state, or [`AppState::new`] at `now` when there is none.
    pub fn load_or_initial(&self, now: DateTime<Utc>) -> Result<AppState, StoreError> {
        Ok(self.load()?.unwrap_or_else(|| AppState::new(now)))
    }

    /// Persist `state`, replacing the previous snapshot in one rename.
    pub fn save(&self, state: &AppState) -> Result<(), StoreError> {
        let content = Snapshot::encode(state)?;

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| StoreError::WriteFailed {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, content).map_err(|source| StoreError::WriteFailed {
            path: tmp.clone(),
            source,
        })?;
        std::fs::rename(&tmp, &self.path).map_err(|source| StoreError::WriteFailed {
            path: self.path.clone(),
            source,
        })?;

        tracing::info!(path = %self.path.display(), sessions = state.history.len(), "saved snapshot");
        Ok(())
    }

    fn quarantine(&self) {
        let mut at = Utc::now();
        let mut target = self.quarantine_path(at);
        while target.exists() {
            at = at + chrono::Duration::milliseconds(1);
            target = self.quarantine_path(at);
        }
        if let Err(e) = std::fs::rename(&self.path, &target) {
            tracing::warn!(error = %e, "could not move unreadable snapshot aside");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fatigue::ModelParams;
    use crate::muscle::MuscleGroup;
    use crate::session::{Load, Minutes, Session};

    fn sample_state() -> AppState {
        let now = Utc::now();
        let mut state = AppState::new(now);
        state.log_session(
            Session::new(
                MuscleGroup::Chest,
                Minutes::new(45).unwrap(),
                Load::new(3).unwrap(),
                Some("bench".into()),
                now,
            ),
            &ModelParams::default(),
        );
        state
    }

    #[test]
    fn encode_uses_documented_field_names() {
        let json: serde_json::Value =
            serde_json::from_str(&Snapshot::encode(&sample_state()).unwrap()).unwrap();
        assert_eq!(json["schemaVersion"], 1);
        assert_eq!(json["fatigue"]["chest"], 98.5);
        assert_eq!(json["history"][0]["muscle"], "chest");
        assert!(json["lastEvaluatedTimestamp"].is_string());
    }

    #[test]
    fn decode_restores_state() {
        let state = sample_state();
        let text = Snapshot::encode(&state).unwrap();
        assert_eq!(Snapshot::decode(&text).unwrap(), state);
    }

    #[test]
    fn decode_rejects_missing_fields() {
        let mut json: serde_json::Value =
            serde_json::from_str(&Snapshot::encode(&sample_state()).unwrap()).unwrap();
        json.as_object_mut().unwrap().remove("history");
        assert!(matches!(
            Snapshot::decode(&json.to_string()),
            Err(SnapshotError::Malformed(_))
        ));
    }

    #[test]
    fn decode_rejects_unknown_fields() {
        let mut json: serde_json::Value =
            serde_json::from_str(&Snapshot::encode(&sample_state()).unwrap()).unwrap();
        json["theme"] = serde_json::json!("dark");
        assert!(Snapshot::decode(&json.to_string()).is_err());
    }

    #[test]
    fn decode_rejects_newer_schema() {
        let mut json: serde_json::Value =
            serde_json::from_str(&Snapshot::encode(&sample_state()).unwrap()).unwrap();
        json["schemaVersion"] = serde_json::json!(SCHEMA_VERSION + 1);
        assert!(matches!(
            Snapshot::decode(&json.to_string()),
            Err(SnapshotError::UnsupportedVersion { found: 2, supported: 1 })
        ));
    }

    #[test]
    fn decode_bytes_rejects_invalid_utf8() {
        assert!(matches!(
            Snapshot::decode_bytes(&[0xff, 0xfe, b'{', 0x80]),
            Err(SnapshotError::Malformed(_))
        ));
    }

    #[test]
    fn decode_rejects_overlong_note() {
        let mut json: serde_json::Value =
            serde_json::from_str(&Snapshot::encode(&sample_state()).unwrap()).unwrap();
        json["history"][0]["note"] = serde_json::json!("x".repeat(2000));
        assert!(matches!(
            Snapshot::decode(&json.to_string()),
            Err(SnapshotError::Malformed(_))
        ));
    }

    #[test]
    fn quarantine_path_is_timestamped() {
        let store = SnapshotStore::with_path("/data/state.json");
        let at = DateTime::parse_from_rfc3339("2024-05-01T07:30:00.250Z")
            .unwrap()
            .with_timezone(&Utc);
        assert_eq!(
            store.quarantine_path(at),
            PathBuf::from("/data/state.json.corrupt.20240501T073000.250Z")
        );
    }

    #[test]
    fn decode_rejects_out_of_range_session() {
        let mut json: serde_json::Value =
            serde_json::from_str(&Snapshot::encode(&sample_state()).unwrap()).unwrap();
        json["history"][0]["load"] = serde_json::json!(9);
        assert!(Snapshot::decode(&json.to_string()).is_err());
    }
}
