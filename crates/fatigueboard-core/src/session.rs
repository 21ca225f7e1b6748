//! Logged workout sessions and their boundary validation.
//!
//! A [`Session`] is immutable once created. Its numeric fields use newtypes
//! that cannot hold out-of-range values, so anything that reaches the
//! fatigue model has already passed validation. Raw user input enters
//! through [`SessionDraft::validate`].

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ValidationError;
use crate::muscle::MuscleGroup;

/// Longest accepted free-text note, in characters.
pub const MAX_NOTE_CHARS: usize = 500;

/// Perceived intensity on a 1-5 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Load(u8);

impl Load {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    /// Strict constructor: rejects anything outside 1-5.
    pub fn new(value: u8) -> Result<Self, ValidationError> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(ValidationError::InvalidLoad {
                load: i64::from(value),
            })
        }
    }

    /// Normalize raw form input: round half away from zero, then clamp to 1-5.
    pub fn from_input(raw: f64) -> Result<Self, ValidationError> {
        if !raw.is_finite() {
            return Err(ValidationError::NonFiniteLoad(raw));
        }
        let clamped = raw.round().clamp(f64::from(Self::MIN), f64::from(Self::MAX));
        Ok(Self(clamped as u8))
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Load {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Load> for u8 {
    fn from(load: Load) -> Self {
        load.0
    }
}

/// Session duration in whole minutes, at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Minutes(u32);

impl Minutes {
    pub fn new(value: u32) -> Result<Self, ValidationError> {
        if value >= 1 {
            Ok(Self(value))
        } else {
            Err(ValidationError::InvalidMinutes {
                minutes: i64::from(value),
            })
        }
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl TryFrom<u32> for Minutes {
    type Error = ValidationError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Minutes> for u32 {
    fn from(minutes: Minutes) -> Self {
        minutes.0
    }
}

/// Unique identifier of a logged session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(Uuid);

impl SessionId {
    /// Fresh random (v4) identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for SessionId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for SessionId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s.trim()).map(Self)
    }
}

/// One logged workout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Session {
    pub id: SessionId,
    pub logged_at: DateTime<Utc>,
    pub muscle: MuscleGroup,
    pub minutes: Minutes,
    pub load: Load,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_note"
    )]
    pub note: Option<String>,
}

/// Trim a free-text note; blank becomes `None`, overlong is rejected.
pub(crate) fn normalize_note(note: Option<String>) -> Result<Option<String>, ValidationError> {
    let Some(text) = note else {
        return Ok(None);
    };
    let trimmed = text.trim();
    let len = trimmed.chars().count();
    if len > MAX_NOTE_CHARS {
        return Err(ValidationError::NoteTooLong {
            len,
            max: MAX_NOTE_CHARS,
        });
    }
    Ok((!trimmed.is_empty()).then(|| trimmed.to_string()))
}

fn deserialize_note<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    normalize_note(raw).map_err(serde::de::Error::custom)
}

impl Session {
    /// Create a session with a fresh identifier.
    pub fn new(
        muscle: MuscleGroup,
        minutes: Minutes,
        load: Load,
        note: Option<String>,
        logged_at: DateTime<Utc>,
    ) -> Self {
        Self::with_id(SessionId::new(), muscle, minutes, load, note, logged_at)
    }

    pub fn with_id(
        id: SessionId,
        muscle: MuscleGroup,
        minutes: Minutes,
        load: Load,
        note: Option<String>,
        logged_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            logged_at,
            muscle,
            minutes,
            load,
            note,
        }
    }
}

/// Raw session input as captured by a form or command line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionDraft {
    pub muscle: String,
    pub minutes: i64,
    pub load: f64,
    #[serde(default)]
    pub note: Option<String>,
}

impl SessionDraft {
    /// Validate and normalize into a [`Session`] logged at `now`.
    ///
    /// Muscle and minutes are rejected when out of domain; load is rounded
    /// and clamped onto the 1-5 scale.
    pub fn validate(self, now: DateTime<Utc>) -> Result<Session, ValidationError> {
        let muscle: MuscleGroup = self.muscle.parse()?;

        let minutes = u32::try_from(self.minutes)
            .map_err(|_| ValidationError::InvalidMinutes {
                minutes: self.minutes,
            })
            .and_then(Minutes::new)?;

        let load = Load::from_input(self.load)?;

        let note = normalize_note(self.note)?;

        Ok(Session::new(muscle, minutes, load, note, now))
    }
}
