//! Append-only session history, newest first.
//!
//! The history is an audit trail: removing an entry never touches the
//! fatigue state it already contributed to.

use std::collections::{HashSet, VecDeque};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::muscle::MuscleGroup;
use crate::session::{Session, SessionId};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum HistoryError {
    #[error("duplicate session id {0}")]
    DuplicateId(SessionId),
}

/// Aggregate counters over a history.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryTotals {
    pub session_count: usize,
    pub total_minutes: u64,
}

/// Ordered session log, most recent first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Session>", into = "Vec<Session>")]
pub struct HistoryLog {
    entries: VecDeque<Session>,
}

impl HistoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `session` as the most recent entry.
    ///
    /// # Panics
    /// If a session with the same id is already in the log.
    pub fn append(&mut self, session: Session) {
        assert!(
            self.get(&session.id).is_none(),
            "session id {} already present in history",
            session.id
        );
        self.entries.push_front(session);
    }

    /// Remove the entry with `id`, if any. Removing an unknown id is a no-op.
    pub fn remove(&mut self, id: &SessionId) -> Option<Session> {
        let pos = self.entries.iter().position(|s| &s.id == id)?;
        self.entries.remove(pos)
    }

    pub fn get(&self, id: &SessionId) -> Option<&Session> {
        self.entries.iter().find(|s| &s.id == id)
    }

    /// Most recent first.
    pub fn iter(&self) -> impl Iterator<Item = &Session> + '_ {
        self.entries.iter()
    }

    pub fn latest(&self) -> Option<&Session> {
        self.entries.front()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn totals(&self) -> HistoryTotals {
        self.entries.iter().fold(HistoryTotals::default(), |acc, s| HistoryTotals {
            session_count: acc.session_count + 1,
            total_minutes: acc.total_minutes + u64::from(s.minutes.get()),
        })
    }

    /// Total minutes per group, in registry order.
    pub fn minutes_by_muscle(&self) -> Vec<(MuscleGroup, u64)> {
        let mut totals = [0u64; MuscleGroup::COUNT];
        for s in &self.entries {
            totals[s.muscle.index()] += u64::from(s.minutes.get());
        }
        MuscleGroup::ALL
            .into_iter()
            .map(|g| (g, totals[g.index()]))
            .collect()
    }
}

impl TryFrom<Vec<Session>> for HistoryLog {
    type Error = HistoryError;

    /// Takes sessions already in most-recent-first order.
    fn try_from(sessions: Vec<Session>) -> Result<Self, Self::Error> {
        let mut seen = HashSet::with_capacity(sessions.len());
        for s in &sessions {
            if !seen.insert(s.id) {
                return Err(HistoryError::DuplicateId(s.id));
            }
        }
        Ok(Self {
            entries: sessions.into(),
        })
    }
}

impl From<HistoryLog> for Vec<Session> {
    fn from(log: HistoryLog) -> Self {
        log.entries.into()
    }
}
