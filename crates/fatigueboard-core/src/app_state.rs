//! Owned application state and its transitions.
//!
//! [`AppState`] pairs the fatigue scores with the session history and the
//! instant decay was last evaluated. The owner applies one transition at a
//! time and persists the result before starting the next one.

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

use crate::fatigue::{self, Contribution, FatigueState, ModelParams};
use crate::history::HistoryLog;
use crate::session::{Session, SessionId};

#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    pub fatigue: FatigueState,
    pub history: HistoryLog,
    pub last_evaluated: DateTime<Utc>,
}

/// Outcome of [`AppState::log_session`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoggedSession {
    pub session: Session,
    pub contribution: Contribution,
}

impl AppState {
    /// Fresh state: all scores zero, empty history, evaluated at `now`.
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            fatigue: FatigueState::initial(),
            history: HistoryLog::new(),
            last_evaluated: now,
        }
    }

    /// Whole days of decay owed at `now`.
    pub fn days_elapsed(&self, now: DateTime<Utc>) -> u32 {
        fatigue::whole_days_between(self.last_evaluated, now)
    }

    /// Apply any decay owed at `now` and return the number of days applied.
    ///
    /// `last_evaluated` moves forward by exactly that many days, so the
    /// partial day in progress is carried over to the next evaluation.
    pub fn catch_up(&mut self, now: DateTime<Utc>, params: &ModelParams) -> u32 {
        let days = self.days_elapsed(now);
        if days == 0 {
            return 0;
        }
        self.fatigue = fatigue::decay(self.fatigue, days, params.decay_per_day);
        self.last_evaluated += Duration::days(i64::from(days));
        tracing::debug!(days, last_evaluated = %self.last_evaluated, "caught up decay");
        days
    }

    /// Add `session` to the fatigue state and the history.
    pub fn log_session(&mut self, session: Session, params: &ModelParams) -> LoggedSession {
        let contribution = fatigue::contribution(&session, params);
        self.fatigue = fatigue::apply_contribution(self.fatigue, &contribution);
        self.history.append(session.clone());
        tracing::info!(
            id = %session.id,
            muscle = session.muscle.id(),
            delta = contribution.delta,
            "logged session"
        );
        LoggedSession {
            session,
            contribution,
        }
    }

    /// Drop a session from the history. Fatigue it caused stays in place.
    pub fn delete_session(&mut self, id: &SessionId) -> Option<Session> {
        let removed = self.history.remove(id);
        if removed.is_some() {
            tracing::info!(%id, "deleted session");
        }
        removed
    }

    /// Zero every score, keep the history.
    pub fn reset(&mut self, now: DateTime<Utc>) {
        self.fatigue = FatigueState::initial();
        self.last_evaluated = now;
    }

    /// Zero every score and drop the history.
    pub fn clear(&mut self, now: DateTime<Utc>) {
        *self = Self::new(now);
    }
}
