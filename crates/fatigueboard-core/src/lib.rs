//! # Fatigueboard Core Library
//!
//! Tracks per-muscle-group training fatigue. Users log workout sessions
//! (muscle group, duration, perceived load) and the library maintains a
//! decaying fatigue score per group, including spillover into synergist
//! groups. The CLI is a thin skin over this crate.
//!
//! ## Architecture
//!
//! - **Muscle registry**: closed set of groups with a directional
//!   synergist table
//! - **Fatigue model**: pure functions mapping (state, elapsed days,
//!   session) to the next bounded state
//! - **History**: append-only, most-recent-first session log
//! - **Storage**: JSON snapshot of the whole state plus TOML configuration
//!
//! ## Key Components
//!
//! - [`FatigueState`]: one score in [0, 100] per muscle group
//! - [`decay`] / [`apply`]: the two state transitions
//! - [`AppState`]: owned state bundle handed between transitions
//! - [`SnapshotStore`]: load/save with fallback to the initial state

pub mod app_state;
pub mod error;
pub mod fatigue;
pub mod history;
pub mod muscle;
pub mod session;
pub mod storage;

pub use app_state::{AppState, LoggedSession};
pub use error::{ConfigError, CoreError, StoreError, ValidationError};
pub use fatigue::{
    apply, days_to_recover, decay, whole_days_between, Contribution, FatigueModel, FatigueState,
    ModelParams, RecoveryLevel,
};
pub use history::{HistoryLog, HistoryTotals};
pub use muscle::MuscleGroup;
pub use session::{Load, Minutes, Session, SessionDraft, SessionId};
pub use storage::{Config, Snapshot, SnapshotStore};
