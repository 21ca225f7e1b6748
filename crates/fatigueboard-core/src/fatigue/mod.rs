//! Fatigue model: bounded per-muscle scores, day-granular decay and
//! session accumulation with spillover.
//!
//! Every operation here is a pure function from the current state to the
//! next one. [`FatigueModel`] bundles the functions with a fixed set of
//! [`ModelParams`] for callers that do not want to thread them through.

mod accumulator;
mod decay;
mod params;
mod recovery;
mod state;

pub use accumulator::{apply, apply_contribution, contribution, Contribution};
pub use decay::{days_to_recover, decay, whole_days_between};
pub use params::ModelParams;
pub use recovery::RecoveryLevel;
pub use state::{FatigueState, FatigueStateError, MAX_SCORE, MIN_SCORE};

use crate::session::Session;

/// Fatigue model bound to one parameter set.
#[derive(Debug, Clone, Default)]
pub struct FatigueModel {
    params: ModelParams,
}

impl FatigueModel {
    /// Create a model with the reference parameters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with custom parameters.
    ///
    /// # Panics
    /// If any parameter is negative or not finite.
    pub fn with_params(params: ModelParams) -> Self {
        params.assert_valid();
        Self { params }
    }

    pub fn params(&self) -> &ModelParams {
        &self.params
    }

    /// Recover `days_elapsed` days at the configured rate.
    pub fn decay(&self, state: FatigueState, days_elapsed: u32) -> FatigueState {
        decay(state, days_elapsed, self.params.decay_per_day)
    }

    /// Add one session's fatigue.
    pub fn apply(&self, state: FatigueState, session: &Session) -> FatigueState {
        apply(state, session, &self.params)
    }

    pub fn contribution(&self, session: &Session) -> Contribution {
        contribution(session, &self.params)
    }

    /// Days until `score` decays to zero at the configured rate.
    pub fn days_to_recover(&self, score: f64) -> u32 {
        days_to_recover(score, self.params.decay_per_day)
    }
}
