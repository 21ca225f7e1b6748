//! Session-to-fatigue accumulation with first-degree spillover.

use serde::Serialize;

use super::params::ModelParams;
use super::state::{FatigueState, MAX_SCORE};
use crate::muscle::MuscleGroup;
use crate::session::Session;

/// Fatigue a single session contributes, before clamping.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Contribution {
    pub muscle: MuscleGroup,
    /// Direct delta for the trained group.
    pub delta: f64,
    /// Increment for each synergist, already rounded.
    pub spill: f64,
    pub synergists: &'static [MuscleGroup],
}

/// Compute the direct delta and spillover for `session`.
///
/// `delta = base + load_factor * load * minutes`; the spill is
/// `spill_ratio * delta` rounded half away from zero.
pub fn contribution(session: &Session, params: &ModelParams) -> Contribution {
    params.assert_valid();

    // Integer product first keeps delta exact for the reference parameters.
    let work = u64::from(session.load.get()) * u64::from(session.minutes.get());
    let delta = params.base_fatigue + params.load_factor * work as f64;
    let spill = (delta * params.spill_ratio).round();

    Contribution {
        muscle: session.muscle,
        delta,
        spill,
        synergists: session.muscle.synergists(),
    }
}

/// Apply one session to `state`.
///
/// The trained group and each synergist are clamped at 100 independently.
/// Spillover does not propagate past direct synergists.
///
/// # Panics
/// If `params` holds a negative or non-finite value.
pub fn apply(state: FatigueState, session: &Session, params: &ModelParams) -> FatigueState {
    let contribution = contribution(session, params);
    apply_contribution(state, &contribution)
}

/// Apply a precomputed [`Contribution`].
pub fn apply_contribution(state: FatigueState, contribution: &Contribution) -> FatigueState {
    let mut next = state;

    let target = contribution.muscle;
    let before = next.get(target);
    let after = (before + contribution.delta).min(MAX_SCORE);
    next.set(target, after);
    tracing::debug!(muscle = target.id(), before, after, delta = contribution.delta, "direct");

    for &neighbor in contribution.synergists {
        let before = next.get(neighbor);
        let after = (before + contribution.spill).min(MAX_SCORE);
        next.set(neighbor, after);
        tracing::debug!(muscle = neighbor.id(), before, after, spill = contribution.spill, "spillover");
    }

    next
}
