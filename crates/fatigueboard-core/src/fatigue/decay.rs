//! Day-granular linear recovery.
//!
//! Decay only consumes a whole-day count. Turning two timestamps into that
//! count is the caller's job; [`whole_days_between`] is provided for it.

use chrono::{DateTime, Utc};

use super::state::{FatigueState, MIN_SCORE};
use crate::muscle::MuscleGroup;

/// Subtract `rate_per_day * days_elapsed` from every group, flooring at zero.
///
/// `days_elapsed == 0` hands `state` back untouched.
///
/// # Panics
/// If `rate_per_day` is negative or not finite.
pub fn decay(state: FatigueState, days_elapsed: u32, rate_per_day: f64) -> FatigueState {
    assert!(
        rate_per_day.is_finite() && rate_per_day >= 0.0,
        "decay rate must be finite and non-negative, got {rate_per_day}"
    );

    if days_elapsed == 0 {
        return state;
    }

    let amount = rate_per_day * f64::from(days_elapsed);
    let mut next = state;
    for group in MuscleGroup::ALL {
        let before = next.get(group);
        let after = (before - amount).max(MIN_SCORE);
        if after != before {
            tracing::debug!(muscle = group.id(), before, after, days_elapsed, "decay");
        }
        next.set(group, after);
    }
    next
}

/// Whole 24-hour periods from `from` to `to`, floored.
///
/// A `to` earlier than `from` (clock moved backwards) counts as zero days.
pub fn whole_days_between(from: DateTime<Utc>, to: DateTime<Utc>) -> u32 {
    let days = to.signed_duration_since(from).num_days();
    if days <= 0 {
        0
    } else {
        u32::try_from(days).unwrap_or(u32::MAX)
    }
}

/// Whole days of decay before `score` reaches zero at `rate_per_day`.
///
/// Returns `u32::MAX` when the score is positive but the rate is zero.
pub fn days_to_recover(score: f64, rate_per_day: f64) -> u32 {
    if score <= MIN_SCORE {
        return 0;
    }
    if rate_per_day <= 0.0 || !rate_per_day.is_finite() {
        return u32::MAX;
    }
    let days = (score / rate_per_day).ceil();
    if days >= f64::from(u32::MAX) {
        u32::MAX
    } else {
        days as u32
    }
}
