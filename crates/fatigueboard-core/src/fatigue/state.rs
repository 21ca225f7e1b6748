//! Per-muscle fatigue scores.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::muscle::MuscleGroup;

/// Lowest possible fatigue score.
pub const MIN_SCORE: f64 = 0.0;
/// Highest possible fatigue score.
pub const MAX_SCORE: f64 = 100.0;

/// Rejected score tables.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FatigueStateError {
    #[error("missing score for {0}")]
    Missing(MuscleGroup),

    #[error("duplicate score for {0}")]
    Duplicate(MuscleGroup),

    #[error("score {score} for {group} is outside [0, 100]")]
    OutOfRange { group: MuscleGroup, score: f64 },
}

/// One bounded score per registry group.
///
/// Total by construction: the backing array has a slot for every
/// [`MuscleGroup`]. Scores only change through
/// [`decay`](crate::fatigue::decay) and [`apply`](crate::fatigue::apply).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(
    try_from = "BTreeMap<MuscleGroup, f64>",
    into = "BTreeMap<MuscleGroup, f64>"
)]
pub struct FatigueState {
    scores: [f64; MuscleGroup::COUNT],
}

impl FatigueState {
    /// Every group at zero.
    pub const fn initial() -> Self {
        Self {
            scores: [MIN_SCORE; MuscleGroup::COUNT],
        }
    }

    /// Build a state from a complete score table.
    ///
    /// Every group must appear exactly once with a finite score in [0, 100].
    pub fn from_scores<I>(scores: I) -> Result<Self, FatigueStateError>
    where
        I: IntoIterator<Item = (MuscleGroup, f64)>,
    {
        let mut slots: [Option<f64>; MuscleGroup::COUNT] = [None; MuscleGroup::COUNT];
        for (group, score) in scores {
            check_range(group, score)?;
            let slot = &mut slots[group.index()];
            if slot.is_some() {
                return Err(FatigueStateError::Duplicate(group));
            }
            *slot = Some(score);
        }

        let mut state = Self::initial();
        for group in MuscleGroup::ALL {
            state.scores[group.index()] =
                slots[group.index()].ok_or(FatigueStateError::Missing(group))?;
        }
        Ok(state)
    }

    /// Copy of this state with one group's score replaced.
    pub fn with_score(mut self, group: MuscleGroup, score: f64) -> Result<Self, FatigueStateError> {
        check_range(group, score)?;
        self.scores[group.index()] = score;
        Ok(self)
    }

    pub fn get(&self, group: MuscleGroup) -> f64 {
        self.scores[group.index()]
    }

    /// `(group, score)` pairs in registry order.
    pub fn iter(&self) -> impl Iterator<Item = (MuscleGroup, f64)> + '_ {
        MuscleGroup::ALL.into_iter().map(move |g| (g, self.get(g)))
    }

    /// True when every group is at zero.
    pub fn is_initial(&self) -> bool {
        self.scores.iter().all(|s| *s == MIN_SCORE)
    }

    /// Most fatigued group, first in registry order on ties. `None` when all are zero.
    pub fn most_fatigued(&self) -> Option<(MuscleGroup, f64)> {
        self.iter()
            .filter(|(_, s)| *s > MIN_SCORE)
            .fold(None, |best, (g, s)| match best {
                Some((_, bs)) if bs >= s => best,
                _ => Some((g, s)),
            })
    }

    pub(crate) fn set(&mut self, group: MuscleGroup, score: f64) {
        debug_assert!((MIN_SCORE..=MAX_SCORE).contains(&score));
        self.scores[group.index()] = score;
    }
}

impl Default for FatigueState {
    fn default() -> Self {
        Self::initial()
    }
}

impl TryFrom<BTreeMap<MuscleGroup, f64>> for FatigueState {
    type Error = FatigueStateError;

    fn try_from(map: BTreeMap<MuscleGroup, f64>) -> Result<Self, Self::Error> {
        Self::from_scores(map)
    }
}

impl From<FatigueState> for BTreeMap<MuscleGroup, f64> {
    fn from(state: FatigueState) -> Self {
        state.iter().collect()
    }
}

fn check_range(group: MuscleGroup, score: f64) -> Result<(), FatigueStateError> {
    if score.is_finite() && (MIN_SCORE..=MAX_SCORE).contains(&score) {
        Ok(())
    } else {
        Err(FatigueStateError::OutOfRange { group, score })
    }
}
